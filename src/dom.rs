use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] missing #{element_id}, click handler not wired");
    }
}

/// Wire `event` on an `<input>` and hand the element to the handler.
pub fn add_input_listener(
    document: &web::Document,
    element_id: &str,
    event: &str,
    mut handler: impl FnMut(&web::HtmlInputElement) + 'static,
) {
    let Some(input) = input_by_id(document, element_id) else {
        log::warn!("[dom] missing <input id={element_id}>, {event} handler not wired");
        return;
    };
    let target = input.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(
        Box::new(move || handler(&target)) as Box<dyn FnMut()>
    );
    _ = input.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn input_by_id(document: &web::Document, element_id: &str) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}

/// Slider value, or `None` when the input is missing or not numeric.
#[inline]
pub fn slider_value(document: &web::Document, element_id: &str) -> Option<f64> {
    input_by_id(document, element_id)
        .map(|el| el.value_as_number())
        .filter(|v| v.is_finite())
}

#[inline]
pub fn set_slider_value(document: &web::Document, element_id: &str, value: f32) {
    if let Some(el) = input_by_id(document, element_id) {
        el.set_value_as_number(value as f64);
    }
}

#[inline]
pub fn set_background(document: &web::Document, element_id: &str, css_color: &str) {
    if let Some(el) = document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        _ = el.style().set_property("background-color", css_color);
    }
}

/// Pin the canvas backing store to the board extent so pointer math and
/// drawing share one coordinate space.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, width: f32, height: f32) {
    canvas.set_width((width as u32).max(1));
    canvas.set_height((height as u32).max(1));
}
