use crate::input;
use crate::overlay;
use board_core::{Board, PointerOutcome};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub board: Rc<RefCell<Board>>,
    pub pointer: Rc<RefCell<input::PointerState>>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_pointercancel(&w);
    suppress_context_menu(&w.canvas);
}

fn add_listener(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(web::PointerEvent) + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(
        Box::new(handler) as Box<dyn FnMut(web::PointerEvent)>
    );
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &PointerWiring) {
    let w2 = w.clone();
    add_listener(&w.canvas, "pointerdown", move |ev| {
        let Some(button) = input::pointer_button(&ev) else {
            return;
        };
        if !ev.is_primary() || !w2.pointer.borrow_mut().press(ev.pointer_id(), button) {
            return;
        }
        let pos = input::pointer_canvas_px(&ev, &w2.canvas);
        let mut board = w2.board.borrow_mut();
        board.begin_drag(pos, button);
        if let Some(sel) = board.selection() {
            log::info!("[pointer] grabbed sensor {} ({:?})", sel.index, sel.action);
        }
        _ = w2.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    });
}

// Moves arrive on the window so drags continue past the canvas edge.
fn wire_pointermove(w: &PointerWiring) {
    let w2 = w.clone();
    let Some(wnd) = web::window() else {
        return;
    };
    add_listener(&wnd, "pointermove", move |ev| {
        if !w2.pointer.borrow().owns(ev.pointer_id()) {
            return;
        }
        let pos = input::pointer_canvas_px(&ev, &w2.canvas);
        w2.board.borrow_mut().update_drag(pos);
    });
}

fn wire_pointerup(w: &PointerWiring) {
    let w2 = w.clone();
    let Some(wnd) = web::window() else {
        return;
    };
    add_listener(&wnd, "pointerup", move |ev| {
        // Only finish gestures that started on the canvas.
        let Some(button) = w2.pointer.borrow_mut().release(ev.pointer_id()) else {
            return;
        };
        let pos = input::pointer_canvas_px(&ev, &w2.canvas);
        let (outcome, count) = {
            let mut board = w2.board.borrow_mut();
            let outcome = board.end_drag(pos, button);
            (outcome, board.len())
        };
        match outcome {
            PointerOutcome::Created(i) => {
                log::info!("[pointer] placed sensor {} at ({:.0},{:.0})", i, pos.x, pos.y);
                overlay::update_status(&w2.document, &overlay::status_for_count(count));
            }
            PointerOutcome::Moved(i) => {
                log::info!("[pointer] moved sensor {} to ({:.0},{:.0})", i, pos.x, pos.y);
            }
            PointerOutcome::FenceToggled(i, fence) => {
                log::info!("[pointer] sensor {} fence={}", i, fence);
            }
            PointerOutcome::Ignored => {}
        }
        _ = w2.canvas.release_pointer_capture(ev.pointer_id());
    });
}

fn wire_pointercancel(w: &PointerWiring) {
    let w2 = w.clone();
    add_listener(&w.canvas, "pointercancel", move |ev| {
        if w2.pointer.borrow_mut().release(ev.pointer_id()).is_none() {
            return;
        }
        w2.board.borrow_mut().cancel_drag();
        log::info!("[pointer] gesture cancelled");
    });
}

fn suppress_context_menu(canvas: &web::HtmlCanvasElement) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
    }) as Box<dyn FnMut(web::Event)>);
    _ = canvas.add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
    closure.forget();
}
