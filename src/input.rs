use board_core::PointerButton;
use glam::Vec2;
use web_sys as web;

/// Browser-side pointer bookkeeping; the gesture itself lives in the board.
///
/// Only one pointer drives a gesture at a time. Presses from other pointers
/// (a second finger, a pen while the mouse is held) are ignored until the
/// owning pointer is released.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    active: Option<(i32, PointerButton)>,
}

impl PointerState {
    /// Claim the gesture for `pointer_id`. Returns false if another press owns it.
    pub fn press(&mut self, pointer_id: i32, button: PointerButton) -> bool {
        if self.active.is_some() {
            return false;
        }
        self.active = Some((pointer_id, button));
        true
    }

    /// Whether `pointer_id` owns the current gesture.
    #[inline]
    pub fn owns(&self, pointer_id: i32) -> bool {
        matches!(self.active, Some((id, _)) if id == pointer_id)
    }

    /// End the gesture if `pointer_id` owns it, returning the pressed button.
    pub fn release(&mut self, pointer_id: i32) -> Option<PointerButton> {
        if !self.owns(pointer_id) {
            return None;
        }
        self.active.take().map(|(_, button)| button)
    }

    pub fn is_down(&self) -> bool {
        self.active.is_some()
    }
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    css_to_canvas_px(
        Vec2::new(
            ev.client_x() as f32 - rect.left() as f32,
            ev.client_y() as f32 - rect.top() as f32,
        ),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}

/// Scale a CSS-pixel offset inside the element to backing-store pixels.
/// A collapsed element (zero CSS size) maps 1:1.
#[inline]
pub fn css_to_canvas_px(css: Vec2, css_size: Vec2, backing_size: Vec2) -> Vec2 {
    if css_size.x > 0.0 && css_size.y > 0.0 {
        css / css_size * backing_size
    } else {
        css
    }
}

#[inline]
pub fn pointer_button(ev: &web::PointerEvent) -> Option<PointerButton> {
    PointerButton::from_dom_button(ev.button())
}
