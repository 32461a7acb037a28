use crate::render::Renderer;
use board_core::Board;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub board: Rc<RefCell<Board>>,
    pub renderer: Renderer,
    render_failed: bool,
}

impl FrameContext {
    pub fn new(board: Rc<RefCell<Board>>, renderer: Renderer) -> Self {
        Self {
            board,
            renderer,
            render_failed: false,
        }
    }

    pub fn frame(&mut self) {
        let board = self.board.borrow();
        match self.renderer.draw(&board) {
            Ok(()) => self.render_failed = false,
            // log once per failure streak, not every refresh
            Err(e) if !self.render_failed => {
                log::error!("render error: {:?}", e);
                self.render_failed = true;
            }
            Err(_) => {}
        }
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) {
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let Some(cb) = tick_clone.borrow().as_ref() {
            request_frame(cb);
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = tick.borrow().as_ref() {
        request_frame(cb);
    }
}
