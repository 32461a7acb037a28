#![cfg(target_arch = "wasm32")]
use board_core::{Board, BoardConfig, CanvasExtent, Palette};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod io;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("board-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let extent = CanvasExtent::default();
    dom::sync_canvas_backing_size(&canvas, extent.width, extent.height);

    let mut board = Board::new(BoardConfig::default(), extent);
    events::read_initial_radii(&document, &mut board);
    let board = Rc::new(RefCell::new(board));

    let renderer = render::Renderer::new(&canvas, Palette::default())?;
    overlay::paint_legend(&document, renderer.palette());
    overlay::update_status(&document, &overlay::status_for_count(0));

    // ---------------- Interaction state ----------------
    let pointer = Rc::new(RefCell::new(input::PointerState::default()));

    events::wire_pointer_handlers(events::PointerWiring {
        canvas: canvas.clone(),
        document: document.clone(),
        board: board.clone(),
        pointer,
    });
    events::wire_radius_sliders(&document, &board);
    events::wire_save_button(&document, &board);
    events::wire_load_input(&document, &board);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(board, renderer)));
    frame::start_loop(frame_ctx);

    log::info!(
        "[board] ready {}x{} canvas",
        extent.width as u32,
        extent.height as u32
    );
    Ok(())
}
