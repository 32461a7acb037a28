use crate::constants::{BROADCAST_SLIDER_ID, COVERAGE_SLIDER_ID, LOAD_INPUT_ID, SAVE_BUTTON_ID};
use crate::{dom, io, overlay};
use board_core::{Board, RADIUS_SLIDER_MAX, RADIUS_SLIDER_MIN};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[inline]
fn clamp_radius(v: f64) -> f32 {
    (v as f32).clamp(RADIUS_SLIDER_MIN, RADIUS_SLIDER_MAX)
}

/// Radius sliders push their value into the board on every `input` event.
pub fn wire_radius_sliders(document: &web::Document, board: &Rc<RefCell<Board>>) {
    let b = board.clone();
    dom::add_input_listener(document, BROADCAST_SLIDER_ID, "input", move |el| {
        let v = el.value_as_number();
        if v.is_finite() {
            b.borrow_mut().set_broadcast_radius(clamp_radius(v));
        }
    });

    let b = board.clone();
    dom::add_input_listener(document, COVERAGE_SLIDER_ID, "input", move |el| {
        let v = el.value_as_number();
        if v.is_finite() {
            b.borrow_mut().set_coverage_radius(clamp_radius(v));
        }
    });
}

/// Seed the board from the sliders' initial values, if present.
pub fn read_initial_radii(document: &web::Document, board: &mut Board) {
    if let Some(v) = dom::slider_value(document, BROADCAST_SLIDER_ID) {
        board.set_broadcast_radius(clamp_radius(v));
    }
    if let Some(v) = dom::slider_value(document, COVERAGE_SLIDER_ID) {
        board.set_coverage_radius(clamp_radius(v));
    }
    log::info!(
        "[controls] radii broadcast={:.1} coverage={:.1}",
        board.config.broadcast_radius,
        board.config.coverage_radius
    );
}

pub fn wire_save_button(document: &web::Document, board: &Rc<RefCell<Board>>) {
    let b = board.clone();
    let doc = document.clone();
    dom::add_click_listener(document, SAVE_BUTTON_ID, move || {
        let result = b
            .borrow()
            .to_json()
            .map_err(anyhow::Error::from)
            .and_then(|json| io::download_json(&doc, &json));
        match result {
            Ok(()) => log::info!("[io] exported {} sensors", b.borrow().len()),
            Err(e) => {
                log::error!("[io] export failed: {:?}", e);
                overlay::update_status(&doc, &format!("Export failed: {e}"));
            }
        }
    });
}

/// File input `change` reads the file asynchronously and replaces the board.
pub fn wire_load_input(document: &web::Document, board: &Rc<RefCell<Board>>) {
    let b = board.clone();
    let doc = document.clone();
    dom::add_input_listener(document, LOAD_INPUT_ID, "change", move |el| {
        let input = el.clone();
        let board = b.clone();
        let doc = doc.clone();
        spawn_local(async move {
            match io::read_selected_file(&input).await {
                Ok(Some(file)) => {
                    let loaded = {
                        let mut b = board.borrow_mut();
                        b.load_json(&file.text).map(|()| (b.config, b.len()))
                    };
                    match loaded {
                        Ok((config, count)) => {
                            dom::set_slider_value(&doc, BROADCAST_SLIDER_ID, config.broadcast_radius);
                            dom::set_slider_value(&doc, COVERAGE_SLIDER_ID, config.coverage_radius);
                            overlay::update_status(
                                &doc,
                                &format!("Loaded {}", overlay::status_for_count(count)),
                            );
                        }
                        Err(e) => {
                            log::warn!("[io] import of {} rejected: {}", file.name, e);
                            overlay::update_status(&doc, &format!("Import failed: {}: {e}", file.name));
                        }
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    log::warn!("[io] import rejected: {:#}", e);
                    overlay::update_status(&doc, &format!("Import failed: {e}"));
                }
            }
            // allow re-selecting the same file
            input.set_value("");
        });
    });
}
