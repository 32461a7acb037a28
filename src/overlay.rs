use crate::constants::{LEGEND_BROADCAST_ID, LEGEND_COVERAGE_ID, LEGEND_FENCE_ID, STATUS_LINE_ID};
use board_core::Palette;
use web_sys as web;

/// Paint the legend swatches with the palette the renderer uses.
pub fn paint_legend(document: &web::Document, palette: &Palette) {
    crate::dom::set_background(document, LEGEND_BROADCAST_ID, &palette.broadcast.to_css());
    crate::dom::set_background(document, LEGEND_COVERAGE_ID, &palette.coverage.to_css());
    crate::dom::set_background(document, LEGEND_FENCE_ID, &palette.fence_dot.to_css());
}

/// Replace the status line text.
pub fn update_status(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id(STATUS_LINE_ID) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn status_for_count(count: usize) -> String {
    match count {
        1 => "1 sensor".to_string(),
        n => format!("{n} sensors"),
    }
}
