//! Canvas 2D replay of the board's draw passes.
//!
//! This is the only module that touches [`web::CanvasRenderingContext2d`].
//! It reads the board and never mutates it.

use board_core::{draw_passes, Board, Circle, Palette};
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct Renderer {
    ctx: web::CanvasRenderingContext2d,
    palette: Palette,
    background_css: String,
}

impl Renderer {
    pub fn new(canvas: &web::HtmlCanvasElement, palette: Palette) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            ctx,
            background_css: palette.background.to_css(),
            palette,
        })
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Clear and draw broadcast halos, coverage halos, then dots.
    pub fn draw(&self, board: &Board) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let w = board.extent.width as f64;
        let h = board.extent.height as f64;
        ctx.set_fill_style_str(&self.background_css);
        ctx.fill_rect(0.0, 0.0, w, h);

        for pass in draw_passes(board, &self.palette) {
            for circle in &pass.circles {
                self.draw_circle(circle)?;
            }
        }
        Ok(())
    }

    fn draw_circle(&self, c: &Circle) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.arc(c.center.x as f64, c.center.y as f64, c.radius as f64, 0.0, TAU)?;
        ctx.set_fill_style_str(&c.fill.to_css());
        ctx.fill();
        if let Some(stroke) = c.stroke {
            ctx.set_stroke_style_str(&stroke.to_css());
            ctx.stroke();
        }
        Ok(())
    }
}
