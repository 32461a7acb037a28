//! Per-frame draw list.
//!
//! Passes are always emitted bottom to top: broadcast halos, coverage halos,
//! then marker dots. Renderers must replay them in array order.

use glam::Vec2;

use crate::board::Board;
use crate::palette::{Palette, Rgba};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Broadcast,
    Coverage,
    Dot,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
    pub fill: Rgba,
    /// Outline color; `None` draws fill only.
    pub stroke: Option<Rgba>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DrawPass {
    pub layer: Layer,
    pub circles: Vec<Circle>,
}

pub fn draw_passes(board: &Board, palette: &Palette) -> [DrawPass; 3] {
    let halo = |layer: Layer, radius: f32, fill: Rgba| DrawPass {
        layer,
        circles: board
            .markers
            .iter()
            .map(|m| Circle {
                center: m.position,
                radius,
                fill,
                stroke: None,
            })
            .collect(),
    };

    let dots = DrawPass {
        layer: Layer::Dot,
        circles: board
            .markers
            .iter()
            .map(|m| {
                let color = if m.fence {
                    palette.fence_dot
                } else {
                    palette.dot
                };
                Circle {
                    center: m.position,
                    radius: palette.dot_radius,
                    fill: color,
                    stroke: Some(color),
                }
            })
            .collect(),
    };

    [
        halo(
            Layer::Broadcast,
            board.config.broadcast_radius,
            palette.broadcast,
        ),
        halo(Layer::Coverage, board.config.coverage_radius, palette.coverage),
        dots,
    ]
}
