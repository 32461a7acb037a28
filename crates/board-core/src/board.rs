//! Marker board state and the pointer gesture model.
//!
//! The board is platform-free: the web frontend translates browser pointer
//! events into [`Board::begin_drag`], [`Board::update_drag`] and
//! [`Board::end_drag`] calls and replays [`crate::scene::draw_passes`] every
//! frame.

use glam::Vec2;

use crate::constants::{
    DEFAULT_BROADCAST_RADIUS, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH,
    DEFAULT_COVERAGE_RADIUS, PICK_THRESHOLD,
};

/// A placed sensor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub position: Vec2,
    pub fence: bool,
}

impl Marker {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            fence: false,
        }
    }
}

/// Halo radii, driven by the radius sliders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardConfig {
    pub broadcast_radius: f32,
    pub coverage_radius: f32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            broadcast_radius: DEFAULT_BROADCAST_RADIUS,
            coverage_radius: DEFAULT_COVERAGE_RADIUS,
        }
    }
}

/// Drawable area; releases outside it never create markers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasExtent {
    pub width: f32,
    pub height: f32,
}

impl CanvasExtent {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Half-open containment: `[0, width) x [0, height)`.
    #[inline]
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= 0.0 && pos.x < self.width && pos.y >= 0.0 && pos.y < self.height
    }
}

impl Default for CanvasExtent {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

impl PointerButton {
    /// Map a DOM `MouseEvent.button` code. Middle and extra buttons are ignored.
    #[inline]
    pub fn from_dom_button(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::Primary),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionAction {
    Move,
    ToggleFence,
}

/// Marker grabbed on pointer-down, held until release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub index: usize,
    pub action: SelectionAction,
}

/// What a pointer release did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerOutcome {
    Created(usize),
    Moved(usize),
    FenceToggled(usize, bool),
    Ignored,
}

#[derive(Clone, Debug, Default)]
pub struct Board {
    pub markers: Vec<Marker>,
    pub config: BoardConfig,
    pub extent: CanvasExtent,
    selection: Option<Selection>,
}

impl Board {
    pub fn new(config: BoardConfig, extent: CanvasExtent) -> Self {
        Self {
            markers: Vec::new(),
            config,
            extent,
            selection: None,
        }
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn set_broadcast_radius(&mut self, radius: f32) {
        self.config.broadcast_radius = radius;
    }

    pub fn set_coverage_radius(&mut self, radius: f32) {
        self.config.coverage_radius = radius;
    }

    /// Append a marker if `pos` lies inside the canvas. Returns its index.
    pub fn add_marker(&mut self, pos: Vec2) -> Option<usize> {
        if !self.extent.contains(pos) {
            return None;
        }
        self.markers.push(Marker::new(pos));
        Some(self.markers.len() - 1)
    }

    /// Closest marker to `pos` and its distance. Ties keep the earliest marker.
    pub fn find_nearest(&self, pos: Vec2) -> Option<(usize, f32)> {
        let mut best = None::<(usize, f32)>;
        for (i, m) in self.markers.iter().enumerate() {
            let d = m.position.distance(pos);
            match best {
                Some((_, bd)) if d >= bd => {}
                _ => best = Some((i, d)),
            }
        }
        best
    }

    pub fn begin_drag(&mut self, pos: Vec2, button: PointerButton) {
        self.selection = match self.find_nearest(pos) {
            Some((index, d)) if d < PICK_THRESHOLD => {
                let action = match button {
                    PointerButton::Primary => SelectionAction::Move,
                    PointerButton::Secondary => SelectionAction::ToggleFence,
                };
                Some(Selection { index, action })
            }
            _ => None,
        };
    }

    /// Move the grabbed marker. No clamping: markers may be dragged off-canvas.
    pub fn update_drag(&mut self, pos: Vec2) {
        if let Some(Selection {
            index,
            action: SelectionAction::Move,
        }) = self.selection
        {
            if let Some(m) = self.markers.get_mut(index) {
                m.position = pos;
            }
        }
    }

    pub fn end_drag(&mut self, pos: Vec2, button: PointerButton) -> PointerOutcome {
        match self.selection.take() {
            Some(Selection {
                index,
                action: SelectionAction::Move,
            }) => {
                // release lands the marker even if no move event arrived
                if let Some(m) = self.markers.get_mut(index) {
                    m.position = pos;
                }
                PointerOutcome::Moved(index)
            }
            Some(Selection {
                index,
                action: SelectionAction::ToggleFence,
            }) => match self.markers.get_mut(index) {
                Some(m) => {
                    m.fence = !m.fence;
                    PointerOutcome::FenceToggled(index, m.fence)
                }
                None => PointerOutcome::Ignored,
            },
            None if button == PointerButton::Primary => self
                .add_marker(pos)
                .map_or(PointerOutcome::Ignored, PointerOutcome::Created),
            None => PointerOutcome::Ignored,
        }
    }

    pub fn cancel_drag(&mut self) {
        self.selection = None;
    }

    /// Replace markers and radii in one assignment. Clears any active gesture.
    pub fn replace(&mut self, markers: Vec<Marker>, config: BoardConfig) {
        self.markers = markers;
        self.config = config;
        self.selection = None;
    }
}
