//! Render-ready draw list handed to the windowing frontend.
//!
//! A frontend draws groups back to front: `Background`, then `Mid`, then
//! `Front`. The text field's own text and caret are not part of the scene;
//! the frontend renders those straight from the field state.

use crate::layout::Rect;

/// Draw-order group, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Group {
    Background,
    Mid,
    Front,
}

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Componentwise saturating add, used to lay highlight masks over base
    /// colors.
    pub fn add(self, mask: Color) -> Self {
        Self {
            r: self.r.saturating_add(mask.r),
            g: self.g.saturating_add(mask.g),
            b: self.b.saturating_add(mask.b),
        }
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// Filled rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneRect {
    pub rect: Rect,
    pub color: Color,
    pub group: Group,
}

/// Filled triangle list, three vertices per triangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<[f32; 2]>,
    pub color: Color,
    pub group: Group,
}

/// Multiline text anchored at the top-left corner of its first line.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub color: [u8; 4],
    pub group: Group,
}

/// Everything one frame draws.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub clear_color: Color,
    pub rects: Vec<SceneRect>,
    pub meshes: Vec<Mesh>,
    pub labels: Vec<Label>,
}

impl Scene {
    pub fn new(clear_color: Color) -> Self {
        Self {
            clear_color,
            rects: Vec::new(),
            meshes: Vec::new(),
            labels: Vec::new(),
        }
    }
}
