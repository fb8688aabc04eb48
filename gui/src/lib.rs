//! Toolkit-agnostic UI logic for the drawer organizer.
//!
//! This crate carries everything a windowing frontend needs short of actual
//! drawing: pixel layout of the wall, the selection state machine, search
//! wiring and a render-ready scene description. A frontend translates its
//! native input into [`InputEvent`]s, feeds them to the [`Controller`] and
//! draws the [`Scene`] it gets back each frame.
//!
//! All coordinates are in pixels with a bottom-left origin and y growing
//! upward; frontends with a top-left origin flip y at the boundary.

pub mod controller;
pub mod event;
pub mod layout;
pub mod scene;
pub mod theme;
pub mod widgets;

pub use controller::{Controller, Highlight, UiState};
pub use event::{InputEvent, Motion};
pub use layout::{OrganizerLayout, Rect, compute_layout};
pub use scene::{Color, Scene};
pub use theme::Palette;
