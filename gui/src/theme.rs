//! Color palette resolved from the application configuration.

use crate::scene::Color;
use gaveta_core::config::ColorsConfig;

/// All colors the scene builder needs, converted once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub cabinet: Color,
    pub drawer: Color,
    pub handle: Color,
    pub text_input: Color,
    pub item_list: Color,
    pub item_select: Color,
    /// Text field font color, RGBA.
    pub font: [u8; 4],
    /// Result list font color, RGBA.
    pub item_font: [u8; 4],
    pub highlight_mask: Color,
    pub select_mask: Color,
}

impl Palette {
    pub fn from_config(colors: &ColorsConfig) -> Self {
        Self {
            background: colors.background.into(),
            cabinet: colors.cabinet.into(),
            drawer: colors.drawer.into(),
            handle: colors.handle.into(),
            text_input: colors.text_input.into(),
            item_list: colors.item_list.into(),
            item_select: colors.item_select.into(),
            font: colors.font,
            item_font: colors.item_font,
            highlight_mask: colors.highlight_mask.into(),
            select_mask: colors.select_mask.into(),
        }
    }
}
