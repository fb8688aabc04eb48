//! Input events fed to the controller by a windowing frontend.

/// One discrete user input, already translated out of toolkit types.
///
/// Pixel coordinates have their origin at the bottom-left corner of the
/// window, y growing upward.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer press.
    Click { x: f32, y: f32 },
    /// Commit key in the text field.
    Enter,
    /// Directional key.
    Motion(Motion),
    /// The text field content changed to the given text.
    TextChanged(String),
    /// Escape key.
    Cancel,
    /// The window is now this many pixels wide and tall.
    Resize { width: f32, height: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Up,
    Down,
    Left,
    Right,
    Delete,
}
