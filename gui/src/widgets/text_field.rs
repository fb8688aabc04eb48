use crate::layout::Rect;

/// Text field state.
///
/// The frontend owns key handling and glyph rendering; the controller owns
/// the authoritative text and caret so rename prefills and commit clears stay
/// in one place. The field height is fixed by the font; only its position and
/// width follow the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct TextField {
    text: String,
    /// Caret position in chars.
    caret: usize,
    rect: Rect,
    font_height: f32,
    margin: f32,
}

impl TextField {
    pub fn new(font_height: f32, margin_frac: f32) -> Self {
        Self {
            text: String::new(),
            caret: 0,
            rect: Rect::default(),
            font_height,
            margin: font_height * margin_frac,
        }
    }

    pub fn height(&self) -> f32 {
        self.font_height + 2.0 * self.margin
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    pub fn font_height(&self) -> f32 {
        self.font_height
    }

    /// Backdrop rectangle.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Where the frontend lays out the text inside the backdrop.
    pub fn text_origin(&self) -> (f32, f32) {
        (self.rect.x + self.margin, self.rect.y + self.margin)
    }

    pub fn set_position(&mut self, x: f32, y: f32, width: f32) {
        self.rect = Rect::new(x, y, width, self.height());
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Replaces the content and puts the caret at the end.
    pub fn set_text(&mut self, text: String) {
        self.caret = text.chars().count();
        self.text = text;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.caret = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_tracks_font_and_margin() {
        let field = TextField::new(40.0, 0.5);

        assert_eq!(field.margin(), 20.0);
        assert_eq!(field.height(), 80.0);
    }

    #[test]
    fn test_set_text_moves_caret_to_end() {
        let mut field = TextField::new(40.0, 0.5);

        field.set_text("Screws".to_string());

        assert_eq!(field.text(), "Screws");
        assert_eq!(field.caret(), 6);
    }

    #[test]
    fn test_clear_resets_caret() {
        let mut field = TextField::new(40.0, 0.5);
        field.set_text("Screws".to_string());

        field.clear();

        assert_eq!(field.text(), "");
        assert_eq!(field.caret(), 0);
    }

    #[test]
    fn test_text_origin_is_inset_by_margin() {
        let mut field = TextField::new(40.0, 0.5);

        field.set_position(100.0, 200.0, 500.0);

        assert_eq!(field.rect(), Rect::new(100.0, 200.0, 500.0, 80.0));
        assert_eq!(field.text_origin(), (120.0, 220.0));
    }
}
