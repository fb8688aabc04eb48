use crate::layout::Rect;

/// Item list drawn under the text field.
///
/// Shows either the active drawer's items or the current search hits. Rows
/// past the available height are clipped, not scrolled; the cursor can only
/// ever sit on a visible row.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultList {
    entries: Vec<String>,
    selected: Option<usize>,
    x: f32,
    top: f32,
    width: f32,
    max_height: f32,
    font_height: f32,
    margin: f32,
}

impl ResultList {
    pub fn new(font_height: f32, margin_frac: f32) -> Self {
        Self {
            entries: Vec::new(),
            selected: None,
            x: 0.0,
            top: 0.0,
            width: 0.0,
            max_height: 0.0,
            font_height,
            margin: font_height * margin_frac,
        }
    }

    pub fn line_height(&self) -> f32 {
        self.font_height + 2.0 * self.margin
    }

    /// The region rows may occupy; `top` is the upper edge, rows grow down.
    pub fn set_region(&mut self, x: f32, top: f32, width: f32, max_height: f32) {
        self.x = x;
        self.top = top;
        self.width = width;
        self.max_height = max_height;
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Rows that fit the region.
    pub fn visible_rows(&self) -> usize {
        if self.line_height() <= 0.0 {
            return 0;
        }
        let by_height = (self.max_height / self.line_height()).floor() as usize;
        self.entries.len().min(by_height)
    }

    /// Replaces the entries, keeping the cursor where it was.
    pub fn set_entries(&mut self, entries: Vec<String>) {
        self.entries = entries;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.selected = None;
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Moves the cursor down one row; past the last visible row is a no-op.
    pub fn select_down(&mut self) {
        let next = match self.selected {
            None => 0,
            Some(row) => row + 1,
        };
        if next < self.visible_rows() {
            self.selected = Some(next);
        }
    }

    /// Moves the cursor up one row; above the first row clears it.
    pub fn select_up(&mut self) {
        self.selected = match self.selected {
            None | Some(0) => None,
            Some(row) => Some(row - 1),
        };
    }

    /// Sets the cursor, clamping past-the-end rows to the last visible one.
    pub fn select_clamped(&mut self, row: Option<usize>) {
        let rows = self.visible_rows();
        self.selected = match row {
            Some(_) if rows == 0 => None,
            Some(row) => Some(row.min(rows - 1)),
            None => None,
        };
    }

    /// Background strip extending down from the top edge, sized to the
    /// visible rows.
    pub fn background_rect(&self) -> Rect {
        let height = self.line_height() * self.visible_rows() as f32;
        Rect::new(self.x, self.top - height, self.width, height)
    }

    /// Rectangle of one row, for the cursor strip.
    pub fn row_rect(&self, row: usize) -> Rect {
        Rect::new(
            self.x,
            self.top - self.line_height() * (row + 1) as f32,
            self.width,
            self.line_height(),
        )
    }

    /// Visible entries joined with blank lines, matching the double-spaced
    /// row height.
    pub fn label_text(&self) -> String {
        self.entries[..self.visible_rows()].join("\n\n")
    }

    pub fn label_origin(&self) -> (f32, f32) {
        (self.x + self.margin, self.top - self.margin)
    }

    pub fn label_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list() -> ResultList {
        let mut list = ResultList::new(10.0, 0.5);
        // 20px lines, room for exactly three rows.
        list.set_region(100.0, 400.0, 200.0, 65.0);
        list
    }

    fn entries(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_visible_rows_clip_to_height() {
        let mut list = list();

        list.set_entries(entries(&["a", "b"]));
        assert_eq!(list.visible_rows(), 2);

        list.set_entries(entries(&["a", "b", "c", "d", "e"]));
        assert_eq!(list.visible_rows(), 3);
    }

    #[test]
    fn test_cursor_moves_within_visible_rows() {
        let mut list = list();
        list.set_entries(entries(&["a", "b", "c", "d"]));

        assert_eq!(list.selected(), None);
        list.select_down();
        assert_eq!(list.selected(), Some(0));
        list.select_down();
        list.select_down();
        assert_eq!(list.selected(), Some(2));
        // Row 3 exists but is clipped.
        list.select_down();
        assert_eq!(list.selected(), Some(2));
    }

    #[test]
    fn test_cursor_up_past_first_row_deselects() {
        let mut list = list();
        list.set_entries(entries(&["a", "b"]));
        list.select_down();

        list.select_up();
        assert_eq!(list.selected(), None);
        list.select_up();
        assert_eq!(list.selected(), None);
    }

    #[test]
    fn test_down_on_empty_list_keeps_no_selection() {
        let mut list = list();

        list.select_down();

        assert_eq!(list.selected(), None);
    }

    #[test]
    fn test_select_clamped() {
        let mut list = list();
        list.set_entries(entries(&["a", "b"]));

        list.select_clamped(Some(5));
        assert_eq!(list.selected(), Some(1));

        list.set_entries(Vec::new());
        list.select_clamped(Some(0));
        assert_eq!(list.selected(), None);
    }

    #[test]
    fn test_row_geometry_grows_downward() {
        let mut list = list();
        list.set_entries(entries(&["a", "b"]));

        assert_eq!(list.background_rect(), Rect::new(100.0, 360.0, 200.0, 40.0));
        assert_eq!(list.row_rect(0), Rect::new(100.0, 380.0, 200.0, 20.0));
        assert_eq!(list.row_rect(1), Rect::new(100.0, 360.0, 200.0, 20.0));
    }

    #[test]
    fn test_label_joins_visible_entries() {
        let mut list = list();
        list.set_entries(entries(&["a", "b", "c", "d"]));

        assert_eq!(list.label_text(), "a\n\nb\n\nc");
        assert_eq!(list.label_origin(), (105.0, 395.0));
        assert_eq!(list.label_width(), 190.0);
    }
}
