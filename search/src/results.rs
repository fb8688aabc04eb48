//! Search results types.

use gaveta_core::DrawerId;

/// One matched item: the drawer that holds it and its position in that drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit {
    pub drawer: DrawerId,
    pub item: usize,
}

/// Matched items in organizer traversal order.
///
/// The hit order doubles as the display order of the result list, so row
/// indexes into the list map one-to-one onto hits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    hits: Vec<SearchHit>,
}

impl SearchResults {
    pub(crate) fn new(hits: Vec<SearchHit>) -> Self {
        Self { hits }
    }

    pub fn hits(&self) -> &[SearchHit] {
        &self.hits
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Drawer owning the result list row `index`.
    pub fn drawer_of(&self, index: usize) -> Option<DrawerId> {
        self.hits.get(index).map(|hit| hit.drawer)
    }

    /// Drawers with at least one hit, in traversal order.
    ///
    /// Hits of one drawer are consecutive, so comparing against the last
    /// pushed drawer deduplicates fully.
    pub fn drawers(&self) -> Vec<DrawerId> {
        let mut drawers: Vec<DrawerId> = Vec::new();
        for hit in &self.hits {
            if drawers.last() != Some(&hit.drawer) {
                drawers.push(hit.drawer);
            }
        }
        drawers
    }
}
