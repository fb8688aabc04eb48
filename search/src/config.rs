#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Trimmed queries shorter than this clear results instead of matching.
    pub min_query_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { min_query_len: 3 }
    }
}
