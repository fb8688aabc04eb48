//! Fallback organizer structure from a plain-text layout file.
//!
//! The file mixes a legend with a picture of the wall:
//!
//! ```text
//! # two tall cabinets beside a two-drawer one
//! a:3
//! b:2
//! a a b
//! a a b
//! ```
//!
//! `symbol:count` lines map a symbol to its drawer count; the remaining lines
//! are space-separated rows of symbols, top row first. A contiguous rectangle
//! of one symbol becomes a single cabinet with that many empty drawers. Lines
//! starting with `#` and lines shorter than three characters are ignored; a
//! doubled space leaves a blank cell. The first row fixes the grid width.

use crate::model::{Cabinet, Organizer};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutConfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("layout config has no rows")]
    NoRows,
    #[error("unknown symbol {symbol:?}")]
    UnknownSymbol { symbol: String },
    #[error("bad drawer count {value:?} for symbol {symbol:?}")]
    BadDrawerCount { symbol: String, value: String },
}

pub fn read_layout_conf(path: &Path) -> Result<Organizer, LayoutConfError> {
    let content = std::fs::read_to_string(path)?;
    parse_layout_conf(&content)
}

/// Parses legend plus rows into an organizer of empty drawers.
///
/// Rows are given top-first while grid coordinates grow upward, so a region
/// starting at row `i` with height `h` lands at `y = gridH - i - h`.
pub fn parse_layout_conf(content: &str) -> Result<Organizer, LayoutConfError> {
    let mut symbols: HashMap<String, usize> = HashMap::new();
    let mut rows: Vec<Vec<String>> = Vec::new();

    for line in content.lines() {
        if line.len() <= 2 || line.starts_with('#') {
            continue;
        }

        if let Some((symbol, value)) = line.split_once(':') {
            let count = value
                .parse()
                .map_err(|_| LayoutConfError::BadDrawerCount {
                    symbol: symbol.to_string(),
                    value: value.to_string(),
                })?;
            symbols.insert(symbol.to_string(), count);
        } else {
            rows.push(line.split(' ').map(str::to_string).collect());
        }
    }

    if rows.is_empty() {
        return Err(LayoutConfError::NoRows);
    }

    let grid_w = rows[0].len();
    let grid_h = rows.len();
    let mut cells: Vec<Vec<String>> = rows
        .into_iter()
        .map(|mut row| {
            row.resize(grid_w, String::new());
            row
        })
        .collect();

    // Peel off one rectangular region at a time, blanking consumed cells.
    let mut cabinets = Vec::new();
    for i in 0..grid_h {
        let mut j = 0;
        while j < grid_w {
            let symbol = cells[i][j].clone();
            if symbol.is_empty() {
                j += 1;
                continue;
            }

            let drawer_count = *symbols.get(&symbol).ok_or_else(|| {
                LayoutConfError::UnknownSymbol {
                    symbol: symbol.clone(),
                }
            })?;

            let x = j;
            let mut w = 0;
            while j < grid_w && cells[i][j] == symbol {
                j += 1;
                w += 1;
            }

            let mut h = 0;
            while i + h < grid_h && cells[i + h][x] == symbol {
                for cell in &mut cells[i + h][x..x + w] {
                    cell.clear();
                }
                h += 1;
            }

            cabinets.push(Cabinet::new(
                x as u32,
                (grid_h - i - h) as u32,
                w as u32,
                h as u32,
                drawer_count,
            ));
        }
    }

    Ok(Organizer::new(grid_w as u32, grid_h as u32, cabinets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DrawerId;

    #[test]
    fn test_single_cabinet() {
        let org = parse_layout_conf("a:3\na a\na a\n").unwrap();

        assert_eq!(org.width(), 2);
        assert_eq!(org.height(), 2);
        assert_eq!(org.cabinets().len(), 1);

        let cabinet = &org.cabinets()[0];
        assert_eq!((cabinet.x, cabinet.y, cabinet.w, cabinet.h), (0, 0, 2, 2));
        assert_eq!(cabinet.drawers().len(), 3);
        assert!(org.drawer(DrawerId::new(0, 2)).unwrap().items().is_empty());
    }

    #[test]
    fn test_rows_are_bottom_up() {
        // c spans the top row, a and b sit below it.
        let org = parse_layout_conf("a:1\nb:2\nc:1\nc c\na b\n").unwrap();

        let find = |x, y| org.cabinet_at(x, y).map(|i| &org.cabinets()[i]);

        let top = find(0, 1).unwrap();
        assert_eq!((top.x, top.y, top.w, top.h), (0, 1, 2, 1));

        let left = find(0, 0).unwrap();
        assert_eq!((left.x, left.y, left.w, left.h), (0, 0, 1, 1));
        assert_eq!(left.drawers().len(), 1);

        let right = find(1, 0).unwrap();
        assert_eq!(right.drawers().len(), 2);
    }

    #[test]
    fn test_comments_short_lines_and_blanks_ignored() {
        let content = "# wall\n--\na:2\nb:4\n\na  b\n";

        let org = parse_layout_conf(content).unwrap();

        // The doubled space leaves an uncovered middle cell.
        assert_eq!(org.width(), 3);
        assert_eq!(org.height(), 1);
        assert_eq!(org.cabinets().len(), 2);
        assert_eq!(org.cabinet_at(1, 0), None);
    }

    #[test]
    fn test_tall_region_consumes_following_rows() {
        let org = parse_layout_conf("a:1\nb:1\na b\na b\n").unwrap();

        assert_eq!(org.cabinets().len(), 2);
        let a = &org.cabinets()[0];
        assert_eq!((a.x, a.y, a.w, a.h), (0, 0, 1, 2));
        let b = &org.cabinets()[1];
        assert_eq!((b.x, b.y, b.w, b.h), (1, 0, 1, 2));
        assert!(org.validate().is_ok());
    }

    #[test]
    fn test_unknown_symbol_is_an_error() {
        let result = parse_layout_conf("a:1\na q\n");

        assert!(matches!(
            result,
            Err(LayoutConfError::UnknownSymbol { symbol }) if symbol == "q"
        ));
    }

    #[test]
    fn test_bad_drawer_count_is_an_error() {
        let result = parse_layout_conf("abc:many\nabc abc\n");

        assert!(matches!(
            result,
            Err(LayoutConfError::BadDrawerCount { symbol, .. }) if symbol == "abc"
        ));
    }

    #[test]
    fn test_legend_only_is_an_error() {
        assert!(matches!(
            parse_layout_conf("a:1\nb:2\n"),
            Err(LayoutConfError::NoRows)
        ));
    }

    #[test]
    fn test_short_rows_are_padded_with_blanks() {
        // The second row is one cell short; the missing cell reads as blank
        // and the column scan still closes the region without panicking.
        let org = parse_layout_conf("a:1\na a a\na a\n").unwrap();

        assert_eq!(org.width(), 3);
        assert_eq!(org.height(), 2);
        assert_eq!(org.cabinets().len(), 1);
        let a = &org.cabinets()[0];
        assert_eq!((a.x, a.y, a.w, a.h), (0, 0, 3, 2));
        assert!(org.validate().is_ok());
    }
}
