//! The organizer tree: cabinets placed on a grid, drawers stacked inside
//! them, items inside drawers.
//!
//! Concrete structs per level, no parent pointers. A drawer is addressed by a
//! [`DrawerId`] index pair wherever a back-reference would otherwise be
//! needed. Grid coordinates use a bottom-left origin with y growing upward.
//! The persisted document calls the cabinet level "boxes"; the serde layer
//! keeps that name.

use nutype::nutype;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_NAME_LENGTH: usize = 256;

/// Validated item name: trimmed, non-empty, at most [`MAX_NAME_LENGTH`] chars.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_NAME_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct ItemName(String);

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("cabinet {index} does not fit the {width}x{height} grid")]
    CabinetOutOfBounds {
        index: usize,
        width: u32,
        height: u32,
    },
    #[error("cabinets {first} and {second} overlap")]
    CabinetOverlap { first: usize, second: usize },
}

/// A stored thing: display name plus an optional numeric amount.
///
/// The lowercased form of the name is kept alongside it so search never
/// re-lowercases the tree on every keystroke. `rename` is the only way to
/// change the name and updates both together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ItemRepr", into = "ItemRepr")]
pub struct Item {
    name: ItemName,
    amount: Option<f64>,
    lower: String,
}

impl Item {
    pub fn new(name: ItemName, amount: Option<f64>) -> Self {
        let lower = name.to_lowercase();

        Self {
            name,
            amount,
            lower,
        }
    }

    pub fn name(&self) -> &ItemName {
        &self.name
    }

    pub fn amount(&self) -> Option<f64> {
        self.amount
    }

    /// Lowercased name, the haystack searches match against.
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Replaces the name, keeping the lowercased form in sync.
    pub fn rename(&mut self, name: ItemName) {
        self.lower = name.to_lowercase();
        self.name = name;
    }
}

/// Document-facing shape of an [`Item`]; `lower` is derived, never persisted.
#[derive(Serialize, Deserialize)]
struct ItemRepr {
    name: String,
    #[serde(default)]
    amount: Option<f64>,
}

impl TryFrom<ItemRepr> for Item {
    type Error = ItemNameError;

    fn try_from(repr: ItemRepr) -> Result<Self, Self::Error> {
        Ok(Item::new(ItemName::try_new(repr.name)?, repr.amount))
    }
}

impl From<Item> for ItemRepr {
    fn from(item: Item) -> Self {
        Self {
            name: item.name.into_inner(),
            amount: item.amount,
        }
    }
}

/// An ordered stack of items. Order is meaningful and stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Drawer {
    items: Vec<Item>,
}

impl Drawer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item_mut(&mut self, index: usize) -> Option<&mut Item> {
        self.items.get_mut(index)
    }

    /// Appends to the end of the stack.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes and returns the item at `index`, shifting later items up.
    pub fn remove_item(&mut self, index: usize) -> Option<Item> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }
}

/// A grid-positioned unit holding a vertical stack of drawers.
///
/// Position and size are in whole grid units. The persisted document calls
/// this level "box"; `Box` is not a usable Rust name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cabinet {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    drawers: Vec<Drawer>,
}

impl Cabinet {
    /// A cabinet with `drawer_count` empty drawers.
    pub fn new(x: u32, y: u32, w: u32, h: u32, drawer_count: usize) -> Self {
        Self {
            x,
            y,
            w,
            h,
            drawers: vec![Drawer::new(); drawer_count],
        }
    }

    pub fn with_drawers(x: u32, y: u32, w: u32, h: u32, drawers: Vec<Drawer>) -> Self {
        Self {
            x,
            y,
            w,
            h,
            drawers,
        }
    }

    pub fn drawers(&self) -> &[Drawer] {
        &self.drawers
    }

    pub fn drawer_mut(&mut self, index: usize) -> Option<&mut Drawer> {
        self.drawers.get_mut(index)
    }

    /// Whether grid cell `(x, y)` falls inside this cabinet.
    pub fn contains_cell(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }

    fn intersects(&self, other: &Cabinet) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

/// Address of a drawer inside an [`Organizer`]: cabinet index plus position
/// in that cabinet's stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawerId {
    pub cabinet: usize,
    pub drawer: usize,
}

impl DrawerId {
    pub fn new(cabinet: usize, drawer: usize) -> Self {
        Self { cabinet, drawer }
    }
}

/// The whole wall: a `width` x `height` cell grid with cabinets placed on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organizer {
    width: u32,
    height: u32,
    #[serde(rename = "boxes")]
    cabinets: Vec<Cabinet>,
}

/// Read operations.
impl Organizer {
    pub fn new(width: u32, height: u32, cabinets: Vec<Cabinet>) -> Self {
        Self {
            width,
            height,
            cabinets,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cabinets(&self) -> &[Cabinet] {
        &self.cabinets
    }

    pub fn cabinet(&self, index: usize) -> Option<&Cabinet> {
        self.cabinets.get(index)
    }

    /// Index of the cabinet covering grid cell `(x, y)`, if any.
    pub fn cabinet_at(&self, x: u32, y: u32) -> Option<usize> {
        self.cabinets.iter().position(|c| c.contains_cell(x, y))
    }

    pub fn drawer(&self, id: DrawerId) -> Option<&Drawer> {
        self.cabinets.get(id.cabinet)?.drawers.get(id.drawer)
    }

    /// All drawers in traversal order: cabinet by cabinet, stack order within.
    pub fn drawers(&self) -> impl Iterator<Item = (DrawerId, &Drawer)> {
        self.cabinets.iter().enumerate().flat_map(|(ci, cabinet)| {
            cabinet
                .drawers
                .iter()
                .enumerate()
                .map(move |(di, drawer)| (DrawerId::new(ci, di), drawer))
        })
    }

    /// Checks the placement invariants: every cabinet fits the grid and no
    /// two cabinets overlap.
    pub fn validate(&self) -> Result<(), ModelError> {
        for (index, c) in self.cabinets.iter().enumerate() {
            let fits_x = u64::from(c.x) + u64::from(c.w) <= u64::from(self.width);
            let fits_y = u64::from(c.y) + u64::from(c.h) <= u64::from(self.height);
            if !fits_x || !fits_y {
                return Err(ModelError::CabinetOutOfBounds {
                    index,
                    width: self.width,
                    height: self.height,
                });
            }
        }

        for first in 0..self.cabinets.len() {
            for second in first + 1..self.cabinets.len() {
                if self.cabinets[first].intersects(&self.cabinets[second]) {
                    return Err(ModelError::CabinetOverlap { first, second });
                }
            }
        }

        Ok(())
    }
}

/// Mutation operations.
impl Organizer {
    pub fn drawer_mut(&mut self, id: DrawerId) -> Option<&mut Drawer> {
        self.cabinets.get_mut(id.cabinet)?.drawer_mut(id.drawer)
    }
}

#[cfg(test)]
mod tests;
