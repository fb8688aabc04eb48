//! Version 1 record layout, the only one ever shipped.
//!
//! Plain mirror structs of the tree as it looked back then; postcard is not
//! self-describing, so this layout must never change.

use super::RecordVariant;
use crate::model::{Cabinet, Drawer, Item, ItemName, ItemNameError, Organizer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizerRecord {
    pub width: u32,
    pub height: u32,
    pub boxes: Vec<BoxRecord>,
}

impl RecordVariant for OrganizerRecord {
    const VERSION: u8 = 1;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxRecord {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    pub drawers: Vec<DrawerRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawerRecord {
    pub items: Vec<ItemRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    pub amount: Option<f64>,
}

impl TryFrom<OrganizerRecord> for Organizer {
    type Error = ItemNameError;

    fn try_from(record: OrganizerRecord) -> Result<Self, Self::Error> {
        let cabinets = record
            .boxes
            .into_iter()
            .map(Cabinet::try_from)
            .collect::<Result<_, _>>()?;

        Ok(Organizer::new(record.width, record.height, cabinets))
    }
}

impl TryFrom<BoxRecord> for Cabinet {
    type Error = ItemNameError;

    fn try_from(record: BoxRecord) -> Result<Self, Self::Error> {
        let drawers = record
            .drawers
            .into_iter()
            .map(Drawer::try_from)
            .collect::<Result<_, _>>()?;

        Ok(Cabinet::with_drawers(
            record.x, record.y, record.w, record.h, drawers,
        ))
    }
}

impl TryFrom<DrawerRecord> for Drawer {
    type Error = ItemNameError;

    fn try_from(record: DrawerRecord) -> Result<Self, Self::Error> {
        let mut drawer = Drawer::new();
        for item in record.items {
            drawer.add_item(Item::try_from(item)?);
        }

        Ok(drawer)
    }
}

impl TryFrom<ItemRecord> for Item {
    type Error = ItemNameError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        Ok(Item::new(ItemName::try_new(record.name)?, record.amount))
    }
}
