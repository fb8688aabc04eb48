pub mod config;
pub mod error;
pub mod model;
pub mod storage;

pub use config::{AppConfig, Config};
pub use error::{Error, Result};
pub use model::{Cabinet, Drawer, DrawerId, Item, ItemName, Organizer};
