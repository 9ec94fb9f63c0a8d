//! mis-plantas: track house plants and when they need watering.

pub mod care;
pub mod config;
pub mod db;
pub mod display;
pub mod error;
pub mod form;
pub mod models;

pub use care::{care_advice, days_until_next_watering, WateringStatus};
pub use db::{FileStore, Garden, KeyValueStore, MemoryStore, PlantQuery, Removal};
pub use error::{PlantError, PlantResult};
pub use models::{CareDifficulty, NewPlant, Plant, PlantType};
