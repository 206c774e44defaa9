mod types;

#[cfg(test)]
mod tests;

pub use types::{BuildingType, PlacedBuilding};
