// src/assets/mod.rs
// -----------------
pub mod definitions;
pub mod factory;

// Re-export the most useful items so callers don't have to dive
// another level down the path.
pub use definitions::{Asset, AssetType, Symbol};
pub use factory::AssetFactory;
