// src/lib.rs

// === 1. Declare all the top-level modules ===
pub mod assets;
pub mod config;
pub mod portfolio;
pub mod sim;

// === 2. Re-export the public-facing components to create a clean API ===

// --- From `assets` ---
pub use assets::definitions::{Asset, AssetType, Symbol};
pub use assets::factory::AssetFactory;

// --- From `portfolio` ---
pub use portfolio::Portfolio;

// --- From `sim` ---
pub use sim::clock::{SimClock, TradingWindow};
pub use sim::driver::Simulation;
