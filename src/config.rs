// src/config.rs

//! A centralized place for tuning simulation parameters.

// --- Asset generation ---
pub const MIN_PRICE: f64 = 10.0;
pub const MAX_PRICE: f64 = 1000.0;
// Symbol serials are drawn from [0, SYMBOL_SERIAL_MAX).
pub const SYMBOL_SERIAL_MAX: u32 = 1000;

// --- Portfolio ---
pub const ASSET_COUNT: usize = 10;

// --- Price movement ---
// One tick moves a price by a fraction in [-MAX_TICK_MOVE, MAX_TICK_MOVE).
pub const MAX_TICK_MOVE: f64 = 0.05;

// --- Trading session ---
pub const TRADING_OPEN_HOUR: u32 = 9;
pub const TRADING_CLOSE_HOUR: u32 = 17;
pub const TICK_MINUTES: i64 = 15;
