// src/assets/definitions.rs
//! Core asset metadata used by the simulator.
//
//! The tradable universe is a fixed three-kind enumeration. Extend
//! `AssetType::ALL` whenever you add a new kind.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::MAX_TICK_MOVE;

pub type Symbol = String;

/// The kind of instrument an `Asset` represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetType {
    Stock,
    Currency,
    Commodity,
    // We can add more here later, like Bond, Option, etc.
}

impl AssetType {
    /// The full universe the factory draws from.
    pub const ALL: [AssetType; 3] = [AssetType::Stock, AssetType::Currency, AssetType::Commodity];

    /// Display name, exactly as printed on report lines.
    pub fn name(&self) -> &'static str {
        match self {
            AssetType::Stock => "Stock",
            AssetType::Currency => "Currency",
            AssetType::Commodity => "Commodity",
        }
    }

    /// First three characters of the name; symbols are derived from this.
    pub fn prefix(&self) -> &'static str {
        &self.name()[..3]
    }
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A simulated tradable instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Kind of instrument.
    pub kind: AssetType,
    /// Short identifier (e.g. "Sto742"). Not required to be unique.
    pub symbol: Symbol,
    /// Current price. Never clamped after creation.
    pub price: f64,
}

impl Asset {
    /// No validation here: the factory is the only producer in practice,
    /// and hand-built assets in tests may carry any values.
    #[inline]
    pub fn new<S: Into<Symbol>>(kind: AssetType, symbol: S, price: f64) -> Self {
        Self {
            kind,
            symbol: symbol.into(),
            price,
        }
    }

    /// Draws a fractional price delta, uniform in
    /// [-MAX_TICK_MOVE, MAX_TICK_MOVE). Reads no asset state; only the
    /// generator advances.
    pub fn price_change<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.gen_range(-MAX_TICK_MOVE..MAX_TICK_MOVE)
    }

    /// Applies a fractional delta in place: price becomes
    /// price * (1 + change). No bounds are enforced.
    pub fn apply_change(&mut self, change: f64) {
        self.price += self.price * change;
    }
}
