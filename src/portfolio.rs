// src/portfolio.rs

use crate::assets::definitions::Asset;

/// An ordered collection of assets with aggregate-value computation.
///
/// Insertion order is significant: report lines follow it on every tick.
/// Symbols are not required to be unique, so removal may drop zero, one, or
/// many entries.
#[derive(Debug, Default)]
pub struct Portfolio {
    assets: Vec<Asset>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self { assets: Vec::new() }
    }

    /// Appends to the end of the collection. Always succeeds.
    pub fn add_asset(&mut self, asset: Asset) {
        self.assets.push(asset);
    }

    /// Drops every asset whose symbol matches. A miss is a no-op.
    pub fn remove_asset(&mut self, symbol: &str) {
        self.assets.retain(|asset| asset.symbol != symbol);
    }

    /// Sum of current prices; 0.0 for an empty portfolio.
    pub fn total_value(&self) -> f64 {
        self.assets.iter().fold(0.0, |acc, asset| acc + asset.price)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Read-only view, in insertion order.
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Mutable view for the per-tick price pass.
    pub fn assets_mut(&mut self) -> &mut [Asset] {
        &mut self.assets
    }
}
