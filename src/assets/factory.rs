// src/assets/factory.rs

use rand::Rng;
use rand::distributions::Distribution;
use rand_distr::Uniform;

use super::definitions::{Asset, AssetType};
use crate::config::{MAX_PRICE, MIN_PRICE, SYMBOL_SERIAL_MAX};

/// Produces randomly parameterized assets.
///
/// Owns its generator plus the two distributions it samples from, so
/// repeated calls don't rebuild them.
pub struct AssetFactory<R: Rng> {
    rng: R,
    price_dist: Uniform<f64>,
    serial_dist: Uniform<u32>,
}

impl<R: Rng> AssetFactory<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            price_dist: Uniform::new(MIN_PRICE, MAX_PRICE),
            serial_dist: Uniform::new(0, SYMBOL_SERIAL_MAX),
        }
    }

    /// Builds one asset: a uniformly chosen kind, a symbol derived from the
    /// kind's prefix plus a random serial, and a uniform price draw.
    /// Always returns a fully formed asset.
    pub fn generate(&mut self) -> Asset {
        let kind = AssetType::ALL[self.rng.gen_range(0..AssetType::ALL.len())];
        let symbol = format!("{}{}", kind.prefix(), self.serial_dist.sample(&mut self.rng));
        let price = self.price_dist.sample(&mut self.rng);
        Asset::new(kind, symbol, price)
    }
}
