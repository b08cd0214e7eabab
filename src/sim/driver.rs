// src/sim/driver.rs

use std::io::{self, Write};

use chrono::NaiveDateTime;
use rand::Rng;

use crate::assets::factory::AssetFactory;
use crate::config::ASSET_COUNT;
use crate::portfolio::Portfolio;
use crate::sim::clock::{SimClock, TradingWindow};

const BANNER_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// This is the main simulation engine. It owns the world state (the
/// portfolio) and the generator, and runs the session loop.
pub struct Simulation<R: Rng> {
    portfolio: Portfolio,
    window: TradingWindow,
    rng: R,
}

impl<R: Rng> Simulation<R> {
    /// Populates a fresh portfolio with `ASSET_COUNT` factory assets.
    pub fn new(window: TradingWindow, mut rng: R) -> Self {
        let mut portfolio = Portfolio::new();
        {
            let mut factory = AssetFactory::new(&mut rng);
            for _ in 0..ASSET_COUNT {
                portfolio.add_asset(factory.generate());
            }
        }
        Self {
            portfolio,
            window,
            rng,
        }
    }

    /// A getter for inspecting the portfolio between or after runs.
    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    /// Runs one session from `start`: the banner, then ticks while the
    /// clock's hour stays inside the trading window, then the summary.
    ///
    /// The loop condition checks the hour the clock actually started at,
    /// not a conceptual trading day. A start outside the window therefore
    /// produces zero ticks and reports the unchanged total.
    pub fn run<W: Write>(&mut self, start: NaiveDateTime, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "--- Trading simulation started at {} ---",
            start.format(BANNER_TIME_FORMAT)
        )?;

        let mut clock = SimClock::new(start);
        while self.window.contains(clock.hour()) {
            self.tick(out)?;
            clock.advance();
        }

        writeln!(out, "\n--- End of trading simulation ---")?;
        writeln!(out, "Total Portfolio Value: ${:.2}", self.portfolio.total_value())?;
        Ok(())
    }

    /// One simulated time step: every asset, in insertion order, takes a
    /// fresh price change and reports the new price.
    pub fn tick<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        for asset in self.portfolio.assets_mut() {
            let change = asset.price_change(&mut self.rng);
            asset.apply_change(change);
            writeln!(
                out,
                "[{}] {} - Price: {:.2} ({:.2}%)",
                asset.symbol,
                asset.kind,
                asset.price,
                change * 100.0
            )?;
        }
        Ok(())
    }
}
