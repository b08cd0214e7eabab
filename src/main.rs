// src/main.rs

use std::io;

use anyhow::Result;
use chrono::Local;
use portfolio_simulator::{Simulation, TradingWindow};

fn main() -> Result<()> {
    let mut simulation = Simulation::new(TradingWindow::default(), rand::thread_rng());
    let start = Local::now().naive_local();

    let stdout = io::stdout();
    simulation.run(start, &mut stdout.lock())?;
    Ok(())
}
