mod app;
mod cli;
mod color;
mod config;
mod event;
mod generator;
mod sink;
mod tui;
mod ui;

use anyhow::Result;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

use crate::generator::UnitSource;

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    let file = config::load(cli_opts.config.as_deref())?;
    let generator = config::resolve(&file, &cli_opts.bounds);
    let mut rng: Box<dyn UnitSource> = match cli_opts.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::rng()),
    };

    if let Some(command) = cli_opts.command {
        return cli::run(command, &generator, &mut *rng);
    }

    let mut app = app::App::new(generator, rng);
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);

    tui::restore()?;

    result
}
