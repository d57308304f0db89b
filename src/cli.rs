/// CLI argument parsing and the non-interactive `generate` command.
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use crossterm::style::{self, Stylize};

use crate::color::Rgb;
use crate::generator::{ColorGenerator, UnitSource};
use crate::sink::{self, ColorSink};

#[derive(Parser, Debug)]
#[command(
    name = "pastel",
    version,
    about = "Pastel - A terminal pastel color generator"
)]
pub struct Cli {
    #[command(flatten)]
    pub bounds: BoundArgs,

    /// Seed for a reproducible color sequence
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Config file to read instead of the default one
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Per-channel bound overrides.
#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct BoundArgs {
    #[arg(long, global = true)]
    pub max_r: Option<u8>,
    #[arg(long, global = true)]
    pub max_g: Option<u8>,
    #[arg(long, global = true)]
    pub max_b: Option<u8>,
    #[arg(long, global = true)]
    pub min_r: Option<u8>,
    #[arg(long, global = true)]
    pub min_g: Option<u8>,
    #[arg(long, global = true)]
    pub min_b: Option<u8>,
    /// Give up rejecting after this many draws and keep the last one
    #[arg(long, global = true)]
    pub max_attempts: Option<u32>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print colors and exit
    Generate {
        #[arg(short = 'n', long = "count", default_value_t = 1)]
        count: usize,
        /// Only print the hex code, without a swatch
        #[arg(long)]
        plain: bool,
    },
}

/// Execute a CLI command.
pub fn run(command: Command, generator: &ColorGenerator, rng: &mut dyn UnitSource) -> Result<()> {
    match command {
        Command::Generate { count, plain } => {
            let stdout = io::stdout();
            let mut out = StdoutSink::new(stdout.lock(), !plain);
            for _ in 0..count {
                sink::update_background(generator, rng, &mut out);
                out.flush_line()?;
            }
        }
    }
    Ok(())
}

/// Writes each color as one line: a swatch painted with the background, then the label.
pub struct StdoutSink<W: Write> {
    out: W,
    swatch: bool,
    line: String,
}

impl<W: Write> StdoutSink<W> {
    pub fn new(out: W, swatch: bool) -> Self {
        Self {
            out,
            swatch,
            line: String::new(),
        }
    }

    pub fn flush_line(&mut self) -> Result<()> {
        writeln!(self.out, "{}", self.line)?;
        self.out.flush()?;
        self.line.clear();
        Ok(())
    }
}

impl<W: Write> ColorSink for StdoutSink<W> {
    fn set_background(&mut self, color: &str) {
        if !self.swatch {
            return;
        }
        match Rgb::from_hex(color) {
            Some(Rgb { r, g, b }) => {
                let swatch = "  ".on(style::Color::Rgb { r, g, b });
                self.line.push_str(&format!("{swatch} "));
            }
            None => log::warn!("cannot paint unparsable color {color:?}"),
        }
    }

    fn set_label(&mut self, color: &str) {
        self.line.push_str(color);
    }
}
