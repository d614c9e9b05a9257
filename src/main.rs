use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use saku::{grid::Grid, logger::DevLogger, GeneratorConfig, PuzzleGenerator};
use std::{io::{self, BufRead, Write}, path::PathBuf, str::FromStr};

#[derive(Parser, Debug)]
#[command(name = "saku", version, about = "Word-chain puzzle grid generator")]
struct Cli {
    /// Grid width in cells. Prompted for if omitted.
    #[arg(long)]
    width: Option<usize>,

    /// Grid height in cells. Prompted for if omitted.
    #[arg(long)]
    height: Option<usize>,

    /// Seed word (at least 2 characters). The second character becomes the filler.
    #[arg(short, long)]
    word: Option<String>,

    /// Random seed for a reproducible grid. Defaults to the current time.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Underline the grid and color devlog output
    #[arg(long)]
    color: bool,

    /// Skip the per-character statistics
    #[arg(long)]
    no_stats: bool,

    /// Write a devlog file for every generation step into this directory
    #[arg(long)]
    devlogs: Option<PathBuf>,

    /// Step-by-step mode (pauses after each devlog step). Press Enter to continue.
    #[arg(long)]
    step: bool,

    /// Maximum devlogs to write (0 = unlimited)
    #[arg(long, default_value_t = 0)]
    max_logs: usize,

    /// Print the finished grid as JSON
    #[cfg(feature = "serde")]
    #[arg(long)]
    json: bool,
}

/// Prompt until the line parses and passes `valid`.
fn read_typed_input<T: FromStr>(desc: &str, valid: impl Fn(&T) -> bool) -> Result<T> {
    let stdin = io::stdin();
    loop {
        print!("{desc}");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            anyhow::bail!("input closed while reading {}", desc.trim_end_matches([':', ' ']));
        }
        match line.trim().parse::<T>() {
            Ok(v) if valid(&v) => return Ok(v),
            _ => println!("\nInvalid input. Try again"),
        }
    }
}

fn print_grid(grid: &Grid, color: bool) {
    let text = grid.to_pretty_string();
    if color { print!("{}", text.underline()); } else { print!("{text}"); }
}

fn print_grid_stats(grid: &Grid) {
    for (ch, amount) in grid.char_counts() {
        println!("{ch}: {amount}");
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let interactive = cli.width.is_none() || cli.height.is_none() || cli.word.is_none();

    let width = match cli.width { Some(w) => w, None => read_typed_input("Width: ", |w: &usize| *w > 0)? };
    let height = match cli.height { Some(h) => h, None => read_typed_input("Height: ", |h: &usize| *h > 0)? };
    let word = match cli.word {
        Some(w) => w,
        None => read_typed_input("Word: ", |w: &String| w.chars().count() >= saku::SeedWord::MIN_LEN)?,
    };

    let config = GeneratorConfig::new(width, height, &word, cli.seed).context("invalid puzzle input")?;
    let mut logger = match &cli.devlogs {
        Some(dir) => DevLogger::new(dir, cli.color, cli.step, cli.max_logs)
            .with_context(|| format!("creating devlog dir {}", dir.display()))?,
        None => DevLogger::disabled(),
    };

    let (grid, report) = PuzzleGenerator::seeded(&config).generate_with_report(&mut logger)?;

    #[cfg(feature = "serde")]
    {
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&grid)?);
            return Ok(());
        }
    }

    print_grid(&grid, cli.color);
    if !cli.no_stats { print_grid_stats(&grid); }
    if let Some(seed) = report.seed {
        println!("\nseed {seed}, filler '{}' x{}, {} chains", report.filler, report.filler_placed, report.iterations);
    }

    if interactive {
        print!("\nPress ENTER to quit...");
        io::stdout().flush()?;
        let mut s = String::new();
        io::stdin().read_line(&mut s).ok();
    }
    Ok(())
}
