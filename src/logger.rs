use anyhow::Result;
use chrono::Local;
use colored::*;
use std::{fs::{self, File}, io::{self, Write}, path::PathBuf};

use crate::{generator::Phase, grid::Grid};

/// Step-by-step generation log. Each entry becomes `devlog(N).txt` in `dir`.
pub struct DevLogger {
    dir: Option<PathBuf>,
    color: bool,
    step: bool,
    max_logs: usize,
    counter: usize,
}

impl DevLogger {
    pub fn new(dir: impl Into<PathBuf>, color: bool, step: bool, max_logs: usize) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir: Some(dir), color, step, max_logs, counter: 0 })
    }

    /// Logger that records nothing.
    pub fn disabled() -> Self {
        Self { dir: None, color: false, step: false, max_logs: 0, counter: 0 }
    }

    pub fn is_enabled(&self) -> bool { self.dir.is_some() }

    /// Entries written so far.
    pub fn count(&self) -> usize { self.counter }

    /// Record one generation step. The devlog file carries the phase, the summary and the
    /// grid as it stands; the console only gets the title and summary.
    pub fn record(&mut self, phase: Phase, title: &str, summary: &str, grid: &Grid) -> Result<()> {
        let Some(dir) = &self.dir else { return Ok(()) };
        if self.max_logs != 0 && self.counter >= self.max_logs { return Ok(()); }
        self.counter += 1;
        let path = dir.join(format!("devlog({}).txt", self.counter));

        let ts = Local::now().format("%Y-%m-%d %H:%M:%S");
        let mut f = File::create(&path)?;
        writeln!(f, "[{}] step {} ({:?}): {}", ts, self.counter, phase, title)?;
        writeln!(f, "{}", summary)?;
        writeln!(f, "grid {}x{}, {} empty", grid.width(), grid.height(), grid.empty_count())?;
        write!(f, "\n{}", grid.to_pretty_string())?;

        let tag = format!("[{:?}]", phase);
        if self.color {
            println!("{} {} {} - {}", "➤".blue().bold(), tag.cyan(), title.bold(), summary);
        } else {
            println!("➤ {} {} - {}", tag, title, summary);
        }

        if self.step {
            print!("-- press Enter to continue --");
            io::stdout().flush().ok();
            let mut s = String::new();
            io::stdin().read_line(&mut s).ok();
        }
        Ok(())
    }
}
