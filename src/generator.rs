use anyhow::Result;
use chrono::Utc;
use itertools::Itertools;
use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    chainer::chain,
    error::GenerateError,
    grid::{Cell, Grid},
    logger::DevLogger,
    scanner::first_empty_slot,
    seeder::{filler_target, seed_filler, RandomSource},
    word::SeedWord,
};

/// Validated generation input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub width: usize,
    pub height: usize,
    pub word: SeedWord,
    /// Fixed seed for reproducible grids; `None` seeds from the clock.
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    pub fn new(width: usize, height: usize, word: &str, seed: Option<u64>) -> Result<Self, GenerateError> {
        if width == 0 || height == 0 { return Err(GenerateError::ZeroDimension { width, height }); }
        if grid_cells(width, height).is_none() { return Err(GenerateError::TooLarge { width, height }); }
        let word = SeedWord::parse(word)?;
        Ok(Self { width, height, word, seed })
    }

    /// The configured seed, or one taken from the current time.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64)
    }
}

/// Cell count of a `width` x `height` grid, or `None` if it cannot be allocated.
pub fn grid_cells(width: usize, height: usize) -> Option<usize> {
    let cells = width.checked_mul(height)?;
    (cells <= isize::MAX as usize / std::mem::size_of::<Cell>()).then_some(cells)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase { Seeding, Filling, Done }

/// What a finished (or partial) run did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub seed: Option<u64>,
    pub filler: char,
    pub filler_placed: usize,
    /// Letters stamped by the scan loop.
    pub iterations: usize,
    /// Cells added by each chain, excluding the stamped slot.
    pub chain_sizes: Vec<usize>,
}

pub struct PuzzleGenerator<R: RandomSource> {
    grid: Grid,
    word: SeedWord,
    rng: R,
    phase: Phase,
    report: GenerationReport,
}

impl PuzzleGenerator<StdRng> {
    /// Generator backed by a `StdRng` seeded from the config (or the clock).
    pub fn seeded(config: &GeneratorConfig) -> Self {
        let seed = config.resolve_seed();
        let mut g = Self::new(config, StdRng::seed_from_u64(seed));
        g.report.seed = Some(seed);
        g
    }
}

impl<R: RandomSource> PuzzleGenerator<R> {
    pub fn new(config: &GeneratorConfig, rng: R) -> Self {
        let report = GenerationReport { filler: config.word.filler(), ..Default::default() };
        Self {
            grid: Grid::empty(config.width, config.height),
            word: config.word.clone(),
            rng,
            phase: Phase::Seeding,
            report,
        }
    }

    pub fn phase(&self) -> Phase { self.phase }
    pub fn grid(&self) -> &Grid { &self.grid }
    pub fn report(&self) -> &GenerationReport { &self.report }

    /// Advance by one unit of work: the whole seeding pass, or one stamp-and-chain iteration.
    pub fn step(&mut self, logger: &mut DevLogger) -> Result<Phase> {
        match self.phase {
            Phase::Seeding => {
                let filler = self.word.filler();
                let target = filler_target(self.grid.slot_count(), self.word.len());
                self.report.filler_placed = seed_filler(&mut self.grid, filler, target, &mut self.rng)?;
                info!("seeded {} filler {:?} into {}x{}", target, filler, self.grid.width(), self.grid.height());
                self.phase = Phase::Filling;
                logger.record(Phase::Seeding, "filler scattered", &format!("placed {} x '{}'", target, filler), &self.grid)?;
            }
            Phase::Filling => match first_empty_slot(&self.grid) {
                None => {
                    info!("grid complete after {} chain iterations", self.report.iterations);
                    self.phase = Phase::Done;
                    let counts = self.grid.char_counts().into_iter().map(|(ch, n)| format!("{ch}: {n}")).join(", ");
                    logger.record(Phase::Done, "grid complete", &counts, &self.grid)?;
                }
                Some(slot) => {
                    let ch = self.word.letter(self.report.iterations);
                    let stamped = self.grid.fill(slot, ch);
                    debug_assert!(stamped, "scanner returned occupied slot c{},r{}", slot.c, slot.r);
                    let added = chain(&mut self.grid, slot, ch);
                    debug!("stamped {:?} at c{},r{}; chain added {}", ch, slot.c, slot.r, added);
                    self.report.iterations += 1;
                    self.report.chain_sizes.push(added);
                    logger.record(
                        Phase::Filling,
                        &format!("chain {}: '{}' at c{},r{}", self.report.iterations, ch, slot.c + 1, slot.r + 1),
                        &format!("chain added {} cells", added),
                        &self.grid,
                    )?;
                }
            },
            Phase::Done => {}
        }
        Ok(self.phase)
    }

    /// Step until every cell is filled and return the grid.
    pub fn generate(self, logger: &mut DevLogger) -> Result<Grid> {
        self.generate_with_report(logger).map(|(grid, _)| grid)
    }

    /// Like [`generate`](Self::generate) but also returns the run report.
    pub fn generate_with_report(mut self, logger: &mut DevLogger) -> Result<(Grid, GenerationReport)> {
        while self.step(logger)? != Phase::Done {}
        Ok((self.grid, self.report))
    }
}
