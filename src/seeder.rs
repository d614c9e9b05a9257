use log::{debug, trace};
use rand::rngs::StdRng;
use rand::Rng;

use crate::{error::GenerateError, grid::Grid};

/// Uniform integer draws for random placement.
pub trait RandomSource {
    /// A value in `0..upper`. `upper` is never zero.
    fn next_index(&mut self, upper: usize) -> usize;
}

impl RandomSource for StdRng {
    fn next_index(&mut self, upper: usize) -> usize { self.gen_range(0..upper) }
}

/// Replays a fixed list of draws, cycling once exhausted. Each value is reduced modulo `upper`.
///
/// Seeding only finishes if the script reaches at least as many distinct cells as the filler
/// target; otherwise every later draw collides and the redraw loop never ends. An empty script
/// always draws 0.
#[derive(Clone, Debug)]
pub struct ScriptedSource { draws: Vec<usize>, at: usize }

impl ScriptedSource {
    pub fn new(draws: impl Into<Vec<usize>>) -> Self { Self { draws: draws.into(), at: 0 } }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize { self.at }
}

impl RandomSource for ScriptedSource {
    fn next_index(&mut self, upper: usize) -> usize {
        let v = if self.draws.is_empty() { 0 } else { self.draws[self.at % self.draws.len()] };
        self.at += 1;
        v % upper
    }
}

/// Number of filler cells for a grid of `slots` cells and a word of `word_len` characters.
pub fn filler_target(slots: usize, word_len: usize) -> usize { slots / word_len }

/// Scatter `filler` into `target` distinct empty cells drawn uniformly at random.
///
/// A draw landing on an occupied cell is re-drawn; there is no retry limit, so the call
/// refuses up front when `target` exceeds the number of empty cells.
pub fn seed_filler<R: RandomSource + ?Sized>(
    grid: &mut Grid,
    filler: char,
    target: usize,
    rng: &mut R,
) -> Result<usize, GenerateError> {
    let available = grid.empty_count();
    if target > available {
        return Err(GenerateError::Capacity { target, cells: available });
    }
    let slots = grid.slot_count();
    let mut redraws = 0usize;
    for _ in 0..target {
        loop {
            let p = grid.pos_of(rng.next_index(slots));
            if grid.fill(p, filler) {
                trace!("filler {filler:?} at c{},r{}", p.c, p.r);
                break;
            }
            redraws += 1;
        }
    }
    debug!("seeded {target} x {filler:?} ({redraws} redraws)");
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Pos;

    #[test]
    fn collisions_are_redrawn() {
        let mut g = Grid::empty(3, 1);
        let mut rng = ScriptedSource::new([1, 1, 1, 2]);
        assert_eq!(seed_filler(&mut g, 'B', 2, &mut rng), Ok(2));
        assert_eq!(rng.consumed(), 4);
        assert_eq!(g.get(Pos::new(0, 0)), None);
        assert_eq!(g.get(Pos::new(1, 0)), Some('B'));
        assert_eq!(g.get(Pos::new(2, 0)), Some('B'));
    }

    #[test]
    fn over_capacity_fails_fast() {
        let mut g = Grid::empty(2, 1);
        let mut rng = ScriptedSource::new([0]);
        assert_eq!(seed_filler(&mut g, 'x', 3, &mut rng), Err(GenerateError::Capacity { target: 3, cells: 2 }));
        assert_eq!(rng.consumed(), 0);
        assert_eq!(g.empty_count(), 2);
    }

    #[test]
    fn target_is_floor_of_slots_over_len() {
        assert_eq!(filler_target(3, 2), 1);
        assert_eq!(filler_target(100, 3), 33);
        assert_eq!(filler_target(1, 2), 0);
    }
}
