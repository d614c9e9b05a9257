use log::trace;

use crate::grid::{Grid, Pos, DIRECTIONS};

/// Propagate `ch` outward from `start`, which the caller has already stamped.
///
/// In every direction the letter jumps over exactly one occupied cell holding some other
/// character and lands on the empty cell behind it. Landed cells are expanded in turn.
/// Returns how many cells were filled.
pub fn chain(grid: &mut Grid, start: Pos, ch: char) -> usize {
    let (width, height) = (grid.width(), grid.height());
    let mut pending = vec![start];
    let mut filled = 0;

    while let Some(cur) = pending.pop() {
        for dir in DIRECTIONS {
            let Some(over) = cur.offset(dir, width, height) else { continue };
            match grid.get(over) {
                None => continue,
                Some(c) if c == ch => continue,
                Some(_) => {}
            }
            let Some(land) = over.offset(dir, width, height) else { continue };
            if grid.fill(land, ch) {
                trace!("chain {ch:?} c{},r{} -> c{},r{}", cur.c, cur.r, land.c, land.r);
                filled += 1;
                pending.push(land);
            }
        }
    }
    filled
}
