use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use itertools::Itertools;

/// Cell contents; `None` is the empty sentinel.
pub type Cell = Option<char>;

/// Column/row pair addressing one cell. Top left is `Pos { c: 0, r: 0 }`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos { pub c: usize, pub r: usize }

impl Pos {
    pub fn new(c: usize, r: usize) -> Self { Self { c, r } }

    /// Step by `(dc, dr)`, returning `None` when the result leaves a `width` x `height` grid.
    pub fn offset(self, (dc, dr): (isize, isize), width: usize, height: usize) -> Option<Pos> {
        let c = self.c.checked_add_signed(dc)?;
        let r = self.r.checked_add_signed(dr)?;
        (c < width && r < height).then_some(Pos { c, r })
    }
}

/// Eight neighbour offsets as `(column delta, row delta)`, in propagation order.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (1, -1), (1, 0), (1, 1),
    (0, -1), (0, 1),
    (-1, -1), (-1, 0), (-1, 1),
];

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: usize,
    height: usize,
    // row-major
    cells: Vec<Cell>,
}

impl Grid {
    /// All-empty grid. Dimensions are fixed for the lifetime of the value. Panics if
    /// `width * height` overflows; `GeneratorConfig::new` rejects such sizes first.
    pub fn empty(width: usize, height: usize) -> Self {
        Self { width, height, cells: vec![None; width * height] }
    }

    /// Build from text rows; `'.'` marks an empty cell. Rows must share one length.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let width = rows.first()?.chars().count();
        let mut cells = Vec::with_capacity(width * rows.len());
        for row in rows {
            if row.chars().count() != width { return None; }
            cells.extend(row.chars().map(|ch| if ch == '.' { None } else { Some(ch) }));
        }
        Some(Self { width, height: rows.len(), cells })
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }
    pub fn slot_count(&self) -> usize { self.cells.len() }

    fn idx(&self, p: Pos) -> usize { p.r * self.width + p.c }

    /// Position of the `index`-th cell in row-major order.
    pub fn pos_of(&self, index: usize) -> Pos { Pos { c: index % self.width, r: index / self.width } }

    pub fn get(&self, p: Pos) -> Cell { self.cells[self.idx(p)] }

    /// Fill an empty cell. Returns `false` and leaves the grid untouched if the cell is occupied.
    pub fn fill(&mut self, p: Pos, ch: char) -> bool {
        let i = self.idx(p);
        if self.cells[i].is_some() { return false; }
        self.cells[i] = Some(ch);
        true
    }

    pub fn is_full(&self) -> bool { self.cells.iter().all(Option::is_some) }

    pub fn empty_count(&self) -> usize { self.cells.iter().filter(|c| c.is_none()).count() }

    pub fn count_of(&self, ch: char) -> usize { self.cells.iter().filter(|&&c| c == Some(ch)).count() }

    pub fn iterate_cells(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        self.cells.iter().enumerate().map(move |(i, &cell)| (self.pos_of(i), cell))
    }

    /// Occurrences of every character present, ordered by character. Empty cells are not counted.
    pub fn char_counts(&self) -> BTreeMap<char, usize> {
        let mut stats = BTreeMap::new();
        for ch in self.cells.iter().flatten() { *stats.entry(*ch).or_insert(0) += 1; }
        stats
    }

    /// One line per row, every cell framed by bars: `|a|b|c|`. Empty cells render as a space.
    pub fn to_pretty_string(&self) -> String {
        let mut s = String::new();
        for row in self.cells.chunks(self.width.max(1)) {
            s.push('|');
            s.push_str(&row.iter().map(|c| c.unwrap_or(' ')).join("|"));
            s.push_str("|\n");
        }
        s
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { f.write_str(&self.to_pretty_string()) }
}
