use crate::grid::{Grid, Pos};

/// First empty cell in row-major order, or `None` once the grid is full.
pub fn first_empty_slot(grid: &Grid) -> Option<Pos> {
    grid.iterate_cells().find_map(|(p, cell)| cell.is_none().then_some(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_rows_before_columns() {
        let g = Grid::from_rows(&["ab", "c.", ".."]).unwrap();
        assert_eq!(first_empty_slot(&g), Some(Pos::new(1, 1)));
    }

    #[test]
    fn full_grid_has_no_slot() {
        let g = Grid::from_rows(&["ab", "cd"]).unwrap();
        assert_eq!(first_empty_slot(&g), None);
    }
}
