use std::ops::{Index, IndexMut};
use std::{array, fmt};

/// A fixed-size two-dimensional container addressed by row and column.
///
/// Elements are laid out and enumerated in row-major order.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Grid<T, const ROWS: usize, const COLUMNS: usize>([[T; COLUMNS]; ROWS]);

impl<T, const ROWS: usize, const COLUMNS: usize> Grid<T, ROWS, COLUMNS> {
    /// Constructs a grid by calling `f(row, column)` for every cell.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Grid(array::from_fn(|row| array::from_fn(|column| f(row, column))))
    }

    /// An iterator over `((row, column), element)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> + '_ {
        self.0.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(column, cell)| ((row, column), cell))
        })
    }
}

impl<T: Default, const ROWS: usize, const COLUMNS: usize> Default for Grid<T, ROWS, COLUMNS> {
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T, const ROWS: usize, const COLUMNS: usize> Index<(usize, usize)> for Grid<T, ROWS, COLUMNS> {
    type Output = T;

    #[inline(always)]
    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        &self.0[row][column]
    }
}

impl<T, const ROWS: usize, const COLUMNS: usize> IndexMut<(usize, usize)>
    for Grid<T, ROWS, COLUMNS>
{
    #[inline(always)]
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][column]
    }
}

impl<T: fmt::Debug, const ROWS: usize, const COLUMNS: usize> fmt::Debug
    for Grid<T, ROWS, COLUMNS>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn from_fn_places_elements_at_their_address(
        #[strategy(0usize..3)] row: usize,
        #[strategy(0usize..5)] column: usize,
    ) {
        let grid = Grid::<_, 3, 5>::from_fn(|r, c| (r, c));
        assert_eq!(grid[(row, column)], (row, column));
    }

    #[proptest]
    fn elements_can_be_replaced(
        #[strategy(0usize..3)] row: usize,
        #[strategy(0usize..5)] column: usize,
        value: i32,
    ) {
        let mut grid = Grid::<i32, 3, 5>::default();
        grid[(row, column)] = value;
        assert_eq!(grid[(row, column)], value);
        assert_eq!(grid.iter().filter(|(_, v)| **v != 0).count(), (value != 0) as usize);
    }

    #[test]
    fn iter_enumerates_in_row_major_order() {
        let grid = Grid::<_, 2, 3>::from_fn(|r, c| r * 3 + c);
        assert_eq!(
            Vec::from_iter(grid.iter().map(|(_, &v)| v)),
            vec![0, 1, 2, 3, 4, 5]
        );
    }

    #[test]
    fn iter_yields_the_address_of_every_element() {
        let grid = Grid::<_, 2, 2>::from_fn(|r, c| (r, c));
        assert!(grid.iter().all(|(address, &cell)| address == cell));
        assert_eq!(grid.iter().count(), 4);
    }

    #[test]
    fn grids_with_equal_elements_are_equal() {
        let sevens = Grid::<u8, 2, 2>::from_fn(|_, _| 7);
        let mut other = sevens;
        assert_eq!(other, sevens);
        other[(1, 1)] = 0;
        assert_ne!(other, sevens);
    }
}
