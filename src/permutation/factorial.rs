//! Factorial table for base conversion and search-space sizing.

use crate::error::NQueensError;

/// Largest board size whose search space `n!` fits in a `u64`.
///
/// `20! = 2_432_902_008_176_640_000`; `21!` overflows.
pub const MAX_BOARD_SIZE: usize = 20;

/// Place values of the factorial number system for one board size.
///
/// `table[0] = 1` and `table[k] = table[k - 1] * k`, so `table[k] = k!`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactorialTable {
    size: usize,
    table: [u64; MAX_BOARD_SIZE],
    search_space: u64,
}

impl FactorialTable {
    /// Build the table for an `n x n` board.
    pub fn new(size: usize) -> Result<Self, NQueensError> {
        if size > MAX_BOARD_SIZE {
            return Err(NQueensError::BoardTooLarge {
                size,
                max: MAX_BOARD_SIZE,
            });
        }

        let mut table = [0u64; MAX_BOARD_SIZE];
        if size > 0 {
            table[0] = 1;
        }
        for k in 1..size {
            table[k] = checked_step(table[k - 1], k, size)?;
        }

        let search_space = if size <= 1 {
            1
        } else {
            checked_step(table[size - 1], size, size)?
        };

        Ok(Self {
            size,
            table,
            search_space,
        })
    }

    /// Board size this table was built for.
    pub fn size(&self) -> usize {
        self.size
    }

    /// `n!`, the exclusive upper bound of the index range.
    pub fn search_space(&self) -> u64 {
        self.search_space
    }

    /// Place value of digit `b` counted from the most significant: `(n-1-b)!`.
    #[inline]
    pub fn place_value(&self, digit: usize) -> u64 {
        self.table[self.size - 1 - digit]
    }

    /// The first `n` entries, `0!` through `(n-1)!`.
    pub fn as_slice(&self) -> &[u64] {
        &self.table[..self.size]
    }
}

fn checked_step(previous: u64, k: usize, size: usize) -> Result<u64, NQueensError> {
    previous
        .checked_mul(k as u64)
        .ok_or(NQueensError::BoardTooLarge {
            size,
            max: MAX_BOARD_SIZE,
        })
}

/// `n!` for a board of the given size, or an error if it overflows.
pub fn search_space_size(size: usize) -> Result<u64, NQueensError> {
    FactorialTable::new(size).map(|table| table.search_space())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_entries() {
        let table = FactorialTable::new(6).unwrap();
        assert_eq!(table.as_slice(), &[1, 1, 2, 6, 24, 120]);
        assert_eq!(table.search_space(), 720);
    }

    #[test]
    fn test_place_values() {
        let table = FactorialTable::new(4).unwrap();
        assert_eq!(table.place_value(0), 6);
        assert_eq!(table.place_value(1), 2);
        assert_eq!(table.place_value(2), 1);
        assert_eq!(table.place_value(3), 1);
    }

    #[test]
    fn test_trivial_boards() {
        let empty = FactorialTable::new(0).unwrap();
        assert_eq!(empty.search_space(), 1);
        assert!(empty.as_slice().is_empty());

        let single = FactorialTable::new(1).unwrap();
        assert_eq!(single.search_space(), 1);
        assert_eq!(single.as_slice(), &[1]);
    }

    #[test]
    fn test_known_search_spaces() {
        assert_eq!(search_space_size(2).unwrap(), 2);
        assert_eq!(search_space_size(4).unwrap(), 24);
        assert_eq!(search_space_size(8).unwrap(), 40_320);
        assert_eq!(search_space_size(12).unwrap(), 479_001_600);
    }

    #[test]
    fn test_maximum_board_size() {
        assert_eq!(
            search_space_size(MAX_BOARD_SIZE).unwrap(),
            2_432_902_008_176_640_000
        );
    }

    #[test]
    fn test_overflow_is_rejected() {
        assert_eq!(
            search_space_size(MAX_BOARD_SIZE + 1),
            Err(NQueensError::BoardTooLarge { size: 21, max: 20 })
        );
        assert!(FactorialTable::new(64).is_err());
    }
}
