//! Diagonal conflict detection

use std::fmt;

/// Two rows whose queens share a diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagonalConflict {
    /// Row being scanned from.
    pub row: usize,
    /// Row holding the attacked queen.
    pub other_row: usize,
}

impl fmt::Display for DiagonalConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "queens in rows {} and {} share a diagonal",
            self.row, self.other_row
        )
    }
}

/// True if no two queens in `perm` share a diagonal.
///
/// `perm[j]` is the column of the queen in row `j`; the slice is assumed to
/// be a permutation already.
#[inline]
pub fn is_diagonal_free(perm: &[u8]) -> bool {
    find_conflict(perm).is_none()
}

/// First diagonal conflict in scan order, if any.
///
/// For each row, rows below are scanned outward and then rows above, with
/// the distance growing by one per step. Returns at the first hit.
pub fn find_conflict(perm: &[u8]) -> Option<DiagonalConflict> {
    let n = perm.len();

    for row in 0..n {
        let val = i32::from(perm[row]);

        let mut dist = 1;
        for k in row + 1..n {
            if attacks(val, dist, perm[k]) {
                return Some(DiagonalConflict { row, other_row: k });
            }
            dist += 1;
        }

        let mut dist = 1;
        for k in (0..row).rev() {
            if attacks(val, dist, perm[k]) {
                return Some(DiagonalConflict { row, other_row: k });
            }
            dist += 1;
        }
    }

    None
}

#[inline(always)]
fn attacks(val: i32, dist: i32, other: u8) -> bool {
    let other = i32::from(other);
    val - dist == other || val + dist == other
}
