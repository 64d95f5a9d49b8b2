//! Board validation for decoded permutations
//!
//! Row and column uniqueness hold by construction, so the only check left is
//! the diagonal scan.

pub mod diagonal;

pub use diagonal::{find_conflict, is_diagonal_free, DiagonalConflict};
