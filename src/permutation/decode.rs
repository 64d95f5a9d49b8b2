//! Lehmer-code decoding of a linear index into a permutation.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::NQueensError;
use crate::permutation::factorial::{FactorialTable, MAX_BOARD_SIZE};

/// A board assignment: the queen in row `j` sits at column `self[j]`.
///
/// Stored inline with capacity [`MAX_BOARD_SIZE`] so a worker can reuse one
/// buffer for every index it owns. Every value is below `len`; equality and
/// hashing see only the first `len` values.
#[derive(Clone, Copy)]
pub struct Permutation {
    values: [u8; MAX_BOARD_SIZE],
    len: usize,
}

impl Permutation {
    /// Zeroed buffer for a board of `len` rows.
    ///
    /// # Panics
    /// If `len` exceeds [`MAX_BOARD_SIZE`].
    pub fn with_len(len: usize) -> Self {
        assert!(len <= MAX_BOARD_SIZE, "board size {len} exceeds capacity");
        Self {
            values: [0; MAX_BOARD_SIZE],
            len,
        }
    }

    /// Copy column values into a new buffer.
    ///
    /// Returns `None` if the slice is longer than [`MAX_BOARD_SIZE`] or holds
    /// a column outside `[0, len)`. Repeated columns are accepted.
    pub fn from_slice(values: &[u8]) -> Option<Self> {
        let len = values.len();
        if len > MAX_BOARD_SIZE || values.iter().any(|&v| usize::from(v) >= len) {
            return None;
        }
        let mut perm = Self::with_len(len);
        perm.values[..len].copy_from_slice(values);
        Some(perm)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.values[..self.len]
    }

    fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.values[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reflect the board left-to-right: column `v` becomes `n - 1 - v`.
    pub fn mirrored(&self) -> Self {
        let mut out = *self;
        let top = self.len as u8;
        for value in out.as_mut_slice() {
            *value = top - 1 - *value;
        }
        out
    }

    /// Reverse the row order (reflect the board top-to-bottom).
    pub fn flipped(&self) -> Self {
        let mut out = *self;
        out.as_mut_slice().reverse();
        out
    }

    /// True if every value in `[0, n)` appears exactly once.
    pub fn is_bijection(&self) -> bool {
        let mut seen: u32 = 0;
        for &value in self.as_slice() {
            let value = usize::from(value);
            if value >= self.len || seen & (1 << value) != 0 {
                return false;
            }
            seen |= 1 << value;
        }
        true
    }
}

impl PartialEq for Permutation {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Permutation {}

impl Hash for Permutation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl fmt::Debug for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (row, value) in self.as_slice().iter().enumerate() {
            if row > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

/// Decodes indices for one fixed board size.
#[derive(Debug, Clone, Copy)]
pub struct PermutationDecoder {
    table: FactorialTable,
}

impl PermutationDecoder {
    pub fn new(table: FactorialTable) -> Self {
        Self { table }
    }

    /// Build the factorial table for `size` and wrap it.
    pub fn for_size(size: usize) -> Result<Self, NQueensError> {
        FactorialTable::new(size).map(Self::new)
    }

    pub fn size(&self) -> usize {
        self.table.size()
    }

    /// Exclusive upper bound of valid indices.
    pub fn search_space(&self) -> u64 {
        self.table.search_space()
    }

    /// A reusable output buffer sized for this decoder.
    pub fn buffer(&self) -> Permutation {
        Permutation::with_len(self.size())
    }

    /// Decode `index` into `out`, overwriting its contents.
    ///
    /// `index` must be below [`search_space`](Self::search_space); the caller
    /// owns that check so the hot loop stays branch-light.
    #[inline]
    pub fn decode_into(&self, mut index: u64, out: &mut Permutation) {
        let n = self.size();
        debug_assert!(index < self.search_space());
        out.len = n;
        out.values[n..].fill(0);
        let digits = out.as_mut_slice();

        // Factorial-base digits: digit[b] is in [0, n-1-b].
        for (b, digit) in digits.iter_mut().enumerate() {
            let place = self.table.place_value(b);
            *digit = (index / place) as u8;
            index %= place;
        }

        // Resolve the Lehmer code into distinct column values.
        for b in (1..n).rev() {
            for a in (0..b).rev() {
                if digits[a] <= digits[b] {
                    digits[b] += 1;
                }
            }
        }
    }

    /// Checked decode into a fresh buffer.
    pub fn decode(&self, index: u64) -> Result<Permutation, NQueensError> {
        if index >= self.search_space() {
            return Err(NQueensError::IndexOutOfRange {
                index,
                size: self.size(),
                limit: self.search_space(),
            });
        }
        let mut out = self.buffer();
        self.decode_into(index, &mut out);
        Ok(out)
    }
}

/// Decode `index` for an `size x size` board; pure in `(index, size)`.
pub fn decode_index(index: u64, size: usize) -> Result<Permutation, NQueensError> {
    PermutationDecoder::for_size(size)?.decode(index)
}
