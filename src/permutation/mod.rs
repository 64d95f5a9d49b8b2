//! Linear index to permutation mapping through the factorial number system.
//!
//! Every index in `[0, n!)` names exactly one permutation of `[0, n)`:
//! - [`factorial`] builds the mixed-radix place values `(n-1-b)!`
//! - [`decode`] extracts the Lehmer code from an index and resolves it into
//!   a permutation held in a fixed-capacity buffer

pub mod decode;
pub mod factorial;

pub use decode::{decode_index, Permutation, PermutationDecoder};
pub use factorial::{search_space_size, FactorialTable, MAX_BOARD_SIZE};
