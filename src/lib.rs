//! A Dancing Links (Algorithm X) solver for exact cover problems.
//!
//! Given a universe of constraints (columns) and a collection of candidate
//! subsets (rows), an exact cover is a set of rows whose ones cover every
//! column exactly once. This crate represents the sparse 0/1 matrix as
//! Knuth's circular four-directional linked structure, where removing and
//! restoring a row or column is a handful of link updates, and searches it
//! with recursive backtracking driven by the minimum-remaining-values
//! column heuristic.
//!
//! The solver stops at the first exact cover it finds and reports it as row
//! indices into the input matrix; an empty result means the search was
//! exhaustive and found none.
//!
//! # Example
//! ```
//! use exact_cover::{solve, LinkedMatrix};
//!
//! // Seven constraints, five candidate rows. Rows 1, 3 and 0 together
//! // cover each column exactly once.
//! let rows: Vec<Vec<bool>> = [
//!     [0, 0, 0, 0, 0, 0, 1],
//!     [1, 0, 1, 1, 0, 0, 0],
//!     [0, 0, 1, 0, 0, 1, 0],
//!     [0, 1, 0, 0, 1, 1, 0],
//!     [0, 0, 0, 0, 1, 0, 1],
//! ]
//! .iter()
//! .map(|row| row.iter().map(|&b| b == 1).collect())
//! .collect();
//!
//! let mut matrix =
//!     LinkedMatrix::build(&["a", "b", "c", "d", "e", "f", "g"], &rows).unwrap();
//! assert_eq!(solve(&mut matrix), vec![1, 3, 0]);
//! ```

pub mod error;
pub mod matrix;
pub mod solver;
pub mod validate;

pub use error::{Error, Result};
pub use matrix::LinkedMatrix;
pub use solver::solve;
pub use validate::{no_row_covers_universe, verify_coverage};
