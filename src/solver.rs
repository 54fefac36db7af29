//! Recursive backtracking search over a [`LinkedMatrix`].
//!
//! This is Knuth's Algorithm X: pick the column with the fewest remaining
//! candidate rows, cover it, try each of its rows in turn while covering
//! every other column that row touches, and recurse. Dead ends are ordinary
//! control flow, undone by uncovering in the exact reverse of the cover
//! order. The search stops at the first complete cover it reaches.

use crate::matrix::LinkedMatrix;

/// Searches for one exact cover of the matrix.
///
/// Returns the selected row indices in the order the search chose them, or
/// an empty vector if no exact cover exists. The matrix is mutated in place
/// during the search and fully restored before this returns, whether or not
/// a solution was found.
///
/// # Example
/// ```
/// use exact_cover::{solve, LinkedMatrix};
///
/// let rows: Vec<Vec<bool>> = [
///     [0, 1, 0, 0, 0, 0],
///     [1, 0, 0, 1, 0, 0],
///     [0, 0, 1, 0, 0, 0],
///     [0, 0, 0, 0, 1, 1],
///     [1, 1, 0, 0, 0, 0],
/// ]
/// .iter()
/// .map(|row| row.iter().map(|&b| b == 1).collect())
/// .collect();
///
/// let mut matrix = LinkedMatrix::build(&["a", "b", "c", "d", "e", "f"], &rows).unwrap();
/// assert_eq!(solve(&mut matrix), vec![2, 1, 0, 3]);
/// ```
pub fn solve(matrix: &mut LinkedMatrix) -> Vec<usize> {
    let mut search = Search {
        matrix,
        stack: vec![],
        solution: vec![],
    };
    search.run();
    search.solution
}

/// One search over one matrix: the stack of chosen data nodes (indexed by
/// recursion depth) and the first solution reached, if any.
struct Search<'m> {
    matrix: &'m mut LinkedMatrix,
    stack: Vec<usize>,
    solution: Vec<usize>,
}

impl Search<'_> {
    /// One level of the recursion. Returns `true` as soon as a complete
    /// cover has been recorded, unwinding its cover operations on the way
    /// out so the structure ends up as it started.
    fn run(&mut self) -> bool {
        let header = self.matrix.header();
        if self.matrix.right_of(header) == header {
            // Every column is covered; snapshot the chosen rows in depth
            // order.
            self.solution = self
                .stack
                .iter()
                .map(|&node| self.matrix.row_of(node))
                .collect();
            log::debug!("exact cover found: {} rows", self.solution.len());
            return true;
        }

        let col = choose_column(self.matrix);
        if self.matrix.size_of(col) == 0 {
            // A constraint with no remaining candidates: dead end.
            return false;
        }

        self.matrix.cover(col);

        let mut r = self.matrix.down_of(col);
        while r != col {
            self.stack.push(r);
            let mut j = self.matrix.right_of(r);
            while j != r {
                let c = self.matrix.column_of(j);
                self.matrix.cover(c);
                j = self.matrix.right_of(j);
            }

            let found = self.run();

            // Backtrack: uncover the row's columns right-to-left, the
            // reverse of the cover order above.
            let mut j = self.matrix.left_of(r);
            while j != r {
                let c = self.matrix.column_of(j);
                self.matrix.uncover(c);
                j = self.matrix.left_of(j);
            }
            self.stack.pop();

            if found {
                self.matrix.uncover(col);
                return true;
            }
            r = self.matrix.down_of(r);
        }

        self.matrix.uncover(col);
        false
    }
}

/// Minimum-remaining-values heuristic: the leftmost column of minimal size
/// in the header ring. Must only be called while at least one column
/// remains.
fn choose_column(matrix: &LinkedMatrix) -> usize {
    let header = matrix.header();
    let mut c = matrix.right_of(header);
    let mut best = c;
    let mut best_size = matrix.size_of(c);
    while c != header {
        if matrix.size_of(c) < best_size {
            best = c;
            best_size = matrix.size_of(c);
            if best_size == 0 {
                break;
            }
        }
        c = matrix.right_of(c);
    }
    log::trace!(
        "chose column {} (size {})",
        matrix.name_of(best),
        best_size
    );
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_rows(bits: &[&[u8]]) -> Vec<Vec<bool>> {
        bits.iter()
            .map(|row| row.iter().map(|&b| b == 1).collect())
            .collect()
    }

    fn build(names: &[&str], bits: &[&[u8]]) -> LinkedMatrix {
        LinkedMatrix::build(names, &to_rows(bits)).unwrap()
    }

    /// Column names of the header ring, left to right.
    fn remaining_columns(matrix: &LinkedMatrix) -> Vec<String> {
        let mut names = vec![];
        let header = matrix.header();
        let mut c = matrix.right_of(header);
        while c != header {
            names.push(matrix.name_of(c).to_string());
            c = matrix.right_of(c);
        }
        names
    }

    #[test]
    fn test_solves_six_column_instance() {
        let mut matrix = build(
            &["a", "b", "c", "d", "e", "f"],
            &[
                &[0, 1, 0, 0, 0, 0],
                &[1, 0, 0, 1, 0, 0],
                &[0, 0, 1, 0, 0, 0],
                &[0, 0, 0, 0, 1, 1],
                &[1, 1, 0, 0, 0, 0],
            ],
        );
        assert_eq!(solve(&mut matrix), vec![2, 1, 0, 3]);
    }

    #[test]
    fn test_reports_unsolvable_instance_as_empty() {
        let mut matrix = build(
            &["a", "b", "c", "d", "e", "f", "g"],
            &[
                &[1, 1, 0, 1, 0, 0, 1],
                &[1, 0, 1, 1, 0, 0, 0],
                &[0, 0, 1, 0, 0, 1, 0],
                &[0, 1, 0, 0, 1, 1, 0],
                &[0, 0, 0, 0, 1, 0, 1],
            ],
        );
        assert_eq!(solve(&mut matrix), Vec::<usize>::new());
    }

    #[test]
    fn test_solves_seven_column_instance() {
        let mut matrix = build(
            &["a", "b", "c", "d", "e", "f", "g"],
            &[
                &[0, 0, 0, 0, 0, 0, 1],
                &[1, 0, 1, 1, 0, 0, 0],
                &[0, 0, 1, 0, 0, 1, 0],
                &[0, 1, 0, 0, 1, 1, 0],
                &[0, 0, 0, 0, 1, 0, 1],
            ],
        );
        assert_eq!(solve(&mut matrix), vec![1, 3, 0]);
    }

    #[test]
    fn test_failed_search_leaves_matrix_restored() {
        let mut matrix = build(
            &["a", "b", "c", "d", "e", "f", "g"],
            &[
                &[1, 1, 0, 1, 0, 0, 1],
                &[1, 0, 1, 1, 0, 0, 0],
                &[0, 0, 1, 0, 0, 1, 0],
                &[0, 1, 0, 0, 1, 1, 0],
                &[0, 0, 0, 0, 1, 0, 1],
            ],
        );
        let columns_before = remaining_columns(&matrix);
        let sizes_before: Vec<usize> = (1..=7).map(|c| matrix.size_of(c)).collect();

        assert!(solve(&mut matrix).is_empty());

        assert_eq!(remaining_columns(&matrix), columns_before);
        let sizes_after: Vec<usize> = (1..=7).map(|c| matrix.size_of(c)).collect();
        assert_eq!(sizes_after, sizes_before);
    }

    #[test]
    fn test_successful_search_is_repeatable() {
        let mut matrix = build(
            &["a", "b", "c", "d", "e", "f"],
            &[
                &[0, 1, 0, 0, 0, 0],
                &[1, 0, 0, 1, 0, 0],
                &[0, 0, 1, 0, 0, 0],
                &[0, 0, 0, 0, 1, 1],
                &[1, 1, 0, 0, 0, 0],
            ],
        );
        assert_eq!(solve(&mut matrix), vec![2, 1, 0, 3]);
        // The search restores the structure on the way out, so a second
        // search over the same matrix finds the same cover.
        assert_eq!(solve(&mut matrix), vec![2, 1, 0, 3]);
    }

    #[test]
    fn test_empty_instance_yields_empty_solution() {
        let mut matrix = build(&[], &[]);
        assert_eq!(solve(&mut matrix), Vec::<usize>::new());
    }

    #[test]
    fn test_chooses_column_with_fewest_rows() {
        let matrix = build(
            &["a", "b", "c", "d", "e", "f"],
            &[
                &[0, 1, 0, 0, 0, 0],
                &[1, 0, 0, 1, 0, 0],
                &[0, 0, 1, 0, 0, 0],
                &[0, 0, 0, 0, 1, 1],
                &[1, 1, 0, 0, 0, 0],
            ],
        );
        // Sizes are [2, 2, 1, 1, 1, 1]; c is the leftmost minimal column.
        assert_eq!(matrix.name_of(choose_column(&matrix)), "c");
    }

    #[test]
    fn test_column_choice_breaks_ties_leftmost() {
        let matrix = build(
            &["a", "b", "c"],
            &[&[1, 0, 0], &[0, 1, 0], &[0, 0, 1], &[0, 0, 1]],
        );
        // a and b share the minimal size of 1; the earlier column wins.
        assert_eq!(matrix.name_of(choose_column(&matrix)), "a");

        let matrix = build(
            &["a", "b", "c", "d", "e", "f", "g"],
            &[
                &[1, 1, 0, 1, 0, 0, 1],
                &[1, 0, 1, 1, 0, 0, 0],
                &[0, 0, 1, 0, 0, 1, 0],
                &[0, 1, 0, 0, 1, 1, 0],
                &[0, 0, 0, 0, 1, 0, 1],
            ],
        );
        // Every column has size 2 here, so the first one is chosen.
        assert_eq!(matrix.name_of(choose_column(&matrix)), "a");
    }
}
