//! The circular four-directional linked structure behind the solver.
//!
//! A [`LinkedMatrix`] represents a sparse 0/1 matrix as two orthogonal
//! families of circular doubly-linked rings: a left-right ring of column
//! headers anchored by a root node, and per-column up-down rings of data
//! nodes, where the data nodes of one input row are additionally tied into
//! a left-right ring of their own. All links are indices into a single node
//! arena, so the arena owns every node for the lifetime of the structure
//! and no node is ever allocated or freed during search.
//!
//! The only mutation entry points are `cover` and `uncover`, which are
//! exact inverses: covering unlinks a column and every row that uses it
//! without deallocating anything, and uncovering restores the links in the
//! reverse order they were removed.

use crate::error::{Error, Result};
use crate::validate;

/// One node of the structure, linked up/down/left/right in circular rings.
///
/// The root header, the column headers and the data nodes all share this
/// layout; `column` points at the owning column header (or at the node
/// itself for headers).
#[derive(Clone, Debug, PartialEq, Eq)]
struct Node {
    left: usize,
    right: usize,
    up: usize,
    down: usize,
    column: usize,
}

/// Per-column metadata: the constraint's name and how many data nodes are
/// currently linked into its up-down ring.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Column {
    name: String,
    size: usize,
}

/// The linked representation of one exact cover instance.
///
/// Built once per problem with [`LinkedMatrix::build`], mutated in place by
/// the search through `cover`/`uncover`, and discarded afterwards.
pub struct LinkedMatrix {
    /// Index of the root header node, the anchor of the column ring.
    root: usize,
    nodes: Vec<Node>,
    /// Parallel to the header part of `nodes`: `cols[c]` describes the
    /// column whose header node is `nodes[c]`. `cols[0]` is a placeholder
    /// for the root.
    cols: Vec<Column>,
    n_cols: usize,
    /// Which input row a data node came from, indexed by
    /// `node - first_data_node`.
    row_id: Vec<usize>,
}

impl LinkedMatrix {
    /// Builds the linked structure from column names and 0/1 rows.
    ///
    /// Column headers are linked left to right in input order with the root
    /// as the ring anchor. Data nodes are appended row by row: each node
    /// goes to the bottom of its column's ring (the column header's `up`
    /// link is the running tail) and to the right end of its row's ring,
    /// and the column's size counter is bumped as nodes arrive.
    ///
    /// # Arguments
    /// * `column_names` - One name per constraint, in order
    /// * `rows` - Candidate rows; `rows[r][c]` means row `r` covers column `c`
    ///
    /// # Returns
    /// * `Ok(matrix)` - The linked structure, ready to solve
    /// * `Err(Error::InvalidInput)` - If a row's length disagrees with the
    ///   number of columns, or a single row covers every column on its own
    ///
    /// # Examples
    /// ```
    /// use exact_cover::LinkedMatrix;
    ///
    /// let rows = vec![
    ///     vec![true, false, false],
    ///     vec![false, true, true],
    /// ];
    /// let matrix = LinkedMatrix::build(&["a", "b", "c"], &rows).unwrap();
    /// assert_eq!(matrix.n_cols(), 3);
    /// ```
    pub fn build(column_names: &[&str], rows: &[Vec<bool>]) -> Result<Self> {
        let n_cols = column_names.len();
        for (r, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                return Err(Error::invalid_input(format!(
                    "row {} has {} entries, expected {}",
                    r,
                    row.len(),
                    n_cols
                )));
            }
            if validate::covers_universe(row, n_cols) {
                return Err(Error::invalid_input(format!(
                    "row {} covers every column on its own",
                    r
                )));
            }
        }

        let mut matrix = LinkedMatrix {
            root: 0,
            nodes: Vec::with_capacity(1 + n_cols),
            cols: Vec::with_capacity(1 + n_cols),
            n_cols,
            row_id: vec![],
        };

        // Root header; for the empty instance its four links stay on itself.
        matrix.nodes.push(Node {
            left: 0,
            right: 0,
            up: 0,
            down: 0,
            column: 0,
        });
        matrix.cols.push(Column {
            name: String::new(),
            size: 0,
        });

        // Column headers, linked left to right in input order.
        for (c, name) in column_names.iter().enumerate() {
            let idx = c + 1;
            matrix.nodes.push(Node {
                left: idx - 1,
                right: if idx == n_cols { 0 } else { idx + 1 },
                up: idx,
                down: idx,
                column: idx,
            });
            matrix.cols.push(Column {
                name: (*name).to_string(),
                size: 0,
            });
        }
        if n_cols > 0 {
            matrix.nodes[0].left = n_cols;
            matrix.nodes[0].right = 1;
        }

        // Data nodes, row by row. The column header's `up` link is the
        // current tail of its ring, so appending at the bottom is O(1).
        for (r, row) in rows.iter().enumerate() {
            let mut first_in_row: Option<usize> = None;
            for (c, &cell) in row.iter().enumerate() {
                if !cell {
                    continue;
                }
                let col = c + 1;
                let tail = matrix.nodes[col].up;
                let node = matrix.nodes.len();
                matrix.nodes.push(Node {
                    left: node,
                    right: node,
                    up: tail,
                    down: col,
                    column: col,
                });
                matrix.row_id.push(r);
                matrix.nodes[tail].down = node;
                matrix.nodes[col].up = node;
                matrix.cols[col].size += 1;

                // Splice into the row ring just left of its first node.
                if let Some(first) = first_in_row {
                    let last = matrix.nodes[first].left;
                    matrix.nodes[node].right = first;
                    matrix.nodes[node].left = last;
                    matrix.nodes[last].right = node;
                    matrix.nodes[first].left = node;
                } else {
                    first_in_row = Some(node);
                }
            }
        }

        log::debug!(
            "built linked matrix: {} columns, {} data nodes",
            n_cols,
            matrix.row_id.len()
        );
        Ok(matrix)
    }

    /// Number of columns in the instance.
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    pub(crate) fn header(&self) -> usize {
        self.root
    }

    pub(crate) fn left_of(&self, i: usize) -> usize {
        self.nodes[i].left
    }

    pub(crate) fn right_of(&self, i: usize) -> usize {
        self.nodes[i].right
    }

    pub(crate) fn down_of(&self, i: usize) -> usize {
        self.nodes[i].down
    }

    pub(crate) fn column_of(&self, i: usize) -> usize {
        self.nodes[i].column
    }

    pub(crate) fn size_of(&self, col: usize) -> usize {
        self.cols[col].size
    }

    pub(crate) fn name_of(&self, col: usize) -> &str {
        &self.cols[col].name
    }

    /// The input row a data node belongs to.
    pub(crate) fn row_of(&self, node: usize) -> usize {
        self.row_id[node - (1 + self.n_cols)]
    }

    /// Removes `col` from the header ring, then unlinks every data node of
    /// every row using `col` from its own column's ring, decrementing the
    /// affected column sizes. Nothing is freed; every removed link is
    /// restorable by [`uncover`](Self::uncover).
    pub(crate) fn cover(&mut self, col: usize) {
        let left = self.nodes[col].left;
        let right = self.nodes[col].right;
        self.nodes[left].right = right;
        self.nodes[right].left = left;

        let mut i = self.nodes[col].down;
        while i != col {
            let mut j = self.nodes[i].right;
            while j != i {
                let up = self.nodes[j].up;
                let down = self.nodes[j].down;
                self.nodes[up].down = down;
                self.nodes[down].up = up;
                self.cols[self.nodes[j].column].size -= 1;
                j = self.nodes[j].right;
            }
            i = self.nodes[i].down;
        }
    }

    /// Exact inverse of [`cover`](Self::cover), traversing both rings in
    /// the opposite direction so that links removed last are restored
    /// first. Covers and uncovers must nest like a stack; the search is
    /// responsible for pairing them in reverse order.
    pub(crate) fn uncover(&mut self, col: usize) {
        let mut i = self.nodes[col].up;
        while i != col {
            let mut j = self.nodes[i].left;
            while j != i {
                self.cols[self.nodes[j].column].size += 1;
                let up = self.nodes[j].up;
                let down = self.nodes[j].down;
                self.nodes[up].down = j;
                self.nodes[down].up = j;
                j = self.nodes[j].left;
            }
            i = self.nodes[i].up;
        }

        let left = self.nodes[col].left;
        let right = self.nodes[col].right;
        self.nodes[left].right = col;
        self.nodes[right].left = col;
    }
}
