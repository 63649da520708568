//! The prefix-LCS table shared by the full-table solvers.
//!
//! Cell (i, j) holds the LCS length of the length-i prefix of X and the
//! length-j prefix of Y. Row 0 and column 0 are always zero. The table obeys
//! `dp[i][j] - dp[i-1][j] ∈ {0, 1}` (and likewise along j): prefix-LCS grows
//! by at most one per consumed symbol.

/// A filled (n+1)×(m+1) LCS table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpTable {
    cells: Vec<Vec<u32>>,
}

impl DpTable {
    /// Build the table bottom-up, row-major, for sequences `x` and `y`.
    ///
    /// Recurrence: on a symbol match, diagonal + 1; otherwise the max of the
    /// up and left neighbors.
    pub fn build(x: &[u8], y: &[u8]) -> Self {
        let n = x.len();
        let m = y.len();
        let mut cells = vec![vec![0u32; m + 1]; n + 1];
        for i in 1..=n {
            for j in 1..=m {
                cells[i][j] = if x[i - 1] == y[j - 1] {
                    cells[i - 1][j - 1] + 1
                } else {
                    cells[i - 1][j].max(cells[i][j - 1])
                };
            }
        }
        Self { cells }
    }

    /// Number of rows, `|X| + 1`.
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns, `|Y| + 1`.
    pub fn cols(&self) -> usize {
        self.cells[0].len()
    }

    /// Cell value at (i, j).
    ///
    /// # Panics
    /// Panics if `i >= rows()` or `j >= cols()`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i][j]
    }

    /// The final cell, i.e. the LCS length of the full sequences.
    pub fn final_len(&self) -> u32 {
        self.cells[self.rows() - 1][self.cols() - 1]
    }

    /// Render the table with `y` as column headers and `x` as row labels.
    ///
    /// `x` and `y` must be the sequences the table was built from; mismatched
    /// lengths panic.
    pub fn render(&self, x: &[u8], y: &[u8]) -> String {
        assert_eq!(x.len() + 1, self.rows(), "row label length mismatch");
        assert_eq!(y.len() + 1, self.cols(), "column header length mismatch");

        let mut out = String::new();
        out.push_str("     ");
        for &ch in y {
            out.push_str(&format!("{:>3}", ch as char));
        }
        out.push('\n');

        for (i, row) in self.cells.iter().enumerate() {
            let label = if i == 0 { ' ' } else { x[i - 1] as char };
            out.push_str(&format!("{label} |"));
            for &val in row {
                out.push_str(&format!("{val:>3}"));
            }
            out.push('\n');
        }
        out
    }
}
