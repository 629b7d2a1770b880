//! Console rendering of the adjacency matrix.

use core::fmt;

use super::AdjacencyMatrixGraph;

/// Token rendered for an empty cell.
const NO_EDGE: &str = "[None]";

/// Separator between columns.
const GAP: &str = "  ";

/// Renders an [`AdjacencyMatrixGraph`] as an aligned table.
///
/// The first line holds the column elements; each following line starts with
/// its row element. A populated cell shows the edge's endpoints in
/// construction order, `(u, v)`; with `{:#}` the label initial follows, as in
/// `(u, v):D`. Trailing whitespace is trimmed from every line.
pub struct MatrixDisplay<'a> {
    graph: &'a AdjacencyMatrixGraph,
}

impl<'a> MatrixDisplay<'a> {
    pub(super) fn new(graph: &'a AdjacencyMatrixGraph) -> Self {
        Self { graph }
    }

    fn cell_text(&self, row: usize, col: usize, with_label: bool) -> String {
        match self.graph.cell(row, col) {
            None => NO_EDGE.to_owned(),
            Some(id) => {
                let edge = self.graph.edge(id);
                let (u, v) = edge.endpoints();
                if with_label {
                    format!("({u}, {v}):{}", edge.label().initial())
                } else {
                    format!("({u}, {v})")
                }
            }
        }
    }
}

impl fmt::Display for MatrixDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.graph.vertex_count();
        if n == 0 {
            return Ok(());
        }
        let with_label = f.alternate();

        let cells: Vec<Vec<String>> = (0..n)
            .map(|row| (0..n).map(|col| self.cell_text(row, col, with_label)).collect())
            .collect();

        let header_width = (n - 1).to_string().len();
        let width = cells
            .iter()
            .flatten()
            .map(String::len)
            .chain([NO_EDGE.len(), header_width])
            .max()
            .unwrap_or(NO_EDGE.len());

        let mut line = String::new();
        line.push_str(&format!("{:>header_width$}", ""));
        for col in 0..n {
            line.push_str(GAP);
            line.push_str(&format!("{col:<width$}"));
        }
        writeln!(f, "{}", line.trim_end())?;

        for (row, row_cells) in cells.iter().enumerate() {
            line.clear();
            line.push_str(&format!("{row:>header_width$}"));
            for text in row_cells {
                line.push_str(GAP);
                line.push_str(&format!("{text:<width$}"));
            }
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
