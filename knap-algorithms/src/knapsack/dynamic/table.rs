/// Row-major `(n + 1) x (capacity + 1)` table of best values.
///
/// `get(i, w)` is the best value reachable with the first `i` items and a
/// scaled weight budget of `w`.
#[derive(Debug, Clone)]
pub struct Table {
    rows: usize,
    columns: usize,
    cells: Vec<u64>,
}

impl Table {
    /// Fills the table in a single pass. Each row reads only the previous one.
    ///
    /// On equal candidates the cell keeps the exclusion value, so an item only
    /// changes a cell when it strictly improves it.
    pub fn build(values: &[u64], weights: &[Option<usize>], capacity: usize) -> Self {
        debug_assert_eq!(values.len(), weights.len());
        let rows = values.len() + 1;
        let columns = capacity + 1;
        let mut cells = vec![0u64; rows * columns];

        for i in 1..rows {
            let (filled, rest) = cells.split_at_mut(i * columns);
            let prev = &filled[(i - 1) * columns..];
            let cur = &mut rest[..columns];
            let value = values[i - 1];

            match weights[i - 1] {
                Some(wt) if wt < columns => {
                    cur[..wt].copy_from_slice(&prev[..wt]);
                    for w in wt..columns {
                        let include = prev[w - wt] + value;
                        cur[w] = if include > prev[w] { include } else { prev[w] };
                    }
                }
                _ => cur.copy_from_slice(prev),
            }
        }

        Self {
            rows,
            columns,
            cells,
        }
    }

    #[inline(always)]
    pub fn get(&self, i: usize, w: usize) -> u64 {
        self.cells[i * self.columns + w]
    }

    pub fn num_rows(&self) -> usize {
        self.rows
    }

    pub fn num_columns(&self) -> usize {
        self.columns
    }

    pub fn optimal_value(&self) -> u64 {
        self.get(self.rows - 1, self.columns - 1)
    }

    /// Walks back from the last cell. Item `i` is included exactly when
    /// `get(i, w) != get(i - 1, w)`.
    pub fn reconstruct(&self, weights: &[Option<usize>]) -> Vec<bool> {
        let mut included = vec![false; self.rows - 1];
        let mut w = self.columns - 1;
        for i in (1..self.rows).rev() {
            if self.get(i, w) == self.get(i - 1, w) {
                continue;
            }
            // a cell only differs from the row above through the include branch
            if let Some(wt) = weights[i - 1] {
                included[i - 1] = true;
                w -= wt;
            }
        }
        included
    }
}
