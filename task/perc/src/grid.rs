use crate::{Error, Result, UnionFind};

////////////////////////////////////////////////////////////////////////////////

/// An `n`-by-`n` grid of sites, each either open or blocked.
///
/// Site `(row, col)` maps to element `row * n + col` of two disjoint sets.
/// Element `n * n` is a virtual top node joined with every open site of the
/// first row, element `n * n + 1` is a virtual bottom node joined with every
/// open site of the last row.
///
/// `percolation` is linked to both virtual nodes and answers
/// [`Percolation::percolates`]. `fullness` is never linked to the bottom node,
/// so a site that only reaches the top through the bottom row is not
/// reported as full once the system percolates.
pub struct Percolation {
    size: usize,
    open: Vec<bool>,
    open_count: usize,
    percolation: UnionFind,
    fullness: UnionFind,
    percolated: bool,
}

impl Percolation {
    /// Creates an `n`-by-`n` grid with all sites blocked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `n` is zero.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::invalid_argument("grid size must be positive"));
        }

        let sites = n
            .checked_mul(n)
            .and_then(|sites| sites.checked_add(2))
            .ok_or_else(|| Error::invalid_argument(format!("grid size {n} is too large")))?;

        Ok(Self {
            size: n,
            open: vec![false; n * n],
            open_count: 0,
            percolation: UnionFind::new(sites)?,
            fullness: UnionFind::new(sites)?,
            percolated: false,
        })
    }

    /// Returns the grid dimension `n`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Opens the site `(row, col)` if it is not open already.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let site = self.site(row, col)?;
        if self.open[site] {
            return Ok(());
        }

        self.open[site] = true;
        self.open_count += 1;

        if row == 0 {
            let top = self.top();
            self.percolation.union(site, top)?;
            self.fullness.union(site, top)?;
        }
        if row == self.size - 1 {
            let bottom = self.bottom();
            self.percolation.union(site, bottom)?;
        }

        for neighbour in self.neighbours(row, col) {
            if self.open[neighbour] {
                self.percolation.union(site, neighbour)?;
                self.fullness.union(site, neighbour)?;
            }
        }

        if !self.percolated && self.percolates() {
            log::trace!(
                "{n}x{n} grid percolates after opening ({row}, {col}), {} sites open",
                self.open_count,
                n = self.size,
            );
        }

        Ok(())
    }

    /// Returns `true` if the site `(row, col)` is open.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        let site = self.site(row, col)?;
        Ok(self.open[site])
    }

    /// Returns `true` if the site `(row, col)` is open and connected to the
    /// top row through open sites.
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        let site = self.site(row, col)?;
        if !self.open[site] {
            return Ok(false);
        }

        let top = self.top();
        self.fullness.connected(site, top)
    }

    /// Returns the number of open sites.
    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    /// Returns `true` if the top row is connected to the bottom row.
    pub fn percolates(&mut self) -> bool {
        if !self.percolated {
            let (top, bottom) = (self.top(), self.bottom());
            self.percolated = matches!(self.percolation.connected(top, bottom), Ok(true));
        }
        self.percolated
    }

    fn top(&self) -> usize {
        self.size * self.size
    }

    fn bottom(&self) -> usize {
        self.size * self.size + 1
    }

    fn site(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.size || col >= self.size {
            return Err(Error::invalid_argument(format!(
                "site ({row}, {col}) is outside of {n}x{n} grid",
                n = self.size
            )));
        }
        Ok(row * self.size + col)
    }

    fn neighbours(&self, row: usize, col: usize) -> impl Iterator<Item = usize> {
        let n = self.size;
        let moves: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

        moves.into_iter().filter_map(move |(dr, dc)| {
            let row = row.checked_add_signed(dr)?;
            let col = col.checked_add_signed(dc)?;
            (row < n && col < n).then_some(row * n + col)
        })
    }
}
