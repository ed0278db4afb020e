//! N-by-N percolation grid.
//!
//! Sites are blocked or open. Connectivity between open sites is kept in a
//! [`DisjointSet`] of `N² + 2` elements: one per site, plus a virtual top
//! joined to every open site of row 1 and a virtual bottom joined to every
//! open site of row N. The grid percolates exactly when the two virtual
//! elements share a set.

use std::collections::TryReserveError;

use crate::data::{Direction, Site};
use crate::disjoint_set::DisjointSet;
use crate::error::{Error, Result};

/// Per-site values, addressed with 1-indexed [`Site`]s.
#[derive(Debug, Clone)]
pub(crate) struct SiteMap<T> {
    rows: Vec<Vec<T>>,
}

impl<T: Clone> SiteMap<T> {
    /// An `n`x`n` map filled with `value`; a failed allocation is an error.
    fn try_filled(n: usize, value: T) -> Result<SiteMap<T>> {
        let too_large = |e: TryReserveError| Error::InvalidArgument(format!("grid size {} is too large: {}", n, e));
        let mut rows = Vec::new();
        rows.try_reserve_exact(n).map_err(too_large)?;
        for _ in 0..n {
            let mut row = Vec::new();
            row.try_reserve_exact(n).map_err(too_large)?;
            row.resize(n, value.clone());
            rows.push(row);
        }
        Ok(SiteMap { rows })
    }
}

impl<T> SiteMap<T> {
    fn get(&self, site: Site) -> &T {
        &self.rows[site.row - 1][site.col - 1]
    }

    fn get_mut(&mut self, site: Site) -> &mut T {
        &mut self.rows[site.row - 1][site.col - 1]
    }
}

#[derive(Debug, Clone)]
pub struct Percolation {
    n: usize,
    open_sites: SiteMap<bool>,
    number_of_open_sites: usize,
    sets: DisjointSet,
    virtual_top: usize,
    virtual_bottom: usize,
}

impl Percolation {
    /// Creates an `n`x`n` grid with every site blocked. Sizes whose
    /// storage cannot be allocated are rejected as invalid arguments.
    pub fn new(n: usize) -> Result<Percolation> {
        if n == 0 {
            return Err(Error::InvalidArgument("grid size must be positive".to_string()));
        }
        let cells = n.checked_mul(n)
            .and_then(|c| c.checked_add(2))
            .ok_or_else(|| Error::InvalidArgument(format!("grid size {} is too large", n)))?;
        let sets = DisjointSet::try_new(cells)?;
        Ok(Percolation {
            n,
            open_sites: SiteMap::try_filled(n, false)?,
            number_of_open_sites: 0,
            sets,
            virtual_top: n * n,
            virtual_bottom: n * n + 1,
        })
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn number_of_open_sites(&self) -> usize {
        self.number_of_open_sites
    }

    fn site(&self, row: usize, col: usize) -> Result<Site> {
        if row < 1 || row > self.n || col < 1 || col > self.n {
            return Err(Error::SiteOutOfRange { row, col, size: self.n });
        }
        Ok(Site { row, col })
    }

    fn index(&self, site: Site) -> usize {
        (site.row - 1) * self.n + (site.col - 1)
    }

    /// Opens site (`row`, `col`) and joins it to its open neighbours. Opening
    /// an open site does nothing.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let site = self.site(row, col)?;
        if *self.open_sites.get(site) {
            return Ok(());
        }
        *self.open_sites.get_mut(site) = true;
        self.number_of_open_sites += 1;
        trace!("opened ({}, {})", row, col);

        let idx = self.index(site);
        for &d in Direction::adjacent_directions().iter() {
            if let Some(neighbor) = site.step_toward(d, self.n) {
                if *self.open_sites.get(neighbor) {
                    let neighbor_idx = self.index(neighbor);
                    self.sets.union(idx, neighbor_idx)?;
                }
            }
        }

        // both checks fire for the single site of a 1x1 grid
        if row == 1 {
            self.sets.union(idx, self.virtual_top)?;
        }
        if row == self.n {
            self.sets.union(idx, self.virtual_bottom)?;
        }
        Ok(())
    }

    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        let site = self.site(row, col)?;
        Ok(*self.open_sites.get(site))
    }

    /// Whether site (`row`, `col`) is connected to the top row through open
    /// sites. Takes `&mut self` because the lookup compresses paths.
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        let site = self.site(row, col)?;
        let idx = self.index(site);
        self.sets.connected(idx, self.virtual_top)
    }

    pub fn percolates(&mut self) -> bool {
        let (top, bottom) = (self.virtual_top, self.virtual_bottom);
        // both indices are allocated in `new`
        self.sets.root(top) == self.sets.root(bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_size_is_rejected() {
        match Percolation::new(0) {
            Err(Error::InvalidArgument(_)) => {}
            other => panic!("unexpected {:?}", other.map(|p| p.size())),
        }
    }

    #[test]
    fn unallocatable_size_is_rejected() {
        // n² + 2 fits in a usize, the disjoint set's storage does not
        let n = (usize::MAX as f64).sqrt() as usize / 2;
        match Percolation::new(n) {
            Err(Error::InvalidArgument(msg)) => assert!(msg.contains("cannot hold")),
            other => panic!("unexpected {:?}", other.map(|p| p.size())),
        }
    }

    #[test]
    fn site_map_lookup() {
        let mut map = SiteMap::try_filled(2, 0u8).unwrap();
        *map.get_mut(Site::new(2, 1)) = 7;
        assert_eq!(*map.get(Site::new(2, 1)), 7);
        assert_eq!(*map.get(Site::new(1, 2)), 0);
    }

    #[test]
    fn starts_blocked() {
        let mut p = Percolation::new(3).unwrap();
        for i in 1..=3 {
            for j in 1..=3 {
                assert!(!p.is_open(i, j).unwrap());
                assert!(!p.is_full(i, j).unwrap());
            }
        }
        assert!(!p.percolates());
        assert_eq!(p.number_of_open_sites(), 0);
    }

    #[test]
    fn single_site_grid() {
        let mut p = Percolation::new(1).unwrap();
        assert!(!p.percolates());
        p.open(1, 1).unwrap();
        assert!(p.is_full(1, 1).unwrap());
        assert!(p.percolates());
    }

    #[test]
    fn diagonal_does_not_percolate() {
        let mut p = Percolation::new(2).unwrap();
        p.open(1, 1).unwrap();
        p.open(2, 2).unwrap();
        assert!(!p.percolates());
        assert!(p.is_full(1, 1).unwrap());
        assert!(!p.is_full(2, 2).unwrap());

        p.open(1, 2).unwrap();
        assert!(p.is_full(2, 2).unwrap());
        assert!(p.percolates());
        p.open(2, 1).unwrap();
        assert!(p.percolates());
    }

    #[test]
    fn open_is_idempotent() {
        let mut p = Percolation::new(3).unwrap();
        p.open(2, 2).unwrap();
        p.open(2, 2).unwrap();
        assert_eq!(p.number_of_open_sites(), 1);
        assert_eq!(p.sets.count(), 3 * 3 + 2);
    }

    #[test]
    fn bottom_row_fills_through_virtual_bottom_once_percolating() {
        let mut p = Percolation::new(3).unwrap();
        p.open(3, 1).unwrap();
        p.open(3, 3).unwrap();
        assert!(!p.is_full(3, 1).unwrap());
        p.open(1, 3).unwrap();
        p.open(2, 3).unwrap();
        assert!(p.percolates());
        assert!(p.is_full(3, 3).unwrap());
        // (3, 1) has no open neighbour, it reaches the top via the shared bottom
        assert!(p.is_full(3, 1).unwrap());
        assert!(!p.is_full(3, 2).unwrap());
    }

    #[test]
    fn out_of_range_sites() {
        let mut p = Percolation::new(2).unwrap();
        for &(i, j) in &[(0, 1), (1, 0), (3, 1), (1, 3)] {
            match p.open(i, j) {
                Err(Error::SiteOutOfRange { row, col, size: 2 }) => assert_eq!((row, col), (i, j)),
                other => panic!("unexpected {:?}", other),
            }
            assert!(p.is_open(i, j).is_err());
            assert!(p.is_full(i, j).is_err());
        }
        assert_eq!(p.number_of_open_sites(), 0);
    }
}
