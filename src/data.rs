/// A grid coordinate. Rows and columns both count from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Site {
    pub row: usize,
    pub col: usize,
}

impl Site {
    pub fn new(row: usize, col: usize) -> Site {
        Site { row, col }
    }

    /// Returns the adjacent site in direction `d`, or `None` if it falls off
    /// an `n`x`n` grid.
    pub fn step_toward(&self, d: Direction, n: usize) -> Option<Site> {
        let (row, col) = match d {
            Direction::North => (self.row.checked_sub(1)?, self.col),
            Direction::South => (self.row + 1, self.col),
            Direction::East => (self.row, self.col + 1),
            Direction::West => (self.row, self.col.checked_sub(1)?),
        };
        if row < 1 || row > n || col < 1 || col > n {
            None
        } else {
            Some(Site { row, col })
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    North, East, South, West,
}

impl Direction {
    pub fn adjacent_directions() -> [Direction; 4] {
        [Direction::North, Direction::East,
        Direction::South, Direction::West]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbors(site: Site, n: usize) -> Vec<Site> {
        Direction::adjacent_directions().iter()
            .filter_map(|&d| site.step_toward(d, n))
            .collect()
    }

    #[test]
    fn interior_site_has_four_neighbors() {
        let ns = neighbors(Site::new(2, 2), 3);
        assert_eq!(ns, vec![Site::new(1, 2), Site::new(2, 3), Site::new(3, 2), Site::new(2, 1)]);
    }

    #[test]
    fn corners_and_edges() {
        assert_eq!(neighbors(Site::new(1, 1), 3), vec![Site::new(1, 2), Site::new(2, 1)]);
        assert_eq!(neighbors(Site::new(3, 3), 3), vec![Site::new(2, 3), Site::new(3, 2)]);
        assert_eq!(neighbors(Site::new(1, 2), 3).len(), 3);
    }

    #[test]
    fn single_site_grid_has_no_neighbors() {
        assert!(neighbors(Site::new(1, 1), 1).is_empty());
    }
}
