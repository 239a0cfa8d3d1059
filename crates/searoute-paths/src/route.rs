//! The [`Route`] type — an immutable, non-empty sequence of cells.

use std::fmt;
use std::sync::Arc;

use searoute_core::Cell;

/// A finite, ordered, non-empty sequence of cells from start to end
/// inclusive.
///
/// Routes are immutable once built and cheap to clone (the cell sequence is
/// shared). Callers that need to mutate one must copy it out via
/// [`to_vec`](Route::to_vec).
///
/// The route memory hands out clones of a single underlying sequence, so a
/// cached route is never re-materialized per query.
#[derive(Clone, PartialEq, Eq)]
pub struct Route {
    cells: Arc<[Cell]>,
}

impl Route {
    /// Build a route from a cell sequence.
    ///
    /// Panics if `cells` is empty: an empty route is a programming error,
    /// not a recoverable outcome.
    pub fn new(cells: Vec<Cell>) -> Self {
        assert!(!cells.is_empty(), "a route must contain at least one cell");
        Self {
            cells: cells.into(),
        }
    }

    /// The one-cell route from `c` to itself.
    pub fn single(c: Cell) -> Self {
        Self {
            cells: Arc::from([c]),
        }
    }

    /// First cell (the query's start).
    #[inline]
    pub fn start(&self) -> Cell {
        self.cells[0]
    }

    /// Last cell (the query's end).
    #[inline]
    pub fn end(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    /// Number of cells, always >= 1.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Routes are never empty; provided for API completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The full cell sequence.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterator over the cells, start to end.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// The same route traversed end to start.
    pub fn reversed(&self) -> Route {
        let mut cells: Vec<Cell> = self.cells.to_vec();
        cells.reverse();
        Self {
            cells: cells.into(),
        }
    }

    /// Copy the cells into an owned, mutable `Vec`.
    pub fn to_vec(&self) -> Vec<Cell> {
        self.cells.to_vec()
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.cells.iter()).finish()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Route {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.cells.as_ref().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Route {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let cells = Vec::<Cell>::deserialize(deserializer)?;
        if cells.is_empty() {
            return Err(serde::de::Error::custom("route must be non-empty"));
        }
        Ok(Route::new(cells))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_and_len() {
        let r = Route::new(vec![Cell::new(0, 0), Cell::new(1, 1), Cell::new(2, 2)]);
        assert_eq!(r.start(), Cell::new(0, 0));
        assert_eq!(r.end(), Cell::new(2, 2));
        assert_eq!(r.len(), 3);
        assert!(!r.is_empty());
    }

    #[test]
    fn single_cell_route() {
        let c = Cell::new(7, 7);
        let r = Route::single(c);
        assert_eq!(r.start(), c);
        assert_eq!(r.end(), c);
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn reversed_flips_endpoints() {
        let r = Route::new(vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)]);
        let rev = r.reversed();
        assert_eq!(rev.start(), r.end());
        assert_eq!(rev.end(), r.start());
        assert_eq!(rev.reversed(), r);
    }

    #[test]
    fn clones_share_cells() {
        let r = Route::new(vec![Cell::new(0, 0), Cell::new(1, 1)]);
        let c = r.clone();
        assert_eq!(r, c);
        assert!(std::ptr::eq(r.cells().as_ptr(), c.cells().as_ptr()));
    }

    #[test]
    fn to_vec_copies_are_independent() {
        let r = Route::new(vec![Cell::new(0, 0), Cell::new(1, 1)]);
        let mut copy = r.to_vec();
        copy.push(Cell::new(2, 2));
        assert_eq!(r.len(), 2);
        assert_eq!(copy.len(), 3);
    }

    #[test]
    fn display_arrows() {
        let r = Route::new(vec![Cell::new(0, 0), Cell::new(1, 1)]);
        assert_eq!(r.to_string(), "(0, 0) -> (1, 1)");
    }

    #[test]
    #[should_panic(expected = "at least one cell")]
    fn empty_route_panics() {
        let _ = Route::new(Vec::new());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn route_round_trip() {
        let r = Route::new(vec![Cell::new(0, 0), Cell::new(1, 1), Cell::new(1, 2)]);
        let json = serde_json::to_string(&r).unwrap();
        let back: Route = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }

    #[test]
    fn empty_route_rejected() {
        assert!(serde_json::from_str::<Route>("[]").is_err());
    }
}
