//! The [`SeaChart`] type — a grid of water, land and ports.
//!
//! Each cell carries an altitude: `<= 0.0` is water and may be sailed
//! through, `> 0.0` is land and blocks travel. A cell may additionally be
//! flagged as a port, which makes it navigable regardless of altitude (the
//! harbor sits on land, but ships dock there).
//!
//! Charts can be built programmatically or parsed from ASCII art via
//! [`SeaChart::from_ascii`], which is handy in tests and demos.

use std::fmt;

use crate::geom::{Cell, Range};

/// A rectangular nautical chart: altitude plus port flags per cell.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeaChart {
    width: i32,
    height: i32,
    altitude: Vec<f64>,
    port: Vec<bool>,
}

impl SeaChart {
    /// Altitude assigned to water cells by [`new`](Self::new) and
    /// [`from_ascii`](Self::from_ascii).
    pub const WATER: f64 = -1.0;
    /// Altitude assigned to land cells by [`from_ascii`](Self::from_ascii).
    pub const LAND: f64 = 1.0;

    /// Create a chart of the given dimensions, all cells open water.
    ///
    /// Panics if either dimension is not positive (a zero-sized world is a
    /// programming error, not a recoverable outcome).
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "chart dimensions must be positive");
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            altitude: vec![Self::WATER; len],
            port: vec![false; len],
        }
    }

    /// Parse a chart from ASCII art.
    ///
    /// Recognized glyphs: `.` open water, `#` land, `P` a port on land.
    /// Lines must all have the same width; leading/trailing whitespace is
    /// trimmed from the whole string but not from individual lines.
    pub fn from_ascii(s: &str) -> Result<Self, ChartParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ChartParseError::Empty);
        }

        let mut rows: Vec<(Vec<f64>, Vec<bool>)> = Vec::new();
        let mut width: i32 = -1;
        for (y, line) in s.lines().enumerate() {
            let mut alts = Vec::new();
            let mut ports = Vec::new();
            for (x, ch) in line.chars().enumerate() {
                let (alt, is_port) = match ch {
                    '.' => (Self::WATER, false),
                    '#' => (Self::LAND, false),
                    'P' => (Self::LAND, true),
                    _ => {
                        return Err(ChartParseError::UnknownGlyph {
                            ch,
                            pos: Cell::new(x as i32, y as i32),
                        });
                    }
                };
                alts.push(alt);
                ports.push(is_port);
            }
            let w = alts.len() as i32;
            if width >= 0 && w != width {
                return Err(ChartParseError::RaggedLine { line: y as i32 });
            }
            width = w;
            rows.push((alts, ports));
        }

        let height = rows.len() as i32;
        let mut altitude = Vec::with_capacity((width * height) as usize);
        let mut port = Vec::with_capacity((width * height) as usize);
        for (alts, ports) in rows {
            altitude.extend(alts);
            port.extend(ports);
        }
        Ok(Self {
            width,
            height,
            altitude,
            port,
        })
    }

    /// The chart's bounding range, anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Chart width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Chart height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether the cell lies on the chart.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        c.x >= 0 && c.y >= 0 && c.x < self.width && c.y < self.height
    }

    #[inline]
    fn index(&self, c: Cell) -> Option<usize> {
        if self.contains(c) {
            Some((c.y as usize) * (self.width as usize) + (c.x as usize))
        } else {
            None
        }
    }

    /// Altitude at `c`, or `None` if off-chart.
    #[inline]
    pub fn altitude(&self, c: Cell) -> Option<f64> {
        self.index(c).map(|i| self.altitude[i])
    }

    /// Set the altitude at `c`. Off-chart cells are ignored.
    pub fn set_altitude(&mut self, c: Cell, alt: f64) {
        if let Some(i) = self.index(c) {
            self.altitude[i] = alt;
        }
    }

    /// Whether `c` is land (positive altitude). Off-chart cells are not land.
    #[inline]
    pub fn is_land(&self, c: Cell) -> bool {
        self.index(c).is_some_and(|i| self.altitude[i] > 0.0)
    }

    /// Whether `c` carries a port flag.
    #[inline]
    pub fn is_port(&self, c: Cell) -> bool {
        self.index(c).is_some_and(|i| self.port[i])
    }

    /// Flag or unflag `c` as a port. Off-chart cells are ignored.
    pub fn set_port(&mut self, c: Cell, port: bool) {
        if let Some(i) = self.index(c) {
            self.port[i] = port;
        }
    }

    /// Whether a route may pass through `c`: water, or land with a port.
    /// Off-chart cells are never navigable.
    #[inline]
    pub fn is_navigable(&self, c: Cell) -> bool {
        match self.index(c) {
            Some(i) => self.altitude[i] <= 0.0 || self.port[i],
            None => false,
        }
    }

    /// Iterator over all port cells, in row-major order.
    pub fn ports(&self) -> impl Iterator<Item = Cell> + '_ {
        self.bounds().iter().filter(|&c| self.is_port(c))
    }
}

impl fmt::Display for SeaChart {
    /// Renders the same ASCII form [`from_ascii`](Self::from_ascii) accepts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let c = Cell::new(x, y);
                let ch = if self.is_port(c) {
                    'P'
                } else if self.is_land(c) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{ch}")?;
            }
            if y + 1 < self.height {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Error parsing an ASCII chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartParseError {
    /// The input contained no cells.
    Empty,
    /// A line's width differs from the first line's.
    RaggedLine { line: i32 },
    /// A character that is not `.`, `#` or `P`.
    UnknownGlyph { ch: char, pos: Cell },
}

impl fmt::Display for ChartParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartParseError::Empty => write!(f, "chart text is empty"),
            ChartParseError::RaggedLine { line } => {
                write!(f, "line {line} has a different width than the first line")
            }
            ChartParseError::UnknownGlyph { ch, pos } => {
                write!(f, "unknown glyph {ch:?} at {pos}")
            }
        }
    }
}

impl std::error::Error for ChartParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_chart_is_all_water() {
        let chart = SeaChart::new(4, 3);
        assert_eq!(chart.bounds(), Range::new(0, 0, 4, 3));
        for c in chart.bounds() {
            assert!(chart.is_navigable(c));
            assert!(!chart.is_land(c));
            assert!(!chart.is_port(c));
        }
    }

    #[test]
    fn altitude_and_ports() {
        let mut chart = SeaChart::new(3, 3);
        let hill = Cell::new(1, 1);
        chart.set_altitude(hill, 120.0);
        assert!(chart.is_land(hill));
        assert!(!chart.is_navigable(hill));

        chart.set_port(hill, true);
        assert!(chart.is_land(hill));
        assert!(chart.is_navigable(hill));
        assert_eq!(chart.ports().collect::<Vec<_>>(), vec![hill]);
    }

    #[test]
    fn off_chart_queries() {
        let chart = SeaChart::new(2, 2);
        let out = Cell::new(-1, 0);
        assert!(!chart.contains(out));
        assert_eq!(chart.altitude(out), None);
        assert!(!chart.is_navigable(out));
        assert!(!chart.is_land(out));
    }

    #[test]
    fn from_ascii_round_trips_through_display() {
        let text = "..#..\n..P..\n.....";
        let chart = SeaChart::from_ascii(text).unwrap();
        assert_eq!(chart.width(), 5);
        assert_eq!(chart.height(), 3);
        assert!(chart.is_land(Cell::new(2, 0)));
        assert!(chart.is_port(Cell::new(2, 1)));
        assert!(chart.is_navigable(Cell::new(2, 1)));
        assert!(!chart.is_navigable(Cell::new(2, 0)));
        assert_eq!(chart.to_string(), text);
    }

    #[test]
    fn from_ascii_rejects_ragged_lines() {
        let err = SeaChart::from_ascii("...\n..").unwrap_err();
        assert_eq!(err, ChartParseError::RaggedLine { line: 1 });
    }

    #[test]
    fn from_ascii_rejects_unknown_glyphs() {
        let err = SeaChart::from_ascii(".x.").unwrap_err();
        assert_eq!(
            err,
            ChartParseError::UnknownGlyph {
                ch: 'x',
                pos: Cell::new(1, 0)
            }
        );
    }

    #[test]
    fn from_ascii_rejects_empty() {
        assert_eq!(SeaChart::from_ascii("  \n "), Err(ChartParseError::Empty));
    }
}
