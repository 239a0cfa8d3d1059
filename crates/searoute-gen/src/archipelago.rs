//! Archipelago generation: cellular-automata islands plus coastal ports.

use rand::{Rng, RngExt};
use searoute_core::{Cell, SeaChart};

/// One iteration of cellular-automata coastline smoothing.
///
/// A cell becomes land if its 1-ring (8 neighbors) holds at least
/// `land_cutoff1` land cells, or its 2-ring (24 neighbors) holds at most
/// `land_cutoff2` — the latter turns isolated deep-sea specks into land and
/// gives the archipelago its scattered islets.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoastlineRule {
    /// Become land if the 1-ring has >= this many land neighbors.
    pub land_cutoff1: i32,
    /// Become land if the 2-ring has <= this many land neighbors.
    pub land_cutoff2: i32,
    /// Whether cells beyond the chart edge count as land. `false` keeps
    /// islands away from the border.
    pub land_out_of_range: bool,
    /// How many times to apply this rule.
    pub reps: usize,
}

impl Default for CoastlineRule {
    fn default() -> Self {
        Self {
            land_cutoff1: 5,
            land_cutoff2: 2,
            land_out_of_range: false,
            reps: 4,
        }
    }
}

/// Chart generator owning the random source and the chart being shaped.
pub struct ArchipelagoGen<R: Rng> {
    pub rng: R,
    pub chart: SeaChart,
}

impl<R: Rng> ArchipelagoGen<R> {
    /// Create a generator over the given chart.
    pub fn with_chart(chart: SeaChart, rng: R) -> Self {
        Self { rng, chart }
    }

    /// Generate islands.
    ///
    /// 1. Seed each cell as land with probability `land_init_pct`,
    ///    otherwise water.
    /// 2. Apply each rule in `rules` for its number of repetitions.
    ///
    /// Returns the number of land cells in the final chart.
    pub fn scatter_islands(&mut self, land_init_pct: f64, rules: &[CoastlineRule]) -> usize {
        let bounds = self.chart.bounds();

        for c in bounds.iter() {
            let r: f64 = self.rng.random();
            let alt = if r < land_init_pct {
                SeaChart::LAND
            } else {
                SeaChart::WATER
            };
            self.chart.set_altitude(c, alt);
        }

        let mut scratch = vec![false; bounds.len()];
        let width = bounds.width();

        for rule in rules {
            for _ in 0..rule.reps {
                for c in bounds.iter() {
                    let land1 = self.count_land_ring(c, 1, rule.land_out_of_range);
                    let land2 = self.count_land_ring(c, 2, rule.land_out_of_range);
                    let idx = (c.y * width + c.x) as usize;
                    scratch[idx] = land1 >= rule.land_cutoff1 || land2 <= rule.land_cutoff2;
                }
                for c in bounds.iter() {
                    let idx = (c.y * width + c.x) as usize;
                    let alt = if scratch[idx] {
                        SeaChart::LAND
                    } else {
                        SeaChart::WATER
                    };
                    self.chart.set_altitude(c, alt);
                }
            }
        }

        bounds.iter().filter(|&c| self.chart.is_land(c)).count()
    }

    /// Count land cells within Chebyshev distance `radius` of `center`.
    fn count_land_ring(&self, center: Cell, radius: i32, land_out_of_range: bool) -> i32 {
        let mut count = 0;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let c = center.shift(dx, dy);
                if self.chart.contains(c) {
                    if self.chart.is_land(c) {
                        count += 1;
                    }
                } else if land_out_of_range {
                    count += 1;
                }
            }
        }
        count
    }

    /// The largest connected body of water (Moore connectivity), as the
    /// cells belonging to it. Landlocked ponds are excluded, so ports
    /// placed along this body are mutually reachable by sea.
    pub fn open_sea(&self) -> Vec<Cell> {
        let bounds = self.chart.bounds();
        let width = bounds.width();
        let mut label = vec![-1i32; bounds.len()];
        let mut best: Vec<Cell> = Vec::new();
        let mut current: Vec<Cell> = Vec::new();
        let mut stack: Vec<Cell> = Vec::new();
        let mut next = 0i32;

        for start in bounds.iter() {
            let si = (start.y * width + start.x) as usize;
            if label[si] >= 0 || self.chart.is_land(start) {
                continue;
            }

            // Iterative flood fill from `start`.
            current.clear();
            stack.clear();
            stack.push(start);
            label[si] = next;
            while let Some(c) = stack.pop() {
                current.push(c);
                for n in c.neighbors_8() {
                    if !self.chart.contains(n) || self.chart.is_land(n) {
                        continue;
                    }
                    let ni = (n.y * width + n.x) as usize;
                    if label[ni] < 0 {
                        label[ni] = next;
                        stack.push(n);
                    }
                }
            }

            if current.len() > best.len() {
                std::mem::swap(&mut best, &mut current);
            }
            next += 1;
        }

        best
    }

    /// Flag up to `n` ports on coastal land: land cells cardinally adjacent
    /// to the open sea, picked at random. Returns the cells flagged.
    pub fn place_ports(&mut self, n: usize) -> Vec<Cell> {
        let sea = self.open_sea();
        let sea_set: std::collections::HashSet<Cell> = sea.into_iter().collect();

        let mut coast: Vec<Cell> = self
            .chart
            .bounds()
            .iter()
            .filter(|&c| {
                self.chart.is_land(c) && c.neighbors_4().iter().any(|n| sea_set.contains(n))
            })
            .collect();

        let mut placed = Vec::new();
        while placed.len() < n && !coast.is_empty() {
            let i = self.rng.random_range(0..coast.len());
            let c = coast.swap_remove(i);
            self.chart.set_port(c, true);
            placed.push(c);
        }
        placed
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn coastline_rule_round_trip() {
        let rule = CoastlineRule {
            land_cutoff1: 6,
            land_cutoff2: 1,
            land_out_of_range: true,
            reps: 3,
        };
        let json = serde_json::to_string(&rule).unwrap();
        let back: CoastlineRule = serde_json::from_str(&json).unwrap();
        assert_eq!(back.land_cutoff1, rule.land_cutoff1);
        assert_eq!(back.land_cutoff2, rule.land_cutoff2);
        assert_eq!(back.land_out_of_range, rule.land_out_of_range);
        assert_eq!(back.reps, rule.reps);
    }
}
