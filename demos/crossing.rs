//! Generate a random archipelago, place ports, and plan the routes between
//! them, printing the chart with every route overlaid.
//!
//! Run with `cargo run --bin crossing [seed]`.

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use searoute_core::{Cell, SeaChart};
use searoute_gen::{ArchipelagoGen, CoastlineRule};
use searoute_paths::{Euclidean, RoutePlanner};

const WIDTH: i32 = 60;
const HEIGHT: i32 = 24;
const PORTS: usize = 5;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2026u64);

    let chart = SeaChart::new(WIDTH, HEIGHT);
    let mut generator = ArchipelagoGen::with_chart(chart, StdRng::seed_from_u64(seed));
    let land = generator.scatter_islands(0.45, &[CoastlineRule::default()]);
    let ports = generator.place_ports(PORTS);
    let chart = generator.chart;

    println!(
        "seed {seed}: {WIDTH}x{HEIGHT} chart, {land} land cells, {} ports",
        ports.len()
    );

    let mut planner = RoutePlanner::new(Euclidean);
    let mut sailed: HashSet<Cell> = HashSet::new();

    for pair in ports.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        match planner.route(&chart, a, b) {
            Some(route) => {
                println!("{a} -> {b}: {} cells", route.len());
                sailed.extend(route.iter());
            }
            None => println!("{a} -> {b}: no route"),
        }
    }

    // Overlay: ports as P, routes as *, land as #.
    let mut out = String::new();
    for y in 0..chart.height() {
        for x in 0..chart.width() {
            let c = Cell::new(x, y);
            out.push(if chart.is_port(c) {
                'P'
            } else if sailed.contains(&c) {
                '*'
            } else if chart.is_land(c) {
                '#'
            } else {
                '.'
            });
        }
        out.push('\n');
    }
    print!("{out}");

    println!(
        "route memory: {} entries, {} A* searches",
        planner.memory().borrow().len(),
        planner.search_count()
    );
}
