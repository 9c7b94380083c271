//! picker — demo order-picker route finder built on the waygrid engine.
//!
//! Parses an embedded warehouse floor, runs the selected search strategy to
//! completion, renders the final per-cell snapshot as text, and prints the
//! movement instructions. Pass a strategy name (`astar`, `bfs`, `dfs`,
//! `dijkstra`) as the first argument; A* is the default.

use std::error::Error;

use waygrid_core::{Grid, NodeState, Point};
use waygrid_search::{AStar, Bfs, Dfs, Dijkstra, Search, Step, Strategy, describe, reconstruct};

/// Embedded warehouse floor: `#` shelves, `@` the worker, `x` the target
/// item, `.` open floor. The bottom-left corner is (0, 0).
const FLOOR: &str = "\
................
..####..####..#.
..............#.
.####..####...#.
............x.#.
.####..####...#.
@...............";

struct Floor {
    width: i32,
    height: i32,
    shelves: Vec<Point>,
    worker: Point,
    target: Point,
}

fn parse_floor(text: &str) -> Result<Floor, Box<dyn Error>> {
    let rows: Vec<&str> = text.lines().collect();
    let height = rows.len() as i32;
    let width = rows.first().map_or(0, |r| r.chars().count()) as i32;
    let mut shelves = Vec::new();
    let mut worker = None;
    let mut target = None;
    for (row, line) in rows.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            let p = Point::new(col as i32, height - 1 - row as i32);
            match ch {
                '#' => shelves.push(p),
                '@' => worker = Some(p),
                'x' => target = Some(p),
                _ => {}
            }
        }
    }
    Ok(Floor {
        width,
        height,
        shelves,
        worker: worker.ok_or("the floor has no worker cell (@)")?,
        target: target.ok_or("the floor has no target cell (x)")?,
    })
}

fn solve<S: Strategy>(strategy: S, grid: &mut Grid) -> (Step, u32) {
    let mut search = Search::new(strategy, grid);
    let result = search.run(grid);
    (result, search.expansions())
}

/// Print the per-cell snapshot, top row first (the origin is bottom-left).
fn render(grid: &Grid) {
    for y in (0..grid.height()).rev() {
        let mut line = String::with_capacity(grid.width() as usize * 2);
        for x in 0..grid.width() {
            let glyph = match grid.state_at(Point::new(x, y)) {
                Some(NodeState::Start) => '@',
                Some(NodeState::Goal) => 'x',
                Some(NodeState::Block) => '#',
                Some(NodeState::Path) => '+',
                Some(NodeState::Open) => 'o',
                Some(NodeState::Closed) => '-',
                _ => '.',
            };
            line.push(glyph);
            line.push(' ');
        }
        println!("{}", line.trim_end());
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let algorithm = std::env::args().nth(1).unwrap_or_else(|| "astar".into());
    let floor = parse_floor(FLOOR)?;
    let mut grid = Grid::build(
        floor.width,
        floor.height,
        &floor.shelves,
        floor.worker,
        floor.target,
    )?;

    let (result, expansions) = match algorithm.as_str() {
        "astar" => solve(AStar::default(), &mut grid),
        "dijkstra" => solve(Dijkstra, &mut grid),
        "bfs" => solve(Bfs, &mut grid),
        "dfs" => solve(Dfs, &mut grid),
        other => {
            return Err(
                format!("unknown algorithm {other:?} (use astar, bfs, dfs or dijkstra)").into(),
            );
        }
    };

    match result {
        Step::Found(goal) => {
            let path = reconstruct(&mut grid, goal);
            render(&grid);
            println!();
            println!("Path found!");
            println!("Path length: {}", path.len() - 1);
            println!("Nodes expanded: {expansions}");
            println!();
            println!("The path instruction is:");
            for instruction in describe(&path) {
                println!("{instruction}");
            }
        }
        _ => {
            render(&grid);
            println!();
            println!("No route to the target exists.");
        }
    }
    Ok(())
}
