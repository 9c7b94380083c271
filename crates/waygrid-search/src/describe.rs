//! Run-length encoded movement instructions for a reconstructed path.

use std::fmt;

use waygrid_core::Point;

/// One cardinal step direction on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Classify the step from `a` to `b`.
    ///
    /// Exactly one axis may change: the vertical axis maps growing y to
    /// `Up`, the horizontal axis maps growing x to `Right`. Returns `None`
    /// for identical or diagonal position pairs.
    pub fn between(a: Point, b: Point) -> Option<Direction> {
        if a.x == b.x && a.y != b.y {
            Some(if b.y > a.y {
                Direction::Up
            } else {
                Direction::Down
            })
        } else if a.y == b.y && a.x != b.x {
            Some(if b.x > a.x {
                Direction::Right
            } else {
                Direction::Left
            })
        } else {
            None
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        })
    }
}

/// One numbered movement instruction covering a run of identical steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instruction {
    /// 1-based position in the instruction list.
    pub step: usize,
    /// Which way to walk.
    pub direction: Direction,
    /// How many cells to cover before the next instruction.
    pub count: usize,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Step {}: Go {} {} units.",
            self.step, self.direction, self.count
        )
    }
}

/// Compress a start→goal position sequence into numbered instructions.
///
/// Consecutive steps in the same direction merge into one instruction with
/// a unit count; every change of direction starts a new numbered
/// instruction. Position pairs that are not axis-aligned are skipped, which
/// never happens for a reconstructed path.
pub fn describe(path: &[Point]) -> Vec<Instruction> {
    let mut out: Vec<Instruction> = Vec::new();
    for dir in path.windows(2).filter_map(|w| Direction::between(w[0], w[1])) {
        match out.last_mut() {
            Some(last) if last.direction == dir => last.count += 1,
            _ => out.push(Instruction {
                step: out.len() + 1,
                direction: dir,
                count: 1,
            }),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_each_direction() {
        let o = Point::new(3, 3);
        assert_eq!(Direction::between(o, Point::new(3, 4)), Some(Direction::Up));
        assert_eq!(
            Direction::between(o, Point::new(3, 2)),
            Some(Direction::Down)
        );
        assert_eq!(
            Direction::between(o, Point::new(4, 3)),
            Some(Direction::Right)
        );
        assert_eq!(
            Direction::between(o, Point::new(2, 3)),
            Some(Direction::Left)
        );
    }

    #[test]
    fn rejects_identical_and_diagonal_pairs() {
        let o = Point::new(1, 1);
        assert_eq!(Direction::between(o, o), None);
        assert_eq!(Direction::between(o, Point::new(2, 2)), None);
    }

    #[test]
    fn merges_runs_and_numbers_turns() {
        let path = [
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(2, 0),
            Point::new(2, 1),
            Point::new(2, 2),
            Point::new(1, 2),
        ];
        assert_eq!(
            describe(&path),
            vec![
                Instruction {
                    step: 1,
                    direction: Direction::Right,
                    count: 2
                },
                Instruction {
                    step: 2,
                    direction: Direction::Up,
                    count: 2
                },
                Instruction {
                    step: 3,
                    direction: Direction::Left,
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn renders_the_documented_sentence() {
        let ins = Instruction {
            step: 1,
            direction: Direction::Right,
            count: 4,
        };
        assert_eq!(ins.to_string(), "Step 1: Go RIGHT 4 units.");
    }

    #[test]
    fn short_paths_produce_no_instructions() {
        assert!(describe(&[]).is_empty());
        assert!(describe(&[Point::new(2, 2)]).is_empty());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn instruction_round_trip() {
        let ins = Instruction {
            step: 2,
            direction: Direction::Down,
            count: 3,
        };
        let json = serde_json::to_string(&ins).unwrap();
        let back: Instruction = serde_json::from_str(&json).unwrap();
        assert_eq!(ins, back);
    }

    #[test]
    fn point_round_trip() {
        let p = Point::new(4, 7);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
