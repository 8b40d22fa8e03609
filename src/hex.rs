use std::ops;
use strum::{EnumIter, IntoEnumIterator};

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Ord, PartialOrd, Default)]
pub struct HexCoord {
    pub q: i32,
    pub r: i32,
}

impl HexCoord {
    pub fn s(&self) -> i32 {
        -self.q - self.r
    }
}

impl ops::Add<HexCoord> for HexCoord {
    type Output = HexCoord;

    fn add(self, rhs: HexCoord) -> Self::Output {
        HexCoord {
            q: self.q + rhs.q,
            r: self.r + rhs.r,
        }
    }
}

impl ops::Sub<HexCoord> for HexCoord {
    type Output = HexCoord;

    fn sub(self, rhs: HexCoord) -> Self::Output {
        HexCoord {
            q: self.q - rhs.q,
            r: self.r - rhs.r,
        }
    }
}

impl ops::Add<&HexCoord> for &HexCoord {
    type Output = HexCoord;

    fn add(self, rhs: &HexCoord) -> Self::Output {
        *self + *rhs
    }
}

impl ops::Sub<&HexCoord> for &HexCoord {
    type Output = HexCoord;

    fn sub(self, rhs: &HexCoord) -> Self::Output {
        *self - *rhs
    }
}

// Order matches the reference direction table exactly: Right, DownRight,
// DownLeft, Left, UpLeft, UpRight. Index into this cycle is load-bearing for
// the slide oracle in board.rs (it checks `(d+5)%6` and `(d+1)%6`), so don't
// reorder without updating that math.
#[derive(PartialEq, Eq, Hash, Debug, EnumIter, Clone, Copy)]
pub enum Direction {
    Right,
    DownRight,
    DownLeft,
    Left,
    UpLeft,
    UpRight,
}

impl Direction {
    pub fn vector(&self) -> HexCoord {
        match *self {
            Direction::Right => HexCoord { q: 1, r: 0 },
            Direction::DownRight => HexCoord { q: 0, r: 1 },
            Direction::DownLeft => HexCoord { q: -1, r: 1 },
            Direction::Left => HexCoord { q: -1, r: 0 },
            Direction::UpLeft => HexCoord { q: 0, r: -1 },
            Direction::UpRight => HexCoord { q: 1, r: -1 },
        }
    }

    pub fn index(&self) -> usize {
        Direction::iter().position(|d| d == *self).unwrap()
    }

    pub fn from_index(index: usize) -> Direction {
        Direction::iter().nth(index % 6).expect("index % 6 < 6")
    }

    pub fn opposite(&self) -> Direction {
        Direction::from_index(self.index() + 3)
    }
}

/// Straight-line distance between two coordinates, in hex steps.
pub fn flat_distance(lhs: &HexCoord, rhs: &HexCoord) -> i32 {
    let vec = lhs - rhs;
    (vec.q.abs() + vec.r.abs() + vec.s().abs()) / 2
}

pub fn neighbors(hex: &HexCoord) -> impl Iterator<Item = HexCoord> {
    Direction::iter().map(|d| neighbor(hex, &d))
}

pub fn neighbor(hex: &HexCoord, direction: &Direction) -> HexCoord {
    hex + &direction.vector()
}

pub fn is_adjacent(lhs: &HexCoord, rhs: &HexCoord) -> bool {
    flat_distance(lhs, rhs) == 1
}

/// Which of the six directions points from `from` to its adjacent `to`, if any.
pub fn direction_index(from: &HexCoord, to: &HexCoord) -> Option<usize> {
    let delta = *to - *from;
    Direction::iter().position(|d| d.vector() == delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_identity() {
        assert_eq!(0, flat_distance(&HexCoord { q: 0, r: 0 }, &HexCoord { q: 0, r: 0 }));
    }

    #[test]
    fn test_distance_ones() {
        let origin = HexCoord { q: 0, r: 0 };
        for dir in Direction::iter() {
            assert_eq!(1, flat_distance(&origin, &neighbor(&origin, &dir)));
        }
    }

    #[test]
    fn test_s_invariant() {
        assert_eq!(-2, HexCoord { q: 1, r: 1 }.s());
        assert_eq!(-1, HexCoord { q: 0, r: 1 }.s());
        assert_eq!(-1, HexCoord { q: 1, r: 0 }.s());
        assert_eq!(1, HexCoord { q: -1, r: 0 }.s());
    }

    #[test]
    fn test_direction_vectors_match_reference_order() {
        let expected = [
            HexCoord { q: 1, r: 0 },
            HexCoord { q: 0, r: 1 },
            HexCoord { q: -1, r: 1 },
            HexCoord { q: -1, r: 0 },
            HexCoord { q: 0, r: -1 },
            HexCoord { q: 1, r: -1 },
        ];
        for (i, dir) in Direction::iter().enumerate() {
            pretty_assertions::assert_eq!(dir.vector(), expected[i]);
        }
    }

    #[test]
    fn test_direction_index_roundtrip() {
        let origin = HexCoord { q: 0, r: 0 };
        for dir in Direction::iter() {
            let to = neighbor(&origin, &dir);
            assert_eq!(Some(dir.index()), direction_index(&origin, &to));
        }
    }

    #[test]
    fn test_opposite_direction() {
        assert_eq!(Direction::Right.opposite(), Direction::Left);
        assert_eq!(Direction::UpLeft.opposite(), Direction::DownRight);
    }

    #[test]
    fn test_is_adjacent() {
        let origin = HexCoord { q: 0, r: 0 };
        assert!(is_adjacent(&origin, &HexCoord { q: 1, r: 0 }));
        assert!(!is_adjacent(&origin, &HexCoord { q: 2, r: 0 }));
        assert!(!is_adjacent(&origin, &origin));
    }
}
