use crate::hex::{neighbor, Direction, HexCoord};
use crate::piece::PieceId;
use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, Default)]
pub struct Board {
    stacks: FxHashMap<HexCoord, Vec<PieceId>>,
}

impl Board {
    pub fn new() -> Board {
        Board::default()
    }

    pub fn is_occupied(&self, coord: &HexCoord) -> bool {
        self.stacks.get(coord).is_some_and(|stack| !stack.is_empty())
    }

    pub fn top_piece_id(&self, coord: &HexCoord) -> Option<PieceId> {
        self.stacks.get(coord).and_then(|stack| stack.last().copied())
    }

    pub fn stack_at(&self, coord: &HexCoord) -> &[PieceId] {
        self.stacks.get(coord).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn stack_height(&self, coord: &HexCoord) -> usize {
        self.stack_at(coord).len()
    }

    pub fn occupied_coords(&self) -> impl Iterator<Item = &HexCoord> {
        self.stacks.iter().filter(|(_, stack)| !stack.is_empty()).map(|(coord, _)| coord)
    }

    pub fn place(&mut self, coord: HexCoord, piece_id: PieceId) {
        self.stacks.entry(coord).or_default().push(piece_id);
    }

    // Returns false and leaves the board untouched if piece_id isn't on top of coord.
    pub fn remove_top(&mut self, coord: &HexCoord, piece_id: PieceId) -> bool {
        let Some(stack) = self.stacks.get_mut(coord) else {
            return false;
        };
        if stack.last().copied() != Some(piece_id) {
            return false;
        }
        stack.pop();
        if stack.is_empty() {
            self.stacks.remove(coord);
        }
        true
    }

    // A piece still covered by something else can't break the hive by moving.
    pub fn would_break_hive(&self, coord: &HexCoord, piece_id: PieceId) -> bool {
        if self.top_piece_id(coord) != Some(piece_id) {
            return false;
        }
        if self.stack_height(coord) > 1 {
            return false;
        }

        let mut trial = self.clone();
        trial.remove_top(coord, piece_id);

        let occupied_count = trial.occupied_coords().count();
        if occupied_count <= 1 {
            return false;
        }

        let start = match trial.occupied_coords().next() {
            Some(c) => *c,
            None => return false,
        };

        let mut visited = rustc_hash::FxHashSet::default();
        visited.insert(start);
        let mut frontier = VecDeque::new();
        frontier.push_back(start);

        while let Some(current) = frontier.pop_front() {
            for dir in Direction::iter() {
                let candidate = neighbor(&current, &dir);
                if !trial.is_occupied(&candidate) {
                    continue;
                }
                if visited.insert(candidate) {
                    frontier.push_back(candidate);
                }
            }
        }

        visited.len() != occupied_count
    }

    // Blocked only if both cells flanking the from-to edge are occupied.
    pub fn can_slide(&self, from: &HexCoord, to: &HexCoord) -> bool {
        let Some(dir_index) = crate::hex::direction_index(from, to) else {
            return false;
        };
        let left = neighbor(from, &Direction::from_index(dir_index + 5));
        let right = neighbor(from, &Direction::from_index(dir_index + 1));
        !(self.is_occupied(&left) && self.is_occupied(&right))
    }

    pub fn sliding_neighbors(&self, from: &HexCoord) -> Vec<HexCoord> {
        Direction::iter()
            .map(|dir| neighbor(from, &dir))
            .filter(|candidate| !self.is_occupied(candidate))
            .filter(|candidate| self.can_slide(from, candidate))
            .collect()
    }
}
