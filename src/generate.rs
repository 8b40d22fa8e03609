use crate::board::Board;
use crate::hex::{neighbor, Direction, HexCoord};
use crate::moves::Move;
use crate::piece::{Color, Piece, PieceType};
use itertools::Itertools;
use rustc_hash::FxHashSet;
use strum::IntoEnumIterator;

/// Coordinates a piece belonging to `player` may legally be placed on,
/// sorted by `(q, r)`. The empty board only offers the origin; a player's
/// very first placement may land next to either color (there's nothing
/// else to be adjacent to yet); every later placement must touch at least
/// one of the player's own top pieces and none of the opponent's.
pub fn placement_hexes(board: &Board, pieces: &[Piece], player: Color) -> Vec<HexCoord> {
    if board.occupied_coords().next().is_none() {
        return vec![HexCoord { q: 0, r: 0 }];
    }

    let has_own_piece_in_play = pieces.iter().any(|p| p.owner == player && p.placed);

    let mut candidates: FxHashSet<HexCoord> = FxHashSet::default();
    let occupied: Vec<HexCoord> = board.occupied_coords().copied().collect();
    for coord in occupied {
        for dir in Direction::iter() {
            let candidate = neighbor(&coord, &dir);
            if board.is_occupied(&candidate) {
                continue;
            }

            let mut touches_opponent = false;
            let mut touches_own = false;
            for adj_dir in Direction::iter() {
                let neighbor_coord = neighbor(&candidate, &adj_dir);
                let Some(top_id) = board.top_piece_id(&neighbor_coord) else {
                    continue;
                };
                if pieces[top_id].owner == player {
                    touches_own = true;
                } else {
                    touches_opponent = true;
                }
            }

            if !has_own_piece_in_play {
                candidates.insert(candidate);
            } else if !touches_opponent && touches_own {
                candidates.insert(candidate);
            }
        }
    }

    candidates.into_iter().sorted_by_key(|c| (c.q, c.r)).collect()
}

pub fn placement_moves(
    board: &Board,
    pieces: &[Piece],
    player: Color,
    must_place_queen: bool,
) -> Vec<Move> {
    let positions = placement_hexes(board, pieces, player);
    if positions.is_empty() {
        return vec![];
    }

    let mut moves = vec![];
    for piece in pieces.iter().filter(|p| p.owner == player && !p.placed) {
        if must_place_queen && piece.piece_type != PieceType::QueenBee {
            continue;
        }
        for &target in &positions {
            if board.is_occupied(&target) {
                continue;
            }
            moves.push(Move::Place { piece_id: piece.id, to: target });
        }
    }
    moves
}

/// Every legal move for `piece` (already confirmed to be a movable top
/// piece whose removal wouldn't break the hive), dispatched by type.
pub fn movement_moves_for(piece: &Piece, board: &Board) -> Vec<Move> {
    match piece.piece_type {
        PieceType::QueenBee => queen_moves(piece, board),
        PieceType::Beetle => beetle_moves(piece, board),
        PieceType::Grasshopper => grasshopper_moves(piece, board),
        PieceType::Spider => spider_moves(piece, board),
        PieceType::SoldierAnt => ant_moves(piece, board),
    }
}

fn without_piece(board: &Board, piece: &Piece) -> Board {
    let mut trial = board.clone();
    trial.remove_top(&piece.coord, piece.id);
    trial
}

fn queen_moves(piece: &Piece, board: &Board) -> Vec<Move> {
    let trial = without_piece(board, piece);
    let mut moves = vec![];
    for dir in Direction::iter() {
        let dest = neighbor(&piece.coord, &dir);
        if board.is_occupied(&dest) {
            continue;
        }
        if !trial.can_slide(&piece.coord, &dest) {
            continue;
        }
        moves.push(Move::Move {
            piece_id: piece.id,
            from: piece.coord,
            to: dest,
            path: vec![dest],
        });
    }
    moves
}

fn beetle_moves(piece: &Piece, board: &Board) -> Vec<Move> {
    let trial = without_piece(board, piece);
    let mut moves = vec![];
    for dir in Direction::iter() {
        let dest = neighbor(&piece.coord, &dir);
        let occupied_dest = board.is_occupied(&dest);
        if !occupied_dest && !trial.can_slide(&piece.coord, &dest) {
            continue;
        }
        moves.push(Move::Move {
            piece_id: piece.id,
            from: piece.coord,
            to: dest,
            path: vec![dest],
        });
    }
    moves
}

fn grasshopper_moves(piece: &Piece, board: &Board) -> Vec<Move> {
    let mut moves = vec![];
    for dir in Direction::iter() {
        let mut current = neighbor(&piece.coord, &dir);
        let mut jumped_at_least_one = false;
        while board.is_occupied(&current) {
            jumped_at_least_one = true;
            current = neighbor(&current, &dir);
        }
        if jumped_at_least_one {
            moves.push(Move::Move {
                piece_id: piece.id,
                from: piece.coord,
                to: current,
                path: vec![current],
            });
        }
    }
    moves
}

fn spider_moves(piece: &Piece, board: &Board) -> Vec<Move> {
    let trial = without_piece(board, piece);
    let mut moves = vec![];
    let mut path = vec![];
    let mut visited: FxHashSet<HexCoord> = FxHashSet::default();
    visited.insert(piece.coord);

    spider_dfs(piece, &trial, piece.coord, 3, &mut path, &mut visited, &mut moves);
    moves
}

fn spider_dfs(
    piece: &Piece,
    trial: &Board,
    current: HexCoord,
    remaining: u32,
    path: &mut Vec<HexCoord>,
    visited: &mut FxHashSet<HexCoord>,
    moves: &mut Vec<Move>,
) {
    if remaining == 0 {
        if let Some(&last) = path.last() {
            moves.push(Move::Move {
                piece_id: piece.id,
                from: piece.coord,
                to: last,
                path: path.clone(),
            });
        }
        return;
    }

    for candidate in trial.sliding_neighbors(&current) {
        if visited.contains(&candidate) {
            continue;
        }
        visited.insert(candidate);
        path.push(candidate);
        spider_dfs(piece, trial, candidate, remaining - 1, path, visited, moves);
        path.pop();
        visited.remove(&candidate);
    }
}

fn ant_moves(piece: &Piece, board: &Board) -> Vec<Move> {
    let trial = without_piece(board, piece);
    let mut moves = vec![];
    let mut visited: FxHashSet<HexCoord> = FxHashSet::default();
    let mut parent: rustc_hash::FxHashMap<HexCoord, HexCoord> = rustc_hash::FxHashMap::default();
    let mut frontier = std::collections::VecDeque::new();

    visited.insert(piece.coord);
    for start_neighbor in trial.sliding_neighbors(&piece.coord) {
        if visited.insert(start_neighbor) {
            parent.insert(start_neighbor, piece.coord);
            frontier.push_back(start_neighbor);
        }
    }

    let build_path = |destination: HexCoord| -> Vec<HexCoord> {
        let mut result = vec![];
        let mut current = destination;
        while current != piece.coord {
            result.push(current);
            match parent.get(&current) {
                Some(&prev) => current = prev,
                None => break,
            }
        }
        result.reverse();
        result
    };

    while let Some(current) = frontier.pop_front() {
        moves.push(Move::Move {
            piece_id: piece.id,
            from: piece.coord,
            to: current,
            path: build_path(current),
        });

        for candidate in trial.sliding_neighbors(&current) {
            if visited.insert(candidate) {
                parent.insert(candidate, current);
                frontier.push_back(candidate);
            }
        }
    }

    moves
}
