use crate::board::Board;
use crate::error::MoveError;
use crate::generate;
use crate::hex::{neighbor, Direction};
use crate::moves::{same_move, Move};
use crate::piece::{Color, Piece, PieceId, PieceType, STARTING_RESERVE};
use itertools::Itertools;
use std::cell::RefCell;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameResult {
    Pending,
    Winner(Color),
    Draw,
}

#[derive(Debug, Clone)]
pub struct HiveGame {
    pieces: Vec<Piece>,
    board: Board,
    queen_piece_id: [PieceId; 2],
    current_player: Color,
    queen_placed: [bool; 2],
    moves_played: [u32; 2],
    turn_number: u32,
    result: GameResult,
    game_over: bool,
    legal_moves_dirty: RefCell<bool>,
    cached_legal_moves: RefCell<Vec<Move>>,
}

impl Default for HiveGame {
    fn default() -> HiveGame {
        HiveGame::new()
    }
}

impl HiveGame {
    pub fn new() -> HiveGame {
        let mut pieces = Vec::with_capacity(22);
        let mut queen_piece_id = [0; 2];

        for owner in [Color::White, Color::Black] {
            for piece_type in STARTING_RESERVE {
                let id = pieces.len();
                if piece_type == PieceType::QueenBee {
                    queen_piece_id[owner.index()] = id;
                }
                pieces.push(Piece {
                    id,
                    piece_type,
                    owner,
                    placed: false,
                    coord: Default::default(),
                });
            }
        }

        HiveGame {
            pieces,
            board: Board::new(),
            queen_piece_id,
            current_player: Color::White,
            queen_placed: [false, false],
            moves_played: [0, 0],
            turn_number: 0,
            result: GameResult::Pending,
            game_over: false,
            legal_moves_dirty: RefCell::new(true),
            cached_legal_moves: RefCell::new(vec![]),
        }
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id]
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn is_top_piece(&self, piece_id: PieceId) -> bool {
        let Some(piece) = self.pieces.get(piece_id) else {
            return false;
        };
        if !piece.placed {
            return false;
        }
        self.board.top_piece_id(&piece.coord) == Some(piece_id)
    }

    pub fn queen_placed(&self, player: Color) -> bool {
        self.queen_placed[player.index()]
    }

    pub fn moves_played(&self, player: Color) -> u32 {
        self.moves_played[player.index()]
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    // Sorted by piece type then id, the order a reserve is listed in.
    pub fn unplaced_pieces(&self, player: Color) -> Vec<PieceId> {
        self.pieces
            .iter()
            .filter(|p| p.owner == player && !p.placed)
            .map(|p| p.id)
            .sorted_by_key(|&id| (self.pieces[id].piece_type.display_order(), id))
            .collect()
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        if *self.legal_moves_dirty.borrow() {
            *self.cached_legal_moves.borrow_mut() = self.compute_legal_moves();
            *self.legal_moves_dirty.borrow_mut() = false;
        }
        self.cached_legal_moves.borrow().clone()
    }

    pub fn move_is_legal(&self, candidate: &Move) -> bool {
        self.legal_moves().iter().any(|mv| same_move(mv, candidate))
    }

    pub fn apply_move(&mut self, candidate: &Move) -> bool {
        self.try_apply_move(candidate).is_ok()
    }

    // Matches candidate against same_move rather than equality, so an
    // under-specified spider/ant move (path left empty) still applies.
    fn try_apply_move(&mut self, candidate: &Move) -> Result<(), MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }

        let selected = {
            let moves = self.legal_moves();
            moves.into_iter().find(|mv| same_move(mv, candidate))
        };
        let selected = selected.ok_or(MoveError::NotLegal)?;

        let player = self.current_player;

        match &selected {
            Move::Place { piece_id, to } => {
                let piece = &mut self.pieces[*piece_id];
                piece.placed = true;
                piece.coord = *to;
                self.board.place(*to, *piece_id);
                if piece.piece_type == PieceType::QueenBee {
                    self.queen_placed[player.index()] = true;
                }
            }
            Move::Move { piece_id, to, .. } => {
                let from = self.pieces[*piece_id].coord;
                if !self.board.remove_top(&from, *piece_id) {
                    // Should never happen for a move that survived legal_moves().
                    return Err(MoveError::CorruptTopOfStack);
                }
                self.pieces[*piece_id].coord = *to;
                self.board.place(*to, *piece_id);
            }
            Move::Pass => {}
        }

        self.moves_played[player.index()] += 1;
        self.turn_number += 1;

        self.update_game_result();

        self.current_player = self.current_player.opposite();
        *self.legal_moves_dirty.borrow_mut() = true;

        Ok(())
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_draw(&self) -> bool {
        self.result == GameResult::Draw
    }

    pub fn winner(&self) -> Option<Color> {
        if !self.game_over {
            return None;
        }
        match self.result {
            GameResult::Winner(color) => Some(color),
            _ => None,
        }
    }

    fn compute_legal_moves(&self) -> Vec<Move> {
        if self.game_over {
            return vec![];
        }

        let mut moves = self.placement_moves();
        moves.extend(self.movement_moves());

        if moves.is_empty() {
            moves.push(Move::Pass);
        }
        moves
    }

    fn placement_moves(&self) -> Vec<Move> {
        let player = self.current_player;
        let must_place_queen =
            !self.queen_placed[player.index()] && self.moves_played[player.index()] >= 3;
        generate::placement_moves(&self.board, &self.pieces, player, must_place_queen)
    }

    fn movement_moves(&self) -> Vec<Move> {
        let player = self.current_player;
        if !self.queen_placed[player.index()] {
            return vec![];
        }

        let mut moves = vec![];
        for piece in &self.pieces {
            if piece.owner != player || !piece.placed {
                continue;
            }
            if !self.is_top_piece(piece.id) {
                continue;
            }
            if self.board.would_break_hive(&piece.coord, piece.id) {
                continue;
            }
            moves.extend(generate::movement_moves_for(piece, &self.board));
        }
        moves
    }

    fn is_queen_surrounded(&self, player: Color) -> bool {
        if !self.queen_placed[player.index()] {
            return false;
        }
        let queen = &self.pieces[self.queen_piece_id[player.index()]];
        if !queen.placed {
            return false;
        }
        Direction::iter()
            .filter(|dir| self.board.is_occupied(&neighbor(&queen.coord, dir)))
            .count()
            == 6
    }

    fn update_game_result(&mut self) {
        let white_surrounded = self.is_queen_surrounded(Color::White);
        let black_surrounded = self.is_queen_surrounded(Color::Black);

        if white_surrounded && black_surrounded {
            self.game_over = true;
            self.result = GameResult::Draw;
        } else if white_surrounded {
            self.game_over = true;
            self.result = GameResult::Winner(Color::Black);
        } else if black_surrounded {
            self.game_over = true;
            self.result = GameResult::Winner(Color::White);
        }

        if self.game_over {
            *self.legal_moves_dirty.borrow_mut() = true;
        }
    }
}
