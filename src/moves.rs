use crate::hex::HexCoord;
use crate::piece::PieceId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Move {
    Place {
        piece_id: PieceId,
        to: HexCoord,
    },
    Move {
        piece_id: PieceId,
        from: HexCoord,
        to: HexCoord,
        /// The concrete route taken to `to`. Carried for callers that want
        /// to render or replay a move, but excluded from move identity --
        /// see `same_move`.
        path: Vec<HexCoord>,
    },
    Pass,
}

impl Move {
    pub fn piece_id(&self) -> Option<PieceId> {
        match self {
            Move::Place { piece_id, .. } => Some(*piece_id),
            Move::Move { piece_id, .. } => Some(*piece_id),
            Move::Pass => None,
        }
    }

    pub fn to(&self) -> Option<HexCoord> {
        match self {
            Move::Place { to, .. } => Some(*to),
            Move::Move { to, .. } => Some(*to),
            Move::Pass => None,
        }
    }

    pub fn from(&self) -> Option<HexCoord> {
        match self {
            Move::Place { .. } => None,
            Move::Move { from, .. } => Some(*from),
            Move::Pass => None,
        }
    }
}

/// Two moves are the same move if they agree on type, piece, and
/// from/to endpoints. `path` is deliberately excluded: a caller can submit
/// a spider or ant move knowing only its destination, and it will match
/// whichever path the engine actually generated for that destination.
pub fn same_move(lhs: &Move, rhs: &Move) -> bool {
    match (lhs, rhs) {
        (Move::Pass, Move::Pass) => true,
        (Move::Place { piece_id: lp, to: lt }, Move::Place { piece_id: rp, to: rt }) => {
            lp == rp && lt == rt
        }
        (
            Move::Move { piece_id: lp, from: lf, to: lt, .. },
            Move::Move { piece_id: rp, from: rf, to: rt, .. },
        ) => lp == rp && lf == rf && lt == rt,
        _ => false,
    }
}
