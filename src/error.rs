use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("the game is already over")]
    GameOver,
    #[error("no legal move matches the one submitted")]
    NotLegal,
    #[error("the piece being moved was not on top of its stack")]
    CorruptTopOfStack,
}
