//! Closed enumeration of game outcomes.
//!
//! The arbiter's classifier only ever produces the position-derived subset
//! (`InProgress`, the two mates, and the draw rules). The remaining values
//! belong to the surrounding game lifecycle: matchmaking states,
//! resignation, agreed draws, and arbiter rulings.

/// Terminal-state classification for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    NotStarted,
    Waiting,
    WaitingPrivate,
    Aborted,
    InProgress,
    WhiteIsMated,
    BlackIsMated,
    WhiteResigned,
    BlackResigned,
    Stalemate,
    Repetition,
    FiftyMoveRule,
    InsufficientMaterial,
    DrawByArbiter,
    DrawByAgreement,
}
