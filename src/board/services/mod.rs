//! Application services orchestrating the board.

mod sync;
mod transition;

pub use sync::{BoardError, BoardService, BoardState, NewTask};
pub use transition::{DEFAULT_COMMIT_DELAY, DragController, DragPhase};
