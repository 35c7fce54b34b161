pub mod core;

// module re-exports
pub use crate::core::config::Config;
pub use crate::core::definitions::{
    CheckSignal, Color, Dests, DropMetadata, Key, MaterialDiff, MovableColor, MoveMetadata, Piece,
    PieceDrop, Pieces, Role, SetPremoveMetadata,
};
pub use crate::core::hold::{Hold, HoldTimer};
pub use crate::core::notify::{Notification, Scheduler, TaskQueue};
pub use crate::core::state::BoardState;
pub use crate::core::utils::{pointer_to_square, Bounds};
