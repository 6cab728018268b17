//! File-based repository implementations.

mod pawn;

pub use pawn::FilePawnStore;
