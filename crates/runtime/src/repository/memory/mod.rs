//! In-memory repository implementations for testing and development.

mod pawn;

pub use pawn::InMemoryPawnStore;
