//! Repository layer for per-pawn preferences.
//!
//! Repositories hold data that CHANGES during play and must survive a reload:
//! user-owned stat priorities and manual target temperatures. Static content
//! (apparel definitions) is handled by oracles, not repositories.

mod file;
mod memory;
mod record;

pub use file::FilePawnStore;
pub use memory::InMemoryPawnStore;
pub use record::PawnRecord;
