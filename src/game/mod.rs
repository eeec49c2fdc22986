//! Game logic: code generation, sessions and input decoding

mod generator;
mod input;
mod session;

pub use generator::{CodeGenerator, generate};
pub use input::PlayerInput;
pub use session::{GameSession, HistoryEntry, Status, Turn};
