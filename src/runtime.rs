//! Runtime for driving a booking conversation
//!
//! Owns the mutable side of a conversation (current state, booking record,
//! console, randomness) and feeds guest input through the pure transition
//! function.

mod executor;
pub mod traits;


pub use executor::{DialogueRuntime, RuntimeError};
pub use traits::*;

use rand::rngs::StdRng;

/// Type alias for the runtime used by the binary
pub type ProductionRuntime = DialogueRuntime<StdConsole, StdRng>;
