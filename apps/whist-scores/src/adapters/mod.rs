//! Store implementations.

pub mod json_file;
pub mod memory;
pub mod scores_json;
pub mod state_json;

pub use memory::{MemoryScoreStore, MemoryStateStore};
pub use scores_json::JsonScoreStore;
pub use state_json::JsonStateStore;
