//! Store contracts used by the services layer.

pub mod clock;
pub mod scores;
pub mod state;

pub use clock::{Clock, FixedClock, SystemClock};
pub use scores::ScoreStore;
pub use state::StateStore;
