//! Round mechanics: drawing, reordering and judging four events.
//!
//! - `draw_round`: pick four distinct events from the catalog
//! - `RoundState`: the player's working order, changed by swaps
//! - `is_chronological`: does the working order match the dates?

mod draw;
mod judge;
mod state;

pub use draw::draw_round;
pub use judge::{chronological_order, is_chronological};
pub use state::RoundState;
