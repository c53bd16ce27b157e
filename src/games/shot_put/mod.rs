//! Shot Put.
//!
//! Three attempts along a row of eight dice:
//! - Each roll throws the next die in the row and adds it to the attempt
//! - A one is a foul: the attempt is lost and rolling stops
//! - Stopping banks the running total; the best attempt counts

mod game;

pub use game::{ShotPut, ShotPutBuilder, SHOT_PUT_FACES};
