//! Discus.
//!
//! Three attempts with five dice showing 0, 2, 0, 4, 0, 6:
//! - Roll all unfrozen dice; scoring dice may then be frozen
//! - Every reroll needs at least one more frozen die than the last roll
//! - A roll where no unfrozen die scores is a foul and the attempt is
//!   worth nothing, frozen dice included
//! - Stopping banks the sum of all five dice; the best attempt counts

mod game;

pub use game::{Discus, DiscusBuilder, DISCUS_FACES};
