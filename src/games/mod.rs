//! The three events.

pub mod discus;
pub mod four_hundred;
pub mod shot_put;
