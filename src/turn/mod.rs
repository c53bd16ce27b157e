//! The roll/keep turn engine shared by all events.
//!
//! `TurnEngine` owns one game's rules and state. Front ends feed it
//! actions and read a `Scoreboard` back. With a `RerollPolicy` attached it
//! plays itself: after every roll the policy's decision becomes the only
//! action the engine will accept next, and `step`/`play_out` carry it out.

mod engine;

pub use engine::TurnEngine;
