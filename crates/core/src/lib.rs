#![forbid(unsafe_code)]

//! Domain core for the learning coach: the tutorial navigator and quiz
//! engine state machines, the static course content, and the clock and
//! deferred-effect plumbing they share. No I/O lives here.

pub mod effects;
pub mod geometry;
pub mod model;
pub mod navigator;
pub mod quiz;
pub mod time;

pub use effects::{Effect, EffectQueue, Severity};
pub use navigator::Navigator;
pub use quiz::{AdvanceOutcome, AnswerRecord, QuizEngine, QuizResult, SelectOutcome};
pub use time::Clock;
