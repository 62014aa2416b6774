//! fracdrill-core — Exact fractions, answer parsing, and the drill session.
//!
//! This crate holds everything the `fracdrill` binary needs apart from the
//! terminal itself: the [`Rational`] value type and its parser, problem
//! generation, the [`Session`] state machine, and configuration loading.

pub mod config;
pub mod encouragement;
pub mod error;
pub mod operator;
pub mod parser;
pub mod problem;
pub mod rational;
pub mod scripted;
pub mod session;
pub mod traits;

pub use config::{load_config, load_config_from, DrillConfig};
pub use error::FractionError;
pub use operator::Operator;
pub use problem::Problem;
pub use rational::{Denominator, Rational};
pub use session::{Feedback, Session, SessionState, Tally, TerminationReason};
pub use traits::{AnswerSource, Attempt};
