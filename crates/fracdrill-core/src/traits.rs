//! Core trait definitions for answer sources.
//!
//! The session never reads a terminal directly. It asks an [`AnswerSource`]
//! for the next [`Attempt`], so interrupts and end of input arrive as plain
//! values instead of unwinding through the drill loop. The console source in
//! `fracdrill-cli` and [`ScriptedSource`](crate::scripted::ScriptedSource)
//! implement it.

use async_trait::async_trait;

/// What happened while waiting for the user to answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempt {
    /// A line of input, without its line terminator.
    Line(String),
    /// The user pressed Ctrl-C while the prompt was waiting.
    Interrupted,
    /// Input is exhausted (Ctrl-D or a closed pipe).
    EndOfInput,
}

impl Attempt {
    /// Convenience constructor for a typed line.
    pub fn line(text: impl Into<String>) -> Self {
        Attempt::Line(text.into())
    }
}

/// Something the session can wait on for answers.
///
/// This is the only place the drill suspends.
#[async_trait]
pub trait AnswerSource: Send {
    /// Wait for the next attempt.
    ///
    /// Errors are reserved for real I/O failures; an interrupt or a closed
    /// input is reported as an [`Attempt`] variant.
    async fn next_attempt(&mut self) -> anyhow::Result<Attempt>;
}
