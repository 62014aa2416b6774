//! Scripted answer source for testing.

use std::collections::VecDeque;

use async_trait::async_trait;

use crate::traits::{AnswerSource, Attempt};

/// An answer source that replays a fixed list of attempts.
///
/// Once the script runs out every further read is [`Attempt::EndOfInput`],
/// the same as a closed pipe.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    script: VecDeque<Attempt>,
    reads: u32,
}

impl ScriptedSource {
    pub fn new(script: impl IntoIterator<Item = Attempt>) -> Self {
        Self {
            script: script.into_iter().collect(),
            reads: 0,
        }
    }

    /// A script made only of typed lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(lines.into_iter().map(Attempt::line))
    }

    /// Append another attempt to the end of the script.
    pub fn push(&mut self, attempt: Attempt) {
        self.script.push_back(attempt);
    }

    /// Number of reads made so far, including reads past the end.
    pub fn reads(&self) -> u32 {
        self.reads
    }

    /// Attempts not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

#[async_trait]
impl AnswerSource for ScriptedSource {
    async fn next_attempt(&mut self) -> anyhow::Result<Attempt> {
        self.reads += 1;
        Ok(self.script.pop_front().unwrap_or(Attempt::EndOfInput))
    }
}
