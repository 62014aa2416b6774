//! Terminal answer source.

use std::io::{self, BufRead, BufReader};
use std::thread;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;

use fracdrill_core::{AnswerSource, Attempt};

/// Reads answers from a blocking reader on a dedicated thread and races each
/// read against Ctrl-C.
///
/// Only the wait for a line is interruptible. A line that is not valid UTF-8
/// is passed on lossily and ends up rejected by the parser.
pub struct ConsoleSource {
    lines: mpsc::UnboundedReceiver<io::Result<String>>,
}

impl ConsoleSource {
    /// Read answers from standard input.
    pub fn stdin() -> Self {
        Self::from_reader(BufReader::new(io::stdin()))
    }

    pub fn from_reader<R>(mut reader: R) -> Self
    where
        R: BufRead + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();

        thread::spawn(move || {
            let mut buf = Vec::new();
            loop {
                buf.clear();
                match reader.read_until(b'\n', &mut buf) {
                    Ok(0) => break,
                    Ok(_) => {
                        let line = String::from_utf8_lossy(&buf)
                            .trim_end_matches(['\r', '\n'])
                            .to_string();
                        if tx.send(Ok(line)).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        let _ = tx.send(Err(e));
                        break;
                    }
                }
            }
            tracing::debug!("input reader finished");
        });

        Self { lines: rx }
    }
}

#[async_trait]
impl AnswerSource for ConsoleSource {
    async fn next_attempt(&mut self) -> Result<Attempt> {
        tokio::select! {
            line = self.lines.recv() => match line {
                Some(Ok(text)) => Ok(Attempt::Line(text)),
                Some(Err(e)) => Err(e.into()),
                None => Ok(Attempt::EndOfInput),
            },
            signal = tokio::signal::ctrl_c() => {
                signal?;
                Ok(Attempt::Interrupted)
            }
        }
    }
}
