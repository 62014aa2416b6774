//! Drill session controller.
//!
//! [`Session::handle`] is a pure state transition: it takes one [`Attempt`]
//! and returns the [`Feedback`] for it, updating counters as it goes.
//! [`Session::run`] wraps that in the prompt/read/respond loop against an
//! [`AnswerSource`] and a writer.

use std::fmt;
use std::io::Write;

use anyhow::Result;
use rand::Rng;

use crate::config::DrillConfig;
use crate::encouragement;
use crate::parser::parse_answer;
use crate::problem::Problem;
use crate::rational::Rational;
use crate::traits::{AnswerSource, Attempt};

/// Interrupts in a row that end the session.
pub const MAX_CONSECUTIVE_INTERRUPTS: u32 = 3;

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingAnswer,
    Terminated(TerminationReason),
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    EndOfInput,
    RepeatedInterrupts(u32),
}

/// Result counters for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub correct: u32,
    pub incorrect: u32,
    pub skipped: u32,
}

impl Tally {
    /// Answers that parsed and were judged, right or wrong.
    pub fn attempts(&self) -> u32 {
        self.correct + self.incorrect
    }

    /// Share of judged answers that were correct, 0.0 when there were none.
    pub fn percent_correct(&self) -> f64 {
        match self.attempts() {
            0 => 0.0,
            n => 100.0 * f64::from(self.correct) / f64::from(n),
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Correct: {} ({:.2}%), Incorrect: {}, Skipped: {}]",
            self.correct,
            self.percent_correct(),
            self.incorrect,
            self.skipped
        )
    }
}

/// The outcome of handling one attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// The text was not a number; ask the same problem again, no penalty.
    Rejected,
    Correct {
        phrase: &'static str,
        want: Rational,
    },
    /// Wrong answer. `simplify` is set when canonical mode rejected a value
    /// that was numerically right.
    Incorrect { simplify: bool },
    /// The problem was abandoned with an interrupt.
    Skipped {
        wanted: Rational,
        interrupts: u32,
        quit: bool,
    },
    Ended,
}

/// A drill session: counters, the current problem, and the repeat flag.
pub struct Session<R> {
    config: DrillConfig,
    rng: R,
    problem: Option<Problem>,
    repeat: bool,
    interrupts: u32,
    tally: Tally,
    state: SessionState,
}

impl<R: Rng> Session<R> {
    /// Start a session. Fails if the config has no operators.
    pub fn new(config: DrillConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            problem: None,
            repeat: false,
            interrupts: 0,
            tally: Tally::default(),
            state: SessionState::AwaitingAnswer,
        })
    }

    pub fn config(&self) -> &DrillConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.state, SessionState::Terminated(_))
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Whether the current problem is being asked again.
    pub fn is_repeating(&self) -> bool {
        self.repeat
    }

    pub fn consecutive_interrupts(&self) -> u32 {
        self.interrupts
    }

    /// The problem being asked, drawing a fresh one if the last was resolved.
    pub fn current_problem(&mut self) -> &Problem {
        let denominator = self.config.denominator;
        let operators = &self.config.operators;
        let rng = &mut self.rng;
        self.problem.get_or_insert_with(|| {
            let problem = Problem::random(rng, denominator, operators);
            tracing::debug!(
                left = %problem.left(),
                right = %problem.right(),
                operator = %problem.operator(),
                want = %problem.want(),
                "generated problem"
            );
            problem
        })
    }

    /// Replace the current problem with a specific one.
    pub fn pose(&mut self, problem: Problem) {
        self.problem = Some(problem);
        self.repeat = false;
    }

    /// Apply one attempt to the session.
    pub fn handle(&mut self, attempt: Attempt) -> Feedback {
        if self.is_terminated() {
            return Feedback::Ended;
        }

        match attempt {
            Attempt::Line(raw) => self.judge(raw.trim()),
            Attempt::Interrupted => self.skip(),
            Attempt::EndOfInput => {
                tracing::debug!("end of input");
                self.state = SessionState::Terminated(TerminationReason::EndOfInput);
                Feedback::Ended
            }
        }
    }

    fn judge(&mut self, raw: &str) -> Feedback {
        self.interrupts = 0;

        let got = match parse_answer(raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!("ignoring answer: {e}");
                self.repeat = true;
                return Feedback::Rejected;
            }
        };

        let want = self.current_problem().want().clone();
        // Canonical mode compares text, not value: "2/4" is wrong when 1/2 is wanted.
        let correct = if self.config.canonical {
            raw == want.to_string()
        } else {
            got == want
        };

        if correct {
            self.tally.correct += 1;
            self.repeat = false;
            self.problem = None;
            Feedback::Correct {
                phrase: encouragement::pick(&mut self.rng),
                want,
            }
        } else {
            self.tally.incorrect += 1;
            self.repeat = true;
            Feedback::Incorrect {
                simplify: self.config.canonical && got == want,
            }
        }
    }

    fn skip(&mut self) -> Feedback {
        let wanted = self.current_problem().want().clone();
        self.interrupts += 1;
        self.tally.skipped += 1;
        self.repeat = false;
        self.problem = None;

        let quit = self.interrupts >= MAX_CONSECUTIVE_INTERRUPTS;
        if quit {
            tracing::debug!(interrupts = self.interrupts, "too many interrupts");
            self.state =
                SessionState::Terminated(TerminationReason::RepeatedInterrupts(self.interrupts));
        }

        Feedback::Skipped {
            wanted,
            interrupts: self.interrupts,
            quit,
        }
    }

    /// The instructions printed before the first problem.
    pub fn banner(&self) -> String {
        let mode = if self.config.canonical {
            " (simplified required)"
        } else {
            " (1-1/4, 1.25, 5/4, 1-2/8 OK)"
        };
        format!(
            "Answers in the format of: {{whole}}-{{numerator}}/{{denominator}}\n\
             {mode}\n\
             [Press ^C to move to the next question]\n\
             [Press ^D to quit]\n\n"
        )
    }

    /// Console text for a piece of feedback.
    pub fn render(&self, feedback: &Feedback) -> String {
        match feedback {
            Feedback::Rejected => String::new(),
            Feedback::Correct { phrase, want } => {
                let mut line = format!("✔️  {phrase}");
                if !self.config.canonical {
                    line.push_str(&format!(" ({want})"));
                }
                if self.config.show_estimate {
                    line.push_str(&format!(" [{:?}]", want.estimate()));
                }
                line + "\n\n"
            }
            Feedback::Incorrect { simplify } => {
                let hint = if *simplify {
                    "Simplify your answer. "
                } else {
                    ""
                };
                format!("❌ Try again! {hint}^C to move on.\n\n")
            }
            Feedback::Skipped {
                wanted,
                interrupts,
                quit,
            } => {
                let mut text = format!("\nWanted {wanted}!\n\n");
                if *quit {
                    text.push_str(&format!(
                        "[Multiple interrupts ({interrupts}) in a row. Quitting.]\n"
                    ));
                }
                text
            }
            Feedback::Ended => "^D\n\n".to_string(),
        }
    }

    /// Run the drill until input ends or the user interrupts too often.
    ///
    /// Writes the banner, every prompt and response, and the final tally to
    /// `out`, and returns the tally.
    pub async fn run<S, W>(&mut self, source: &mut S, out: &mut W) -> Result<Tally>
    where
        S: AnswerSource + ?Sized,
        W: Write,
    {
        write!(out, "{}", self.banner())?;

        while !self.is_terminated() {
            let prompt = self.current_problem().prompt();
            write!(out, "{prompt}")?;
            out.flush()?;

            let attempt = source.next_attempt().await?;
            let feedback = self.handle(attempt);
            write!(out, "{}", self.render(&feedback))?;
        }

        writeln!(out, "{}", self.tally)?;
        out.flush()?;
        tracing::debug!(state = ?self.state, "session finished");
        Ok(self.tally)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operator::Operator;
    use crate::scripted::ScriptedSource;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn r(n: i64, d: i64) -> Rational {
        Rational::new(n, d).unwrap()
    }

    fn session(config: DrillConfig) -> Session<StdRng> {
        Session::new(config, StdRng::seed_from_u64(11)).unwrap()
    }

    fn canonical() -> DrillConfig {
        DrillConfig {
            canonical: true,
            ..DrillConfig::default()
        }
    }

    /// A session whose current problem is 1/4 + 1/4 = 1/2.
    fn one_half(config: DrillConfig) -> Session<StdRng> {
        let mut s = session(config);
        s.pose(Problem::new(r(1, 4), r(1, 4), Operator::Add));
        s
    }

    #[test]
    fn new_rejects_empty_operator_set() {
        let config = DrillConfig {
            operators: vec![],
            ..DrillConfig::default()
        };
        assert!(Session::new(config, StdRng::seed_from_u64(0)).is_err());
    }

    #[test]
    fn current_problem_is_stable_until_resolved() {
        let mut s = session(DrillConfig::default());
        let first = s.current_problem().clone();
        assert_eq!(s.current_problem(), &first);

        s.handle(Attempt::line("0"));
        assert_eq!(s.current_problem(), &first);
        assert!(s.is_repeating());
    }

    #[test]
    fn correct_answer_advances_to_new_problem() {
        let mut s = one_half(DrillConfig::default());
        let feedback = s.handle(Attempt::line("1/2"));

        assert!(matches!(feedback, Feedback::Correct { want, .. } if want == r(1, 2)));
        assert_eq!(s.tally().correct, 1);
        assert!(!s.is_repeating());
        assert!(s.problem.is_none());
    }

    #[test]
    fn value_mode_accepts_any_equal_form() {
        for answer in ["1/2", "2/4", "0.5", ".5", " 4/8 ", "0-1/2", "5e-1"] {
            let mut s = one_half(DrillConfig::default());
            assert!(
                matches!(s.handle(Attempt::line(answer)), Feedback::Correct { .. }),
                "{answer:?}"
            );
        }
    }

    #[test]
    fn long_exact_decimals_are_judged_not_rejected() {
        let mut s = session(DrillConfig::default());
        s.pose(Problem::new(r(3, 4), r(5, 8), Operator::Add));

        assert!(matches!(
            s.handle(Attempt::line("1.3750000000000000000")),
            Feedback::Correct { .. }
        ));

        s.pose(Problem::new(r(3, 4), r(5, 8), Operator::Add));
        assert_eq!(
            s.handle(Attempt::line("1e-30")),
            Feedback::Incorrect { simplify: false }
        );
        assert_eq!(
            s.handle(Attempt::line("99999999999999999999")),
            Feedback::Incorrect { simplify: false }
        );
        assert_eq!(
            s.tally(),
            Tally {
                correct: 1,
                incorrect: 2,
                skipped: 0
            }
        );
    }

    #[test]
    fn canonical_mode_requires_exact_text() {
        let mut s = one_half(canonical());
        assert_eq!(
            s.handle(Attempt::line("2/4")),
            Feedback::Incorrect { simplify: true }
        );
        assert_eq!(s.tally().incorrect, 1);
        assert!(s.is_repeating());

        assert!(matches!(
            s.handle(Attempt::line("1/2")),
            Feedback::Correct { .. }
        ));
        assert_eq!(s.tally().correct, 1);
    }

    #[test]
    fn canonical_mode_rejects_non_canonical_whole_and_mixed_forms() {
        let mut s = session(canonical());
        s.pose(Problem::new(r(3, 4), r(5, 8), Operator::Add));
        assert_eq!(
            s.handle(Attempt::line("11/8")),
            Feedback::Incorrect { simplify: true }
        );
        assert_eq!(
            s.handle(Attempt::line("1-6/16")),
            Feedback::Incorrect { simplify: true }
        );
        assert_eq!(
            s.handle(Attempt::line("1.375")),
            Feedback::Incorrect { simplify: true }
        );
        assert!(matches!(
            s.handle(Attempt::line("1-3/8")),
            Feedback::Correct { .. }
        ));

        s.pose(Problem::new(r(3, 4), r(1, 4), Operator::Add));
        assert_eq!(
            s.handle(Attempt::line("1-0/4")),
            Feedback::Incorrect { simplify: true }
        );
        assert!(matches!(
            s.handle(Attempt::line("1")),
            Feedback::Correct { .. }
        ));
    }

    #[test]
    fn wrong_value_gets_no_simplify_hint() {
        let mut s = one_half(canonical());
        assert_eq!(
            s.handle(Attempt::line("3/4")),
            Feedback::Incorrect { simplify: false }
        );

        let mut s = one_half(DrillConfig::default());
        assert_eq!(
            s.handle(Attempt::line("3/4")),
            Feedback::Incorrect { simplify: false }
        );
    }

    #[test]
    fn malformed_input_changes_nothing() {
        let mut s = one_half(DrillConfig::default());
        let before = s.tally();

        assert_eq!(s.handle(Attempt::line("abc")), Feedback::Rejected);
        assert_eq!(s.tally(), before);
        assert_eq!(s.state(), SessionState::AwaitingAnswer);
        assert_eq!(
            s.current_problem(),
            &Problem::new(r(1, 4), r(1, 4), Operator::Add)
        );
    }

    #[test]
    fn malformed_input_in_canonical_mode_is_not_a_wrong_answer() {
        let mut s = one_half(canonical());
        assert_eq!(s.handle(Attempt::line("1/0")), Feedback::Rejected);
        assert_eq!(s.tally(), Tally::default());
    }

    #[test]
    fn interrupt_skips_and_reveals_answer() {
        let mut s = one_half(DrillConfig::default());
        let feedback = s.handle(Attempt::Interrupted);

        assert_eq!(
            feedback,
            Feedback::Skipped {
                wanted: r(1, 2),
                interrupts: 1,
                quit: false
            }
        );
        assert_eq!(s.tally().skipped, 1);
        assert!(!s.is_repeating());
        assert_eq!(s.state(), SessionState::AwaitingAnswer);
    }

    #[test]
    fn three_interrupts_in_a_row_terminate() {
        let mut s = session(DrillConfig::default());
        s.handle(Attempt::Interrupted);
        s.handle(Attempt::Interrupted);
        assert_eq!(s.state(), SessionState::AwaitingAnswer);

        let feedback = s.handle(Attempt::Interrupted);
        assert!(matches!(feedback, Feedback::Skipped { quit: true, interrupts: 3, .. }));
        assert_eq!(
            s.state(),
            SessionState::Terminated(TerminationReason::RepeatedInterrupts(3))
        );
        assert_eq!(s.tally().skipped, 3);
    }

    #[test]
    fn any_typed_line_resets_interrupt_count() {
        let mut s = session(DrillConfig::default());
        s.handle(Attempt::Interrupted);
        s.handle(Attempt::Interrupted);
        s.handle(Attempt::line("nonsense"));
        assert_eq!(s.consecutive_interrupts(), 0);

        s.handle(Attempt::Interrupted);
        s.handle(Attempt::Interrupted);
        assert_eq!(s.state(), SessionState::AwaitingAnswer);
        assert_eq!(s.tally().skipped, 4);
    }

    #[test]
    fn end_of_input_terminates_immediately() {
        let mut s = session(DrillConfig::default());
        assert_eq!(s.handle(Attempt::EndOfInput), Feedback::Ended);
        assert_eq!(
            s.state(),
            SessionState::Terminated(TerminationReason::EndOfInput)
        );

        // Nothing counts after termination.
        assert_eq!(s.handle(Attempt::line("1/2")), Feedback::Ended);
        assert_eq!(s.tally(), Tally::default());
    }

    #[test]
    fn tally_percentages() {
        assert_eq!(Tally::default().percent_correct(), 0.0);
        assert_eq!(
            Tally::default().to_string(),
            "[Correct: 0 (0.00%), Incorrect: 0, Skipped: 0]"
        );

        let tally = Tally {
            correct: 2,
            incorrect: 1,
            skipped: 4,
        };
        assert_eq!(
            tally.to_string(),
            "[Correct: 2 (66.67%), Incorrect: 1, Skipped: 4]"
        );
    }

    #[test]
    fn render_messages() {
        let s = session(DrillConfig::default());
        let correct = Feedback::Correct {
            phrase: "Great!",
            want: r(11, 8),
        };
        assert_eq!(s.render(&correct), "✔️  Great! (1-3/8)\n\n");
        assert_eq!(s.render(&Feedback::Rejected), "");
        assert_eq!(
            s.render(&Feedback::Incorrect { simplify: false }),
            "❌ Try again! ^C to move on.\n\n"
        );
        assert_eq!(s.render(&Feedback::Ended), "^D\n\n");

        let quit = Feedback::Skipped {
            wanted: r(3, 4),
            interrupts: 3,
            quit: true,
        };
        assert_eq!(
            s.render(&quit),
            "\nWanted 3/4!\n\n[Multiple interrupts (3) in a row. Quitting.]\n"
        );
    }

    #[test]
    fn render_respects_canonical_and_estimate_flags() {
        let s = session(DrillConfig {
            canonical: true,
            show_estimate: true,
            ..DrillConfig::default()
        });
        let correct = Feedback::Correct {
            phrase: "Great!",
            want: r(11, 8),
        };
        assert_eq!(s.render(&correct), "✔️  Great! [1.375]\n\n");
        assert_eq!(
            s.render(&Feedback::Incorrect { simplify: true }),
            "❌ Try again! Simplify your answer. ^C to move on.\n\n"
        );

        let whole = Feedback::Correct {
            phrase: "Great!",
            want: Rational::from_integer(2),
        };
        assert_eq!(s.render(&whole), "✔️  Great! [2.0]\n\n");
    }

    #[test]
    fn banner_describes_mode() {
        assert!(session(DrillConfig::default())
            .banner()
            .contains("(1-1/4, 1.25, 5/4, 1-2/8 OK)"));
        assert!(session(canonical()).banner().contains("(simplified required)"));
        assert!(session(canonical())
            .banner()
            .starts_with("Answers in the format of: {whole}-{numerator}/{denominator}\n"));
    }

    #[tokio::test]
    async fn run_until_end_of_input() {
        let mut s = one_half(DrillConfig::default());
        let mut source = ScriptedSource::from_lines(["abc", "3/4", "1/2"]);
        let mut out = Vec::new();

        let tally = s.run(&mut source, &mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            tally,
            Tally {
                correct: 1,
                incorrect: 1,
                skipped: 0
            }
        );
        assert_eq!(source.reads(), 4);
        assert!(text.matches("What is 1/4 + 1/4? ").count() >= 3);
        assert!(text.contains("❌ Try again! ^C to move on."));
        assert!(text.contains("(1/2)"));
        assert!(text.ends_with("^D\n\n[Correct: 1 (50.00%), Incorrect: 1, Skipped: 0]\n"));
    }

    #[tokio::test]
    async fn run_stops_after_three_interrupts() {
        let mut s = session(DrillConfig::default());
        let mut source = ScriptedSource::new([
            Attempt::Interrupted,
            Attempt::Interrupted,
            Attempt::Interrupted,
            Attempt::line("1/2"),
        ]);
        let mut out = Vec::new();

        let tally = s.run(&mut source, &mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(tally.skipped, 3);
        assert_eq!(source.remaining(), 1);
        assert_eq!(text.matches("Wanted ").count(), 3);
        assert!(text.contains("[Multiple interrupts (3) in a row. Quitting.]"));
        assert!(text.ends_with("[Correct: 0 (0.00%), Incorrect: 0, Skipped: 3]\n"));
    }

    #[tokio::test]
    async fn seeded_sessions_ask_the_same_questions() {
        let config = DrillConfig {
            operators: vec![Operator::Add, Operator::Sub],
            ..DrillConfig::default()
        };
        let mut outputs = Vec::new();
        for _ in 0..2 {
            let mut s = Session::new(config.clone(), StdRng::seed_from_u64(2024)).unwrap();
            let mut source = ScriptedSource::new([Attempt::Interrupted, Attempt::Interrupted]);
            let mut out = Vec::new();
            s.run(&mut source, &mut out).await.unwrap();
            outputs.push(String::from_utf8(out).unwrap());
        }
        assert_eq!(outputs[0], outputs[1]);
    }
}
