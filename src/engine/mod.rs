//! The timed question loop.
//!
//! One control task presents questions in order. Each answer is read on a
//! short-lived reader thread ([`attempt`]) and raced against a single
//! session-wide [`Deadline`]. The tally is only ever touched by the control
//! task.

mod attempt;
mod deadline;
mod input;

#[cfg(test)]
mod tests;

use std::io::{self, Write};
use std::time::Duration;

use tracing::{debug, warn};

use attempt::{AnswerAttempt, AttemptResult};
pub use deadline::Deadline;
pub use input::{AnswerSource, LineInput};

use crate::models::{Question, QuizOutcome, QuizState, ScoreTally, StopReason};

pub struct QuizEngine<S> {
    questions: Vec<Question>,
    limit: Duration,
    source: Option<S>,
    state: QuizState,
    tally: ScoreTally,
}

impl<S: AnswerSource> QuizEngine<S> {
    pub fn new(questions: Vec<Question>, limit: Duration, source: S) -> Self {
        Self {
            questions,
            limit,
            source: Some(source),
            state: QuizState::AwaitingStart,
            tally: ScoreTally::default(),
        }
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    /// Runs the session to completion and returns the final tally.
    ///
    /// The countdown starts once the player acknowledges the banner. When the
    /// deadline fires the pending read is abandoned and nothing else is
    /// printed or scored. If the deadline and an answer are both ready when
    /// the race is polled, the deadline wins.
    pub async fn run<W: Write>(mut self, out: &mut W) -> io::Result<QuizOutcome> {
        self.print_banner(out)?;

        if let Some(reason) = self.await_start().await? {
            return Ok(self.stop(reason));
        }

        self.transition(QuizState::Running);
        let deadline = Deadline::after(self.limit);
        let reason = self.ask_questions(&deadline, out).await?;

        if reason == StopReason::TimeExpired {
            writeln!(out)?;
            writeln!(out, "Time's up!")?;
            out.flush()?;
        }

        Ok(self.stop(reason))
    }

    fn print_banner<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Welcome to Quiz!")?;
        writeln!(out)?;
        writeln!(
            out,
            "You have {:?} to answer {} question(s).",
            self.limit,
            self.questions.len()
        )?;
        writeln!(out, "Press Enter when you are ready")?;
        out.flush()
    }

    /// Waits for the press-to-begin line. Not subject to the deadline.
    async fn await_start(&mut self) -> io::Result<Option<StopReason>> {
        let Some(source) = self.source.take() else {
            return Ok(Some(StopReason::input_closed()));
        };

        match AnswerAttempt::spawn(source)?.finish().await {
            AttemptResult::Answered { source, .. } => {
                self.source = Some(source);
                Ok(None)
            }
            AttemptResult::Closed => Ok(Some(StopReason::input_closed())),
            AttemptResult::Failed(err) => Ok(Some(StopReason::InputError {
                detail: err.to_string(),
            })),
        }
    }

    async fn ask_questions<W: Write>(
        &mut self,
        deadline: &Deadline,
        out: &mut W,
    ) -> io::Result<StopReason> {
        let QuizEngine {
            questions,
            source,
            tally,
            ..
        } = self;

        let expiry = deadline.expiry();
        tokio::pin!(expiry);

        for (index, question) in questions.iter().enumerate() {
            if deadline.has_expired() {
                return Ok(StopReason::TimeExpired);
            }

            write!(out, "Problem #{}: {} = ", index + 1, question.prompt)?;
            out.flush()?;

            let Some(reader) = source.take() else {
                return Ok(StopReason::input_closed());
            };
            let attempt = AnswerAttempt::spawn(reader)?;

            tokio::select! {
                biased;

                () = &mut expiry => {
                    debug!(question = index + 1, "deadline fired with an answer pending");
                    return Ok(StopReason::TimeExpired);
                }
                result = attempt.finish() => match result {
                    AttemptResult::Answered { source: reader, answer } => {
                        let correct = question.accepts(&answer);
                        tally.record(correct);
                        debug!(
                            question = index + 1,
                            correct,
                            remaining = ?deadline.remaining(),
                            "answer recorded"
                        );
                        *source = Some(reader);
                    }
                    AttemptResult::Closed => return Ok(StopReason::input_closed()),
                    AttemptResult::Failed(err) => {
                        return Ok(StopReason::InputError { detail: err.to_string() });
                    }
                },
            }
        }

        Ok(StopReason::Exhausted)
    }

    fn transition(&mut self, next: QuizState) {
        debug!(from = ?self.state, to = ?next, "quiz state change");
        self.state = next;
    }

    fn stop(mut self, reason: StopReason) -> QuizOutcome {
        if let StopReason::InputError { detail } = &reason {
            warn!(%detail, asked = self.tally.asked, "stopping on input error");
        }
        self.transition(QuizState::Stopped(reason.clone()));
        QuizOutcome {
            tally: self.tally,
            total: self.questions.len(),
            reason,
        }
    }
}
