use std::io;
use std::thread;

use tokio::sync::oneshot;

use super::input::AnswerSource;
use crate::normalize::normalize;

/// What a finished answer read produced.
pub(crate) enum AttemptResult<S> {
    /// A line was read; the source is handed back for the next question.
    Answered { source: S, answer: String },
    /// The source reached end of input.
    Closed,
    /// The read failed.
    Failed(io::Error),
}

/// One blocking line read running on its own thread.
///
/// The thread owns the source while it reads and sends it back together with
/// the normalized line. Dropping the attempt drops the receiving end: the
/// thread's result is discarded and the thread is never joined.
pub(crate) struct AnswerAttempt<S> {
    receiver: oneshot::Receiver<(S, io::Result<Option<String>>)>,
}

impl<S: AnswerSource> AnswerAttempt<S> {
    pub(crate) fn spawn(mut source: S) -> io::Result<Self> {
        let (sender, receiver) = oneshot::channel();
        thread::Builder::new()
            .name("answer-reader".to_string())
            .spawn(move || {
                let line = source
                    .read_line()
                    .map(|line| line.map(|raw| normalize(&raw)));
                if sender.send((source, line)).is_err() {
                    tracing::debug!("answer arrived after the attempt was abandoned");
                }
            })?;
        Ok(Self { receiver })
    }

    pub(crate) async fn finish(self) -> AttemptResult<S> {
        match self.receiver.await {
            Ok((source, Ok(Some(answer)))) => AttemptResult::Answered { source, answer },
            Ok((_, Ok(None))) => AttemptResult::Closed,
            Ok((_, Err(err))) => AttemptResult::Failed(err),
            Err(_) => AttemptResult::Failed(io::Error::other(
                "answer reader exited without a result",
            )),
        }
    }
}
