use std::io::{self, BufRead, BufReader, Stdin};

/// A line-oriented source of typed answers.
///
/// Reads block the calling thread, so the engine only ever calls
/// [`AnswerSource::read_line`] from a dedicated reader thread.
pub trait AnswerSource: Send + 'static {
    /// Reads one line. `Ok(None)` means the source is closed.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Adapts any buffered reader into an [`AnswerSource`].
pub struct LineInput<R> {
    reader: R,
}

impl<R: BufRead + Send + 'static> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl LineInput<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(io::stdin()))
    }
}

impl<R: BufRead + Send + 'static> AnswerSource for LineInput<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.reader.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}
