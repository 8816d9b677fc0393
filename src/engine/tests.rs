use super::*;
use std::collections::VecDeque;
use std::io::Cursor;
use std::sync::mpsc;
use std::thread;

fn sample_questions() -> Vec<Question> {
    vec![
        Question::new("2+2", "4"),
        Question::new("capital of france", "Paris"),
    ]
}

fn scripted(text: &str) -> LineInput<Cursor<Vec<u8>>> {
    LineInput::new(Cursor::new(text.as_bytes().to_vec()))
}

/// Hands out scripted lines, then blocks until the gate is closed.
struct StalledInput {
    lines: VecDeque<String>,
    gate: mpsc::Receiver<()>,
}

impl StalledInput {
    fn new(lines: &[&str]) -> (Self, mpsc::Sender<()>) {
        let (sender, gate) = mpsc::channel();
        let input = Self {
            lines: lines.iter().map(|line| line.to_string()).collect(),
            gate,
        };
        (input, sender)
    }
}

impl AnswerSource for StalledInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        if let Some(line) = self.lines.pop_front() {
            return Ok(Some(line));
        }
        let _ = self.gate.recv();
        Ok(None)
    }
}

/// Acknowledges immediately, then answers every question after a delay.
struct SlowInput {
    acknowledged: bool,
    delay: Duration,
    answer: String,
}

impl AnswerSource for SlowInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        if !self.acknowledged {
            self.acknowledged = true;
            return Ok(Some("\n".to_string()));
        }
        thread::sleep(self.delay);
        Ok(Some(self.answer.clone()))
    }
}

struct BrokenInput;

impl AnswerSource for BrokenInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin went away"))
    }
}

async fn run_engine<S: AnswerSource>(
    questions: Vec<Question>,
    limit: Duration,
    source: S,
) -> (QuizOutcome, String) {
    let engine = QuizEngine::new(questions, limit, source);
    let mut out = Vec::new();
    let outcome = tokio::time::timeout(Duration::from_secs(5), engine.run(&mut out))
        .await
        .expect("engine hung")
        .unwrap();
    (outcome, String::from_utf8(out).unwrap())
}

#[test]
fn starts_awaiting_acknowledgment() {
    let engine = QuizEngine::new(sample_questions(), Duration::from_secs(60), scripted(""));
    assert_eq!(engine.state(), &QuizState::AwaitingStart);
}

#[tokio::test]
async fn answers_every_question() {
    let (outcome, out) =
        run_engine(sample_questions(), Duration::from_secs(60), scripted("\n4\nparis\n")).await;

    assert_eq!(outcome.reason, StopReason::Exhausted);
    assert_eq!(outcome.tally, ScoreTally { asked: 2, correct: 2 });
    assert_eq!(outcome.total, 2);
    assert!(out.contains("Press Enter when you are ready"));
    assert!(out.contains("Problem #1: 2+2 = "));
    assert!(out.contains("Problem #2: capital of france = "));
    assert!(!out.contains("Time's up!"));
}

#[tokio::test]
async fn wrong_answers_are_asked_but_not_correct() {
    let (outcome, _) =
        run_engine(sample_questions(), Duration::from_secs(60), scripted("\n5\n  PARIS \n")).await;

    assert_eq!(outcome.tally, ScoreTally { asked: 2, correct: 1 });
    assert_eq!(outcome.reason, StopReason::Exhausted);
}

#[tokio::test]
async fn zero_limit_stops_before_first_question() {
    let (outcome, out) =
        run_engine(sample_questions(), Duration::ZERO, scripted("\n4\nparis\n")).await;

    assert_eq!(outcome.reason, StopReason::TimeExpired);
    assert_eq!(outcome.tally, ScoreTally { asked: 0, correct: 0 });
    assert!(!out.contains("Problem #1"));
    assert!(out.contains("Time's up!"));
}

#[tokio::test]
async fn deadline_interrupts_pending_read() {
    let (input, _gate) = StalledInput::new(&["\n"]);
    let (outcome, out) = run_engine(sample_questions(), Duration::from_millis(50), input).await;

    assert_eq!(outcome.reason, StopReason::TimeExpired);
    assert_eq!(outcome.tally.asked, 0);
    assert_eq!(out.matches("Problem #").count(), 1);
    assert!(out.ends_with("Time's up!\n"));
}

#[tokio::test]
async fn deadline_mid_quiz_keeps_earlier_answers() {
    let (input, _gate) = StalledInput::new(&["\n", "4\n"]);
    let (outcome, out) = run_engine(sample_questions(), Duration::from_millis(300), input).await;

    assert_eq!(outcome.reason, StopReason::TimeExpired);
    assert_eq!(outcome.tally, ScoreTally { asked: 1, correct: 1 });
    assert!(out.contains("Problem #2"));
}

#[tokio::test]
async fn late_answer_is_not_scored() {
    let input = SlowInput {
        acknowledged: false,
        delay: Duration::from_millis(300),
        answer: "4\n".to_string(),
    };
    let (outcome, out) = run_engine(sample_questions(), Duration::from_millis(50), input).await;

    assert_eq!(outcome.reason, StopReason::TimeExpired);
    assert_eq!(outcome.tally, ScoreTally { asked: 0, correct: 0 });
    assert_eq!(out.matches("Problem #").count(), 1);
}

#[tokio::test]
async fn closed_input_stops_with_partial_tally() {
    let (outcome, _) =
        run_engine(sample_questions(), Duration::from_secs(60), scripted("\n4\n")).await;

    assert!(outcome.reason.is_input_error());
    assert_eq!(outcome.tally, ScoreTally { asked: 1, correct: 1 });
}

#[tokio::test]
async fn closed_before_start_asks_nothing() {
    let (outcome, out) =
        run_engine(sample_questions(), Duration::from_secs(60), scripted("")).await;

    assert_eq!(outcome.reason, StopReason::input_closed());
    assert_eq!(outcome.tally.asked, 0);
    assert!(!out.contains("Problem #"));
}

#[tokio::test]
async fn read_failure_is_reported() {
    let (outcome, _) = run_engine(sample_questions(), Duration::from_secs(60), BrokenInput).await;

    match outcome.reason {
        StopReason::InputError { detail } => assert!(detail.contains("stdin went away")),
        other => panic!("unexpected stop reason: {:?}", other),
    }
}
