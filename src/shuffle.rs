//! Optional randomization of question order.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::Question;

/// Shuffles `questions` with an OS-seeded generator when `enabled`, otherwise
/// returns them untouched.
pub fn randomize(mut questions: Vec<Question>, enabled: bool) -> Vec<Question> {
    if enabled {
        shuffle_with(&mut questions, &mut rand::thread_rng());
        tracing::info!(count = questions.len(), "shuffled questions");
    }
    questions
}

/// Unbiased in-place permutation (Fisher-Yates).
pub fn shuffle_with<R: Rng + ?Sized>(questions: &mut [Question], rng: &mut R) {
    questions.shuffle(rng);
}
