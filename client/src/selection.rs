//! Initial subject selection for newly created students.

use common::model::subject::Subject;
use rand::seq::SliceRandom;
use rand::Rng;

/// Curriculum year whose subjects are attached to a new student.
pub const FIRST_YEAR: u32 = 1;

/// Number of subjects attached to a new student.
pub const INITIAL_SUBJECT_COUNT: usize = 5;

/// Picks up to `count` distinct subjects of `year`, uniformly at random.
///
/// Subjects repeated by identifier count once. The result has
/// `min(count, available)` entries.
pub fn pick<R: Rng + ?Sized>(
    subjects: &[Subject],
    year: u32,
    count: usize,
    rng: &mut R,
) -> Vec<Subject> {
    let mut pool: Vec<&Subject> = Vec::new();
    for subject in subjects.iter().filter(|s| s.year == year) {
        if !pool.iter().any(|p| p.id == subject.id) {
            pool.push(subject);
        }
    }

    pool.shuffle(rng);
    pool.into_iter().take(count).cloned().collect()
}
