use crate::model::{Score, StudentId};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Per-student score ledger and the aggregation on top of it. Scores are
/// append-only and may be recorded for identifiers that have no matching
/// roster entry (orphan scores are kept as-is).
#[derive(Debug, Default)]
pub struct GradeBook {
    scores: BTreeMap<StudentId, Vec<Score>>,
}

impl GradeBook {
    pub fn new() -> GradeBook {
        GradeBook::default()
    }

    /// Append a score for this student, creating the entry if needed.
    pub fn add_score(&mut self, student: StudentId, score: Score) {
        self.scores.entry(student).or_default().push(score);
    }

    /// Copy of the recorded scores in insertion order, empty when the
    /// student is unknown.
    pub fn scores_for(&self, student: &StudentId) -> Vec<Score> {
        self.scores.get(student).cloned().unwrap_or_default()
    }

    /// Arithmetic mean of the recorded points. An unknown student or an
    /// empty score list yields 0, not an error.
    pub fn average(&self, student: &StudentId) -> f64 {
        match self.scores.get(student) {
            Some(scores) if !scores.is_empty() => {
                scores.iter().map(Score::points).sum::<f64>() / scores.len() as f64
            }
            _ => 0.0,
        }
    }

    /// The `count` best averages, descending. Students without any recorded
    /// score do not rank (no data is not a zero). Equal averages order by
    /// ascending identifier. Recomputed from the ledger on every call.
    pub fn top_students(&self, count: usize) -> Vec<(StudentId, f64)> {
        let mut ranked = self
            .scores
            .iter()
            .filter(|(_, scores)| !scores.is_empty())
            .map(|(id, _)| (id.clone(), self.average(id)))
            .collect::<Vec<_>>();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        ranked.truncate(count);
        ranked
    }

    /// Identifiers with at least one recorded score, in ascending order.
    pub fn student_ids(&self) -> Vec<StudentId> {
        self.scores.keys().cloned().collect()
    }

    /// Deep copy of the whole ledger; callers cannot alias internal state.
    pub fn all_scores(&self) -> BTreeMap<StudentId, Vec<Score>> {
        self.scores.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Grade;

    fn id(s: &str) -> StudentId {
        StudentId::new(s).unwrap()
    }

    fn score(subject: &str, points: f64) -> Score {
        Score::new(subject, points).unwrap()
    }

    #[test]
    fn average_of_unknown_student_is_zero() {
        let book = GradeBook::new();
        assert_eq!(book.average(&id("nobody")), 0.0);
    }

    #[test]
    fn average_and_grades_match_recorded_scores() {
        let mut book = GradeBook::new();
        book.add_score(id("2021001"), score("数学", 95.5));
        book.add_score(id("2021001"), score("英语", 87.0));
        book.add_score(id("2021002"), score("数学", 78.5));
        book.add_score(id("2021002"), score("英语", 85.5));

        assert_eq!(book.average(&id("2021001")), 91.25);
        assert_eq!(book.average(&id("2021002")), 82.0);
        assert_eq!(Grade::from_average(book.average(&id("2021001"))), Grade::A);
        assert_eq!(Grade::from_average(book.average(&id("2021002"))), Grade::B);

        let top = book.top_students(1);
        assert_eq!(top, vec![(id("2021001"), 91.25)]);
    }

    #[test]
    fn duplicate_subjects_are_both_counted() {
        let mut book = GradeBook::new();
        book.add_score(id("s1"), score("maths", 100.0));
        book.add_score(id("s1"), score("maths", 50.0));
        assert_eq!(book.average(&id("s1")), 75.0);
        assert_eq!(book.scores_for(&id("s1")).len(), 2);
    }

    #[test]
    fn ranking_clamps_count_and_breaks_ties_by_id() {
        let mut book = GradeBook::new();
        book.add_score(id("b"), score("maths", 80.0));
        book.add_score(id("a"), score("maths", 80.0));
        book.add_score(id("c"), score("maths", 90.0));

        let top = book.top_students(10);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].0, id("c"));
        // 80.0 tie resolves on the identifier
        assert_eq!(top[1].0, id("a"));
        assert_eq!(top[2].0, id("b"));

        assert!(book.top_students(0).is_empty());
    }

    #[test]
    fn ranking_ignores_students_without_scores() {
        let mut book = GradeBook::new();
        book.add_score(id("scored"), score("maths", 10.0));
        // an entry exists but holds no scores
        book.scores.insert(id("empty"), Vec::new());

        let top = book.top_students(5);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].0, id("scored"));
    }

    #[test]
    fn copies_do_not_alias_the_ledger() {
        let mut book = GradeBook::new();
        book.add_score(id("s1"), score("maths", 42.0));

        let mut copy = book.scores_for(&id("s1"));
        copy.clear();
        assert_eq!(book.scores_for(&id("s1")).len(), 1);

        let mut all = book.all_scores();
        all.get_mut(&id("s1")).unwrap().clear();
        assert_eq!(book.scores_for(&id("s1")).len(), 1);
    }
}
