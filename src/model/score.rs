use crate::error::Error;
use std::fmt;

/// A single graded result. A student may hold several scores for the same
/// subject; nothing deduplicates them.
#[derive(Clone, Debug, PartialEq)]
pub struct Score {
    subject: String,
    points: f64,
}

impl Score {
    pub fn new(subject: &str, points: f64) -> Result<Score, Error> {
        if subject.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "score subject must not be empty".to_owned(),
            ));
        }
        if !points.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "score points must be finite, got {points}"
            )));
        }
        Ok(Score {
            subject: subject.to_owned(),
            points,
        })
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn points(&self) -> f64 {
        self.points
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.subject, self.points)
    }
}

/// Letter grade derived from an average score.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Classify an average on the usual ladder; boundaries go to the
    /// higher band. Total over all reals, anything below 60 is an F.
    pub fn from_average(average: f64) -> Grade {
        if average >= 90.0 {
            Grade::A
        } else if average >= 80.0 {
            Grade::B
        } else if average >= 70.0 {
            Grade::C
        } else if average >= 60.0 {
            Grade::D
        } else {
            Grade::F
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        })
    }
}

#[test]
fn test_score_validation() {
    assert!(Score::new("maths", 95.5).is_ok());
    assert!(Score::new("", 95.5).is_err());
    assert!(Score::new("  ", 95.5).is_err());
    assert!(Score::new("maths", f64::NAN).is_err());
    assert!(Score::new("maths", f64::INFINITY).is_err());
}

#[test]
fn test_grade_ladder() {
    assert_eq!(Grade::from_average(95.5), Grade::A);
    assert_eq!(Grade::from_average(90.0), Grade::A);
    assert_eq!(Grade::from_average(89.999), Grade::B);
    assert_eq!(Grade::from_average(82.25), Grade::B);
    assert_eq!(Grade::from_average(80.0), Grade::B);
    assert_eq!(Grade::from_average(70.0), Grade::C);
    assert_eq!(Grade::from_average(65.0), Grade::D);
    assert_eq!(Grade::from_average(60.0), Grade::D);
    assert_eq!(Grade::from_average(59.999), Grade::F);
    assert_eq!(Grade::from_average(0.0), Grade::F);
    assert_eq!(Grade::from_average(-12.0), Grade::F);
}
