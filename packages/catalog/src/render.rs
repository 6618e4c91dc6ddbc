//! Human-readable labels for catalog records.

use std::fmt;

use common::HasAcademicTerm;

use crate::entity::{exam, exercise, final_exam, practice, revision};
use crate::models::exercise_set::ExerciseSetDetail;

impl fmt::Display for practice::Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Practice {} of {}", self.number, self.academic_term())
    }
}

impl fmt::Display for exam::Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ordinal = self.ordinal().singular;
        if self.is_makeup {
            write!(f, "Exam {ordinal} Makeup of {}", self.academic_term())
        } else {
            write!(f, "Exam {ordinal} of {}", self.academic_term())
        }
    }
}

impl fmt::Display for final_exam::Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Final Exam of {}", self.date)
    }
}

impl fmt::Display for exercise::Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Exercise {}", self.number)
    }
}

impl fmt::Display for revision::Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Display for ExerciseSetDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Practice(p) => p.fmt(f),
            Self::Exam(e) => e.fmt(f),
            Self::FinalExam(fe) => fe.fmt(f),
        }
    }
}
