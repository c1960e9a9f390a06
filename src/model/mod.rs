pub use self::score::{Grade, Score};
pub use self::student::{Student, StudentId};

mod score;
mod student;
