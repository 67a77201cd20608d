pub mod question;
pub mod section;

pub use question::{Difficulty, ParsedQuestion, Question};
pub use section::Section;
pub use test::{Test, TestSection};
