pub mod encouragement;
mod question;
mod section;
mod subject;
mod tier;

pub use question::{
    AnswerChoice, POINTS_PER_QUESTION, Question, QuestionBank, QuestionError,
    circle_question_bank,
};
pub use section::{ParseSectionError, SectionContent, SectionId, section_content};
pub use subject::{SUBJECTS, Subject, Topic};
pub use tier::ResultTier;
