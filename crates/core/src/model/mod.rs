mod ids;
mod page;
mod question;
mod quiz;

pub use ids::{OptionId, PageIndex, ParseIdError, QuestionIndex};
pub use page::{LessonSection, PageDescriptor, PageKind};
pub use question::{AnswerOption, Question, QuestionError};
pub use quiz::{OptionFeedback, OptionMark, QuestionFeedback, QuizAttemptState, QuizError, QuizStatus};
