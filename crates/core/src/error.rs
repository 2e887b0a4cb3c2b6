use thiserror::Error;

use crate::catalog::CatalogError;
use crate::model::{QuestionError, QuizError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionIndex;

    #[test]
    fn layer_errors_convert_transparently() {
        let err: Error = QuizError::PrematureSubmit { unanswered: 2 }.into();
        assert!(matches!(err, Error::Quiz(QuizError::PrematureSubmit { .. })));
        assert_eq!(err.to_string(), "cannot submit: 2 question(s) have no selection");

        let err: Error = CatalogError::Empty.into();
        assert_eq!(err.to_string(), "catalog must contain at least one page");

        let err: Error = QuizError::InvalidQuestionIndex {
            index: QuestionIndex::new(4),
            len: 2,
        }
        .into();
        assert!(err.to_string().contains("quiz has 2 questions"));
    }
}
