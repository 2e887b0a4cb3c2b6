use serde::Serialize;

use crate::model::question::Question;

/// Heading plus Markdown body shown on a lesson page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonSection {
    pub heading: String,
    pub body: String,
}

impl LessonSection {
    #[must_use]
    pub fn new(heading: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            body: body.into(),
        }
    }
}

/// Field-less tag of a [`PageDescriptor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Welcome,
    Introduction,
    Lesson,
    Quiz,
    Completion,
}

/// One step of the walkthrough.
///
/// Only `Quiz` carries state-bearing structure; every other variant is
/// display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageDescriptor {
    Welcome {
        title: String,
        body: String,
    },
    Introduction {
        body: String,
    },
    Lesson {
        title: String,
        sections: Vec<LessonSection>,
    },
    Quiz {
        title: String,
        questions: Vec<Question>,
    },
    Completion {
        title: String,
        body: String,
        references: Vec<String>,
    },
}

impl PageDescriptor {
    #[must_use]
    pub fn kind(&self) -> PageKind {
        match self {
            PageDescriptor::Welcome { .. } => PageKind::Welcome,
            PageDescriptor::Introduction { .. } => PageKind::Introduction,
            PageDescriptor::Lesson { .. } => PageKind::Lesson,
            PageDescriptor::Quiz { .. } => PageKind::Quiz,
            PageDescriptor::Completion { .. } => PageKind::Completion,
        }
    }

    /// Page heading. The introduction page has none.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self {
            PageDescriptor::Welcome { title, .. }
            | PageDescriptor::Lesson { title, .. }
            | PageDescriptor::Quiz { title, .. }
            | PageDescriptor::Completion { title, .. } => Some(title),
            PageDescriptor::Introduction { .. } => None,
        }
    }

    #[must_use]
    pub fn questions(&self) -> Option<&[Question]> {
        match self {
            PageDescriptor::Quiz { questions, .. } => Some(questions),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_quiz(&self) -> bool {
        self.kind() == PageKind::Quiz
    }

    /// The completion page ends the walkthrough and offers no continue action.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.kind() == PageKind::Completion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnswerOption;

    #[test]
    fn kind_and_title_follow_variant() {
        let intro = PageDescriptor::Introduction {
            body: "Your router controls everything.".into(),
        };
        assert_eq!(intro.kind(), PageKind::Introduction);
        assert_eq!(intro.title(), None);

        let done = PageDescriptor::Completion {
            title: "Thanks".into(),
            body: "Done".into(),
            references: Vec::new(),
        };
        assert_eq!(done.title(), Some("Thanks"));
        assert!(done.is_terminal());
        assert!(done.questions().is_none());
    }

    #[test]
    fn quiz_exposes_questions() {
        let question = Question::single(
            "Pick",
            vec![
                AnswerOption::new("A", "no", false),
                AnswerOption::new("B", "yes", true),
            ],
        )
        .unwrap();
        let quiz = PageDescriptor::Quiz {
            title: "Test".into(),
            questions: vec![question],
        };
        assert!(quiz.is_quiz());
        assert_eq!(quiz.questions().map(<[Question]>::len), Some(1));
    }

    #[test]
    fn serializes_with_kind_tag() {
        let page = PageDescriptor::Welcome {
            title: "Hi".into(),
            body: "Welcome".into(),
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["kind"], "welcome");
        assert_eq!(json["title"], "Hi");
    }
}
