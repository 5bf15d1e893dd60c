//! The deck-generation questionnaire: a six-question modal wizard.

use std::collections::BTreeMap;

/// Stored for a question the user skipped.
pub const UNANSWERED: &str = "(not provided)";

pub const MIN_SLIDES: usize = 3;
pub const MAX_SLIDES: usize = 15;

#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub key: &'static str,
    pub prompt: &'static str,
}

pub const QUESTIONS: [Question; 6] = [
    Question {
        key: "problem-validation",
        prompt: "What problem are you solving, and how have you validated that it exists?",
    },
    Question {
        key: "solution-data",
        prompt: "What data or evidence supports your solution?",
    },
    Question {
        key: "mvp",
        prompt: "What does your minimum viable product look like?",
    },
    Question {
        key: "validated-solution",
        prompt: "How have you validated the solution with real users?",
    },
    Question {
        key: "market",
        prompt: "Who is the market, and how big is it?",
    },
    Question {
        key: "presentation-minutes",
        prompt: "How many minutes will you have to present?",
    },
];

pub type Answers = BTreeMap<&'static str, String>;

/// Outcome of advancing the wizard.
#[derive(Debug)]
pub enum Step {
    Advanced,
    Complete(Answers),
}

/// Wizard state. Created when the modal opens, dropped when it closes;
/// nothing survives either completion or cancel.
#[derive(Debug, Default)]
pub struct Questionnaire {
    index: usize,
    answers: Answers,
}

impl Questionnaire {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        QUESTIONS.len()
    }

    pub fn question(&self) -> &'static Question {
        &QUESTIONS[self.index]
    }

    /// The stored answer for the current question, for refilling the
    /// textbox after `back`.
    pub fn current_answer(&self) -> Option<&str> {
        self.answers.get(QUESTIONS[self.index].key).map(|s| s.as_str())
    }

    /// Record the textbox value (blank allowed) and advance. Completing the
    /// last question hands back the accumulated answers.
    pub fn record_and_advance(&mut self, answer: &str) -> Step {
        let value = if answer.trim().is_empty() {
            UNANSWERED.to_string()
        } else {
            answer.trim().to_string()
        };
        self.answers.insert(QUESTIONS[self.index].key, value);

        if self.index + 1 < QUESTIONS.len() {
            self.index += 1;
            Step::Advanced
        } else {
            Step::Complete(std::mem::take(&mut self.answers))
        }
    }

    /// Retreat one step without validation.
    pub fn back(&mut self) {
        self.index = self.index.saturating_sub(1);
    }
}

/// Derive the deck size from the presentation-time answer: roughly one
/// content slide per two minutes plus a title and a closing slide, clamped.
/// Ten minutes is assumed when the answer has no number in it.
pub fn slide_count(answers: &Answers) -> usize {
    let minutes = answers
        .get("presentation-minutes")
        .and_then(|a| first_number(a))
        .unwrap_or(10);
    (minutes as usize / 2 + 2).clamp(MIN_SLIDES, MAX_SLIDES)
}

fn first_number(text: &str) -> Option<u32> {
    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walkthrough_completes_with_all_answers() {
        let mut wizard = Questionnaire::new();
        for i in 0..5 {
            assert_eq!(wizard.index(), i);
            assert!(matches!(wizard.record_and_advance("answer"), Step::Advanced));
        }
        match wizard.record_and_advance("15 minutes") {
            Step::Complete(answers) => {
                assert_eq!(answers.len(), 6);
                assert_eq!(answers["presentation-minutes"], "15 minutes");
            }
            Step::Advanced => panic!("expected completion"),
        }
    }

    #[test]
    fn test_blank_answer_stores_placeholder() {
        let mut wizard = Questionnaire::new();
        wizard.record_and_advance("   ");
        wizard.back();
        assert_eq!(wizard.current_answer(), Some(UNANSWERED));
    }

    #[test]
    fn test_back_stops_at_first_question() {
        let mut wizard = Questionnaire::new();
        wizard.back();
        assert_eq!(wizard.index(), 0);
        wizard.record_and_advance("a");
        wizard.back();
        assert_eq!(wizard.index(), 0);
        assert_eq!(wizard.current_answer(), Some("a"));
    }

    #[test]
    fn test_slide_count_from_minutes() {
        let mut answers = Answers::new();
        answers.insert("presentation-minutes", "10".to_string());
        assert_eq!(slide_count(&answers), 7);

        answers.insert("presentation-minutes", "about 20 minutes".to_string());
        assert_eq!(slide_count(&answers), 12);

        answers.insert("presentation-minutes", "2".to_string());
        assert_eq!(slide_count(&answers), MIN_SLIDES);

        answers.insert("presentation-minutes", "90".to_string());
        assert_eq!(slide_count(&answers), MAX_SLIDES);

        answers.insert("presentation-minutes", UNANSWERED.to_string());
        assert_eq!(slide_count(&answers), 7);

        assert_eq!(slide_count(&Answers::new()), 7);
    }
}
