//! Prompt construction for the two model-facing operations.
//!
//! The reply formats requested here are what `ai::parse` expects in its
//! best-case tier; the parsers degrade gracefully when the model ignores
//! the instructions.

use crate::deck::Slide;
use crate::questionnaire::{Answers, QUESTIONS, UNANSWERED};

/// Ask the model to improve a single slide.
pub fn improve_slide(slide: &Slide, theme_names: &[&str]) -> String {
    format!(
        "You are helping polish a pitch deck slide. Improve the title and content \
         below: tighten the wording, keep it presentation-ready, and use short \
         bullet lines starting with \"•\" where it helps.\n\
         \n\
         Current title: {title}\n\
         Current content:\n{content}\n\
         Speaker notes (context only, do not rewrite): {notes}\n\
         \n\
         Pick the best matching visual theme from this list and no other: \
         {themes}.\n\
         \n\
         Reply in exactly this format:\n\
         ---SLIDE STYLE---\n\
         THEME: <theme name from the list>\n\
         ---END STYLE---\n\
         ---SLIDE CONTENT---\n\
         TITLE: <improved title>\n\
         CONTENT: <improved content, one point per line>\n\
         ---END CONTENT---",
        title = slide.title,
        content = slide.content,
        notes = if slide.notes.is_empty() { "(none)" } else { &slide.notes },
        themes = theme_names.join(", "),
    )
}

/// Ask the model to generate a whole deck from the questionnaire answers.
pub fn generate_deck(answers: &Answers, slides: usize, theme_names: &[&str]) -> String {
    let mut briefing = String::new();
    for question in &QUESTIONS {
        let answer = answers
            .get(question.key)
            .map(|a| a.as_str())
            .unwrap_or(UNANSWERED);
        briefing.push_str(&format!("- {}: {}\n", question.prompt, answer));
    }

    format!(
        "Create a startup pitch deck from this questionnaire:\n\
         {briefing}\
         \n\
         Produce exactly {slides} slides covering the usual arc: problem, \
         solution, product, validation, market, and a closing ask. Keep slide \
         content to 3-5 short bullet lines.\n\
         \n\
         Pick one visual theme for the whole deck from this list and no other: \
         {themes}.\n\
         \n\
         Reply in exactly this format, numbering slides from 1:\n\
         SELECTED_THEME: <theme name from the list>\n\
         SLIDE_1_TITLE: <title>\n\
         SLIDE_1_CONTENT: <content, one point per line>\n\
         SLIDE_1_NOTES: <one sentence of speaker notes>\n\
         SLIDE_2_TITLE: ...",
        themes = theme_names.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Slide;

    #[test]
    fn test_improve_prompt_embeds_slide_and_themes() {
        let mut slide = Slide::new(1, "Our Market");
        slide.content = "• Big\n• Growing".to_string();
        let prompt = improve_slide(&slide, &["boardroom", "tidepool"]);
        assert!(prompt.contains("Our Market"));
        assert!(prompt.contains("• Growing"));
        assert!(prompt.contains("boardroom, tidepool"));
        assert!(prompt.contains("---SLIDE STYLE---"));
    }

    #[test]
    fn test_deck_prompt_embeds_answers_and_count() {
        let mut answers = Answers::new();
        answers.insert("problem-validation", "Parking is awful".to_string());
        let prompt = generate_deck(&answers, 7, &["boardroom"]);
        assert!(prompt.contains("Parking is awful"));
        assert!(prompt.contains("exactly 7 slides"));
        assert!(prompt.contains("SELECTED_THEME:"));
        assert!(prompt.contains(UNANSWERED));
    }
}
