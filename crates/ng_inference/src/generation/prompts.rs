//! Prompt builders for the three generation stages.

use ng_core::{ChatMessage, Locale, TextKind};

pub const TOPICS_TO_USE: &[&str] = &[
    "recent events",
    "international politics",
    "international sports",
    "science",
    "technology",
    "planet",
    "health",
    "nature",
    "space",
    "economy",
    "business",
    "international entertainment",
    "international culture",
    "international art",
    "international music",
    "international cinema",
    "international literature",
    "international fashion",
    "international food",
    "international travel",
    "international lifestyle",
    "international environment",
    "international climate",
    "international energy",
    "international education",
    "international society",
    "international history",
];

pub const TOPICS_TO_AVOID: &[&str] = &[
    "local",
    "regional",
    "religion",
    "not safe for work",
    "adult content",
];

const HEADLINE_INSTRUCTIONS: &str = "\
You are a journalist writing the headline of a news article.
Reply with exactly two lines and nothing else.
Line 1: the headline, 8-14 words long, without double quotes.
Line 2: one sentence describing what makes the story fake or why it is real.
Do not repeat the headline in the second line.
Do not label the lines as \"headline\" or \"detail\".
Do not leave trailing whitespace.
Pick topics relevant to the news outlet that tend to grab attention, and avoid mundane ones.";

const CONTENT_INSTRUCTIONS: &str = "\
You are a journalist writing a short news article of roughly 50-75 words.
Do not say anything that could be considered offensive or inappropriate.
Do not use the words \"content\" or \"article\" in your reply.
Do not leave trailing whitespace.
Do not express anything that reads as a personal opinion.
Do not repeat the same information in different ways.
The reply may span several lines, but keep it short.";

const TRANSLATION_INSTRUCTIONS: &str = "\
You are a journalist translating a news article from one language to another.
Keep the original meaning and style of the text.
Reply with the translation only.";

const TRANSLATION_STYLE_NOTES: &str = "\
Avoid slang and idiomatic expressions.
Do not leave trailing whitespace.
Carry over the nuances of the news outlet's style and of the source language.";

fn authenticity(is_fake: bool) -> &'static str {
    if is_fake {
        "fake"
    } else {
        "real"
    }
}

fn comma_list(items: &[&str]) -> String {
    items.join(", ")
}

pub fn headline_messages(
    outlet: &str,
    locale: Locale,
    is_fake: bool,
    used_headlines: &[String],
) -> Vec<ChatMessage> {
    let authenticity_instruction = if is_fake {
        "Write a fake news headline. It should still sound at least fairly realistic, \
         and the second line must say which element of it is fabricated."
    } else {
        "Write a real news headline. The second line must say why the story is real."
    };

    let mut messages = vec![
        ChatMessage::system(HEADLINE_INSTRUCTIONS),
        ChatMessage::system(format!("Topics to use: {}", comma_list(TOPICS_TO_USE))),
        ChatMessage::system(format!("Topics to avoid: {}", comma_list(TOPICS_TO_AVOID))),
        ChatMessage::system(authenticity_instruction),
        ChatMessage::system(format!("Emulate the style of the news outlet: {}.", outlet)),
        ChatMessage::system(format!(
            "Write both lines in {}. Add some nuanced details.",
            locale.name()
        )),
    ];
    if !used_headlines.is_empty() {
        messages.push(ChatMessage::system(format!(
            "Do not repeat any of these earlier headlines:\n{}",
            used_headlines.join("\n")
        )));
    }
    messages
}

pub fn content_messages(
    locale: Locale,
    outlet: &str,
    headline: &str,
    detail: &str,
    is_fake: bool,
) -> Vec<ChatMessage> {
    let kind = authenticity(is_fake);
    vec![
        ChatMessage::system(CONTENT_INSTRUCTIONS),
        ChatMessage::user(format!("The article you are writing is headlined: {}", headline)),
        ChatMessage::user(format!("What makes this story {} is: {}", kind, detail)),
        ChatMessage::user(format!("Keep in mind that the story you are writing is {}.", kind)),
        ChatMessage::user(format!(
            "Write it in the style of the {} news outlet {}.",
            locale.name(),
            outlet
        )),
        ChatMessage::user(format!("Write it in {}.", locale.name())),
    ]
}

pub fn translation_messages(
    text: &str,
    kind: TextKind,
    source: Locale,
    target: Locale,
    outlet: &str,
) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(TRANSLATION_INSTRUCTIONS),
        ChatMessage::user(format!("The {} you need to translate is: {}", kind, text)),
        ChatMessage::user(format!("The original language of the text is: {}", source.name())),
        ChatMessage::user(format!("Translate the text to: {}", target.name())),
        ChatMessage::user(format!(
            "Emulate the style of the {} news outlet while writing.",
            outlet
        )),
        ChatMessage::user(TRANSLATION_STYLE_NOTES),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(messages: &[ChatMessage]) -> String {
        messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_headline_prompt_mentions_inputs() {
        let used = vec!["Old headline one".to_string(), "Old headline two".to_string()];
        let messages = headline_messages("Le Monde", Locale::Fr, true, &used);
        let text = joined(&messages);
        assert!(text.contains("Le Monde"));
        assert!(text.contains("French"));
        assert!(text.contains("fake news headline"));
        assert!(text.contains("Old headline two"));
        assert!(text.contains("international climate"));
        assert!(text.contains("religion"));
    }

    #[test]
    fn test_headline_prompt_skips_empty_avoid_list() {
        let messages = headline_messages("Bild", Locale::De, false, &[]);
        assert!(!joined(&messages).contains("earlier headlines"));
        assert!(joined(&messages).contains("real news headline"));
    }

    #[test]
    fn test_content_prompt_frames_authenticity() {
        let messages = content_messages(Locale::Es, "El País", "Titular", "Porque sí", false);
        let text = joined(&messages);
        assert!(text.contains("Titular"));
        assert!(text.contains("What makes this story real is: Porque sí"));
        assert!(text.contains("Spanish news outlet El País"));
    }

    #[test]
    fn test_translation_prompt_uses_kind_and_names() {
        let messages =
            translation_messages("Hello", TextKind::Detail, Locale::En, Locale::De, "Reuters");
        let text = joined(&messages);
        assert!(text.contains("The detail you need to translate is: Hello"));
        assert!(text.contains("original language of the text is: English"));
        assert!(text.contains("Translate the text to: German"));
        assert!(text.contains("Reuters"));
    }
}
