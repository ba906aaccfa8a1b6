use std::collections::HashMap;

use serde::Deserialize;

pub const READ_MORE: &str = "Læs mere";
pub const READ_LESS: &str = "Læs mindre";

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub author: String,
    pub role: String,
    pub excerpt: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TestimonialData {
    pub cards: Vec<Testimonial>,
    /// Author name -> full testimonial text.
    #[serde(default)]
    pub full_texts: HashMap<String, String>,
}

impl TestimonialData {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn full_text_for(&self, author: &str) -> Option<&str> {
        self.full_texts.get(author).map(String::as_str)
    }
}

/// Two-state text region of a single card.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandableText {
    excerpt: String,
    full: Option<String>,
    expanded: bool,
}

impl ExpandableText {
    pub fn new(excerpt: impl Into<String>, full: Option<String>) -> Self {
        Self {
            excerpt: excerpt.into(),
            full,
            expanded: false,
        }
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Without a known full text the excerpt stays even when expanded.
    pub fn text(&self) -> &str {
        match (&self.full, self.expanded) {
            (Some(full), true) => full,
            _ => &self.excerpt,
        }
    }

    pub fn label(&self) -> &'static str {
        if self.expanded {
            READ_LESS
        } else {
            READ_MORE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "cards": [
            { "author": "Ada", "role": "Kursist", "excerpt": "Kort..." },
            { "author": "Bo", "role": "Klient", "excerpt": "Også kort..." }
        ],
        "full_texts": { "Ada": "Den lange version." }
    }"#;

    #[test]
    fn parses_cards_and_lookup() {
        let data = TestimonialData::from_json(SAMPLE).unwrap();
        assert_eq!(data.cards.len(), 2);
        assert_eq!(data.full_text_for("Ada"), Some("Den lange version."));
        assert_eq!(data.full_text_for("Bo"), None);
    }

    #[test]
    fn bundled_testimonials_have_full_texts() {
        let data = TestimonialData::from_json(include_str!("../../data/testimonials.json")).unwrap();
        assert_eq!(data.cards.len(), 4);
        for card in &data.cards {
            let full = data.full_text_for(&card.author).unwrap();
            assert!(full.len() > card.excerpt.len() - 3);
        }
    }

    #[test]
    fn full_texts_are_optional() {
        let data = TestimonialData::from_json(r#"{ "cards": [] }"#).unwrap();
        assert!(data.cards.is_empty());
        assert!(data.full_texts.is_empty());
    }

    #[test]
    fn toggle_twice_restores_excerpt() {
        let mut text = ExpandableText::new("Kort...", Some("Den lange version.".to_string()));
        assert_eq!(text.text(), "Kort...");
        assert_eq!(text.label(), READ_MORE);

        text.toggle();
        assert_eq!(text.text(), "Den lange version.");
        assert_eq!(text.label(), READ_LESS);

        text.toggle();
        assert_eq!(text.text(), "Kort...");
        assert_eq!(text.label(), READ_MORE);
    }

    #[test]
    fn missing_full_text_keeps_excerpt_but_swaps_label() {
        let mut text = ExpandableText::new("Kort...", None);
        text.toggle();
        assert!(text.is_expanded());
        assert_eq!(text.text(), "Kort...");
        assert_eq!(text.label(), READ_LESS);
    }

    #[test]
    fn cards_toggle_independently() {
        let mut first = ExpandableText::new("a", Some("A".to_string()));
        let second = ExpandableText::new("b", Some("B".to_string()));
        first.toggle();
        assert_eq!(first.text(), "A");
        assert_eq!(second.text(), "b");
    }
}
