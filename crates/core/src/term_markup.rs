//! Wraps dictionary terms found in streetcode texts in popover markup.
//!
//! A term is matched by its title or by any of its related words,
//! case-insensitively and on whole words only. Only the first occurrence of
//! each term is wrapped. Existing markup, including text already inside a
//! `<Popover>` element, is copied through unchanged.

use std::collections::{HashMap, HashSet};

use crate::types::DbId;

/// One spelling that should resolve to a term's description.
#[derive(Debug, Clone)]
pub struct TermDefinition {
    pub term_id: DbId,
    pub word: String,
    pub description: String,
}

/// Render the popover element for a matched word.
pub fn popover(word: &str, description: &str) -> String {
    format!("<Popover><Term>{word}</Term><Desc>{description}</Desc></Popover>")
}

/// Apply term markup to `text`.
pub fn tag_terms(text: &str, definitions: &[TermDefinition]) -> String {
    let mut lookup: HashMap<String, &TermDefinition> = HashMap::new();
    for def in definitions {
        lookup.entry(def.word.to_lowercase()).or_insert(def);
    }

    let mut used: HashSet<DbId> = HashSet::new();
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut popover_depth = 0usize;

    while let Some(c) = rest.chars().next() {
        if c == '<' {
            let end = rest.find('>').map_or(rest.len(), |i| i + 1);
            let tag = &rest[..end];
            if tag.starts_with("<Popover") {
                popover_depth += 1;
            } else if tag.starts_with("</Popover") {
                popover_depth = popover_depth.saturating_sub(1);
            }
            out.push_str(tag);
            rest = &rest[end..];
            continue;
        }

        if is_word_char(c) {
            let end = rest
                .find(|ch: char| !is_word_char(ch))
                .unwrap_or(rest.len());
            let word = &rest[..end];
            match lookup.get(&word.to_lowercase()) {
                Some(def) if popover_depth == 0 && used.insert(def.term_id) => {
                    out.push_str(&popover(word, &def.description));
                }
                _ => out.push_str(word),
            }
            rest = &rest[end..];
            continue;
        }

        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    out
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '\'' | '’' | 'ʼ' | '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defs() -> Vec<TermDefinition> {
        vec![
            TermDefinition {
                term_id: 1,
                word: "Кобзар".into(),
                description: "Збірка поезій".into(),
            },
            TermDefinition {
                term_id: 1,
                word: "кобзаря".into(),
                description: "Збірка поезій".into(),
            },
            TermDefinition {
                term_id: 2,
                word: "гетьман".into(),
                description: "Правитель".into(),
            },
        ]
    }

    #[test]
    fn wraps_first_occurrence_only() {
        let out = tag_terms("Кобзар і ще раз кобзар", &defs());
        assert_eq!(
            out,
            format!("{} і ще раз кобзар", popover("Кобзар", "Збірка поезій"))
        );
    }

    #[test]
    fn related_word_counts_as_same_term() {
        let out = tag_terms("Видання кобзаря. Кобзар", &defs());
        assert_eq!(
            out,
            format!("Видання {}. Кобзар", popover("кобзаря", "Збірка поезій"))
        );
    }

    #[test]
    fn matches_whole_words_only() {
        let out = tag_terms("гетьманщина", &defs());
        assert_eq!(out, "гетьманщина");
    }

    #[test]
    fn leaves_markup_untouched() {
        let input = "<p class=\"гетьман\">Гетьман</p>";
        let out = tag_terms(input, &defs());
        assert_eq!(
            out,
            format!("<p class=\"гетьман\">{}</p>", popover("Гетьман", "Правитель"))
        );
    }

    #[test]
    fn skips_existing_popovers() {
        let input = format!("{} гетьман", popover("Гетьман", "Old"));
        let out = tag_terms(&input, &defs());
        assert_eq!(
            out,
            format!("{} {}", popover("Гетьман", "Old"), popover("гетьман", "Правитель"))
        );
    }

    #[test]
    fn text_without_terms_is_unchanged() {
        let input = "Plain text, no terms.";
        assert_eq!(tag_terms(input, &defs()), input);
    }
}
