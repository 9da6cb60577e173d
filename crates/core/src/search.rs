//! Matching rules for the streetcode filter search.
//!
//! The search aggregates hits from five blocks in a fixed order: streetcode
//! fields, texts, facts, timeline items, arts. This module holds the per-block
//! matching and labelling; the service layer loads the rows and assembles the
//! result list.

/// Content block a search hit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchBlock {
    Streetcode,
    Text,
    Fact,
    Timeline,
    Art,
}

impl SearchBlock {
    /// Human-readable section label shown next to a hit.
    pub fn source_name(self) -> Option<&'static str> {
        match self {
            Self::Streetcode => None,
            Self::Text => Some("Текст"),
            Self::Fact => Some("Wow-факти"),
            Self::Timeline => Some("Хронологія"),
            Self::Art => Some("Арт-галерея"),
        }
    }

    /// Anchor of the section on the streetcode page.
    pub fn block_name(self) -> Option<&'static str> {
        match self {
            Self::Streetcode => None,
            Self::Text => Some("text"),
            Self::Fact => Some("wow-facts"),
            Self::Timeline => Some("timeline"),
            Self::Art => Some("art-gallery"),
        }
    }
}

/// Case-insensitive substring test. An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Case-sensitive substring test used for the coarse candidate filter.
pub fn contains_exact(haystack: &str, needle: &str) -> bool {
    haystack.contains(needle)
}

/// The streetcode fields the search inspects.
#[derive(Debug, Clone, Copy)]
pub struct StreetcodeSearchFields<'a> {
    pub title: &'a str,
    pub alias: Option<&'a str>,
    pub teaser: Option<&'a str>,
    pub transliteration_url: &'a str,
}

/// Coarse candidate test: title, alias or teaser contains the query verbatim.
pub fn is_candidate(query: &str, fields: &StreetcodeSearchFields<'_>) -> bool {
    contains_exact(fields.title, query)
        || fields.alias.is_some_and(|a| contains_exact(a, query))
        || fields.teaser.is_some_and(|t| contains_exact(t, query))
}

/// Re-test a candidate in priority order title, alias, teaser, transliteration
/// URL and return the first matching field's value.
pub fn match_streetcode<'a>(query: &str, fields: &StreetcodeSearchFields<'a>) -> Option<&'a str> {
    if contains_ignore_case(fields.title, query) {
        return Some(fields.title);
    }
    if let Some(alias) = fields.alias.filter(|a| !a.is_empty()) {
        if contains_ignore_case(alias, query) {
            return Some(alias);
        }
    }
    if let Some(teaser) = fields.teaser {
        if contains_ignore_case(teaser, query) {
            return Some(teaser);
        }
    }
    if contains_ignore_case(fields.transliteration_url, query) {
        return Some(fields.transliteration_url);
    }
    None
}

/// A text matches on its title first, then on its content. Returns the
/// matching field as the hit's content.
pub fn match_text<'a>(query: &str, title: &'a str, content: Option<&'a str>) -> Option<&'a str> {
    if contains_ignore_case(title, query) {
        return Some(title);
    }
    content.filter(|c| !c.is_empty() && contains_ignore_case(c, query))
}

/// Facts match on title or content; the hit always shows the title.
pub fn fact_matches(query: &str, title: &str, content: &str) -> bool {
    contains_ignore_case(title, query) || contains_ignore_case(content, query)
}

/// Timeline items match on title or description; the hit shows the title.
pub fn timeline_matches(query: &str, title: &str, description: Option<&str>) -> bool {
    contains_ignore_case(title, query)
        || description.is_some_and(|d| !d.is_empty() && contains_ignore_case(d, query))
}

/// Arts match on a non-empty description only.
pub fn art_matches(query: &str, description: Option<&str>) -> bool {
    description.is_some_and(|d| !d.is_empty() && contains_ignore_case(d, query))
}
