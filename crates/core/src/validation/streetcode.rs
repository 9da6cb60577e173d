//! Cross-field rules shared by the streetcode create and update validators.

use std::sync::LazyLock;

use regex::Regex;

use super::rules::Violations;
use crate::streetcode::{
    count_assignments, index_in_range, teaser_within_limit, ImageAssignment, StreetcodeType,
    MAX_ALIAS_CHARS, MAX_DATE_STRING_CHARS, MAX_NAME_CHARS, MAX_TITLE_CHARS, MAX_URL_CHARS,
};

static TRANSLITERATION_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]*$").expect("valid regex"));

static DATE_STRING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9а-яА-ЯіїєґІЇЄҐ\s()\-–]+$").expect("valid regex")
});

pub const MSG_INDEX_RANGE: &str = "Index must be between 1 and 9999.";
pub const MSG_INDEX_UNIQUE: &str = "Index must be unique.";
pub const MSG_FIRST_NAME_LENGTH: &str = "First name cannot exceed 50 characters.";
pub const MSG_LAST_NAME_LENGTH: &str = "Last name cannot exceed 50 characters.";
pub const MSG_TITLE_REQUIRED: &str = "Title is required.";
pub const MSG_TITLE_LENGTH: &str = "Title cannot exceed 100 characters.";
pub const MSG_ALIAS_LENGTH: &str = "Alias cannot exceed 33 characters.";
pub const MSG_URL_REQUIRED: &str = "Transliteration URL is required.";
pub const MSG_URL_LENGTH: &str = "Transliteration URL cannot exceed 100 characters.";
pub const MSG_URL_FORMAT: &str =
    "Transliteration URL can only contain lowercase letters, numbers, and hyphens.";
pub const MSG_DATE_STRING_REQUIRED: &str = "Date string is required.";
pub const MSG_DATE_STRING_LENGTH: &str = "Date string cannot exceed 100 characters.";
pub const MSG_DATE_STRING_FORMAT: &str =
    "Date string can only contain numbers, Ukrainian letters, spaces, parentheses, and hyphens.";
pub const MSG_TEASER_REQUIRED: &str = "Teaser is required.";
pub const MSG_TEASER_LENGTH: &str =
    "Teaser cannot exceed 520 characters, or 455 characters if it contains a newline.";
pub const MSG_EVENT_NAMES: &str =
    "First name and Last name must be empty for Event streetcode type.";
pub const MSG_BLACK_AND_WHITE: &str = "There must be exactly one black and white image.";
pub const MSG_ANIMATION: &str = "There can be at most one animation image.";
pub const MSG_RELATED_FIGURE: &str = "There can be at most one related figure image.";
pub const MSG_IMAGES_REQUIRED: &str = "At least one image detail is required.";
pub const MSG_IMAGES_MISSING: &str = "One or more images do not exist.";

/// Borrowed view over the fields the streetcode rules inspect.
#[derive(Debug, Clone)]
pub struct StreetcodeFields<'a> {
    pub index: i32,
    pub streetcode_type: StreetcodeType,
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub title: &'a str,
    pub alias: Option<&'a str>,
    pub transliteration_url: &'a str,
    pub date_string: &'a str,
    pub teaser: Option<&'a str>,
    /// `alt` of every image detail, in request order.
    pub image_alts: Vec<Option<&'a str>>,
}

/// Run every rule that needs no repository access.
pub fn validate_streetcode_fields(fields: &StreetcodeFields<'_>) -> Violations {
    let mut v = Violations::new();

    if !index_in_range(fields.index) {
        v.push("index", "range", MSG_INDEX_RANGE);
    }

    v.max_chars("first_name", fields.first_name, MAX_NAME_CHARS, MSG_FIRST_NAME_LENGTH);
    v.max_chars("last_name", fields.last_name, MAX_NAME_CHARS, MSG_LAST_NAME_LENGTH);

    v.required("title", Some(fields.title), MSG_TITLE_REQUIRED);
    v.max_chars("title", Some(fields.title), MAX_TITLE_CHARS, MSG_TITLE_LENGTH);

    v.max_chars("alias", fields.alias, MAX_ALIAS_CHARS, MSG_ALIAS_LENGTH);

    let url = Some(fields.transliteration_url);
    v.required("transliteration_url", url, MSG_URL_REQUIRED);
    v.max_chars("transliteration_url", url, MAX_URL_CHARS, MSG_URL_LENGTH);
    v.pattern("transliteration_url", url, &TRANSLITERATION_URL_RE, MSG_URL_FORMAT);

    let date_string = Some(fields.date_string);
    if v.required("date_string", date_string, MSG_DATE_STRING_REQUIRED) {
        v.max_chars("date_string", date_string, MAX_DATE_STRING_CHARS, MSG_DATE_STRING_LENGTH);
        v.pattern("date_string", date_string, &DATE_STRING_RE, MSG_DATE_STRING_FORMAT);
    }

    if v.required("teaser", fields.teaser, MSG_TEASER_REQUIRED)
        && !fields.teaser.is_some_and(teaser_within_limit)
    {
        v.push("teaser", "max_length", MSG_TEASER_LENGTH);
    }

    if fields.streetcode_type == StreetcodeType::Event
        && (has_text(fields.first_name) || has_text(fields.last_name))
    {
        v.push("first_name", "event_names", MSG_EVENT_NAMES);
    }

    v.extend(validate_image_assignments(&fields.image_alts));

    v
}

/// Image role cardinality: exactly one black-and-white, at most one
/// animation, at most one related figure.
pub fn validate_image_assignments(alts: &[Option<&str>]) -> Violations {
    let mut v = Violations::new();
    let alts = alts.iter().copied();

    if count_assignments(alts.clone(), ImageAssignment::BlackAndWhite) != 1 {
        v.push("images_details", "cardinality", MSG_BLACK_AND_WHITE);
    }
    if count_assignments(alts.clone(), ImageAssignment::Animation) > 1 {
        v.push("images_details", "cardinality", MSG_ANIMATION);
    }
    if count_assignments(alts, ImageAssignment::RelatedFigure) > 1 {
        v.push("images_details", "cardinality", MSG_RELATED_FIGURE);
    }

    v
}

fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.is_empty())
}
