//! News field rules.

use std::sync::LazyLock;

use regex::Regex;

use super::rules::Violations;
use crate::types::{DbId, Timestamp};

pub const MIN_NEWS_TITLE_CHARS: usize = 2;
pub const MAX_NEWS_TITLE_CHARS: usize = 150;
pub const MAX_NEWS_URL_CHARS: usize = 100;

pub const MSG_NEWS_TITLE_REQUIRED: &str = "Title is required.";
pub const MSG_NEWS_TITLE_SHORT: &str = "Title must be at least 2 characters long.";
pub const MSG_NEWS_TITLE_LENGTH: &str = "Title cannot exceed 150 characters.";
pub const MSG_NEWS_TEXT_REQUIRED: &str = "Text content is required.";
pub const MSG_NEWS_URL_REQUIRED: &str = "URL is required.";
pub const MSG_NEWS_URL_LENGTH: &str = "URL cannot exceed 100 characters.";
pub const MSG_NEWS_URL_FORMAT: &str = "URL must be in a valid format.";
pub const MSG_NEWS_DATE_REQUIRED: &str = "Creation date is required.";
pub const MSG_NEWS_IMAGE_ID: &str = "Image ID must be greater than 0.";

/// News URLs are addressed as a single path segment (`/news/url/{url}`).
static NEWS_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid regex"));

/// Borrowed view over the news fields the rules inspect.
#[derive(Debug, Clone)]
pub struct NewsFields<'a> {
    pub title: &'a str,
    pub text: &'a str,
    pub url: &'a str,
    pub creation_date: Option<Timestamp>,
    pub image_id: Option<DbId>,
}

pub fn validate_news_fields(fields: &NewsFields<'_>) -> Violations {
    let mut v = Violations::new();

    let title = Some(fields.title);
    if v.required("title", title, MSG_NEWS_TITLE_REQUIRED) {
        v.min_chars("title", title, MIN_NEWS_TITLE_CHARS, MSG_NEWS_TITLE_SHORT);
        v.max_chars("title", title, MAX_NEWS_TITLE_CHARS, MSG_NEWS_TITLE_LENGTH);
    }

    v.required("text", Some(fields.text), MSG_NEWS_TEXT_REQUIRED);

    let url = Some(fields.url);
    if v.required("url", url, MSG_NEWS_URL_REQUIRED) {
        v.max_chars("url", url, MAX_NEWS_URL_CHARS, MSG_NEWS_URL_LENGTH);
        v.pattern("url", url, &NEWS_URL_RE, MSG_NEWS_URL_FORMAT);
    }

    if fields.creation_date.is_none() {
        v.push("creation_date", "required", MSG_NEWS_DATE_REQUIRED);
    }

    if fields.image_id.is_some_and(|id| id <= 0) {
        v.push("image_id", "min_value", MSG_NEWS_IMAGE_ID);
    }

    v
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn valid() -> NewsFields<'static> {
        NewsFields {
            title: "Відкриття меморіалу",
            text: "Text",
            url: "memorial-opening-2026",
            creation_date: Some(Utc::now()),
            image_id: Some(4),
        }
    }

    fn messages(v: Violations) -> Vec<String> {
        v.into_vec().into_iter().map(|f| f.message).collect()
    }

    #[test]
    fn valid_news_passes() {
        assert!(validate_news_fields(&valid()).is_empty());
    }

    #[test]
    fn title_bounds() {
        let mut f = valid();
        f.title = "A";
        assert_eq!(messages(validate_news_fields(&f)), vec![MSG_NEWS_TITLE_SHORT]);

        let long = "A".repeat(151);
        f.title = &long;
        assert_eq!(messages(validate_news_fields(&f)), vec![MSG_NEWS_TITLE_LENGTH]);

        f.title = "";
        assert_eq!(messages(validate_news_fields(&f)), vec![MSG_NEWS_TITLE_REQUIRED]);
    }

    #[test]
    fn url_format() {
        let mut f = valid();
        f.url = "Not a slug";
        assert_eq!(messages(validate_news_fields(&f)), vec![MSG_NEWS_URL_FORMAT]);
        f.url = "trailing-";
        assert_eq!(messages(validate_news_fields(&f)), vec![MSG_NEWS_URL_FORMAT]);
    }

    #[test]
    fn missing_date_and_bad_image_id() {
        let mut f = valid();
        f.creation_date = None;
        f.image_id = Some(0);
        assert_eq!(
            messages(validate_news_fields(&f)),
            vec![MSG_NEWS_DATE_REQUIRED, MSG_NEWS_IMAGE_ID]
        );
    }

    #[test]
    fn absent_image_id_is_allowed() {
        let mut f = valid();
        f.image_id = None;
        assert!(validate_news_fields(&f).is_empty());
    }
}
