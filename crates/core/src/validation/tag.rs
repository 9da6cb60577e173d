//! Tag title rules, applied to every tag attached on streetcode update.

use super::rules::Violations;

pub const MAX_TAG_TITLE_CHARS: usize = 50;

pub const MSG_TAG_TITLE_REQUIRED: &str = "Title is required.";
pub const MSG_TAG_TITLE_LENGTH: &str = "Title cannot exceed 50 characters.";

pub fn validate_tag_title(title: Option<&str>) -> Violations {
    let mut v = Violations::new();
    if v.required("tags.title", title, MSG_TAG_TITLE_REQUIRED) {
        v.max_chars("tags.title", title, MAX_TAG_TITLE_CHARS, MSG_TAG_TITLE_LENGTH);
    }
    v
}
