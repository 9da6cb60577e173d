//! Streetcode enums, limits and pure field checks.
//!
//! Type and status are stored as SMALLINT ids; each enum variant's
//! discriminant is the value written to the database.

use serde::{Deserialize, Serialize};

/// Id type matching SMALLINT columns in the database.
pub type LookupId = i16;

macro_rules! define_lookup_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Return the database id.
            pub fn id(self) -> LookupId {
                self as LookupId
            }

            /// Look up a variant by its database id.
            pub fn from_id(id: LookupId) -> Option<Self> {
                match id {
                    $( $val => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl From<$name> for LookupId {
            fn from(value: $name) -> Self {
                value as LookupId
            }
        }
    };
}

define_lookup_enum! {
    /// Whether a streetcode describes a person or an event.
    StreetcodeType {
        Person = 1,
        Event = 2,
    }
}

define_lookup_enum! {
    /// Streetcode publication status. Only `Published` entries are searchable.
    StreetcodeStatus {
        Draft = 1,
        Published = 2,
        Deleted = 3,
    }
}

impl StreetcodeType {
    /// Anything that is not an event row is treated as a person.
    pub fn from_id_or_person(id: LookupId) -> Self {
        Self::from_id(id).unwrap_or(Self::Person)
    }
}

// ---------------------------------------------------------------------------
// Image role markers
// ---------------------------------------------------------------------------

/// Role of an image within a streetcode, carried as a decimal string in the
/// image detail's `alt` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageAssignment {
    Animation = 0,
    BlackAndWhite = 1,
    RelatedFigure = 2,
}

impl ImageAssignment {
    pub fn marker(self) -> &'static str {
        match self {
            Self::Animation => "0",
            Self::BlackAndWhite => "1",
            Self::RelatedFigure => "2",
        }
    }

    /// Parse an `alt` value. Anything other than an exact marker is a plain
    /// description and has no role.
    pub fn from_marker(alt: &str) -> Option<Self> {
        match alt {
            "0" => Some(Self::Animation),
            "1" => Some(Self::BlackAndWhite),
            "2" => Some(Self::RelatedFigure),
            _ => None,
        }
    }
}

/// Count how many of the given `alt` values carry the `role` marker.
pub fn count_assignments<'a>(
    alts: impl IntoIterator<Item = Option<&'a str>>,
    role: ImageAssignment,
) -> usize {
    alts.into_iter()
        .filter(|alt| alt.and_then(ImageAssignment::from_marker) == Some(role))
        .count()
}

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

pub const MIN_INDEX: i32 = 1;
pub const MAX_INDEX: i32 = 9999;

pub const MAX_NAME_CHARS: usize = 50;
pub const MAX_TITLE_CHARS: usize = 100;
pub const MAX_ALIAS_CHARS: usize = 33;
pub const MAX_URL_CHARS: usize = 100;
pub const MAX_DATE_STRING_CHARS: usize = 100;

/// Teaser limit when the teaser is a single paragraph.
pub const MAX_TEASER_CHARS: usize = 520;
/// Teaser limit when the teaser contains a line break. Line breaks are not
/// counted against it.
pub const MAX_TEASER_CHARS_WITH_NEWLINE: usize = 455;

pub fn index_in_range(index: i32) -> bool {
    (MIN_INDEX..=MAX_INDEX).contains(&index)
}

/// Check a teaser against the length limit that applies to its shape.
pub fn teaser_within_limit(teaser: &str) -> bool {
    if teaser.contains('\n') {
        teaser.chars().filter(|c| *c != '\n').count() <= MAX_TEASER_CHARS_WITH_NEWLINE
    } else {
        teaser.chars().count() <= MAX_TEASER_CHARS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_ids_round_trip() {
        assert_eq!(StreetcodeType::from_id(StreetcodeType::Event.id()), Some(StreetcodeType::Event));
        assert_eq!(StreetcodeType::from_id(9), None);
        assert_eq!(StreetcodeType::from_id_or_person(9), StreetcodeType::Person);
    }

    #[test]
    fn status_ids_match_seed_order() {
        assert_eq!(StreetcodeStatus::Draft.id(), 1);
        assert_eq!(LookupId::from(StreetcodeStatus::Published), 2);
        assert_eq!(StreetcodeStatus::from_id(3), Some(StreetcodeStatus::Deleted));
    }

    #[test]
    fn markers_parse_exactly() {
        assert_eq!(ImageAssignment::from_marker("1"), Some(ImageAssignment::BlackAndWhite));
        assert_eq!(ImageAssignment::from_marker(" 1"), None);
        assert_eq!(ImageAssignment::from_marker("portrait"), None);
        assert_eq!(ImageAssignment::RelatedFigure.marker(), "2");
    }

    #[test]
    fn count_assignments_ignores_missing_alt() {
        let alts = [Some("1"), None, Some("0"), Some("1")];
        assert_eq!(count_assignments(alts, ImageAssignment::BlackAndWhite), 2);
        assert_eq!(count_assignments(alts, ImageAssignment::Animation), 1);
        assert_eq!(count_assignments(alts, ImageAssignment::RelatedFigure), 0);
    }

    #[test]
    fn index_bounds() {
        assert!(!index_in_range(0));
        assert!(index_in_range(1));
        assert!(index_in_range(9999));
        assert!(!index_in_range(10000));
    }

    #[test]
    fn teaser_limit_without_newline() {
        assert!(teaser_within_limit(&"A".repeat(520)));
        assert!(!teaser_within_limit(&"A".repeat(521)));
    }

    #[test]
    fn teaser_limit_with_newline() {
        assert!(teaser_within_limit(&format!("{}\n", "A".repeat(455))));
        assert!(!teaser_within_limit(&format!("{}\nB", "A".repeat(455))));
        assert!(teaser_within_limit(&format!("{}\n{}", "A".repeat(200), "B".repeat(255))));
    }

    #[test]
    fn teaser_limit_counts_characters() {
        assert!(teaser_within_limit(&"ї".repeat(520)));
    }
}
