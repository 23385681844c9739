//! Mapping between display names and their URL/filesystem-safe forms.
//!
//! Image stems use `_` for spaces and the literal token `%27` for apostrophes.
//! Detail links swap spaces for `_` and then percent-encode the segment,
//! which yields the same `%27` for apostrophes.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

const APOSTROPHE_TOKEN: &str = "%27";

/// Bytes that cannot appear raw in a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'\'')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Display name for an image file stem, e.g. `Hunter%27s_Bow` -> `Hunter's Bow`
pub fn display_name_from_stem(stem: &str) -> String {
    stem.replace('_', " ").replace(APOSTROPHE_TOKEN, "'")
}

/// Display name for an already percent-decoded `/weapon/<name>` segment
pub fn display_name_from_slug(decoded: &str) -> String {
    decoded.replace('_', " ")
}

/// Percent-encoded URL segment for a display name. Decoding it and passing
/// the result to [`display_name_from_slug`] gives the name back.
pub fn slug_from_display_name(name: &str) -> String {
    utf8_percent_encode(&name.replace(' ', "_"), SEGMENT).to_string()
}

/// Path of the detail page for a display name
pub fn detail_path(name: &str) -> String {
    format!("/weapon/{}", slug_from_display_name(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_from_stem() {
        assert_eq!(display_name_from_stem("Fire_Sword"), "Fire Sword");
        assert_eq!(display_name_from_stem("Hunter%27s_Bow"), "Hunter's Bow");
        assert_eq!(display_name_from_stem("Staff"), "Staff");
    }

    #[test]
    fn test_slug_round_trip() {
        let slug = slug_from_display_name("Hunter's Long Bow");
        assert_eq!(slug, "Hunter%27s_Long_Bow");
        assert_eq!(display_name_from_stem(&slug), "Hunter's Long Bow");
    }

    #[test]
    fn test_reserved_characters_are_encoded() {
        assert_eq!(slug_from_display_name("Blade #2"), "Blade_%232");
        assert_eq!(slug_from_display_name("Why? Sword"), "Why%3F_Sword");
        assert_eq!(slug_from_display_name("Half/Half"), "Half%2FHalf");
        assert_eq!(slug_from_display_name("100% Axe"), "100%25_Axe");
        assert_eq!(detail_path("Blade #2"), "/weapon/Blade_%232");
    }

    #[test]
    fn test_decoded_slug() {
        assert_eq!(display_name_from_slug("Nonexistent_Sword"), "Nonexistent Sword");
        assert_eq!(display_name_from_slug("Hunter's_Bow"), "Hunter's Bow");
    }
}
