//! Filename parsing for the `NN-name` convention.
//!
//! Discovered artwork files carry their ordering number in the filename:
//! `gif/03-flower-of-life.gif` is GIF number 3 with file stem
//! `flower-of-life`. The same stem shape is used by the asset paths the
//! gallery links to (`{id}-{file}.gif`, `{n}-{file}.pdf`), so parsing here is
//! the inverse of [`GifItem::asset_path`](crate::types::GifItem::asset_path).
//!
//! ## Display Titles
//!
//! Dashes in the name portion become spaces, and [`title_case`] capitalizes
//! each word for card headings:
//! - `03-flower-of-life` → "flower of life" → "Flower Of Life"
//! - `gen_gifs` → "gen_gifs" (underscores are kept)

/// Result of parsing a numbered entry name like `03-flower-of-life`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedName {
    /// Number prefix if present (`3` from `03-flower-of-life`).
    pub number: Option<u32>,
    /// Raw name part after `NN-`, dashes preserved. Empty if number-only.
    /// For unnumbered entries, this is the full input.
    pub name: String,
    /// Name with dashes converted to spaces.
    pub display_title: String,
}

/// Parse an entry name following the `NN-name` convention.
///
/// - `"03-flower-of-life"` → number=Some(3), name="flower-of-life", display_title="flower of life"
/// - `"12"` → number=Some(12), name="", display_title=""
/// - `"koch-snowflake"` → number=None, name="koch-snowflake", display_title="koch snowflake"
pub fn parse_entry_name(name: &str) -> ParsedName {
    if let Some((prefix, rest)) = name.split_once('-') {
        if let Ok(num) = prefix.parse::<u32>() {
            return ParsedName {
                number: Some(num),
                name: rest.to_string(),
                display_title: rest.replace('-', " "),
            };
        }
    }
    if let Ok(num) = name.parse::<u32>() {
        return ParsedName {
            number: Some(num),
            name: String::new(),
            display_title: String::new(),
        };
    }
    ParsedName {
        number: None,
        name: name.to_string(),
        display_title: name.replace('-', " "),
    }
}

/// Uppercase the first letter of every space-separated word.
pub fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_gif_stem() {
        let p = parse_entry_name("03-flower-of-life");
        assert_eq!(p.number, Some(3));
        assert_eq!(p.name, "flower-of-life");
        assert_eq!(p.display_title, "flower of life");
    }

    #[test]
    fn leading_zeros_are_dropped_from_number() {
        let p = parse_entry_name("007-metatron");
        assert_eq!(p.number, Some(7));
        assert_eq!(p.name, "metatron");
    }

    #[test]
    fn number_only() {
        let p = parse_entry_name("12");
        assert_eq!(p.number, Some(12));
        assert_eq!(p.name, "");
        assert_eq!(p.display_title, "");
    }

    #[test]
    fn number_with_trailing_dash() {
        let p = parse_entry_name("12-");
        assert_eq!(p.number, Some(12));
        assert_eq!(p.name, "");
    }

    #[test]
    fn unnumbered_keeps_whole_stem() {
        let p = parse_entry_name("koch-snowflake");
        assert_eq!(p.number, None);
        assert_eq!(p.name, "koch-snowflake");
        assert_eq!(p.display_title, "koch snowflake");
    }

    #[test]
    fn underscores_survive() {
        let p = parse_entry_name("gen_gifs");
        assert_eq!(p.number, None);
        assert_eq!(p.display_title, "gen_gifs");
    }

    #[test]
    fn title_case_capitalizes_words() {
        assert_eq!(title_case("flower of life"), "Flower Of Life");
        assert_eq!(title_case("seed"), "Seed");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn title_case_keeps_double_spaces() {
        assert_eq!(title_case("a  b"), "A  B");
    }
}
