//! Line-level patterns of the declaration dialect.
//!
//! Recognition is deliberately shallow: each function inspects a single
//! line and never looks at its neighbours.

/// Keywords preceding a declared type name.
const TYPE_KEYWORDS: &[&str] = &["class ", "interface "];

/// Keyword introducing a property declaration.
const PROPERTY_KEYWORD: &str = "var ";

/// Separator between a property name and its type.
const PROPERTY_SEPARATOR: &str = ": ";

/// Marker that terminates a declaration block.
pub const BLOCK_CLOSE: &str = "}";

fn is_type_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '?'
}

fn is_parent_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '<' || c == '>'
}

/// Returns the first non-whitespace token after a `class` or `interface` keyword.
#[must_use]
pub fn type_name(line: &str) -> Option<&str> {
    line.char_indices().find_map(|(i, _)| {
        let rest = &line[i..];
        let after = TYPE_KEYWORDS
            .iter()
            .find_map(|keyword| rest.strip_prefix(keyword))?;
        let end = after.find(char::is_whitespace).unwrap_or(after.len());
        (end > 0).then(|| &after[..end])
    })
}

/// Returns the parent names listed after the first colon, left to right.
#[must_use]
pub fn parent_names(line: &str) -> Vec<String> {
    let Some((_, supertypes)) = line.split_once(':') else {
        return Vec::new();
    };
    supertypes
        .split(|c: char| !is_parent_char(c))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Matches a `var <name>: <type>` property declaration.
///
/// The name extends to the last `": "` that is followed by a type
/// character; the type is the longest run of `[A-Za-z0-9?]` after it.
#[must_use]
pub fn property(line: &str) -> Option<(&str, &str)> {
    line.match_indices(PROPERTY_KEYWORD).find_map(|(start, _)| {
        let rest = &line[start + PROPERTY_KEYWORD.len()..];
        rest.rmatch_indices(PROPERTY_SEPARATOR)
            .filter(|(split, _)| *split > 0)
            .find_map(|(split, _)| {
                let after = &rest[split + PROPERTY_SEPARATOR.len()..];
                let end = after.find(|c: char| !is_type_char(c)).unwrap_or(after.len());
                (end > 0).then(|| (&rest[..split], &after[..end]))
            })
    })
}

/// Returns true if the line terminates a declaration block.
#[must_use]
pub fn is_block_close(line: &str) -> bool {
    line.starts_with(BLOCK_CLOSE)
}

/// How an opener line delimits its body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockShape {
    /// The body continues on following lines.
    Open,
    /// `{` and `}` both appear on the opener line.
    Inline,
}

impl BlockShape {
    /// Classifies an opener line.
    #[must_use]
    pub fn of(opener: &str) -> Self {
        match opener.find('{') {
            Some(open) if opener[open..].trim_end().ends_with('}') => Self::Inline,
            _ => Self::Open,
        }
    }
}
