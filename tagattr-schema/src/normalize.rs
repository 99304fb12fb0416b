//! Attribute name and type normalization.
//!
//! Declared property names that collide with keywords of the generated
//! dialect are escaped, and markup names are restored from the escaped
//! forms before lower-casing.

/// Declared names that must be renamed in generated code.
const ESCAPED_NAMES: &[(&str, &str)] = &[("htmlFor", "`for`"), ("_object", "`object`")];

/// Declared names whose markup attribute reads differently.
const DISPLAY_NAMES: &[(&str, &str)] = &[("htmlFor", "for"), ("`as`", "as"), ("_object", "object")];

/// Declared type standing for an untyped value.
const DYNAMIC_TYPE: &str = "dynamic";

/// Type substituted for [`DYNAMIC_TYPE`].
const DEFAULT_TYPE: &str = "String";

fn lookup<'a>(table: &[(&str, &'a str)], key: &str) -> Option<&'a str> {
    table.iter().find(|(from, _)| *from == key).map(|(_, to)| *to)
}

/// Returns the identifier used in generated code for a declared name.
#[must_use]
pub fn attribute_name(raw: &str) -> String {
    lookup(ESCAPED_NAMES, raw).unwrap_or(raw).to_string()
}

/// Returns the lower-cased markup name for a declared name.
#[must_use]
pub fn display_name(raw: &str) -> String {
    lookup(DISPLAY_NAMES, raw).unwrap_or(raw).to_lowercase()
}

/// Returns the declared type with `dynamic` coerced to `String`.
#[must_use]
pub fn declared_type(raw: &str) -> String {
    if raw == DYNAMIC_TYPE {
        DEFAULT_TYPE.to_string()
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("htmlFor", "`for`")]
    #[case("_object", "`object`")]
    #[case("`as`", "`as`")]
    #[case("acceptCharset", "acceptCharset")]
    fn test_attribute_name(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(attribute_name(raw), expected);
    }

    #[rstest]
    #[case("htmlFor", "for")]
    #[case("`as`", "as")]
    #[case("_object", "object")]
    #[case("acceptCharset", "acceptcharset")]
    #[case("playbackRate", "playbackrate")]
    fn test_display_name(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(display_name(raw), expected);
    }

    #[rstest]
    #[case("dynamic", "String")]
    #[case("Boolean", "Boolean")]
    #[case("String?", "String?")]
    #[case("Dynamic", "Dynamic")]
    fn test_declared_type(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(declared_type(raw), expected);
    }
}
