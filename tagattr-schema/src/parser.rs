//! Declaration listing extractor.
//!
//! This module scans a declaration listing line by line and turns every
//! recognized declaration block into a [`RawTag`]. Lines outside a block
//! are ignored, as are lines inside a block that are not property
//! declarations.

use crate::config::OpenerPolicy;
use crate::error::ParseError;
use crate::patterns::{self, BlockShape};
use crate::types::{Attribute, RawTag};

/// Extracts raw tags from a declaration listing.
///
/// # Arguments
/// * `input` - Full listing text
/// * `openers` - Which lines open a declaration block
///
/// # Returns
/// Raw tags in declaration order.
///
/// # Errors
/// Returns `ParseError` if a block is never closed or an opener has no type name.
pub fn parse_listing(input: &str, openers: OpenerPolicy) -> Result<Vec<RawTag>, ParseError> {
    let lines: Vec<&str> = input.lines().collect();
    extract(&lines, openers)
}

/// Extracts raw tags from a sequence of lines.
///
/// # Errors
/// Returns `ParseError` if a block is never closed or an opener has no type name.
pub fn extract<S: AsRef<str>>(lines: &[S], openers: OpenerPolicy) -> Result<Vec<RawTag>, ParseError> {
    let mut tags = Vec::new();
    let mut index = 0;

    while index < lines.len() {
        let line = lines[index].as_ref();
        if !openers.is_opener(line) {
            index += 1;
            continue;
        }

        let line_number = index + 1;
        let name = patterns::type_name(line)
            .ok_or_else(|| ParseError::missing_name(line_number, line))?;
        let parents = patterns::parent_names(line);

        let (attributes, consumed) = match BlockShape::of(line) {
            BlockShape::Open => scan_block(&lines[index + 1..])
                .ok_or_else(|| ParseError::unterminated(name, line_number))?,
            BlockShape::Inline => (Vec::new(), 0),
        };

        tracing::debug!(
            "Extracted {} at line {} ({} attributes, parents {:?})",
            name,
            line_number,
            attributes.len(),
            parents
        );

        tags.push(RawTag::new(name, attributes, parents));
        index += 1 + consumed;
    }

    Ok(tags)
}

/// Scans the lines following an opener up to the block terminator.
///
/// Returns the attributes found and the number of lines consumed, the
/// terminator included, or `None` if the input ends first.
fn scan_block<S: AsRef<str>>(body: &[S]) -> Option<(Vec<Attribute>, usize)> {
    let mut attributes = Vec::new();

    for (offset, line) in body.iter().enumerate() {
        let line = line.as_ref();
        if patterns::is_block_close(line) {
            return Some((attributes, offset + 1));
        }
        if let Some((name, type_name)) = patterns::property(line) {
            attributes.push(Attribute::from_declaration(name, type_name));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AttributeKind;

    const LISTING: &str = r#"package org.w3c.dom

public external interface HTMLElement {
}

/**
 * Exposes the JavaScript [HTMLInputElement](https://developer.mozilla.org/en/docs/Web/API/HTMLInputElement) to Kotlin
 */
public external abstract class HTMLInputElement : HTMLElement {
    open var value: String
    open var checked: Boolean
    open var className: String
    open var onchange: ((Event) -> dynamic)?
    open var htmlFor: String
    fun select()
}

public external open class Event {
    open val type: String
}
"#;

    #[test]
    fn test_parse_listing() {
        let tags = parse_listing(LISTING, OpenerPolicy::AnyExternal).expect("Failed to parse");

        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].name, "HTMLElement");
        assert!(tags[0].attributes.is_empty());
        assert!(tags[0].parents.is_empty());

        let input = &tags[1];
        assert_eq!(input.name, "HTMLInputElement");
        assert_eq!(input.parents, vec!["HTMLElement"]);
        let names: Vec<&str> = input.attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["value", "checked", "className", "`for`"]);
        assert_eq!(input.attributes[1].kind, AttributeKind::Boolean);
        assert_eq!(input.attributes[3].display_name, "for");
    }

    #[test]
    fn test_extract_is_idempotent() {
        let first = parse_listing(LISTING, OpenerPolicy::AnyExternal).expect("Failed to parse");
        let second = parse_listing(LISTING, OpenerPolicy::AnyExternal).expect("Failed to parse");
        assert_eq!(first, second);
    }

    #[test]
    fn test_inline_block() {
        let lines = [
            "public external interface HTMLElement { }",
            "public external abstract class HTMLDivElement : HTMLElement {",
            "    open var align: String",
            "}",
        ];
        let tags = extract(&lines, OpenerPolicy::AnyExternal).expect("Failed to parse");

        let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["HTMLElement", "HTMLDivElement"]);
        assert_eq!(tags[1].attributes.len(), 1);
    }

    #[test]
    fn test_opener_without_brace_scans_to_terminator() {
        let lines = [
            "public external interface Marker : HTMLElement",
            "    open var align: String",
            "public external abstract class HTMLDivElement : HTMLElement {",
            "    open var title: String",
            "}",
        ];
        let tags = extract(&lines, OpenerPolicy::AnyExternal).expect("Failed to parse");

        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "Marker");
        let names: Vec<&str> = tags[0].attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["align", "title"]);
    }

    #[test]
    fn test_trailing_opener_without_brace_is_unterminated() {
        let lines = [
            "public external interface HTMLElement {",
            "    var lang: String",
            "}",
            "public external interface Trailing : HTMLElement",
        ];
        let result = extract(&lines, OpenerPolicy::AnyExternal);
        assert!(matches!(
            result,
            Err(ParseError::UnterminatedBlock { ref type_name, line: 4 }) if type_name == "Trailing"
        ));
    }

    #[test]
    fn test_indented_brace_does_not_close_block() {
        let lines = [
            "public external interface Outer {",
            "    var first: String",
            "    companion object {",
            "    }",
            "    var second: Int",
            "}",
        ];
        let tags = extract(&lines, OpenerPolicy::AnyExternal).expect("Failed to parse");
        assert_eq!(tags[0].attributes.len(), 2);
    }

    #[test]
    fn test_unterminated_block() {
        let lines = [
            "// header",
            "public external interface HTMLElement {",
            "    var title: String",
        ];
        let result = extract(&lines, OpenerPolicy::AnyExternal);
        assert!(matches!(
            result,
            Err(ParseError::UnterminatedBlock { ref type_name, line: 2 }) if type_name == "HTMLElement"
        ));
    }

    #[test]
    fn test_missing_type_name() {
        let lines = ["public external interface", "}"];
        let result = extract(&lines, OpenerPolicy::AnyExternal);
        assert!(matches!(result, Err(ParseError::MissingTypeName { line: 1, .. })));
    }

    #[test]
    fn test_html_prefixed_policy_skips_other_blocks() {
        let lines = [
            "public external interface GlobalEventHandlers {",
            "    var onabort: String",
            "}",
            "public external abstract class HTMLElement : GlobalEventHandlers {",
            "    var title: String",
            "}",
        ];
        let tags = extract(&lines, OpenerPolicy::HtmlPrefixed).expect("Failed to parse");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "HTMLElement");
        assert_eq!(tags[0].parents, vec!["GlobalEventHandlers"]);
    }
}
