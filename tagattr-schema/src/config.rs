//! Extraction and resolution settings.

/// Root marker type used when none is configured.
pub const DEFAULT_ROOT_TYPE: &str = "HTMLElement";

/// Line prefixes that open a declaration block.
pub const OPENER_PREFIXES: &[&str] = &["public external abstract class", "public external interface"];

/// Which opener lines start a declaration block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenerPolicy {
    /// Any line starting with one of [`OPENER_PREFIXES`].
    #[default]
    AnyExternal,
    /// Like `AnyExternal`, but the declared name must also start with `HTML`.
    HtmlPrefixed,
}

impl OpenerPolicy {
    /// Returns true if `line` opens a declaration block under this policy.
    #[must_use]
    pub fn is_opener(self, line: &str) -> bool {
        let Some(rest) = OPENER_PREFIXES
            .iter()
            .find_map(|prefix| line.strip_prefix(prefix))
        else {
            return false;
        };
        match self {
            Self::AnyExternal => true,
            Self::HtmlPrefixed => rest.trim_start().starts_with("HTML"),
        }
    }
}

/// Settings shared by the extractor and the hierarchy resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaConfig {
    /// Name of the root marker type.
    pub root_type: String,
    /// Opener recognition policy.
    pub openers: OpenerPolicy,
}

impl SchemaConfig {
    /// Creates a config with the given root marker type.
    #[must_use]
    pub fn with_root(root_type: impl Into<String>) -> Self {
        Self {
            root_type: root_type.into(),
            ..Self::default()
        }
    }
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            root_type: DEFAULT_ROOT_TYPE.to_string(),
            openers: OpenerPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_external_opener() {
        let policy = OpenerPolicy::AnyExternal;
        assert!(policy.is_opener("public external interface Node {"));
        assert!(policy.is_opener("public external abstract class HTMLElement : Element {"));
        assert!(!policy.is_opener("public external open class Event {"));
        assert!(!policy.is_opener("    public external interface Indented {"));
    }

    #[test]
    fn test_html_prefixed_opener() {
        let policy = OpenerPolicy::HtmlPrefixed;
        assert!(policy.is_opener("public external abstract class HTMLAnchorElement : HTMLElement {"));
        assert!(!policy.is_opener("public external interface ElementCSSInlineStyle {"));
    }

    #[test]
    fn test_default_config() {
        let config = SchemaConfig::default();
        assert_eq!(config.root_type, "HTMLElement");
        assert_eq!(config.openers, OpenerPolicy::AnyExternal);
        assert_eq!(SchemaConfig::with_root("SVGElement").root_type, "SVGElement");
    }
}
