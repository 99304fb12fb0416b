//! Accessor function generation.
//!
//! Every attribute becomes a pair of Kotlin extension functions on
//! `Tag<T>`: one taking a plain value and one taking a `Flow` of values.
//! With the special shape, the generated bodies look like this:
//!
//! ```kotlin
//! fun Tag<HTMLInputElement>.checked(value: Boolean, trueValue: String = "") {
//!     domNode.checked = value
//!     domNode.defaultChecked = value
//!     if (value) domNode.setAttribute("checked", trueValue)
//!     else domNode.removeAttribute("checked")
//! }
//!
//! fun Tag<HTMLInputElement>.checked(value: Flow<Boolean>, trueValue: String = "") {
//!     mountSimple(job, value) { v -> checked(v, trueValue) }
//! }
//! ```

use super::shape::{AccessorShape, ShapePolicy};
use tagattr_schema::ir::ResolvedTag;
use tagattr_schema::types::{Attribute, AttributeKind};

/// Generator for the accessor functions of one tag.
pub struct AccessorGenerator<'a> {
    policy: &'a ShapePolicy,
}

impl<'a> AccessorGenerator<'a> {
    /// Creates a new accessor generator.
    #[must_use]
    pub fn new(policy: &'a ShapePolicy) -> Self {
        Self { policy }
    }

    /// Generates the section for a tag: a header comment, then every attribute.
    ///
    /// Tags without attributes produce an empty string.
    #[must_use]
    pub fn generate_tag(&self, tag: &ResolvedTag) -> String {
        let mut output = String::new();
        if !tag.has_attributes() {
            return output;
        }

        output.push('\n');
        output.push_str("/*\n");
        output.push_str(&format!(" * {} attributes\n", tag.name));
        output.push_str(" */\n");

        for attr in &tag.attributes {
            output.push_str(&self.generate_attribute(&tag.name, attr));
        }

        output
    }

    /// Generates the text for one attribute of `tag`.
    #[must_use]
    pub fn generate_attribute(&self, tag: &str, attr: &Attribute) -> String {
        let shape = self.policy.shape(tag, &attr.name);
        match (&attr.kind, shape) {
            (AttributeKind::Comment, _) => format!("{}\n", attr.name),
            (AttributeKind::Boolean, AccessorShape::Default) => boolean_accessors(tag, attr),
            (AttributeKind::Boolean, AccessorShape::SpecialDomBinding) => {
                special_boolean_accessors(tag, attr)
            }
            (AttributeKind::Plain(_), AccessorShape::Default) => accessors(tag, attr),
            (AttributeKind::Plain(_), AccessorShape::SpecialDomBinding) => {
                special_accessors(tag, attr)
            }
        }
    }
}

/// Returns the `default*` property name mirroring `name`.
fn default_property(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => format!("default{}{}", first.to_uppercase(), chars.as_str()),
        None => "default".to_string(),
    }
}

fn accessors(tag: &str, attr: &Attribute) -> String {
    let mut output = String::new();
    let (name, kind, html) = (&attr.name, attr.source_type(), &attr.display_name);

    output.push_str(&format!(
        "fun Tag<{tag}>.{name}(value: {kind}) = attr(\"{html}\", value)\n"
    ));
    output.push_str(&format!(
        "fun Tag<{tag}>.{name}(value: Flow<{kind}>) = attr(\"{html}\", value)\n"
    ));
    output.push('\n');

    output
}

fn boolean_accessors(tag: &str, attr: &Attribute) -> String {
    let mut output = String::new();
    let (name, kind, html) = (&attr.name, attr.source_type(), &attr.display_name);

    output.push_str(&format!(
        "fun Tag<{tag}>.{name}(value: {kind}, trueValue: String = \"\") = attr(\"{html}\", value, trueValue)\n"
    ));
    output.push_str(&format!(
        "fun Tag<{tag}>.{name}(value: Flow<{kind}>, trueValue: String = \"\") = attr(\"{html}\", value, trueValue)\n"
    ));
    output.push('\n');

    output
}

fn special_accessors(tag: &str, attr: &Attribute) -> String {
    let mut output = String::new();
    let (name, kind, html) = (&attr.name, attr.source_type(), &attr.display_name);

    output.push_str(&format!("fun Tag<{tag}>.{name}(value: {kind}) {{\n"));
    output.push_str(&format!("    domNode.{name} = value\n"));
    output.push_str(&format!("    domNode.{} = value\n", default_property(name)));
    output.push_str(&format!(
        "    domNode.setAttribute(\"{html}\", {})\n",
        attr.value_as_string()
    ));
    output.push_str("}\n\n");

    output.push_str(&format!("fun Tag<{tag}>.{name}(value: Flow<{kind}>) {{\n"));
    output.push_str(&format!("    mountSimple(job, value) {{ v -> {name}(v) }}\n"));
    output.push_str("}\n\n");

    output
}

fn special_boolean_accessors(tag: &str, attr: &Attribute) -> String {
    let mut output = String::new();
    let (name, kind, html) = (&attr.name, attr.source_type(), &attr.display_name);

    output.push_str(&format!(
        "fun Tag<{tag}>.{name}(value: {kind}, trueValue: String = \"\") {{\n"
    ));
    output.push_str(&format!("    domNode.{name} = value\n"));
    output.push_str(&format!("    domNode.{} = value\n", default_property(name)));
    output.push_str(&format!(
        "    if (value) domNode.setAttribute(\"{html}\", trueValue)\n"
    ));
    output.push_str(&format!("    else domNode.removeAttribute(\"{html}\")\n"));
    output.push_str("}\n\n");

    output.push_str(&format!(
        "fun Tag<{tag}>.{name}(value: Flow<{kind}>, trueValue: String = \"\") {{\n"
    ));
    output.push_str(&format!(
        "    mountSimple(job, value) {{ v -> {name}(v, trueValue) }}\n"
    ));
    output.push_str("}\n\n");

    output
}
