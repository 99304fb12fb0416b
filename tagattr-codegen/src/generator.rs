//! Top-level generator and its builder.

use crate::error::CodegenError;
use crate::kotlin::{AccessorGenerator, ShapePolicy};
use tagattr_schema::config::{OpenerPolicy, SchemaConfig};
use tagattr_schema::ir::{ResolvedTag, TagIr};

/// Banner lines written at the top of every generated file.
pub const DEFAULT_BANNER: &[&str] = &[
    "Generated by tagattr. Do not edit the generated section by hand.",
    "Pay attention to local modifications before pasting an updated output here!",
    "Add manual extensions above this section (like the SVG attributes).",
];

/// Builder for configuring and creating a [`Generator`].
pub struct GeneratorBuilder {
    schema: SchemaConfig,
    policy: ShapePolicy,
    banner: Vec<String>,
}

impl GeneratorBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            schema: SchemaConfig::default(),
            policy: ShapePolicy::default(),
            banner: DEFAULT_BANNER.iter().map(|line| line.to_string()).collect(),
        }
    }

    /// Sets the root marker type.
    #[must_use]
    pub fn root_type(mut self, root_type: impl Into<String>) -> Self {
        self.schema.root_type = root_type.into();
        self
    }

    /// Sets the opener recognition policy.
    #[must_use]
    pub fn openers(mut self, openers: OpenerPolicy) -> Self {
        self.schema.openers = openers;
        self
    }

    /// Replaces the shape policy.
    #[must_use]
    pub fn shape_policy(mut self, policy: ShapePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Adds a `(tag, attribute)` pair to the special shape allow-list.
    #[must_use]
    pub fn special_attribute(mut self, tag: impl Into<String>, attribute: impl Into<String>) -> Self {
        self.policy.insert(tag, attribute);
        self
    }

    /// Replaces the banner lines.
    #[must_use]
    pub fn banner<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.banner = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Builds the generator.
    #[must_use]
    pub fn build(self) -> Generator {
        Generator {
            schema: self.schema,
            policy: self.policy,
            banner: self.banner,
        }
    }
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Turns a declaration listing into Kotlin accessor source.
#[derive(Debug, Clone)]
pub struct Generator {
    schema: SchemaConfig,
    policy: ShapePolicy,
    banner: Vec<String>,
}

impl Generator {
    /// Creates a generator with default settings.
    #[must_use]
    pub fn new() -> Self {
        GeneratorBuilder::new().build()
    }

    /// Returns a builder.
    #[must_use]
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }

    /// Returns the schema settings.
    #[must_use]
    pub fn schema_config(&self) -> &SchemaConfig {
        &self.schema
    }

    /// Resolves a listing and generates the accessor source.
    ///
    /// # Errors
    /// Returns `CodegenError` if extraction or resolution fails.
    pub fn generate(&self, input: &str) -> Result<String, CodegenError> {
        let ir = TagIr::from_listing(input, &self.schema)?;
        Ok(self.emit(&ir.tags))
    }

    /// Generates the accessor source for already resolved tags.
    #[must_use]
    pub fn emit(&self, tags: &[ResolvedTag]) -> String {
        let mut output = self.generate_banner();
        let accessors = AccessorGenerator::new(&self.policy);

        let mut sections = 0;
        let mut pairs = 0;
        for tag in tags.iter().filter(|tag| tag.has_attributes()) {
            output.push_str(&accessors.generate_tag(tag));
            sections += 1;
            pairs += tag.attributes.iter().filter(|attr| !attr.is_comment()).count();
        }

        tracing::info!("Generated {} attribute sections with {} accessor pairs", sections, pairs);
        output
    }

    fn generate_banner(&self) -> String {
        let mut output = String::from("/*\n");
        for line in &self.banner {
            output.push_str(&format!(" * {}\n", line));
        }
        output.push_str(" */\n");
        output
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}
