//! Command-line interface.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tagattr_codegen::Generator;
use tagattr_schema::config::{DEFAULT_ROOT_TYPE, OpenerPolicy};

/// Generates Kotlin attribute accessors from a DOM declaration listing
#[derive(Parser, Debug)]
#[command(name = "tagattr")]
#[command(about = "Generates Kotlin attribute accessors from a DOM declaration listing", long_about = None)]
pub struct Args {
    /// Declaration listing to read
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Root marker type whose descendants get accessors
    #[arg(long, value_name = "NAME", default_value = DEFAULT_ROOT_TYPE)]
    pub root_type: String,

    /// Only open blocks for declarations whose name starts with HTML
    #[arg(long)]
    pub html_only: bool,

    /// Extra Type.attribute pair bound directly to the DOM property
    #[arg(long = "special", value_name = "TYPE.ATTR")]
    pub special: Vec<String>,

    /// Write the generated code here instead of standard output
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Builds the generator described by the arguments.
    ///
    /// # Errors
    /// Returns an error if a `--special` entry is malformed.
    pub fn generator(&self) -> Result<Generator> {
        let mut builder = Generator::builder().root_type(&self.root_type);
        if self.html_only {
            builder = builder.openers(OpenerPolicy::HtmlPrefixed);
        }

        let mut policy = tagattr_codegen::ShapePolicy::default();
        for entry in &self.special {
            policy.insert_qualified(entry)?;
        }

        Ok(builder.shape_policy(policy).build())
    }
}

/// Runs the generator for parsed arguments.
///
/// # Errors
/// Returns an error if reading, generation, or writing fails.
pub fn run(args: &Args) -> Result<()> {
    let generator = args.generator()?;
    let input = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    tracing::info!("Generating accessors from {}", args.input.display());
    let code = generator
        .generate(&input)
        .with_context(|| format!("failed to generate accessors from {}", args.input.display()))?;

    match &args.output {
        Some(path) => {
            let mut file = std::fs::File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            writeln!(file, "{code}")?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{code}")?;
        }
    }

    Ok(())
}
