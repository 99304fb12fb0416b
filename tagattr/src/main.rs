use anyhow::Result;
use clap::Parser;
use tagattr::cli::{Args, run};

fn main() -> Result<()> {
    // Logs go to stderr so the generated code can be piped
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    run(&args)
}
