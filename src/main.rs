//! Dockview CLI - filtered, templated JSON views of container state

use std::sync::Arc;

use clap::Parser;

use dockview::cli::Args;
use dockview::{compile, engine, parse_tokens, render_all};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> dockview::Result<()> {
    // Configuration errors surface before any engine call.
    let filters = parse_tokens(&args.filter_tokens())?;
    let templates = Arc::new(compile(&args.template)?);

    if args.verbose {
        eprintln!(
            "Applying {} filter value(s) across {} template(s)",
            filters.len(),
            templates.len()
        );
    }

    let docker = engine::connect()?;
    let records = Arc::new(engine::inspect_containers(&docker, filters).await?);

    if args.verbose {
        eprintln!("Inspected {} container(s)", records.len());
    }

    let mut stdout = std::io::stdout().lock();
    render_all(&templates, &records, &mut stdout).await
}
