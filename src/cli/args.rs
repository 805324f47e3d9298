//! CLI argument parsing

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "dockview")]
#[command(author, version, about = "Filtered, templated JSON views of container state", long_about = None)]
pub struct Args {
    /// Comma-separated filter tokens, each a key=value query string
    #[arg(long, value_name = "SPEC")]
    pub filters: Option<String>,

    /// One filter token to pass to the engine. Can be repeated
    #[arg(long = "filter", value_name = "TOKEN")]
    pub filter: Vec<String>,

    /// Template applied to each container record. Can be repeated
    #[arg(long = "template", value_name = "TEMPLATE")]
    pub template: Vec<String>,

    /// Progress diagnostics on standard error
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// All filter tokens in order: the `--filters` segments first, then
    /// each `--filter` occurrence.
    pub fn filter_tokens(&self) -> Vec<String> {
        let mut tokens = Vec::new();

        if let Some(spec) = &self.filters {
            tokens.extend(spec.split(',').map(str::to_string));
        }
        tokens.extend(self.filter.iter().cloned());

        tokens
    }
}
