use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Build and inspect network-flow filters from the command line
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Console profile (JSON5) with filters, columns and quick filters
    #[arg(short, long, global = true, env = "FLOW_FILTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error or off
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the filterable fields and their backend mapping
    Fields,
    /// Run the validator of a field on a value
    Validate {
        /// Filter id (e.g. "src_port")
        field: String,

        value: String,
    },
    /// Build the backend query from search-bar inputs (e.g. "src_port=443")
    Query {
        #[arg(required = true)]
        filters: Vec<String>,

        /// Match any filter instead of all of them
        #[arg(long)]
        any: bool,

        /// Also match the traffic going the other way
        #[arg(long)]
        bnf: bool,

        /// Print the query without percent-encoding
        #[arg(short, long)]
        decoded: bool,
    },
    /// Show suggestions for a partial search-bar input
    Suggest {
        text: String,

        /// Field a bare value applies to
        #[arg(short, long)]
        field: Option<String>,
    },
    /// List quick filters and the default filter set
    Quick,
    /// Print the URL parameter encoding of search-bar inputs
    Url {
        #[arg(required = true)]
        filters: Vec<String>,
    },
    /// Print the loaded console profile as JSON
    Profile,
}

pub fn cli_parse() -> Cli {
    Cli::parse()
}
