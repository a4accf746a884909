//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;

pub mod catalog;
pub mod config;
pub mod evaluate;
pub mod explain;
pub mod recommend;

use crate::app::AppContext;
use crate::error::Result;

pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Recommend(args) => recommend::run(ctx, args),
        Commands::Evaluate(args) => evaluate::run(ctx, args),
        Commands::Explain(args) => explain::run(ctx, args),
        Commands::Catalog(args) => catalog::run(ctx, args),
        Commands::Config(args) => config::run(ctx, args),
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recommend assessments for a query or job-posting URL
    Recommend(recommend::RecommendArgs),

    /// Score the ranking against the labeled query set
    Evaluate(evaluate::EvaluateArgs),

    /// Show how the heuristic scorer arrived at its ranking
    Explain(explain::ExplainArgs),

    /// List catalog assessments
    Catalog(catalog::CatalogArgs),

    /// Show the effective configuration
    Config(config::ConfigArgs),
}
