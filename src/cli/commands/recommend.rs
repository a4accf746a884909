//! arec recommend - Recommend assessments for a query

use clap::Args;
use tracing::debug;

use crate::api::{ApiRecommendation, ApiResponse};
use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json, emit_jsonl};
use crate::config::FetchConfig;
use crate::error::{ArecError, Result};
use crate::query_input::{self, ResolvedQuery};

#[derive(Args, Debug)]
pub struct RecommendArgs {
    /// Free-text query, job description, or job-posting URL
    pub query: String,

    /// Maximum number of assessments (defaults to ranking.max_results)
    #[arg(long, short)]
    pub limit: Option<usize>,

    /// Treat URLs as plain text instead of fetching them
    #[arg(long)]
    pub no_fetch: bool,
}

pub fn run(ctx: &AppContext, args: &RecommendArgs) -> Result<()> {
    if args.query.trim().is_empty() {
        return Err(ArecError::Config("query must not be empty".to_string()));
    }

    let fetch = FetchConfig {
        enabled: ctx.config.fetch.enabled && !args.no_fetch,
        ..ctx.config.fetch.clone()
    };
    let resolved = query_input::resolve(&args.query, &fetch);
    let limit = args.limit.unwrap_or(ctx.config.ranking.max_results);
    debug!(target: "recommend", limit, fetched = resolved.fetched_from.is_some(), "ranking query");

    let recommendation = ctx
        .engine()
        .recommend(&resolved.text, limit, &ctx.config.providers);
    let response = ApiResponse::new(args.query.clone(), &recommendation);

    match ctx.output_format {
        OutputFormat::Human => {
            emit_human(human_layout(&response, &resolved));
            Ok(())
        }
        OutputFormat::Json => emit_json(&response),
        OutputFormat::Jsonl => emit_jsonl(&response.recommendations),
        OutputFormat::Plain => {
            for item in &response.recommendations {
                println!("{}", plain_row(item));
            }
            Ok(())
        }
    }
}

fn human_layout(response: &ApiResponse, resolved: &ResolvedQuery) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout.title("Recommended Assessments");
    layout.kv("Source", &response.source.name);
    if let Some(url) = &resolved.fetched_from {
        layout.kv("Fetched from", url);
    }
    layout.kv("Results", &response.recommendations.len().to_string());
    layout.blank();

    for (rank, item) in response.recommendations.iter().enumerate() {
        layout
            .section(&format!("{}. {}", rank + 1, item.name))
            .kv("Type", &item.test_type)
            .kv("Duration", &item.duration)
            .kv("Remote testing", yes_no(item.remote_testing_support))
            .kv("Adaptive/IRT", yes_no(item.adaptive_irt_support))
            .kv("URL", &item.url)
            .blank();
    }
    layout
}

fn plain_row(item: &ApiRecommendation) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        item.name,
        item.test_type,
        item.duration,
        yes_no(item.remote_testing_support),
        yes_no(item.adaptive_irt_support),
        item.url
    )
}

const fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
