//! arec evaluate - Recall@K, MAP@K and Precision@K over the labeled query set

use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json, emit_jsonl, robot_ok};
use crate::error::Result;
use crate::evaluation::{EvaluationResult, Evaluator};

#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Cut-off rank (defaults to evaluation.k)
    #[arg(long, short)]
    pub k: Option<usize>,

    /// List length requested per query (defaults to evaluation.max_results)
    #[arg(long)]
    pub max_results: Option<usize>,

    /// Labeled query JSON file
    #[arg(long)]
    pub queries: Option<PathBuf>,

    /// Print metrics for every query
    #[arg(long)]
    pub per_query: bool,
}

pub fn run(ctx: &AppContext, args: &EvaluateArgs) -> Result<()> {
    let queries = ctx.load_queries(args.queries.as_deref())?;
    let dangling = queries.dangling_labels(&ctx.catalog);

    let k = args.k.unwrap_or(ctx.config.evaluation.k);
    let max_results = args.max_results.unwrap_or(ctx.config.evaluation.max_results);
    debug!(target: "evaluate", k, max_results, queries = queries.len(), "starting evaluation");

    let evaluator = Evaluator::new(ctx.engine(), &queries, max_results);
    let result = evaluator.evaluate(k, &ctx.config.providers);

    match ctx.output_format {
        OutputFormat::Human => {
            emit_human(human_layout(&result, &dangling, args.per_query));
            Ok(())
        }
        OutputFormat::Json => {
            let warnings = dangling
                .iter()
                .map(|name| format!("labeled assessment not in catalog: {name}"))
                .collect();
            emit_json(&robot_ok(&result).with_warnings(warnings))
        }
        OutputFormat::Jsonl => emit_jsonl(&result.queries),
        OutputFormat::Plain => {
            println!(
                "{}\t{:.4}\t{:.4}\t{:.4}\t{}",
                result.k,
                result.mean_recall_at_k,
                result.map_at_k,
                result.mean_precision_at_k,
                result.total_queries
            );
            Ok(())
        }
    }
}

fn human_layout(result: &EvaluationResult, dangling: &[String], per_query: bool) -> HumanLayout {
    let k = result.k;
    let mut layout = HumanLayout::new();
    layout.title("Evaluation");
    layout
        .kv("Queries", &result.total_queries.to_string())
        .kv(&format!("Mean Recall@{k}"), &format!("{:.4}", result.mean_recall_at_k))
        .kv(&format!("MAP@{k}"), &format!("{:.4}", result.map_at_k))
        .kv(
            &format!("Mean Precision@{k}"),
            &format!("{:.4}", result.mean_precision_at_k),
        );

    if !dangling.is_empty() {
        layout.blank().section("Labels missing from catalog");
        for name in dangling {
            layout.bullet(name);
        }
    }

    if per_query {
        for (index, query) in result.queries.iter().enumerate() {
            layout.blank().section(&format!("Query {}", index + 1));
            layout
                .kv("Text", &truncate(&query.query, 80))
                .kv("Source", query.source.display_name())
                .kv("Hits", &format!("{}/{}", query.hits, query.relevant))
                .kv(&format!("Recall@{k}"), &format!("{:.4}", query.recall_at_k))
                .kv(&format!("AP@{k}"), &format!("{:.4}", query.average_precision_at_k))
                .kv(&format!("Precision@{k}"), &format!("{:.4}", query.precision_at_k));
            for name in &query.top_k {
                layout.bullet(name);
            }
        }
    }
    layout
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{head}...")
}
