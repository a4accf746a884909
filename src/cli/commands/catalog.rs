//! arec catalog - List catalog assessments

use clap::Args;
use tracing::debug;

use crate::api::ApiRecommendation;
use crate::app::AppContext;
use crate::catalog::Assessment;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json, emit_jsonl};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Only assessments whose type contains this text (case-insensitive)
    #[arg(long)]
    pub test_type: Option<String>,
}

pub fn run(ctx: &AppContext, args: &CatalogArgs) -> Result<()> {
    let entries = filter_by_type(ctx.catalog.entries(), args.test_type.as_deref());
    debug!(target: "catalog", count = entries.len(), filter = ?args.test_type, "listing catalog");

    match ctx.output_format {
        OutputFormat::Human => {
            let mut layout = HumanLayout::new();
            layout.title(&format!("Catalog ({} assessments)", entries.len()));
            for entry in &entries {
                layout.bullet(&format!(
                    "{} [{}] {}",
                    entry.display_name(),
                    entry.test_type,
                    entry.duration
                ));
            }
            emit_human(layout);
            Ok(())
        }
        OutputFormat::Json => {
            let items: Vec<ApiRecommendation> =
                entries.iter().copied().map(ApiRecommendation::from).collect();
            emit_json(&serde_json::json!({
                "status": "ok",
                "count": items.len(),
                "assessments": items,
            }))
        }
        OutputFormat::Jsonl => emit_jsonl(&entries),
        OutputFormat::Plain => {
            for entry in &entries {
                println!("{}\t{}\t{}", entry.name, entry.test_type, entry.duration);
            }
            Ok(())
        }
    }
}

fn filter_by_type<'a>(entries: &'a [Assessment], test_type: Option<&str>) -> Vec<&'a Assessment> {
    let needle = test_type.map(str::to_lowercase);
    entries
        .iter()
        .filter(|entry| {
            needle
                .as_deref()
                .is_none_or(|needle| entry.test_type.to_lowercase().contains(needle))
        })
        .collect()
}
