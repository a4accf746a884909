//! arec explain - Per-rule score breakdown

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json, emit_jsonl};
use crate::error::{ArecError, Result};
use crate::scoring::{self, ScoreBreakdown};

#[derive(Args, Debug)]
pub struct ExplainArgs {
    /// Query to score
    pub query: String,

    /// Number of top candidates to explain
    #[arg(long, short, default_value = "5")]
    pub limit: usize,

    /// Explain a single assessment (suffix and case are ignored)
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
struct Explanation {
    rank: Option<usize>,
    name: String,
    score: i32,
    breakdown: ScoreBreakdown,
}

pub fn run(ctx: &AppContext, args: &ExplainArgs) -> Result<()> {
    let explanations = match &args.name {
        Some(name) => vec![explain_named(ctx, &args.query, name)?],
        None => ctx
            .engine()
            .rank(&args.query, args.limit)
            .iter()
            .enumerate()
            .map(|(index, candidate)| Explanation {
                rank: Some(index + 1),
                name: candidate.assessment.name.clone(),
                score: candidate.score,
                breakdown: candidate.explain(&args.query),
            })
            .collect(),
    };

    match ctx.output_format {
        OutputFormat::Human => {
            emit_human(human_layout(&explanations));
            Ok(())
        }
        OutputFormat::Json => emit_json(&serde_json::json!({
            "query": args.query,
            "count": explanations.len(),
            "explanations": explanations,
        })),
        OutputFormat::Jsonl => emit_jsonl(&explanations),
        OutputFormat::Plain => {
            for item in &explanations {
                println!("{}\t{}", item.score, item.name);
            }
            Ok(())
        }
    }
}

fn explain_named(ctx: &AppContext, query: &str, name: &str) -> Result<Explanation> {
    let assessment = ctx
        .catalog
        .find_loose(name)
        .ok_or_else(|| ArecError::NotFound(format!("assessment not in catalog: {name}")))?;
    let breakdown = scoring::explain(query, assessment);
    let rank = ctx
        .engine()
        .rank(query, ctx.catalog.len())
        .iter()
        .position(|candidate| candidate.assessment.name == assessment.name)
        .map(|index| index + 1);
    Ok(Explanation {
        rank,
        name: assessment.name.clone(),
        score: breakdown.total(),
        breakdown,
    })
}

fn human_layout(explanations: &[Explanation]) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout.title("Score Breakdown");
    for item in explanations {
        let heading = item.rank.map_or_else(
            || item.name.clone(),
            |rank| format!("{rank}. {}", item.name),
        );
        layout.section(&heading).kv("Score", &item.score.to_string());
        let terms = item.breakdown.terms();
        if terms.is_empty() {
            layout.bullet("no rule matched");
        }
        for (label, points) in terms {
            layout.bullet(&format!("{label}: {points:+}"));
        }
        layout.blank();
    }
    layout
}
