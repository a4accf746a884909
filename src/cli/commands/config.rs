//! arec config - Show the effective configuration

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json, robot_ok};
use crate::config::{Config, mask_secret};
use crate::error::{ArecError, Result};

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Print API keys unmasked
    #[arg(long)]
    pub show_secrets: bool,
}

pub fn run(ctx: &AppContext, args: &ConfigArgs) -> Result<()> {
    let config = if args.show_secrets {
        ctx.config.clone()
    } else {
        masked(&ctx.config)
    };

    match ctx.output_format {
        OutputFormat::Human => {
            emit_human(human_layout(&config));
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Jsonl => emit_json(&robot_ok(&config)),
        OutputFormat::Plain => {
            let toml = toml::to_string_pretty(&config)
                .map_err(|err| ArecError::Config(format!("serialize config: {err}")))?;
            print!("{toml}");
            Ok(())
        }
    }
}

fn masked(config: &Config) -> Config {
    let mut config = config.clone();
    config.providers.gemini.api_key = mask_secret(&config.providers.gemini.api_key);
    config.providers.rag.api_key = mask_secret(&config.providers.rag.api_key);
    config
}

fn human_layout(config: &Config) -> HumanLayout {
    let providers = &config.providers;
    let path_or_builtin = |path: Option<&std::path::Path>| {
        path.map_or_else(|| "(built-in)".to_string(), |p| p.display().to_string())
    };

    let mut layout = HumanLayout::new();
    layout.title("Configuration");
    layout
        .section("Ranking")
        .kv("max_results", &config.ranking.max_results.to_string())
        .blank()
        .section("Providers")
        .kv("timeout", &humantime_duration(providers.timeout))
        .kv("gemini.enabled", &providers.gemini.enabled.to_string())
        .kv("gemini.api_key", &providers.gemini.api_key)
        .kv("gemini.endpoint", providers.gemini.endpoint())
        .kv("gemini.model", &providers.gemini.model)
        .kv("rag.enabled", &providers.rag.enabled.to_string())
        .kv("rag.api_key", &providers.rag.api_key)
        .kv("rag.endpoint", providers.rag.endpoint.as_deref().unwrap_or("-"))
        .blank()
        .section("Evaluation")
        .kv("k", &config.evaluation.k.to_string())
        .kv("max_results", &config.evaluation.max_results.to_string())
        .kv("queries_path", &path_or_builtin(config.evaluation.queries_path.as_deref()))
        .blank()
        .section("Catalog")
        .kv("path", &path_or_builtin(config.catalog.path.as_deref()))
        .blank()
        .section("Fetch")
        .kv("enabled", &config.fetch.enabled.to_string())
        .kv("timeout", &humantime_duration(config.fetch.timeout));
    layout
}

fn humantime_duration(duration: std::time::Duration) -> String {
    humantime_serde::re::humantime::format_duration(duration).to_string()
}
