use std::path::PathBuf;

use tracing::debug;

use crate::catalog::Catalog;
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::Result;
use crate::queries::QuerySet;
use crate::ranking::RankingEngine;

/// Everything a command needs, loaded once per process.
pub struct AppContext {
    pub cwd: PathBuf,
    pub config: Config,
    pub catalog: Catalog,
    pub robot_mode: bool,
    pub output_format: OutputFormat,
    pub verbosity: u8,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let config = Config::load(cli.config.as_deref(), &cwd)?;

        let catalog_path = cli.catalog.clone().or_else(|| config.catalog.path.clone());
        let catalog = Catalog::load_or_builtin(catalog_path.as_deref())?;
        debug!(
            entries = catalog.len(),
            source = catalog_path
                .as_deref()
                .map_or_else(|| "builtin".to_string(), |p| p.display().to_string()),
            "catalog ready"
        );

        Ok(Self {
            cwd,
            config,
            catalog,
            robot_mode: cli.robot,
            output_format: cli.output_format(),
            verbosity: cli.verbose,
        })
    }

    #[must_use]
    pub const fn engine(&self) -> RankingEngine<'_> {
        RankingEngine::new(&self.catalog)
    }

    /// Labeled queries from `override_path`, the configured file, or the
    /// built-in set, in that order.
    pub fn load_queries(&self, override_path: Option<&std::path::Path>) -> Result<QuerySet> {
        let path = override_path.or(self.config.evaluation.queries_path.as_deref());
        QuerySet::load_or_builtin(path)
    }
}
