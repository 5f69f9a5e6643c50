use std::path::{Path, PathBuf};

use locator_engine::ResolveOptions;
use semloc_cli::config::AppConfig;
use semloc_cli::output::OutputFormat;

pub struct CliContext {
    config: AppConfig,
    config_path: Option<PathBuf>,
    output: OutputFormat,
}

impl CliContext {
    pub fn new(config: AppConfig, config_path: Option<PathBuf>, output: OutputFormat) -> Self {
        Self {
            config,
            config_path,
            output,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn resolve_options(&self) -> &ResolveOptions {
        &self.config.resolve
    }

    pub fn output(&self) -> OutputFormat {
        self.output
    }
}
