use anyhow::Result;
use config::{Config, File};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::PathBuf;

const APP_NAME: &str = "zoltar";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LogConfig {
    pub level: String, // EnvFilter directive, overridden by RUST_LOG
    pub file: bool,    // write to <data dir>/zoltar.log
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub log: LogConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let path = project_dirs().map(|dirs| dirs.config_dir().join("config.toml"));
        Self::load_from(path)
    }

    fn load_from(path: Option<PathBuf>) -> Result<Self> {
        let defaults = LogConfig::default();

        let mut builder = Config::builder()
            .set_default("log.level", defaults.level)?
            .set_default("log.file", defaults.file)?;

        if let Some(config_path) = path {
            if config_path.exists() {
                builder = builder.add_source(File::from(config_path));
            }
        }

        let cfg = builder.build()?;
        let app_config: AppConfig = cfg.try_deserialize()?;

        Ok(app_config)
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        if !self.log.file {
            return None;
        }
        project_dirs().map(|dirs| dirs.data_local_dir().join("zoltar.log"))
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}
