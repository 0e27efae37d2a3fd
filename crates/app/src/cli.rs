use std::path::PathBuf;

use clap::Parser;
use services::ConfigOverrides;

/// Desktop study planner backed by the LearnFlow generation service.
#[derive(Debug, Parser)]
#[command(name = "learnflow", version, about)]
pub struct Args {
    /// Base URL of the generation backend
    #[arg(long, env = "LEARNFLOW_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Flashcard presentation: modal (A) or inline (B)
    #[arg(long, env = "LEARNFLOW_VARIANT", value_name = "NAME")]
    pub variant: Option<String>,

    /// Directory exported decks are saved into
    #[arg(long, env = "LEARNFLOW_DOWNLOAD_DIR", value_name = "DIR")]
    pub download_dir: Option<PathBuf>,

    /// Initial window width in logical pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Initial window height in logical pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Log filter directive, e.g. `debug` or `services=debug`
    #[arg(long, env = "LEARNFLOW_LOG", value_name = "FILTER")]
    pub log: Option<String>,
}

impl Args {
    #[must_use]
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            api_base_url: self.api_url.clone(),
            variant: self.variant.clone(),
            download_dir: self.download_dir.clone(),
            window_width: self.width,
            window_height: self.height,
        }
    }
}
