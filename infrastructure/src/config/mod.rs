//! Configuration file loading for leetbud
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `LEETBUD_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./leetbud.toml` or `./.leetbud.toml`
//! 4. Global: `$XDG_CONFIG_HOME/leetbud/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileCatalogConfig, FileConfig, FileOpenAiConfig, FileOutputConfig, FileProvidersConfig,
    FileReplConfig, FileSessionConfig, MIN_OUTPUT_WIDTH,
};
pub use loader::ConfigLoader;
