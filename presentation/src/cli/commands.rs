//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for leetbud
#[derive(Parser, Debug)]
#[command(name = "leetbud")]
#[command(author, version, about = "Terminal study buddy for coding-practice problems")]
#[command(long_about = r#"
LeetBud looks up a practice problem by number or name and opens a tutoring
conversation about it. The assistant guides you with hints and questions
instead of handing over a full solution.

The API key is read from OPENAI_API_KEY (or the variable named by
providers.openai.api_key_env).

Configuration files are loaded from (in priority order):
1. LEETBUD_* environment variables (e.g. LEETBUD_SESSION__MAX_HISTORY=6)
2. --config <path>     Explicit config file
3. ./leetbud.toml      Project-level config
4. ~/.config/leetbud/config.toml   Global config

Example:
  leetbud 1
  leetbud "two sum"
  leetbud --model gpt-4o --max-history 6
"#)]
pub struct Cli {
    /// Problem number or name (prompted for when omitted)
    pub query: Option<String>,

    /// Chat model to use
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Messages kept in context besides the tutoring instruction
    #[arg(long, value_name = "N")]
    pub max_history: Option<usize>,

    /// Width of the reply box in columns
    #[arg(long, value_name = "COLUMNS")]
    pub width: Option<usize>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
