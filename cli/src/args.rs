use clap::Parser;
use filmpath_core::search_config::{DEFAULT_CAST_CAP, DEFAULT_FILM_CAP, DEFAULT_MAX_DEPTH};

#[derive(Parser, Debug, Clone)]
#[command(name = "filmpath")]
#[command(about = "Find the shortest chain of shared films between two people")]
pub struct Args {
    /// Person to start from
    pub from: String,

    /// Person to reach
    pub to: String,

    /// Maximum number of film hops in the connection
    #[arg(short = 'd', long, value_name = "HOPS", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Films fetched per person
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_FILM_CAP)]
    pub film_cap: usize,

    /// Cast members fetched per film
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_CAST_CAP)]
    pub cast_cap: usize,

    /// Pause after every catalog request, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 200)]
    pub delay_ms: u64,

    /// Count depth in person/film levels (two per hop) instead of hops
    #[arg(long)]
    pub legacy_depth: bool,

    /// Match people by catalog id instead of display name
    #[arg(long)]
    pub match_by_id: bool,

    /// Ignore case, accents and extra spaces when comparing names
    #[arg(short = 'n', long)]
    pub normalize_names: bool,

    /// Skip people or films whose lookup fails instead of aborting
    #[arg(long)]
    pub skip_failures: bool,

    /// Cast lookups kept in flight per person. Values above 1 send up to this
    /// many requests at once, ignoring --delay-ms between them
    #[arg(short = 'p', long, value_name = "COUNT", default_value_t = 1)]
    pub prefetch: usize,

    /// Give up after this many seconds
    #[arg(short = 't', long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Hide film URLs from output (URLs shown by default)
    #[arg(short = 'u', long)]
    pub hide_urls: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show search info and statistics
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the path flow
    #[arg(short, long)]
    pub quiet: bool,

    /// Print every traversal step while searching
    #[arg(long)]
    pub trace: bool,

    /// Print the result as JSON
    #[arg(short, long)]
    pub json: bool,
}
