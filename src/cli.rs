use crate::paths::{SearchMode, SelectionStrategy};
use crate::planner::RoutingConfig;
use crate::simulation::SchedulingStrategy;
use clap::{ArgAction, Parser};
use std::num::NonZeroUsize;
use tracing_subscriber::EnvFilter;

/// CLI arguments for the ant farm router
#[derive(Parser, Debug)]
#[command(
    name = "lem-in",
    about = "🐜 Moves an ant colony from ##start to ##end in as few turns as possible"
)]
pub struct Args {
    /// Path to the farm description
    pub map: String,

    /// Which start-to-end paths are considered
    #[arg(long, value_enum, default_value_t = SearchMode::AllSimple)]
    pub search: SearchMode,

    /// How non-overlapping lanes are picked from the candidates
    #[arg(long, value_enum, default_value_t = SelectionStrategy::Sorted)]
    pub selector: SelectionStrategy,

    /// How ants are spread over the lanes
    #[arg(long, value_enum, default_value_t = SchedulingStrategy::MinFinish)]
    pub scheduler: SchedulingStrategy,

    /// Stop the path search after this many candidates (at least 1)
    #[arg(long)]
    pub path_limit: Option<NonZeroUsize>,

    /// Do not echo the farm before the moves
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Print a run summary to stderr
    #[arg(long, default_value_t = false)]
    pub stats: bool,

    /// Raise log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn routing_config(&self) -> RoutingConfig {
        RoutingConfig {
            search: self.search,
            selection: self.selector,
            scheduling: self.scheduler,
            path_limit: self.path_limit,
        }
    }
}

/// Install the stderr log subscriber
pub fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // a second init (tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
