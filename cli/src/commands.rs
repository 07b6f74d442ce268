pub mod sweep;

use clap::{Parser, ValueEnum};
use sweepr_common::network::target::Target;

#[derive(Parser)]
#[command(name = "sweepr")]
#[command(version)]
#[command(about = "A concurrent host liveness sweeper.")]
pub struct CommandLine {
    /// Addresses to sweep: a host, a range ("10.0.0.1-254"), a bare
    /// prefix ("10.0.0"), or a comma-separated list of those
    pub target: Target,

    /// Number of concurrent probe workers
    #[arg(short, long, default_value_t = 4, value_parser = clap::value_parser!(u64).range(1..))]
    pub workers: u64,

    /// Seconds a single probe waits before a host counts as dead
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Which classification to print
    #[arg(long, value_enum, default_value_t = Show::Alive)]
    pub show: Show,

    /// Trim decorative output
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Show {
    /// Only hosts that answered
    Alive,
    /// Only hosts that never answered
    Dead,
    /// Both lists
    All,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
