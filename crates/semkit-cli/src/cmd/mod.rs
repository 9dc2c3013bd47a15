//! Version subcommands.

mod bump;
mod check;
mod compare;
mod finalize;
mod matches;
mod sort;

use anyhow::Result;
use clap::Subcommand;

use crate::config::SemkitConfig;

pub use bump::BumpArgs;
pub use check::CheckArgs;
pub use compare::CompareArgs;
pub use finalize::FinalizeArgs;
pub use matches::MatchArgs;
pub use sort::SortArgs;

/// Semantic version subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare two versions and print -1, 0 or 1
    Compare(CompareArgs),

    /// Bump one component of a version
    Bump(BumpArgs),

    /// Validate one or more versions
    #[command(alias = "validate")]
    Check(CheckArgs),

    /// Remove prerelease and build metadata
    Finalize(FinalizeArgs),

    /// Evaluate a version against an expression such as ">=1.0.0"
    #[command(name = "match")]
    Match(MatchArgs),

    /// Sort versions by precedence
    Sort(SortArgs),
}

/// Execute a subcommand and return the process exit code
pub fn execute(command: Commands, config: &SemkitConfig) -> Result<i32> {
    log::debug!("Dispatching {:?}", command);
    match command {
        Commands::Compare(args) => compare::execute(args),
        Commands::Bump(args) => bump::execute(args, config),
        Commands::Check(args) => check::execute(args),
        Commands::Finalize(args) => finalize::execute(args),
        Commands::Match(args) => matches::execute(args),
        Commands::Sort(args) => sort::execute(args),
    }
}
