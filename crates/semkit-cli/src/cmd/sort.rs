use anyhow::Result;
use clap::Args;
use semkit::{Semver, VersionParser};

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Versions to sort
    #[arg(value_name = "VERSION", required = true)]
    pub versions: Vec<String>,

    /// Sort from highest to lowest
    #[arg(short, long)]
    pub reverse: bool,
}

pub fn execute(args: SortArgs) -> Result<i32> {
    for v in args.versions.iter().filter(|v| !VersionParser::is_valid(v)) {
        log::warn!("Skipping invalid version {:?}", v);
    }

    let refs: Vec<&str> = args.versions.iter().map(String::as_str).collect();
    let sorted = if args.reverse {
        Semver::rsort(&refs)
    } else {
        Semver::sort(&refs)
    };

    for v in sorted {
        println!("{}", v);
    }
    Ok(0)
}
