use anyhow::Result;
use clap::Args;
use semkit::Semver;
use std::cmp::Ordering;

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First version
    pub version1: String,

    /// Second version
    pub version2: String,
}

pub fn ordering_code(ord: Ordering) -> i32 {
    match ord {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

pub fn execute(args: CompareArgs) -> Result<i32> {
    let ord = Semver::compare(&args.version1, &args.version2)?;
    println!("{}", ordering_code(ord));
    Ok(0)
}
