use anyhow::Result;
use clap::Args;
use semkit::Semver;

#[derive(Args, Debug)]
pub struct FinalizeArgs {
    /// Version to finalize
    pub version: String,
}

pub fn execute(args: FinalizeArgs) -> Result<i32> {
    println!("{}", Semver::finalize(&args.version)?);
    Ok(0)
}
