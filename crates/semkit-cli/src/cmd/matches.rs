use anyhow::Result;
use clap::Args;
use semkit::Semver;

#[derive(Args, Debug)]
pub struct MatchArgs {
    /// Version to test
    pub version: String,

    /// Expression `<op><version>`, op is one of <, >, <=, >=, ==, !=
    #[arg(allow_hyphen_values = true)]
    pub expr: String,

    /// Report the result only through the exit code (0 match, 1 no match)
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn execute(args: MatchArgs) -> Result<i32> {
    let matched = Semver::match_expr(&args.version, &args.expr)?;
    if args.quiet {
        return Ok(if matched { 0 } else { 1 });
    }
    println!("{}", matched);
    Ok(0)
}
