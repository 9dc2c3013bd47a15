use anyhow::Result;
use clap::Args;
use semkit::VersionParser;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Versions to validate
    #[arg(value_name = "VERSION", required = true)]
    pub versions: Vec<String>,

    /// Do not report invalid versions, only set the exit code
    #[arg(short, long)]
    pub quiet: bool,
}

/// Return the inputs that are not valid versions, with their error
pub fn invalid_versions(versions: &[String]) -> Vec<semkit::SemverError> {
    versions
        .iter()
        .filter_map(|v| VersionParser::parse(v).err())
        .collect()
}

pub fn execute(args: CheckArgs) -> Result<i32> {
    let invalid = invalid_versions(&args.versions);
    if invalid.is_empty() {
        return Ok(0);
    }

    if !args.quiet {
        for err in &invalid {
            eprintln!("ERROR {}", err);
        }
    }
    Ok(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_versions() {
        let inputs: Vec<String> = ["1.2.3", "1.2", "v1.0.0", "1.0.0-rc.1"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let invalid = invalid_versions(&inputs);
        assert_eq!(invalid.len(), 2);
        assert_eq!(invalid[0].to_string(), "1.2 is not valid SemVer string");
    }
}
