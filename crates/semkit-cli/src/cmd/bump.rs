use anyhow::Result;
use clap::{Args, ValueEnum};
use semkit::{BumpKind, VersionInfo};

use crate::config::SemkitConfig;

/// Component to bump
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindArg {
    /// Bump the major part of the version
    Major,
    /// Bump the minor part of the version
    Minor,
    /// Bump the patch part of the version
    Patch,
    /// Bump the prerelease part of the version
    Prerelease,
    /// Bump the build part of the version
    Build,
}

impl From<KindArg> for BumpKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Major => BumpKind::Major,
            KindArg::Minor => BumpKind::Minor,
            KindArg::Patch => BumpKind::Patch,
            KindArg::Prerelease => BumpKind::Prerelease,
            KindArg::Build => BumpKind::Build,
        }
    }
}

#[derive(Args, Debug)]
pub struct BumpArgs {
    /// Which part of the version to raise
    #[arg(value_enum)]
    pub kind: KindArg,

    /// Version to raise
    pub version: String,

    /// Seed token for an absent prerelease/build section (overrides semkit.toml)
    #[arg(short, long)]
    pub token: Option<String>,
}

/// Apply a bump, resolving the seed token from flag, then config, then the built-in default
pub fn bump_version(args: &BumpArgs, config: &SemkitConfig) -> Result<VersionInfo> {
    let kind = BumpKind::from(args.kind);
    let token = args.token.as_deref().or_else(|| config.token_for(kind));
    let version = VersionInfo::parse(&args.version)?;
    Ok(version.bump(kind, token)?)
}

pub fn execute(args: BumpArgs, config: &SemkitConfig) -> Result<i32> {
    let bumped = bump_version(&args, config)?;
    println!("{}", bumped);
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BumpConfig;

    fn args(kind: KindArg, version: &str, token: Option<&str>) -> BumpArgs {
        BumpArgs {
            kind,
            version: version.to_string(),
            token: token.map(str::to_string),
        }
    }

    #[test]
    fn test_every_kind_maps() {
        let config = SemkitConfig::default();
        let expected = [
            (KindArg::Major, "4.0.0"),
            (KindArg::Minor, "3.5.0"),
            (KindArg::Patch, "3.4.6"),
            (KindArg::Prerelease, "3.4.5-rc.1"),
            (KindArg::Build, "3.4.5+build.1"),
        ];
        for (kind, out) in expected {
            assert_eq!(bump_version(&args(kind, "3.4.5", None), &config).unwrap().to_string(), out);
        }
    }

    #[test]
    fn test_token_precedence() {
        let config = SemkitConfig {
            bump: BumpConfig {
                prerelease_token: Some("beta".into()),
                build_token: None,
            },
        };
        assert_eq!(
            bump_version(&args(KindArg::Prerelease, "1.0.0", None), &config).unwrap().to_string(),
            "1.0.0-beta.1"
        );
        assert_eq!(
            bump_version(&args(KindArg::Prerelease, "1.0.0", Some("dev")), &config).unwrap().to_string(),
            "1.0.0-dev.1"
        );
    }

    #[test]
    fn test_malformed_version_surfaces_typed_error() {
        let err = bump_version(&args(KindArg::Major, "1.2", None), &SemkitConfig::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<semkit::SemverError>(),
            Some(semkit::SemverError::MalformedVersion(_))
        ));
    }
}
