//! Compatibility between the running CLI and the one that wrote the settings

use anyhow::Result;
use semver::Version;

/// Compare the running CLI version against the version recorded in the settings
/// Returns a warning message if the project was generated by a newer CLI
pub fn check_compatibility(
    cli_version: &str,
    generator_version: &str,
    upgrade_command: &str,
) -> Option<String> {
    let cli_ver = parse_version(cli_version).ok()?;
    let generator_ver = parse_version(generator_version).ok()?;

    if cli_ver < generator_ver {
        Some(format!(
            "This project was generated by version {} of the CLI.\n\
             You are running version {}; newer rules may be missing.\n\
             Consider updating: {}",
            generator_version, cli_version, upgrade_command
        ))
    } else {
        None
    }
}

/// Parse version string, accepting a leading `v`
pub fn parse_version(version_str: &str) -> Result<Version> {
    let cleaned = version_str.strip_prefix('v').unwrap_or(version_str);
    Version::parse(cleaned).map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    const UPGRADE: &str = "cargo install yogurt-tools --force";

    #[test]
    fn test_cli_older_than_project() {
        let warning = check_compatibility("0.1.0", "0.2.0", UPGRADE);
        assert!(warning.is_some());
        assert!(warning.unwrap().contains("0.2.0"));
    }

    #[test]
    fn test_cli_same_as_project() {
        assert!(check_compatibility("0.2.0", "v0.2.0", UPGRADE).is_none());
    }

    #[test]
    fn test_cli_newer_than_project() {
        assert!(check_compatibility("0.3.0", "0.1.0", UPGRADE).is_none());
    }

    #[test]
    fn test_invalid_versions_are_skipped() {
        assert!(check_compatibility("invalid", "0.1.0", UPGRADE).is_none());
        assert!(parse_version("next").is_err());
    }
}
