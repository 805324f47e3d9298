//! Engine API version discovery
//!
//! The client needs an API version to speak. `DOCKER_API_VERSION` wins
//! when set; otherwise the docker CLI is asked for the server's version.
//! Discovery failure is fatal at startup.

use std::process::Command;

use bollard::ClientVersion;

use crate::error::{DockviewError, Result};

/// Environment override honored before shelling out.
pub const API_VERSION_ENV: &str = "DOCKER_API_VERSION";

/// Resolve the client API version to connect with.
pub fn resolve() -> Result<ClientVersion> {
    if let Ok(version) = std::env::var(API_VERSION_ENV) {
        if !version.is_empty() {
            return parse_version(&version);
        }
    }

    discover()
}

fn discover() -> Result<ClientVersion> {
    let output = Command::new("docker")
        .args(["version", "--format", "{{.Server.APIVersion}}"])
        .output()
        .map_err(|e| DockviewError::Version(format!("running `docker version`: {e}")))?;

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(DockviewError::Version(format!(
            "`docker version` exited with {}: {} {}",
            output.status,
            stdout.trim(),
            stderr.trim()
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_version(trim_wrapper(&stdout))
}

/// Strip surrounding whitespace plus one layer of matching quotes.
///
/// Depending on the format string, the docker CLI may print the version
/// bare (`1.43`) or as a JSON string (`"1.43"`), newline-terminated either
/// way.
fn trim_wrapper(raw: &str) -> &str {
    let trimmed = raw.trim();

    for quote in ['"', '\''] {
        if trimmed.len() >= 2 && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
            return &trimmed[1..trimmed.len() - 1];
        }
    }

    trimmed
}

fn parse_version(text: &str) -> Result<ClientVersion> {
    let invalid = || DockviewError::Version(format!("`{text}` is not a major.minor version"));

    let (major, minor) = text.split_once('.').ok_or_else(invalid)?;

    Ok(ClientVersion {
        major_version: major.trim().parse().map_err(|_| invalid())?,
        minor_version: minor.trim().parse().map_err(|_| invalid())?,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_version() {
        let version = parse_version("1.43").unwrap();
        assert_eq!(version.major_version, 1);
        assert_eq!(version.minor_version, 43);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_version("banana").is_err());
        assert!(parse_version("1.x").is_err());
        assert!(parse_version("").is_err());
    }

    #[test]
    fn test_trim_plain_output() {
        assert_eq!(trim_wrapper("1.43\n"), "1.43");
    }

    #[test]
    fn test_trim_json_quoted_output() {
        assert_eq!(trim_wrapper("\"1.43\"\n"), "1.43");
    }

    #[test]
    fn test_trim_single_quoted_output() {
        assert_eq!(trim_wrapper(" '1.43' "), "1.43");
    }

    #[test]
    fn test_trim_strips_only_one_quote_layer() {
        assert_eq!(trim_wrapper("\"\"1.43\"\""), "\"1.43\"");
    }

    #[test]
    fn test_quoted_output_parses_end_to_end() {
        let version = parse_version(trim_wrapper("\"1.43\"\n")).unwrap();
        assert_eq!((version.major_version, version.minor_version), (1, 43));
    }
}
