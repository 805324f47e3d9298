//! Engine connection

use bollard::Docker;

use crate::engine::version;
use crate::error::Result;

/// Connection timeout for the engine socket, in seconds.
const TIMEOUT_SECS: u64 = 120;

/// Default local engine socket, overridable through `DOCKER_HOST`.
const DEFAULT_SOCKET: &str = "unix:///var/run/docker.sock";

/// Connect to the engine, negotiating the API version from
/// `DOCKER_API_VERSION` or the docker CLI.
///
/// `DOCKER_HOST` values with a `tcp://` or `http://` scheme connect over
/// HTTP; anything else is treated as a local socket path.
pub fn connect() -> Result<Docker> {
    let api_version = version::resolve()?;
    let host = std::env::var("DOCKER_HOST").unwrap_or_else(|_| DEFAULT_SOCKET.to_string());

    let docker = if is_http_host(&host) {
        Docker::connect_with_http(&host, TIMEOUT_SECS, &api_version)?
    } else {
        Docker::connect_with_socket(&host, TIMEOUT_SECS, &api_version)?
    };

    Ok(docker)
}

fn is_http_host(host: &str) -> bool {
    host.starts_with("tcp://") || host.starts_with("http://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tcp_host_uses_http_transport() {
        assert!(is_http_host("tcp://localhost:2375"));
        assert!(is_http_host("http://10.0.0.5:2375"));
    }

    #[test]
    fn test_socket_hosts_stay_on_socket_transport() {
        assert!(!is_http_host(DEFAULT_SOCKET));
        assert!(!is_http_host("unix:///run/user/1000/docker.sock"));
        assert!(!is_http_host("/var/run/docker.sock"));
    }
}
