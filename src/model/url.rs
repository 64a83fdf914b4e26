//! Forwarded port mappings reported by a dev session.

use std::fmt;

use serde::Serialize;

/// Host used when odo omits `localAddress`.
pub const DEFAULT_HOST: &str = "localhost";

/// Port used when odo omits `localPort` or `containerPort`.
pub const DEFAULT_PORT: &str = "8080";

/// One local-to-container port forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Url {
    /// Container the port belongs to.
    pub name: String,
    /// Local address the port is bound on.
    pub host: String,
    /// Local port.
    pub local_port: String,
    /// Port inside the container.
    pub container_port: String,
}

impl Url {
    /// Creates a forward from its four parts.
    #[must_use]
    pub fn of(
        name: impl Into<String>,
        host: impl Into<String>,
        local_port: impl Into<String>,
        container_port: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            host: host.into(),
            local_port: local_port.into(),
            container_port: container_port.into(),
        }
    }

    /// Address a browser can open for this forward.
    #[must_use]
    pub fn local_address(&self) -> String {
        format!("http://{}:{}", self.host, self.local_port)
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.name, self.local_address(), self.container_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_forward() {
        let url = Url::of("runtime", "127.0.0.1", "20001", "3000");
        assert_eq!(url.local_address(), "http://127.0.0.1:20001");
        assert_eq!(url.to_string(), "runtime: http://127.0.0.1:20001 -> 3000");
    }
}
