use std::{
    net::{AddrParseError, SocketAddr},
    num::ParseIntError,
    time::Duration,
};

use judging_session::SessionConfig;
use thiserror::Error;

const DEFAULT_BIND: &str = "127.0.0.1:8080";
const DEFAULT_ROUTE: &str = "/cgi-bin/judging.php";

/// Process settings, read once at startup.
#[derive(Debug, Clone)]
pub(crate) struct ServerConfig {
    pub(crate) bind: SocketAddr,
    pub(crate) route: String,
    /// Use the socket handed over by the service manager instead of binding.
    pub(crate) socket_activated: bool,
    pub(crate) session: SessionConfig,
}

impl ServerConfig {
    pub(crate) fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, `std::env::var` in production.
    ///
    /// Keys: `JUDGING_BIND`, `JUDGING_ROUTE`, `JUDGING_MAX_AGE` (seconds), `LISTEN_FDS`.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind = lookup("JUDGING_BIND").unwrap_or_else(|| DEFAULT_BIND.to_owned());
        let bind = bind
            .parse()
            .map_err(|source| ConfigError::InvalidBind { value: bind, source })?;

        let route = lookup("JUDGING_ROUTE").unwrap_or_else(|| DEFAULT_ROUTE.to_owned());
        if !route.starts_with('/') {
            return Err(ConfigError::InvalidRoute(route));
        }

        let socket_activated = match lookup("LISTEN_FDS") {
            Some(fds) => match fds.parse::<i32>()? {
                1 => true,
                count => return Err(ConfigError::UnexpectedListenFds(count)),
            },
            None => false,
        };

        // The reset flow redirects back to the page that rendered the form.
        let mut session = SessionConfig::builder().with_redirect(route.clone());
        if let Some(max_age) = lookup("JUDGING_MAX_AGE") {
            let seconds = max_age
                .parse()
                .map_err(|source| ConfigError::InvalidMaxAge { value: max_age, source })?;
            session = session.with_max_age(Duration::from_secs(seconds));
        }

        Ok(Self {
            bind,
            route,
            socket_activated,
            session: session.build(),
        })
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("invalid bind address `{value}`")]
    InvalidBind {
        value: String,
        #[source]
        source: AddrParseError,
    },

    #[error("route `{0}` must start with `/`")]
    InvalidRoute(String),

    #[error("invalid cookie max-age `{value}`")]
    InvalidMaxAge {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("the listen file descriptors are invalid")]
    InvalidListenFds(#[from] ParseIntError),

    #[error("expected exactly one listen file descriptor, got {0}")]
    UnexpectedListenFds(i32),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();

        assert_eq!(config.bind, DEFAULT_BIND.parse().unwrap());
        assert_eq!(config.route, DEFAULT_ROUTE);
        assert!(!config.socket_activated);
        assert_eq!(config.session.redirect_to(), DEFAULT_ROUTE);
        assert_eq!(config.session.max_age(), Duration::from_secs(86_400));
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("JUDGING_BIND", "0.0.0.0:3000"),
            ("JUDGING_ROUTE", "/judge"),
            ("JUDGING_MAX_AGE", "60"),
            ("LISTEN_FDS", "1"),
        ])
        .unwrap();

        assert_eq!(config.bind.port(), 3000);
        assert_eq!(config.route, "/judge");
        assert_eq!(config.session.redirect_to(), "/judge");
        assert_eq!(config.session.max_age(), Duration::from_secs(60));
        assert!(config.socket_activated);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            config(&[("JUDGING_BIND", "nowhere")]),
            Err(ConfigError::InvalidBind { .. })
        ));
        assert!(matches!(
            config(&[("JUDGING_ROUTE", "judge")]),
            Err(ConfigError::InvalidRoute(_))
        ));
        assert!(matches!(
            config(&[("JUDGING_MAX_AGE", "a day")]),
            Err(ConfigError::InvalidMaxAge { .. })
        ));
        assert!(matches!(
            config(&[("LISTEN_FDS", "two")]),
            Err(ConfigError::InvalidListenFds(_))
        ));
        assert!(matches!(
            config(&[("LISTEN_FDS", "2")]),
            Err(ConfigError::UnexpectedListenFds(2))
        ));
    }
}
