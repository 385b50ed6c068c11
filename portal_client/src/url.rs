//! Backend and frontend base URL resolution.

use std::collections::BTreeMap;
use std::net::IpAddr;

/// Checked in order, the first non-empty value wins.
pub const BACKEND_URL_OVERRIDES: [&str; 4] = [
    "VITE_BACKEND_URL",
    "VITE_API_URL",
    "VITE_INTERNAL_API_URL",
    "VITE_API_BASE_URL",
];
pub const FRONTEND_URL_VAR: &str = "VITE_FRONTEND_URL";
pub const ENABLE_LOGS_VAR: &str = "VITE_ENABLE_LOGS";

pub const DEV_BACKEND_PORT: u16 = 3001;
pub const PRODUCTION_BACKEND_URL: &str = "https://api.squadportal.com.br";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3001";
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildMode {
    Development,
    Production,
    #[default]
    Other,
}

impl BuildMode {
    pub fn parse(mode: &str) -> Self {
        match mode.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => BuildMode::Development,
            "production" | "prod" => BuildMode::Production,
            _ => BuildMode::Other,
        }
    }
}

/// The parts of the page location the resolver looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Scheme including the trailing colon, e.g. `https:`.
    pub protocol: String,
    pub hostname: String,
    pub port: Option<u16>,
}

impl Location {
    pub fn new(protocol: &str, hostname: &str, port: Option<u16>) -> Self {
        Location {
            protocol: protocol.to_owned(),
            hostname: hostname.to_owned(),
            port,
        }
    }

    pub fn origin(&self) -> String {
        match self.port {
            Some(port) => format!("{}//{}:{}", self.protocol, self.hostname, port),
            None => format!("{}//{}", self.protocol, self.hostname),
        }
    }

    /// Location of the current page; `None` outside a browser.
    #[cfg(target_arch = "wasm32")]
    pub fn current() -> Option<Self> {
        let location = web_sys::window()?.location();
        let port = location.port().ok().and_then(|port| port.parse().ok());
        Some(Location {
            protocol: location.protocol().ok()?,
            hostname: location.hostname().ok()?,
            port,
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn current() -> Option<Self> {
        None
    }

    fn is_local(&self) -> bool {
        self.hostname.is_empty()
            || self.hostname == "localhost"
            || self.hostname.parse::<IpAddr>().is_ok()
    }
}

/// Build-time or process configuration consulted by the resolver.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: BTreeMap<String, String>,
    pub mode: BuildMode,
}

impl Environment {
    pub fn new(mode: BuildMode) -> Self {
        Environment {
            vars: BTreeMap::new(),
            mode,
        }
    }

    pub fn with_var(mut self, name: &str, value: impl Into<String>) -> Self {
        self.vars.insert(name.to_owned(), value.into());
        self
    }

    /// Values baked in when the front-end is compiled.
    pub fn from_build() -> Self {
        let mode = match option_env!("VITE_MODE") {
            Some(mode) => BuildMode::parse(mode),
            None if cfg!(debug_assertions) => BuildMode::Development,
            None => BuildMode::Production,
        };

        let baked = [
            ("VITE_BACKEND_URL", option_env!("VITE_BACKEND_URL")),
            ("VITE_API_URL", option_env!("VITE_API_URL")),
            ("VITE_INTERNAL_API_URL", option_env!("VITE_INTERNAL_API_URL")),
            ("VITE_API_BASE_URL", option_env!("VITE_API_BASE_URL")),
            ("VITE_FRONTEND_URL", option_env!("VITE_FRONTEND_URL")),
            ("VITE_ENABLE_LOGS", option_env!("VITE_ENABLE_LOGS")),
        ];

        baked
            .into_iter()
            .filter_map(|(name, value)| Some((name, value?)))
            .fold(Environment::new(mode), |env, (name, value)| {
                env.with_var(name, value)
            })
    }

    /// Trimmed, non-empty value of `name`.
    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars
            .get(name)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    pub fn logs_enabled(&self) -> bool {
        match self.var(ENABLE_LOGS_VAR) {
            Some(flag) => matches!(flag.to_ascii_lowercase().as_str(), "true" | "1" | "yes"),
            None => self.mode == BuildMode::Development,
        }
    }
}

/// Origin of the content API, without a trailing slash.
pub fn backend_url(env: &Environment, location: Option<&Location>) -> String {
    if let Some(url) = BACKEND_URL_OVERRIDES
        .iter()
        .find_map(|name| env.var(name))
    {
        return url.trim_end_matches('/').to_owned();
    }

    match env.mode {
        BuildMode::Development => {
            let hostname = location
                .map(|location| location.hostname.as_str())
                .filter(|hostname| !hostname.is_empty())
                .unwrap_or("localhost");
            format!("http://{hostname}:{DEV_BACKEND_PORT}")
        }
        BuildMode::Production => match location {
            Some(location) if !location.is_local() => {
                let host = location
                    .hostname
                    .strip_prefix("www.")
                    .unwrap_or(&location.hostname);
                if host.starts_with("api.") {
                    format!("https://{host}")
                } else if host.contains('.') {
                    format!("https://api.{host}")
                } else {
                    PRODUCTION_BACKEND_URL.to_owned()
                }
            }
            _ => PRODUCTION_BACKEND_URL.to_owned(),
        },
        BuildMode::Other => DEFAULT_BACKEND_URL.to_owned(),
    }
}

pub fn frontend_url(env: &Environment, location: Option<&Location>) -> String {
    if let Some(url) = env.var(FRONTEND_URL_VAR) {
        return url.trim_end_matches('/').to_owned();
    }

    location
        .filter(|location| !location.hostname.is_empty())
        .map(Location::origin)
        .unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn https(hostname: &str) -> Location {
        Location::new("https:", hostname, None)
    }

    #[test]
    fn overrides_are_checked_in_order() {
        let env = Environment::new(BuildMode::Production)
            .with_var("VITE_API_BASE_URL", "https://fallback.example.org")
            .with_var("VITE_API_URL", "https://api.example.org/")
            .with_var("VITE_BACKEND_URL", "  ");

        assert_eq!(
            backend_url(&env, Some(&https("www.example.org"))),
            "https://api.example.org"
        );
    }

    #[test]
    fn development_uses_current_host_on_fixed_port() {
        let env = Environment::new(BuildMode::Development);
        assert_eq!(backend_url(&env, None), "http://localhost:3001");
        assert_eq!(
            backend_url(&env, Some(&Location::new("http:", "192.168.0.12", Some(5173)))),
            "http://192.168.0.12:3001"
        );
    }

    #[test]
    fn production_derives_api_subdomain() {
        let env = Environment::new(BuildMode::Production);
        assert_eq!(
            backend_url(&env, Some(&https("www.squads.org"))),
            "https://api.squads.org"
        );
        assert_eq!(
            backend_url(&env, Some(&https("squads.org"))),
            "https://api.squads.org"
        );
        assert_eq!(
            backend_url(&env, Some(&https("api.squads.org"))),
            "https://api.squads.org"
        );
        assert_eq!(
            backend_url(&env, Some(&https("localhost"))),
            PRODUCTION_BACKEND_URL
        );
        assert_eq!(backend_url(&env, None), PRODUCTION_BACKEND_URL);
    }

    #[test]
    fn unknown_mode_falls_back_to_local_default() {
        let env = Environment::new(BuildMode::Other);
        assert_eq!(
            backend_url(&env, Some(&https("www.squads.org"))),
            DEFAULT_BACKEND_URL
        );
    }

    #[test]
    fn resolution_is_deterministic() {
        let env = Environment::new(BuildMode::Production);
        let location = https("www.squads.org");
        assert_eq!(
            backend_url(&env, Some(&location)),
            backend_url(&env, Some(&location))
        );
    }

    #[test]
    fn frontend_url_prefers_override_then_origin() {
        let location = Location::new("http:", "localhost", Some(5173));
        let env = Environment::new(BuildMode::Development);
        assert_eq!(frontend_url(&env, Some(&location)), "http://localhost:5173");
        assert_eq!(frontend_url(&env, None), DEFAULT_FRONTEND_URL);

        let env = env.with_var(FRONTEND_URL_VAR, "https://squads.org/");
        assert_eq!(frontend_url(&env, Some(&location)), "https://squads.org");
    }

    #[test]
    fn log_flag() {
        assert!(Environment::new(BuildMode::Development).logs_enabled());
        assert!(!Environment::new(BuildMode::Production).logs_enabled());
        assert!(Environment::new(BuildMode::Production)
            .with_var(ENABLE_LOGS_VAR, "TRUE")
            .logs_enabled());
    }
}
