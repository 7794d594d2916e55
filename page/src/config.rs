//! Startup configuration from environment variables.

use std::io;

use artic_core::client::DEFAULT_BASE_URL;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationMode {
    /// `slow` / `error` checkboxes and query keywords are honoured.
    Keywords,
    /// Requests always go straight to the API.
    Off,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    pub port: String,
    pub api_base: String,
    pub simulation: SimulationMode,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            port: "3000".to_string(),
            api_base: DEFAULT_BASE_URL.to_string(),
            simulation: SimulationMode::Keywords,
        }
    }
}

impl PageConfig {
    /// Reads `PORT`, `ARTIC_API_BASE` and `ARTIC_SIMULATION`.
    pub fn from_env() -> io::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> io::Result<Self> {
        let defaults = Self::default();
        let simulation = match lookup("ARTIC_SIMULATION").as_deref().map(str::trim) {
            None | Some("") | Some("keywords") => SimulationMode::Keywords,
            Some("off") => SimulationMode::Off,
            Some(other) => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("ARTIC_SIMULATION must be `keywords` or `off`, got `{other}`"),
                ))
            }
        };
        Ok(Self {
            port: lookup("PORT").unwrap_or(defaults.port),
            api_base: lookup("ARTIC_API_BASE").unwrap_or(defaults.api_base),
            simulation,
        })
    }

    pub fn addr(&self) -> String {
        format!("127.0.0.1:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_target_public_api() {
        let config = PageConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, PageConfig::default());
        assert_eq!(config.addr(), "127.0.0.1:3000");
        assert_eq!(config.api_base, "https://api.artic.edu/api/v1");
    }

    #[test]
    fn reads_overrides() {
        let config = PageConfig::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("ARTIC_API_BASE", "http://127.0.0.1:3001"),
            ("ARTIC_SIMULATION", "off"),
        ]))
        .unwrap();
        assert_eq!(config.addr(), "127.0.0.1:8080");
        assert_eq!(config.api_base, "http://127.0.0.1:3001");
        assert_eq!(config.simulation, SimulationMode::Off);
    }

    #[test]
    fn rejects_unknown_simulation_mode() {
        let err = PageConfig::from_lookup(lookup(&[("ARTIC_SIMULATION", "sometimes")])).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
