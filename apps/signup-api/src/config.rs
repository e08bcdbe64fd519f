use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupConfig {
    pub listen_addr: IpAddr,
    pub listen_port: u16,
    /// TOML seed replacing the built-in activity list.
    pub seed_path: Option<String>,
    pub enforce_capacity: bool,
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            listen_addr: IpAddr::from([0, 0, 0, 0]),
            listen_port: 8000,
            seed_path: None,
            enforce_capacity: false,
        }
    }
}

impl SignupConfig {
    /// Defaults, then `/etc/mergington/signup.toml`, then `./signup.toml`,
    /// then `SIGNUP_*` environment variables.
    pub fn load() -> Result<Self> {
        Self::load_from(Environment::with_prefix("SIGNUP").try_parsing(true))
    }

    fn load_from(env: Environment) -> Result<Self> {
        let defaults = Self::default();
        let config = Config::builder()
            .set_default("listen_addr", defaults.listen_addr.to_string())?
            .set_default("listen_port", i64::from(defaults.listen_port))?
            .set_default("enforce_capacity", defaults.enforce_capacity)?
            .add_source(File::with_name("/etc/mergington/signup").required(false))
            .add_source(File::with_name("signup").required(false))
            .add_source(env)
            .build()
            .context("Failed to assemble configuration")?;

        config
            .try_deserialize()
            .context("Invalid signup configuration")
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.listen_addr, self.listen_port)
    }
}
