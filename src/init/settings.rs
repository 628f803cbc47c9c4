use config::{Config, ConfigError, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub address: String,
    pub port: u16,
    pub enable_https: bool,
    pub certs_dir: String,
}

impl Settings {
    /// Layer defaults, the optional config file and command line overrides
    ///
    /// # Arguments
    /// * `config_file` - Config file to read instead of `config.*` in the working directory
    /// * Remaining arguments override the matching setting when `Some`
    pub fn new(
        config_file: Option<String>,
        address: Option<String>,
        port: Option<u16>,
        enable_https: Option<bool>,
        certs_dir: Option<String>,
    ) -> Result<Self, ConfigError> {
        let file = match config_file {
            Some(path) => File::with_name(&path).required(true),
            None => File::with_name("config").required(false),
        };

        let builder = Config::builder()
            .set_default("address", "127.0.0.1")?
            .set_default("port", 8080)?
            .set_default("enable_https", false)?
            .set_default("certs_dir", "certs")?
            .add_source(file)
            .set_override_option("address", address)?
            .set_override_option("port", port)?
            .set_override_option("enable_https", enable_https)?
            .set_override_option("certs_dir", certs_dir)?;

        builder.build()?.try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }

    pub fn print(&self) {
        tracing::info!("Address: {}", self.address);
        tracing::info!("Port: {}", self.port);
        if self.enable_https {
            tracing::info!("HTTPS Enabled");
            tracing::info!("Certs Dir: {}", self.certs_dir);
        } else {
            tracing::info!("HTTPS Disabled");
        }
    }
}
