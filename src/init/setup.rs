use crate::{err::Error, init::settings::Settings};
use axum_server::tls_rustls::RustlsConfig;
use std::path::{Path, PathBuf};

pub struct Resources {
    pub address: String,
    pub tls_config: Option<RustlsConfig>,
}

pub async fn setup(settings: &Settings) -> Result<Resources, Error> {
    let tls_config = if settings.enable_https {
        Some(setup_tls_config(&settings.certs_dir).await?)
    } else {
        None
    };

    tracing::info!("Setup complete.");
    Ok(Resources {
        address: settings.bind_address(),
        tls_config,
    })
}

/// Paths of `server.crt` and `server.key` inside the certificate directory.
/// Fails if either file is missing.
pub fn cert_paths(certs_dir_path: &str) -> Result<(PathBuf, PathBuf), Error> {
    let crt_path = Path::new(certs_dir_path).join("server.crt");
    if !crt_path.try_exists()? {
        return Err(Error::MissingCertificate(crt_path));
    }

    let key_path = Path::new(certs_dir_path).join("server.key");
    if !key_path.try_exists()? {
        return Err(Error::MissingKey(key_path));
    }

    Ok((crt_path, key_path))
}

pub async fn setup_tls_config(certs_dir_path: &str) -> Result<RustlsConfig, Error> {
    let (crt_path, key_path) = cert_paths(certs_dir_path)?;

    let tls_config = RustlsConfig::from_pem_file(&crt_path, &key_path).await?;
    let cs = tls_config
        .get_inner()
        .crypto_provider()
        .cipher_suites
        .clone();
    tracing::debug!("Cipher suites: {:#?}", cs);

    Ok(tls_config)
}
