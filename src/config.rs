use std::path::PathBuf;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to the Google service-account key file. The file may appear after
    /// startup; data endpoints check for it on every request.
    pub credentials_path: PathBuf,
    pub bind_addr: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let credentials_path = std::env::var("GOOGLE_CREDENTIALS_PATH")
            .unwrap_or_else(|_| "./credentials.json".to_string())
            .into();

        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match std::env::var("PORT") {
            Ok(val) => match val.parse() {
                Ok(p) => p,
                Err(_) => {
                    log::warn!("PORT is not a valid port number ({val}) — using 8000");
                    8000
                }
            },
            Err(_) => 8000,
        };

        AppConfig { credentials_path, bind_addr, port }
    }
}
