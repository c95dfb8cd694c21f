/// Configuration management for album-service
///
/// Loads configuration from environment variables with sensible defaults.
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub cors: CorsConfig,
    pub database: DatabaseConfig,
    pub s3: S3Config,
    pub auth: AuthConfig,
    pub upload: UploadConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub env: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins, or "*" for any
    pub allowed_origins: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct S3Config {
    pub bucket: String,
    pub region: String,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub endpoint: Option<String>,
    /// Base URL the public reads images from; defaults to the bucket's
    /// virtual-hosted S3 URL when unset
    pub public_url_base: Option<String>,
    pub key_prefix: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AuthConfig {
    /// The shared PIN gating the gallery entry page
    pub pin: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UploadConfig {
    pub max_bytes: usize,
    /// Accepted image formats by extension (lowercase)
    pub allowed_formats: Vec<String>,
    /// Images wider than this are downscaled before storage
    pub max_width: u32,
}

impl S3Config {
    pub fn public_url_base(&self) -> String {
        match &self.public_url_base {
            Some(base) if !base.trim().is_empty() => base.trim_end_matches('/').to_string(),
            _ => format!("https://{}.s3.{}.amazonaws.com", self.bucket, self.region),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let pin = std::env::var("ALBUM_PIN").unwrap_or_default();
        if pin.is_empty() {
            tracing::warn!("ALBUM_PIN is not set; every login attempt will be rejected");
        }

        Ok(Config {
            app: AppConfig {
                host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("APP_PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .unwrap_or(3000),
                env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            },
            cors: CorsConfig {
                allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "*".to_string()),
            },
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "postgresql://localhost/album".to_string()),
                max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .unwrap_or(10),
            },
            s3: S3Config {
                bucket: std::env::var("S3_BUCKET").unwrap_or_else(|_| "album-photos".to_string()),
                region: std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
                access_key_id: std::env::var("AWS_ACCESS_KEY_ID").ok(),
                secret_access_key: std::env::var("AWS_SECRET_ACCESS_KEY").ok(),
                endpoint: std::env::var("S3_ENDPOINT").ok(),
                public_url_base: std::env::var("S3_PUBLIC_URL_BASE").ok(),
                key_prefix: std::env::var("S3_KEY_PREFIX").unwrap_or_else(|_| "album".to_string()),
            },
            auth: AuthConfig { pin },
            upload: UploadConfig {
                max_bytes: std::env::var("UPLOAD_MAX_BYTES")
                    .unwrap_or_else(|_| "5242880".to_string())
                    .parse()
                    .unwrap_or(5 * 1024 * 1024),
                allowed_formats: parse_allowed_formats(
                    &std::env::var("UPLOAD_ALLOWED_FORMATS").unwrap_or_default(),
                ),
                max_width: std::env::var("UPLOAD_MAX_WIDTH")
                    .unwrap_or_else(|_| "1200".to_string())
                    .parse()
                    .unwrap_or(1200),
            },
        })
    }
}

fn parse_allowed_formats(raw: &str) -> Vec<String> {
    let formats: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_ascii_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    if formats.is_empty() {
        return vec!["jpg", "jpeg", "png", "webp"]
            .into_iter()
            .map(String::from)
            .collect();
    }
    formats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_format_list_falls_back_to_defaults() {
        assert_eq!(
            parse_allowed_formats(""),
            vec!["jpg", "jpeg", "png", "webp"]
        );
        assert_eq!(parse_allowed_formats(" , "), vec!["jpg", "jpeg", "png", "webp"]);
    }

    #[test]
    fn format_list_is_trimmed_and_lowercased() {
        assert_eq!(
            parse_allowed_formats(" JPG, png "),
            vec!["jpg".to_string(), "png".to_string()]
        );
    }

    #[test]
    fn public_url_base_defaults_to_the_bucket_url() {
        let config = S3Config {
            bucket: "memories".into(),
            region: "eu-west-1".into(),
            access_key_id: None,
            secret_access_key: None,
            endpoint: None,
            public_url_base: None,
            key_prefix: "album".into(),
        };
        assert_eq!(
            config.public_url_base(),
            "https://memories.s3.eu-west-1.amazonaws.com"
        );
    }

    #[test]
    fn explicit_public_url_base_wins_and_loses_its_trailing_slash() {
        let config = S3Config {
            bucket: "memories".into(),
            region: "eu-west-1".into(),
            access_key_id: None,
            secret_access_key: None,
            endpoint: None,
            public_url_base: Some("https://cdn.example.com/".into()),
            key_prefix: "album".into(),
        };
        assert_eq!(config.public_url_base(), "https://cdn.example.com");
    }
}
