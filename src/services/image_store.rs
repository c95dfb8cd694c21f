/// Image store adapter
///
/// Wraps the external hosted-image service behind the [`ImageStore`] trait:
/// an upload hands back the public URL plus the object key, and delete
/// removes an object by key. The production implementation talks to an
/// S3-compatible host.
use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use bytes::Bytes;
use url::Url;
use uuid::Uuid;

use crate::config::S3Config;
use crate::error::{AppError, Result};

/// A stored image: where the public fetches it, and the host-side key
#[derive(Debug, Clone)]
pub struct StoredImage {
    pub url: String,
    pub key: String,
}

#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn upload(&self, bytes: Bytes, content_type: &str, extension: &str) -> Result<StoredImage>;

    async fn delete(&self, key: &str) -> Result<()>;
}

/// S3-backed image store
pub struct S3ImageStore {
    client: Client,
    bucket: String,
    key_prefix: String,
    public_url_base: String,
}

impl S3ImageStore {
    pub async fn from_config(config: &S3Config) -> Result<Self> {
        let client = build_s3_client(config).await?;
        Ok(Self {
            client,
            bucket: config.bucket.clone(),
            key_prefix: config.key_prefix.clone(),
            public_url_base: config.public_url_base(),
        })
    }
}

#[async_trait]
impl ImageStore for S3ImageStore {
    async fn upload(&self, bytes: Bytes, content_type: &str, extension: &str) -> Result<StoredImage> {
        let key = object_key(&self.key_prefix, extension);

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(bytes))
            .content_type(content_type)
            // Album images are immutable once stored
            .cache_control("max-age=31536000")
            .send()
            .await
            .map_err(|e| classify_upload_error(&e.to_string(), &self.bucket))?;

        let url = format!("{}/{}", self.public_url_base, key);
        Ok(StoredImage { url, key })
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| AppError::UploadProvider(format!("image host delete failed: {e}")))?;

        Ok(())
    }
}

/// Build an AWS S3 client from the provided configuration.
///
/// Falls back to the default credential chain when no static credentials are
/// configured; a custom endpoint supports S3-compatible storage like MinIO.
pub async fn build_s3_client(config: &S3Config) -> Result<Client> {
    use aws_sdk_s3::config::{Credentials, Region};

    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new(config.region.clone()));

    if let (Some(access_key_id), Some(secret_access_key)) =
        (&config.access_key_id, &config.secret_access_key)
    {
        let credentials = Credentials::new(
            access_key_id.clone(),
            secret_access_key.clone(),
            None,
            None,
            "album-service",
        );
        loader = loader.credentials_provider(credentials);
    }

    let shared_config = loader.load().await;

    let mut builder = aws_sdk_s3::config::Builder::from(&shared_config);
    if let Some(endpoint) = &config.endpoint {
        if !endpoint.trim().is_empty() {
            builder = builder.endpoint_url(endpoint.clone());
        }
    }

    Ok(Client::from_conf(builder.build()))
}

fn object_key(prefix: &str, extension: &str) -> String {
    let name = format!("{}.{}", Uuid::new_v4(), extension);
    let prefix = prefix.trim_matches('/');
    if prefix.is_empty() {
        name
    } else {
        format!("{prefix}/{name}")
    }
}

fn classify_upload_error(message: &str, bucket: &str) -> AppError {
    if message.contains("403") || message.contains("Forbidden") {
        AppError::UploadProvider("image host rejected the credentials (403)".to_string())
    } else if message.contains("NoSuchBucket") {
        AppError::UploadProvider(format!("image host bucket not found: {bucket}"))
    } else {
        AppError::UploadProvider(format!("image upload failed: {message}"))
    }
}

/// Sanity check on the URL handed back by the adapter: an absolute http(s)
/// URL with a host, anything else means a misconfigured image store.
pub fn is_remote_image_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some()
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_keys_carry_the_prefix_and_extension() {
        let key = object_key("album", "jpg");
        assert!(key.starts_with("album/"));
        assert!(key.ends_with(".jpg"));

        let bare = object_key("", "png");
        assert!(!bare.contains('/'));
        assert!(bare.ends_with(".png"));

        let trimmed = object_key("/album/", "jpg");
        assert!(trimmed.starts_with("album/"));
    }

    #[test]
    fn object_keys_are_unique() {
        assert_ne!(object_key("album", "jpg"), object_key("album", "jpg"));
    }

    #[test]
    fn remote_image_urls_must_be_absolute_http() {
        assert!(is_remote_image_url("https://bucket.s3.us-east-1.amazonaws.com/album/a.jpg"));
        assert!(is_remote_image_url("http://localhost:9000/album/a.jpg"));

        assert!(!is_remote_image_url(""));
        assert!(!is_remote_image_url("album/a.jpg"));
        assert!(!is_remote_image_url("/var/tmp/a.jpg"));
        assert!(!is_remote_image_url("ftp://example.com/a.jpg"));
        assert!(!is_remote_image_url("data:image/png;base64,AAAA"));
    }

    #[test]
    fn upload_errors_are_classified_by_cause() {
        let auth = classify_upload_error("service error: 403 Forbidden", "memories");
        assert!(auth.to_string().contains("403"));

        let missing = classify_upload_error("NoSuchBucket: does not exist", "memories");
        assert!(missing.to_string().contains("memories"));

        let other = classify_upload_error("connection reset", "memories");
        assert!(other.to_string().contains("image upload failed"));
    }
}
