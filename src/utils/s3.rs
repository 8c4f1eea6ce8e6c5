use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_config::ConfigLoader;
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::Client as S3Client;
use aws_types::region::Region;
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::S3Settings;
use crate::errors::AppError;

pub const STATIC_DIR: &str = "static";
pub const BACKGROUND_FILE: &str = "background.jpg";
pub const BACKGROUND_URL: &str = "/static/background.jpg";

pub async fn create_s3_client(settings: &S3Settings) -> S3Client {
    let mut loader = ConfigLoader::default()
        .region(Region::new(settings.region.clone()))
        .behavior_version(BehaviorVersion::latest());

    // Without explicit keys the SDK falls back to its default provider chain.
    if !settings.access_key_id.is_empty() && !settings.secret_access_key.is_empty() {
        let session_token = Some(settings.session_token.clone()).filter(|token| !token.is_empty());
        loader = loader.credentials_provider(Credentials::new(
            settings.access_key_id.clone(),
            settings.secret_access_key.clone(),
            session_token,
            None,
            "employee-directory-config",
        ));
    }

    let aws_config = loader.load().await;
    S3Client::new(&aws_config)
}

/// Somewhere an object can be copied from onto local disk.
#[async_trait]
pub trait ObjectSource: Send + Sync {
    async fn download(&self, bucket: &str, key: &str, dest: &Path) -> Result<(), AppError>;
}

/// Builds a fresh client for every download from the configured credentials.
pub struct S3Source {
    settings: S3Settings,
}

impl S3Source {
    pub fn new(settings: S3Settings) -> Self {
        S3Source { settings }
    }
}

#[async_trait]
impl ObjectSource for S3Source {
    async fn download(&self, bucket: &str, key: &str, dest: &Path) -> Result<(), AppError> {
        let client = create_s3_client(&self.settings).await;

        let object = client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| AppError::AWSError(DisplayErrorContext(&err).to_string()))?;

        let bytes = object
            .body
            .collect()
            .await
            .map_err(|err| AppError::AWSError(err.to_string()))?
            .into_bytes();

        // Stage next to the target so a partial file never counts as present.
        let partial = dest.with_extension("jpg.part");
        tokio::fs::write(&partial, &bytes).await?;
        tokio::fs::rename(&partial, dest).await?;
        Ok(())
    }
}

/// Copies the background image into the static directory the first time a
/// page needs it. Once the file exists it is never fetched again.
pub struct BackgroundFetcher {
    bucket: String,
    key: String,
    local_path: PathBuf,
    source: Arc<dyn ObjectSource>,
}

impl BackgroundFetcher {
    pub fn new(
        bucket: impl Into<String>,
        key: impl Into<String>,
        static_dir: impl AsRef<Path>,
        source: Arc<dyn ObjectSource>,
    ) -> Self {
        BackgroundFetcher {
            bucket: bucket.into(),
            key: key.into(),
            local_path: static_dir.as_ref().join(BACKGROUND_FILE),
            source,
        }
    }

    pub fn from_settings(settings: &S3Settings) -> Self {
        Self::new(
            settings.bucket.clone(),
            settings.key.clone(),
            STATIC_DIR,
            Arc::new(S3Source::new(settings.clone())),
        )
    }

    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    /// Never fails: every problem is logged and the page renders regardless.
    pub async fn ensure_background_present(&self) {
        if self.bucket.is_empty() || self.key.is_empty() {
            warn!("S3_BUCKET or BG_IMAGE is not set. Skipping background download.");
            return;
        }

        if let Some(dir) = self.local_path.parent() {
            if let Err(err) = tokio::fs::create_dir_all(dir).await {
                error!("Failed to create {}: {}", dir.display(), err);
                return;
            }
        }

        if tokio::fs::try_exists(&self.local_path).await.unwrap_or(false) {
            return;
        }

        info!(
            "Downloading background image from s3://{}/{}",
            self.bucket, self.key
        );

        match self
            .source
            .download(&self.bucket, &self.key, &self.local_path)
            .await
        {
            Ok(()) => info!("Downloaded to {}", self.local_path.display()),
            Err(err) => error!(
                "Failed to download s3://{}/{}: {}",
                self.bucket, self.key, err
            ),
        }
    }
}
