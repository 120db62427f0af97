use std::{collections::BTreeMap, time::Duration};

use aws_sdk_s3::{
    Client,
    config::{BehaviorVersion, Credentials, Region},
    presigning::PresigningConfig,
};
use tracing::instrument;

use crate::domain::{
    common::{ObjectStorageConfig, entities::app_errors::CoreError},
    media::{
        entities::{PresignedUpload, StoredImage},
        ports::ObjectStoragePort,
    },
};

#[derive(Clone)]
pub struct S3ObjectStorage {
    client: Client,
    bucket: String,
    public_base_url: String,
}

impl S3ObjectStorage {
    pub fn new(config: ObjectStorageConfig) -> Self {
        let credentials =
            Credentials::new(&config.access_key, &config.secret_key, None, None, "pantry");

        let endpoint = config.endpoint.trim_end_matches('/');

        tracing::info!(
            endpoint = %endpoint,
            region = %config.region,
            bucket = %config.bucket,
            "Initializing S3 client"
        );

        let s3_config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .endpoint_url(endpoint)
            .force_path_style(true)
            .build();

        Self {
            client: Client::from_conf(s3_config),
            bucket: config.bucket,
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
        }
    }
}

/// Signed headers the client must replay, keyed by lowercase name, with the
/// content type always present.
fn upload_headers<'a>(
    signed: impl Iterator<Item = (&'a str, &'a str)>,
    content_type: &str,
) -> BTreeMap<String, String> {
    let mut headers: BTreeMap<String, String> = signed
        .map(|(name, value)| (name.to_ascii_lowercase(), value.to_string()))
        .collect();
    headers
        .entry("content-type".to_string())
        .or_insert_with(|| content_type.to_string());
    headers
}

impl ObjectStoragePort for S3ObjectStorage {
    #[instrument(skip(self))]
    async fn presign_put_url(
        &self,
        object_key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> Result<PresignedUpload, CoreError> {
        let presigning_config = PresigningConfig::expires_in(expires_in)
            .map_err(|e| CoreError::ObjectStorageError(format!("Invalid expiration: {}", e)))?;

        let presigned_request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(object_key)
            .content_type(content_type)
            .presigned(presigning_config)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    object_key = %object_key,
                    "Failed to generate presigned PUT URL"
                );
                CoreError::ObjectStorageError(format!("Failed to generate presigned URL: {}", e))
            })?;

        Ok(PresignedUpload {
            url: presigned_request.uri().to_string(),
            headers: upload_headers(presigned_request.headers(), content_type),
        })
    }

    fn public_url(&self, object_key: &str) -> String {
        format!("{}/{}", self.public_base_url, object_key)
    }

    #[instrument(skip(self))]
    async fn get_object(&self, object_key: &str) -> Result<Option<StoredImage>, CoreError> {
        let output = match self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(object_key)
            .send()
            .await
        {
            Ok(output) => output,
            Err(e) if e.as_service_error().is_some_and(|se| se.is_no_such_key()) => {
                return Ok(None);
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    object_key = %object_key,
                    "Failed to fetch object"
                );
                return Err(CoreError::ObjectStorageError(format!(
                    "Failed to fetch object: {}",
                    e
                )));
            }
        };

        let content_type = output.content_type().map(str::to_string);
        let body = output
            .body
            .collect()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, object_key = %object_key, "Failed to read object body");
                CoreError::ObjectStorageError(format!("Failed to read object: {}", e))
            })?
            .into_bytes();

        Ok(Some(StoredImage { content_type, body }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_content_type_is_not_duplicated() {
        let signed = [("content-type", "image/png"), ("X-Amz-Acl", "public-read")];

        let headers = upload_headers(signed.into_iter(), "image/png");

        assert_eq!(headers.len(), 2);
        assert_eq!(headers["content-type"], "image/png");
        assert_eq!(headers["x-amz-acl"], "public-read");
    }

    #[test]
    fn test_content_type_is_added_when_unsigned() {
        let headers = upload_headers(std::iter::empty(), "image/webp");

        assert_eq!(headers["content-type"], "image/webp");
    }
}
