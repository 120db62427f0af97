use std::time::Duration;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    media::{
        entities::{MediaUpload, PresignedUpload, StoredImage},
        value_objects::CreateUploadUrlInput,
    },
};

pub trait MediaService: Send + Sync {
    fn create_upload_url(
        &self,
        identity: Identity,
        input: CreateUploadUrlInput,
    ) -> impl Future<Output = Result<MediaUpload, CoreError>> + Send;

    fn get_image(
        &self,
        identity: Identity,
        path: String,
    ) -> impl Future<Output = Result<StoredImage, CoreError>> + Send;
}

/// S3-compatible object storage holding uploaded media.
#[cfg_attr(test, mockall::automock)]
pub trait ObjectStoragePort: Send + Sync {
    /// Presigned PUT bound to `content_type`.
    fn presign_put_url(
        &self,
        object_key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> impl Future<Output = Result<PresignedUpload, CoreError>> + Send;

    fn public_url(&self, object_key: &str) -> String;

    /// `None` when no object exists under `object_key`.
    fn get_object(
        &self,
        object_key: &str,
    ) -> impl Future<Output = Result<Option<StoredImage>, CoreError>> + Send;
}
