use tracing::{info, instrument, warn};

use crate::domain::{
    authentication::{ports::TokenVerifier, value_objects::Identity},
    category::ports::CategoryRepository,
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    meal::ports::MealRepository,
    meal_plan::ports::MealPlanRepository,
    media::{
        entities::{MediaUpload, StoredImage},
        ports::{MediaService, ObjectStoragePort},
        value_objects::{CreateUploadUrlInput, UPLOAD_URL_TTL, sanitize_object_path},
    },
    order::ports::OrderRepository,
    product::ports::ProductRepository,
};

impl<CA, PR, ME, MP, OR, OS, TV, HC> MediaService for Service<CA, PR, ME, MP, OR, OS, TV, HC>
where
    CA: CategoryRepository,
    PR: ProductRepository,
    ME: MealRepository,
    MP: MealPlanRepository,
    OR: OrderRepository,
    OS: ObjectStoragePort,
    TV: TokenVerifier,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self, identity), fields(user_id = %identity.id()))]
    async fn create_upload_url(
        &self,
        identity: Identity,
        input: CreateUploadUrlInput,
    ) -> Result<MediaUpload, CoreError> {
        let path = input.object_key();

        let upload_url = self
            .object_storage
            .presign_put_url(&path, &input.content_type, UPLOAD_URL_TTL)
            .await?;

        info!(path = %path, "presigned upload url issued");

        Ok(MediaUpload {
            upload_url,
            public_url: self.object_storage.public_url(&path),
            path,
        })
    }

    #[instrument(skip(self, identity), fields(user_id = %identity.id()))]
    async fn get_image(&self, identity: Identity, path: String) -> Result<StoredImage, CoreError> {
        let path = sanitize_object_path(&path)?;

        info!(path = %path, "proxy image request");

        self.object_storage
            .get_object(&path)
            .await?
            .ok_or_else(|| {
                warn!(path = %path, "image not found in object storage");
                CoreError::NotFound
            })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use bytes::Bytes;

    use super::*;
    use crate::domain::{
        common::services::test_support::{Mocks, customer},
        media::{entities::PresignedUpload, value_objects::UPLOAD_URL_TTL},
    };

    #[tokio::test]
    async fn test_create_upload_url() {
        let mut mocks = Mocks::new();
        mocks
            .storage
            .expect_presign_put_url()
            .withf(|key, content_type, ttl| {
                key.starts_with("meals/") && content_type == "image/webp" && *ttl == UPLOAD_URL_TTL
            })
            .returning(|key, content_type, _| {
                let upload = PresignedUpload {
                    url: format!("https://bucket.test/{key}?X-Amz-Signature=abc"),
                    headers: BTreeMap::from([(
                        "content-type".to_string(),
                        content_type.to_string(),
                    )]),
                };
                Box::pin(async move { Ok(upload) })
            });
        mocks
            .storage
            .expect_public_url()
            .returning(|key| format!("https://cdn.test/{key}"));
        let service = mocks.into_service();

        let upload = service
            .create_upload_url(
                customer(),
                CreateUploadUrlInput {
                    content_type: "image/webp".to_string(),
                    filename: "salad.webp".to_string(),
                },
            )
            .await
            .unwrap();

        assert!(upload.path.starts_with("meals/") && upload.path.ends_with(".webp"));
        assert_eq!(upload.public_url, format!("https://cdn.test/{}", upload.path));
        assert_eq!(upload.upload_url.headers["content-type"], "image/webp");
    }

    #[tokio::test]
    async fn test_missing_image_is_not_found() {
        let mut mocks = Mocks::new();
        mocks
            .storage
            .expect_get_object()
            .returning(|_| Box::pin(async { Ok(None) }));
        let service = mocks.into_service();

        let result = service
            .get_image(customer(), "meals/missing.png".to_string())
            .await;

        assert!(matches!(result, Err(CoreError::NotFound)));
    }

    #[tokio::test]
    async fn test_get_image_returns_object() {
        let mut mocks = Mocks::new();
        mocks
            .storage
            .expect_get_object()
            .withf(|key| key == "meals/a.png")
            .returning(|_| {
                Box::pin(async {
                    Ok(Some(StoredImage {
                        content_type: Some("image/png".to_string()),
                        body: Bytes::from_static(b"png"),
                    }))
                })
            });
        let service = mocks.into_service();

        let image = service
            .get_image(customer(), "/meals/a.png".to_string())
            .await
            .unwrap();

        assert_eq!(image.body, Bytes::from_static(b"png"));
    }
}
