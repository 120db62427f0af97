use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    category::{
        entities::Category,
        value_objects::{CreateCategoryInput, UpdateCategoryInput},
    },
    common::entities::app_errors::CoreError,
};

pub trait CategoryService: Send + Sync {
    fn get_categories(&self) -> impl Future<Output = Result<Vec<Category>, CoreError>> + Send;

    fn get_category(
        &self,
        category_id: Uuid,
    ) -> impl Future<Output = Result<Category, CoreError>> + Send;

    /// Categories holding at least one active product.
    fn get_shop_categories(&self)
    -> impl Future<Output = Result<Vec<Category>, CoreError>> + Send;

    fn create_category(
        &self,
        identity: Identity,
        input: CreateCategoryInput,
    ) -> impl Future<Output = Result<Category, CoreError>> + Send;

    fn update_category(
        &self,
        identity: Identity,
        input: UpdateCategoryInput,
    ) -> impl Future<Output = Result<Category, CoreError>> + Send;

    fn delete_category(
        &self,
        identity: Identity,
        category_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait CategoryRepository: Send + Sync {
    fn fetch_categories(&self) -> impl Future<Output = Result<Vec<Category>, CoreError>> + Send;

    fn fetch_categories_with_active_products(
        &self,
    ) -> impl Future<Output = Result<Vec<Category>, CoreError>> + Send;

    fn get_category_by_id(
        &self,
        category_id: Uuid,
    ) -> impl Future<Output = Result<Option<Category>, CoreError>> + Send;

    fn create_category(
        &self,
        category: Category,
    ) -> impl Future<Output = Result<Category, CoreError>> + Send;

    fn update_category(
        &self,
        category: Category,
    ) -> impl Future<Output = Result<Category, CoreError>> + Send;

    fn delete_category(&self, category_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
