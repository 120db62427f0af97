use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    product::{
        entities::Product,
        value_objects::{CreateProductInput, ShopPage, ShopProductsFilter, UpdateProductInput},
    },
};

pub trait ProductService: Send + Sync {
    fn get_products(&self) -> impl Future<Output = Result<Vec<Product>, CoreError>> + Send;

    fn get_product(
        &self,
        product_id: Uuid,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn get_home_products(&self) -> impl Future<Output = Result<Vec<Product>, CoreError>> + Send;

    fn get_shop_products(
        &self,
        filter: ShopProductsFilter,
    ) -> impl Future<Output = Result<ShopPage<Product>, CoreError>> + Send;

    fn create_product(
        &self,
        identity: Identity,
        input: CreateProductInput,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn update_product(
        &self,
        identity: Identity,
        input: UpdateProductInput,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn delete_product(
        &self,
        identity: Identity,
        product_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ProductRepository: Send + Sync {
    /// Non-deleted products, most recently updated first.
    fn fetch_products(&self) -> impl Future<Output = Result<Vec<Product>, CoreError>> + Send;

    fn fetch_active_products(
        &self,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<Product>, CoreError>> + Send;

    /// One page of active products and the total matching the filter.
    fn fetch_shop_products(
        &self,
        filter: ShopProductsFilter,
        limit: u64,
    ) -> impl Future<Output = Result<(Vec<Product>, u64), CoreError>> + Send;

    fn get_product_by_id(
        &self,
        product_id: Uuid,
    ) -> impl Future<Output = Result<Option<Product>, CoreError>> + Send;

    fn get_product_by_sku(
        &self,
        sku: String,
    ) -> impl Future<Output = Result<Option<Product>, CoreError>> + Send;

    fn get_products_by_ids(
        &self,
        product_ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<Vec<Product>, CoreError>> + Send;

    fn create_product(
        &self,
        product: Product,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn update_product(
        &self,
        product: Product,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn delete_product(&self, product_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
