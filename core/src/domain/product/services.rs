use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    authentication::{ports::TokenVerifier, value_objects::Identity},
    category::ports::CategoryRepository,
    common::{
        entities::{app_errors::CoreError, field_errors::FieldErrors},
        policies::{CatalogPolicy, ensure_policy},
        services::Service,
        value_objects::PageInfo,
    },
    health::ports::HealthCheckRepository,
    meal::ports::MealRepository,
    meal_plan::ports::MealPlanRepository,
    media::ports::ObjectStoragePort,
    order::ports::OrderRepository,
    product::{
        entities::Product,
        ports::{ProductRepository, ProductService},
        value_objects::{
            CreateProductInput, HOME_PRODUCTS, ProductAttributes, SHOP_PAGE_SIZE, ShopPage,
            ShopProductsFilter, UpdateProductInput,
        },
    },
};

impl<CA, PR, ME, MP, OR, OS, TV, HC> Service<CA, PR, ME, MP, OR, OS, TV, HC>
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
    /// Field checks plus sku uniqueness (ignoring `current`) and category existence.
    async fn check_product_attributes(
        &self,
        attributes: &ProductAttributes,
        current: Option<Uuid>,
    ) -> Result<(), CoreError> {
        let mut errors = attributes.validate();

        if let Some(existing) = self
            .product_repository
            .get_product_by_sku(attributes.sku.clone())
            .await?
            && Some(existing.id) != current
        {
            errors.add("sku", "The SKU must be unique.");
        }

        let category = self
            .category_repository
            .get_category_by_id(attributes.category_id)
            .await?;
        if category.is_none_or(|c| c.is_deleted) {
            errors.add("category_id", "The selected category does not exist.");
        }

        errors.into_result().map_err(CoreError::from)
    }
}

impl<CA, PR, ME, MP, OR, OS, TV, HC> ProductService for Service<CA, PR, ME, MP, OR, OS, TV, HC>
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
    async fn get_products(&self) -> Result<Vec<Product>, CoreError> {
        self.product_repository.fetch_products().await
    }

    async fn get_product(&self, product_id: Uuid) -> Result<Product, CoreError> {
        self.product_repository
            .get_product_by_id(product_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn get_home_products(&self) -> Result<Vec<Product>, CoreError> {
        self.product_repository
            .fetch_active_products(HOME_PRODUCTS)
            .await
    }

    #[instrument(skip(self))]
    async fn get_shop_products(
        &self,
        filter: ShopProductsFilter,
    ) -> Result<ShopPage<Product>, CoreError> {
        let offset = filter.offset;
        let (data, total) = self
            .product_repository
            .fetch_shop_products(filter, SHOP_PAGE_SIZE)
            .await?;

        Ok(ShopPage {
            data,
            pagination: PageInfo::new(total, offset, SHOP_PAGE_SIZE),
        })
    }

    #[instrument(skip(self, identity), fields(sku = %input.attributes.sku))]
    async fn create_product(
        &self,
        identity: Identity,
        input: CreateProductInput,
    ) -> Result<Product, CoreError> {
        ensure_policy(
            self.policy.can_manage_catalog(&identity),
            "insufficient permissions",
        )?;

        self.check_product_attributes(&input.attributes, None)
            .await?;

        let product = Product::new(input.attributes);
        self.product_repository.create_product(product).await
    }

    #[instrument(skip(self, identity), fields(product_id = %input.product_id))]
    async fn update_product(
        &self,
        identity: Identity,
        input: UpdateProductInput,
    ) -> Result<Product, CoreError> {
        ensure_policy(
            self.policy.can_manage_catalog(&identity),
            "insufficient permissions",
        )?;

        let mut product = self
            .product_repository
            .get_product_by_id(input.product_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.check_product_attributes(&input.attributes, Some(product.id))
            .await?;

        product.update(input.attributes);
        self.product_repository.update_product(product).await
    }

    #[instrument(skip(self, identity))]
    async fn delete_product(&self, identity: Identity, product_id: Uuid) -> Result<(), CoreError> {
        ensure_policy(
            self.policy.can_manage_catalog(&identity),
            "insufficient permissions",
        )?;

        self.product_repository
            .get_product_by_id(product_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.product_repository.delete_product(product_id).await
    }
}
