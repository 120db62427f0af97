use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "meal_plans")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub sku: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub image: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub breakfast_price_per_day: Decimal,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub lunch_price_per_day: Decimal,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub dinner_price_per_day: Decimal,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub snack_price_per_day: Decimal,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub meals: Option<Json>,
    pub status: String,
    pub is_deleted: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub deleted_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::orders::Entity")]
    Orders,
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
