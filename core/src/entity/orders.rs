use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub order_type: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub client_info: Json,
    pub client_email: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub line_items: Json,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub subtotal: Decimal,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub tax: Decimal,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub total: Decimal,
    pub status: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub status_history: Json,
    pub meal_plan_id: Option<Uuid>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub subscription: Option<Json>,
    pub validated_at: Option<DateTime>,
    pub validated_by: Option<Uuid>,
    #[sea_orm(column_type = "Text", nullable)]
    pub validation_comment: Option<String>,
    pub created_by: Uuid,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::meal_plans::Entity",
        from = "Column::MealPlanId",
        to = "super::meal_plans::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    MealPlans,
}

impl Related<super::meal_plans::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MealPlans.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
