//! `SeaORM` entity models for the pantry schema.

pub mod categories;
pub mod meal_plans;
pub mod meals;
pub mod orders;
pub mod products;
