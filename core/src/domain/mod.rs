pub mod authentication;
pub mod category;
pub mod common;
pub mod health;
pub mod meal;
pub mod meal_plan;
pub mod media;
pub mod order;
pub mod product;
