pub mod category;
pub mod health;
pub mod meal;
pub mod meal_plan;
pub mod media;
pub mod order;
pub mod product;
pub mod server;
