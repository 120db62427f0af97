pub mod auth;
pub mod category;
pub mod db;
pub mod health;
pub mod meal;
pub mod meal_plan;
pub mod object_storage;
pub mod order;
pub mod product;
pub mod seed;
