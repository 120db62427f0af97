pub mod build_meal_plan;
pub mod create_meal_plan;
pub mod delete_meal_plan;
pub mod get_home_meal_plans;
pub mod get_meal_plan;
pub mod get_meal_plans;
pub mod update_meal_plan;
