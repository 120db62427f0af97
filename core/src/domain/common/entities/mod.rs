pub mod app_errors;
pub mod field_errors;
