pub mod entities;
pub mod policies;
pub mod ports;
pub mod pricing;
pub mod services;
pub mod status;
pub mod validation;
pub mod value_objects;
