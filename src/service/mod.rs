pub mod crud;
pub mod validation;

pub use crud::ProductService;
pub use validation::{validate_create, validate_update, NAME_MAX_LEN};
