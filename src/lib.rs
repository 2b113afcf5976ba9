//! Product catalog REST API: CRUD over a PostgreSQL `products` table.

pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use error::{AppError, FieldError};
pub use model::{Product, ProductDraft};
pub use routes::{common_routes, product_routes};
pub use service::ProductService;
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_products_table};
