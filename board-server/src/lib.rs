pub mod api;
pub mod error;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::error::{ApiError, Result as ApiResult};
pub use routes::build_router;
pub use state::AppState;
