pub mod comments;
pub mod error;
pub mod routes;
pub mod state;
pub mod validate;

pub use error::ApiError;
pub use routes::router;
pub use state::{AppState, AppStateInner};
