mod routes;

pub use routes::{Accepted, AppState, router};
