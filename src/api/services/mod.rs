pub mod fallback;
pub mod health;

pub use fallback::not_found;
pub use health::{AppStartTime, HealthService, health_routes};
