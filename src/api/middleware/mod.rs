pub mod request_id;
pub mod short_link;

pub use request_id::{RequestId, RequestIdMiddleware};
pub use short_link::ShortLinkGateway;
