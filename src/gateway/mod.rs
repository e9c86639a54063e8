//! Short-link gateway
//!
//! Decides per request whether a path belongs to the application or is an
//! opaque short code that must be handed to the backend resolver.

pub mod decision;
pub mod prefixes;

use arc_swap::ArcSwap;
use std::sync::Arc;

pub use decision::{PassReason, RedirectGateway, RouteDecision, resolver_url, validate_backend};
pub use prefixes::{DEFAULT_RESERVED_PREFIXES, ReservedPrefixes};

/// Shared, atomically swappable gateway.
///
/// Readers take a snapshot per request; reload replaces the whole gateway.
#[derive(Clone)]
pub struct GatewayHandle {
    inner: Arc<ArcSwap<RedirectGateway>>,
}

impl GatewayHandle {
    pub fn new(gateway: RedirectGateway) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(gateway)),
        }
    }

    #[inline]
    pub fn load(&self) -> Arc<RedirectGateway> {
        self.inner.load_full()
    }

    pub fn store(&self, gateway: RedirectGateway) {
        self.inner.store(Arc::new(gateway));
    }
}

impl std::fmt::Debug for GatewayHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("GatewayHandle").field(&self.load()).finish()
    }
}
