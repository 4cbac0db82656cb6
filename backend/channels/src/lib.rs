pub mod line;
pub mod parse;
pub mod render;
pub mod send;

pub use line::{LineAdapter, LineConfig};
pub use send::LineClient;

/// All channel adapters implement this trait.
pub trait ChannelAdapter: Send + Sync {
    /// Human-readable adapter name for logging.
    fn name(&self) -> &str;

    /// Build an Axum sub-router for inbound webhook endpoints.
    fn build_router(&self) -> axum::Router;
}
