pub mod context;
pub mod position;

pub use context::{RequestContext, RequestId, RequestSource};
pub use position::resolve_position;
