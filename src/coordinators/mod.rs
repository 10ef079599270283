// Coordinators layer - Workflow orchestration
//
// Coordinators run one load -> mutate -> save cycle per call. The cycle is
// moved onto a blocking worker so file I/O does not stall the runtime; it is
// not serialized against other cycles on the same collection.

pub mod items_coordinator;
pub mod moderation_coordinator;

pub use items_coordinator::ItemsCoordinator;
pub use moderation_coordinator::ModerationCoordinator;

use crate::errors::InternalError;

/// Run a store cycle on the blocking pool
pub(crate) async fn run_blocking<T, F>(operation: &'static str, f: F) -> Result<T, InternalError>
where
    F: FnOnce() -> Result<T, InternalError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| InternalError::task(operation, e))?
}
