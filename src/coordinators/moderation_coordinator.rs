use std::sync::Arc;

use serde_json::Value;

use crate::app_data::AppData;
use crate::coordinators::run_blocking;
use crate::errors::InternalError;
use crate::errors::internal::ItemError;
use crate::stores::ItemStore;
use crate::types::db::{FoundItem, ItemRecord, ItemStatus, LostItem};
use crate::types::internal::context::RequestContext;
use crate::types::internal::resolve_position;

/// Admin workflows that overwrite the status of a record at a position
///
/// There is no transition table: any status can be written over any other,
/// and repeating an action succeeds again with the same result.
pub struct ModerationCoordinator {
    item_store: ItemStore,
}

impl ModerationCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            item_store: app_data.item_store.clone(),
        }
    }

    pub async fn approve_lost(&self, ctx: &RequestContext, index: Option<Value>) -> Result<usize, InternalError> {
        self.set_status::<LostItem>(ctx, index, ItemStatus::Approved).await
    }

    pub async fn reject_lost(&self, ctx: &RequestContext, index: Option<Value>) -> Result<usize, InternalError> {
        self.set_status::<LostItem>(ctx, index, ItemStatus::Rejected).await
    }

    pub async fn accept_found(&self, ctx: &RequestContext, index: Option<Value>) -> Result<usize, InternalError> {
        self.set_status::<FoundItem>(ctx, index, ItemStatus::Accepted).await
    }

    /// Overwrite the status of the record at `index`
    ///
    /// Coordinates the sequence of operations:
    /// 1. Load the full collection
    /// 2. Resolve the index against the current length
    /// 3. Overwrite the status field
    /// 4. Save the full collection
    ///
    /// When the index does not resolve, nothing is written.
    ///
    /// # Returns
    /// * `Ok(position)` - Position that was updated
    /// * `Err(InternalError::Item)` - Index does not resolve to a record
    /// * `Err(InternalError)` - Collection could not be read or written
    pub async fn set_status<R: ItemRecord>(
        &self,
        ctx: &RequestContext,
        index: Option<Value>,
        status: ItemStatus,
    ) -> Result<usize, InternalError> {
        let store = self.item_store.clone();
        let new_status = status.clone();

        let position = run_blocking("set_status", move || {
            let mut records = store.load::<R>()?;

            let position = resolve_position(index.as_ref(), records.len()).ok_or_else(|| {
                let requested = index
                    .as_ref()
                    .map(Value::to_string)
                    .unwrap_or_else(|| "<missing>".to_string());
                ItemError::not_found(R::COLLECTION, requested)
            })?;

            records[position].set_status(new_status);
            store.save(&records)?;
            Ok(position)
        })
        .await?;

        tracing::info!(
            request_id = %ctx.request_id,
            actor = %ctx.actor_id,
            collection = %R::COLLECTION,
            index = position,
            status = %status,
            "Item status updated"
        );

        Ok(position)
    }
}
