use std::sync::Arc;

use crate::app_data::AppData;
use crate::coordinators::run_blocking;
use crate::errors::InternalError;
use crate::stores::ItemStore;
use crate::types::db::ItemRecord;
use crate::types::internal::context::RequestContext;

/// Public-facing workflows: listing collections and submitting new reports
pub struct ItemsCoordinator {
    item_store: ItemStore,
}

impl ItemsCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            item_store: app_data.item_store.clone(),
        }
    }

    /// Load the whole collection holding `R`
    pub async fn list<R: ItemRecord>(&self, ctx: &RequestContext) -> Result<Vec<R>, InternalError> {
        let store = self.item_store.clone();
        let records = run_blocking("list", move || store.load::<R>()).await?;

        tracing::debug!(
            request_id = %ctx.request_id,
            collection = %R::COLLECTION,
            count = records.len(),
            "Listed collection"
        );

        Ok(records)
    }

    /// Append a newly reported record, returning its position
    ///
    /// The record's status is forced to pending whatever the caller passed.
    pub async fn report<R: ItemRecord>(
        &self,
        ctx: &RequestContext,
        mut record: R,
    ) -> Result<usize, InternalError> {
        record.set_status(Default::default());

        let store = self.item_store.clone();
        let position = run_blocking("report", move || {
            let mut records = store.load::<R>()?;
            records.push(record);
            store.save(&records)?;
            Ok(records.len() - 1)
        })
        .await?;

        tracing::info!(
            request_id = %ctx.request_id,
            actor = %ctx.actor_id,
            collection = %R::COLLECTION,
            index = position,
            "New item reported"
        );

        Ok(position)
    }
}
