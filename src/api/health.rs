use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{OpenApi, Tags, payload::Json};

use crate::app_data::AppData;
use crate::coordinators::run_blocking;
use crate::types::db::{FoundItem, LostItem};
use crate::types::dto::common::HealthResponse;

/// Health check API
pub struct HealthApi {
    app_data: Arc<AppData>,
}

impl HealthApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self { app_data }
    }
}

/// API tags for health endpoints
#[derive(Tags)]
enum ApiTags {
    /// Health check endpoints
    Health,
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Reports `degraded` when either collection cannot be read.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health(&self) -> Json<HealthResponse> {
        let store = self.app_data.item_store.clone();
        let readable = run_blocking("health", move || {
            Ok(store.load::<LostItem>().is_ok() && store.load::<FoundItem>().is_ok())
        })
        .await
        .unwrap_or(false);

        Json(HealthResponse {
            status: if readable { "healthy" } else { "degraded" }.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}
