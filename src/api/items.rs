use std::sync::Arc;

use poem::Request;
use poem_openapi::{OpenApi, Tags, payload::Json};

use crate::coordinators::ItemsCoordinator;
use crate::errors::ItemsError;
use crate::types::db::{FoundItem, LostItem};
use crate::types::dto::common::MessageResponse;
use crate::types::dto::items::{
    FoundListResponse, LostListResponse, ReportFoundRequest, ReportLostRequest, listing,
};
use crate::types::internal::context::RequestContext;

pub const LOST_REPORTED: &str = "Lost item reported successfully. We will notify you if it is found.";
pub const LOST_REPORT_FAILED: &str = "Failed to report lost item.";
pub const FOUND_SUBMITTED: &str = "Found item submitted successfully. Thank you for helping.";
pub const FOUND_SUBMIT_FAILED: &str = "Failed to submit found item.";

/// Public endpoints for listing and reporting items
pub struct ItemsApi {
    items_coordinator: Arc<ItemsCoordinator>,
}

impl ItemsApi {
    pub fn new(items_coordinator: Arc<ItemsCoordinator>) -> Self {
        Self { items_coordinator }
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ApiTags {
    /// Lost item reports
    Lost,
    /// Found item submissions
    Found,
}

#[OpenApi]
impl ItemsApi {
    /// List lost items
    ///
    /// Positions in the returned array are the indices the admin endpoints expect.
    #[oai(path = "/lost", method = "get", tag = "ApiTags::Lost")]
    async fn list_lost(&self, req: &Request) -> LostListResponse {
        let ctx = RequestContext::from_request(req);

        let listed = self
            .items_coordinator
            .list::<LostItem>(&ctx)
            .await
            .and_then(|records| listing(&records));

        match listed {
            Ok(records) => LostListResponse::Ok(Json(records)),
            Err(e) => {
                tracing::error!(request_id = %ctx.request_id, "Failed to list lost items: {}", e);
                LostListResponse::StorageFailure(Json(Vec::new()))
            }
        }
    }

    /// Report a lost item
    ///
    /// The color may be sent as `colour` or `color`; the first non-empty one is stored.
    #[oai(path = "/lost", method = "post", tag = "ApiTags::Lost")]
    async fn report_lost(
        &self,
        req: &Request,
        body: Json<ReportLostRequest>,
    ) -> Result<Json<MessageResponse>, ItemsError> {
        let ctx = RequestContext::from_request(req);

        self.items_coordinator
            .report(&ctx, LostItem::from(body.0))
            .await
            .map_err(|e| ItemsError::from_internal(e, LOST_REPORT_FAILED))?;

        Ok(Json(MessageResponse::new(LOST_REPORTED)))
    }

    /// List found items
    #[oai(path = "/found", method = "get", tag = "ApiTags::Found")]
    async fn list_found(&self, req: &Request) -> FoundListResponse {
        let ctx = RequestContext::from_request(req);

        let listed = self
            .items_coordinator
            .list::<FoundItem>(&ctx)
            .await
            .and_then(|records| listing(&records));

        match listed {
            Ok(records) => FoundListResponse::Ok(Json(records)),
            Err(e) => {
                tracing::error!(request_id = %ctx.request_id, "Failed to list found items: {}", e);
                FoundListResponse::StorageFailure(Json(Vec::new()))
            }
        }
    }

    /// Hand in a found item
    #[oai(path = "/found", method = "post", tag = "ApiTags::Found")]
    async fn report_found(
        &self,
        req: &Request,
        body: Json<ReportFoundRequest>,
    ) -> Result<Json<MessageResponse>, ItemsError> {
        let ctx = RequestContext::from_request(req);

        self.items_coordinator
            .report(&ctx, FoundItem::from(body.0))
            .await
            .map_err(|e| ItemsError::from_internal(e, FOUND_SUBMIT_FAILED))?;

        Ok(Json(MessageResponse::new(FOUND_SUBMITTED)))
    }
}
