use std::sync::Arc;

use poem::Request;
use poem_openapi::{OpenApi, Tags, payload::Json};

use crate::coordinators::ModerationCoordinator;
use crate::errors::ItemsError;
use crate::types::dto::admin::ItemIndexRequest;
use crate::types::dto::common::MessageResponse;
use crate::types::internal::context::RequestContext;

pub const LOST_APPROVED: &str = "Lost item approved!";
pub const LOST_REJECTED: &str = "Lost item rejected!";
pub const FOUND_ACCEPTED: &str = "Found item accepted!";
pub const UPDATE_FAILED: &str = "Failed to update item.";

/// Admin moderation endpoints
///
/// Records are addressed by position. A position read from an older listing
/// may point at a different record if the collection changed in between.
pub struct AdminApi {
    moderation_coordinator: Arc<ModerationCoordinator>,
}

impl AdminApi {
    pub fn new(moderation_coordinator: Arc<ModerationCoordinator>) -> Self {
        Self { moderation_coordinator }
    }
}

/// API tags for admin endpoints
#[derive(Tags)]
enum AdminTags {
    /// Item moderation
    Admin,
}

#[OpenApi(prefix_path = "/admin")]
impl AdminApi {
    /// Approve a lost item
    #[oai(path = "/lost/approve", method = "post", tag = "AdminTags::Admin")]
    async fn approve_lost(
        &self,
        req: &Request,
        body: Json<ItemIndexRequest>,
    ) -> Result<Json<MessageResponse>, ItemsError> {
        let ctx = RequestContext::from_request(req);

        self.moderation_coordinator
            .approve_lost(&ctx, body.0.index)
            .await
            .map_err(|e| ItemsError::from_internal(e, UPDATE_FAILED))?;

        Ok(Json(MessageResponse::new(LOST_APPROVED)))
    }

    /// Reject a lost item
    #[oai(path = "/lost/reject", method = "post", tag = "AdminTags::Admin")]
    async fn reject_lost(
        &self,
        req: &Request,
        body: Json<ItemIndexRequest>,
    ) -> Result<Json<MessageResponse>, ItemsError> {
        let ctx = RequestContext::from_request(req);

        self.moderation_coordinator
            .reject_lost(&ctx, body.0.index)
            .await
            .map_err(|e| ItemsError::from_internal(e, UPDATE_FAILED))?;

        Ok(Json(MessageResponse::new(LOST_REJECTED)))
    }

    /// Accept a found item
    #[oai(path = "/found/accept", method = "post", tag = "AdminTags::Admin")]
    async fn accept_found(
        &self,
        req: &Request,
        body: Json<ItemIndexRequest>,
    ) -> Result<Json<MessageResponse>, ItemsError> {
        let ctx = RequestContext::from_request(req);

        self.moderation_coordinator
            .accept_found(&ctx, body.0.index)
            .await
            .map_err(|e| ItemsError::from_internal(e, UPDATE_FAILED))?;

        Ok(Json(MessageResponse::new(FOUND_ACCEPTED)))
    }
}
