// API layer - HTTP endpoints
pub mod admin;
pub mod health;
pub mod items;

use std::sync::Arc;

pub use admin::AdminApi;
pub use health::HealthApi;
pub use items::ItemsApi;

use poem::middleware::{Cors, Tracing};
use poem::{Endpoint, EndpointExt, Route};
use poem_openapi::OpenApiService;

use crate::app_data::AppData;
use crate::coordinators::{ItemsCoordinator, ModerationCoordinator};

/// Compose the full route tree
///
/// Item endpoints sit at the root (`/lost`, `/found`, `/admin/...`), the
/// Swagger UI under `/swagger` and the raw document at `/openapi.json`.
/// CORS is open to any origin.
pub fn build_routes(app_data: Arc<AppData>) -> impl Endpoint {
    let items_coordinator = Arc::new(ItemsCoordinator::new(app_data.clone()));
    let moderation_coordinator = Arc::new(ModerationCoordinator::new(app_data.clone()));

    let api_service = OpenApiService::new(
        (
            HealthApi::new(app_data),
            ItemsApi::new(items_coordinator),
            AdminApi::new(moderation_coordinator),
        ),
        "Lost & Found API",
        env!("CARGO_PKG_VERSION"),
    );

    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    Route::new()
        .nest("/swagger", ui)
        .at("/openapi.json", spec)
        .nest("/", api_service)
        .with(Cors::new())
        .with(Tracing)
}
