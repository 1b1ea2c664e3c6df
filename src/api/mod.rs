// API layer - HTTP endpoints
pub mod clock_in;
pub mod health;
pub mod helpers;
pub mod items;

use std::sync::Arc;

pub use clock_in::ClockInApi;
pub use health::HealthApi;
pub use items::ItemsApi;
use poem::Route;
use poem_openapi::OpenApiService;

use crate::AppData;

/// Compose the full application route
///
/// The API is mounted at the server root; Swagger UI is nested under
/// `/swagger`. `server_url` is the externally reachable base URL advertised
/// in the generated OpenAPI document.
pub fn build_route(app_data: Arc<AppData>, server_url: &str) -> Route {
    let api_service = OpenApiService::new(
        (
            HealthApi,
            ItemsApi::new(Arc::clone(&app_data)),
            ClockInApi::new(Arc::clone(&app_data)),
        ),
        "Storeroom API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(server_url.to_string());

    let ui = api_service.swagger_ui();

    Route::new()
        .nest("/swagger", ui)
        .nest("/", api_service)
}
