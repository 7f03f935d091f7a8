//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes: the server-rendered pages and their form
//! posts, the stylesheet, and the read-only JSON API. API endpoints are registered with their
//! OpenAPI specifications through utoipa, and Swagger UI serves interactive documentation at
//! `/api/docs`.

use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router.
///
/// # Registered Endpoints
/// - `GET|POST /login`, `GET /logout` - Sign in and out
/// - `GET /` - Dashboard, `POST /racks` - Create rack
/// - `GET /racks/{rack_id}` and `POST .../edit`, `.../delete`, `.../equipment`
/// - `GET /equipment/{equipment_id}` and `POST .../edit`, `.../delete`, `.../ports`
/// - `POST /ports/{port_id}/delete`, `.../connect`, `.../disconnect`
/// - `GET /connections` - Connection list
/// - `GET /profile`, `POST /profile/password`, `POST /profile/theme`
/// - `GET /static/style.css` - Stylesheet
/// - `GET /api/racks`, `/api/racks/{rack_id}`, `/api/equipment/{equipment_id}`,
///   `/api/connections` - JSON API, documented at `/api/docs`
///
/// Unknown paths render the 404 page.
///
/// # Returns
/// An Axum `Router<AppState>`; the caller provides the state and the session layer.
///
/// # Example
/// ```ignore
/// let router = routes()
///     .with_state(AppState { db, password_hash_cost })
///     .layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "DocRack", description = "DocRack read-only API"), tags(
        (name = controller::api::RACK_TAG, description = "Racks and mounted equipment"),
        (name = controller::api::CONNECTION_TAG, description = "Cables between ports"),
    ))]
    struct ApiDoc;

    let (api_routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::api::list_racks))
        .routes(routes!(controller::api::get_rack))
        .routes(routes!(controller::api::get_equipment))
        .routes(routes!(controller::api::list_connections))
        .split_for_parts();

    Router::new()
        .route(
            "/login",
            get(controller::auth::login_form).post(controller::auth::login),
        )
        .route("/logout", get(controller::auth::logout))
        .route("/", get(controller::rack::dashboard))
        .route("/racks", post(controller::rack::create_rack))
        .route("/racks/{rack_id}", get(controller::rack::view_rack))
        .route("/racks/{rack_id}/edit", post(controller::rack::edit_rack))
        .route("/racks/{rack_id}/delete", post(controller::rack::delete_rack))
        .route(
            "/racks/{rack_id}/equipment",
            post(controller::equipment::create_equipment),
        )
        .route(
            "/equipment/{equipment_id}",
            get(controller::equipment::view_equipment),
        )
        .route(
            "/equipment/{equipment_id}/edit",
            post(controller::equipment::edit_equipment),
        )
        .route(
            "/equipment/{equipment_id}/delete",
            post(controller::equipment::delete_equipment),
        )
        .route(
            "/equipment/{equipment_id}/ports",
            post(controller::port::add_ports),
        )
        .route("/ports/{port_id}/delete", post(controller::port::delete_port))
        .route("/ports/{port_id}/connect", post(controller::port::connect_port))
        .route(
            "/ports/{port_id}/disconnect",
            post(controller::port::disconnect_port),
        )
        .route("/connections", get(controller::connection::connections))
        .route("/profile", get(controller::profile::profile))
        .route("/profile/password", post(controller::profile::change_password))
        .route("/profile/theme", post(controller::profile::set_theme))
        .route("/static/style.css", get(controller::asset::stylesheet))
        .merge(api_routes)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .fallback(controller::asset::not_found)
}
