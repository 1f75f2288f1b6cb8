//! OpenAPI document for the JSON habit API and the health probes.
//!
//! Served by Swagger UI at `/docs` and printed by the `openapi-dump` binary.
//! The htmx page routes return HTML and are left out.

use utoipa::OpenApi;

use crate::inbound::http::habits::{DeleteResponseBody, HabitRequestBody, HabitResponseBody};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Habit Tracker API",
        description = "Create, list, update and delete habits."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::habits::list_habits,
        crate::inbound::http::habits::get_habit,
        crate::inbound::http::habits::create_habit,
        crate::inbound::http::habits::update_habit,
        crate::inbound::http::habits::delete_habit,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        HabitRequestBody,
        HabitResponseBody,
        DeleteResponseBody,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "habits", description = "Habit CRUD"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
