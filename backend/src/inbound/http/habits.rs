//! JSON habit API.
//!
//! ```text
//! GET    /api/habits
//! GET    /api/habits/{id}
//! POST   /api/habits
//! PUT    /api/habits/{id}
//! DELETE /api/habits/{id}
//! ```

use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, Habit};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_habit_draft, parse_habit_id};

/// Request payload for creating or updating a habit.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct HabitRequestBody {
    /// Must contain at least one non-whitespace character.
    #[serde(default)]
    pub name: String,
    /// Defaults to the empty string.
    #[serde(default)]
    pub description: Option<String>,
}

/// Habit as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct HabitResponseBody {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Read")]
    pub name: String,
    #[schema(example = "20 pages")]
    pub description: String,
    #[schema(format = "date-time")]
    pub created_at: String,
}

impl From<Habit> for HabitResponseBody {
    fn from(value: Habit) -> Self {
        Self {
            id: value.id().as_i32(),
            name: value.name().as_str().to_owned(),
            description: value.description().to_owned(),
            created_at: value.created_at().to_rfc3339(),
        }
    }
}

/// Confirmation returned by delete.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct DeleteResponseBody {
    #[schema(example = "habit deleted")]
    pub message: String,
}

/// Update failures, including an unknown id, surface as 500 on this API.
fn update_failure(error: Error) -> Error {
    if error.code() == ErrorCode::NotFound {
        Error::internal(error.message())
    } else {
        error
    }
}

/// List every habit, newest first.
#[utoipa::path(
    get,
    path = "/api/habits",
    responses(
        (status = 200, description = "All habits, newest first", body = [HabitResponseBody]),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["habits"],
    operation_id = "listHabits"
)]
#[get("/habits")]
pub async fn list_habits(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<HabitResponseBody>>> {
    let habits = state.habits_query.list().await?;
    Ok(web::Json(
        habits.into_iter().map(HabitResponseBody::from).collect(),
    ))
}

/// Fetch one habit.
#[utoipa::path(
    get,
    path = "/api/habits/{id}",
    params(("id" = i32, Path, description = "Habit identifier")),
    responses(
        (status = 200, description = "Habit", body = HabitResponseBody),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 404, description = "No such habit", body = ErrorSchema),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["habits"],
    operation_id = "getHabit"
)]
#[get("/habits/{id}")]
pub async fn get_habit(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<HabitResponseBody>> {
    let id = parse_habit_id(path.as_str())?;
    let habit = state.habits_query.get(id).await?;
    Ok(web::Json(HabitResponseBody::from(habit)))
}

/// Create a habit.
#[utoipa::path(
    post,
    path = "/api/habits",
    request_body = HabitRequestBody,
    responses(
        (status = 200, description = "Habit created", body = HabitResponseBody),
        (status = 400, description = "Blank name or malformed body", body = ErrorSchema),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["habits"],
    operation_id = "createHabit"
)]
#[post("/habits")]
pub async fn create_habit(
    state: web::Data<HttpState>,
    payload: web::Json<HabitRequestBody>,
) -> ApiResult<web::Json<HabitResponseBody>> {
    let HabitRequestBody { name, description } = payload.into_inner();
    let draft = parse_habit_draft(name, description)?;
    let habit = state.habits.create(draft).await?;
    Ok(web::Json(HabitResponseBody::from(habit)))
}

/// Replace a habit's name and description.
#[utoipa::path(
    put,
    path = "/api/habits/{id}",
    params(("id" = i32, Path, description = "Habit identifier")),
    request_body = HabitRequestBody,
    responses(
        (status = 200, description = "Habit updated", body = HabitResponseBody),
        (status = 400, description = "Malformed id or body", body = ErrorSchema),
        (status = 500, description = "Update failed, including unknown ids", body = ErrorSchema)
    ),
    tags = ["habits"],
    operation_id = "updateHabit"
)]
#[put("/habits/{id}")]
pub async fn update_habit(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<HabitRequestBody>,
) -> ApiResult<web::Json<HabitResponseBody>> {
    let id = parse_habit_id(path.as_str())?;
    let HabitRequestBody { name, description } = payload.into_inner();
    let draft = parse_habit_draft(name, description)?;
    let habit = state
        .habits
        .update(id, draft)
        .await
        .map_err(update_failure)?;
    Ok(web::Json(HabitResponseBody::from(habit)))
}

/// Delete a habit. Unknown ids succeed.
#[utoipa::path(
    delete,
    path = "/api/habits/{id}",
    params(("id" = i32, Path, description = "Habit identifier")),
    responses(
        (status = 200, description = "Habit deleted", body = DeleteResponseBody),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["habits"],
    operation_id = "deleteHabit"
)]
#[delete("/habits/{id}")]
pub async fn delete_habit(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeleteResponseBody>> {
    let id = parse_habit_id(path.as_str())?;
    state.habits.delete(id).await?;
    Ok(web::Json(DeleteResponseBody {
        message: "habit deleted".to_owned(),
    }))
}

#[cfg(test)]
#[path = "habits_tests.rs"]
mod tests;
