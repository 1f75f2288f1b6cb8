//! Server-rendered habit pages for the htmx front end.
//!
//! Every handler answers with the habit list. Requests carrying
//! `HX-Request: true` get only the table rows so htmx can swap them in place;
//! other requests get the full page.

use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use askama::Template;
use serde::Deserialize;

use crate::domain::{Error, Habit, HabitId};
use crate::inbound::http::error::{PageError, PageResult};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_habit_draft, parse_habit_id};

/// Header htmx sets on the requests it issues.
pub const HX_REQUEST_HEADER: &str = "HX-Request";

/// Form fields submitted by the create and edit forms.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HabitForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// One table row as the templates see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitRowView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub created_at: String,
    pub editing: bool,
}

impl HabitRowView {
    fn new(habit: &Habit, editing: Option<HabitId>) -> Self {
        Self {
            id: habit.id().as_i32(),
            name: habit.name().as_str().to_owned(),
            description: habit.description().to_owned(),
            created_at: habit.created_at().format("%Y-%m-%d %H:%M").to_string(),
            editing: editing == Some(habit.id()),
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexPage<'a> {
    rows: &'a [HabitRowView],
}

#[derive(Template)]
#[template(path = "habit_rows.html")]
struct HabitRowsFragment<'a> {
    rows: &'a [HabitRowView],
}

fn is_htmx(req: &HttpRequest) -> bool {
    req.headers()
        .get(HX_REQUEST_HEADER)
        .and_then(|value| value.to_str().ok())
        == Some("true")
}

fn render_failure(err: askama::Error) -> PageError {
    PageError::from(Error::internal(format!("template rendering failed: {err}")))
}

/// Render the current habit list, with `editing` shown as an edit form.
async fn render_habits(
    req: &HttpRequest,
    state: &HttpState,
    editing: Option<HabitId>,
) -> PageResult<HttpResponse> {
    let habits = state.habits_query.list().await?;
    let rows: Vec<HabitRowView> = habits
        .iter()
        .map(|habit| HabitRowView::new(habit, editing))
        .collect();

    let body = if is_htmx(req) {
        HabitRowsFragment { rows: &rows }.render()
    } else {
        IndexPage { rows: &rows }.render()
    }
    .map_err(render_failure)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}

fn name_required() -> PageError {
    PageError::from(Error::invalid_request("Name required"))
}

/// Habit list: full page, or rows only for htmx.
#[get("/")]
pub async fn show_index(req: HttpRequest, state: web::Data<HttpState>) -> PageResult<HttpResponse> {
    render_habits(&req, &state, None).await
}

/// Create a habit from the form and re-render the list.
#[post("/habits")]
pub async fn submit_habit(
    req: HttpRequest,
    state: web::Data<HttpState>,
    form: web::Form<HabitForm>,
) -> PageResult<HttpResponse> {
    let HabitForm { name, description } = form.into_inner();
    let draft = parse_habit_draft(name, description).map_err(|_| name_required())?;
    state.habits.create(draft).await?;
    render_habits(&req, &state, None).await
}

/// Show the list with one row switched to its edit form.
#[get("/habits/{id}")]
pub async fn edit_habit(
    req: HttpRequest,
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> PageResult<HttpResponse> {
    let id = parse_habit_id(path.as_str())?;
    render_habits(&req, &state, Some(id)).await
}

/// Save an edited habit; any failure renders "Update failed".
#[put("/habits/{id}")]
pub async fn save_habit(
    req: HttpRequest,
    state: web::Data<HttpState>,
    path: web::Path<String>,
    form: web::Form<HabitForm>,
) -> PageResult<HttpResponse> {
    let id = parse_habit_id(path.as_str())?;
    let HabitForm { name, description } = form.into_inner();
    let draft = parse_habit_draft(name, description).map_err(|_| name_required())?;
    state
        .habits
        .update(id, draft)
        .await
        .map_err(|err| PageError::with_message(Error::internal(err.message()), "Update failed"))?;
    render_habits(&req, &state, None).await
}

/// Delete a habit (absent ids included) and re-render the list.
#[delete("/habits/{id}")]
pub async fn remove_habit(
    req: HttpRequest,
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> PageResult<HttpResponse> {
    let id = parse_habit_id(path.as_str())?;
    state.habits.delete(id).await?;
    render_habits(&req, &state, None).await
}

#[cfg(test)]
#[path = "pages_tests.rs"]
mod tests;
