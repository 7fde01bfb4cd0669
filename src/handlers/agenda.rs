use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::FixedOffset;
use sqlx::PgPool;

use crate::error::ApiError;
use crate::models::{AgendaItem, AgendaQuery, CreateAgendaItem};
use crate::state::AppState;
use crate::utils::day_bounds;

/// Agenda items matching every supplied filter, earliest first.
///
/// A `date` filter selects items whose start instant falls on that calendar
/// day in `offset`.
pub async fn fetch_agenda(
    pool: &PgPool,
    filter: &AgendaQuery,
    offset: FixedOffset,
) -> Result<Vec<AgendaItem>, ApiError> {
    let mut where_clauses = Vec::new();
    let mut param_count = 0;

    if filter.agenda_type.is_some() {
        param_count += 1;
        where_clauses.push(format!("\"type\" = ${}", param_count));
    }

    let bounds = match filter.date {
        Some(date) => Some(
            day_bounds(date, offset).ok_or_else(|| ApiError::validation("date out of range"))?,
        ),
        None => None,
    };
    if bounds.is_some() {
        where_clauses.push(format!(
            "start_time >= ${} AND start_time <= ${}",
            param_count + 1,
            param_count + 2
        ));
    }

    let where_clause = if where_clauses.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", where_clauses.join(" AND "))
    };

    let query_str = format!(
        r#"
        SELECT
            id, title, description, start_time, end_time,
            "type", speaker_id, location,
            created_at, updated_at
        FROM agenda
        {}
        ORDER BY start_time, id
        "#,
        where_clause
    );

    let mut query = sqlx::query_as::<_, AgendaItem>(&query_str);

    // Bind parameters in order
    if let Some(agenda_type) = filter.agenda_type {
        query = query.bind(agenda_type);
    }
    if let Some((start, end)) = bounds {
        query = query.bind(start).bind(end);
    }

    Ok(query.fetch_all(pool).await?)
}

#[utoipa::path(
    get,
    path = "/agenda",
    tag = "agenda",
    params(AgendaQuery),
    responses(
        (status = 200, description = "Agenda items ordered by start time", body = Vec<AgendaItem>),
        (status = 400, description = "Invalid filter"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_agenda(
    State(state): State<AppState>,
    Query(filter): Query<AgendaQuery>,
) -> Result<Json<Vec<AgendaItem>>, ApiError> {
    let offset = *state.conference_start.offset();
    Ok(Json(fetch_agenda(&state.pool, &filter, offset).await?))
}

#[utoipa::path(
    post,
    path = "/agenda",
    tag = "agenda",
    request_body = CreateAgendaItem,
    responses(
        (status = 201, description = "Agenda item created", body = AgendaItem),
        (status = 400, description = "Invalid agenda payload"),
        (status = 404, description = "Referenced speaker does not exist"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_agenda_item(
    State(pool): State<PgPool>,
    Json(new_item): Json<CreateAgendaItem>,
) -> Result<(StatusCode, Json<AgendaItem>), ApiError> {
    new_item.validate()?;

    if let Some(speaker_id) = new_item.speaker_id {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM speakers WHERE id = $1)",
        )
        .bind(speaker_id)
        .fetch_one(&pool)
        .await?;

        if !exists {
            return Err(ApiError::NotFound(format!(
                "Speaker with id {} does not exist",
                speaker_id
            )));
        }
    }

    let item = sqlx::query_as::<_, AgendaItem>(
        r#"
        INSERT INTO agenda (
            title, description, start_time, end_time,
            "type", speaker_id, location
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING
            id, title, description, start_time, end_time,
            "type", speaker_id, location,
            created_at, updated_at
        "#,
    )
    .bind(&new_item.title)
    .bind(&new_item.description)
    .bind(new_item.start_time)
    .bind(new_item.end_time)
    .bind(new_item.agenda_type)
    .bind(new_item.speaker_id)
    .bind(&new_item.location)
    .fetch_one(&pool)
    .await?;

    tracing::info!(agenda_id = item.id, "Created agenda item");
    Ok((StatusCode::CREATED, Json(item)))
}
