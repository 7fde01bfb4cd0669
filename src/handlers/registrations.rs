use axum::{extract::State, http::StatusCode, Json};
use sqlx::PgPool;

use crate::error::{is_unique_violation, ApiError};
use crate::models::{CreateRegistration, Registration, RegistrationStatus};

fn duplicate_email() -> ApiError {
    ApiError::Conflict(String::from("Registration with this email already exists"))
}

#[utoipa::path(
    get,
    path = "/registrations",
    tag = "registrations",
    responses(
        (status = 200, description = "Registrations, newest first", body = Vec<Registration>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_registrations(
    State(pool): State<PgPool>,
) -> Result<Json<Vec<Registration>>, ApiError> {
    let registrations = sqlx::query_as::<_, Registration>(
        r#"
        SELECT
            id, email, name, company, position, phone,
            ticket_type, dietary_requirements, t_shirt_size,
            registration_date, status,
            created_at, updated_at
        FROM registrations
        ORDER BY registration_date DESC, id DESC
        "#,
    )
    .fetch_all(&pool)
    .await?;

    Ok(Json(registrations))
}

#[utoipa::path(
    post,
    path = "/registrations",
    tag = "registrations",
    request_body = CreateRegistration,
    responses(
        (status = 201, description = "Registration created as pending", body = Registration),
        (status = 400, description = "Invalid registration payload"),
        (status = 409, description = "Email already registered"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_registration(
    State(pool): State<PgPool>,
    Json(new_registration): Json<CreateRegistration>,
) -> Result<(StatusCode, Json<Registration>), ApiError> {
    new_registration.validate()?;

    let existing = sqlx::query_scalar::<_, i32>("SELECT id FROM registrations WHERE email = $1")
        .bind(&new_registration.email)
        .fetch_optional(&pool)
        .await?;

    if existing.is_some() {
        return Err(duplicate_email());
    }

    // The unique index on email settles a concurrent duplicate that slipped past the pre-check
    let registration = sqlx::query_as::<_, Registration>(
        r#"
        INSERT INTO registrations (
            email, name, company, position, phone,
            ticket_type, dietary_requirements, t_shirt_size, status
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING
            id, email, name, company, position, phone,
            ticket_type, dietary_requirements, t_shirt_size,
            registration_date, status,
            created_at, updated_at
        "#,
    )
    .bind(&new_registration.email)
    .bind(&new_registration.name)
    .bind(&new_registration.company)
    .bind(&new_registration.position)
    .bind(&new_registration.phone)
    .bind(new_registration.ticket_type)
    .bind(&new_registration.dietary_requirements)
    .bind(new_registration.t_shirt_size)
    .bind(RegistrationStatus::Pending)
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            duplicate_email()
        } else {
            ApiError::Storage(e)
        }
    })?;

    tracing::info!(registration_id = registration.id, "Created registration");
    Ok((StatusCode::CREATED, Json(registration)))
}
