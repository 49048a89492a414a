//! Blog entry handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::BlogEntry;
use blog_shared::dto::CreateEntryRequest;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/blogs
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let entries = state.entries.list().await?;
    Ok(HttpResponse::Ok().json(entries))
}

/// GET /api/blogs/{id}
pub async fn get_by_id(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let entry = state
        .entries
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Blog not found".to_string()))?;

    Ok(HttpResponse::Ok().json(entry))
}

/// POST /api/blogs
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateEntryRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Author and creation time are server-assigned; the id is assigned by
    // the store.
    let entry = BlogEntry::new(req.text, state.author.clone());
    let created = state.entries.create(entry).await?;

    Ok(HttpResponse::Created()
        .insert_header(("Location", format!("/api/blogs/{}", created.id)))
        .json(created))
}

/// PUT /api/blogs/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    body: web::Json<BlogEntry>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let entry = body.into_inner();

    if id != entry.id {
        return Err(AppError::BadRequest("Blog ID mismatch".to_string()));
    }

    let updated = state
        .entries
        .update(entry)
        .await?
        .ok_or_else(|| AppError::NotFound("Blog not found".to_string()))?;

    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/blogs/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<u64>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    if !state.entries.delete(id).await? {
        return Err(AppError::NotFound("Blog not found".to_string()));
    }

    Ok(HttpResponse::NoContent().finish())
}
