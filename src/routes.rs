use rocket::http::Status;
use rocket::serde::json::{self, Json};
use rocket::State;

use crate::auth::hash_password;
use crate::error::{parse_id, ApiError, ErrorBody};
use crate::models::{Blog, BlogChanges, BlogPayload, NewBlog, NewUser, User, UserPayload, ValidationError};
use crate::{DbPool, DbPoolExt};

type ApiResult<T> = Result<T, ApiError>;

/// Unwraps a JSON body, turning a shape mismatch into a 400 instead of Rocket's 422.
fn body<T>(req: Result<Json<T>, json::Error<'_>>) -> ApiResult<T> {
    req.map(Json::into_inner).map_err(|e| ApiError::BadPayload(e.to_string()))
}

#[get("/health")]
pub fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok", "version": env!("CARGO_PKG_VERSION")}))
}

// ─── Blogs ───

#[get("/blogs")]
pub fn list_blogs(db: &State<DbPool>) -> ApiResult<Json<Vec<Blog>>> {
    let blogs = crate::db::list_blogs(&db.conn())?;
    Ok(Json(blogs))
}

#[get("/blogs/<id>")]
pub fn get_blog(id: &str, db: &State<DbPool>) -> ApiResult<Json<Blog>> {
    let id = parse_id(id)?.to_string();
    crate::db::find_blog(&db.conn(), &id)?
        .map(Json)
        .ok_or(ApiError::NotFound("blog"))
}

#[post("/blogs", data = "<req>")]
pub fn create_blog(req: Result<Json<BlogPayload>, json::Error<'_>>, db: &State<DbPool>) -> ApiResult<(Status, Json<Blog>)> {
    let new_blog = NewBlog::try_from(body(req)?)?;
    let blog = crate::db::insert_blog(&db.conn(), &new_blog)?;
    log::info!("created blog {} ({:?})", blog.id, blog.title);
    Ok((Status::Created, Json(blog)))
}

#[put("/blogs/<id>", data = "<req>")]
pub fn update_blog(id: &str, req: Result<Json<BlogPayload>, json::Error<'_>>, db: &State<DbPool>) -> ApiResult<Json<Blog>> {
    let id = parse_id(id)?.to_string();
    let changes = BlogChanges::try_from(body(req)?)?;
    crate::db::update_blog(&db.conn(), &id, changes)?
        .map(Json)
        .ok_or(ApiError::NotFound("blog"))
}

#[delete("/blogs/<id>")]
pub fn delete_blog(id: &str, db: &State<DbPool>) -> ApiResult<Status> {
    let id = parse_id(id)?.to_string();
    if crate::db::delete_blog(&db.conn(), &id)? {
        log::info!("deleted blog {id}");
    }
    Ok(Status::NoContent)
}

// ─── Users ───

#[get("/users")]
pub fn list_users(db: &State<DbPool>) -> ApiResult<Json<Vec<User>>> {
    let users = crate::db::list_users(&db.conn())?;
    Ok(Json(users))
}

#[post("/users", data = "<req>")]
pub fn create_user(req: Result<Json<UserPayload>, json::Error<'_>>, db: &State<DbPool>) -> ApiResult<(Status, Json<User>)> {
    let new_user = NewUser::try_from(body(req)?)?;

    // Hashing is slow, so reject taken names up front. The UNIQUE constraint
    // still catches a concurrent insert of the same name.
    if crate::db::find_user_by_username(&db.conn(), &new_user.username)?.is_some() {
        return Err(ValidationError::NotUnique("username").into());
    }
    let password_hash = hash_password(&new_user.password)?;

    let user = crate::db::insert_user(&db.conn(), &new_user, &password_hash)?;
    log::info!("created user {} ({})", user.id, user.username);
    Ok((Status::Created, Json(user)))
}

// ─── Catchers ───

#[catch(404)]
pub fn not_found() -> Json<ErrorBody> {
    Json(ErrorBody::new("unknown endpoint", "NOT_FOUND"))
}

#[catch(422)]
pub fn unprocessable() -> Json<ErrorBody> {
    Json(ErrorBody::new("Unprocessable request", "VALIDATION_ERROR"))
}

#[catch(500)]
pub fn internal_error() -> Json<ErrorBody> {
    Json(ErrorBody::new("Internal server error", "INTERNAL_ERROR"))
}
