use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 3;

/// A constraint a record violated before it could be written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("`{0}` is required")]
    Missing(&'static str),
    #[error("`{field}` must be at least {min} characters long")]
    TooShort { field: &'static str, min: usize },
    #[error("`{0}` must not be negative")]
    Negative(&'static str),
    #[error("`{0}` must be unique")]
    NotUnique(&'static str),
}

// ─── Blogs ───

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Blog {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,
}

/// Body of `POST /api/blogs` and `PUT /api/blogs/<id>`.
///
/// Every field is optional at the wire level so that missing fields surface
/// as validation errors rather than as deserialization failures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogPayload {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

/// A blog that passed validation and has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlog {
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,
}

impl TryFrom<BlogPayload> for NewBlog {
    type Error = ValidationError;

    fn try_from(payload: BlogPayload) -> Result<Self, Self::Error> {
        let title = required("title", payload.title)?;
        let url = required("url", payload.url)?;
        let likes = non_negative("likes", payload.likes.unwrap_or(0))?;
        Ok(NewBlog {
            title,
            author: payload.author,
            url,
            likes,
        })
    }
}

/// Field changes for an existing blog. `None` leaves the stored value as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogChanges {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

impl TryFrom<BlogPayload> for BlogChanges {
    type Error = ValidationError;

    fn try_from(payload: BlogPayload) -> Result<Self, Self::Error> {
        let title = payload.title.map(|t| required("title", Some(t))).transpose()?;
        let url = payload.url.map(|u| required("url", Some(u))).transpose()?;
        let likes = payload.likes.map(|l| non_negative("likes", l)).transpose()?;
        Ok(BlogChanges {
            title,
            author: payload.author,
            url,
            likes,
        })
    }
}

impl BlogChanges {
    pub fn apply(self, blog: Blog) -> Blog {
        Blog {
            id: blog.id,
            title: self.title.unwrap_or(blog.title),
            author: self.author.or(blog.author),
            url: self.url.unwrap_or(blog.url),
            likes: self.likes.unwrap_or(blog.likes),
        }
    }
}

// ─── Users ───

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Body of `POST /api/users`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPayload {
    pub username: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

/// A user that passed validation. Still carries the plaintext password,
/// which must be hashed before anything is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub name: Option<String>,
    pub password: String,
}

impl TryFrom<UserPayload> for NewUser {
    type Error = ValidationError;

    fn try_from(payload: UserPayload) -> Result<Self, Self::Error> {
        let username = min_length("username", payload.username, MIN_USERNAME_LEN)?;
        let password = min_length("password", payload.password, MIN_PASSWORD_LEN)?;
        Ok(NewUser {
            username,
            name: payload.name,
            password,
        })
    }
}

// ─── Field rules ───

fn required(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ValidationError::Missing(field)),
    }
}

fn min_length(field: &'static str, value: Option<String>, min: usize) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::Missing(field))?;
    if value.chars().count() < min {
        return Err(ValidationError::TooShort { field, min });
    }
    Ok(value)
}

fn non_negative(field: &'static str, value: i64) -> Result<i64, ValidationError> {
    if value < 0 {
        return Err(ValidationError::Negative(field));
    }
    Ok(value)
}
