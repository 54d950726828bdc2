use std::path::Path;

use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};

use crate::error::ApiError;
use crate::models::{Blog, BlogChanges, NewBlog, NewUser, User, ValidationError};

/// Opens the database file, creating its parent directory if needed.
pub fn open(path: &str) -> rusqlite::Result<Connection> {
    if path == ":memory:" {
        return Connection::open_in_memory();
    }
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::warn!("Could not create database directory {}: {e}", parent.display());
            }
        }
    }
    Connection::open(path)
}

pub fn initialize(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA journal_mode=WAL;").ok();

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS blogs (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            author TEXT,
            url TEXT NOT NULL,
            likes INTEGER NOT NULL DEFAULT 0 CHECK (likes >= 0)
        );

        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            username TEXT NOT NULL UNIQUE,
            name TEXT,
            password_hash TEXT NOT NULL
        );
        ",
    )
}

// ─── Blogs ───

const BLOG_COLUMNS: &str = "id, title, author, url, likes";

fn blog_from_row(row: &Row<'_>) -> rusqlite::Result<Blog> {
    Ok(Blog {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        url: row.get(3)?,
        likes: row.get(4)?,
    })
}

pub fn list_blogs(conn: &Connection) -> rusqlite::Result<Vec<Blog>> {
    let mut stmt = conn.prepare(&format!("SELECT {BLOG_COLUMNS} FROM blogs ORDER BY rowid"))?;
    let blogs = stmt.query_map([], blog_from_row)?.collect();
    blogs
}

pub fn find_blog(conn: &Connection, id: &str) -> rusqlite::Result<Option<Blog>> {
    conn.query_row(
        &format!("SELECT {BLOG_COLUMNS} FROM blogs WHERE id = ?1"),
        [id],
        blog_from_row,
    )
    .optional()
}

pub fn insert_blog(conn: &Connection, blog: &NewBlog) -> rusqlite::Result<Blog> {
    let id = uuid::Uuid::new_v4().to_string();
    conn.execute(
        "INSERT INTO blogs (id, title, author, url, likes) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![id, blog.title, blog.author, blog.url, blog.likes],
    )?;
    Ok(Blog {
        id,
        title: blog.title.clone(),
        author: blog.author.clone(),
        url: blog.url.clone(),
        likes: blog.likes,
    })
}

/// Applies `changes` to the blog with `id`. Returns `None` when no such blog exists.
pub fn update_blog(conn: &Connection, id: &str, changes: BlogChanges) -> rusqlite::Result<Option<Blog>> {
    let Some(current) = find_blog(conn, id)? else {
        return Ok(None);
    };
    let updated = changes.apply(current);
    conn.execute(
        "UPDATE blogs SET title = ?1, author = ?2, url = ?3, likes = ?4 WHERE id = ?5",
        params![updated.title, updated.author, updated.url, updated.likes, id],
    )?;
    Ok(Some(updated))
}

/// Removes the blog with `id`, returning whether a row was deleted.
pub fn delete_blog(conn: &Connection, id: &str) -> rusqlite::Result<bool> {
    Ok(conn.execute("DELETE FROM blogs WHERE id = ?1", [id])? > 0)
}

// ─── Users ───

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        name: row.get(2)?,
        password_hash: row.get(3)?,
    })
}

pub fn list_users(conn: &Connection) -> rusqlite::Result<Vec<User>> {
    let mut stmt = conn.prepare("SELECT id, username, name, password_hash FROM users ORDER BY rowid")?;
    let users = stmt.query_map([], user_from_row)?.collect();
    users
}

pub fn find_user_by_username(conn: &Connection, username: &str) -> rusqlite::Result<Option<User>> {
    conn.query_row(
        "SELECT id, username, name, password_hash FROM users WHERE username = ?1",
        [username],
        user_from_row,
    )
    .optional()
}

/// Stores a validated user with an already computed password hash.
///
/// A username collision is reported as a validation error, not a database error.
pub fn insert_user(conn: &Connection, user: &NewUser, password_hash: &str) -> Result<User, ApiError> {
    let id = uuid::Uuid::new_v4().to_string();
    conn.execute(
        "INSERT INTO users (id, username, name, password_hash) VALUES (?1, ?2, ?3, ?4)",
        params![id, user.username, user.name, password_hash],
    )
    .map_err(|e| match e.sqlite_error_code() {
        Some(ErrorCode::ConstraintViolation) => ApiError::Validation(ValidationError::NotUnique("username")),
        _ => ApiError::Database(e),
    })?;
    Ok(User {
        id,
        username: user.username.clone(),
        name: user.name.clone(),
        password_hash: password_hash.to_string(),
    })
}
