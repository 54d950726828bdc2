//! Aggregations over lists of blogs.
use serde::Serialize;

use crate::models::Blog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorBlogs {
    pub author: String,
    pub blogs: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorLikes {
    pub author: String,
    pub likes: i64,
}

pub fn dummy(_blogs: &[Blog]) -> u32 {
    1
}

/// Sum of all likes. Saturates at `i64::MAX` instead of overflowing.
pub fn total_likes(blogs: &[Blog]) -> i64 {
    blogs.iter().fold(0, |total, b| total.saturating_add(b.likes))
}

/// Blog with the most likes. The earliest one wins a tie.
pub fn favorite_blog(blogs: &[Blog]) -> Option<&Blog> {
    blogs.iter().fold(None, |best: Option<&Blog>, b| match best {
        Some(top) if top.likes >= b.likes => Some(top),
        _ => Some(b),
    })
}

pub fn most_blogs(blogs: &[Blog]) -> Option<AuthorBlogs> {
    top_author(blogs, |_| 1).map(|(author, blogs)| AuthorBlogs { author, blogs: blogs as usize })
}

pub fn most_likes(blogs: &[Blog]) -> Option<AuthorLikes> {
    top_author(blogs, |b| b.likes).map(|(author, likes)| AuthorLikes { author, likes })
}

/// Sums `weight` per author, keeping authors in first-seen order so that
/// ties go to the author that appears first. Blogs without an author are skipped.
/// Totals saturate at `i64::MAX`.
fn top_author(blogs: &[Blog], weight: impl Fn(&Blog) -> i64) -> Option<(String, i64)> {
    let mut totals: Vec<(&str, i64)> = Vec::new();
    for blog in blogs {
        let Some(author) = blog.author.as_deref() else { continue };
        match totals.iter_mut().find(|(a, _)| *a == author) {
            Some((_, total)) => *total = total.saturating_add(weight(blog)),
            None => totals.push((author, weight(blog))),
        }
    }
    totals
        .into_iter()
        .fold(None, |best: Option<(&str, i64)>, (a, t)| match best {
            Some((_, top)) if top >= t => best,
            _ => Some((a, t)),
        })
        .map(|(a, t)| (a.to_string(), t))
}
