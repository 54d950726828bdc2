mod common;

use blog_list::list_helper::{self, AuthorBlogs, AuthorLikes};
use common::fixture_blogs;

#[test]
fn test_dummy_returns_one() {
    assert_eq!(list_helper::dummy(&[]), 1);
}

#[test]
fn test_total_likes_of_empty_list_is_zero() {
    assert_eq!(list_helper::total_likes(&[]), 0);
}

#[test]
fn test_total_likes_of_single_blog() {
    let blogs = fixture_blogs();
    assert_eq!(list_helper::total_likes(&blogs[..1]), blogs[0].likes);
}

#[test]
fn test_total_likes_of_bigger_list() {
    assert_eq!(list_helper::total_likes(&fixture_blogs()), 36);
}

#[test]
fn test_total_likes_ignores_order() {
    let mut blogs = fixture_blogs();
    blogs.reverse();
    assert_eq!(list_helper::total_likes(&blogs), 36);
}

#[test]
fn test_favorite_blog() {
    let blogs = fixture_blogs();
    let favorite = list_helper::favorite_blog(&blogs).unwrap();
    assert_eq!(favorite.title, "Canonical string reduction");
    assert_eq!(favorite.likes, 12);
}

#[test]
fn test_most_blogs() {
    assert_eq!(
        list_helper::most_blogs(&fixture_blogs()),
        Some(AuthorBlogs { author: "Robert C. Martin".to_string(), blogs: 3 })
    );
    assert_eq!(list_helper::most_blogs(&[]), None);
}

#[test]
fn test_most_likes() {
    assert_eq!(
        list_helper::most_likes(&fixture_blogs()),
        Some(AuthorLikes { author: "Edsger W. Dijkstra".to_string(), likes: 17 })
    );
    assert_eq!(list_helper::most_likes(&[]), None);
}
