#![allow(dead_code)]

use blog_list::models::{Blog, NewBlog, NewUser};
use blog_list::{auth, create_rocket, db};
use rocket::local::blocking::Client;

pub const ROOT_USERNAME: &str = "root";
pub const ROOT_PASSWORD: &str = "sekret";

fn blog(title: &str, author: &str, url: &str, likes: i64) -> NewBlog {
    NewBlog {
        title: title.to_string(),
        author: Some(author.to_string()),
        url: url.to_string(),
        likes,
    }
}

/// Six blogs whose likes add up to 36.
pub fn initial_blogs() -> Vec<NewBlog> {
    vec![
        blog("React patterns", "Michael Chan", "https://reactpatterns.com/", 7),
        blog("Go To Statement Considered Harmful", "Edsger W. Dijkstra", "http://www.u.arizona.edu/~rubinson/copyright_violations/Go_To_Considered_Harmful.html", 5),
        blog("Canonical string reduction", "Edsger W. Dijkstra", "http://www.cs.utexas.edu/~EWD/transcriptions/EWD08xx/EWD808.html", 12),
        blog("First class tests", "Robert C. Martin", "http://blog.cleancoder.com/uncle-bob/2017/05/05/TestDefinitions.htmll", 10),
        blog("TDD harms architecture", "Robert C. Martin", "http://blog.cleancoder.com/uncle-bob/2017/03/03/TDD-Harms-Architecture.html", 0),
        blog("Type wars", "Robert C. Martin", "http://blog.cleancoder.com/uncle-bob/2016/05/01/TypeWars.html", 2),
    ]
}

/// The fixture list as stored records, with generated ids.
pub fn fixture_blogs() -> Vec<Blog> {
    initial_blogs()
        .into_iter()
        .map(|b| Blog {
            id: uuid::Uuid::new_v4().to_string(),
            title: b.title,
            author: b.author,
            url: b.url,
            likes: b.likes,
        })
        .collect()
}

/// A client over a fresh in-memory store seeded with the fixture blogs and one user.
pub fn test_client() -> Client {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    db::initialize(&conn).unwrap();
    for b in initial_blogs() {
        db::insert_blog(&conn, &b).unwrap();
    }
    let root = NewUser {
        username: ROOT_USERNAME.to_string(),
        name: Some("Superuser".to_string()),
        password: ROOT_PASSWORD.to_string(),
    };
    let hash = auth::hash_password(&root.password).unwrap();
    db::insert_user(&conn, &root, &hash).unwrap();

    Client::tracked(create_rocket(conn)).unwrap()
}
