use blog_list::config::Config;
use blog_list::{create_rocket, db};

#[rocket::launch]
fn rocket() -> _ {
    let config = Config::from_env();
    let conn = db::open(&config.database_path).expect("Failed to open database");
    db::initialize(&conn).expect("Failed to initialize database");

    let rocket = create_rocket(conn);
    match config.port {
        Some(port) => {
            let figment = rocket.figment().clone().merge(("port", port));
            rocket.configure(figment)
        }
        None => rocket,
    }
}
