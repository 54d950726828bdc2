use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Request, Response};

/// Logs the method, path and final status of every request.
pub struct RequestLogger;

#[rocket::async_trait]
impl Fairing for RequestLogger {
    fn info(&self) -> Info {
        Info {
            name: "Request logger",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        log::info!("{} {} -> {}", req.method(), req.uri().path(), res.status());
    }
}
