// src/http/users.rs

use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use serde_json::json;

#[derive(Serialize)]
pub struct User {
    pub id: u32,
    pub name: &'static str,
    pub email: &'static str,
}

/// Fixed sample data set; this is a demo app, there is no store behind it.
fn sample_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "John Doe",
            email: "john@example.com",
        },
        User {
            id: 2,
            name: "Jane Smith",
            email: "jane@example.com",
        },
        User {
            id: 3,
            name: "Bob Johnson",
            email: "bob@example.com",
        },
    ]
}

#[get("/users")]
pub async fn users() -> impl Responder {
    let users = sample_users();
    HttpResponse::Ok().json(json!({
        "count": users.len(),
        "data": users,
    }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(users);
}
