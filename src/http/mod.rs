pub mod health;
pub mod index;
pub mod info;
pub mod metrics;
pub mod routes;
pub mod users;
