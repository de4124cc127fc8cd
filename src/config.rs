//! Runtime configuration for the CloudLab demo server.

use once_cell::sync::Lazy;
use std::env;
use std::time::Instant;

#[derive(Debug)]
pub struct Settings {
    /// Address the HTTP server binds to.
    pub server_addr: String,
}

impl Settings {
    fn from_env() -> Self {
        let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:3001".into());

        Settings { server_addr }
    }
}

static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

pub fn settings() -> &'static Settings {
    &SETTINGS
}

static STARTED: Lazy<Instant> = Lazy::new(Instant::now);

/// Pin the process start time; called once from `main` so uptime does not
/// start ticking at the first `/health` request instead.
pub fn mark_started() {
    Lazy::force(&STARTED);
}

/// Seconds since `mark_started`.
pub fn uptime_secs() -> f64 {
    STARTED.elapsed().as_secs_f64()
}
