use std::env;

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::create_security_headers_layer;

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_PAGE_SIZE: u32 = 3;
const DEFAULT_MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Filesystem root the media store writes uploaded images under.
    pub media_root: String,
    /// Public URL prefix the media directory is served at.
    pub media_url: String,
    pub reservation_page_size: u32,
    pub reservation_max_page_size: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/planetarium".to_string()),
            port: parse_env("PORT", DEFAULT_PORT),
            media_root: env::var("MEDIA_ROOT").unwrap_or_else(|_| "media".to_string()),
            media_url: env::var("MEDIA_URL").unwrap_or_else(|_| "/media".to_string()),
            reservation_page_size: parse_env("RESERVATION_PAGE_SIZE", DEFAULT_PAGE_SIZE),
            reservation_max_page_size: parse_env(
                "RESERVATION_MAX_PAGE_SIZE",
                DEFAULT_MAX_PAGE_SIZE,
            ),
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
