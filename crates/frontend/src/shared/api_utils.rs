//! API utilities for frontend-backend communication
//!
//! The backend is served from the same host as the admin bundle, on its own
//! port.

/// Port the backend API listens on
pub const API_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path (should start with "/api/")
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/productos");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
