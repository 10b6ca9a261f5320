/// Endpoints reachable without an API key.
pub const PUBLIC_ENDPOINTS: [&str; 2] = ["/api/v1/health", "/api/v1/api-docs"];

pub fn is_public_endpoint(path: &str) -> bool {
    PUBLIC_ENDPOINTS.contains(&path)
}
