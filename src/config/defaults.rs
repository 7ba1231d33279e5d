pub fn default_local_url() -> String {
    "http://localhost:3000".to_string()
}

pub fn default_production_url() -> String {
    "https://reviews-api.onrender.com".to_string()
}

pub fn default_health_path() -> String {
    "/healthz".to_string()
}

pub fn default_reviews_path() -> String {
    "/api/reviews".to_string()
}

pub fn default_request_ms() -> u64 {
    8000 // long enough to ride out a cold start
}

pub fn default_prewarm_ms() -> u64 {
    5000
}

pub fn default_max_attempts() -> u32 {
    2
}

pub fn default_backoff_base_ms() -> u64 {
    1000
}

pub fn default_prewarm_delay_ms() -> u64 {
    500
}

pub fn default_true() -> bool {
    true
}
