#[derive(Clone)]
pub struct AppConfig {
    pub catalog_api_key: String,
    pub catalog_base_url: String,
    pub catalog_page_size: u32,
    pub catalog_request_timeout_secs: u64,
    pub catalog_user_agent: String,
    pub picker_overscan: usize,
    pub picker_near_end_px: f64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("catalog_api_key", &"[redacted]")
            .field("catalog_base_url", &self.catalog_base_url)
            .field("catalog_page_size", &self.catalog_page_size)
            .field(
                "catalog_request_timeout_secs",
                &self.catalog_request_timeout_secs,
            )
            .field("catalog_user_agent", &self.catalog_user_agent)
            .field("picker_overscan", &self.picker_overscan)
            .field("picker_near_end_px", &self.picker_near_end_px)
            .finish()
    }
}
