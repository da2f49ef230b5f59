/// Client configuration, resolved once at startup from flags and
/// environment and passed explicitly into every call.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub base_url: String,
    pub token: Option<String>,
}

impl CliConfig {
    pub fn new(base_url: String, token: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let config = CliConfig::new("http://localhost:8080/".into(), None);
        assert_eq!(config.base_url, "http://localhost:8080");
    }
}
