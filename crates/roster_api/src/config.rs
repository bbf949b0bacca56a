//! API configuration.

/// Configuration for the request handler.
///
/// Bounds are enforced before a request reaches the store; a violation is
/// rejected as an invalid request.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Maximum length of a user name.
    pub max_name_len: usize,
    /// Maximum length of a post title.
    pub max_title_len: usize,
    /// Maximum length of a post body.
    pub max_content_len: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            max_name_len: 64,
            max_title_len: 120,
            max_content_len: 10_000,
        }
    }
}

impl ApiConfig {
    /// Creates a configuration with default bounds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum user name length.
    #[must_use]
    pub fn with_max_name_len(mut self, len: usize) -> Self {
        self.max_name_len = len;
        self
    }

    /// Sets the maximum post title length.
    #[must_use]
    pub fn with_max_title_len(mut self, len: usize) -> Self {
        self.max_title_len = len;
        self
    }

    /// Sets the maximum post body length.
    #[must_use]
    pub fn with_max_content_len(mut self, len: usize) -> Self {
        self.max_content_len = len;
        self
    }
}
