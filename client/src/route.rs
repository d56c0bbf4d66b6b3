use urlencoding::encode;

/// Where data-access calls are sent
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// Same-origin proxy routes under `/api`
    Proxy { origin: String },

    /// Upstream inventory API, called without the proxy
    Direct { api_url: String },
}

impl Route {
    pub fn proxy(origin: impl Into<String>) -> Self {
        Route::Proxy {
            origin: origin.into(),
        }
    }

    pub fn direct(api_url: impl Into<String>) -> Self {
        Route::Direct {
            api_url: api_url.into(),
        }
    }

    fn base(&self) -> String {
        match self {
            Route::Proxy { origin } => format!("{}/api", origin.trim_end_matches('/')),
            Route::Direct { api_url } => api_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn login_url(&self) -> String {
        match self {
            Route::Proxy { .. } => format!("{}/auth/login", self.base()),
            Route::Direct { .. } => format!("{}/users/login", self.base()),
        }
    }

    pub fn items_url(&self, page: u32, page_size: u32) -> String {
        format!("{}/items?page={}&pageSize={}", self.base(), page, page_size)
    }

    pub fn item_url(&self, id: &str) -> String {
        format!("{}/items/{}", self.base(), encode(id))
    }

    pub fn locations_url(&self) -> String {
        format!("{}/locations", self.base())
    }
}
