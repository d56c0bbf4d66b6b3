use tracing::warn;

use crate::api::InventoryClient;
use dto::auth::LoginRequest;

/// Where the user lands after signing in
pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginState {
    Unauthenticated,
    Submitting,
    Authenticated { redirect: String },
    Failed { message: String },
}

/// Drives a login form: submit, retry after failure, or start over
pub struct LoginFlow {
    client: InventoryClient,
    state: LoginState,
}

impl LoginFlow {
    pub fn new(client: InventoryClient) -> Self {
        Self {
            client,
            state: LoginState::Unauthenticated,
        }
    }

    pub fn state(&self) -> &LoginState {
        &self.state
    }

    /// Runs one login attempt. A flow whose session still holds a live
    /// token is left as-is.
    pub async fn submit(&mut self, credentials: &LoginRequest) -> &LoginState {
        let authenticated = matches!(self.state, LoginState::Authenticated { .. });
        if authenticated && self.client.session().is_authenticated() {
            return &self.state;
        }

        self.state = LoginState::Submitting;

        self.state = match self.client.login(credentials).await {
            Ok(res) => {
                self.client.session().set(res);
                LoginState::Authenticated {
                    redirect: DASHBOARD_PATH.to_string(),
                }
            }
            Err(e) => {
                warn!("Login failed: {}", e);
                LoginState::Failed {
                    message: e.to_string(),
                }
            }
        };

        &self.state
    }

    /// Back to the empty form, dropping any stored credential
    pub fn reset(&mut self) {
        self.client.logout();
        self.state = LoginState::Unauthenticated;
    }
}
