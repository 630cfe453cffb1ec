use crate::models::User;
use crate::services::error::AuthError;
use crate::services::traits::AuthService;
use crate::services::types::simulate;
use std::time::Duration;
use tracing::{debug, info};

/// Registration details collected on sign-up.
/// The mock backend signs in by `email`; the profile fields are only logged.
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
}

impl Registration {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Tracks who is signed in on top of an [`AuthService`].
///
/// Sessions start signed out.
pub struct Session<A> {
    auth: A,
    user: Option<User>,
    register_delay: Duration,
}

impl<A: AuthService> Session<A> {
    pub fn new(auth: A, register_delay: Duration) -> Self {
        Self {
            auth,
            user: None,
            register_delay,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// The password is accepted as-is; only the identifier is checked
    pub async fn login(&mut self, email: &str, _password: &str) -> Result<&User, AuthError> {
        let user = self.auth.sign_in(email).await?;
        info!("👤 Logged in as {}", user.username);
        Ok(&*self.user.insert(user))
    }

    pub async fn register(&mut self, registration: Registration) -> Result<&User, AuthError> {
        simulate(self.register_delay).await;
        debug!(
            "Registering {:?} <{}> mobile {:?}",
            registration.display_name(),
            registration.email,
            registration.mobile
        );
        let user = self.auth.sign_in(&registration.email).await?;
        info!("👤 Registered and logged in as {}", user.username);
        Ok(&*self.user.insert(user))
    }

    pub async fn logout(&mut self) {
        self.auth.sign_out().await;
        if let Some(user) = self.user.take() {
            info!("👋 Logged out {}", user.username);
        }
    }
}
