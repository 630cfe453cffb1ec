use crate::models::{Car, NewCar, User};
use crate::services::error::AuthError;
use async_trait::async_trait;

/// Data access for car listings.
/// None of these operations fail; a missing listing is `None`.
#[async_trait]
pub trait CarStore: Send + Sync {
    /// Every listing, in insertion order
    async fn get_all(&self) -> Vec<Car>;

    async fn get_by_id(&self, id: &str) -> Option<Car>;

    /// Listings flagged as featured, in insertion order
    async fn get_featured(&self) -> Vec<Car>;

    /// Store a new listing under a fresh id and the current time
    async fn create(&self, car: NewCar) -> Car;
}

/// Demo authentication against a single fixed account
#[async_trait]
pub trait AuthService: Send + Sync {
    /// The account a restored session would belong to
    async fn get_user(&self) -> User;

    async fn sign_in(&self, identifier: &str) -> Result<User, AuthError>;

    async fn sign_out(&self);
}
