use crate::models::{filter, Car, NewCar, User};
use crate::services::error::AuthError;
use crate::services::fixtures;
use crate::services::traits::{AuthService, CarStore};
use crate::services::types::{simulate, Latency};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// In-memory marketplace backend.
///
/// Clones share one listing collection. Every call waits out its configured
/// latency before touching the data.
#[derive(Clone)]
pub struct MockMarketplace {
    cars: Arc<RwLock<Vec<Car>>>,
    user: User,
    latency: Latency,
}

impl MockMarketplace {
    /// Create a store seeded with the demo listings
    pub fn new(latency: Latency) -> Self {
        Self::with_cars(fixtures::cars(), latency)
    }

    /// Create a store seeded with `cars`
    pub fn with_cars(cars: Vec<Car>, latency: Latency) -> Self {
        info!("📋 Seeding marketplace with {} listings", cars.len());

        Self {
            cars: Arc::new(RwLock::new(cars)),
            user: fixtures::default_user(),
            latency,
        }
    }
}

/// Next listing id: `c` followed by the current unix millis, bumped past any taken id
fn next_id(existing: &[Car]) -> String {
    let mut stamp = Utc::now().timestamp_millis();
    loop {
        let id = format!("c{}", stamp);
        if !existing.iter().any(|c| c.id == id) {
            return id;
        }
        stamp += 1;
    }
}

#[async_trait]
impl CarStore for MockMarketplace {
    async fn get_all(&self) -> Vec<Car> {
        simulate(self.latency.get_all).await;
        self.cars.read().await.clone()
    }

    async fn get_by_id(&self, id: &str) -> Option<Car> {
        simulate(self.latency.get_by_id).await;
        let car = self.cars.read().await.iter().find(|c| c.id == id).cloned();
        if car.is_none() {
            debug!("No listing with id {}", id);
        }
        car
    }

    async fn get_featured(&self) -> Vec<Car> {
        simulate(self.latency.get_featured).await;
        filter::featured(&self.cars.read().await)
    }

    async fn create(&self, car: NewCar) -> Car {
        simulate(self.latency.create).await;

        let mut cars = self.cars.write().await;
        let stored = car.into_car(next_id(&cars), Utc::now());
        cars.push(stored.clone());

        info!("✅ Created listing {} ({})", stored.id, stored.title);
        stored
    }
}

#[async_trait]
impl AuthService for MockMarketplace {
    async fn get_user(&self) -> User {
        simulate(self.latency.get_user).await;
        self.user.clone()
    }

    async fn sign_in(&self, identifier: &str) -> Result<User, AuthError> {
        simulate(self.latency.sign_in).await;

        if identifier == fixtures::INVALID_LOGIN {
            warn!("Rejected sign-in for {}", identifier);
            return Err(AuthError::InvalidCredentials);
        }

        debug!("Signed in {} as {}", identifier, self.user.username);
        Ok(self.user.clone())
    }

    async fn sign_out(&self) {
        debug!("Signed out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CarCategory, FuelType, Transmission};

    fn store() -> MockMarketplace {
        MockMarketplace::new(Latency::none())
    }

    fn new_car() -> NewCar {
        NewCar {
            user_id: "u1".to_string(),
            title: "2017 Honda Civic Type R".to_string(),
            brand: "Honda".to_string(),
            model: "Civic".to_string(),
            year: 2017,
            price: 31_000,
            mileage: 40_000,
            fuel_type: FuelType::Petrol,
            transmission: Transmission::Manual,
            category: CarCategory::Hatchback,
            location: "Portland, OR".to_string(),
            description: "Track-ready hot hatch.".to_string(),
            features: vec!["Recaro Seats".to_string()],
            images: vec![],
            is_featured: None,
        }
    }

    #[tokio::test]
    async fn test_get_all_returns_seed_listings() {
        let cars = store().get_all().await;
        let ids: Vec<&str> = cars.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c2", "c3", "c4", "c5"]);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let store = store();

        let car = store.get_by_id("c4").await.unwrap();
        assert_eq!(car.brand, "Mercedes-Benz");

        assert!(store.get_by_id("missing").await.is_none());
    }

    #[tokio::test]
    async fn test_create_then_fetch() {
        let store = store();
        let before = store.get_all().await.len();

        let created = store.create(new_car()).await;

        assert!(created.id.starts_with('c'));
        assert_eq!(store.get_all().await.len(), before + 1);
        assert_eq!(store.get_by_id(&created.id).await, Some(created.clone()));
        assert_eq!(store.get_all().await.last(), Some(&created));
    }

    #[tokio::test]
    async fn test_create_assigns_unique_ids() {
        let store = store();

        let a = store.create(new_car()).await;
        let b = store.create(new_car()).await;
        let c = store.create(new_car()).await;

        assert_ne!(a.id, b.id);
        assert_ne!(b.id, c.id);
        assert_ne!(a.id, c.id);
    }

    #[tokio::test]
    async fn test_clones_share_collection() {
        let store = store();
        let other = store.clone();

        let created = other.create(new_car()).await;

        assert!(store.get_by_id(&created.id).await.is_some());
    }

    #[tokio::test]
    async fn test_get_featured() {
        let featured = store().get_featured().await;
        assert!(featured.iter().all(|c| c.featured()));
        assert_eq!(featured.len(), 3);

        let plain = MockMarketplace::with_cars(
            fixtures::cars().into_iter().filter(|c| !c.featured()).collect(),
            Latency::none(),
        );
        assert!(plain.get_featured().await.is_empty());
    }

    #[tokio::test]
    async fn test_sign_in() {
        let store = store();

        let user = store.sign_in("someone@example.com").await.unwrap();
        assert_eq!(user, fixtures::default_user());

        let err = store.sign_in(fixtures::INVALID_LOGIN).await.unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[tokio::test]
    async fn test_get_user_and_sign_out() {
        let store = store();
        assert_eq!(store.get_user().await.username, "johndoe");
        store.sign_out().await;
    }
}
