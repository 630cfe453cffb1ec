use std::time::Duration;

/// Artificial delays applied before each mock operation returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub get_user: Duration,
    pub sign_in: Duration,
    pub register: Duration,
    pub get_all: Duration,
    pub get_by_id: Duration,
    pub get_featured: Duration,
    pub create: Duration,
}

impl Latency {
    /// No delays at all
    pub fn none() -> Self {
        Self {
            get_user: Duration::ZERO,
            sign_in: Duration::ZERO,
            register: Duration::ZERO,
            get_all: Duration::ZERO,
            get_by_id: Duration::ZERO,
            get_featured: Duration::ZERO,
            create: Duration::ZERO,
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            get_user: Duration::from_millis(500),
            sign_in: Duration::from_millis(800),
            register: Duration::from_millis(1000),
            get_all: Duration::from_millis(600),
            get_by_id: Duration::from_millis(400),
            get_featured: Duration::from_millis(400),
            create: Duration::from_millis(1000),
        }
    }
}

/// Sleep for `delay` unless it is zero
pub async fn simulate(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
