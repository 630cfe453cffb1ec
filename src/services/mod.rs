pub mod error;
pub mod fixtures;
pub mod mock;
pub mod session;
pub mod traits;
pub mod types;

pub use error::AuthError;
pub use mock::MockMarketplace;
pub use session::{Registration, Session};
pub use traits::{AuthService, CarStore};
pub use types::Latency;
