pub mod cart;
pub mod checkout;
pub mod config;
pub mod error;
pub mod favorites;
pub mod pricing;
pub mod store;
pub mod utils;

pub use cart::{Cart, CartItem};
pub use checkout::{quote_delivery, DeliveryQuote};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use favorites::Favorites;
pub use pricing::{calculate_fee, FeeBreakdown, FeePolicy, FeeTier};
pub use store::{KvStore, MemoryStore};
pub use utils::geo::{estimate_distance, Coordinate};
