pub mod error;
pub mod id;
pub mod method;
pub mod money;
pub mod payment;
pub mod settings;
pub mod transaction;
