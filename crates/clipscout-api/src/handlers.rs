//! Request handlers.

pub mod analyze;
pub mod export;
pub mod health;

pub use analyze::*;
pub use export::*;
pub use health::*;
