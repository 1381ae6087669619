//! Business logic services

pub mod clock;
pub mod lending;
pub mod session;

pub use clock::{Clock, ManualClock, SystemClock};
pub use lending::LendingService;
pub use session::Session;
