mod fixture;
pub mod tracing;

pub use fixture::{LogFixture, measured, unmeasured};
pub use tracing::{CapturedEvent, capture_events};
