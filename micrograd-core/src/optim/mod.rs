//! Parameter updates driven by accumulated gradients.

pub mod lr_scheduler;
pub mod optimizer;
pub mod sgd;

pub use lr_scheduler::{LinearDecay, LrScheduler};
pub use optimizer::Optimizer;
pub use sgd::Sgd;
