pub mod hinge;

pub use hinge::{accuracy, max_margin_loss};
