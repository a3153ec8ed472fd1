// Neural-network building blocks on top of the scalar engine.

pub mod layers;
pub mod losses;
pub mod module;

pub use layers::{Layer, Neuron, MLP};
pub use losses::{accuracy, max_margin_loss};
pub use module::Module;
