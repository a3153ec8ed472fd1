pub mod moons;
pub mod traits;
pub mod vec_dataset;

pub use moons::make_moons;
pub use traits::Dataset;
pub use vec_dataset::VecDataset;
