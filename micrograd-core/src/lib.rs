//! Scalar reverse-mode automatic differentiation with pluggable arithmetic
//! backends.
//!
//! ```
//! use micrograd_core::backend::CpuBackend;
//! use micrograd_core::Value;
//!
//! let x = Value::<CpuBackend>::new(-4.0);
//! let y = &(&x * &x) + 3.0;
//! y.backward();
//! assert_eq!(y.data(), 19.0);
//! assert_eq!(x.grad(), -8.0);
//! ```

pub mod autograd;
pub mod backend;
pub mod config;
pub mod device;
pub mod error;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod utils;

pub use autograd::Value;
pub use backend::Backend;
pub use device::Device;
pub use error::MicrogradError;
// Re-export traits required by public functions/structs
pub use num_traits;
