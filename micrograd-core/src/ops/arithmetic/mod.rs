pub mod add;
pub mod div;
pub mod mul;
pub mod neg;
pub mod pow;
pub mod sub;

pub use add::{add_op, radd_op};
pub use div::{div_op, rdiv_op};
pub use mul::{mul_op, rmul_op};
pub use neg::neg_op;
pub use pow::{pow_op, pow_scalar};
pub use sub::{rsub_op, sub_op};
