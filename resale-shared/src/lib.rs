pub mod pii;
pub mod money;

pub use money::{format_mzn, MZN_SPACE};
pub use pii::Masked;
