pub mod algebra;
pub mod set;

pub use crate::domain::ports::{Codec, Element};
pub use crate::utils::error::Result;
pub use set::Set;
