// 为保持结构上的一致性, 以下clippy警告不启用
#![allow(clippy::needless_range_loop)]

mod util;

pub mod errors;
pub mod hand;
pub mod model;

pub use errors::*;
pub use hand::*;
pub use model::*;
