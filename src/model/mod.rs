// 麻将数据模型
mod define;
mod meld;
mod tile;
mod win_context;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use define::*;
pub use meld::*;
pub use tile::*;
pub use win_context::*;
