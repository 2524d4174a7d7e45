// 通用工具
mod log;
pub mod misc;
