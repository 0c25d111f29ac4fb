//! 控制室
//!
//! 按到站顺序处理列车：为每个集装箱匹配空闲工人和同类型、有余量的仓库。

pub mod control_room;
pub mod registry;
pub mod report;

pub use control_room::*;
pub use registry::*;
pub use report::*;
