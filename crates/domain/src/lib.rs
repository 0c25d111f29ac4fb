pub mod accounting;
pub mod entities;
pub mod events;
pub mod storage;
pub mod train;

pub use accounting::*;
pub use entities::*;
pub use events::*;
pub use storage::*;
pub use train::*;
pub use yard_core::{ContainerKind, YardError, YardResult};
