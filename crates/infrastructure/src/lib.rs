pub mod database;
pub mod entity;
pub mod memory;
pub mod repositories;

pub use database::*;
pub use memory::*;
pub use repositories::*;
