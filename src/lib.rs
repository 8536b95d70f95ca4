mod connection;
mod data_source;
mod factory;
mod managed;
mod transaction;

pub use ::anyhow::Context;
pub use connection::*;
pub use data_source::*;
pub use factory::*;
pub use managed::*;
pub use transaction::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
