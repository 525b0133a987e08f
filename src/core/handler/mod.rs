// src/core/handler/mod.rs

//! Maps parsed commands to handler categories and invokes the application's
//! handler executor for them.

pub mod category;
pub mod dispatcher;
pub mod executor;
pub mod standalone;

pub use category::HandlerCategory;
pub use dispatcher::Dispatcher;
pub use executor::{HandlerContext, HandlerExecutor};
pub use standalone::StandaloneExecutor;
