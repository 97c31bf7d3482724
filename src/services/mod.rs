//! Services layer: storage paths/persistence and the async IO bridge.

pub mod runtime;
pub mod storage;

pub use runtime::{AsyncResult, AsyncRuntime};
