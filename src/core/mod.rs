pub mod codec;
pub mod engine;
pub mod mover;
pub mod pipeline;

pub use crate::domain::model::{MoveReport, Sequence};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
