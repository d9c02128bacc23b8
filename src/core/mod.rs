pub mod engine;
pub mod pipeline;
pub mod render;
pub mod split;

pub use crate::domain::model::{OptionRecord, RenderResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
