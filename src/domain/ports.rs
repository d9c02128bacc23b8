use std::path::Path;

use crate::domain::model::RenderResult;
use crate::utils::error::Result;

/// Filesystem access used by the pipeline. Behind a trait so the transform
/// logic can run against in-memory fakes in tests.
pub trait Storage {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>>;
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    /// Destination file; `None` means standard output.
    fn output_path(&self) -> Option<&str>;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<String>>;
    fn transform(&self, lines: Vec<String>) -> Result<RenderResult>;
    fn load(&self, result: RenderResult) -> Result<String>;
}
