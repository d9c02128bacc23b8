use std::io::Write;
use std::path::Path;

use crate::core::{render, split};
use crate::domain::model::{OptionRecord, RenderResult};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::Result;

/// Pipeline over a documentation source file: extract its lines, transform
/// five-field lines into rendered records, load the text to stdout or to
/// the configured output file.
pub struct DocPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> DocPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for DocPipeline<S, C> {
    fn extract(&self) -> Result<Vec<String>> {
        tracing::debug!("reading source file: {}", self.config.input_path());
        self.storage.read_lines(Path::new(self.config.input_path()))
    }

    fn transform(&self, lines: Vec<String>) -> Result<RenderResult> {
        let mut records = Vec::new();
        let mut rendered = String::new();
        let mut dropped = 0usize;

        for line in &lines {
            let fields = split::split_fields(line);
            match OptionRecord::from_fields(&fields) {
                Some(record) => {
                    rendered.push_str(&render::render_record(&record));
                    records.push(record);
                }
                // Wrong field count: the line is dropped without diagnostics.
                None => dropped += 1,
            }
        }

        Ok(RenderResult {
            records,
            rendered,
            dropped,
        })
    }

    fn load(&self, result: RenderResult) -> Result<String> {
        match self.config.output_path() {
            Some(path) => {
                tracing::debug!("writing {} bytes to {}", result.rendered.len(), path);
                self.storage
                    .write_file(Path::new(path), result.rendered.as_bytes())?;
                Ok(path.to_string())
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(result.rendered.as_bytes())?;
                stdout.flush()?;
                Ok("stdout".to_string())
            }
        }
    }
}
