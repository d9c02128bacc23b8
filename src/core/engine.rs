use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

/// Drives a pipeline through its three stages in order. Progress goes
/// through `tracing` only; stdout belongs to the rendered records.
pub struct Engine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> Engine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        tracing::debug!("extracting source lines");
        let lines = self.pipeline.extract()?;
        tracing::debug!("extracted {} lines", lines.len());

        let result = self.pipeline.transform(lines)?;
        tracing::debug!(
            "rendered {} records, dropped {} lines",
            result.records.len(),
            result.dropped
        );

        let destination = self.pipeline.load(result)?;
        tracing::debug!("output written to {}", destination);

        Ok(destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::RenderResult;
    use std::cell::RefCell;

    /// Records the order in which stages run.
    struct RecordingPipeline {
        calls: RefCell<Vec<&'static str>>,
    }

    impl Pipeline for RecordingPipeline {
        fn extract(&self) -> Result<Vec<String>> {
            self.calls.borrow_mut().push("extract");
            Ok(vec!["a||b||c||d||e".to_string()])
        }

        fn transform(&self, lines: Vec<String>) -> Result<RenderResult> {
            self.calls.borrow_mut().push("transform");
            assert_eq!(lines.len(), 1);
            Ok(RenderResult {
                records: Vec::new(),
                rendered: String::new(),
                dropped: 0,
            })
        }

        fn load(&self, _result: RenderResult) -> Result<String> {
            self.calls.borrow_mut().push("load");
            Ok("stdout".to_string())
        }
    }

    #[test]
    fn stages_run_in_order() {
        let engine = Engine::new(RecordingPipeline {
            calls: RefCell::new(Vec::new()),
        });

        let destination = engine.run().unwrap();

        assert_eq!(destination, "stdout");
        assert_eq!(
            *engine.pipeline.calls.borrow(),
            vec!["extract", "transform", "load"]
        );
    }
}
