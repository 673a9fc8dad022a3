use crate::core::{MessageSink, Pipeline, Result, RunSummary};

/// Runs the two geoprocessing steps in order and forwards their status
/// messages to the console.
///
/// A failed step reports the error plus the tool's generic failure line and
/// aborts the run; the buffer step is never attempted against a point that
/// was not produced.
pub struct ToolEngine<P: Pipeline, M: MessageSink> {
    pipeline: P,
    reporter: M,
}

impl<P: Pipeline, M: MessageSink> ToolEngine<P, M> {
    pub fn new(pipeline: P, reporter: M) -> Self {
        Self { pipeline, reporter }
    }

    pub fn run(&self) -> Result<RunSummary> {
        self.reporter
            .message("Converting WGS 1984 point to the target projected point.");

        let projection = match self.pipeline.project() {
            Ok(outcome) => outcome,
            Err(e) => {
                self.reporter.error(&e.to_string());
                self.reporter.error("There was an error running this tool");
                return Err(e);
            }
        };
        for line in &projection.report.messages {
            self.reporter.message(line);
        }

        let buffers = match self.pipeline.buffer(&projection.point) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.reporter.error(&e.to_string());
                self.reporter.error("There was an error running this tool");
                return Err(e);
            }
        };
        for line in &buffers.report.messages {
            self.reporter.message(line);
        }

        self.reporter
            .message("Create buffers from point tool has completed running.");

        Ok(RunSummary {
            point_artifact: projection.report.artifact,
            buffer_artifact: buffers.report.artifact,
            ring_count: buffers.ring_count,
        })
    }
}
