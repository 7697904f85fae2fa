use crate::core::codec::{render_sequence, SequenceFormat};
use crate::core::{MoveReport, Pipeline};
use crate::utils::error::Result;
use std::io::Write;
use std::time::Instant;

pub struct MoverEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> MoverEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// Extract and transform only; nothing is written.
    pub async fn run_report(&self) -> Result<MoveReport> {
        let started = Instant::now();
        tracing::info!("📥 Extracting sequence...");
        let values = self.pipeline.extract().await?;
        tracing::info!("Extracted {} values", values.len());

        tracing::info!("🔄 Moving zeros...");
        let report = self.pipeline.transform(values).await?;
        tracing::info!(
            "Moved {} zero(s) behind {} non-zero value(s) using '{}' in {:?}",
            report.zero_count,
            report.non_zero_count(),
            report.strategy,
            started.elapsed()
        );

        Ok(report)
    }

    /// Extract and transform, then print the result as one line to `out` instead of
    /// writing files.
    pub async fn run_to_writer<W: Write>(
        &self,
        format: SequenceFormat,
        out: &mut W,
    ) -> Result<MoveReport> {
        let report = self.run_report().await?;
        let rendered = render_sequence(&report.output, format)?;
        writeln!(out, "{}", rendered.trim_end())?;
        Ok(report)
    }

    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("Starting zero-mover run");

        let report = self.run_report().await?;

        tracing::info!("💾 Writing output...");
        let output_path = self.pipeline.load(report).await?;
        tracing::info!("Output saved to: {} ({:?} total)", output_path, started.elapsed());

        Ok(output_path)
    }
}
