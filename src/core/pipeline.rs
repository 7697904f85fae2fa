use crate::core::codec::{parse_sequence, render_sequence, SequenceFormat};
use crate::core::mover::{count_zeros, is_zeros_trailing};
use crate::core::{ConfigProvider, MoveReport, Pipeline, Storage};
use crate::utils::error::{MoverError, Result};

pub struct ZeroMovePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ZeroMovePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// 沒有指定輸出格式時預設輸出文字檔
    pub fn effective_formats(&self) -> Vec<SequenceFormat> {
        let formats = self.config.output_formats();
        if formats.is_empty() {
            vec![SequenceFormat::Text]
        } else {
            formats.to_vec()
        }
    }

    pub fn output_file_name(&self, format: SequenceFormat) -> String {
        format!("{}.{}", self.config.output_name(), format.extension())
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ZeroMovePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<i64>> {
        if let Some(values) = self.config.inline_values() {
            tracing::debug!("Using {} inline values", values.len());
            return Ok(values.to_vec());
        }

        let path = self
            .config
            .input_path()
            .ok_or_else(|| MoverError::MissingConfigError {
                field: "input".to_string(),
            })?;

        let format = SequenceFormat::from_path(path);
        tracing::debug!("Reading {:?} sequence from: {}", format, path);

        let bytes = self.storage.read_file(path).await?;
        let text = String::from_utf8(bytes).map_err(|source| MoverError::EncodingError {
            path: path.to_string(),
            source,
        })?;
        parse_sequence(&text, format)
    }

    async fn transform(&self, data: Vec<i64>) -> Result<MoveReport> {
        let strategy = self.config.strategy();
        let input_len = data.len();

        tracing::debug!("Moving zeros with '{}' strategy over {} values", strategy, input_len);
        let output = strategy.apply(data);

        if output.len() != input_len || !is_zeros_trailing(&output) {
            return Err(MoverError::ProcessingError {
                message: format!(
                    "'{}' strategy broke the output invariant: {:?}",
                    strategy, output
                ),
            });
        }

        Ok(MoveReport {
            strategy,
            input_len,
            zero_count: count_zeros(&output),
            output,
        })
    }

    async fn load(&self, report: MoveReport) -> Result<String> {
        let formats = self.effective_formats();
        tracing::debug!("Writing {} output file(s)", formats.len());

        let mut written = Vec::with_capacity(formats.len());
        for format in formats {
            let mut content = render_sequence(&report.output, format)?;
            if !content.is_empty() && !content.ends_with('\n') {
                content.push('\n');
            }

            let file_name = self.output_file_name(format);
            self.storage.write_file(&file_name, content.as_bytes()).await?;
            tracing::debug!("Wrote {} ({} bytes)", file_name, content.len());
            written.push(file_name);
        }

        // 回傳第一個寫出的檔案路徑
        let first = written.first().ok_or_else(|| MoverError::ProcessingError {
            message: "No output file was written".to_string(),
        })?;
        Ok(format!("{}/{}", self.config.output_path(), first))
    }
}
