use crate::core::codec::SequenceFormat;
use crate::core::mover::Strategy;
use crate::domain::model::MoveReport;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// Sequence given directly on the command line or in the config file.
    fn inline_values(&self) -> Option<&[i64]>;
    /// Sequence file, relative to the storage root.
    fn input_path(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
    fn output_name(&self) -> &str;
    fn output_formats(&self) -> &[SequenceFormat];
    fn strategy(&self) -> Strategy;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<i64>>;
    async fn transform(&self, data: Vec<i64>) -> Result<MoveReport>;
    async fn load(&self, report: MoveReport) -> Result<String>;
}
