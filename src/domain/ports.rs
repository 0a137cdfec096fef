use crate::domain::criteria::{CriteriaConfig, WeightConfig};
use crate::domain::model::ReportFormat;
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Everything a new session needs to start.
pub trait ConfigProvider: Send + Sync {
    fn criteria(&self) -> CriteriaConfig;
    fn weights(&self) -> WeightConfig;
    fn import_files(&self) -> &[String];
    fn include_samples(&self) -> bool;
    fn output_path(&self) -> Option<&str>;
    fn output_format(&self) -> ReportFormat;
    fn filename_pattern(&self) -> &str;
}
