use std::path::PathBuf;

use contact_cli::pipeline::ConvertReport;

#[derive(Debug)]
pub struct ConvertResult {
    pub input: PathBuf,
    /// `None` on a dry run.
    pub output: Option<PathBuf>,
    pub report: ConvertReport,
}
