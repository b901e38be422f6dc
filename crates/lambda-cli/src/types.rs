use std::path::PathBuf;

use lambda_model::ValidationReport;

#[derive(Debug)]
pub struct ValidateOutcome {
    pub input: PathBuf,
    pub component_name: String,
    pub component_version: String,
    pub report: ValidationReport,
}

impl ValidateOutcome {
    pub fn has_errors(&self) -> bool {
        !self.report.is_empty()
    }
}
