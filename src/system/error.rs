use thiserror::Error;

/// A system-wide statistic the host could not supply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    #[error("metric unavailable: {0}")]
    MetricUnavailable(&'static str),
}

/// Why a single process was left out of the top-consumer scan.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeError {
    #[error("process {0} exited during the scan")]
    Exited(u32),

    #[error("access to process {0} denied")]
    AccessDenied(u32),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TickError {
    #[error(transparent)]
    MetricUnavailable(#[from] SampleError),

    /// Every enumerated process was skipped, so there is no top consumer to report.
    #[error("no accessible process data ({skipped} of {enumerated} processes skipped)")]
    NoProcessData { enumerated: usize, skipped: usize },
}

impl TickError {
    pub fn is_no_process_data(&self) -> bool {
        matches!(self, TickError::NoProcessData { .. })
    }
}

pub type TickResult<T> = std::result::Result<T, TickError>;
