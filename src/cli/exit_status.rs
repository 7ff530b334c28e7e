use std::process::ExitCode;

/// Process exit status of `jpug-doc-tool`.
///
/// - `Success` (0): dictionaries written, no mismatches, config created, or
///   nothing to do
/// - `Failure` (1): `check-word` reported mismatches, or `init` found a config
///   already in place
/// - `Error` (2): the run was aborted by git, `version.sgml`, the config or a
///   dictionary write
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    /// The command ran to the end but has something to report.
    Failure,
    /// Fatal error, printed as `Error: ...` by `main`.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::SUCCESS,
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
