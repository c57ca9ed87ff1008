//! Command-line options.

use trav_conformance::HarnessConfig;

pub const USAGE: &str = "\
Usage: trav-check [options]

Options:
  --filter=<pattern>  Run only behaviors whose name contains <pattern>
  --sequential        Run behaviors one at a time
  --fail-fast         Stop each container's run at its first failure
  --cases=<n>         Generated cases per property check
  -v, --verbose       List passing behaviors too
  -h, --help          Show this message

Environment:
  TRAV_FILTER, TRAV_SEQUENTIAL, TRAV_FAIL_FAST, TRAV_PROPERTY_CASES
  set the same options; flags take precedence.
  RUST_LOG            Enable tracing output (e.g. RUST_LOG=trav_conformance=debug)";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("`--filter` needs a non-empty pattern")]
    EmptyFilter,
    #[error("invalid case count `{0}`: expected a positive integer")]
    InvalidCases(String),
}

#[derive(Debug, PartialEq, Eq)]
pub struct Options {
    pub config: HarnessConfig,
    pub verbose: bool,
    pub help: bool,
}

impl Options {
    /// Parse `args` (without the program name) on top of `config`.
    pub fn parse(args: &[String], config: HarnessConfig) -> Result<Self, UsageError> {
        let mut options = Options {
            config,
            verbose: false,
            help: false,
        };
        for arg in args {
            match arg.as_str() {
                "--sequential" => options.config.parallel = false,
                "--fail-fast" => options.config.fail_fast = true,
                "-v" | "--verbose" => options.verbose = true,
                "-h" | "--help" => options.help = true,
                _ => {
                    if let Some(pattern) = arg.strip_prefix("--filter=") {
                        if pattern.is_empty() {
                            return Err(UsageError::EmptyFilter);
                        }
                        options.config.filter = Some(pattern.to_string());
                    } else if let Some(raw) = arg.strip_prefix("--cases=") {
                        options.config.property_cases = match raw.parse::<u32>() {
                            Ok(cases) if cases > 0 => cases,
                            _ => return Err(UsageError::InvalidCases(raw.to_string())),
                        };
                    } else {
                        return Err(UsageError::UnknownOption(arg.clone()));
                    }
                }
            }
        }
        Ok(options)
    }
}
