//! Runtime configuration for chess-cli.
//!
//! Every value has a compile-time default and can be overridden via a
//! dedicated environment variable.

/// Default log filter when neither `RUST_LOG` nor `CHESS_CLI_LOG` is set.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Get the log filter directive.
///
/// Priority:
/// 1. `CHESS_CLI_LOG` env variable if set
/// 2. `warn` as fallback
///
/// `RUST_LOG`, when set, still takes precedence at subscriber setup.
pub fn get_log_filter() -> String {
    if let Ok(filter) = std::env::var("CHESS_CLI_LOG") {
        return filter;
    }

    DEFAULT_LOG_FILTER.to_string()
}

/// Get the FEN to start from when `--fen` is not passed.
///
/// Priority:
/// 1. `CHESS_CLI_START_FEN` env variable if set and non-empty
/// 2. `None`, meaning the standard starting position
pub fn get_start_fen() -> Option<String> {
    std::env::var("CHESS_CLI_START_FEN")
        .ok()
        .filter(|fen| !fen.trim().is_empty())
}
