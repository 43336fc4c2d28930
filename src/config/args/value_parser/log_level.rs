use std::str::FromStr;

const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

/// Unrecognized levels fall back to `info` instead of failing the run.
pub fn parse_log_level_or_default(value: Option<&str>) -> log::Level {
    let Some(value) = value else {
        return DEFAULT_LOG_LEVEL;
    };

    if value.eq_ignore_ascii_case("warning") {
        return log::Level::Warn;
    }

    log::Level::from_str(value).unwrap_or(DEFAULT_LOG_LEVEL)
}
