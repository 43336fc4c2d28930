/// Lenient integer policy: a missing, empty or malformed value yields `default`
/// and never raises an error.
pub fn parse_int_or_default(value: Option<&str>, default: i64) -> i64 {
    value
        .and_then(|value| value.parse::<i64>().ok())
        .unwrap_or(default)
}
