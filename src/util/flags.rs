//! Truth values of build-wide definitions.

/// Values that read as false, compared case-insensitively.
const FALSE_VALUES: &[&str] = &["OFF", "NO", "FALSE", "N", "0", ""];

/// Whether a definition value reads as false.
///
/// False values are `OFF`, `NO`, `FALSE`, `N`, `0`, the empty string, and
/// anything equal to `NOTFOUND` or ending in `-NOTFOUND`, all ignoring case.
/// Whitespace is significant: `" "` is not empty and so reads as true.
pub fn is_off(value: &str) -> bool {
    let upper = value.to_ascii_uppercase();
    FALSE_VALUES.contains(&upper.as_str()) || upper == "NOTFOUND" || upper.ends_with("-NOTFOUND")
}
