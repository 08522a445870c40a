//! Parameter and header accessors.
//!
//! # Responsibilities
//! - Look up single and multi-valued parameters with defaults
//! - Coerce parameter values to int/bool without surfacing parse errors
//! - Check the server-side-include feature header
//!
//! # Design Decisions
//! - A present-but-blank value counts as missing for the string accessors
//! - Parse failures resolve to the default and emit a debug event; the
//!   `try_*` variants return the cause instead
//! - Name lookup is case-sensitive (headers are not; that is the
//!   adapter's concern)

use crate::accessor::error::ValueError;
use crate::accessor::is_blank;
use crate::request::info::RequestInfo;

/// Header consulted by [`is_ssi_enabled`].
pub const SSI_ENABLED_HEADER: &str = "X-SSI-Enabled";

/// Parameter value, or the empty string when absent or blank.
pub fn parameter<R: RequestInfo>(req: &R, name: &str) -> String {
    parameter_or(req, name, "")
}

/// Parameter value, or `default` when the parameter is absent, blank, or
/// the name itself is blank.
pub fn parameter_or<R: RequestInfo>(req: &R, name: &str, default: &str) -> String {
    if is_blank(name) {
        return default.to_string();
    }
    match req.parameter(name).and_then(|p| p.as_str()) {
        Some(value) if !is_blank(value) => value.to_string(),
        _ => default.to_string(),
    }
}

/// True iff the parameter exists at all; a blank value still counts.
/// A blank name never matches.
pub fn has_parameter<R: RequestInfo>(req: &R, name: &str) -> bool {
    !is_blank(name) && req.parameter(name).is_some()
}

/// Parameter parsed as a base-10 integer.
///
/// Absent or blank yields [`ValueError::Missing`]; a non-numeric value
/// yields [`ValueError::Int`].
pub fn try_int_parameter<R: RequestInfo>(req: &R, name: &str) -> Result<i64, ValueError> {
    let value = parameter(req, name);
    if value.is_empty() {
        return Err(ValueError::Missing);
    }
    Ok(value.parse::<i64>()?)
}

/// Parameter as integer, or `default` when absent or unparseable.
pub fn int_parameter_or<R: RequestInfo>(req: &R, name: &str, default: i64) -> i64 {
    match try_int_parameter(req, name) {
        Ok(value) => value,
        Err(ValueError::Missing) => default,
        Err(err) => {
            tracing::debug!(name = %name, error = %err, "Unable to parse int parameter");
            default
        }
    }
}

/// Parameter parsed as a boolean literal, case-insensitively.
pub fn try_bool_parameter<R: RequestInfo>(req: &R, name: &str) -> Result<bool, ValueError> {
    let param = req.parameter(name).ok_or(ValueError::Missing)?;
    let value = param.string_value()?;
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ValueError::Bool(value.to_string()))
    }
}

/// Parameter as boolean: `default` when absent, `false` when present but
/// not a recognizable boolean literal.
pub fn bool_parameter_or<R: RequestInfo>(req: &R, name: &str, default: bool) -> bool {
    match try_bool_parameter(req, name) {
        Ok(value) => value,
        Err(ValueError::Missing) => default,
        Err(err) => {
            tracing::debug!(name = %name, error = %err, "Unable to parse bool parameter");
            false
        }
    }
}

/// Decoded value of a possibly-encoded parameter, or the empty string
/// when the name is blank, the parameter is absent, or decoding fails.
/// Unlike [`parameter`], a present-but-blank value is returned as-is.
pub fn parameter_value_or_empty<R: RequestInfo>(req: &R, name: &str) -> String {
    if is_blank(name) {
        return String::new();
    }
    req.parameter(name)
        .map(|p| p.string_value_or_empty())
        .unwrap_or_default()
}

/// All decodable values of a multi-valued parameter, in request order.
/// Empty when the parameter is absent.
pub fn parameter_list<R: RequestInfo>(req: &R, name: &str) -> Vec<String> {
    req.parameter_values(name)
        .into_iter()
        .filter_map(|p| p.as_str().map(str::to_string))
        .collect()
}

/// True iff the `X-SSI-Enabled` header is present and reads `true`.
pub fn is_ssi_enabled<R: RequestInfo>(req: &R) -> bool {
    req.header(SSI_ENABLED_HEADER)
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
