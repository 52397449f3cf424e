//! Request parameter helpers.

use crate::HttpError;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Prefix marking query parameters in request arguments (`p_name=value`).
pub const PARAMETER_PREFIX: &str = "p_";

/// Collect query parameters from request arguments.
///
/// Arguments named `p_<name>` become parameter `<name>`; everything else is
/// ignored.
pub fn collect_parameters_from_request<K, V, I>(args: I) -> BTreeMap<String, V>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
{
    args.into_iter()
        .filter_map(|(key, value)| {
            key.as_ref()
                .strip_prefix(PARAMETER_PREFIX)
                .map(|name| (name.to_string(), value))
        })
        .collect()
}

/// Decode a raw query string (without the leading `?`).
///
/// `+` decodes to a space. Keys without `=` get an empty value. When a key
/// repeats, the last value wins.
pub fn parse_query_string(query: &str) -> Result<BTreeMap<String, String>, HttpError> {
    let mut args = BTreeMap::new();
    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        args.insert(decode_component(key)?, decode_component(value)?);
    }
    Ok(args)
}

fn decode_component(component: &str) -> Result<String, HttpError> {
    let spaced = component.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(std::borrow::Cow::into_owned)
        .map_err(|_| HttpError::InvalidEncoding(component.to_string()))
}

/// Drop `null` values from a JSON object.
pub fn filter_none(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter().filter(|(_, value)| !value.is_null()).collect()
}
