use std::collections::BTreeMap;

/// Query parameters for a single request. Ordered so the rendered query
/// string never depends on insertion order.
pub type ParamMap = BTreeMap<String, String>;

/// Append `params` to `base` as a query string.
///
/// Keys are emitted in byte-wise order. Only spaces are escaped (as `%20`);
/// callers that pass other reserved characters must escape them first.
pub fn build_endpoint(base: &str, params: &ParamMap) -> String {
    if params.is_empty() {
        return base.to_string();
    }

    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", escape(key), escape(value)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{base}?{query}")
}

fn escape(raw: &str) -> String {
    raw.replace(' ', "%20")
}
