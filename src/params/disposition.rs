//! Lenient parsing of `;`-separated header parameters such as
//! `form-data; name="file"; filename="filename.jpeg"`.

use std::collections::HashMap;

/// Collects `key=value` parameters from every header value.
///
/// Segments without `=` (like the leading `form-data`) are skipped. Every `"`
/// is removed from a value, not only an enclosing pair. Later keys win.
pub fn params_from<'a, I>(header_values: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut map = HashMap::with_capacity(3);
    for value in header_values {
        for segment in value.split(';') {
            if let Some((key, raw)) = segment.trim().split_once('=') {
                map.insert(key.to_string(), raw.replace('"', "").trim().to_string());
            }
        }
    }
    map
}
