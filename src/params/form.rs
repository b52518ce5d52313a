use crate::http::FormBody;

use super::ParsedParams;

/// Maps each decoded pair of `body`, in order. A repeated name keeps its last value.
pub fn decode(body: &FormBody) -> ParsedParams {
    (0..body.size())
        .map(|i| (body.name(i), body.value(i)))
        .collect()
}
