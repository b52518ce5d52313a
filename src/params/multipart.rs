use std::io;

use crate::http::{FormPart, MultipartBody, multipart::CONTENT_DISPOSITION};

use super::{
    ParsedParams,
    buffer::{body_buffer, utf8},
    disposition::params_from,
};

/// Maps every named part of `body`. Later parts overwrite earlier ones with the same name.
///
/// # Errors
///
/// Fails when draining a field's payload fails; nothing is returned for the
/// other parts in that case.
pub fn decode(body: &MultipartBody) -> io::Result<ParsedParams> {
    let mut params = ParsedParams::new();
    for part in body.parts() {
        if let Some((name, value)) = decode_part(part)? {
            params.insert(name, value);
        }
    }
    Ok(params)
}

/// The `(name, value)` entry a single part contributes.
///
/// * no `name` parameter: nothing
/// * `name` and `filename`: the filename, the payload is never read
/// * `name` only: the payload as UTF-8 text, or `""` when there is no payload
pub fn decode_part<P: FormPart + ?Sized>(part: &P) -> io::Result<Option<(String, String)>> {
    let mut header_params = params_from(part.headers().values(CONTENT_DISPOSITION));

    let Some(name) = header_params.remove("name") else {
        tracing::debug!("skipping multipart part without a name");
        return Ok(None);
    };

    // File content is not text; surface the filename instead.
    if let Some(filename) = header_params.remove("filename") {
        return Ok(Some((name, filename)));
    }

    let value = match part.payload() {
        Some(payload) => utf8(body_buffer(payload)?),
        None => {
            tracing::warn!(%name, "multipart part payload unavailable, using empty text");
            String::new()
        }
    };
    Ok(Some((name, value)))
}
