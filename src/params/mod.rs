//! Extraction of form parameters from outgoing request bodies.

use std::collections::BTreeMap;

use crate::{
    Result,
    http::{Request, RequestBody},
};

pub mod buffer;
pub mod disposition;
pub mod form;
pub mod multipart;

/// Field name to field value. File parts map to their filename.
pub type ParsedParams = BTreeMap<String, String>;

/// Parses the parameters carried by `body`.
///
/// A missing body, or one that is neither multipart nor url-encoded, yields
/// an empty map.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] when a multipart field's payload cannot be drained.
pub fn parse(body: Option<&RequestBody>) -> Result<ParsedParams> {
    let params = match body {
        None => ParsedParams::new(),
        Some(RequestBody::Multipart(body)) => multipart::decode(body)?,
        Some(RequestBody::Form(body)) => form::decode(body),
        Some(RequestBody::Other(_)) => ParsedParams::new(),
    };
    Ok(params)
}

/// An outgoing request paired with the parameters parsed from its body.
#[derive(Debug, Clone)]
pub struct RequestParams {
    request: Request,
    params: ParsedParams,
}

impl RequestParams {
    pub fn new(request: Request, params: ParsedParams) -> Self {
        RequestParams { request, params }
    }

    /// Parses `request`'s body without altering the request.
    pub fn parse(request: Request) -> Result<Self> {
        let params = parse(request.body.as_ref())?;
        Ok(RequestParams::new(request, params))
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn post_params(&self) -> &ParsedParams {
        &self.params
    }

    pub fn into_parts(self) -> (Request, ParsedParams) {
        (self.request, self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Error,
        http::{FormBody, Headers, MultipartBody, Payload},
    };

    #[test]
    fn absent_and_opaque_bodies_are_empty() {
        assert!(parse(None).unwrap().is_empty());

        let opaque = RequestBody::from(Payload::new(Some("application/json"), "{\"a\":1}"));
        assert!(parse(Some(&opaque)).unwrap().is_empty());
    }

    #[test]
    fn dispatches_on_body_kind() {
        let form = RequestBody::from(FormBody::builder().add("a", "1").build());
        assert_eq!(parse(Some(&form)).unwrap()["a"], "1");

        let multipart = RequestBody::from(
            MultipartBody::builder()
                .add_form_data_part("b", "2")
                .build(),
        );
        assert_eq!(parse(Some(&multipart)).unwrap()["b"], "2");
    }

    #[test]
    fn multipart_io_failure_is_an_error() {
        struct Failing;

        impl crate::http::WriteBody for Failing {
            fn write_to(&self, _sink: &mut dyn std::io::Write) -> std::io::Result<()> {
                Err(std::io::Error::other("reset"))
            }
        }

        let body = RequestBody::from(
            MultipartBody::builder()
                .add_part(
                    Headers::of([("Content-Disposition", "form-data; name=\"x\"")]),
                    Payload::bytes(Failing),
                )
                .build(),
        );

        assert!(matches!(parse(Some(&body)), Err(Error::Io(_))));
    }

    #[test]
    fn request_params_keep_the_request() {
        let request = Request::post("/signup", FormBody::builder().add("user", "bob").build());
        let before = request.to_bytes().unwrap();

        let parsed = RequestParams::parse(request).unwrap();
        assert_eq!(parsed.post_params()["user"], "bob");
        assert_eq!(parsed.request().to_bytes().unwrap(), before);

        let (request, params) = parsed.into_parts();
        assert_eq!(request.url, "/signup");
        assert_eq!(params.len(), 1);
    }
}
