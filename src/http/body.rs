use std::{fmt, io, sync::Arc};

use super::{FormBody, MultipartBody};

/// Something that can write its bytes into a sink.
///
/// This is the only access a body gives to its content. Writing borrows the
/// body, so the same body can be written again when the request is sent.
pub trait WriteBody: Send + Sync {
    fn write_to(&self, sink: &mut dyn io::Write) -> io::Result<()>;
}

impl WriteBody for Vec<u8> {
    fn write_to(&self, sink: &mut dyn io::Write) -> io::Result<()> {
        sink.write_all(self)
    }
}

impl WriteBody for String {
    fn write_to(&self, sink: &mut dyn io::Write) -> io::Result<()> {
        sink.write_all(self.as_bytes())
    }
}

impl WriteBody for &'static str {
    fn write_to(&self, sink: &mut dyn io::Write) -> io::Result<()> {
        sink.write_all(self.as_bytes())
    }
}

impl WriteBody for &'static [u8] {
    fn write_to(&self, sink: &mut dyn io::Write) -> io::Result<()> {
        sink.write_all(self)
    }
}

/// An opaque body: a content type and a writer for its bytes.
#[derive(Clone)]
pub struct Payload {
    content_type: Option<String>,
    source: Arc<dyn WriteBody>,
}

impl Payload {
    pub fn new(content_type: Option<&str>, source: impl WriteBody + 'static) -> Self {
        Payload {
            content_type: content_type.map(str::to_string),
            source: Arc::new(source),
        }
    }

    /// A payload without a content type.
    pub fn bytes(source: impl WriteBody + 'static) -> Self {
        Payload::new(None, source)
    }

    /// A `text/plain` payload holding `text`.
    pub fn text(text: impl Into<String>) -> Self {
        Payload::new(Some("text/plain; charset=utf-8"), text.into())
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn write_to(&self, sink: &mut dyn io::Write) -> io::Result<()> {
        self.source.write_to(sink)
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Payload")
            .field("content_type", &self.content_type)
            .finish_non_exhaustive()
    }
}

/// Body of an outgoing request. A request without a body has `None`.
#[derive(Debug, Clone)]
pub enum RequestBody {
    Multipart(MultipartBody),
    Form(FormBody),
    Other(Payload),
}

impl RequestBody {
    pub fn content_type(&self) -> Option<String> {
        match self {
            RequestBody::Multipart(body) => Some(body.content_type()),
            RequestBody::Form(_) => Some(FormBody::CONTENT_TYPE.to_string()),
            RequestBody::Other(payload) => payload.content_type().map(str::to_string),
        }
    }

    pub fn write_to(&self, sink: &mut dyn io::Write) -> io::Result<()> {
        match self {
            RequestBody::Multipart(body) => body.write_to(sink),
            RequestBody::Form(body) => body.write_to(sink),
            RequestBody::Other(payload) => payload.write_to(sink),
        }
    }
}

impl From<MultipartBody> for RequestBody {
    fn from(body: MultipartBody) -> Self {
        RequestBody::Multipart(body)
    }
}

impl From<FormBody> for RequestBody {
    fn from(body: FormBody) -> Self {
        RequestBody::Form(body)
    }
}

impl From<Payload> for RequestBody {
    fn from(payload: Payload) -> Self {
        RequestBody::Other(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_writes_repeatedly() {
        let payload = Payload::new(Some("application/json"), "{ \"some\": \"json\" }");

        let mut first = Vec::new();
        let mut second = Vec::new();
        payload.write_to(&mut first).unwrap();
        payload.write_to(&mut second).unwrap();

        assert_eq!(first, b"{ \"some\": \"json\" }");
        assert_eq!(first, second);
        assert_eq!(payload.content_type(), Some("application/json"));
    }

    #[test]
    fn other_body_reports_payload_content_type() {
        let body = RequestBody::from(Payload::bytes(vec![1u8, 2, 3]));
        assert_eq!(body.content_type(), None);

        let body = RequestBody::from(Payload::text("hi"));
        assert_eq!(
            body.content_type().as_deref(),
            Some("text/plain; charset=utf-8")
        );
    }
}
