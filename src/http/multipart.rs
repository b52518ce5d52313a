//! `multipart/form-data` request bodies.

use std::io;

use uuid::Uuid;

use super::{Headers, Payload};

pub const CONTENT_DISPOSITION: &str = "Content-Disposition";

/// Access to the pieces of a multipart part.
///
/// A part source that cannot produce its payload returns `None` from
/// [`FormPart::payload`].
pub trait FormPart {
    fn headers(&self) -> &Headers;

    fn payload(&self) -> Option<&Payload>;
}

/// One part of a multipart body.
#[derive(Debug, Clone)]
pub struct Part {
    headers: Headers,
    body: Payload,
}

impl Part {
    pub fn new(headers: Headers, body: Payload) -> Self {
        Part { headers, body }
    }

    /// A form field part with a `form-data` disposition.
    pub fn form_data(name: &str, filename: Option<&str>, body: Payload) -> Self {
        let mut disposition = String::from("form-data; name=");
        append_quoted(&mut disposition, name);
        if let Some(filename) = filename {
            disposition.push_str("; filename=");
            append_quoted(&mut disposition, filename);
        }

        Part::new(Headers::of([(CONTENT_DISPOSITION, disposition)]), body)
    }

    pub fn body(&self) -> &Payload {
        &self.body
    }
}

impl FormPart for Part {
    fn headers(&self) -> &Headers {
        &self.headers
    }

    fn payload(&self) -> Option<&Payload> {
        Some(&self.body)
    }
}

/// Quotes `value`, escaping the characters that would end the header.
fn append_quoted(target: &mut String, value: &str) {
    target.push('"');
    for c in value.chars() {
        match c {
            '\n' => target.push_str("%0A"),
            '\r' => target.push_str("%0D"),
            '"' => target.push_str("%22"),
            _ => target.push(c),
        }
    }
    target.push('"');
}

#[derive(Debug, Clone)]
pub struct MultipartBody {
    boundary: String,
    media_type: String,
    parts: Vec<Part>,
}

impl MultipartBody {
    pub const FORM: &'static str = "multipart/form-data";

    pub fn builder() -> MultipartBuilder {
        MultipartBuilder::new(Uuid::new_v4().to_string())
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn content_type(&self) -> String {
        format!("{}; boundary={}", self.media_type, self.boundary)
    }

    pub fn write_to(&self, sink: &mut dyn io::Write) -> io::Result<()> {
        for part in &self.parts {
            write!(sink, "--{}\r\n", self.boundary)?;
            for (name, value) in part.headers.iter() {
                write!(sink, "{}: {}\r\n", name, value)?;
            }
            if let Some(content_type) = part.body.content_type() {
                write!(sink, "Content-Type: {}\r\n", content_type)?;
            }
            sink.write_all(b"\r\n")?;
            part.body.write_to(sink)?;
            sink.write_all(b"\r\n")?;
        }
        write!(sink, "--{}--\r\n", self.boundary)
    }
}

pub struct MultipartBuilder {
    boundary: String,
    media_type: String,
    parts: Vec<Part>,
}

impl MultipartBuilder {
    pub fn new(boundary: impl Into<String>) -> Self {
        MultipartBuilder {
            boundary: boundary.into(),
            media_type: MultipartBody::FORM.to_string(),
            parts: Vec::new(),
        }
    }

    pub fn media_type(mut self, media_type: &str) -> Self {
        self.media_type = media_type.to_string();
        self
    }

    pub fn add_part(mut self, headers: Headers, body: Payload) -> Self {
        self.parts.push(Part::new(headers, body));
        self
    }

    /// Adds a plain form field.
    pub fn add_form_data_part(mut self, name: &str, value: &str) -> Self {
        self.parts
            .push(Part::form_data(name, None, Payload::bytes(value.to_string())));
        self
    }

    /// Adds a file upload field.
    pub fn add_form_data_file(mut self, name: &str, filename: &str, body: Payload) -> Self {
        self.parts.push(Part::form_data(name, Some(filename), body));
        self
    }

    pub fn build(self) -> MultipartBody {
        MultipartBody {
            boundary: self.boundary,
            media_type: self.media_type,
            parts: self.parts,
        }
    }
}
