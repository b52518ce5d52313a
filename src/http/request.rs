use std::io::Write;

use super::{Headers, Method, RequestBody, Version};

/// An outgoing HTTP request.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub version: Version,
    pub headers: Headers,
    pub body: Option<RequestBody>,
}

impl Request {
    pub fn new(method: Method, url: &str) -> Self {
        Request {
            method,
            url: url.to_string(),
            version: Version::HTTP1_1,
            headers: Headers::new(),
            body: None,
        }
    }

    pub fn get(url: &str) -> Self {
        Request::new(Method::Get, url)
    }

    pub fn post(url: &str, body: impl Into<RequestBody>) -> Self {
        Request::new(Method::Post, url).body(body)
    }

    pub fn body(mut self, body: impl Into<RequestBody>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.add(name, value);
        self
    }

    /// Renders the request as it would be sent over the wire.
    ///
    /// # Returns
    ///
    /// The request line, headers and body bytes, or the I/O error raised while
    /// writing the body.
    pub fn to_bytes(&self) -> std::io::Result<Vec<u8>> {
        let mut request = Vec::new();

        // Request line
        write!(request, "{} {} {}\r\n", self.method, self.url, self.version)?;

        // Headers
        for (key, value) in self.headers.iter() {
            write!(request, "{}: {}\r\n", key, value)?;
        }
        if let Some(content_type) = self.body.as_ref().and_then(RequestBody::content_type) {
            if self.headers.get("Content-Type").is_none() {
                write!(request, "Content-Type: {}\r\n", content_type)?;
            }
        }

        // Empty line separating headers and body
        request.extend_from_slice(b"\r\n");

        // Body
        if let Some(body) = &self.body {
            body.write_to(&mut request)?;
        }

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::FormBody;

    #[test]
    fn renders_form_post() {
        let request = Request::post(
            "/login",
            FormBody::builder().add("user", "a b").build(),
        )
        .header("Accept", "*/*");

        let bytes = request.to_bytes().unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "POST /login HTTP/1.1\r\n\
             Accept: */*\r\n\
             Content-Type: application/x-www-form-urlencoded\r\n\
             \r\n\
             user=a%20b"
        );
    }

    #[test]
    fn renders_bodyless_get() {
        let bytes = Request::get("/").to_bytes().unwrap();
        assert_eq!(bytes, b"GET / HTTP/1.1\r\n\r\n");
    }
}
