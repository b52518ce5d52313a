use super::{Headers, StatusCode, Version};

#[derive(Debug, Clone)]
pub struct Response {
    pub version: Version,
    pub status_code: StatusCode,
    pub headers: Headers,
    pub body: Vec<u8>,
}

impl Response {
    /// Creates a new `Response` with the given status code.
    ///
    /// # Arguments
    ///
    /// * `status_code` - The HTTP status code for the response.
    ///
    /// # Returns
    ///
    /// A new `Response` object with the specified status code, HTTP version set to HTTP/1.1,
    /// a default "Server" header, and an empty body.
    pub fn new(status_code: StatusCode) -> Response {
        let mut headers = Headers::new();
        headers.add("Server", "post-params/0.1");
        headers.add(
            "Date",
            &chrono::Utc::now()
                .format("%a, %d %b %Y %H:%M:%S GMT")
                .to_string(),
        );

        Response {
            version: Version::HTTP1_1,
            status_code,
            headers,
            body: Vec::new(),
        }
    }

    /// Sets the body of the response and updates the "Content-Length" header.
    pub fn set_body(&mut self, body: Vec<u8>) {
        self.body = body;
        self.headers
            .set("Content-Length", &self.body.len().to_string());
    }

    pub fn set_content_type(&mut self, content_type: &str) {
        self.headers.set("Content-Type", content_type);
    }

    /// Converts the response to its wire bytes: status line, headers, blank line, body.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut response = Vec::new();

        let status_line = format!(
            "{} {} {}\r\n",
            self.version,
            self.status_code as u16,
            self.status_code.reason_phrase()
        );
        response.extend_from_slice(status_line.as_bytes());

        for (key, value) in self.headers.iter() {
            let header_line = format!("{}: {}\r\n", key, value);
            response.extend_from_slice(header_line.as_bytes());
        }

        response.extend_from_slice(b"\r\n");
        response.extend_from_slice(&self.body);

        response
    }
}
