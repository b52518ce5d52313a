/// End-to-end checks of parameter extraction through the client stack
use std::io;
use std::sync::{Arc, Mutex};

use post_params::http::{
    FormBody, FormPart, Headers, MultipartBody, Payload, Request, RequestBody, Response, StatusCode,
    WriteBody,
    multipart::MultipartBuilder,
};
use post_params::params::{disposition::params_from, multipart::decode_part};
use post_params::service::service_fn;
use post_params::{Error, ParsedParams, RequestParams, new_client, parse};

/// Runs `request` through a client whose transport echoes the wire bytes.
/// Returns the params the hook saw and the bytes the transport sent.
fn send(request: Request) -> Result<(ParsedParams, Vec<u8>), Error> {
    let seen = Arc::new(Mutex::new(ParsedParams::new()));
    let hook_seen = seen.clone();

    let transport = service_fn(|request: Request| async move {
        let mut response = Response::new(StatusCode::OK);
        response.set_body(request.to_bytes()?);
        Ok::<_, Error>(response)
    });
    let mut client = new_client(transport, move |params: RequestParams| {
        let (request, params) = params.into_parts();
        *hook_seen.lock().unwrap() = params;
        request
    });

    let response = client.execute(request)?;
    let params = seen.lock().unwrap().clone();
    Ok((params, response.body))
}

#[test]
fn multipart_fields_and_file() {
    let body = MultipartBuilder::new("6510397a-5a05-4908-8a4a-dedab4cbaf87")
        .add_form_data_part("param1", "")
        .add_form_data_part("param2", "value2")
        .add_form_data_file(
            "file",
            "filename.jpeg",
            Payload::new(Some("application/json"), "{ \"some\": \"json\" }"),
        )
        .build();
    let request = Request::post("/upload", body);
    let expected_wire = request.to_bytes().unwrap();

    let (params, wire) = send(request).unwrap();

    let expected: ParsedParams = [
        ("param1", ""),
        ("param2", "value2"),
        ("file", "filename.jpeg"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    assert_eq!(params, expected);

    // Parsing drained the parts; the transport still sent every byte.
    assert_eq!(wire, expected_wire);
    let text = String::from_utf8(wire).unwrap();
    assert!(text.contains("\r\n\r\nvalue2\r\n"));
    assert!(text.contains("{ \"some\": \"json\" }"));
}

#[test]
fn form_with_plain_and_encoded_pairs() {
    let body = FormBody::builder()
        .add("param", "value[@$%11]")
        .add_encoded("%5Bencoded%5D", "%5Bvalue%5D")
        .build();

    let (params, wire) = send(Request::post("/form", body)).unwrap();

    assert_eq!(params.len(), 2);
    assert_eq!(params["param"], "value[@$%11]");
    assert_eq!(params["[encoded]"], "[value]");
    assert!(String::from_utf8(wire)
        .unwrap()
        .ends_with("param=value%5B%40%24%2511%5D&%5Bencoded%5D=%5Bvalue%5D"));
}

#[test]
fn bracketed_disposition_name() {
    let map = params_from(["form-data; name=\"data[attributes][email]\""]);

    assert_eq!(map.len(), 1);
    assert_eq!(map["name"], "data[attributes][email]");
    assert!(!map.contains_key("filename"));
}

struct Inaccessible {
    headers: Headers,
}

impl FormPart for Inaccessible {
    fn headers(&self) -> &Headers {
        &self.headers
    }

    fn payload(&self) -> Option<&Payload> {
        None
    }
}

#[test]
fn inaccessible_payload_is_empty_text() {
    let part = Inaccessible {
        headers: Headers::of([("Content-Disposition", "form-data; name=\"secret\"")]),
    };

    let entry = decode_part(&part).unwrap();
    assert_eq!(entry, Some(("secret".to_string(), String::new())));
}

#[test]
fn bodyless_and_opaque_requests_have_no_params() {
    let (params, _) = send(Request::get("/")).unwrap();
    assert!(params.is_empty());

    let json = Payload::new(Some("application/json"), "{\"param\":\"value\"}");
    let (params, wire) = send(Request::post("/json", json)).unwrap();
    assert!(params.is_empty());
    assert!(String::from_utf8(wire).unwrap().ends_with("{\"param\":\"value\"}"));
}

struct Interrupted;

impl WriteBody for Interrupted {
    fn write_to(&self, sink: &mut dyn io::Write) -> io::Result<()> {
        sink.write_all(b"partial")?;
        Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stream ended"))
    }
}

#[test]
fn unreadable_field_fails_the_send() {
    let body = MultipartBody::builder()
        .add_form_data_part("ok", "1")
        .add_part(
            Headers::of([("Content-Disposition", "form-data; name=\"broken\"")]),
            Payload::bytes(Interrupted),
        )
        .build();

    match send(Request::post("/upload", body)) {
        Err(Error::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
        other => panic!("expected an I/O error, got {:?}", other.map(|(p, _)| p)),
    }
}

#[test]
fn unreadable_file_part_is_not_an_error() {
    let body = MultipartBody::builder()
        .add_form_data_file("file", "big.iso", Payload::bytes(Interrupted))
        .build();

    let params = parse(Some(&RequestBody::from(body))).unwrap();
    assert_eq!(params["file"], "big.iso");
}
