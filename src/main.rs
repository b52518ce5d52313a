use std::process;

use post_params::http::{FormBody, MultipartBody, Payload, Request, Response, StatusCode};
use post_params::service::service_fn;
use post_params::{Error, RequestParams, new_client};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

fn demo_request(kind: &str) -> Option<Request> {
    match kind {
        "form" => Some(Request::post(
            "/session",
            FormBody::builder()
                .add("user[login]", "user@mail.com")
                .add("user[password]", "12345678")
                .build(),
        )),
        "multipart" => Some(Request::post(
            "/users",
            MultipartBody::builder()
                .add_form_data_part("data[attributes][email]", "john@example.com")
                .add_form_data_part("data[type]", "users")
                .add_form_data_file(
                    "avatar",
                    "avatar.json",
                    Payload::new(Some("application/json"), "{ \"some\": \"json\" }"),
                )
                .build(),
        )),
        _ => None,
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let kind = std::env::args().nth(1).unwrap_or_else(|| "multipart".to_string());
    let Some(request) = demo_request(&kind) else {
        eprintln!("Unknown body kind: {} (expected form or multipart)", kind);
        process::exit(2);
    };

    // Echo the wire bytes back instead of sending them anywhere
    let transport = service_fn(|request: Request| async move {
        let mut response = Response::new(StatusCode::OK);
        response.set_content_type("message/http");
        response.set_body(request.to_bytes()?);
        Ok::<_, Error>(response)
    });

    let mut client = new_client(transport, |params: RequestParams| {
        match serde_json::to_string_pretty(params.post_params()) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Failed to render params: {}", e),
        }
        params.into_parts().0
    });

    match client.send(request).await {
        Ok(response) => println!("\n{}", String::from_utf8_lossy(&response.body)),
        Err(e) => {
            eprintln!("Request failed: {}", e);
            process::exit(1);
        }
    }
}
