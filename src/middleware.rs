use std::{
    pin::Pin,
    task::{Context, Poll},
};

use serde::Serialize;

use crate::{
    Error,
    http::{Method, Request, Response},
    params::{ParsedParams, RequestParams},
    service::{Layer, Service},
};

type BoxFuture = Pin<Box<dyn Future<Output = Result<Response, Error>> + Send>>;

/// Middleware to log outgoing requests
pub struct LogLayer;

impl<S> Layer<S> for LogLayer {
    type Service = LogMiddleware<S>;

    /// Wraps the given service with the logging middleware.
    fn layer(&self, service: S) -> Self::Service {
        LogMiddleware { inner: service }
    }
}

/// Middleware service that logs requests and responses.
#[derive(Clone)]
pub struct LogMiddleware<S> {
    inner: S,
}

impl<S> Service for LogMiddleware<S>
where
    S: Service<Response = Response, Error = Error> + Send,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxFuture;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    /// Logs the request, then the response status or error.
    fn call(&mut self, req: Request) -> Self::Future {
        tracing::info!(method = %req.method, url = %req.url, "Request");

        let future = self.inner.call(req);

        Box::pin(async move {
            let result = future.await;
            match &result {
                Ok(response) => {
                    tracing::info!(status = response.status_code as u16, "Response");
                }
                Err(e) => {
                    tracing::error!(%e, "Request failed");
                }
            }
            result
        })
    }
}

/// Middleware that parses each outgoing request's body parameters and lets a
/// hook decide which request is actually sent.
///
/// The hook receives the untouched request together with its parameters and
/// returns the request to forward, which may be the same one.
#[derive(Clone)]
pub struct PostParamsLayer<F> {
    hook: F,
}

impl<F> PostParamsLayer<F>
where
    F: Fn(RequestParams) -> Request + Clone,
{
    pub fn new(hook: F) -> Self {
        PostParamsLayer { hook }
    }
}

impl<S, F> Layer<S> for PostParamsLayer<F>
where
    F: Clone,
{
    type Service = PostParamsMiddleware<S, F>;

    fn layer(&self, service: S) -> Self::Service {
        PostParamsMiddleware {
            inner: service,
            hook: self.hook.clone(),
        }
    }
}

#[derive(Clone)]
pub struct PostParamsMiddleware<S, F> {
    inner: S,
    hook: F,
}

#[derive(Serialize)]
struct ParamsRecord<'a> {
    method: Method,
    url: &'a str,
    params: &'a ParsedParams,
}

impl<S, F> Service for PostParamsMiddleware<S, F>
where
    S: Service<Response = Response, Error = Error> + Send,
    S::Future: Send + 'static,
    F: Fn(RequestParams) -> Request,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxFuture;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    /// A body that cannot be read fails the call; the hook and the inner
    /// service are not invoked.
    fn call(&mut self, request: Request) -> Self::Future {
        let params = match RequestParams::parse(request) {
            Ok(params) => params,
            Err(e) => return Box::pin(async move { Err::<Response, Error>(e) }),
        };

        if tracing::enabled!(tracing::Level::DEBUG) {
            let record = ParamsRecord {
                method: params.request().method,
                url: &params.request().url,
                params: params.post_params(),
            };
            if let Ok(json) = serde_json::to_string(&record) {
                tracing::debug!(record = %json, "Parsed post params");
            }
        }

        let request = (self.hook)(params);
        Box::pin(self.inner.call(request))
    }
}
