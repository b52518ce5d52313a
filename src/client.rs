use futures::future::poll_fn;
use futures_executor::block_on;

use crate::http::{Request, Response};
use crate::middleware::{LogLayer, PostParamsLayer};
use crate::params::RequestParams;
use crate::service::{Service, ServiceBuilder};
use crate::{Error, Result};

/// Sends requests through a service stack.
pub struct Client<S> {
    service: S,
}

impl<S> Client<S>
where
    S: Service<Response = Response, Error = Error>,
{
    pub fn new(service: S) -> Self {
        Client { service }
    }

    /// Sends `request`, blocking the current thread until the response arrives.
    pub fn execute(&mut self, request: Request) -> Result<Response> {
        // Make sure service is ready
        if let Err(e) = block_on(poll_fn(|cx| self.service.poll_ready(cx))) {
            tracing::error!(%e, "Service not ready");
            return Err(Error::NotReady(e.to_string()));
        }

        block_on(self.service.call(request))
    }

    /// Sends `request` from an async context.
    pub async fn send(&mut self, request: Request) -> Result<Response> {
        if let Err(e) = poll_fn(|cx| self.service.poll_ready(cx)).await {
            tracing::error!(%e, "Service not ready");
            return Err(Error::NotReady(e.to_string()));
        }

        self.service.call(request).await
    }
}

/// Helper to create a client that parses post params before `transport` sends.
///
/// Every request is logged as it leaves `hook`, i.e. as it is actually sent.
pub fn new_client<T, F>(
    transport: T,
    hook: F,
) -> Client<impl Service<Response = Response, Error = Error> + Send>
where
    T: Service<Response = Response, Error = Error> + Send,
    T::Future: Send + 'static,
    F: Fn(RequestParams) -> Request + Clone + Send,
{
    let service = ServiceBuilder::new(transport)
        .layer(LogLayer)
        .layer(PostParamsLayer::new(hook))
        .build();

    Client::new(service)
}
