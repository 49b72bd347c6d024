//! API client for the blog REST API.
//!
//! Every call goes through `ApiClient::execute`, which wraps the transport
//! with the token and classification middleware. Endpoint bindings live in
//! `api::services`.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::storage::Storage;

use super::error::ApiError;
use super::hooks::{Navigator, Notifier, PendingRoute, TracingNotifier};
use super::middleware::{attach_token, classify};
use super::transport::{HttpRequest, ReqwestTransport, Transport};
use super::Envelope;

/// API client shared by every caller.
/// Clone is cheap - the transport and hooks are reference counted.
#[derive(Clone)]
pub struct ApiClient<T = ReqwestTransport> {
    transport: T,
    storage: Arc<dyn Storage>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient<ReqwestTransport> {
    /// Create a client for the given base URL with the default 10s timeout.
    pub fn new(base_url: &str, storage: Arc<dyn Storage>) -> anyhow::Result<Self> {
        Ok(Self::with_transport(ReqwestTransport::new(base_url)?, storage))
    }
}

impl<T: Transport> ApiClient<T> {
    /// Create a client over any transport, with tracing notifications and a
    /// `PendingRoute` navigator.
    pub fn with_transport(transport: T, storage: Arc<dyn Storage>) -> Self {
        Self {
            transport,
            storage,
            notifier: Arc::new(TracingNotifier),
            navigator: Arc::new(PendingRoute::new()),
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    /// Storage the client reads the session token from.
    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a request through the middleware chain.
    ///
    /// Resolves with the full envelope when its code is success; every other
    /// outcome is an `ApiError`, after the notifier (and, on 401, the
    /// navigator) has fired.
    pub async fn execute(&self, mut request: HttpRequest) -> Result<Envelope, ApiError> {
        attach_token(&mut request, self.storage.as_ref())?;
        debug!(method = %request.method, path = %request.path, "API request");

        let outcome = self.transport.send(request).await;
        classify(outcome, self.notifier.as_ref(), self.navigator.as_ref())
    }

    /// Execute and decode the successful envelope's `data`.
    pub(crate) async fn fetch<D: DeserializeOwned>(&self, request: HttpRequest) -> Result<D, ApiError> {
        let path = request.path.clone();
        let envelope = self.execute(request).await?;
        envelope
            .data_as()
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse data from {}: {}", path, e)))
    }
}
