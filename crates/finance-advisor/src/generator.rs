//! Report Generator
//!
//! Builds reports behind an artificial latency that stands in for a
//! backend round trip. The wait is abstracted by `Delay` so the same
//! generator runs on tokio (server) and on the browser event loop (WASM).

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use async_trait::async_trait;
use futures::future::{AbortHandle, Abortable, BoxFuture};
use futures::FutureExt;

use crate::error::{AdvisorError, Result};
use crate::model::Report;
use crate::validation::AdviceInput;

/// Latency used by the interactive form
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

/// Timer abstraction (Strategy pattern)
#[async_trait]
pub trait Delay: Send + Sync {
    async fn wait(&self, duration: Duration);
}

/// Resolves immediately
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay;

#[async_trait]
impl Delay for NoDelay {
    async fn wait(&self, _duration: Duration) {}
}

/// `tokio::time::sleep` backed delay
#[cfg(feature = "tokio")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioDelay;

#[cfg(feature = "tokio")]
#[async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}

/// Generates reports after a fixed latency
#[derive(Clone, Debug)]
pub struct ReportGenerator<D> {
    delay: D,
    latency: Duration,
}

impl Default for ReportGenerator<NoDelay> {
    fn default() -> Self {
        Self::new(NoDelay, Duration::ZERO)
    }
}

impl<D: Delay> ReportGenerator<D> {
    pub const fn new(delay: D, latency: Duration) -> Self {
        Self { delay, latency }
    }

    pub const fn latency(&self) -> Duration {
        self.latency
    }

    /// Wait out the latency, then build the report
    pub async fn generate(&self, input: AdviceInput) -> Result<Report> {
        tracing::debug!(
            risk_tier = %input.risk_tier(),
            latency_ms = self.latency.as_millis() as u64,
            "generating report"
        );

        self.delay.wait(self.latency).await;
        let report = Report::build(&input);

        tracing::debug!(
            savings = %report.savings,
            savings_percent = %report.savings_percent,
            "report ready"
        );
        Ok(report)
    }
}

impl<D: Delay + Clone + 'static> ReportGenerator<D> {
    /// Start a generation that can be cancelled through its abort handle
    pub fn spawn(&self, input: AdviceInput) -> GenerationTask {
        let generator = self.clone();
        let work: BoxFuture<'static, Result<Report>> =
            async move { generator.generate(input).await }.boxed();

        let (handle, registration) = AbortHandle::new_pair();
        GenerationTask {
            inner: Abortable::new(work, registration),
            handle,
        }
    }
}

/// In-flight generation
///
/// Resolves to `AdvisorError::Cancelled` if aborted before completion.
pub struct GenerationTask {
    inner: Abortable<BoxFuture<'static, Result<Report>>>,
    handle: AbortHandle,
}

impl GenerationTask {
    pub fn abort_handle(&self) -> AbortHandle {
        self.handle.clone()
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Future for GenerationTask {
    type Output = Result<Report>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner
            .poll_unpin(cx)
            .map(|res| res.unwrap_or_else(|_aborted| Err(AdvisorError::Cancelled)))
    }
}
