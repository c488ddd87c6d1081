// self
use crate::{_prelude::*, error::TransportError, obs::FlowKind};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedFlow<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedFlow<F> = F;

/// Span wrapping one client operation.
///
/// Spans carry the flow label, the call site, and (once known) the target host. Paths and
/// query strings are never recorded because they can carry roster filters.
#[derive(Clone, Debug)]
pub struct FlowSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl FlowSpan {
	/// Creates a span tagged with the flow kind and stage.
	pub fn new(kind: FlowKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"oneroster.flow",
				flow = kind.as_str(),
				stage,
				host = tracing::field::Empty,
				status = tracing::field::Empty,
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Records the host of `url` on the span; unparsable URLs are skipped.
	pub fn record_target(&self, url: &str) {
		#[cfg(feature = "tracing")]
		if let Some(host) = Url::parse(url).ok().as_ref().and_then(Url::host_str) {
			self.span.record("host", host);
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = url;
		}
	}

	/// Records the HTTP status that ended the operation.
	pub fn record_status(&self, status: u16) {
		#[cfg(feature = "tracing")]
		{
			self.span.record("status", status);
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = status;
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedFlow<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits a `warn` event for a transport failure reported as a status-0 response.
pub fn warn_soft_failure(kind: FlowKind, error: &TransportError) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(
			flow = kind.as_str(),
			error = %error.diagnostic(),
			"Request produced no response; reporting status 0."
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (kind, error);
	}
}
