//! Optional observability helpers for pipeline stages.
//!
//! Enable the `tracing` feature to emit structured spans named `waterguru_bridge.stage`
//! with a `stage` field per pipeline step. Without the feature everything here compiles to
//! a no-op.

// self
use crate::_prelude::*;

/// Pipeline stages observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StageKind {
	/// Challenge-response login against the user directory.
	Login,
	/// Identity-token-to-session-credential exchange.
	Exchange,
	/// Remote function invocation.
	Invoke,
}
impl StageKind {
	/// Returns a stable label suitable for span fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			StageKind::Login => "login",
			StageKind::Exchange => "exchange",
			StageKind::Invoke => "invoke",
		}
	}
}
impl Display for StageKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedStage<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedStage<F> = F;

/// A span builder used by the facade around each pipeline stage.
#[derive(Clone, Debug)]
pub struct StageSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl StageSpan {
	/// Creates a new span tagged with the provided stage kind.
	pub fn new(kind: StageKind) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("waterguru_bridge.stage", stage = kind.as_str());

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = kind;

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedStage<Fut>
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

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn stage_labels_are_stable() {
		assert_eq!(StageKind::Login.as_str(), "login");
		assert_eq!(StageKind::Exchange.as_str(), "exchange");
		assert_eq!(StageKind::Invoke.as_str(), "invoke");
	}

	#[tokio::test]
	async fn instrument_wraps_future() {
		let span = StageSpan::new(StageKind::Invoke);
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}
}
