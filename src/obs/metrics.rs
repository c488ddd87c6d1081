// self
use crate::obs::{FlowKind, FlowOutcome};

/// Increments `oneroster_flow_total{flow, outcome}` (when the `metrics` feature is enabled).
pub fn record_flow_outcome(kind: FlowKind, outcome: FlowOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"oneroster_flow_total",
			"flow" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}
	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}

/// Records success or failure for a finished operation and hands the result back.
pub fn record_flow_result<T, E>(kind: FlowKind, result: Result<T, E>) -> Result<T, E> {
	let outcome = if result.is_ok() { FlowOutcome::Success } else { FlowOutcome::Failure };

	record_flow_outcome(kind, outcome);

	result
}

/// Increments `oneroster_status_total{flow, class}` for an HTTP status; `class` is `none`
/// for status 0 and `2xx`..`5xx` otherwise.
pub fn record_status(kind: FlowKind, status: u16) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"oneroster_status_total",
			"flow" => kind.as_str(),
			"class" => status_class(status)
		)
		.increment(1);
	}
	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, status);
	}
}

#[cfg_attr(not(any(test, feature = "metrics")), allow(dead_code))]
fn status_class(status: u16) -> &'static str {
	match status {
		0 => "none",
		100..=199 => "1xx",
		200..=299 => "2xx",
		300..=399 => "3xx",
		400..=499 => "4xx",
		_ => "5xx",
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn flow_result_passes_through() {
		let ok: Result<u8, ()> = record_flow_result(FlowKind::CodeExchange, Ok(7));
		let err: Result<u8, &str> = record_flow_result(FlowKind::CodeExchange, Err("boom"));

		assert_eq!(ok, Ok(7));
		assert_eq!(err, Err("boom"));

		record_status(FlowKind::RosterRequest, 0);
	}

	#[test]
	fn status_classes_bucket_by_hundreds() {
		assert_eq!(status_class(0), "none");
		assert_eq!(status_class(200), "2xx");
		assert_eq!(status_class(404), "4xx");
		assert_eq!(status_class(503), "5xx");
	}
}
