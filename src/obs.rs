//! Optional observability helpers for client flows.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `oneroster.flow` with the `flow` and
//!   `stage` (call site) fields, plus a `warn` event whenever a transport failure is folded
//!   into a status-0 response.
//! - Enable `metrics` to increment the `oneroster_flow_total` counter for every
//!   attempt/success/failure, labeled by `flow` + `outcome`, and `oneroster_status_total`
//!   for every finished request, labeled by `flow` + status `class`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

macro_rules! def_label {
	($(#[$meta:meta])* $name:ident { $($(#[$variant_meta:meta])* $variant:ident => $label:literal,)+ }) => {
		$(#[$meta])*
		#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
		pub enum $name {
			$($(#[$variant_meta])* $variant,)+
		}
		impl $name {
			/// Stable label used as a span or metric field value.
			pub const fn as_str(self) -> &'static str {
				match self {
					$(Self::$variant => $label,)+
				}
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(self.as_str())
			}
		}
	};
}

def_label! {
	/// Operations the clients instrument.
	FlowKind {
		/// Signed OneRoster `GET`.
		RosterRequest => "roster_request",
		/// OneClick authorization code exchange.
		CodeExchange => "code_exchange",
		/// OneClick bearer-authenticated info request.
		InfoRequest => "info_request",
	}
}
def_label! {
	/// Lifecycle points counted for each operation.
	FlowOutcome {
		/// The operation started.
		Attempt => "attempt",
		/// The operation returned `Ok`.
		Success => "success",
		/// The operation returned `Err`.
		Failure => "failure",
	}
}
