//! Validated identifiers for API clients and roster entities.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

const IDENTIFIER_MAX_LEN: usize = 256;

/// Character rules an identifier kind is checked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Charset {
	/// Visible ASCII only; the value is rendered verbatim into headers and forms.
	VisibleAscii,
	/// Any non-whitespace, non-control character; the value is escaped before use.
	Printable,
}
impl Charset {
	fn admits(self, c: char) -> bool {
		match self {
			Charset::VisibleAscii => c.is_ascii_graphic(),
			Charset::Printable => !c.is_whitespace() && !c.is_control(),
		}
	}
}

macro_rules! def_id {
	($name:ident, $kind:literal, $charset:expr, $doc:literal) => {
		#[doc = $doc]
		#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(try_from = "String", into = "String")]
		pub struct $name(String);
		impl $name {
			/// Validates `value` and wraps it.
			pub fn new(value: impl Into<String>) -> Result<Self, IdentifierError> {
				let value = value.into();

				check($kind, $charset, &value)?;

				Ok(Self(value))
			}

			/// Borrows the identifier as a string slice.
			pub fn as_str(&self) -> &str {
				&self.0
			}
		}
		impl TryFrom<String> for $name {
			type Error = IdentifierError;

			fn try_from(value: String) -> Result<Self, Self::Error> {
				Self::new(value)
			}
		}
		impl FromStr for $name {
			type Err = IdentifierError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Self::new(s)
			}
		}
		impl From<$name> for String {
			fn from(id: $name) -> Self {
				id.0
			}
		}
		impl Deref for $name {
			type Target = str;

			fn deref(&self) -> &str {
				self.as_str()
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				self.as_str()
			}
		}
		impl Borrow<str> for $name {
			fn borrow(&self) -> &str {
				self.as_str()
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(self.as_str())
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.debug_tuple($kind).field(&format_args!("{}", self.0)).finish()
			}
		}
	};
}

/// Reasons an identifier is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum IdentifierError {
	/// The identifier was empty.
	#[error("{kind} identifier cannot be empty.")]
	Empty {
		/// Identifier kind (`Client` or `Sourced`).
		kind: &'static str,
	},
	/// The identifier contains a character its kind does not allow.
	#[error("{kind} identifier contains the disallowed character {character:?}.")]
	InvalidCharacter {
		/// Identifier kind (`Client` or `Sourced`).
		kind: &'static str,
		/// First offending character.
		character: char,
	},
	/// The identifier is longer than 256 bytes.
	#[error("{kind} identifier exceeds {max} bytes.")]
	TooLong {
		/// Identifier kind (`Client` or `Sourced`).
		kind: &'static str,
		/// Maximum permitted byte count.
		max: usize,
	},
}

def_id! {
	ClientId,
	"Client",
	Charset::VisibleAscii,
	"Client (consumer) identifier issued by the API provider."
}
def_id! {
	SourcedId,
	"Sourced",
	Charset::Printable,
	"OneRoster `sourcedId` of a roster entity such as a class."
}

fn check(kind: &'static str, charset: Charset, value: &str) -> Result<(), IdentifierError> {
	if value.is_empty() {
		Err(IdentifierError::Empty { kind })
	} else if value.len() > IDENTIFIER_MAX_LEN {
		Err(IdentifierError::TooLong { kind, max: IDENTIFIER_MAX_LEN })
	} else if let Some(character) = value.chars().find(|&c| !charset.admits(c)) {
		Err(IdentifierError::InvalidCharacter { kind, character })
	} else {
		Ok(())
	}
}
