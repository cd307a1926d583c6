/*!
# `Refract` - Errors
*/

use crate::{
	MAX_DIMENSION,
	Stage,
};
use std::{
	error::Error,
	fmt,
};



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Errors.
///
/// Everything but [`SourceError::Sequence`] is fatal to the image being
/// converted. The decoder's own message, where there is one, is carried
/// along for context.
pub enum SourceError {
	/// # Decoder structures could not be created.
	Structure(String),

	/// # Invalid or unsupported header.
	Header(String),

	/// # Corrupt or truncated image data.
	Stream(String),

	/// # Out-of-order call.
	///
	/// The stage the session was in when the call was made.
	Sequence(Stage),
}

impl Error for SourceError {}

impl fmt::Display for SourceError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Structure(s) | Self::Header(s) | Self::Stream(s) =>
				if s.is_empty() { f.write_str(self.as_str()) }
				else { write!(f, "{} ({s})", self.as_str()) },
			Self::Sequence(stage) => write!(f, "{} ({})", self.as_str(), stage.as_str()),
		}
	}
}

impl SourceError {
	#[must_use]
	/// # As Str.
	///
	/// Return the general nature of the error as an English string slice.
	/// The decoder's message, if any, is only included by the `Display`
	/// implementation.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::Structure(_) => "Unable to create the PNG decoder.",
			Self::Header(_) => "Invalid or unsupported PNG header.",
			Self::Stream(_) => "The PNG image data is corrupt or truncated.",
			Self::Sequence(_) => "The PNG source was called out of order.",
		}
	}

	#[inline]
	#[must_use]
	/// # Is Fatal?
	///
	/// Returns `true` for everything but call-order mistakes, which leave the
	/// session untouched.
	pub const fn is_fatal(&self) -> bool { ! matches!(self, Self::Sequence(_)) }

	#[must_use]
	/// # Message.
	///
	/// Return the decoder's message, if any.
	pub fn message(&self) -> Option<&str> {
		match self {
			Self::Structure(s) | Self::Header(s) | Self::Stream(s) =>
				if s.is_empty() { None }
				else { Some(s.as_str()) },
			Self::Sequence(_) => None,
		}
	}
}

impl SourceError {
	/// # From Decoder (Header).
	pub(crate) fn header(e: &png::DecodingError) -> Self {
		match e {
			png::DecodingError::LimitsExceeded => Self::Structure(e.to_string()),
			_ => Self::Header(e.to_string()),
		}
	}

	/// # From Decoder (Stream).
	pub(crate) fn stream(e: &png::DecodingError) -> Self {
		match e {
			png::DecodingError::LimitsExceeded => Self::Structure(e.to_string()),
			_ => Self::Stream(e.to_string()),
		}
	}

	/// # Too Big.
	pub(crate) fn too_big(width: u32, height: u32) -> Self {
		Self::Header(format!(
			"{width}x{height} exceeds the {MAX_DIMENSION}px limit"
		))
	}
}



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Warnings.
///
/// Non-fatal conditions recorded during decoding.
pub enum SourceWarning {
	/// # Embedded Profile Too Large.
	///
	/// The profile length, in bytes. The profile was dropped.
	ProfileTooLarge(usize),
}

impl fmt::Display for SourceWarning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::ProfileTooLarge(len) => write!(f, "{} ({len} bytes)", self.as_str()),
		}
	}
}

impl SourceWarning {
	#[must_use]
	/// # As Str.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::ProfileTooLarge(_) => "The embedded ICC profile is too large to keep.",
		}
	}
}
