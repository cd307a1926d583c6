/*!
# `Refract` - JPEG Markers
*/

use crate::SourceWarning;
use std::ops::Deref;



/// # JPEG `APP0` Marker Code.
const JPEG_APP0: u8 = 0xE0;

/// # ICC Marker Signature.
///
/// `ICC_PROFILE`, a NUL terminator, and the sequence number and count; the
/// profile always fits within a single marker.
pub(crate) const ICC_SIGNATURE: [u8; 14] = *b"ICC_PROFILE\0\x01\x01";

/// # Maximum ICC Profile Length (Exclusive).
///
/// Marker payloads max out at `65535` bytes, less the signature.
pub(crate) const ICC_MAX_LEN: usize = 65_535 - ICC_SIGNATURE.len();



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Metadata Marker.
///
/// This is an opaque, tagged block of bytes the JPEG compressor should write
/// to its output verbatim.
///
/// At the moment, the only kind of marker produced is the `APP2` marker used
/// to carry an embedded ICC profile.
pub struct Marker {
	/// # Marker Code.
	code: u8,

	/// # Payload.
	data: Vec<u8>,
}

impl AsRef<[u8]> for Marker {
	#[inline]
	fn as_ref(&self) -> &[u8] { self }
}

impl Deref for Marker {
	type Target = [u8];

	#[inline]
	fn deref(&self) -> &Self::Target { &self.data }
}

impl Marker {
	/// # ICC Marker.
	///
	/// Package an ICC profile as an `APP2` marker.
	///
	/// ## Errors
	///
	/// If the profile is too big to fit in a single marker,
	/// [`SourceWarning::ProfileTooLarge`] is returned instead.
	pub fn icc(profile: &[u8]) -> Result<Self, SourceWarning> {
		if ICC_MAX_LEN <= profile.len() {
			return Err(SourceWarning::ProfileTooLarge(profile.len()));
		}

		let mut data = Vec::with_capacity(ICC_SIGNATURE.len() + profile.len());
		data.extend_from_slice(&ICC_SIGNATURE);
		data.extend_from_slice(profile);

		Ok(Self {
			code: JPEG_APP0 + 2,
			data,
		})
	}
}

/// # Getters.
impl Marker {
	#[inline]
	#[must_use]
	/// # Marker Code.
	///
	/// This is the second byte of the JPEG marker, e.g. `0xE2` for `APP2`.
	pub const fn code(&self) -> u8 { self.code }

	#[inline]
	#[must_use]
	/// # Is ICC?
	pub fn is_icc(&self) -> bool {
		self.code == JPEG_APP0 + 2 && self.data.starts_with(&ICC_SIGNATURE)
	}

	#[must_use]
	/// # ICC Profile.
	///
	/// Return the raw profile bytes, minus the signature, if this is an ICC
	/// marker.
	pub fn icc_profile(&self) -> Option<&[u8]> {
		if self.is_icc() { Some(&self.data[ICC_SIGNATURE.len()..]) }
		else { None }
	}

	#[inline]
	#[must_use]
	/// # Take Data.
	///
	/// Consume the instance, returning the payload as an owned buffer.
	pub fn take_data(self) -> Vec<u8> { self.data }
}
