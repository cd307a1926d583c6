/*!
# `Refract` - Metadata Extraction
*/

use crate::{
	DEFAULT_GAMMA,
	Marker,
	SourceWarning,
};
use crate::marker::ICC_MAX_LEN;



/// # `gAMA` Scale.
///
/// PNG stores gamma as an integer, times one hundred thousand.
const GAMMA_SCALE: f64 = 100_000.0;



#[derive(Debug)]
/// # Extracted Metadata.
pub(crate) struct Metadata {
	/// # Input Gamma.
	pub(crate) gamma: f64,

	/// # ICC Marker.
	pub(crate) marker: Option<Marker>,

	/// # Warning.
	pub(crate) warning: Option<SourceWarning>,
}

impl From<&png::Info<'_>> for Metadata {
	fn from(src: &png::Info<'_>) -> Self {
		let gamma = input_gamma(
			src.srgb.is_some(),
			src.source_gamma.map(png::ScaledFloat::into_scaled),
		);

		let (marker, warning) = match src.icc_profile.as_deref() {
			Some(profile) if ! profile.is_empty() => match Marker::icc(profile) {
				Ok(m) => (Some(m), None),
				Err(w) => {
					log::warn!(
						"Dropping {}-byte ICC profile; markers can hold at most {} bytes.",
						profile.len(),
						ICC_MAX_LEN - 1,
					);
					(None, Some(w))
				},
			},
			_ => (None, None),
		};

		Self { gamma, marker, warning }
	}
}



/// # Input Gamma.
///
/// Images declaring an `sRGB` rendering intent always use the default, as do
/// images without any `gAMA` chunk.
fn input_gamma(srgb: bool, scaled: Option<u32>) -> f64 {
	if srgb { DEFAULT_GAMMA }
	else {
		scaled.map_or(DEFAULT_GAMMA, |g| f64::from(g) / GAMMA_SCALE)
	}
}



#[cfg(test)]
mod tests {
	use super::*;
	use std::borrow::Cow;

	#[test]
	#[allow(clippy::float_cmp)]
	fn t_input_gamma() {
		assert_eq!(input_gamma(false, None), DEFAULT_GAMMA);
		assert_eq!(input_gamma(false, Some(30_000)), 0.3);
		assert_eq!(input_gamma(false, Some(100_000)), 1.0);

		// sRGB wins.
		assert_eq!(input_gamma(true, Some(30_000)), DEFAULT_GAMMA);
		assert_eq!(input_gamma(true, None), DEFAULT_GAMMA);
	}

	#[test]
	fn t_profile() {
		let mut info = png::Info::with_size(1, 1);
		let meta = Metadata::from(&info);
		assert!(meta.marker.is_none());
		assert!(meta.warning.is_none());

		// Empty profiles are ignored.
		info.icc_profile = Some(Cow::Owned(Vec::new()));
		let meta = Metadata::from(&info);
		assert!(meta.marker.is_none());
		assert!(meta.warning.is_none());

		info.icc_profile = Some(Cow::Owned(vec![1, 2, 3]));
		let meta = Metadata::from(&info);
		assert_eq!(meta.marker.as_ref().map(|m| m.len()), Some(17));
		assert!(meta.warning.is_none());

		info.icc_profile = Some(Cow::Owned(vec![0; ICC_MAX_LEN]));
		let meta = Metadata::from(&info);
		assert!(meta.marker.is_none());
		assert_eq!(meta.warning, Some(SourceWarning::ProfileTooLarge(ICC_MAX_LEN)));
	}
}
