/*!
# `Refract` - PNG Header
*/

use crate::{
	ColorKind,
	MAX_DIMENSION,
	SourceError,
};



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Image Header.
///
/// This holds the basic image details as declared by the PNG's `IHDR` chunk.
/// Instances can only be created through a successful
/// [`PngSource::start`](crate::PngSource::start), so the dimensions are
/// always within range.
pub struct Header {
	/// # Width.
	width: u32,

	/// # Height.
	height: u32,

	/// # Color Kind.
	color: ColorKind,

	/// # Bit Depth.
	depth: u8,

	/// # Interlaced?
	interlaced: bool,
}

impl TryFrom<&png::Info<'_>> for Header {
	type Error = SourceError;

	fn try_from(src: &png::Info<'_>) -> Result<Self, Self::Error> {
		if src.width > MAX_DIMENSION || src.height > MAX_DIMENSION {
			return Err(SourceError::too_big(src.width, src.height));
		}

		Ok(Self {
			width: src.width,
			height: src.height,
			color: ColorKind::from(src.color_type),
			depth: src.bit_depth as u8,
			interlaced: src.interlaced,
		})
	}
}

/// # Getters.
impl Header {
	#[inline]
	#[must_use]
	/// # Bit Depth.
	///
	/// The bits per sample (or per palette index) of the _source_: one of
	/// `1`, `2`, `4`, `8`, or `16`.
	pub const fn bit_depth(&self) -> u8 { self.depth }

	#[inline]
	#[must_use]
	/// # Color Kind.
	pub const fn color(&self) -> ColorKind { self.color }

	#[inline]
	#[must_use]
	/// # Height.
	pub const fn height(&self) -> usize { self.height as usize }

	#[inline]
	#[must_use]
	/// # Height (u32).
	pub const fn height_u32(&self) -> u32 { self.height }

	#[inline]
	#[must_use]
	/// # Interlaced?
	pub const fn interlaced(&self) -> bool { self.interlaced }

	#[inline]
	#[must_use]
	/// # Width.
	pub const fn width(&self) -> usize { self.width as usize }

	#[inline]
	#[must_use]
	/// # Width (u32).
	pub const fn width_u32(&self) -> u32 { self.width }
}
