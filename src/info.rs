/*!
# `Refract` - Compressor Info
*/

use crate::{
	ColorSpace,
	DATA_PRECISION,
	Marker,
	SourceWarning,
};



#[derive(Debug, Clone, Copy, PartialEq)]
/// # Normalized Output Descriptor.
///
/// This describes the rows a [`RowSource`](crate::RowSource) will produce.
/// It is computed once, when the source is started, and never changes.
pub struct Descriptor {
	/// # Color Space.
	space: ColorSpace,

	/// # Input Gamma.
	gamma: f64,
}

impl Descriptor {
	#[inline]
	#[must_use]
	/// # New.
	pub(crate) const fn new(space: ColorSpace, gamma: f64) -> Self {
		Self { space, gamma }
	}

	#[inline]
	#[must_use]
	/// # Color Space.
	pub const fn color_space(&self) -> ColorSpace { self.space }

	#[inline]
	#[must_use]
	/// # Components Per Pixel.
	pub const fn components(&self) -> u8 { self.space.components() }

	#[inline]
	#[must_use]
	/// # Bits Per Sample.
	///
	/// This is always `8`.
	pub const fn precision(&self) -> u8 { DATA_PRECISION }

	#[inline]
	#[must_use]
	/// # Input Gamma.
	pub const fn gamma(&self) -> f64 { self.gamma }

	#[inline]
	#[must_use]
	/// # Row Size.
	///
	/// The number of bytes in a row `width` pixels wide.
	pub const fn row_size(&self, width: usize) -> usize {
		width * self.space.components() as usize
	}
}



#[derive(Debug, Clone, Default)]
/// # Compressor Info.
///
/// These are the details a JPEG compressor needs to know about its source,
/// populated by [`RowSource::start_input`](crate::RowSource::start_input).
///
/// An instance belongs to the conversion job rather than the source, so the
/// ICC marker and any warnings outlive the decoder.
pub struct CompressInfo {
	/// # Width.
	width: u32,

	/// # Height.
	height: u32,

	/// # Output Descriptor.
	output: Option<Descriptor>,

	/// # Markers.
	markers: Vec<Marker>,

	/// # Warnings.
	warnings: Vec<SourceWarning>,
}

/// # Getters.
impl CompressInfo {
	#[inline]
	#[must_use]
	/// # Input Color Space.
	///
	/// This returns `None` if the source has not been started.
	pub fn color_space(&self) -> Option<ColorSpace> {
		self.output.map(|o| o.color_space())
	}

	#[inline]
	#[must_use]
	/// # Input Components.
	///
	/// This returns `0` if the source has not been started.
	pub fn components(&self) -> u8 {
		self.output.map_or(0, |o| o.components())
	}

	#[inline]
	#[must_use]
	/// # Output Descriptor.
	pub const fn descriptor(&self) -> Option<&Descriptor> { self.output.as_ref() }

	#[inline]
	#[must_use]
	/// # Input Gamma.
	pub fn gamma(&self) -> Option<f64> { self.output.map(|o| o.gamma()) }

	#[inline]
	#[must_use]
	/// # Height.
	pub const fn height(&self) -> u32 { self.height }

	#[inline]
	#[must_use]
	/// # Markers.
	///
	/// Metadata markers to write to the output, in order.
	pub fn markers(&self) -> &[Marker] { &self.markers }

	#[inline]
	#[must_use]
	/// # Sample Precision.
	pub const fn precision(&self) -> u8 { DATA_PRECISION }

	#[inline]
	#[must_use]
	/// # Warnings.
	pub fn warnings(&self) -> &[SourceWarning] { &self.warnings }

	#[inline]
	#[must_use]
	/// # Width.
	pub const fn width(&self) -> u32 { self.width }
}

/// # Setters.
impl CompressInfo {
	/// # Set Image Details.
	///
	/// Markers from any previous image are cleared; warnings accumulate for
	/// the life of the job.
	pub(crate) fn set_image(
		&mut self,
		width: u32,
		height: u32,
		output: Descriptor,
		marker: Option<Marker>,
	) {
		self.width = width;
		self.height = height;
		self.output.replace(output);
		self.markers.clear();
		self.markers.extend(marker);
	}

	#[inline]
	/// # Record Warning.
	pub(crate) fn warn(&mut self, warning: SourceWarning) {
		self.warnings.push(warning);
	}

	#[inline]
	#[must_use]
	/// # Take Markers.
	///
	/// Steal the markers, leaving the list empty.
	pub fn take_markers(&mut self) -> Vec<Marker> { std::mem::take(&mut self.markers) }
}
