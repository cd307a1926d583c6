/*!
# `Refract` - Traits.
*/

use crate::{
	CompressInfo,
	Header,
	SourceError,
};



/// # Row Source.
///
/// This is the contract between a scanline-driven compressor and its image
/// source:
///
/// 1. [`RowSource::start_input`] is called exactly once;
/// 2. [`RowSource::get_pixel_rows`] is called once per row, top to bottom;
/// 3. [`RowSource::finish_input`] is called exactly once, whether or not every
///    row was consumed, so long as the start succeeded.
///
/// See [`pump`](crate::pump) for a loop that does all of the above.
pub trait RowSource {
	/// # Start Input.
	///
	/// Read the image header and populate the compressor-visible fields of
	/// `info`.
	///
	/// ## Errors
	///
	/// Return an error if the source is invalid, unsupported, or cannot be
	/// read.
	fn start_input(&mut self, info: &mut CompressInfo) -> Result<Header, SourceError>;

	/// # Get Pixel Rows.
	///
	/// Return the next row of pixels. The slice is only valid until the next
	/// call; copy out anything that needs to be kept.
	///
	/// ## Errors
	///
	/// Return an error if the row cannot be decoded or if every row has
	/// already been returned.
	fn get_pixel_rows(&mut self) -> Result<&[u8], SourceError>;

	/// # Finish Input.
	///
	/// Release any resources held by the source.
	///
	/// ## Errors
	///
	/// Return an error if called out of turn or if trailing data is corrupt.
	/// Resources are released regardless.
	fn finish_input(&mut self) -> Result<(), SourceError>;
}
