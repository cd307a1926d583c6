/*!
# `Refract` - PNG Source
*/

use crate::{
	ColorSpace,
	CompressInfo,
	Descriptor,
	Header,
	RowSource,
	SourceError,
};
use crate::{
	meta::Metadata,
	row::copy_row,
};
use std::{
	fmt,
	io::Read,
	num::NonZeroUsize,
};



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Session Stage.
///
/// A [`PngSource`] moves through these in order, though it can jump to
/// [`Stage::Error`] from the first two.
pub enum Stage {
	/// # Not Started.
	Uninitialized,

	/// # Header Read; Rows Remain.
	HeaderReady,

	/// # All Rows Read.
	RowsExhausted,

	/// # Finished.
	Closed,

	/// # Failed.
	///
	/// A start or row pull failed. If the start had succeeded,
	/// [`PngSource::finish`] must still be called.
	Error,
}

impl fmt::Display for Stage {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Stage {
	#[must_use]
	/// # As Str.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Uninitialized => "uninitialized",
			Self::HeaderReady => "header ready",
			Self::RowsExhausted => "rows exhausted",
			Self::Closed => "closed",
			Self::Error => "error",
		}
	}
}



/// # PNG Source.
///
/// This is a single-use decoding session for one PNG image, implementing
/// [`RowSource`].
///
/// Starting the session reads and validates the header, works out the
/// normalized output format, and extracts the gamma and ICC profile. From
/// then on each call to [`PngSource::pull_row`] returns the next row as 8-bit
/// greyscale or 8-bit RGB:
///
/// * Palettes are expanded to RGB;
/// * Greyscale below eight bits is scaled up to eight;
/// * Sixteen-bit samples are truncated to their high byte;
/// * Alpha — including `tRNS` transparency — is dropped;
/// * Interlaced images are de-interlaced.
///
/// The returned row borrows the session's one and only row buffer, which is
/// overwritten with each call.
pub struct PngSource<R: Read> {
	/// # Raw Source.
	src: Option<R>,

	/// # Decoder Memory Limit.
	limit: Option<NonZeroUsize>,

	/// # Decoder.
	reader: Option<png::Reader<R>>,

	/// # Header.
	header: Option<Header>,

	/// # De-Interlaced Frame.
	frame: Option<Vec<u8>>,

	/// # Row Buffer.
	buf: Vec<u8>,

	/// # Decoded Samples Per Pixel.
	samples: usize,

	/// # Output Components Per Pixel.
	components: usize,

	/// # Rows Read.
	row: usize,

	/// # Stage.
	stage: Stage,
}

impl<R: Read> fmt::Debug for PngSource<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PngSource")
		.field("limit", &self.limit)
		.field("header", &self.header)
		.field("row_size", &self.buf.len())
		.field("samples", &self.samples)
		.field("components", &self.components)
		.field("row", &self.row)
		.field("stage", &self.stage)
		.finish_non_exhaustive()
	}
}

impl<R: Read> RowSource for PngSource<R> {
	#[inline]
	fn start_input(&mut self, info: &mut CompressInfo) -> Result<Header, SourceError> {
		self.start(info)
	}

	#[inline]
	fn get_pixel_rows(&mut self) -> Result<&[u8], SourceError> { self.pull_row() }

	#[inline]
	fn finish_input(&mut self) -> Result<(), SourceError> { self.finish() }
}

/// ## Instantiation.
impl<R: Read> PngSource<R> {
	#[must_use]
	/// # New.
	///
	/// Nothing is read until [`PngSource::start`] is called.
	pub const fn new(src: R) -> Self {
		Self {
			src: Some(src),
			limit: None,
			reader: None,
			header: None,
			frame: None,
			buf: Vec::new(),
			samples: 0,
			components: 0,
			row: 0,
			stage: Stage::Uninitialized,
		}
	}

	#[must_use]
	/// # New (With Memory Limit).
	///
	/// Same as [`PngSource::new`], but the decoder will refuse to allocate
	/// more than `limit` bytes.
	pub fn with_limit(src: R, limit: NonZeroUsize) -> Self {
		Self {
			limit: Some(limit),
			..Self::new(src)
		}
	}
}

/// ## Getters.
impl<R: Read> PngSource<R> {
	#[inline]
	#[must_use]
	/// # Header.
	///
	/// This returns `None` until the session has been started.
	pub const fn header(&self) -> Option<&Header> { self.header.as_ref() }

	#[inline]
	#[must_use]
	/// # Rows Read.
	pub const fn rows_read(&self) -> usize { self.row }

	#[inline]
	#[must_use]
	/// # Row Size.
	///
	/// The length of each pulled row, in bytes, or zero if the session has
	/// not been started.
	pub fn row_size(&self) -> usize { self.buf.len() }

	#[inline]
	#[must_use]
	/// # Stage.
	pub const fn stage(&self) -> Stage { self.stage }
}

/// ## Decoding.
impl<R: Read> PngSource<R> {
	/// # Start.
	///
	/// Read the PNG header and metadata, populating `info` with the details
	/// the compressor will need. This must be called exactly once, before
	/// anything else.
	///
	/// An oversized ICC profile is not an error; it is logged, recorded in
	/// the info's warnings, and left out.
	///
	/// ## Errors
	///
	/// This will return an error if the header is invalid or unsupported,
	/// either dimension exceeds `65535`, or the decoder cannot be set up. The
	/// session is then finished; there is nothing to release.
	pub fn start(&mut self, info: &mut CompressInfo) -> Result<Header, SourceError> {
		let Some(src) = self.src.take() else {
			return Err(SourceError::Sequence(self.stage));
		};

		match self.open(src, info) {
			Ok(header) => {
				self.stage =
					if header.height() == 0 { Stage::RowsExhausted }
					else { Stage::HeaderReady };
				Ok(header)
			},
			Err(e) => {
				self.stage = Stage::Error;
				Err(e)
			},
		}
	}

	/// # Pull Row.
	///
	/// Decode and return the next row. The slice is only valid until the next
	/// call.
	///
	/// ## Errors
	///
	/// This will return an error if the image data is corrupt or truncated,
	/// or if called outside the row stage. Decoding errors are final, but
	/// [`PngSource::finish`] must still be called.
	pub fn pull_row(&mut self) -> Result<&[u8], SourceError> {
		if self.stage != Stage::HeaderReady {
			return Err(SourceError::Sequence(self.stage));
		}

		if let Err(e) = self.read_row() {
			self.stage = Stage::Error;
			return Err(e);
		}

		self.row += 1;
		if self.header.map_or(true, |h| h.height() <= self.row) {
			self.stage = Stage::RowsExhausted;
		}

		Ok(&self.buf)
	}

	/// # Finish.
	///
	/// Release the decoder. This must be called exactly once for every
	/// successful [`PngSource::start`], whether or not all the rows were
	/// pulled.
	///
	/// If every row was read, the rest of the file is read too, to make sure
	/// it ends properly.
	///
	/// ## Errors
	///
	/// This will return an error if the session was never successfully
	/// started or has already been finished, or if the data trailing the last
	/// row is corrupt. The decoder is released either way.
	pub fn finish(&mut self) -> Result<(), SourceError> {
		let Some(mut reader) = self.reader.take() else {
			return Err(SourceError::Sequence(self.stage));
		};

		let complete = self.stage == Stage::RowsExhausted;
		self.stage = Stage::Closed;
		self.frame = None;

		log::debug!("PNG source closed after {} row(s).", self.row);

		if complete { reader.finish().map_err(|e| SourceError::stream(&e)) }
		else { Ok(()) }
	}
}

/// ## Internal.
impl<R: Read> PngSource<R> {
	/// # Open.
	///
	/// Set up the decoder, read the header, and size the buffers.
	fn open(&mut self, src: R, info: &mut CompressInfo) -> Result<Header, SourceError> {
		let mut decoder = match self.limit {
			Some(bytes) => png::Decoder::new_with_limits(src, png::Limits { bytes: bytes.get() }),
			None => png::Decoder::new(src),
		};

		// Palettes and low-depth greys are expanded, 16-bit samples are
		// stripped. Alpha is dropped as rows are copied.
		decoder.set_transformations(
			png::Transformations::EXPAND | png::Transformations::STRIP_16
		);
		let reader = decoder.read_info().map_err(|e| SourceError::header(&e))?;

		// Validate the header before anything else.
		let header = Header::try_from(reader.info())?;
		let space = ColorSpace::from(header.color());

		let (color, depth) = reader.output_color_type();
		if depth != png::BitDepth::Eight {
			return Err(SourceError::Header(format!(
				"{}-bit samples could not be normalized",
				depth as u8,
			)));
		}
		let samples = color.samples();
		let components = usize::from(space.components());

		// Size the row buffer.
		let row_size = header.width() * components;
		let mut buf = Vec::new();
		buf.try_reserve_exact(row_size).map_err(|_| SourceError::Structure(
			format!("unable to allocate a {row_size}-byte row buffer")
		))?;
		buf.resize(row_size, 0);

		// Interlaced images have to be decoded all at once, so the whole frame
		// counts against the memory limit.
		let frame =
			if header.interlaced() {
				let size = reader.output_buffer_size();
				let limit = self.limit.map_or_else(
					|| png::Limits::default().bytes,
					NonZeroUsize::get,
				);
				if limit < size {
					return Err(SourceError::Structure(format!(
						"a {size}-byte frame buffer exceeds the {limit}-byte limit"
					)));
				}

				let mut frame = Vec::new();
				frame.try_reserve_exact(size).map_err(|_| SourceError::Structure(
					format!("unable to allocate a {size}-byte frame buffer")
				))?;
				frame.resize(size, 0);
				Some(frame)
			}
			else { None };

		// Gamma and ICC.
		let meta = Metadata::from(reader.info());
		if let Some(w) = meta.warning { info.warn(w); }
		info.set_image(
			header.width_u32(),
			header.height_u32(),
			Descriptor::new(space, meta.gamma),
			meta.marker,
		);

		log::debug!(
			"PNG source opened: {}x{} {}-bit {}{}, reading as {space} (gamma {}).",
			header.width(),
			header.height(),
			header.bit_depth(),
			header.color(),
			if header.interlaced() { " (interlaced)" } else { "" },
			meta.gamma,
		);

		self.reader.replace(reader);
		self.header.replace(header);
		self.frame = frame;
		self.buf = buf;
		self.samples = samples;
		self.components = components;

		Ok(header)
	}

	/// # Read Row.
	///
	/// Decode the next row into the row buffer.
	fn read_row(&mut self) -> Result<(), SourceError> {
		let Some(reader) = self.reader.as_mut() else {
			return Err(SourceError::Sequence(self.stage));
		};

		let copied =
			// Pull from the de-interlaced frame, decoding it first if need be.
			if let Some(frame) = self.frame.as_mut() {
				if self.row == 0 {
					reader.next_frame(frame).map_err(|e| SourceError::stream(&e))?;
				}

				let line = self.buf.len() / self.components * self.samples;
				let start = self.row * line;
				match frame.get(start..start + line) {
					Some(src) => copy_row(src, self.samples, &mut self.buf, self.components),
					None => false,
				}
			}
			// Pull straight from the decoder.
			else {
				let Some(row) = reader.next_row().map_err(|e| SourceError::stream(&e))? else {
					return Err(SourceError::Stream(format!(
						"image data ended after {} row(s)",
						self.row,
					)));
				};
				copy_row(row.data(), self.samples, &mut self.buf, self.components)
			};

		if copied { Ok(()) }
		else {
			Err(SourceError::Stream(format!("row {} has an unexpected length", self.row)))
		}
	}
}
