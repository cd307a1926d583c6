/*!
# `Refract` - PNG Source

This crate adapts PNG images for consumption by scanline-driven JPEG
compressors. Images are decoded by the [`png`](https://crates.io/crates/png)
crate and re-exposed one row at a time as 8-bit greyscale or 8-bit RGB, with
any alpha discarded.

The gamma and embedded ICC profile, if any, are extracted along the way, the
latter packaged as an `APP2` marker ready to be copied into the JPEG.

## Examples

```no_run
use refract_png::{
	CompressInfo,
	PngSource,
	RowSource,
};

let raw = std::fs::read("/path/to/my.png").unwrap();
let mut info = CompressInfo::default();
let mut src = PngSource::new(raw.as_slice());

let header = src.start_input(&mut info).unwrap();
for _ in 0..header.height() {
	let _row = src.get_pixel_rows().unwrap();
	// Compress the row!
}
src.finish_input().unwrap();
```
*/

#![warn(clippy::filetype_is_file)]
#![warn(clippy::integer_division)]
#![warn(clippy::needless_borrow)]
#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::suboptimal_flops)]
#![warn(clippy::unneeded_field_pattern)]
#![warn(macro_use_extern_crate)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_crate_dependencies)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]

#![allow(clippy::module_name_repetitions)]



mod color;
mod error;
mod header;
mod info;
mod kind;
mod marker;
mod meta;
mod pump;
mod row;
mod source;
mod traits;

#[cfg(test)] mod fixtures;


pub use color::ColorSpace;
pub use error::{
	SourceError,
	SourceWarning,
};
pub use header::Header;
pub use info::{
	CompressInfo,
	Descriptor,
};
pub use kind::ColorKind;
pub use marker::Marker;
pub use pump::pump;
pub use source::{
	PngSource,
	Stage,
};
pub use traits::RowSource;



/// # Maximum Dimension.
///
/// Neither the width nor the height of a source may exceed this value.
pub const MAX_DIMENSION: u32 = 65_535;

/// # Default Gamma.
///
/// This is the `1/2.2` transfer convention, used for `sRGB` images and any
/// image that does not declare a gamma of its own.
pub const DEFAULT_GAMMA: f64 = 0.45455;

/// # Sample Precision.
///
/// Pulled rows always use eight bits per sample.
pub const DATA_PRECISION: u8 = 8;
