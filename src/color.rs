/*!
# `Refract` - Color Space
*/

use crate::ColorKind;
use std::fmt;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Output Color Space.
///
/// Every PNG is normalized to one of these two models before any rows are
/// handed off. Alpha channels are dropped, and palettes are always expanded
/// to RGB.
pub enum ColorSpace {
	/// # Greyscale.
	Grey,
	/// # RGB.
	Rgb,
}

impl fmt::Display for ColorSpace {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl From<ColorKind> for ColorSpace {
	#[inline]
	fn from(src: ColorKind) -> Self {
		match src {
			ColorKind::Grey | ColorKind::GreyAlpha => Self::Grey,
			ColorKind::Indexed | ColorKind::Rgb | ColorKind::Rgba => Self::Rgb,
		}
	}
}

impl ColorSpace {
	#[must_use]
	/// # As Str.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Grey => "greyscale",
			Self::Rgb => "RGB",
		}
	}

	#[inline]
	#[must_use]
	/// # Components Per Pixel.
	pub const fn components(self) -> u8 {
		match self {
			Self::Grey => 1,
			Self::Rgb => 3,
		}
	}
}
