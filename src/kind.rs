/*!
# `Refract` - Color Kind
*/

use std::fmt;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Source Color Kind.
///
/// This is the color type declared by the PNG header, prior to any
/// normalization.
pub enum ColorKind {
	/// # Greyscale.
	Grey,
	/// # Greyscale with Alpha.
	GreyAlpha,
	/// # Palette.
	Indexed,
	/// # RGB.
	Rgb,
	/// # RGB with Alpha.
	Rgba,
}

impl fmt::Display for ColorKind {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl From<png::ColorType> for ColorKind {
	fn from(src: png::ColorType) -> Self {
		match src {
			png::ColorType::Grayscale => Self::Grey,
			png::ColorType::GrayscaleAlpha => Self::GreyAlpha,
			png::ColorType::Indexed => Self::Indexed,
			png::ColorType::Rgb => Self::Rgb,
			png::ColorType::Rgba => Self::Rgba,
		}
	}
}

/// # Getters.
impl ColorKind {
	#[must_use]
	/// # As Str.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Grey => "greyscale",
			Self::GreyAlpha => "greyscale+alpha",
			Self::Indexed => "palette",
			Self::Rgb => "RGB",
			Self::Rgba => "RGB+alpha",
		}
	}

	#[inline]
	#[must_use]
	/// # Is Greyscale?
	pub const fn is_greyscale(self) -> bool {
		matches!(self, Self::Grey | Self::GreyAlpha)
	}

	#[inline]
	#[must_use]
	/// # Has Alpha?
	///
	/// This only reflects the declared color type. Transparency can also be
	/// added to the other kinds by a `tRNS` chunk.
	pub const fn has_alpha(self) -> bool {
		matches!(self, Self::GreyAlpha | Self::Rgba)
	}
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_from_png() {
		for (raw, kind) in [
			(png::ColorType::Grayscale, ColorKind::Grey),
			(png::ColorType::GrayscaleAlpha, ColorKind::GreyAlpha),
			(png::ColorType::Indexed, ColorKind::Indexed),
			(png::ColorType::Rgb, ColorKind::Rgb),
			(png::ColorType::Rgba, ColorKind::Rgba),
		] {
			assert_eq!(ColorKind::from(raw), kind);
		}

		assert!(ColorKind::GreyAlpha.is_greyscale());
		assert!(ColorKind::GreyAlpha.has_alpha());
		assert!(! ColorKind::Indexed.is_greyscale());
		assert!(! ColorKind::Indexed.has_alpha());
	}
}
