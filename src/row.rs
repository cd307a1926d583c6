/*!
# `Refract` - Row Normalization
*/

use rgb::FromSlice;



/// # Copy Row.
///
/// Copy a decoded row — already expanded to eight bits per sample — into the
/// output buffer, dropping the alpha channel if there is one.
///
/// The source has `samples` channels per pixel; the destination has
/// `components`. Returns `false` if the two don't line up.
pub(crate) fn copy_row(src: &[u8], samples: usize, dst: &mut [u8], components: usize) -> bool {
	if
		samples == 0 ||
		components == 0 ||
		src.len() % samples != 0 ||
		src.len() / samples != dst.len() / components
	{
		return false;
	}

	match (samples, components) {
		// Already normalized.
		(1, 1) | (3, 3) => { dst.copy_from_slice(src); },
		// Greyscale with alpha.
		(2, 1) => {
			for (d, s) in dst.iter_mut().zip(src.chunks_exact(2)) { *d = s[0]; }
		},
		// RGBA.
		(4, 3) => {
			for (d, s) in dst.as_rgb_mut().iter_mut().zip(src.as_rgba()) {
				*d = s.rgb();
			}
		},
		_ => return false,
	}

	true
}
