/*!
# `Refract` - Row Pump
*/

use crate::{
	CompressInfo,
	RowSource,
	SourceError,
};
use std::ops::ControlFlow;



/// # Pump Rows.
///
/// This drives a [`RowSource`] the way a compressor would: start it, feed
/// each row — top to bottom — to the callback, then finish it.
///
/// The callback receives the row index and the row itself, and may return
/// [`ControlFlow::Break`] to abandon the image early.
///
/// The source is always finished if it was successfully started, even when
/// a row fails or the callback bails.
///
/// Returns the number of rows handed to the callback.
///
/// ## Errors
///
/// The first error encountered is returned. If a row fails, that error takes
/// precedence over any raised while finishing.
pub fn pump<S, F>(src: &mut S, info: &mut CompressInfo, mut cb: F)
-> Result<usize, SourceError>
where S: RowSource + ?Sized, F: FnMut(usize, &[u8]) -> ControlFlow<()> {
	let header = src.start_input(info)?;

	let mut done = 0;
	let mut res = Ok(());
	for idx in 0..header.height() {
		match src.get_pixel_rows() {
			Ok(row) => {
				done += 1;
				if cb(idx, row).is_break() {
					log::debug!("PNG rows abandoned after {done} of {}.", header.height());
					break;
				}
			},
			Err(e) => {
				res = Err(e);
				break;
			},
		}
	}

	let finished = src.finish_input();
	res.and(finished).map(|()| done)
}
