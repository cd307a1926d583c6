/*!
# `Refract` - Test Fixtures

Tiny PNGs built in memory, so every header combination — valid or otherwise
— can be tested without image files.
*/

use png::{
	BitDepth,
	ColorType,
};

/// # PNG Signature.
const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

/// # Adam7 Passes.
///
/// Starting column, starting row, column step, row step.
const ADAM7: [(usize, usize, usize, usize); 7] = [
	(0, 0, 8, 8),
	(4, 0, 8, 8),
	(0, 4, 4, 8),
	(2, 0, 4, 4),
	(0, 2, 2, 4),
	(1, 0, 2, 2),
	(0, 1, 1, 2),
];



#[derive(Debug, Clone)]
/// # Ancillary Chunk.
pub(crate) struct Chunk {
	name: [u8; 4],
	data: Vec<u8>,
}

impl Chunk {
	pub(crate) const fn new(name: [u8; 4], data: Vec<u8>) -> Self {
		Self { name, data }
	}
}



/// # Build PNG.
///
/// Encode raw (packed) row data with [`png::Encoder`].
///
/// `PLTE` and `tRNS` chunks are handed to the encoder so they land where
/// they belong; anything else is written verbatim, in order, right after
/// the header.
pub(crate) fn png(
	width: u32,
	height: u32,
	color: ColorType,
	depth: BitDepth,
	chunks: &[Chunk],
	data: &[u8],
) -> Vec<u8> {
	let mut out = Vec::new();

	let mut enc = png::Encoder::new(&mut out, width, height);
	enc.set_color(color);
	enc.set_depth(depth);
	for chunk in chunks {
		match &chunk.name {
			b"PLTE" => enc.set_palette(chunk.data.clone()),
			b"tRNS" => enc.set_trns(chunk.data.clone()),
			_ => {},
		}
	}

	let mut writer = enc.write_header().expect("Header failed.");
	for chunk in chunks {
		if chunk.name != *b"PLTE" && chunk.name != *b"tRNS" {
			writer.write_chunk(png::chunk::ChunkType(chunk.name), &chunk.data)
				.expect("Chunk failed.");
		}
	}
	writer.write_image_data(data).expect("Image data failed.");
	writer.finish().expect("Finish failed.");

	out
}

/// # Build Interlaced PNG.
///
/// The encoder can't interlace, so this one is assembled by hand from raw
/// row data. Only byte-aligned pixels are supported.
pub(crate) fn interlaced(
	width: u32,
	height: u32,
	color: ColorType,
	depth: BitDepth,
	data: &[u8],
) -> Vec<u8> {
	let w = width as usize;
	let h = height as usize;
	let bits = color.samples() * depth as usize;
	assert_eq!(bits % 8, 0, "Interlaced fixtures must be byte-aligned.");
	let bpp = bits / 8;
	let row_len = w * bpp;
	assert_eq!(data.len(), row_len * h, "Fixture data has the wrong length.");

	// Filter type zero, pass by pass.
	let mut scanlines = Vec::with_capacity((row_len + 7) * h);
	for (x0, y0, dx, dy) in ADAM7 {
		if w <= x0 || h <= y0 { continue; }
		for y in (y0..h).step_by(dy) {
			scanlines.push(0);
			for x in (x0..w).step_by(dx) {
				let start = y * row_len + x * bpp;
				scanlines.extend_from_slice(&data[start..start + bpp]);
			}
		}
	}

	let mut out = SIGNATURE.to_vec();
	write_chunk(&mut out, *b"IHDR", &ihdr(width, height, color as u8, depth as u8, true));
	write_chunk(
		&mut out,
		*b"IDAT",
		&miniz_oxide::deflate::compress_to_vec_zlib(&scanlines, 6),
	);
	write_chunk(&mut out, *b"IEND", &[]);
	out
}

/// # Build Bad Header.
///
/// A signature and `IHDR` with whatever color type and depth codes are
/// given, valid or not, followed by `IEND`.
pub(crate) fn header_only(width: u32, height: u32, color: u8, depth: u8) -> Vec<u8> {
	let mut out = SIGNATURE.to_vec();
	write_chunk(&mut out, *b"IHDR", &ihdr(width, height, color, depth, false));
	write_chunk(&mut out, *b"IEND", &[]);
	out
}

/// # ICC Profile Chunk.
pub(crate) fn iccp(profile: &[u8]) -> Chunk {
	let mut data = b"icc\0\0".to_vec();
	data.extend_from_slice(&miniz_oxide::deflate::compress_to_vec_zlib(profile, 6));
	Chunk::new(*b"iCCP", data)
}

/// # Noise.
///
/// Incompressible bytes, courtesy of xorshift.
pub(crate) fn noise(len: usize) -> Vec<u8> {
	let mut x = 0x2545_F491_u32;
	(0..len).map(|_| {
		x ^= x << 13;
		x ^= x >> 17;
		x ^= x << 5;
		x.to_le_bytes()[0]
	})
	.collect()
}

/// # IHDR Payload.
///
/// Width, height, bit depth, color type, compression, filter, interlace.
fn ihdr(width: u32, height: u32, color: u8, depth: u8, interlaced: bool) -> Vec<u8> {
	let mut out = Vec::with_capacity(13);
	out.extend_from_slice(&width.to_be_bytes());
	out.extend_from_slice(&height.to_be_bytes());
	out.extend_from_slice(&[depth, color, 0, 0, u8::from(interlaced)]);
	out
}

/// # Write Chunk.
fn write_chunk(out: &mut Vec<u8>, name: [u8; 4], data: &[u8]) {
	let len = u32::try_from(data.len()).expect("Chunk too big.");
	out.extend_from_slice(&len.to_be_bytes());
	out.extend_from_slice(&name);
	out.extend_from_slice(data);

	let mut crc = crc32fast::Hasher::new();
	crc.update(&name);
	crc.update(data);
	out.extend_from_slice(&crc.finalize().to_be_bytes());
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_ihdr() {
		// Depth comes before color.
		let raw = header_only(3, 2, 2, 8);
		assert_eq!(&raw[..8], &SIGNATURE);
		assert_eq!(&raw[12..16], b"IHDR");
		assert_eq!(&raw[16..29], &[0, 0, 0, 3, 0, 0, 0, 2, 8, 2, 0, 0, 0]);

		// The IEND chunk's CRC is famous.
		assert_eq!(&raw[raw.len() - 4..], &[0xAE, 0x42, 0x60, 0x82]);
	}

	#[test]
	fn t_interlaced() {
		// A hand-built file has to agree with the decoder.
		let data = noise(9 * 10 * 3);
		let raw = interlaced(9, 10, ColorType::Rgb, BitDepth::Eight, &data);
		let mut reader = png::Decoder::new(raw.as_slice())
			.read_info()
			.expect("Read info failed.");
		assert!(reader.info().interlaced);

		let mut buf = vec![0; reader.output_buffer_size()];
		reader.next_frame(&mut buf).expect("Frame failed.");
		assert_eq!(buf, data);
	}
}
