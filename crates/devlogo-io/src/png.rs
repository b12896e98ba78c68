//! PNG format support.
//!
//! Reading expands every PNG to 8-bit RGBA:
//!
//! - palette and sub-byte images are expanded, `tRNS` becomes alpha
//! - 16-bit samples are stripped to their high byte
//! - grayscale is replicated into R, G and B
//! - images without alpha get an opaque alpha of 255
//!
//! Writing always produces an 8-bit RGBA PNG.
//!
//! # Example
//!
//! ```rust,ignore
//! use devlogo_io::png::{read, write};
//!
//! let image = read("logo.png")?;
//! write("logo-dev.png", &image)?;
//! ```

use crate::{IoError, IoResult};
use devlogo_core::{CHANNELS, RgbaImage};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Seek, Write};
use std::path::Path;
use tracing::debug;

/// Reads a PNG file from the given path.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<RgbaImage> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Reading PNG");
    let file = File::open(path)?;
    decode(BufReader::new(file))
}

/// Decodes a PNG stream into an RGBA8 grid.
pub fn decode<R: BufRead + Seek>(reader: R) -> IoResult<RgbaImage> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    if info.bit_depth != png::BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "{:?} {:?}",
            info.color_type, info.bit_depth
        )));
    }

    let samples = &buf[..info.buffer_size()];
    let rgba: Vec<u8> = match info.color_type {
        png::ColorType::Rgba => samples.to_vec(),
        png::ColorType::Rgb => samples
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        png::ColorType::Grayscale => samples.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        png::ColorType::GrayscaleAlpha => samples
            .chunks_exact(2)
            .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
            .collect(),
        color_type => {
            return Err(IoError::UnsupportedFormat(format!(
                "{:?} {:?}",
                color_type, info.bit_depth
            )));
        }
    };

    debug!(
        width = info.width,
        height = info.height,
        color_type = ?info.color_type,
        "Decoded PNG"
    );
    Ok(RgbaImage::from_raw(info.width, info.height, rgba)?)
}

/// Writes an image to a PNG file as 8-bit RGBA.
pub fn write<P: AsRef<Path>>(path: P, image: &RgbaImage) -> IoResult<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), width = image.width(), height = image.height(), "Writing PNG");
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    encode(&mut writer, image)?;
    writer.flush()?;
    Ok(())
}

/// Encodes an image as an 8-bit RGBA PNG stream.
pub fn encode<W: Write>(writer: W, image: &RgbaImage) -> IoResult<()> {
    let mut encoder = png::Encoder::new(writer, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    debug_assert_eq!(image.as_raw().len(), image.pixel_count() * CHANNELS);
    png_writer
        .write_image_data(image.as_raw())
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    png_writer
        .finish()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    Ok(())
}
