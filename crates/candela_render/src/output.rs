//! Image emission: text PPM (P3) and PNG.
//!
//! The buffer is fully rendered in memory before any byte is written, so
//! a write failure can never leave behind a file that parses as a
//! complete image with wrong content.

use crate::renderer::{color_to_rgb8, ImageBuffer};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write the image as a plain-text PPM (P3) stream.
///
/// Header `P3`, dimensions, max channel value 255, then one
/// `"<R> <G> <B>"` line per pixel, top row first, left to right.
pub fn write_ppm<W: Write>(writer: &mut W, image: &ImageBuffer) -> io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for color in &image.pixels {
        let [r, g, b] = color_to_rgb8(*color);
        writeln!(writer, "{} {} {}", r, g, b)?;
    }

    Ok(())
}

/// Save the image as a PPM file.
pub fn save_ppm(image: &ImageBuffer, path: impl AsRef<Path>) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_ppm(&mut writer, image)?;
    writer.flush()
}

/// Save the image as a PNG file via the image crate.
pub fn save_png(image: &ImageBuffer, path: impl AsRef<Path>) -> image::ImageResult<()> {
    image::save_buffer(
        path,
        &image.to_rgb8(),
        image.width,
        image.height,
        image::ColorType::Rgb8,
    )
}
