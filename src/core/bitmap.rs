// Minimal uncompressed 24-bit bitmap writer. The format is small enough
// that hand-serializing the two headers is simpler than pulling in an image
// library, and the byte layout is part of the output contract.

use std::io::{self, Write};

use crate::core::color_cache::Rgb;
use crate::core::image_utils::ImageGeometry;

pub const FILE_HEADER_SIZE: u32 = 14;
pub const DIB_HEADER_SIZE: u32 = 40;
pub const BITMAP_HEADERS_SIZE: u32 = FILE_HEADER_SIZE + DIB_HEADER_SIZE;

// 72 DPI, expressed in pixels per meter.
const RESOLUTION_PPM: u32 = 2835;

const COLOR_PLANES: u16 = 1;
const BITS_PER_PIXEL: u16 = 24;

/// Append-only writer for a 24-bit uncompressed bitmap. Pixels arrive one
/// at a time in scan order; the encoder tracks how far into the current row
/// it is and inserts the alignment padding at each row boundary. The row
/// counter is instance state, so one process can encode any number of
/// images.
pub struct BitmapEncoder<W: Write> {
    sink: W,
    geometry: ImageGeometry,
    pixels_in_row: u32,
}

impl<W: Write> BitmapEncoder<W> {
    pub fn new(sink: W, geometry: ImageGeometry) -> BitmapEncoder<W> {
        BitmapEncoder {
            sink,
            geometry,
            pixels_in_row: 0,
        }
    }

    /// Emit the 14-byte file header followed by the 40-byte
    /// device-independent-bitmap header. Must be called exactly once,
    /// before the first pixel.
    pub fn write_header(&mut self) -> io::Result<()> {
        let geometry = &self.geometry;

        self.sink.write_all(b"BM")?;
        self.sink.write_all(&geometry.file_size().to_le_bytes())?;
        self.sink.write_all(&0u32.to_le_bytes())?; // reserved
        self.sink.write_all(&BITMAP_HEADERS_SIZE.to_le_bytes())?; // pixel array offset

        self.sink.write_all(&DIB_HEADER_SIZE.to_le_bytes())?;
        self.sink.write_all(&geometry.width.to_le_bytes())?;
        self.sink.write_all(&geometry.height.to_le_bytes())?;
        self.sink.write_all(&COLOR_PLANES.to_le_bytes())?;
        self.sink.write_all(&BITS_PER_PIXEL.to_le_bytes())?;
        self.sink.write_all(&0u32.to_le_bytes())?; // compression
        self.sink
            .write_all(&geometry.pixel_array_size().to_le_bytes())?;
        self.sink.write_all(&RESOLUTION_PPM.to_le_bytes())?;
        self.sink.write_all(&RESOLUTION_PPM.to_le_bytes())?;
        self.sink.write_all(&0u32.to_le_bytes())?; // palette colors
        self.sink.write_all(&0u32.to_le_bytes())?; // important colors

        Ok(())
    }

    /// Append one pixel, blue byte first, padding out the row when it
    /// completes. Write failures are fatal for the render; the caller
    /// aborts rather than recover a partial file.
    pub fn write_pixel(&mut self, rgb: Rgb) -> io::Result<()> {
        let [red, green, blue] = rgb;
        self.sink.write_all(&[blue, green, red])?;
        self.pixels_in_row += 1;
        if self.pixels_in_row == self.geometry.width {
            for _ in 0..self.geometry.padding {
                self.sink.write_all(&[0u8])?;
            }
            self.pixels_in_row = 0;
        }
        Ok(())
    }

    /// Flush and hand back the sink.
    pub fn finish(mut self) -> io::Result<W> {
        self.sink.flush()?;
        Ok(self.sink)
    }
}
