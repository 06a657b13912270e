use serde::{Deserialize, Serialize};

/// Closed interval along one axis of the scan region.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct AxisSpan {
    pub lo: f64,
    pub hi: f64,
}

impl AxisSpan {
    pub fn new(lo: f64, hi: f64) -> AxisSpan {
        AxisSpan { lo, hi }
    }

    pub fn length(&self) -> f64 {
        self.hi - self.lo
    }
}

/**
 * Fully specifies the sampled grid: two closed spans in the complex plane
 * and the sampling step shared by both axes. The scan always walks the real
 * axis in the outer loop (rows) and the imaginary axis in the inner loop
 * (columns), so the image height derives from the real span and the width
 * from the imaginary span. That mapping looks swapped on a first reading
 * but is load-bearing for output parity; do not "fix" it.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScanRegion {
    pub real_span: AxisSpan,
    pub imag_span: AxisSpan,
    pub step: f64,
}

impl ScanRegion {
    pub fn image_geometry(&self) -> ImageGeometry {
        let height = (self.real_span.length() / self.step).floor() as u32 + 1;
        let width = (self.imag_span.length() / self.step).floor() as u32 + 1;
        let padding = (4 - (3 * width) % 4) % 4;
        ImageGeometry {
            width,
            height,
            padding,
        }
    }

    /// Row coordinates: the real axis, one entry per image row.
    pub fn real_axis(&self) -> AxisScan {
        AxisScan::new(self.real_span.lo, self.step, self.image_geometry().height)
    }

    /// Column coordinates: the imaginary axis, one entry per image column.
    pub fn imag_axis(&self) -> AxisScan {
        AxisScan::new(self.imag_span.lo, self.step, self.image_geometry().width)
    }
}

/// Pixel dimensions implied by a scan region, along with the per-row byte
/// padding that aligns each 3-byte-pixel row to a 4-byte boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageGeometry {
    pub width: u32,
    pub height: u32,
    pub padding: u32,
}

impl ImageGeometry {
    /// Bytes per encoded row, padding included.
    pub fn row_stride(&self) -> u32 {
        3 * self.width + self.padding
    }

    pub fn pixel_array_size(&self) -> u32 {
        self.row_stride() * self.height
    }

    /// Total encoded file size: pixel array plus the two headers.
    pub fn file_size(&self) -> u32 {
        self.pixel_array_size() + crate::core::bitmap::BITMAP_HEADERS_SIZE
    }
}

/// Maps a sample index to its coordinate along one axis:
/// `lo + index * step`. Fixed-step counterpart of a linear pixel map.
#[derive(Clone, Debug)]
pub struct AxisScan {
    offset: f64,
    step: f64,
    count: u32,
}

impl AxisScan {
    pub fn new(offset: f64, step: f64, count: u32) -> AxisScan {
        AxisScan {
            offset,
            step,
            count,
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    // Map from sample index (integer) to coordinate (float).
    pub fn map(&self, index: u32) -> f64 {
        self.offset + self.step * (index as f64)
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).map(move |index| self.map(index))
    }
}
