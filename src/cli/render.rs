use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::info;

use crate::core::bitmap::BitmapEncoder;
use crate::core::color_cache::OutcomeColorCache;
use crate::core::complex::Complex;
use crate::core::errors::FractalError;
use crate::core::file_io::{create_image_file, RenderParams};
use crate::core::stopwatch::Stopwatch;
use crate::fractals::newtons_method::classify;
use crate::fractals::polynomial::Polynomial;

/// Render entry point for the CLI. Classification tokens stream to stdout;
/// the bitmap, when requested, goes to `image_path`.
pub fn render_fractal(
    params: &RenderParams,
    image_path: Option<&Path>,
) -> Result<(), FractalError> {
    let mut stopwatch = Stopwatch::new("render");

    let geometry = params.region.image_geometry();
    info!(
        "scan geometry: {}x{} pixels, {} padding bytes per row, {} byte image",
        geometry.width,
        geometry.height,
        geometry.padding,
        geometry.file_size()
    );

    let stdout = io::stdout();
    let mut progress = stdout.lock();
    let mut cache = OutcomeColorCache::new();

    match image_path {
        Some(path) => {
            let sink = create_image_file(path)?;
            let mut encoder = BitmapEncoder::new(sink, geometry);
            encoder.write_header().map_err(FractalError::ImageWrite)?;
            stopwatch.record_split("open image and write header");

            run_render(params, &mut progress, Some(&mut encoder), &mut cache)?;
            stopwatch.record_split("classify and encode");

            encoder.finish().map_err(FractalError::ImageWrite)?;
            stopwatch.record_split("flush image");
            info!("wrote image file to: {}", path.display());
        }
        None => {
            run_render(
                params,
                &mut progress,
                None::<&mut BitmapEncoder<BufWriter<File>>>,
                &mut cache,
            )?;
            stopwatch.record_split("classify");
        }
    }

    info!("distinct outcomes observed: {}", cache.len());
    stopwatch.log_summary();
    Ok(())
}

/// Core scan loop, writer-generic so tests can drive it against in-memory
/// sinks. Walks the grid in scan order (real axis outer, imaginary axis
/// inner), classifies each point, streams one token per point, and paints
/// each outcome through the color cache when an encoder is present.
///
/// The token stream is best-effort diagnostics; a failed token write never
/// aborts the render. Image writes are fatal on failure.
pub fn run_render<P, S>(
    params: &RenderParams,
    progress: &mut P,
    mut encoder: Option<&mut BitmapEncoder<S>>,
    cache: &mut OutcomeColorCache,
) -> Result<(), FractalError>
where
    P: Write,
    S: Write,
{
    let polynomial = Polynomial::new(params.coefficients.clone());
    let rows = params.region.real_axis();
    let columns = params.region.imag_axis();

    for real in rows.iter() {
        for imag in columns.iter() {
            let outcome = classify(Complex::new(real, imag), &polynomial);
            let _ = write!(progress, "{} ", outcome);
            if let Some(encoder) = encoder.as_mut() {
                let color = cache.lookup_or_assign(outcome);
                encoder.write_pixel(color).map_err(FractalError::ImageWrite)?;
            }
        }
        let _ = writeln!(progress);
    }
    Ok(())
}
