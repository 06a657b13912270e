use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::errors::FractalError;
use crate::core::image_utils::{AxisSpan, ScanRegion};

/**
 * Everything a render needs, as parsed from a parameter file: the
 * polynomial coefficients (constant term first) and the region of the
 * complex plane to scan. Two formats are accepted:
 *
 * - the classic whitespace-separated text format:
 *   `n  c_0 .. c_n  re_lo im_lo re_hi im_hi  step`
 *   (note the interleaved span order), chosen for any extension other
 *   than `.json`;
 * - a JSON serialization of this struct, chosen for `.json` files.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RenderParams {
    pub coefficients: Vec<f64>,
    pub region: ScanRegion,
}

pub fn read_render_params(path: &Path) -> Result<RenderParams, FractalError> {
    let text = std::fs::read_to_string(path).map_err(|source| FractalError::File {
        path: path.to_owned(),
        source,
    })?;
    let params = if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
        serde_json::from_str(&text)
            .map_err(|err| FractalError::InputRead(format!("invalid JSON parameters: {}", err)))?
    } else {
        parse_coefficient_text(&text)?
    };
    validate(&params)?;
    Ok(params)
}

/// Open the image output file for writing, buffered. Called only when the
/// caller asked for an image.
pub fn create_image_file(path: &Path) -> Result<BufWriter<File>, FractalError> {
    let file = File::create(path).map_err(|source| FractalError::File {
        path: path.to_owned(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

fn parse_coefficient_text(text: &str) -> Result<RenderParams, FractalError> {
    let mut tokens = text.split_whitespace();

    let mut next_f64 = |what: &str| -> Result<f64, FractalError> {
        let token = tokens
            .next()
            .ok_or_else(|| FractalError::InputRead(format!("missing {}", what)))?;
        token
            .parse::<f64>()
            .map_err(|_| FractalError::InputRead(format!("invalid {}: {:?}", what, token)))
    };

    let degree_raw = next_f64("polynomial degree")?;
    if degree_raw < 0.0 || degree_raw.fract() != 0.0 || degree_raw > u32::MAX as f64 {
        return Err(FractalError::InputRead(format!(
            "polynomial degree must be a non-negative integer, got {}",
            degree_raw
        )));
    }
    let degree = degree_raw as usize;

    let mut coefficients = Vec::with_capacity(degree + 1);
    for index in 0..=degree {
        coefficients.push(next_f64(&format!("coefficient {}", index))?);
    }

    let re_lo = next_f64("real span lower bound")?;
    let im_lo = next_f64("imaginary span lower bound")?;
    let re_hi = next_f64("real span upper bound")?;
    let im_hi = next_f64("imaginary span upper bound")?;
    let step = next_f64("step")?;

    Ok(RenderParams {
        coefficients,
        region: ScanRegion {
            real_span: AxisSpan::new(re_lo, re_hi),
            imag_span: AxisSpan::new(im_lo, im_hi),
            step,
        },
    })
}

// The core assumes validated input; this is the gate.
fn validate(params: &RenderParams) -> Result<(), FractalError> {
    if params.coefficients.is_empty() {
        return Err(FractalError::InputRead(
            "polynomial needs at least one coefficient".to_owned(),
        ));
    }
    let region = &params.region;
    if !region.step.is_finite() || region.step <= 0.0 {
        return Err(FractalError::InputRead(format!(
            "step must be positive and finite, got {}",
            region.step
        )));
    }
    for (name, span) in [
        ("real", &region.real_span),
        ("imaginary", &region.imag_span),
    ] {
        if !span.lo.is_finite() || !span.hi.is_finite() || span.hi < span.lo {
            return Err(FractalError::InputRead(format!(
                "{} span [{}, {}] is not a valid closed interval",
                name, span.lo, span.hi
            )));
        }
    }
    Ok(())
}
