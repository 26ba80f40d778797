use image::ImageFormat;

use super::render::IconRenderer;
use crate::error::{IconError, Result};

const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Render and decode a 1x1 probe to confirm PNG encoding works.
///
/// Runs once before any icon is written. There is no fallback: a failure
/// here aborts the run.
pub fn ensure_png_support(renderer: &dyn IconRenderer) -> Result<()> {
    let bytes = renderer
        .render_png(1)
        .map_err(|e| IconError::DependencyUnavailable(format!("probe render failed: {e}")))?;

    if bytes.len() < PNG_SIGNATURE.len() || bytes[..PNG_SIGNATURE.len()] != PNG_SIGNATURE {
        return Err(IconError::DependencyUnavailable(
            "renderer output is not a PNG stream".into(),
        ));
    }

    let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Png)
        .map_err(|e| IconError::DependencyUnavailable(format!("probe decode failed: {e}")))?;
    if decoded.width() != 1 || decoded.height() != 1 {
        return Err(IconError::DependencyUnavailable(format!(
            "probe decoded as {}x{}",
            decoded.width(),
            decoded.height()
        )));
    }

    tracing::debug!("PNG pre-flight check passed");
    Ok(())
}
