//! Whiteboard capture for grading and hints.
//!
//! Renders the board into an offscreen cairo image surface and encodes it as
//! PNG. The AI tutor receives the base64 form of that image.

pub mod file;
pub mod types;


pub use file::{FileSaveConfig, save_capture};
pub use types::{CaptureError, CaptureOptions, CaptureRegion, CapturedImage};

use crate::draw::{PathCollection, Stroke, render_background, render_whiteboard};
use crate::input::InputState;
use cairo::{Context, Format, ImageSurface};

/// Tallest image produced for a full-board capture.
const MAX_CAPTURE_HEIGHT: u32 = 16_384;

/// Captures the board as the student currently sees it, active stroke included.
pub fn capture_whiteboard(
    input: &InputState,
    options: &CaptureOptions,
) -> Result<CapturedImage, CaptureError> {
    let scroll = input.scroll();
    let (top, height) = match options.region {
        CaptureRegion::Viewport => (scroll.offset(), options.height),
        CaptureRegion::FullBoard => {
            let ink_bottom = ink_bottom(input.paths(), input.active_stroke());
            let wanted = ink_bottom.min(scroll.content_height()).ceil().max(0.0) as u32;
            (0.0, wanted.clamp(options.height, MAX_CAPTURE_HEIGHT.max(options.height)))
        }
    };

    capture_paths(
        input.paths(),
        input.active_stroke(),
        &CaptureOptions { height, ..*options },
        top,
    )
}

/// Renders `paths` (plus an optional active stroke) to PNG.
///
/// `top` is the board Y coordinate mapped to the first image row.
pub fn capture_paths(
    paths: &PathCollection,
    active: Option<&Stroke>,
    options: &CaptureOptions,
    top: f64,
) -> Result<CapturedImage, CaptureError> {
    let (width, height) = (options.width, options.height);
    if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
        return Err(CaptureError::InvalidSize { width, height });
    }

    let surface = ImageSurface::create(Format::ARgb32, width as i32, height as i32)?;
    {
        let ctx = Context::new(&surface)?;
        render_background(&ctx, options.background);
        ctx.translate(0.0, -top);
        render_whiteboard(&ctx, paths, active);
    }
    surface.flush();

    let mut png = Vec::new();
    surface.write_to_png(&mut png)?;

    log::debug!(
        "Captured {} stroke(s) into {}x{} PNG ({} bytes)",
        paths.len(),
        width,
        height,
        png.len()
    );

    Ok(CapturedImage { png, width, height })
}

/// Lowest Y reached by any ink, including half the stroke width.
fn ink_bottom(paths: &PathCollection, active: Option<&Stroke>) -> f64 {
    paths
        .iter()
        .chain(active)
        .filter_map(|stroke| {
            stroke
                .bounding_box()
                .map(|bounds| bounds.max_y + stroke.width / 2.0)
        })
        .fold(0.0, f64::max)
}
