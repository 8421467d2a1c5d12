//! PNG export of a laid-out pattern with transparent holes

use crate::io::configuration::MAX_CANVAS_PX;
use crate::io::error::{MosaicError, Result, invalid_parameter, missing_value};
use crate::model::colour::parse_hex_colour;
use crate::model::parameters::Parameters;
use crate::model::region::GridCell;
use crate::pattern::row::TileRow;
use crate::spatial::geometry::Rect;
use crate::spatial::layout::Layout;
use image::{Rgba, RgbaImage};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

// Pixel span covered by a rectangle, clamped to the image
fn pixel_span(start: f64, end: f64, limit: u32) -> std::ops::Range<u32> {
    let clamp = |value: f64| value.round().clamp(0.0, f64::from(limit)) as u32;
    clamp(start)..clamp(end)
}

fn fill_rect(img: &mut RgbaImage, rect: &Rect, colour: Rgba<u8>) {
    let (width, height) = img.dimensions();
    for y in pixel_span(rect.top(), rect.bottom(), height) {
        for x in pixel_span(rect.left(), rect.right(), width) {
            img.put_pixel(x, y, colour);
        }
    }
}

/// Paint the pattern onto a new image sized to the layout's canvas
///
/// The canvas is filled with grout, crop strips and holes are cleared to
/// transparent, then each tile face is trimmed through
/// [`Layout::intersect_with_holes`] and filled with its colour.
///
/// # Errors
///
/// Returns an error if:
/// - The canvas is larger than `MAX_CANVAS_PX` on either side
/// - A tile names a colour missing from the colour model
/// - The grout or a tile colour has an unparseable hexcode
pub fn render_pattern(
    rows: &[TileRow],
    parameters: &Parameters,
    layout: &Layout,
) -> Result<RgbaImage> {
    let canvas = layout.canvas_size();
    for (name, side) in [("canvas_width", canvas.width), ("canvas_height", canvas.height)] {
        if !side.is_finite() || side > MAX_CANVAS_PX {
            return Err(invalid_parameter(
                name,
                &side,
                &format!("exceeds the {MAX_CANVAS_PX} pixel limit"),
            ));
        }
    }
    let width = canvas.width.ceil().max(1.0) as u32;
    let height = canvas.height.ceil().max(1.0) as u32;

    let [red, green, blue] = parse_hex_colour(&parameters.grout)?;
    let mut img = RgbaImage::from_pixel(width, height, Rgba([red, green, blue, u8::MAX]));

    for crop in layout.crops() {
        fill_rect(&mut img, crop, TRANSPARENT);
    }
    for hole in layout.holes() {
        for course in &*layout.hole_rects(hole) {
            fill_rect(&mut img, course, TRANSPARENT);
        }
    }

    let mut palette: HashMap<&str, Rgba<u8>> = HashMap::new();
    for tile in rows.iter().flat_map(|row| &row.tiles) {
        let colour = match palette.get(tile.colour.as_str()) {
            Some(&colour) => colour,
            None => {
                let spec = parameters
                    .colour(&tile.colour)
                    .ok_or_else(|| missing_value("tile colour in colour model"))?;
                let [r, g, b] = spec.rgb()?;
                let colour = Rgba([r, g, b, u8::MAX]);
                palette.insert(tile.colour.as_str(), colour);
                colour
            }
        };

        let face = layout.locate_cell(GridCell::new(tile.row, tile.key), true);
        if let Some(visible) = layout.intersect_with_holes(face) {
            fill_rect(&mut img, &visible, colour);
        }
    }

    Ok(img)
}

/// Lay out, paint and save the pattern as a PNG
///
/// # Errors
///
/// Returns an error if:
/// - Rendering fails (see [`render_pattern`])
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_pattern_as_png(
    rows: &[TileRow],
    parameters: &Parameters,
    basis_factor: f64,
    magnification: f64,
    output_path: &Path,
) -> Result<()> {
    let layout = Layout::new(basis_factor, magnification, parameters, rows);
    let img = render_pattern(rows, parameters, &layout)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| MosaicError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    debug!(
        path = %output_path.display(),
        width = img.width(),
        height = img.height(),
        cache = ?layout.hole_cache_stats(),
        "pattern exported"
    );

    Ok(())
}
