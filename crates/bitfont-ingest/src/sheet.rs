//! Glyph extraction from a raster glyph sheet.
//!
//! The sheet is any raster image the `image` crate can decode; it is
//! flattened to 8-bit luma and each descriptor rect is cut out as an ink
//! mask. A pixel counts as ink when its intensity is above zero.

use std::path::Path;

use bitfont_core::{FontTable, Glyph, PixelMask};
use image::GrayImage;

use crate::descriptor::{Descriptor, Rect};
use crate::error::IngestError;

/// Load the glyph sheet image and flatten it to 8-bit luma.
pub fn load_sheet(path: &Path) -> Result<GrayImage, IngestError> {
    let sheet = image::open(path)?;
    Ok(sheet.to_luma8())
}

/// Cut a descriptor rect out of the sheet as an ink mask.
///
/// The rect must lie fully inside the sheet. The inversion flag never
/// participates here: packing always records observed ink.
pub fn extract_mask(sheet: &GrayImage, rect: Rect) -> Result<PixelMask, IngestError> {
    let (right, bottom) = (rect.x.checked_add(rect.w), rect.y.checked_add(rect.h));
    let inside = matches!((right, bottom), (Some(r), Some(b)) if r <= sheet.width() && b <= sheet.height());
    if !inside {
        return Err(IngestError::Descriptor(format!(
            "rect {} {} {} {} lies outside the {}x{} sheet",
            rect.x,
            rect.y,
            rect.w,
            rect.h,
            sheet.width(),
            sheet.height()
        )));
    }
    Ok(PixelMask::from_fn(rect.w, rect.h, |x, y| {
        sheet.get_pixel(rect.x + x, rect.y + y).0[0] > 0
    }))
}

/// Assemble the full font table for a descriptor against its sheet.
///
/// Walks the descriptor characters in document order; any extraction
/// failure aborts the whole build.
pub fn build_font(
    descriptor: &Descriptor,
    sheet: &GrayImage,
    inverted: bool,
) -> Result<FontTable, IngestError> {
    let mut font = FontTable::new(
        descriptor.family.clone(),
        descriptor.size,
        descriptor.height,
        descriptor.style.clone(),
        inverted,
    );
    for entry in &descriptor.chars {
        let mask = extract_mask(sheet, entry.rect)?;
        font.push(Glyph::new(
            entry.code,
            entry.width,
            entry.offset.x,
            entry.offset.y,
            &mask,
        ))?;
    }
    Ok(font)
}
