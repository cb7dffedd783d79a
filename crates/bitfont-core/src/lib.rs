//! Packed bitmap font tables for embedded rendering.
//!
//! This crate is the core of the bitfont pipeline: it turns monochrome
//! glyph masks into 1-bit-per-pixel packed pixmaps, binds them to glyph
//! metrics, collects them into a font table, and renders the table as C
//! source/header artifacts for the bitfont runtime.
//!
//! # Encoding
//!
//! Pixels are scanned in raster order and packed eight per byte, least
//! significant bit first; the final partial byte keeps its unused high
//! bits zero. A set bit means "ink observed" — the font-level inversion
//! flag is metadata for the renderer and never changes the packed bytes.
//!
//! # Example
//!
//! ```
//! use bitfont_core::{emit, FontTable, Glyph, PixelMask};
//!
//! let mask = PixelMask::from_fn(2, 2, |x, y| x == y);
//! let mut font = FontTable::new("Demo", 8, 10, "Regular", false);
//! font.push(Glyph::new('A', 3, 0, 0, &mask)).unwrap();
//!
//! let artifacts = emit::emit(&font);
//! assert!(artifacts.source.contains("const bitfont_t font_demo_8_regular"));
//! ```

pub mod emit;
pub mod error;
pub mod font;
pub mod glyph;
pub mod pixmap;

// Re-export main types for convenience
pub use emit::{escape_char, Artifacts};
pub use error::FontError;
pub use font::FontTable;
pub use glyph::Glyph;
pub use pixmap::{PackedPixmap, PixelMask, Preview, BLANK_CHAR, INK_CHAR};
