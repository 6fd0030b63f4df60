//! Font resources for the PDF renderer.
//!
//! Two tiers: a TrueType face loaded from disk and embedded as a CID font
//! (required for Arabic presentation forms), and the built-in Helvetica
//! Type1 font used for Latin text and as the silent fallback whenever the
//! embedded face is missing or cannot encode a line.

use log::warn;
use std::path::Path;
use ttf_parser::Face;

/// Widths of the built-in Helvetica glyphs for ASCII 32..=126, in
/// thousandths of an em (Adobe AFM metrics).
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333,
    278, 278, 556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278,
    584, 584, 584, 556, 1015, 667, 667, 722, 722, 667, 611, 778, 722, 278,
    500, 667, 556, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 278, 278, 278, 469, 556, 333, 556, 556, 500, 556, 556,
    278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, 556, 333, 500,
    278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

const HELVETICA_DEFAULT_WIDTH: u16 = 556;

/// Map text to WinAnsi-encoded bytes for the built-in font. Characters
/// outside Latin-1 have no WinAnsi slot and degrade to '?'.
pub fn to_winansi_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if (c as u32) <= 0xFF { c as u8 } else { b'?' })
        .collect()
}

/// Advance width of `text` drawn with built-in Helvetica at `size` points
pub fn builtin_text_width(text: &str, size: f32) -> f32 {
    let units: u32 = text
        .chars()
        .map(|c| {
            let code = c as u32;
            if (32..=126).contains(&code) {
                HELVETICA_WIDTHS[(code - 32) as usize] as u32
            } else {
                HELVETICA_DEFAULT_WIDTH as u32
            }
        })
        .sum();
    units as f32 * size / 1000.0
}

/// A line encoded for the embedded font: big-endian glyph ids plus the
/// per-glyph widths needed for the PDF widths array.
pub struct EncodedRun {
    /// Glyph ids as the 2-byte big-endian string shown in the content stream
    pub bytes: Vec<u8>,
    /// Advance width in points at the requested size
    pub width: f32,
    /// (glyph id, width in thousandths of an em) for each glyph
    pub glyph_widths: Vec<(u16, f32)>,
}

/// A TrueType font read from disk, kept as raw bytes and re-parsed on
/// demand (ttf-parser faces borrow the underlying buffer).
pub struct EmbeddedFont {
    data: Vec<u8>,
    units_per_em: u16,
    ascent: i16,
    descent: i16,
    cap_height: i16,
    bbox: [f32; 4],
    postscript_name: String,
}

impl EmbeddedFont {
    /// Load and validate a TrueType font. Returns `None` (with a warning)
    /// when the file is missing or not a parsable face; callers degrade to
    /// the built-in font.
    pub fn load(path: &Path) -> Option<EmbeddedFont> {
        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(err) => {
                warn!("Font {} unavailable: {}", path.display(), err);
                return None;
            }
        };

        let (units_per_em, ascent, descent, cap_height, bbox, postscript_name) = {
            let face = match Face::parse(&data, 0) {
                Ok(face) => face,
                Err(err) => {
                    warn!("Font {} is not a valid TrueType face: {}", path.display(), err);
                    return None;
                }
            };

            let rect = face.global_bounding_box();
            let scale = 1000.0 / face.units_per_em() as f32;
            let bbox = [
                rect.x_min as f32 * scale,
                rect.y_min as f32 * scale,
                rect.x_max as f32 * scale,
                rect.y_max as f32 * scale,
            ];
            let postscript_name = face
                .names()
                .into_iter()
                .find(|name| {
                    name.name_id == ttf_parser::name_id::POST_SCRIPT_NAME && name.is_unicode()
                })
                .and_then(|name| name.to_string())
                .unwrap_or_else(|| "EmbeddedFont".to_string());

            (
                face.units_per_em(),
                face.ascender(),
                face.descender(),
                face.capital_height().unwrap_or(face.ascender()),
                bbox,
                postscript_name,
            )
        };

        Some(EmbeddedFont {
            data,
            units_per_em,
            ascent,
            descent,
            cap_height,
            bbox,
            postscript_name,
        })
    }

    /// Encode a (visual-order) line as glyph ids at `size` points.
    /// Returns `None` when any character has no glyph in the face; the
    /// caller then falls back to the built-in font for the whole line.
    pub fn encode(&self, text: &str, size: f32) -> Option<EncodedRun> {
        let face = Face::parse(&self.data, 0).ok()?;
        let upem = self.units_per_em as f32;

        let mut bytes = Vec::with_capacity(text.len() * 2);
        let mut glyph_widths = Vec::new();
        let mut total_units = 0.0f32;

        for c in text.chars() {
            let glyph = face.glyph_index(c)?;
            let advance = face.glyph_hor_advance(glyph).unwrap_or(0) as f32;
            bytes.extend_from_slice(&glyph.0.to_be_bytes());
            glyph_widths.push((glyph.0, advance * 1000.0 / upem));
            total_units += advance;
        }

        Some(EncodedRun {
            bytes,
            width: total_units * size / upem,
            glyph_widths,
        })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn postscript_name(&self) -> &str {
        &self.postscript_name
    }

    /// Font descriptor metrics scaled to thousandths of an em
    pub fn metrics(&self) -> FontMetrics {
        let scale = 1000.0 / self.units_per_em as f32;
        FontMetrics {
            ascent: self.ascent as f32 * scale,
            descent: self.descent as f32 * scale,
            cap_height: self.cap_height as f32 * scale,
            bbox: self.bbox,
        }
    }
}

pub struct FontMetrics {
    pub ascent: f32,
    pub descent: f32,
    pub cap_height: f32,
    pub bbox: [f32; 4],
}
