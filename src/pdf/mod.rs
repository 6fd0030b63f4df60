//! Paginated PDF renderer for free-form recipe text.
//!
//! Every line is drawn at a fixed vertical step on A4 pages: French text
//! is anchored to the left margin, Arabic text is shaped (presentation
//! forms + bidi reordering) and anchored to the right margin. The renderer
//! is best-effort by contract: a missing or unusable Arabic font degrades
//! to unshaped text in the built-in Latin font, never to a failure.

mod fonts;
mod layout;
mod shaping;

pub use fonts::EmbeddedFont;
pub use layout::{
    lines_per_page, paginate, Page, PlacedLine, BOTTOM_MARGIN, FONT_SIZE, LINE_STEP, PAGE_HEIGHT,
    PAGE_WIDTH, SIDE_MARGIN, TOP_OFFSET,
};
pub use shaping::Shaper;

use crate::config::PdfConfig;
use crate::locale::Direction;
use fonts::{builtin_text_width, to_winansi_bytes};
use log::{debug, warn};
use pdf_writer::types::{CidFontType, FontFlags, SystemInfo};
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::collections::BTreeMap;
use std::path::Path;

/// PDF resource names for the two fonts a page may reference
const BUILTIN_FONT: Name = Name(b"F1");
const EMBEDDED_FONT: Name = Name(b"F2");

/// One line resolved to concrete draw parameters
enum DrawCmd {
    /// WinAnsi bytes shown with the built-in Helvetica
    Builtin { bytes: Vec<u8>, x: f32, y: f32 },
    /// Glyph-id bytes shown with the embedded face
    Embedded { bytes: Vec<u8>, x: f32, y: f32 },
}

/// Renders recipe text into PDF byte buffers.
///
/// Holds the optional Arabic face and the shaper so repeated renders reuse
/// them; all per-render layout state lives inside [`Renderer::render`].
pub struct Renderer {
    arabic_font: Option<EmbeddedFont>,
    shaper: Shaper,
}

impl Renderer {
    /// Set up a renderer, attempting to load the configured Arabic font.
    /// A missing font is not an error; RTL renders will degrade.
    pub fn new(config: &PdfConfig) -> Renderer {
        let arabic_font = EmbeddedFont::load(Path::new(&config.arabic_font));
        if arabic_font.is_none() {
            warn!(
                "Arabic font '{}' not loaded; right-to-left output will use the built-in font",
                config.arabic_font
            );
        }
        Renderer {
            arabic_font,
            shaper: Shaper::new(),
        }
    }

    /// Renderer without any embedded font; always draws with the built-in
    /// Helvetica. Used in tests and as the degraded path.
    pub fn builtin_only() -> Renderer {
        Renderer {
            arabic_font: None,
            shaper: Shaper::new(),
        }
    }

    /// Lay `text` out over A4 pages and serialize the document.
    ///
    /// Never fails: every degradation path still yields a valid PDF.
    pub fn render(&self, text: &str, direction: Direction) -> Vec<u8> {
        let pages = paginate(text.split('\n'));
        debug!("Rendering {} page(s)", pages.len());

        // Resolve each line to draw commands first so the set of used
        // glyphs is known before any font object is written.
        let mut used_glyphs: BTreeMap<u16, f32> = BTreeMap::new();
        let mut page_cmds: Vec<Vec<DrawCmd>> = Vec::with_capacity(pages.len());

        for page in &pages {
            let mut cmds = Vec::with_capacity(page.len());
            for line in page {
                if line.text.is_empty() {
                    continue;
                }
                cmds.push(self.resolve_line(line, direction, &mut used_glyphs));
            }
            page_cmds.push(cmds);
        }

        self.serialize(&page_cmds, &used_glyphs)
    }

    fn resolve_line(
        &self,
        line: &PlacedLine,
        direction: Direction,
        used_glyphs: &mut BTreeMap<u16, f32>,
    ) -> DrawCmd {
        match direction {
            Direction::LeftToRight => DrawCmd::Builtin {
                bytes: to_winansi_bytes(&line.text),
                x: SIDE_MARGIN,
                y: line.y,
            },
            Direction::RightToLeft => {
                if let Some(font) = &self.arabic_font {
                    let shaped = self.shaper.shape(&line.text);
                    if let Some(run) = font.encode(&shaped, FONT_SIZE) {
                        for (glyph, width) in &run.glyph_widths {
                            used_glyphs.insert(*glyph, *width);
                        }
                        return DrawCmd::Embedded {
                            bytes: run.bytes,
                            x: PAGE_WIDTH - SIDE_MARGIN - run.width,
                            y: line.y,
                        };
                    }
                    debug!("Line not encodable with embedded font, using fallback");
                }
                // Degraded path: raw unshaped text, still right-anchored
                let width = builtin_text_width(&line.text, FONT_SIZE);
                DrawCmd::Builtin {
                    bytes: to_winansi_bytes(&line.text),
                    x: PAGE_WIDTH - SIDE_MARGIN - width,
                    y: line.y,
                }
            }
        }
    }

    fn serialize(&self, page_cmds: &[Vec<DrawCmd>], used_glyphs: &BTreeMap<u16, f32>) -> Vec<u8> {
        let mut pdf = Pdf::new();
        let mut next_id = 1;
        let mut alloc = || {
            let r = Ref::new(next_id);
            next_id += 1;
            r
        };

        let catalog_id = alloc();
        let page_tree_id = alloc();
        let builtin_font_id = alloc();

        pdf.catalog(catalog_id).pages(page_tree_id);
        pdf.type1_font(builtin_font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        // The embedded face is only written when some line actually used it
        let embeds_font = !used_glyphs.is_empty();
        let embedded_font_id = if embeds_font {
            match &self.arabic_font {
                Some(font) => Some(self.write_embedded_font(&mut pdf, &mut alloc, font, used_glyphs)),
                None => None,
            }
        } else {
            None
        };

        let page_ids: Vec<Ref> = page_cmds.iter().map(|_| alloc()).collect();
        let content_ids: Vec<Ref> = page_cmds.iter().map(|_| alloc()).collect();

        for (i, cmds) in page_cmds.iter().enumerate() {
            let mut page = pdf.page(page_ids[i]);
            page.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT));
            page.parent(page_tree_id);
            page.contents(content_ids[i]);
            {
                let mut resources = page.resources();
                let mut font_dict = resources.fonts();
                font_dict.pair(BUILTIN_FONT, builtin_font_id);
                if let Some(id) = embedded_font_id {
                    font_dict.pair(EMBEDDED_FONT, id);
                }
            }
            drop(page);

            // The active font is re-asserted on every page: resources and
            // graphics state are page-scoped in PDF.
            let mut content = Content::new();
            content.begin_text();
            for cmd in cmds {
                match cmd {
                    DrawCmd::Builtin { bytes, x, y } => {
                        content.set_font(BUILTIN_FONT, FONT_SIZE);
                        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, *x, *y]);
                        content.show(Str(bytes.as_slice()));
                    }
                    DrawCmd::Embedded { bytes, x, y } => {
                        content.set_font(EMBEDDED_FONT, FONT_SIZE);
                        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, *x, *y]);
                        content.show(Str(bytes.as_slice()));
                    }
                }
            }
            content.end_text();
            pdf.stream(content_ids[i], &content.finish());
        }

        pdf.pages(page_tree_id)
            .kids(page_ids.iter().copied())
            .count(page_cmds.len() as i32);

        pdf.finish()
    }

    /// Write the Type0/CIDFontType2 object chain for the embedded face.
    /// Identity-H encoding, so CIDs are glyph ids.
    fn write_embedded_font(
        &self,
        pdf: &mut Pdf,
        alloc: &mut dyn FnMut() -> Ref,
        font: &EmbeddedFont,
        used_glyphs: &BTreeMap<u16, f32>,
    ) -> Ref {
        let type0_id = alloc();
        let cid_id = alloc();
        let descriptor_id = alloc();
        let data_id = alloc();

        let base_name = font.postscript_name().to_string();
        let metrics = font.metrics();

        pdf.type0_font(type0_id)
            .base_font(Name(base_name.as_bytes()))
            .encoding_predefined(Name(b"Identity-H"))
            .descendant_font(cid_id);

        {
            let mut cid = pdf.cid_font(cid_id);
            cid.subtype(CidFontType::Type2)
                .base_font(Name(base_name.as_bytes()))
                .system_info(SystemInfo {
                    registry: Str(b"Adobe"),
                    ordering: Str(b"Identity"),
                    supplement: 0,
                })
                .font_descriptor(descriptor_id)
                .default_width(600.0);
            {
                let mut widths = cid.widths();
                for (glyph, width) in used_glyphs {
                    widths.consecutive(*glyph, [*width]);
                }
            }
            cid.cid_to_gid_map_predefined(Name(b"Identity"));
        }

        pdf.font_descriptor(descriptor_id)
            .name(Name(base_name.as_bytes()))
            .flags(FontFlags::SYMBOLIC)
            .bbox(Rect::new(
                metrics.bbox[0],
                metrics.bbox[1],
                metrics.bbox[2],
                metrics.bbox[3],
            ))
            .italic_angle(0.0)
            .ascent(metrics.ascent)
            .descent(metrics.descent)
            .cap_height(metrics.cap_height)
            .stem_v(80.0)
            .font_file2(data_id);

        // Length1 carries the uncompressed TrueType byte count; readers
        // need it to parse a FontFile2 stream.
        pdf.stream(data_id, font.data())
            .pair(Name(b"Length1"), font.data().len() as i32);

        type0_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_occurrences(haystack: &[u8], needle: &[u8]) -> usize {
        haystack
            .windows(needle.len())
            .filter(|window| *window == needle)
            .count()
    }

    #[test]
    fn test_render_produces_pdf_header() {
        let renderer = Renderer::builtin_only();
        let bytes = renderer.render("a\nb\nc", Direction::LeftToRight);
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_three_lines_one_page() {
        let renderer = Renderer::builtin_only();
        let bytes = renderer.render("a\nb\nc", Direction::LeftToRight);
        assert_eq!(count_occurrences(&bytes, b"MediaBox"), 1);
    }

    #[test]
    fn test_forty_lines_two_pages() {
        let renderer = Renderer::builtin_only();
        let lines: Vec<String> = (0..40).map(|i| format!("line {}", i)).collect();
        let bytes = renderer.render(&lines.join("\n"), Direction::LeftToRight);
        assert_eq!(count_occurrences(&bytes, b"MediaBox"), 2);
    }

    #[test]
    fn test_rtl_without_font_still_renders() {
        // Simulates the unavailable shaping resource: render must succeed
        // and anchor unshaped text to the right margin.
        let renderer = Renderer::builtin_only();
        let bytes = renderer.render("مرحبا\nبالعالم", Direction::RightToLeft);
        assert!(bytes.starts_with(b"%PDF-"));
        assert_eq!(count_occurrences(&bytes, b"MediaBox"), 1);
    }

    #[test]
    fn test_rtl_lines_are_right_anchored() {
        let renderer = Renderer::builtin_only();
        let line = PlacedLine {
            text: "abc".to_string(),
            y: 700.0,
        };
        let mut used = BTreeMap::new();
        match renderer.resolve_line(&line, Direction::RightToLeft, &mut used) {
            DrawCmd::Builtin { x, y, .. } => {
                let width = builtin_text_width("abc", FONT_SIZE);
                assert!((x - (PAGE_WIDTH - SIDE_MARGIN - width)).abs() < 0.01);
                assert!(x < PAGE_WIDTH - SIDE_MARGIN);
                assert_eq!(y, 700.0);
            }
            DrawCmd::Embedded { .. } => panic!("no embedded font configured"),
        }
    }

    #[test]
    fn test_ltr_lines_are_left_anchored() {
        let renderer = Renderer::builtin_only();
        let line = PlacedLine {
            text: "abc".to_string(),
            y: 792.0,
        };
        let mut used = BTreeMap::new();
        match renderer.resolve_line(&line, Direction::LeftToRight, &mut used) {
            DrawCmd::Builtin { x, .. } => assert_eq!(x, SIDE_MARGIN),
            DrawCmd::Embedded { .. } => panic!("no embedded font configured"),
        }
    }

    #[test]
    fn test_embedded_font_stream_declares_length1() {
        let path = Path::new("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf");
        let font = match EmbeddedFont::load(path) {
            Some(font) => font,
            None => return, // host ships no face to embed
        };

        let renderer = Renderer::builtin_only();
        let mut pdf = Pdf::new();
        let mut next_id = 1;
        let mut alloc = || {
            let r = Ref::new(next_id);
            next_id += 1;
            r
        };
        let mut used = BTreeMap::new();
        used.insert(4u16, 600.0);

        renderer.write_embedded_font(&mut pdf, &mut alloc, &font, &used);
        let bytes = pdf.finish();
        assert!(count_occurrences(&bytes, b"FontFile2") >= 1);
        assert!(count_occurrences(&bytes, b"Length1") >= 1);
    }

    #[test]
    fn test_empty_text_single_page() {
        let renderer = Renderer::builtin_only();
        let bytes = renderer.render("", Direction::LeftToRight);
        assert!(bytes.starts_with(b"%PDF-"));
        assert_eq!(count_occurrences(&bytes, b"MediaBox"), 1);
    }
}
