//! Fixed-grid line layout over A4 pages.
//!
//! The renderer draws every line at a constant vertical step; this module
//! computes which line lands on which page and at which baseline, without
//! touching any PDF machinery, so the pagination rules stay testable on
//! their own.

// Standard PDF page size in points (1/72 inch).
pub const PAGE_WIDTH: f32 = 595.0;
pub const PAGE_HEIGHT: f32 = 842.0;

/// First baseline sits this far below the top edge.
pub const TOP_OFFSET: f32 = 50.0;
/// A page break happens once the cursor would cross this bottom margin.
pub const BOTTOM_MARGIN: f32 = 40.0;
/// Horizontal distance from the anchoring edge.
pub const SIDE_MARGIN: f32 = 40.0;
/// Vertical distance between consecutive baselines.
pub const LINE_STEP: f32 = 22.0;
/// Text size used for every line.
pub const FONT_SIZE: f32 = 14.0;

/// One line of text with its resolved baseline position
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub y: f32,
}

pub type Page = Vec<PlacedLine>;

/// Distribute lines over pages.
///
/// The cursor starts at `PAGE_HEIGHT - TOP_OFFSET` and advances by
/// `LINE_STEP` after each line; when it would fall below `BOTTOM_MARGIN`
/// the current page is closed and the cursor resets. Always produces at
/// least one page.
pub fn paginate<'a, I>(lines: I) -> Vec<Page>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut pages: Vec<Page> = Vec::new();
    let mut current = Page::new();
    let mut y = PAGE_HEIGHT - TOP_OFFSET;

    for line in lines {
        current.push(PlacedLine {
            text: line.to_string(),
            y,
        });
        y -= LINE_STEP;
        if y < BOTTOM_MARGIN {
            pages.push(std::mem::take(&mut current));
            y = PAGE_HEIGHT - TOP_OFFSET;
        }
    }

    if !current.is_empty() || pages.is_empty() {
        pages.push(current);
    }
    pages
}

/// Number of lines that fit on one page with the fixed grid
pub fn lines_per_page() -> usize {
    let usable = PAGE_HEIGHT - TOP_OFFSET - BOTTOM_MARGIN;
    (usable / LINE_STEP) as usize + 1
}
