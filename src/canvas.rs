//! Page-drawing primitives – the toolkit every section renderer draws with.
//!
//! Coordinates are top-down: a [`Cursor`] measures y downward from the top
//! of the page and is converted to PDF's bottom-up space at draw time
//! (`actual_y = PAGE_HEIGHT - y`). Every primitive takes the position it
//! should draw at and returns the vertical height it consumed; advancing a
//! cursor is always the caller's job. Ops accumulate per physical page
//! (printpdf v0.8 ops-based API) and become `PdfPage`s on `save`.

use base64::{engine::general_purpose::STANDARD as BASE64_STD, Engine as _};
use printpdf::*;

use crate::error::LayoutError;
use crate::fonts::{split_paragraphs, wrap_text, FontId, FontMetrics};
use crate::model::TopSkill;

/// One spacing unit between blocks.
pub const SPACING: f32 = 10.0;
/// Top margin: content starts this far below the page's top edge.
pub const VERTICAL_EDGE_SPACING: f32 = 100.0;
/// Left/right margin.
pub const HORIZONTAL_EDGE_SPACING: f32 = 60.0;
/// X anchor of the right column on two-column pages.
pub const RIGHT_COLUMN_START: f32 = 295.0;

/// A4 in PDF points.
pub const PAGE_WIDTH: f32 = 595.28;
pub const PAGE_HEIGHT: f32 = 841.89;

/// Content width between the horizontal margins.
pub const INNER_PAGE_WIDTH: f32 = PAGE_WIDTH - 2.0 * HORIZONTAL_EDGE_SPACING;
/// Width of one column in a symmetric two-column layout.
pub const COLUMN_WIDTH: f32 = (PAGE_WIDTH - 3.0 * HORIZONTAL_EDGE_SPACING) / 2.0;

/// Default wrap budget for body text.
pub const DEFAULT_MAX_WIDTH: f32 = 240.0;

pub const TITLE_SIZE: f32 = 9.0;
pub const TEXT_SIZE: f32 = 8.0;

/// At most this many bars in the top-skills chart.
pub const MAX_TOP_SKILLS: usize = 10;
/// Years of experience that fill a bar completely.
const CHART_FULL_YEARS: f32 = 10.0;
pub const CHART_BAR_WIDTH: f32 = 175.0;
pub const CHART_BAR_HEIGHT: f32 = 6.0;

const PT_TO_MM: f32 = 0.352778;

/// A drawing position in top-down page space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub x: f32,
    pub y: f32,
}

impl Cursor {
    /// Top of the left column.
    pub fn left_column() -> Self {
        Self {
            x: HORIZONTAL_EDGE_SPACING,
            y: VERTICAL_EDGE_SPACING,
        }
    }

    /// Top of the right column.
    pub fn right_column() -> Self {
        Self {
            x: RIGHT_COLUMN_START,
            y: VERTICAL_EDGE_SPACING,
        }
    }

    /// Top-left of the full-width area.
    pub fn full_width() -> Self {
        Self::left_column()
    }

    /// The same position moved `dy` points down.
    pub fn down(self, dy: f32) -> Self {
        Self {
            y: self.y + dy,
            ..self
        }
    }

    /// The same position at a different x anchor.
    pub fn at_x(self, x: f32) -> Self {
        Self { x, ..self }
    }

    pub fn advance(&mut self, dy: f32) {
        self.y += dy;
    }
}

/// The uniform shape every labeled resume field reduces to before hitting
/// the text primitives. Empty strings behave like absent values.
#[derive(Debug, Clone, Default)]
pub struct FieldData {
    pub title: Option<String>,
    pub text: Option<String>,
    pub bullet_list: Option<Vec<String>>,
    pub needs_spacing: bool,
    pub center_text: bool,
}

impl FieldData {
    pub fn title_only(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

/// Options for [`Canvas::draw_text`].
#[derive(Debug, Clone, Copy)]
pub struct TextOptions {
    pub size: f32,
    pub font: FontId,
    pub max_width: f32,
    pub center: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            size: TEXT_SIZE,
            font: FontId::Regular,
            max_width: DEFAULT_MAX_WIDTH,
            center: false,
        }
    }
}

/// Start/end of a rule along one axis, top-down coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Span {
    pub start: f32,
    pub end: f32,
}

pub fn black() -> Color {
    rgb(0.0, 0.0, 0.0)
}

pub fn rgb(r: f32, g: f32, b: f32) -> Color {
    Color::Rgb(Rgb {
        r,
        g,
        b,
        icc_profile: None,
    })
}

/// The unfilled track behind a chart bar.
fn chart_track_color() -> Color {
    rgb(0.85, 0.85, 0.85)
}

/// The filled portion of a chart bar.
fn chart_fill_color() -> Color {
    rgb(0.25, 0.25, 0.25)
}

fn builtin(font: FontId) -> BuiltinFont {
    match font {
        FontId::Regular => BuiltinFont::Helvetica,
        FontId::Bold => BuiltinFont::HelveticaBold,
    }
}

fn line_point(x: f32, y: f32) -> LinePoint {
    LinePoint {
        p: Point { x: Pt(x), y: Pt(y) },
        bezier: false,
    }
}

/// Convert UTF-8 to raw Windows-1252 bytes wrapped in a `String`, so printpdf
/// writes them unchanged into the stream (builtin fonts use WinAnsiEncoding,
/// one byte per glyph). Without this the `•` bullet renders as three mojibake
/// glyphs.
fn to_winlatin(s: &str) -> String {
    let bytes: Vec<u8> = s
        .chars()
        .map(|c| match c {
            '\u{2022}' => 0x95, // bullet
            '\u{2013}' => 0x96, // en-dash
            '\u{2014}' => 0x97, // em-dash
            '\u{2018}' => 0x91, // left single quote
            '\u{2019}' => 0x92, // right single quote
            '\u{201C}' => 0x93, // left double quote
            '\u{201D}' => 0x94, // right double quote
            '\u{2026}' => 0x85, // ellipsis
            '\u{20AC}' => 0x80, // euro
            '\u{00A0}' => 0x20, // non-breaking space -> space
            c if (c as u32) < 256 => c as u8,
            _ => b'?',
        })
        .collect();
    // SAFETY: intentionally non-UTF-8 for the 0x80-0x9F range; printpdf
    // passes these bytes straight through, decoded by WinAnsiEncoding.
    #[allow(unsafe_code)]
    unsafe {
        String::from_utf8_unchecked(bytes)
    }
}

/// Parse a `data:<mime>;base64,<data>` URI into `(mime, bytes)`.
fn parse_data_uri(src: &str) -> Result<(String, Vec<u8>), LayoutError> {
    let rest = src
        .strip_prefix("data:")
        .ok_or_else(|| LayoutError::InvalidImage("not a data URI".to_string()))?;
    let comma = rest
        .find(',')
        .ok_or_else(|| LayoutError::InvalidImage("missing `,` in data URI".to_string()))?;
    let header = &rest[..comma];
    let mime = header.split(';').next().unwrap_or("").to_string();
    if !header.contains(";base64") {
        return Err(LayoutError::InvalidImage(
            "data URI is not base64-encoded".to_string(),
        ));
    }
    let bytes = BASE64_STD
        .decode(rest[comma + 1..].trim())
        .map_err(|e| LayoutError::InvalidImage(format!("base64 decode error: {e}")))?;
    Ok((mime, bytes))
}

/// Accumulates draw ops for the pages of one generated document.
///
/// Owns the underlying `PdfDocument` (needed for image XObject registration)
/// and the font metrics used for wrapping and centering. Nothing can be
/// drawn until [`Canvas::add_page`] creates the first drawing target.
pub struct Canvas {
    doc: PdfDocument,
    pages: Vec<Vec<Op>>,
    metrics: FontMetrics,
}

impl Canvas {
    pub fn new(title: &str) -> Self {
        Self::with_metrics(title, FontMetrics::new())
    }

    pub fn with_metrics(title: &str, metrics: FontMetrics) -> Self {
        Self {
            doc: PdfDocument::new(title),
            pages: Vec::new(),
            metrics,
        }
    }

    /// Open a new physical page; subsequent draws target it.
    pub fn add_page(&mut self) {
        self.pages.push(Vec::new());
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Op stream of one page, for inspection in tests.
    pub fn page_ops(&self, index: usize) -> &[Op] {
        &self.pages[index]
    }

    pub fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    fn ensure_page(&self) -> Result<(), LayoutError> {
        if self.pages.is_empty() {
            return Err(LayoutError::NoActivePage);
        }
        Ok(())
    }

    fn ops(&mut self) -> Result<&mut Vec<Op>, LayoutError> {
        self.pages.last_mut().ok_or(LayoutError::NoActivePage)
    }

    fn write_line(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        font: FontId,
    ) -> Result<(), LayoutError> {
        let font = builtin(font);
        let encoded = to_winlatin(text);
        let ops = self.ops()?;
        ops.push(Op::StartTextSection);
        ops.push(Op::SetTextCursor {
            pos: Point {
                x: Pt(x),
                y: Pt(PAGE_HEIGHT - y),
            },
        });
        ops.push(Op::SetFontSizeBuiltinFont {
            size: Pt(size),
            font,
        });
        ops.push(Op::SetFillColor { col: black() });
        ops.push(Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(encoded)],
            font,
        });
        ops.push(Op::EndTextSection);
        Ok(())
    }

    /// Draw wrapped text at `at` and return the height consumed.
    ///
    /// Paragraph and wrapping rules per [`split_paragraphs`] and
    /// [`wrap_text`]; each blank-line run credits one extra line height up
    /// front, and the pen skips one line height between paragraphs. With
    /// `center`, each wrapped line is centered within `max_width`.
    pub fn draw_text(
        &mut self,
        text: &str,
        at: Cursor,
        opts: &TextOptions,
    ) -> Result<f32, LayoutError> {
        self.ensure_page()?;

        let lh = self.metrics.line_height(opts.size);
        let (paragraphs, blank_runs) = split_paragraphs(text);
        let mut height = blank_runs as f32 * lh;
        let mut pen_y = at.y;

        let count = paragraphs.len();
        for (index, paragraph) in paragraphs.iter().enumerate() {
            let lines = wrap_text(paragraph, opts.size, opts.font, opts.max_width, &self.metrics);
            for line in &lines {
                let x = if opts.center {
                    let line_width = self.metrics.measure(line, opts.size, opts.font);
                    at.x + (opts.max_width - line_width) / 2.0
                } else {
                    at.x
                };
                self.write_line(line, x, pen_y, opts.size, opts.font)?;
                pen_y += lh;
                height += lh;
            }
            if index + 1 < count {
                pen_y += lh;
            }
        }

        Ok(height)
    }

    /// Draw a bulleted list. The bullet glyph prefixes only the first wrapped
    /// line of an item; continuation lines are indented to align under the
    /// item text. Empty items are skipped entirely.
    pub fn draw_bulleted_list(
        &mut self,
        items: &[String],
        at: Cursor,
        size: f32,
        font: FontId,
    ) -> Result<f32, LayoutError> {
        self.ensure_page()?;

        const BULLET: &str = "\u{2022} ";
        let lh = self.metrics.line_height(size);
        let indent = self.metrics.measure(BULLET, size, font);
        let mut height = 0.0;
        let mut pen_y = at.y;

        for item in items {
            if item.is_empty() {
                continue;
            }

            let (paragraphs, blank_runs) = split_paragraphs(item);
            height += blank_runs as f32 * lh;
            let count = paragraphs.len();
            for (index, paragraph) in paragraphs.iter().enumerate() {
                let lines = wrap_text(paragraph, size, font, DEFAULT_MAX_WIDTH, &self.metrics);
                for (line_index, line) in lines.iter().enumerate() {
                    if line_index == 0 {
                        self.write_line(&format!("{BULLET}{line}"), at.x, pen_y, size, font)?;
                    } else {
                        self.write_line(line, at.x + indent, pen_y, size, font)?;
                    }
                    pen_y += lh;
                    height += lh;
                }
                if index + 1 < count {
                    pen_y += lh;
                    height += lh;
                }
            }
        }

        Ok(height)
    }

    /// Draw a rule between two points, top-down coordinates. Returns the
    /// thickness plus one spacing unit as the height to advance by.
    pub fn draw_rule(
        &mut self,
        horizontal: Span,
        vertical: Span,
        thickness: f32,
        color: Color,
    ) -> Result<f32, LayoutError> {
        let ops = self.ops()?;
        ops.push(Op::SetOutlineThickness { pt: Pt(thickness) });
        ops.push(Op::SetOutlineColor { col: color });
        ops.push(Op::DrawLine {
            line: Line {
                points: vec![
                    line_point(horizontal.start, PAGE_HEIGHT - vertical.start),
                    line_point(horizontal.end, PAGE_HEIGHT - vertical.end),
                ],
                is_closed: false,
            },
        });
        Ok(thickness + SPACING)
    }

    /// Draw a filled rectangle with its top-left corner at `(x, y)` in
    /// top-down coordinates. Returns `height`.
    pub fn draw_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    ) -> Result<f32, LayoutError> {
        let top = PAGE_HEIGHT - y;
        let bottom = top - height;
        let ops = self.ops()?;
        ops.push(Op::SetFillColor { col: color });
        ops.push(Op::DrawPolygon {
            polygon: Polygon {
                rings: vec![PolygonRing {
                    points: vec![
                        line_point(x, bottom),
                        line_point(x + width, bottom),
                        line_point(x + width, top),
                        line_point(x, top),
                    ],
                }],
                mode: PaintMode::Fill,
                winding_order: WindingOrder::NonZero,
            },
        });
        Ok(height)
    }

    /// Embed a data-URI image (JPEG or PNG only) and place it at `at`.
    /// Returns the image height plus two spacing units.
    pub fn draw_image(
        &mut self,
        src: &str,
        at: Cursor,
        width: f32,
        height: f32,
    ) -> Result<f32, LayoutError> {
        self.ensure_page()?;

        let (mime, bytes) = parse_data_uri(src)?;
        match mime.as_str() {
            "image/jpeg" | "image/jpg" | "image/png" => {}
            other => return Err(LayoutError::UnsupportedImage(other.to_string())),
        }

        // Probe pixel dimensions; at dpi=72 printpdf maps 1 px to 1 pt, so
        // scale = desired_pt / px_dim.
        let decoded = ::image::load_from_memory(&bytes)
            .map_err(|e| LayoutError::InvalidImage(e.to_string()))?;
        let (px_width, px_height) = (decoded.width(), decoded.height());

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let raw = RawImage::decode_from_bytes(&bytes, &mut warnings)
            .map_err(|e| LayoutError::InvalidImage(e.to_string()))?;
        let xobj_id = self.doc.add_image(&raw);

        let scale_x = if px_width > 0 {
            width / px_width as f32
        } else {
            1.0
        };
        let scale_y = if px_height > 0 {
            height / px_height as f32
        } else {
            1.0
        };

        let translate_y = PAGE_HEIGHT - at.y - height;
        self.ops()?.push(Op::UseXobject {
            id: xobj_id,
            transform: XObjectTransform {
                translate_x: Some(Pt(at.x)),
                translate_y: Some(Pt(translate_y)),
                dpi: Some(72.0),
                scale_x: Some(scale_x),
                scale_y: Some(scale_y),
                rotate: None,
            },
        });

        Ok(height + 2.0 * SPACING)
    }

    /// Compose a labeled field: optional leading spacing, bold title, body
    /// text, bullet list. Returns the total height consumed.
    pub fn draw_field(&mut self, field: &FieldData, at: Cursor) -> Result<f32, LayoutError> {
        self.ensure_page()?;

        let mut height = 0.0;
        if field.needs_spacing {
            height += SPACING;
        }
        if let Some(title) = field.title.as_deref().filter(|t| !t.is_empty()) {
            height += self.draw_text(
                title,
                at.down(height),
                &TextOptions {
                    size: TITLE_SIZE,
                    font: FontId::Bold,
                    center: field.center_text,
                    ..TextOptions::default()
                },
            )?;
        }
        if let Some(text) = field.text.as_deref().filter(|t| !t.is_empty()) {
            height += self.draw_text(
                text,
                at.down(height),
                &TextOptions {
                    center: field.center_text,
                    ..TextOptions::default()
                },
            )?;
        }
        if let Some(items) = &field.bullet_list {
            height += self.draw_bulleted_list(items, at.down(height), TEXT_SIZE, FontId::Regular)?;
        }
        Ok(height)
    }

    /// A bold title with a rule under it, ending `right_inset` points from
    /// the page's right edge.
    pub fn draw_underlined_title(
        &mut self,
        title: &str,
        at: Cursor,
        right_inset: f32,
    ) -> Result<f32, LayoutError> {
        let mut height = self.draw_field(&FieldData::title_only(title), at)?;
        let rule_y = at.y + height;
        height += self.draw_rule(
            Span {
                start: at.x,
                end: PAGE_WIDTH - right_inset,
            },
            Span {
                start: rule_y,
                end: rule_y,
            },
            1.0,
            black(),
        )?;
        Ok(height)
    }

    /// Horizontal bar chart for the top skills: a fixed-width track, a fill
    /// proportional to `min(years / 10, 1)`, and the skill name below each
    /// bar. Entries without a name or with zero experience are skipped and
    /// do not count toward the cap of [`MAX_TOP_SKILLS`] bars.
    pub fn draw_skills_chart(
        &mut self,
        skills: &[TopSkill],
        at: Cursor,
        size: f32,
    ) -> Result<f32, LayoutError> {
        self.ensure_page()?;

        let mut height = 0.0;
        let shown = skills
            .iter()
            .filter(|s| !s.name.is_empty() && s.years_of_experience > 0)
            .take(MAX_TOP_SKILLS);

        for skill in shown {
            let ratio = (skill.years_of_experience as f32 / CHART_FULL_YEARS).min(1.0);
            self.draw_rect(
                at.x,
                at.y + height,
                CHART_BAR_WIDTH,
                CHART_BAR_HEIGHT,
                chart_track_color(),
            )?;
            self.draw_rect(
                at.x,
                at.y + height,
                CHART_BAR_WIDTH * ratio,
                CHART_BAR_HEIGHT,
                chart_fill_color(),
            )?;
            height += CHART_BAR_HEIGHT;
            height += self.draw_text(
                &skill.name,
                at.down(height),
                &TextOptions {
                    size,
                    ..TextOptions::default()
                },
            )?;
            height += SPACING;
        }

        Ok(height)
    }

    /// Assemble all pages and serialize the document to PDF bytes. An empty
    /// document gets one blank page so the output is always a readable PDF.
    pub fn save(self) -> Vec<u8> {
        let page_w = Mm(PAGE_WIDTH * PT_TO_MM);
        let page_h = Mm(PAGE_HEIGHT * PT_TO_MM);

        let mut pages: Vec<PdfPage> = self
            .pages
            .into_iter()
            .map(|ops| PdfPage::new(page_w, page_h, ops))
            .collect();
        if pages.is_empty() {
            pages.push(PdfPage::new(page_w, page_h, Vec::new()));
        }

        let mut doc = self.doc;
        doc.with_pages(pages);
        doc.save(&PdfSaveOptions::default(), &mut Vec::new())
    }
}
