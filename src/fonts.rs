//! Text measurement and word-wrapping using `ttf-parser`.
//!
//! The engine draws with the builtin Helvetica pair, for which no font bytes
//! exist, so measurement falls back to an average-advance heuristic. When a
//! real TTF/OTF face is loaded for a slot, glyph advances are summed instead.

/// Factor applied to the font size to obtain the line height.
pub const LINE_HEIGHT_FACTOR: f32 = 1.6;

/// The two font slots every renderer draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontId {
    Regular,
    Bold,
}

/// A loaded font face. Bytes are kept alive for ttf-parser's zero-copy API.
#[derive(Clone)]
struct FaceData {
    bytes: Vec<u8>,
    units_per_em: f32,
}

/// Measures text for the regular/bold pair.
///
/// With no faces loaded, widths use a Helvetica-like heuristic: average
/// advance ≈ 0.5 × size per char, bold ~10 % wider. This keeps layout
/// deterministic without shipping font assets.
#[derive(Clone, Default)]
pub struct FontMetrics {
    regular: Option<FaceData>,
    bold: Option<FaceData>,
}

impl FontMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a TTF/OTF face into one of the two slots.
    pub fn load_font(&mut self, id: FontId, bytes: Vec<u8>) -> Result<(), String> {
        let face = ttf_parser::Face::parse(&bytes, 0)
            .map_err(|e| format!("failed to parse font: {e}"))?;
        let data = FaceData {
            units_per_em: face.units_per_em() as f32,
            bytes,
        };
        match id {
            FontId::Regular => self.regular = Some(data),
            FontId::Bold => self.bold = Some(data),
        }
        Ok(())
    }

    /// Measure the width of a string at a given size, in points.
    pub fn measure(&self, text: &str, size: f32, id: FontId) -> f32 {
        let slot = match id {
            FontId::Regular => &self.regular,
            FontId::Bold => &self.bold,
        };

        let Some(data) = slot else {
            let avg = match id {
                FontId::Regular => 0.5,
                FontId::Bold => 0.55,
            };
            return text.chars().count() as f32 * size * avg;
        };

        match ttf_parser::Face::parse(&data.bytes, 0) {
            Ok(face) => {
                let scale = size / data.units_per_em;
                text.chars()
                    .map(|ch| match face.glyph_index(ch) {
                        Some(gid) => face.glyph_hor_advance(gid).unwrap_or(0) as f32 * scale,
                        None => size * 0.5,
                    })
                    .sum()
            }
            Err(_) => text.chars().count() as f32 * size * 0.5,
        }
    }

    /// Line height for a font size.
    pub fn line_height(&self, size: f32) -> f32 {
        size * LINE_HEIGHT_FACTOR
    }
}

/// Split `text` into paragraphs on blank-line boundaries.
///
/// A run of two or more newlines is one paragraph break regardless of length.
/// The second value is the number of such runs; each credits one extra line
/// height of vertical space up front (see `Canvas::draw_text`). Lone newlines
/// inside a paragraph become spaces.
pub fn split_paragraphs(text: &str) -> (Vec<String>, usize) {
    let normalized = text.replace("\r\n", "\n");

    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut breaks = 0usize;
    let mut newline_run = 0usize;

    for ch in normalized.chars() {
        if ch == '\n' {
            newline_run += 1;
            continue;
        }
        if newline_run >= 2 {
            paragraphs.push(std::mem::take(&mut current));
            breaks += 1;
        } else if newline_run == 1 {
            current.push(' ');
        }
        newline_run = 0;
        current.push(ch);
    }
    if newline_run >= 2 {
        paragraphs.push(std::mem::take(&mut current));
        breaks += 1;
    }
    paragraphs.push(current);

    (paragraphs, breaks)
}

/// Greedy word-wrap: append-then-check. Words accumulate until the measured
/// width of the candidate line exceeds `max_width`, then the line is flushed.
/// A single word wider than `max_width` is emitted on its own line rather
/// than split.
pub fn wrap_text(
    text: &str,
    size: f32,
    id: FontId,
    max_width: f32,
    metrics: &FontMetrics,
) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in &words {
        let candidate = if current.is_empty() {
            (*word).to_string()
        } else {
            format!("{current} {word}")
        };
        if metrics.measure(&candidate, size, id) > max_width && !current.is_empty() {
            lines.push(current);
            current = (*word).to_string();
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_width() {
        let metrics = FontMetrics::new();
        let w = metrics.measure("Hello", 16.0, FontId::Regular);
        // 5 chars × 16 × 0.5 = 40
        assert!((w - 40.0).abs() < 0.1);
    }

    #[test]
    fn bold_measures_wider() {
        let metrics = FontMetrics::new();
        let regular = metrics.measure("Hello", 16.0, FontId::Regular);
        let bold = metrics.measure("Hello", 16.0, FontId::Bold);
        assert!(bold > regular);
    }

    #[test]
    fn wrap_splits_long_text() {
        let metrics = FontMetrics::new();
        let lines = wrap_text("Hello world foo bar", 16.0, FontId::Regular, 60.0, &metrics);
        assert!(lines.len() >= 2, "expected wrapping, got {lines:?}");
    }

    #[test]
    fn wrapped_lines_stay_within_width() {
        let metrics = FontMetrics::new();
        let max_width = 120.0;
        let text = "the quick brown fox jumps over the lazy dog again and again";
        let lines = wrap_text(text, 8.0, FontId::Regular, max_width, &metrics);
        assert!(lines.len() >= 2);
        for line in &lines {
            // Greedy append-then-check: an emitted line never exceeds the
            // budget unless it is a single unbreakable word.
            if line.contains(' ') {
                assert!(
                    metrics.measure(line, 8.0, FontId::Regular) <= max_width,
                    "line too wide: {line:?}"
                );
            }
        }
    }

    #[test]
    fn oversized_single_word_is_kept_whole() {
        let metrics = FontMetrics::new();
        let lines = wrap_text("unbreakable", 16.0, FontId::Regular, 10.0, &metrics);
        assert_eq!(lines, vec!["unbreakable".to_string()]);
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let (paragraphs, breaks) = split_paragraphs("first block\n\nsecond block");
        assert_eq!(paragraphs, vec!["first block", "second block"]);
        assert_eq!(breaks, 1);
    }

    #[test]
    fn newline_runs_collapse_to_one_break() {
        let (paragraphs, breaks) = split_paragraphs("a\n\n\n\nb");
        assert_eq!(paragraphs, vec!["a", "b"]);
        assert_eq!(breaks, 1);
    }

    #[test]
    fn lone_newlines_become_spaces() {
        let (paragraphs, breaks) = split_paragraphs("one\ntwo\nthree");
        assert_eq!(paragraphs, vec!["one two three"]);
        assert_eq!(breaks, 0);
    }

    #[test]
    fn crlf_is_normalised() {
        let (paragraphs, breaks) = split_paragraphs("a\r\n\r\nb");
        assert_eq!(paragraphs, vec!["a", "b"]);
        assert_eq!(breaks, 1);
    }
}
