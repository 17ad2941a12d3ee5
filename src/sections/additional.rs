//! Additional page: spoken languages, competencies and interests.
//!
//! Languages render as a flat bulleted list; competencies and interests use
//! a multi-column layout of up to four columns. Each of the three sections
//! is independently presence-guarded.

use crate::canvas::{Canvas, Cursor, HORIZONTAL_EDGE_SPACING, SPACING, TEXT_SIZE};
use crate::error::LayoutError;
use crate::fonts::FontId;
use crate::locale::{localized, Locale};
use crate::model::ResumeData;

use super::Section;

/// Minimum items per column before a new column opens.
const MIN_COLUMN_ITEMS: usize = 10;
const MAX_COLUMNS: usize = 4;
/// X step between columns.
const COLUMN_STEP: f32 = 125.0;

pub struct AdditionalSection;

impl Section for AdditionalSection {
    fn included(&self, data: &ResumeData) -> bool {
        !data.languages.is_empty() || !data.competencies.is_empty()
    }

    fn render(
        &self,
        data: &ResumeData,
        canvas: &mut Canvas,
        locale: Locale,
    ) -> Result<(), LayoutError> {
        canvas.add_page();

        let languages: Vec<String> = data
            .languages
            .iter()
            .filter(|l| !l.name.is_empty())
            .map(|l| format!("{} - {}", l.name, localized(l.experience.locale_key(), locale)))
            .collect();
        let competencies: Vec<String> = non_empty(&data.competencies);
        let interests: Vec<String> = non_empty(&data.interests);

        if languages.is_empty() && competencies.is_empty() && interests.is_empty() {
            return Ok(());
        }

        let mut cursor = Cursor::full_width();

        if !languages.is_empty() {
            let h = canvas.draw_underlined_title(
                &localized("languages", locale),
                cursor,
                HORIZONTAL_EDGE_SPACING,
            )?;
            cursor.advance(h);
            let h = canvas.draw_bulleted_list(&languages, cursor, TEXT_SIZE, FontId::Regular)?;
            cursor.advance(h + SPACING);
        }

        if !competencies.is_empty() {
            let h = canvas.draw_underlined_title(
                &localized("competencies", locale),
                cursor,
                HORIZONTAL_EDGE_SPACING,
            )?;
            cursor.advance(h);
            let h = draw_multi_column_list(canvas, &competencies, cursor)?;
            cursor.advance(h);
        }

        if !interests.is_empty() {
            let h = canvas.draw_underlined_title(
                &localized("interests", locale),
                cursor,
                HORIZONTAL_EDGE_SPACING,
            )?;
            cursor.advance(h);
            let h = draw_multi_column_list(canvas, &interests, cursor)?;
            cursor.advance(h);
        }

        Ok(())
    }
}

fn non_empty(items: &[String]) -> Vec<String> {
    items.iter().filter(|i| !i.is_empty()).cloned().collect()
}

/// Bulleted items split over up to [`MAX_COLUMNS`] columns of at least
/// [`MIN_COLUMN_ITEMS`] each, drawn side by side. The vertical advance is the
/// tallest column's height plus one trailing spacing unit.
fn draw_multi_column_list(
    canvas: &mut Canvas,
    items: &[String],
    at: Cursor,
) -> Result<f32, LayoutError> {
    let chunk = items.len().div_ceil(MAX_COLUMNS).max(MIN_COLUMN_ITEMS);

    let mut tallest = 0.0f32;
    for (index, column) in items.chunks(chunk).enumerate() {
        let column_x = at.x + index as f32 * COLUMN_STEP;
        let h = canvas.draw_bulleted_list(column, at.at_x(column_x), TEXT_SIZE, FontId::Regular)?;
        tallest = tallest.max(h);
    }

    Ok(tallest + SPACING)
}
