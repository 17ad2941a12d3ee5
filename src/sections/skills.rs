//! Technical-skills page: seven categories as side-by-side two-column
//! bulleted lists under underlined sub-titles, three categories in the left
//! column and four in the right.

use crate::canvas::{Canvas, Cursor, HORIZONTAL_EDGE_SPACING, SPACING, TEXT_SIZE};
use crate::error::LayoutError;
use crate::fonts::FontId;
use crate::locale::{localized, Locale};
use crate::model::ResumeData;

use super::Section;

/// Vertical gap between the page title and the first category row.
const CATEGORY_TOP_OFFSET: f32 = 25.4;
/// X offset of an item list's second half.
const SECOND_COLUMN_OFFSET: f32 = 125.0;
/// Category rules in the left column stop well before the right column.
const LEFT_RULE_INSET: f32 = 315.28;

pub struct SkillsSection;

impl Section for SkillsSection {
    fn included(&self, data: &ResumeData) -> bool {
        !data.skills.is_empty()
    }

    fn render(
        &self,
        data: &ResumeData,
        canvas: &mut Canvas,
        locale: Locale,
    ) -> Result<(), LayoutError> {
        canvas.add_page();

        canvas.draw_underlined_title(
            &localized("technicalSkills", locale),
            Cursor::full_width(),
            HORIZONTAL_EDGE_SPACING,
        )?;

        let skills = &data.skills;

        let mut cursor = Cursor::left_column().down(CATEGORY_TOP_OFFSET);
        for (key, items) in [
            ("programmingLanguagesTitle", &skills.languages),
            ("platformsTitle", &skills.platforms),
            ("toolsTitle", &skills.tools),
        ] {
            draw_category(canvas, &localized(key, locale), items, &mut cursor, LEFT_RULE_INSET)?;
        }

        let mut cursor = Cursor::right_column().down(CATEGORY_TOP_OFFSET);
        for (key, items) in [
            ("frameworksTitle", &skills.frameworks),
            ("methodologiesTitle", &skills.methodologies),
            ("databasesTitle", &skills.databases),
            ("operatingSystemsTitle", &skills.operating_systems),
        ] {
            draw_category(
                canvas,
                &localized(key, locale),
                items,
                &mut cursor,
                HORIZONTAL_EDGE_SPACING,
            )?;
        }

        Ok(())
    }
}

/// One category: underlined sub-title, then the items split into two balanced
/// halves by count drawn side by side. An empty category still shows its
/// title and rule.
fn draw_category(
    canvas: &mut Canvas,
    title: &str,
    items: &[String],
    cursor: &mut Cursor,
    rule_inset: f32,
) -> Result<(), LayoutError> {
    let h = canvas.draw_underlined_title(title, *cursor, rule_inset)?;
    cursor.advance(h);

    let half = items.len().div_ceil(2);
    let (first, second) = items.split_at(half);

    let h1 = canvas.draw_bulleted_list(first, *cursor, TEXT_SIZE, FontId::Regular)?;
    let h2 = canvas.draw_bulleted_list(
        second,
        cursor.at_x(cursor.x + SECOND_COLUMN_OFFSET),
        TEXT_SIZE,
        FontId::Regular,
    )?;

    cursor.advance(h1.max(h2) + SPACING);
    Ok(())
}
