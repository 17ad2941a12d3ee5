//! Education page: the education table followed by the certifications list.

use crate::canvas::{
    Canvas, Cursor, TextOptions, HORIZONTAL_EDGE_SPACING, INNER_PAGE_WIDTH, SPACING, TEXT_SIZE,
};
use crate::dates::format_date_from_string;
use crate::error::LayoutError;
use crate::fonts::FontId;
use crate::locale::{localized, Locale};
use crate::model::{Certification, Education, ResumeData};

use super::Section;

/// X offset of the institution column within an education row.
const MIDDLE_COLUMN_OFFSET: f32 = 194.0;
/// X offset of the date-range column.
const DATE_COLUMN_OFFSET: f32 = 352.0;
/// Certification bullets are nudged slightly off the title anchor.
const CERTIFICATION_INDENT: f32 = 5.0;

pub struct EducationSection;

impl Section for EducationSection {
    fn included(&self, data: &ResumeData) -> bool {
        !data.education.is_empty() || !data.certifications.is_empty()
    }

    fn render(
        &self,
        data: &ResumeData,
        canvas: &mut Canvas,
        locale: Locale,
    ) -> Result<(), LayoutError> {
        canvas.add_page();
        let mut cursor = Cursor::full_width();

        let h = canvas.draw_underlined_title(
            &localized("education", locale),
            cursor,
            HORIZONTAL_EDGE_SPACING,
        )?;
        cursor.advance(h);

        for education in &data.education {
            draw_education(canvas, &mut cursor, education, locale)?;
        }

        let h = canvas.draw_underlined_title(
            &localized("certifications", locale),
            cursor,
            HORIZONTAL_EDGE_SPACING,
        )?;
        cursor.advance(h);

        let items: Vec<String> = data
            .certifications
            .iter()
            .map(|c| certification_line(c, locale))
            .collect();
        let h = canvas.draw_bulleted_list(
            &items,
            cursor.at_x(cursor.x + CERTIFICATION_INDENT),
            TEXT_SIZE,
            FontId::Regular,
        )?;
        cursor.advance(h);

        Ok(())
    }
}

/// Degree and institution in bold side by side, the date range in a third
/// column, then the optional description across the full width.
fn draw_education(
    canvas: &mut Canvas,
    cursor: &mut Cursor,
    education: &Education,
    locale: Locale,
) -> Result<(), LayoutError> {
    let start = if education.start_date.is_empty() {
        String::new()
    } else {
        format_date_from_string(&education.start_date, locale)?
    };
    let end = match education.end_date.as_deref() {
        Some(date) if !date.is_empty() => format_date_from_string(date, locale)?,
        _ => localized("present", locale),
    };

    let bold = TextOptions {
        font: FontId::Bold,
        ..TextOptions::default()
    };
    canvas.draw_text(&education.degree, *cursor, &bold)?;
    canvas.draw_text(
        &education.institution,
        cursor.at_x(cursor.x + MIDDLE_COLUMN_OFFSET),
        &bold,
    )?;
    let row_height = canvas.draw_text(
        &format!("{start} - {end}"),
        cursor.at_x(cursor.x + DATE_COLUMN_OFFSET),
        &TextOptions::default(),
    )?;
    cursor.advance(row_height);

    if !education.description.is_empty() {
        let h = canvas.draw_text(
            &education.description,
            *cursor,
            &TextOptions {
                max_width: INNER_PAGE_WIDTH,
                ..TextOptions::default()
            },
        )?;
        cursor.advance(h + SPACING);
    }

    Ok(())
}

/// `"{title}[ - (in progress)] - {provider} - {year}"`
fn certification_line(certification: &Certification, locale: Locale) -> String {
    let progress = if certification.completed {
        String::new()
    } else {
        format!(" - ({})", localized("inProgress", locale))
    };
    format!(
        "{}{} - {} - {}",
        certification.title, progress, certification.provider, certification.year
    )
}
