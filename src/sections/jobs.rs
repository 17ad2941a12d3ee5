//! Work-experience pages: an overview header, then one page per job.
//!
//! The first job shares the page opened by the section itself; every
//! subsequent job gets a fresh physical page. This is the only renderer with
//! multi-page output.

use crate::canvas::{
    Canvas, Cursor, FieldData, TextOptions, HORIZONTAL_EDGE_SPACING, INNER_PAGE_WIDTH, PAGE_WIDTH,
    SPACING,
};
use crate::dates::format_date_from_string;
use crate::error::LayoutError;
use crate::fonts::FontId;
use crate::locale::{localized, localized_with, Locale};
use crate::model::{Job, Period, ResumeData};

use super::Section;

/// X anchor of the value column in label/value rows.
const VALUE_COLUMN_X: f32 = 172.0;

pub struct JobsSection;

impl Section for JobsSection {
    fn included(&self, data: &ResumeData) -> bool {
        !data.jobs.is_empty() || !data.personal_projects.is_empty()
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
            &localized("workExperience", locale),
            cursor,
            HORIZONTAL_EDGE_SPACING,
        )?;
        cursor.advance(h);

        let intro = localized_with(
            "workExperienceDescription",
            &[("firstName", &data.general.name.first_name)],
            locale,
        );
        let h = canvas.draw_text(
            &intro,
            cursor,
            &TextOptions {
                max_width: INNER_PAGE_WIDTH,
                ..TextOptions::default()
            },
        )?;
        cursor.advance(h);

        if data.jobs.is_empty() {
            return Ok(());
        }

        for (index, job) in data.jobs.iter().enumerate() {
            if index > 0 {
                canvas.add_page();
                cursor = Cursor::full_width();
            } else {
                cursor.advance(SPACING);
            }
            draw_job(canvas, &mut cursor, job, locale)?;
        }

        Ok(())
    }
}

fn draw_job(
    canvas: &mut Canvas,
    cursor: &mut Cursor,
    job: &Job,
    locale: Locale,
) -> Result<(), LayoutError> {
    let title = if job.location.is_empty() {
        job.company.clone()
    } else {
        format!("{} ({})", job.company, job.location)
    };
    let h = canvas.draw_underlined_title(&title, *cursor, HORIZONTAL_EDGE_SPACING)?;
    cursor.advance(h);

    draw_row(
        canvas,
        cursor,
        &localized("period", locale),
        &format_period(&job.period, locale)?,
    )?;
    draw_row(canvas, cursor, &localized("role", locale), &job.role)?;
    draw_row(canvas, cursor, &localized("industry", locale), &job.industry)?;
    for (key, items) in job.skills.categories() {
        draw_row(canvas, cursor, &localized(key, locale), &items.join(", "))?;
    }

    if !job.description.is_empty() {
        cursor.advance(SPACING);
        let h = canvas.draw_text(
            &job.description,
            *cursor,
            &TextOptions {
                max_width: INNER_PAGE_WIDTH,
                ..TextOptions::default()
            },
        )?;
        cursor.advance(h);
    }

    let responsibilities: Vec<String> = job
        .responsibilities
        .iter()
        .filter(|r| !r.is_empty())
        .cloned()
        .collect();
    if !responsibilities.is_empty() {
        let h = canvas.draw_field(
            &FieldData {
                title: Some(localized("responsibilities", locale)),
                bullet_list: Some(responsibilities),
                needs_spacing: true,
                ..FieldData::default()
            },
            *cursor,
        )?;
        cursor.advance(h);
    }

    Ok(())
}

/// One label/value row; emitted only when both sides are non-empty.
fn draw_row(
    canvas: &mut Canvas,
    cursor: &mut Cursor,
    label: &str,
    value: &str,
) -> Result<(), LayoutError> {
    if label.is_empty() || value.is_empty() {
        return Ok(());
    }
    canvas.draw_text(
        label,
        *cursor,
        &TextOptions {
            font: FontId::Bold,
            ..TextOptions::default()
        },
    )?;
    let h = canvas.draw_text(
        value,
        cursor.at_x(VALUE_COLUMN_X),
        &TextOptions {
            max_width: PAGE_WIDTH - HORIZONTAL_EDGE_SPACING - VALUE_COLUMN_X,
            ..TextOptions::default()
        },
    )?;
    cursor.advance(h);
    Ok(())
}

/// `"MMM yyyy - MMM yyyy"`, the end defaulting to the localized "present".
/// An empty start date yields an empty string, which suppresses the row.
fn format_period(period: &Period, locale: Locale) -> Result<String, LayoutError> {
    if period.start_date.is_empty() {
        return Ok(String::new());
    }
    let start = format_date_from_string(&period.start_date, locale)?;
    let end = match period.end_date.as_deref() {
        Some(date) if !date.is_empty() => format_date_from_string(date, locale)?,
        _ => localized("present", locale),
    };
    Ok(format!("{start} - {end}"))
}
