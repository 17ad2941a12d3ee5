//! Introduction page: photo, identity facts and the top-skills chart on the
//! left; name, title and narrative blocks on the right.

use crate::canvas::{Canvas, Cursor, FieldData, TextOptions, SPACING, TEXT_SIZE};
use crate::error::LayoutError;
use crate::fonts::FontId;
use crate::locale::{localized, Locale};
use crate::model::{General, ResumeData};

use super::Section;

/// X anchor of the value column in the label/value block.
const DEFINITION_COLUMN_X: f32 = 172.0;
/// Profile photo edge length in points.
const PHOTO_SIZE: f32 = 140.0;

pub struct IntroductionSection;

impl Section for IntroductionSection {
    fn included(&self, data: &ResumeData) -> bool {
        let name = &data.general.name;
        !name.first_name.is_empty() && !name.last_name.is_empty()
    }

    fn render(
        &self,
        data: &ResumeData,
        canvas: &mut Canvas,
        locale: Locale,
    ) -> Result<(), LayoutError> {
        canvas.add_page();
        draw_left_column(data, canvas, locale)?;
        draw_right_column(&data.general, canvas, locale)?;
        Ok(())
    }
}

fn draw_left_column(
    data: &ResumeData,
    canvas: &mut Canvas,
    locale: Locale,
) -> Result<(), LayoutError> {
    let general = &data.general;
    let mut cursor = Cursor::left_column();

    if !general.profile_photo.is_empty() {
        let h = canvas.draw_image(&general.profile_photo, cursor, PHOTO_SIZE, PHOTO_SIZE)?;
        cursor.advance(h);
    }

    draw_definition_row(
        canvas,
        &mut cursor,
        &localized("firstName", locale),
        &general.name.first_name,
    )?;
    draw_definition_row(
        canvas,
        &mut cursor,
        &localized("region", locale),
        &general.region,
    )?;
    let license = general
        .driving_license
        .map(|l| l.to_string())
        .unwrap_or_default();
    draw_definition_row(
        canvas,
        &mut cursor,
        &localized("drivingLicense", locale),
        &license,
    )?;

    let has_chartable_skill = data
        .top_skills
        .iter()
        .any(|s| !s.name.is_empty() && s.years_of_experience > 0);
    if has_chartable_skill {
        cursor.advance(SPACING);
        let h = canvas.draw_text(
            &localized("topSkillsTitle", locale),
            cursor,
            &TextOptions {
                font: FontId::Bold,
                center: true,
                ..TextOptions::default()
            },
        )?;
        cursor.advance(h);
        let h = canvas.draw_skills_chart(&data.top_skills, cursor, TEXT_SIZE)?;
        cursor.advance(h);
    }

    Ok(())
}

/// One "label: value" line; the label in bold at the left anchor, the value
/// in the definition column. Skipped when the value is empty.
fn draw_definition_row(
    canvas: &mut Canvas,
    cursor: &mut Cursor,
    label: &str,
    value: &str,
) -> Result<(), LayoutError> {
    if value.is_empty() {
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
        cursor.at_x(DEFINITION_COLUMN_X),
        &TextOptions::default(),
    )?;
    cursor.advance(h);
    Ok(())
}

fn draw_right_column(
    general: &General,
    canvas: &mut Canvas,
    locale: Locale,
) -> Result<(), LayoutError> {
    let mut cursor = Cursor::right_column();

    let formatted = general.name.formatted();
    if !formatted.is_empty() {
        let h = canvas.draw_field(
            &FieldData {
                title: Some(formatted),
                center_text: true,
                ..FieldData::default()
            },
            cursor,
        )?;
        cursor.advance(h);
    }

    if !general.function_title.is_empty() {
        let h = canvas.draw_field(
            &FieldData {
                title: Some(general.function_title.clone()),
                center_text: true,
                ..FieldData::default()
            },
            cursor,
        )?;
        cursor.advance(h);
    }

    if !general.introduction.is_empty() {
        let h = canvas.draw_field(
            &FieldData {
                text: Some(general.introduction.clone()),
                needs_spacing: true,
                ..FieldData::default()
            },
            cursor,
        )?;
        cursor.advance(h);
    }

    let achievements: Vec<String> = general
        .achievements
        .iter()
        .filter(|a| !a.is_empty())
        .cloned()
        .collect();
    if !achievements.is_empty() {
        let h = canvas.draw_field(
            &FieldData {
                title: Some(localized("achievements", locale)),
                bullet_list: Some(achievements),
                needs_spacing: true,
                ..FieldData::default()
            },
            cursor,
        )?;
        cursor.advance(h);
    }

    if !general.colleagues_describe.is_empty() {
        let h = canvas.draw_field(
            &FieldData {
                title: Some(localized("colleaguesDescribeTitle", locale)),
                text: Some(general.colleagues_describe.clone()),
                needs_spacing: true,
                ..FieldData::default()
            },
            cursor,
        )?;
        cursor.advance(h);
    }

    if !general.colleagues_know.is_empty() {
        let h = canvas.draw_field(
            &FieldData {
                title: Some(localized("colleaguesKnowTitle", locale)),
                text: Some(general.colleagues_know.clone()),
                needs_spacing: true,
                ..FieldData::default()
            },
            cursor,
        )?;
        cursor.advance(h);
    }

    Ok(())
}
