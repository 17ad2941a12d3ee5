//! Document assembler – ties the section renderers together into one PDF.
//!
//! Sections are considered in a fixed order (introduction, skills,
//! education, jobs, additional). Each section's inclusion predicate is a
//! pure function of the data snapshot; a section that is not worth a page
//! contributes nothing, and the remaining sections keep their relative
//! order. Rendering is strictly sequential because every renderer appends
//! pages to the same document.

use crate::canvas::Canvas;
use crate::error::LayoutError;
use crate::locale::Locale;
use crate::model::ResumeData;
use crate::sections;

/// Lay out every included section onto a canvas, without serialising.
/// Separated from [`generate_resume`] so tests can inspect pages and ops.
pub fn layout_resume(data: &ResumeData, locale: Locale) -> Result<Canvas, LayoutError> {
    let formatted = data.general.name.formatted();
    let title = if formatted.is_empty() {
        "Resume".to_string()
    } else {
        formatted
    };

    let mut canvas = Canvas::new(&title);
    for section in sections::all() {
        if section.included(data) {
            section.render(data, &mut canvas, locale)?;
        }
    }
    Ok(canvas)
}

/// Generate the final PDF byte stream for a resume snapshot.
pub fn generate_resume(data: &ResumeData, locale: Locale) -> Result<Vec<u8>, LayoutError> {
    Ok(layout_resume(data, locale)?.save())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Education, General, Name, Skills};

    fn named_resume(first: &str, last: &str) -> ResumeData {
        ResumeData {
            general: General {
                name: Name {
                    first_name: first.to_string(),
                    last_name: last.to_string(),
                    ..Name::default()
                },
                ..General::default()
            },
            ..ResumeData::default()
        }
    }

    #[test]
    fn name_only_resume_renders_just_the_introduction() {
        let data = named_resume("Jon", "Snow");
        let canvas = layout_resume(&data, Locale::En).unwrap();
        assert_eq!(canvas.page_count(), 1);
    }

    #[test]
    fn empty_resume_renders_no_section_pages() {
        let canvas = layout_resume(&ResumeData::default(), Locale::En).unwrap();
        assert_eq!(canvas.page_count(), 0);
        // serialisation still yields a valid (padded) document
        let bytes = generate_resume(&ResumeData::default(), Locale::En).unwrap();
        assert_eq!(&bytes[0..5], b"%PDF-");
    }

    #[test]
    fn sections_without_data_are_skipped_independently() {
        let mut data = named_resume("Jon", "Snow");
        data.education = vec![Education {
            degree: "BSc".to_string(),
            institution: "Uni".to_string(),
            start_date: "2010-09-01".to_string(),
            end_date: Some("2013-06-01".to_string()),
            ..Education::default()
        }];
        // introduction + education, no skills/jobs/additional
        let canvas = layout_resume(&data, Locale::En).unwrap();
        assert_eq!(canvas.page_count(), 2);
    }

    #[test]
    fn skills_page_needs_one_populated_category() {
        let mut data = ResumeData::default();
        data.skills = Skills {
            tools: vec!["Git".to_string()],
            ..Skills::default()
        };
        let canvas = layout_resume(&data, Locale::En).unwrap();
        assert_eq!(canvas.page_count(), 1);
    }

    #[test]
    fn generated_bytes_are_a_pdf() {
        let bytes = generate_resume(&named_resume("Jon", "Snow"), Locale::En).unwrap();
        assert!(bytes.len() > 100);
        assert_eq!(&bytes[0..5], b"%PDF-");
    }
}
