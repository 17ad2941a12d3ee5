//! Integration tests for the resume-forge pipeline.
//!
//! These tests validate:
//! - Inclusion predicates drive which pages exist
//! - Jobs pagination adds one physical page per extra job
//! - Section order in the output is fixed
//! - PDF output exists and has valid format
//! - Persisted snapshots round-trip through the storage bridge

use printpdf::{Op, TextItem};

use resume_forge::canvas::Canvas;
use resume_forge::locale::Locale;
use resume_forge::model::*;
use resume_forge::resume::{generate_resume, layout_resume};
use resume_forge::samples::sample_resume;
use resume_forge::storage::{load_resume_data, save_resume_data, JsonStore, RESUME_DATA_KEY};

// =====================================================================
// Helpers
// =====================================================================

fn assert_valid_pdf(bytes: &[u8]) {
    assert!(bytes.len() > 100, "PDF too small: {} bytes", bytes.len());
    assert_eq!(&bytes[0..5], b"%PDF-", "Missing PDF header");
}

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

fn page_texts(canvas: &Canvas, page: usize) -> Vec<String> {
    canvas
        .page_ops(page)
        .iter()
        .filter_map(|op| match op {
            Op::WriteTextBuiltinFont { items, .. } => items.iter().find_map(|i| match i {
                TextItem::Text(t) => Some(t.clone()),
                _ => None,
            }),
            _ => None,
        })
        .collect()
}

fn job_starting(company: &str, start: &str) -> Job {
    Job {
        company: company.to_string(),
        period: Period {
            start_date: start.to_string(),
            end_date: None,
        },
        ..Job::default()
    }
}

// =====================================================================
// Inclusion predicates
// =====================================================================

#[test]
fn name_only_resume_yields_exactly_one_page() {
    let canvas = layout_resume(&named_resume("Jon", "Snow"), Locale::En).unwrap();
    assert_eq!(canvas.page_count(), 1);
    assert!(page_texts(&canvas, 0).contains(&"Jon Snow".to_string()));
}

#[test]
fn missing_last_name_excludes_the_introduction() {
    let canvas = layout_resume(&named_resume("Jon", ""), Locale::En).unwrap();
    assert_eq!(canvas.page_count(), 0);
}

#[test]
fn each_predicate_gates_its_own_page() {
    let mut skills_only = ResumeData::default();
    skills_only.skills.tools = vec!["Git".to_string()];
    assert_eq!(layout_resume(&skills_only, Locale::En).unwrap().page_count(), 1);

    let certifications_only = ResumeData {
        certifications: vec![Certification {
            title: "CKA".to_string(),
            provider: "CNCF".to_string(),
            completed: true,
            year: 2024,
        }],
        ..ResumeData::default()
    };
    assert_eq!(
        layout_resume(&certifications_only, Locale::En).unwrap().page_count(),
        1
    );

    let projects_only = ResumeData {
        personal_projects: vec![PersonalProject::default()],
        ..ResumeData::default()
    };
    assert_eq!(
        layout_resume(&projects_only, Locale::En).unwrap().page_count(),
        1
    );

    let competencies_only = ResumeData {
        competencies: vec!["Teamwork".to_string()],
        ..ResumeData::default()
    };
    assert_eq!(
        layout_resume(&competencies_only, Locale::En).unwrap().page_count(),
        1
    );

    let interests_only = ResumeData {
        interests: vec!["Golf".to_string()],
        ..ResumeData::default()
    };
    assert_eq!(
        layout_resume(&interests_only, Locale::En).unwrap().page_count(),
        0
    );
}

// =====================================================================
// Jobs pagination
// =====================================================================

#[test]
fn n_jobs_produce_n_section_pages() {
    for n in 1..=5usize {
        let data = ResumeData {
            jobs: (0..n)
                .map(|i| job_starting(&format!("Company {i}"), "2020-01-01"))
                .collect(),
            ..ResumeData::default()
        };
        let canvas = layout_resume(&data, Locale::En).unwrap();
        assert_eq!(canvas.page_count(), n, "expected {n} pages for {n} jobs");
    }
}

#[test]
fn later_jobs_land_on_their_own_pages() {
    let data = ResumeData {
        jobs: vec![
            job_starting("First Corp", "2020-01-01"),
            job_starting("Second Corp", "2018-01-01"),
        ],
        ..ResumeData::default()
    };
    let canvas = layout_resume(&data, Locale::En).unwrap();
    assert!(page_texts(&canvas, 0).contains(&"First Corp".to_string()));
    assert!(page_texts(&canvas, 1).contains(&"Second Corp".to_string()));
    assert!(!page_texts(&canvas, 1).contains(&"First Corp".to_string()));
}

// =====================================================================
// Section order
// =====================================================================

#[test]
fn sample_resume_renders_all_sections_in_fixed_order() {
    let data = sample_resume();
    let canvas = layout_resume(&data, Locale::En).unwrap();
    // introduction + skills + education + two job pages + additional
    assert_eq!(canvas.page_count(), 6);

    assert!(page_texts(&canvas, 0).contains(&"Jon Snow".to_string()));
    assert!(page_texts(&canvas, 1).contains(&"Technical skills".to_string()));
    assert!(page_texts(&canvas, 2).contains(&"Education".to_string()));
    assert!(page_texts(&canvas, 3).contains(&"Work experience".to_string()));
    assert!(page_texts(&canvas, 5).contains(&"Languages".to_string()));
}

#[test]
fn skipping_a_section_keeps_the_remaining_order() {
    let mut data = sample_resume();
    data.skills = Skills::default();
    let canvas = layout_resume(&data, Locale::En).unwrap();
    assert_eq!(canvas.page_count(), 5);
    assert!(page_texts(&canvas, 1).contains(&"Education".to_string()));
}

// =====================================================================
// Localisation
// =====================================================================

#[test]
fn dutch_locale_renders_dutch_titles() {
    let data = sample_resume();
    let canvas = layout_resume(&data, Locale::Nl).unwrap();
    assert!(page_texts(&canvas, 2).contains(&"Opleiding".to_string()));
    assert!(page_texts(&canvas, 3).contains(&"Werkervaring".to_string()));
}

// =====================================================================
// Error propagation
// =====================================================================

#[test]
fn malformed_job_date_aborts_generation() {
    let data = ResumeData {
        jobs: vec![job_starting("Acme", "2020-99-01")],
        ..ResumeData::default()
    };
    let err = generate_resume(&data, Locale::En).unwrap_err();
    assert!(err.to_string().contains("2020-99-01"));
}

#[test]
fn corrupt_profile_photo_aborts_generation() {
    let mut data = named_resume("Jon", "Snow");
    data.general.profile_photo = "data:image/bmp;base64,Qk0=".to_string();
    assert!(generate_resume(&data, Locale::En).is_err());
}

// =====================================================================
// PDF output
// =====================================================================

#[test]
fn sample_resume_generates_valid_pdf() {
    let bytes = generate_resume(&sample_resume(), Locale::En).unwrap();
    assert_valid_pdf(&bytes);
}

#[test]
fn empty_resume_still_generates_valid_pdf() {
    let bytes = generate_resume(&ResumeData::default(), Locale::En).unwrap();
    assert_valid_pdf(&bytes);
}

// =====================================================================
// Storage round-trip
// =====================================================================

#[test]
fn stored_snapshot_round_trips_and_renders() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::new(dir.path());

    let data = sample_resume();
    save_resume_data(&store, &data).unwrap();

    let loaded = load_resume_data(&store).expect("stored data should load");
    assert_eq!(loaded, data);

    let bytes = generate_resume(&loaded, Locale::En).unwrap();
    assert_valid_pdf(&bytes);
}

#[test]
fn malformed_stored_data_reads_as_no_prior_data() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::new(dir.path());
    store.set_item(RESUME_DATA_KEY, "not json at all").unwrap();
    assert!(load_resume_data(&store).is_none());
}
