//! The resume data model.
//!
//! This is the input contract of the whole engine: a snapshot of everything
//! the editing UI collects, serialised as camelCase JSON (the same blobs the
//! persistence bridge stores). Every field defaults so partial blobs load;
//! an empty string or empty list means "not filled in" and suppresses
//! drawing, it is never an error.
//!
//! Ordering rules live here, at write time: jobs and personal projects are
//! kept sorted by start date descending, languages by proficiency tier, and
//! top skills by years of experience. Renderers consume the stored order
//! as-is.

use serde::{Deserialize, Serialize};

use crate::dates::parse_date_from_string;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub general: General,
    pub skills: Skills,
    pub top_skills: Vec<TopSkill>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub jobs: Vec<Job>,
    pub personal_projects: Vec<PersonalProject>,
    pub languages: Vec<Language>,
    pub competencies: Vec<String>,
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct General {
    /// Base64 data URI of the profile photo; empty when none is set.
    pub profile_photo: String,
    pub name: Name,
    pub region: String,
    pub driving_license: Option<DrivingLicense>,
    pub function_title: String,
    pub introduction: String,
    pub achievements: Vec<String>,
    pub colleagues_describe: String,
    pub colleagues_know: String,
    pub contact: Contact,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Name {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub display_name: String,
}

impl Name {
    /// The name shown at the top of the document. A display name wins
    /// verbatim; otherwise the parts are joined with single spaces, empty
    /// parts dropped.
    pub fn formatted(&self) -> String {
        if !self.display_name.is_empty() {
            return self.display_name.clone();
        }
        [&self.first_name, &self.middle_name, &self.last_name]
            .iter()
            .filter(|part| !part.is_empty())
            .map(|part| part.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrivingLicense {
    Car,
    Motorcycle,
    Truck,
    Bus,
}

impl std::fmt::Display for DrivingLicense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            DrivingLicense::Car => "Car",
            DrivingLicense::Motorcycle => "Motorcycle",
            DrivingLicense::Truck => "Truck",
            DrivingLicense::Bus => "Bus",
        };
        f.write_str(label)
    }
}

/// The seven free-form skill categories, shared by the skills page and the
/// per-job skill rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skills {
    pub languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub platforms: Vec<String>,
    pub methodologies: Vec<String>,
    pub operating_systems: Vec<String>,
    pub databases: Vec<String>,
    pub tools: Vec<String>,
}

impl Skills {
    /// Category list in render order, paired with its localisation key.
    pub fn categories(&self) -> [(&'static str, &[String]); 7] {
        [
            ("programmingLanguagesTitle", self.languages.as_slice()),
            ("frameworksTitle", self.frameworks.as_slice()),
            ("platformsTitle", self.platforms.as_slice()),
            ("methodologiesTitle", self.methodologies.as_slice()),
            ("databasesTitle", self.databases.as_slice()),
            ("toolsTitle", self.tools.as_slice()),
            ("operatingSystemsTitle", self.operating_systems.as_slice()),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.categories().iter().all(|(_, items)| items.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopSkill {
    pub name: String,
    pub years_of_experience: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub location: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub title: String,
    pub provider: String,
    pub completed: bool,
    pub year: u16,
}

/// `end_date` absent means "to the present day".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Period {
    pub start_date: String,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Job {
    pub company: String,
    pub location: String,
    pub period: Period,
    pub role: String,
    pub industry: String,
    pub description: String,
    pub responsibilities: Vec<String>,
    pub skills: Skills,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalProject {
    pub title: String,
    pub description: String,
    pub period: Option<Period>,
    pub skills: Skills,
}

/// Language proficiency tiers, declared in render-sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LanguageExperience {
    #[serde(rename = "Fluent/Native")]
    FluentNative,
    Advanced,
    Intermediate,
    Beginner,
}

impl LanguageExperience {
    pub fn locale_key(self) -> &'static str {
        match self {
            LanguageExperience::FluentNative => "experienceFluentNative",
            LanguageExperience::Advanced => "experienceAdvanced",
            LanguageExperience::Intermediate => "experienceIntermediate",
            LanguageExperience::Beginner => "experienceBeginner",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub name: String,
    pub experience: LanguageExperience,
}

impl ResumeData {
    /// Replace the job list, keeping it sorted by start date descending.
    /// Jobs whose start date does not parse sort last, in given order.
    pub fn set_jobs(&mut self, mut jobs: Vec<Job>) {
        jobs.sort_by(|a, b| {
            let a = parse_date_from_string(&a.period.start_date).ok();
            let b = parse_date_from_string(&b.period.start_date).ok();
            b.cmp(&a)
        });
        self.jobs = jobs;
    }

    /// Replace the personal-project list, newest start date first. Projects
    /// without a period keep their relative position at the end.
    pub fn set_personal_projects(&mut self, mut projects: Vec<PersonalProject>) {
        projects.sort_by(|a, b| {
            let start = |p: &PersonalProject| {
                p.period
                    .as_ref()
                    .and_then(|period| parse_date_from_string(&period.start_date).ok())
            };
            start(b).cmp(&start(a))
        });
        self.personal_projects = projects;
    }

    /// Replace the language list, sorted by proficiency tier.
    pub fn set_languages(&mut self, mut languages: Vec<Language>) {
        languages.sort_by_key(|language| language.experience);
        self.languages = languages;
    }

    /// Sort top skills by years of experience, most experienced first.
    pub fn sort_top_skills(&mut self) {
        self.top_skills
            .sort_by(|a, b| b.years_of_experience.cmp(&a.years_of_experience));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(first: &str, middle: &str, last: &str, display: &str) -> Name {
        Name {
            first_name: first.to_string(),
            middle_name: middle.to_string(),
            last_name: last.to_string(),
            display_name: display.to_string(),
        }
    }

    #[test]
    fn formatted_name_joins_parts() {
        assert_eq!(name("John", "Doe", "Smith", "").formatted(), "John Doe Smith");
    }

    #[test]
    fn formatted_name_skips_empty_parts() {
        assert_eq!(name("John", "", "Smith", "").formatted(), "John Smith");
    }

    #[test]
    fn display_name_wins() {
        assert_eq!(
            name("John", "Doe", "Smith", "Johnny Smith").formatted(),
            "Johnny Smith"
        );
    }

    #[test]
    fn formatted_name_of_empty_name_is_empty() {
        assert_eq!(Name::default().formatted(), "");
    }

    fn job_starting(start: &str) -> Job {
        Job {
            company: start.to_string(),
            period: Period {
                start_date: start.to_string(),
                end_date: None,
            },
            ..Job::default()
        }
    }

    #[test]
    fn jobs_sort_newest_first() {
        let mut data = ResumeData::default();
        data.set_jobs(vec![
            job_starting("2015-01-01"),
            job_starting("2021-06-01"),
            job_starting("2018-03-01"),
        ]);
        let companies: Vec<_> = data.jobs.iter().map(|j| j.company.as_str()).collect();
        assert_eq!(companies, ["2021-06-01", "2018-03-01", "2015-01-01"]);
    }

    #[test]
    fn undated_jobs_sort_last() {
        let mut data = ResumeData::default();
        data.set_jobs(vec![job_starting(""), job_starting("2020-01-01")]);
        assert_eq!(data.jobs[0].company, "2020-01-01");
    }

    #[test]
    fn languages_sort_by_tier() {
        let mut data = ResumeData::default();
        data.set_languages(vec![
            Language {
                name: "Spanish".to_string(),
                experience: LanguageExperience::Beginner,
            },
            Language {
                name: "English".to_string(),
                experience: LanguageExperience::FluentNative,
            },
            Language {
                name: "German".to_string(),
                experience: LanguageExperience::Intermediate,
            },
        ]);
        let names: Vec<_> = data.languages.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["English", "German", "Spanish"]);
    }

    #[test]
    fn top_skills_sort_by_experience() {
        let mut data = ResumeData {
            top_skills: vec![
                TopSkill {
                    name: "Rust".to_string(),
                    years_of_experience: 3,
                },
                TopSkill {
                    name: "SQL".to_string(),
                    years_of_experience: 12,
                },
            ],
            ..ResumeData::default()
        };
        data.sort_top_skills();
        assert_eq!(data.top_skills[0].name, "SQL");
    }

    #[test]
    fn deserialises_camel_case_blob() {
        let json = r#"{
            "general": {
                "name": { "firstName": "Jon", "lastName": "Snow" },
                "functionTitle": "Watch Commander"
            },
            "topSkills": [{ "name": "Leadership", "yearsOfExperience": 8 }],
            "languages": [{ "name": "English", "experience": "Fluent/Native" }]
        }"#;
        let data: ResumeData = serde_json::from_str(json).unwrap();
        assert_eq!(data.general.name.first_name, "Jon");
        assert_eq!(data.general.function_title, "Watch Commander");
        assert_eq!(data.top_skills[0].years_of_experience, 8);
        assert_eq!(
            data.languages[0].experience,
            LanguageExperience::FluentNative
        );
        assert!(data.jobs.is_empty());
    }
}
