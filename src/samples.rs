//! A fully-populated sample resume for tests and the `--sample` CLI flag.

use crate::model::*;

/// Every section populated, exercising each renderer at least once.
pub fn sample_resume() -> ResumeData {
    let mut data = ResumeData {
        general: General {
            profile_photo: String::new(),
            name: Name {
                first_name: "Jon".to_string(),
                middle_name: String::new(),
                last_name: "Snow".to_string(),
                display_name: String::new(),
            },
            region: "The Wall".to_string(),
            driving_license: Some(DrivingLicense::Car),
            function_title: "Watch Commander".to_string(),
            introduction: "I am the sword in the darkness. \
                           I am the watcher on the walls."
                .to_string(),
            achievements: vec![
                "Defeated the Night King".to_string(),
                String::new(),
                "King in the North".to_string(),
            ],
            colleagues_describe: "Brave".to_string(),
            colleagues_know: "Loyal".to_string(),
            contact: Contact {
                email: "jon.snow@resume-forge.io".to_string(),
                phone: "123123123".to_string(),
            },
        },
        skills: Skills {
            languages: vec!["HTML".to_string(), "CSS".to_string(), "Rust".to_string()],
            frameworks: vec!["Vue.js".to_string()],
            platforms: vec!["Node.js".to_string()],
            methodologies: vec!["Agile".to_string()],
            operating_systems: vec!["MacOS".to_string()],
            databases: vec!["MongoDB".to_string()],
            tools: vec!["Git".to_string()],
        },
        top_skills: vec![
            TopSkill {
                name: "Leadership".to_string(),
                years_of_experience: 10,
            },
            TopSkill {
                name: "Swordsmanship".to_string(),
                years_of_experience: 6,
            },
        ],
        education: vec![Education {
            institution: "Castle Black".to_string(),
            degree: "Master of Watch".to_string(),
            field_of_study: "Defense".to_string(),
            location: "The North".to_string(),
            start_date: "1970-01-01".to_string(),
            end_date: Some("1972-01-02".to_string()),
            description: "Extensive study of wall defense.".to_string(),
        }],
        certifications: vec![Certification {
            title: "Ranger Certification".to_string(),
            provider: "Night's Watch".to_string(),
            completed: true,
            year: 2021,
        }],
        competencies: vec![
            "Problem Solving".to_string(),
            "Teamwork".to_string(),
            String::new(),
            "Analytical Thinking".to_string(),
        ],
        interests: [
            "Programming", "Wolves", "Winter", "Golf", "Skiing", "Hiking", "Camping", "Cooking",
            "Reading", "Music", "Movies", "Traveling", "Photography", "Gaming", "Sports",
            "Technology", "Science", "History", "Art", "Nature",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        ..ResumeData::default()
    };

    data.set_jobs(vec![
        Job {
            company: "University of the Banana".to_string(),
            location: "Online".to_string(),
            period: Period {
                start_date: "2001-01-01".to_string(),
                end_date: Some("2023-01-01".to_string()),
            },
            role: String::new(),
            industry: "Education".to_string(),
            description: "This was a very tough five-minute job.".to_string(),
            responsibilities: vec!["Being awesome".to_string()],
            skills: Skills {
                languages: vec!["JavaScript".to_string(), "TypeScript".to_string()],
                frameworks: vec!["Vue.js".to_string(), "React".to_string()],
                platforms: vec!["Node.js".to_string(), "Docker".to_string()],
                methodologies: vec!["Agile".to_string(), "Scrum".to_string()],
                databases: vec!["MongoDB".to_string(), "PostgreSQL".to_string()],
                tools: vec!["Git".to_string(), "Docker".to_string()],
                operating_systems: vec!["Windows".to_string(), "Linux".to_string()],
            },
        },
        Job {
            company: "Night's Watch".to_string(),
            location: "Castle Black".to_string(),
            period: Period {
                start_date: "2023-02-01".to_string(),
                end_date: None,
            },
            role: "Lord Commander".to_string(),
            industry: "Defense".to_string(),
            description: "Holding the Wall.".to_string(),
            responsibilities: vec!["Leading the watch".to_string(), "Training recruits".to_string()],
            skills: Skills::default(),
        },
    ]);

    data.set_personal_projects(vec![PersonalProject {
        title: "Wall Maintenance Tracker".to_string(),
        description: "A very cold side project.".to_string(),
        period: Some(Period {
            start_date: "2020-01-01".to_string(),
            end_date: Some("2022-01-01".to_string()),
        }),
        skills: Skills::default(),
    }]);

    data.set_languages(vec![
        Language {
            name: "Common Tongue".to_string(),
            experience: LanguageExperience::FluentNative,
        },
        Language {
            name: "Old Tongue".to_string(),
            experience: LanguageExperience::Beginner,
        },
    ]);

    data
}
