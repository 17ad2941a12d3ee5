//! Localized strings for the rendered document.
//!
//! A pure `key -> string` lookup with `{placeholder}` interpolation. Unknown
//! keys fall back to the raw key so a missing translation shows up in the
//! output instead of aborting generation.

/// Output language for section titles, labels and fixed phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Nl,
}

impl Locale {
    /// Parse a locale tag ("en", "nl", "nl-NL", ...).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            s if s.starts_with("en") => Some(Locale::En),
            s if s.starts_with("nl") => Some(Locale::Nl),
            _ => None,
        }
    }
}

const EN: &[(&str, &str)] = &[
    ("firstName", "First name"),
    ("region", "Region"),
    ("drivingLicense", "Driving license"),
    ("topSkillsTitle", "Top skills"),
    ("achievements", "Achievements"),
    ("colleaguesDescribeTitle", "How would colleagues describe you?"),
    ("colleaguesKnowTitle", "What should colleagues know about you?"),
    ("technicalSkills", "Technical skills"),
    ("programmingLanguagesTitle", "Programming languages"),
    ("platformsTitle", "Platforms"),
    ("toolsTitle", "Tools"),
    ("frameworksTitle", "Frameworks"),
    ("methodologiesTitle", "Methodologies"),
    ("databasesTitle", "Databases"),
    ("operatingSystemsTitle", "Operating systems"),
    ("education", "Education"),
    ("certifications", "Certifications"),
    ("inProgress", "in progress"),
    ("present", "present"),
    ("workExperience", "Work experience"),
    (
        "workExperienceDescription",
        "An overview of the positions {firstName} has held over the years.",
    ),
    ("period", "Period"),
    ("role", "Role"),
    ("industry", "Industry"),
    ("responsibilities", "Responsibilities"),
    ("languages", "Languages"),
    ("competencies", "Competencies"),
    ("interests", "Interests"),
    ("experienceFluentNative", "Native or near native (C1/C2)"),
    ("experienceAdvanced", "Advanced (B2/C1)"),
    ("experienceIntermediate", "Intermediate (A2/B1)"),
    ("experienceBeginner", "Beginner (A1)"),
];

const NL: &[(&str, &str)] = &[
    ("firstName", "Voornaam"),
    ("region", "Regio"),
    ("drivingLicense", "Rijbewijs"),
    ("topSkillsTitle", "Topvaardigheden"),
    ("achievements", "Prestaties"),
    ("colleaguesDescribeTitle", "Hoe zouden collega's je omschrijven?"),
    ("colleaguesKnowTitle", "Wat moeten collega's over je weten?"),
    ("technicalSkills", "Technische vaardigheden"),
    ("programmingLanguagesTitle", "Programmeertalen"),
    ("platformsTitle", "Platformen"),
    ("toolsTitle", "Tools"),
    ("frameworksTitle", "Frameworks"),
    ("methodologiesTitle", "Methodologieën"),
    ("databasesTitle", "Databases"),
    ("operatingSystemsTitle", "Besturingssystemen"),
    ("education", "Opleiding"),
    ("certifications", "Certificeringen"),
    ("inProgress", "in uitvoering"),
    ("present", "heden"),
    ("workExperience", "Werkervaring"),
    (
        "workExperienceDescription",
        "Een overzicht van de functies die {firstName} door de jaren heen heeft vervuld.",
    ),
    ("period", "Periode"),
    ("role", "Functie"),
    ("industry", "Branche"),
    ("responsibilities", "Verantwoordelijkheden"),
    ("languages", "Talen"),
    ("competencies", "Competenties"),
    ("interests", "Interesses"),
    ("experienceFluentNative", "Moedertaal of bijna moedertaal (C1/C2)"),
    ("experienceAdvanced", "Gevorderd (B2/C1)"),
    ("experienceIntermediate", "Gemiddeld (A2/B1)"),
    ("experienceBeginner", "Beginner (A1)"),
];

fn table(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => EN,
        Locale::Nl => NL,
    }
}

/// Look up a localized string, falling back to the raw key when missing.
pub fn localized(key: &str, locale: Locale) -> String {
    table(locale)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| (*v).to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Look up a localized string and substitute `{name}` placeholders.
pub fn localized_with(key: &str, vars: &[(&str, &str)], locale: Locale) -> String {
    let mut text = localized(key, locale);
    for (name, value) in vars {
        text = text.replace(&format!("{{{name}}}"), value);
    }
    text
}
