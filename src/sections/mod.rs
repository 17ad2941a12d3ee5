//! Section renderers – five independent layout programs sharing one drawing
//! toolkit.
//!
//! Each renderer owns one resume section: it decides, via [`Section::included`],
//! whether the section has enough data to justify a page at all, and lays the
//! section out onto one or more pages it opens itself. Renderers are
//! stateless; the assembler composes them in a fixed order and every call
//! gets the data snapshot and the shared canvas explicitly.

mod additional;
mod education;
mod introduction;
mod jobs;
mod skills;

pub use additional::AdditionalSection;
pub use education::EducationSection;
pub use introduction::IntroductionSection;
pub use jobs::JobsSection;
pub use skills::SkillsSection;

use crate::canvas::Canvas;
use crate::error::LayoutError;
use crate::locale::Locale;
use crate::model::ResumeData;

pub trait Section {
    /// Pure predicate over the snapshot: does this section get a page?
    fn included(&self, data: &ResumeData) -> bool;

    /// Open this section's page(s) on the canvas and draw everything.
    /// Only called when [`Section::included`] returned true.
    fn render(
        &self,
        data: &ResumeData,
        canvas: &mut Canvas,
        locale: Locale,
    ) -> Result<(), LayoutError>;
}

/// All renderers in document order: introduction, skills, education, jobs,
/// additional. Skipped sections contribute no pages; the order never changes.
pub fn all() -> [&'static dyn Section; 5] {
    [
        &IntroductionSection,
        &SkillsSection,
        &EducationSection,
        &JobsSection,
        &AdditionalSection,
    ]
}
