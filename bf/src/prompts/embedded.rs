//! Embedded prompts
//!
//! These are compiled into the binary from .pmt files at build time.

use tracing::debug;

/// Persona instruction wrapped around every question
pub const PERSONA: &str = include_str!("../../prompts/persona.pmt");

/// Question prefix citing project names
pub const PROJECTS: &str = include_str!("../../prompts/projects.pmt");

/// Question prefix citing skills
pub const SKILLS: &str = include_str!("../../prompts/skills.pmt");

/// Question prefix citing the most recent job
pub const EXPERIENCE: &str = include_str!("../../prompts/experience.pmt");

/// Get the embedded prompt by name
pub fn get_embedded(name: &str) -> Option<&'static str> {
    debug!(%name, "get_embedded: called");
    match name {
        "persona" => Some(PERSONA),
        "projects" => Some(PROJECTS),
        "skills" => Some(SKILLS),
        "experience" => Some(EXPERIENCE),
        _ => None,
    }
}
