//! Canned answers built from the profile
//!
//! Every generator returns non-empty text for any record, however sparse.

use colored::Colorize;

use crate::config::LinksConfig;
use crate::profile::{ExperienceEntry, ProfileRecord, ProjectEntry};

pub const NOT_AVAILABLE: &str = "N/A";
pub const DEFAULT_TITLE: &str = "Developer";
pub const DEFAULT_AUTHOR: &str = "Developer";
pub const NOT_SPECIFIED: &str = "Not specified";
pub const UNNAMED_PROJECT: &str = "Unnamed Project";
pub const NO_DESCRIPTION: &str = "No description available";
pub const DEFAULT_ROLE: &str = "Role";
pub const DEFAULT_COMPANY: &str = "Company";

pub const NO_PROJECTS: &str = "No projects listed yet. Update data.json to showcase your work!";
pub const NO_SKILLS: &str = "Skills list not available. Update data.json!";
pub const NO_CONTACT: &str = "Contact info not available. Update data.json!";
pub const NO_CERTIFICATIONS: &str = "No certifications listed. Update data.json to showcase achievements!";
pub const NO_EXPERIENCE: &str = "Work experience not listed. Update data.json!";

/// Projects shown by the projects answer
pub const MAX_PROJECTS: usize = 5;
/// Certifications shown by the education answer
pub const MAX_EDUCATION_CERTS: usize = 3;
/// Skills per line in the skills answer
pub const SKILLS_PER_LINE: usize = 3;

pub fn resume(profile: &ProfileRecord, links: &LinksConfig) -> String {
    let mut out = format!("{}\n\n", "📄 Resume Information:".blue());
    out.push_str(&format!(
        "📋 {} - {}\n",
        profile.name().unwrap_or(NOT_AVAILABLE),
        profile.title().unwrap_or(DEFAULT_TITLE)
    ));
    out.push_str(&format!(
        "🎓 {} from {}\n",
        profile.degree().unwrap_or(NOT_AVAILABLE),
        profile.school().unwrap_or(NOT_AVAILABLE)
    ));
    out.push_str(&format!("\n📎 View or download full resume here: {}", links.resume_url));
    out
}

pub fn education(profile: &ProfileRecord) -> String {
    let mut out = format!("{}\n\n", "🎓 Education Background:".green());
    out.push_str(&format!("🏛️  University: {}\n", profile.school().unwrap_or(NOT_SPECIFIED)));
    out.push_str(&format!("📚 Degree: {}\n", profile.degree().unwrap_or(NOT_SPECIFIED)));
    out.push_str(&format!(
        "📅 Graduation: {}\n",
        profile.graduation_year().unwrap_or(NOT_SPECIFIED)
    ));

    if let Some(certs) = profile.certifications() {
        out.push_str("\n🏆 Key Certifications:\n");
        for cert in certs.iter().take(MAX_EDUCATION_CERTS) {
            out.push_str(&format!("   • {}\n", cert));
        }
    }
    out
}

pub fn projects(profile: &ProfileRecord) -> String {
    let mut out = format!("{}\n\n", "🚀 Recent Projects:".magenta());

    let Some(projects) = profile.projects() else {
        out.push_str(NO_PROJECTS);
        return out;
    };

    for (i, project) in projects.iter().take(MAX_PROJECTS).enumerate() {
        let n = i + 1;
        match project {
            ProjectEntry::Detailed { description, .. } => {
                let name = project.name().unwrap_or(UNNAMED_PROJECT);
                let description = description
                    .as_deref()
                    .filter(|d| !d.trim().is_empty())
                    .unwrap_or(NO_DESCRIPTION);
                out.push_str(&format!("{}. {}\n", n, name.cyan()));
                out.push_str(&format!("   {}\n\n", description));
            }
            ProjectEntry::Bare(text) => {
                out.push_str(&format!("{}. {}\n\n", n, text.cyan()));
            }
        }
    }
    out
}

pub fn skills(profile: &ProfileRecord) -> String {
    let mut out = format!("{}\n\n", "💻 Technical/ Non-technical Skills:".yellow());
    match profile.skills() {
        Some(skills) => out.push_str(&format_skills(skills)),
        None => out.push_str(NO_SKILLS),
    }
    out
}

/// Lay skills out in rows of [`SKILLS_PER_LINE`]
///
/// A line break follows every full row, so 3 skills give one break and 7 give two.
pub fn format_skills(skills: &[String]) -> String {
    let mut out = String::new();
    for (i, skill) in skills.iter().enumerate() {
        out.push_str(&format!("🔸 {}", skill));
        if (i + 1) % SKILLS_PER_LINE == 0 {
            out.push('\n');
        } else if i + 1 < skills.len() {
            out.push_str("  ");
        }
    }
    out
}

pub fn contact(profile: &ProfileRecord) -> String {
    let mut out = format!("{}\n\n", "📧 Contact Information:".cyan());

    let Some(contact) = profile.contact() else {
        out.push_str(NO_CONTACT);
        return out;
    };

    if let Some(email) = contact.email() {
        out.push_str(&format!("📧 Email: {}\n", email));
    }
    if let Some(github) = contact.github() {
        out.push_str(&format!("🐙 GitHub: {}\n", github));
    }
    if let Some(linkedin) = contact.linkedin() {
        out.push_str(&format!("💼 LinkedIn: {}\n", linkedin));
    }
    if let Some(portfolio) = contact.portfolio() {
        out.push_str(&format!("🌐 Portfolio: {}\n", portfolio));
    }
    out
}

pub fn certifications(profile: &ProfileRecord, links: &LinksConfig) -> String {
    let mut out = format!("{}\n\n", "🏆 Certifications & Achievements:".green());

    match profile.certifications() {
        Some(certs) => {
            for (i, cert) in certs.iter().enumerate() {
                out.push_str(&format!("{}. 🏅 {}\n", i + 1, cert));
            }
        }
        None => out.push_str(NO_CERTIFICATIONS),
    }

    out.push_str(&format!(
        "\n🔗 View all certificates on LinkedIn: {}",
        links.certifications_url
    ));
    out
}

pub fn experience(profile: &ProfileRecord) -> String {
    let mut out = format!("{}\n\n", "💼 Work Experience:".blue());

    let Some(entries) = profile.experience() else {
        out.push_str(NO_EXPERIENCE);
        return out;
    };

    for entry in entries {
        match entry {
            ExperienceEntry::Detailed { role, company, duration } => {
                out.push_str(&format!(
                    "🏢 {} at {}\n",
                    or_default(role, DEFAULT_ROLE),
                    or_default(company, DEFAULT_COMPANY)
                ));
                out.push_str(&format!("📅 Duration: {}\n\n", or_default(duration, NOT_SPECIFIED)));
            }
            ExperienceEntry::Bare(text) => out.push_str(&format!("🏢 {}\n\n", text)),
        }
    }
    out
}

pub fn help() -> String {
    format!(
        "{}

{}
• resume, cv          - View resume information
• projects, work      - See recent projects
• skills, tech        - Technical skills overview
• education, school,
  university          - Educational background
• experience, job     - Work experience
• certifications,
  certificates        - Certificates & achievements
• contact, email,
  social              - Contact information

{}
• joke, funny         - Programming humor
• about, info         - About this assistant

{}
• ai: [question]      - AI-powered responses (if configured)
• help, commands      - Show this help menu
• exit, quit, bye,
  goodbye             - Exit the assistant

{}",
        "📋 Available Commands:".green(),
        "📄 Portfolio Commands:".cyan(),
        "🎮 Fun Commands:".yellow(),
        "🤖 Advanced:".magenta(),
        "💡 Pro tip: Just type naturally! I understand variations of these commands.".green(),
    )
}

pub fn about(profile: &ProfileRecord) -> String {
    format!(
        "{}

This is a CLI portfolio assistant that answers questions about my background.

{}
• Interactive command-line interface
• Dynamic portfolio information retrieval
• Colorful and engaging responses
• Optional AI integration
• Programming humor support

{} Rust, clap, rustyline, colored, serde

{} {}
{} Star this project if you found it helpful! ⭐",
        "🤖 About This Assistant:".cyan(),
        "Features:".green(),
        "Built with:".yellow(),
        "Created by:".magenta(),
        profile.name().unwrap_or(DEFAULT_AUTHOR),
        "GitHub:".blue(),
    )
}

fn or_default<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    value.as_deref().filter(|s| !s.trim().is_empty()).unwrap_or(default)
}
