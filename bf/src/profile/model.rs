//! Profile record types
//!
//! Every field is optional on disk. Accessors return `Option` and treat an
//! empty string or empty list the same as a missing key, so callers only ever
//! deal with "present" or "absent".

use serde::{Deserialize, Deserializer, Serialize};

/// The person showcased by the assistant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(default, deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,

    #[serde(default, deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,

    #[serde(
        default,
        alias = "graduationYear",
        deserialize_with = "scalar_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub graduation_year: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<ProjectEntry>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<Vec<ExperienceEntry>>,
}

impl ProfileRecord {
    /// Full name
    pub fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    /// Professional title
    pub fn title(&self) -> Option<&str> {
        non_empty(&self.title)
    }

    /// School or university
    pub fn school(&self) -> Option<&str> {
        non_empty(&self.school)
    }

    /// Degree or field of study
    pub fn degree(&self) -> Option<&str> {
        non_empty(&self.degree)
    }

    /// Graduation year, kept as free text ("2024", "expected 2026")
    pub fn graduation_year(&self) -> Option<&str> {
        non_empty(&self.graduation_year)
    }

    /// Skills in display order, `None` when missing or empty
    pub fn skills(&self) -> Option<&[String]> {
        non_empty_list(&self.skills)
    }

    /// Projects in display order, `None` when missing or empty
    pub fn projects(&self) -> Option<&[ProjectEntry]> {
        non_empty_list(&self.projects)
    }

    /// Contact block, `None` when missing or when every channel is blank
    pub fn contact(&self) -> Option<&Contact> {
        self.contact.as_ref().filter(|c| !c.is_empty())
    }

    /// Certifications in display order, `None` when missing or empty
    pub fn certifications(&self) -> Option<&[String]> {
        non_empty_list(&self.certifications)
    }

    /// Work experience, most recent first, `None` when missing or empty
    pub fn experience(&self) -> Option<&[ExperienceEntry]> {
        non_empty_list(&self.experience)
    }

    /// The record written when no profile file exists yet
    pub fn sample() -> Self {
        Self {
            name: Some("Your Name".to_string()),
            title: Some("AI Engineer & Developer".to_string()),
            school: Some("Your University".to_string()),
            degree: Some("Computer Science".to_string()),
            graduation_year: Some("2024".to_string()),
            skills: Some(
                ["Python", "JavaScript", "React", "Machine Learning", "Django"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
            projects: Some(vec![
                ProjectEntry::detailed("AI Portfolio Bot", "This interactive CLI assistant"),
                ProjectEntry::detailed("Web Scraper", "Data extraction tool"),
                ProjectEntry::detailed("ML Classifier", "Image recognition system"),
            ]),
            contact: Some(Contact {
                email: Some("your.email@example.com".to_string()),
                github: Some("https://github.com/yourusername".to_string()),
                linkedin: Some("https://linkedin.com/in/yourprofile".to_string()),
                portfolio: Some("https://yourportfolio.com".to_string()),
            }),
            certifications: Some(vec![
                "AWS Cloud Practitioner".to_string(),
                "Google Data Analytics".to_string(),
                "Python Programming".to_string(),
            ]),
            experience: Some(vec![ExperienceEntry::Detailed {
                role: Some("Software Developer Intern".to_string()),
                company: Some("Tech Corp".to_string()),
                duration: Some("2023-2024".to_string()),
            }]),
        }
    }
}

/// A project, either structured or a bare line of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectEntry {
    Detailed {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    Bare(String),
}

impl ProjectEntry {
    pub fn detailed(name: impl Into<String>, description: impl Into<String>) -> Self {
        ProjectEntry::Detailed {
            name: Some(name.into()),
            description: Some(description.into()),
        }
    }

    /// Project name for structured entries only
    pub fn name(&self) -> Option<&str> {
        match self {
            ProjectEntry::Detailed { name, .. } => non_empty(name),
            ProjectEntry::Bare(_) => None,
        }
    }
}

/// A job, either structured or a bare line of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExperienceEntry {
    Detailed {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        role: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        company: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration: Option<String>,
    },
    Bare(String),
}

/// Contact channels
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
}

impl Contact {
    pub fn email(&self) -> Option<&str> {
        non_empty(&self.email)
    }

    pub fn github(&self) -> Option<&str> {
        non_empty(&self.github)
    }

    pub fn linkedin(&self) -> Option<&str> {
        non_empty(&self.linkedin)
    }

    pub fn portfolio(&self) -> Option<&str> {
        non_empty(&self.portfolio)
    }

    /// True when no channel has a value
    pub fn is_empty(&self) -> bool {
        self.email().is_none() && self.github().is_none() && self.linkedin().is_none() && self.portfolio().is_none()
    }
}

/// A scalar as written by hand: `"2024"`, `2024` and `true` all become text
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|scalar| match scalar {
        Scalar::Text(text) => text,
        Scalar::Integer(n) => n.to_string(),
        Scalar::Float(x) => x.to_string(),
        Scalar::Bool(b) => b.to_string(),
    }))
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

fn non_empty_list<T>(value: &Option<Vec<T>>) -> Option<&[T]> {
    value.as_deref().filter(|v| !v.is_empty())
}
