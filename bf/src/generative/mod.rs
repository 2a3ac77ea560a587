//! Generative fallback for free-form `ai:` questions
//!
//! A question is classified into a keyword family, rewritten to cite the
//! relevant part of the profile, wrapped in a persona prompt, sent to the
//! configured [`TextCompletionBackend`] once, and cleaned for display. Every
//! path returns a displayable string; backend errors never escape.

mod backend;
mod clean;

pub use backend::{LlmBackend, NullBackend, TextCompletionBackend, select_backend};
pub use clean::clean_response;

use serde::Serialize;
use tracing::{debug, warn};

use crate::profile::{ExperienceEntry, ProfileRecord, ProjectEntry};
use crate::prompts::PromptLoader;

/// Returned for every question when no backend is configured
pub const UNAVAILABLE_MESSAGE: &str =
    "🤖 AI chat is not available. Set `llm.provider` in the config (anthropic or openai) to enable it.";

/// Returned when the cleaned completion is empty
pub const NOT_SURE_MESSAGE: &str =
    "🤔 I'm not sure how to respond to that. Try asking about my skills, projects, or experience!";

const NO_PROJECTS_REPLY: &str = "I have several exciting projects! Check out my GitHub for the latest work.";
const NO_SKILLS_REPLY: &str = "I have experience with various programming languages and technologies.";
const NO_EXPERIENCE_REPLY: &str = "I have professional experience in software development and engineering.";

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Skills named in the persona prompt
const PERSONA_SKILLS: usize = 5;
/// Projects named in a project question
const CITED_PROJECTS: usize = 3;
/// Skills named in a skills question
const CITED_SKILLS: usize = 6;

/// Topic of a free-form question, checked in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryFamily {
    Projects,
    Skills,
    Experience,
    General,
}

impl QueryFamily {
    const PROJECT_WORDS: [&'static str; 4] = ["project", "work", "build", "develop"];
    const SKILL_WORDS: [&'static str; 4] = ["skill", "technology", "programming", "code"];
    const EXPERIENCE_WORDS: [&'static str; 4] = ["experience", "job", "career", "background"];

    /// Case-insensitive substring classification
    pub fn classify(query: &str) -> Self {
        let query = query.to_lowercase();
        let hit = |words: &[&str]| words.iter().any(|w| query.contains(w));

        if hit(&Self::PROJECT_WORDS) {
            QueryFamily::Projects
        } else if hit(&Self::SKILL_WORDS) {
            QueryFamily::Skills
        } else if hit(&Self::EXPERIENCE_WORDS) {
            QueryFamily::Experience
        } else {
            QueryFamily::General
        }
    }

    /// Output budget in tokens
    pub fn max_tokens(self) -> u32 {
        match self {
            QueryFamily::Projects => 120,
            QueryFamily::Skills => 100,
            QueryFamily::Experience => 120,
            QueryFamily::General => 150,
        }
    }
}

/// What to do with a classified question
#[derive(Debug, Clone, PartialEq, Eq)]
enum Question {
    /// Send this text through the persona prompt
    Ask(String),
    /// Profile lacks the data; answer without calling the backend
    Canned(&'static str),
}

#[derive(Serialize)]
struct PersonaContext<'a> {
    name: &'a str,
    title: &'a str,
    skills: String,
    question: &'a str,
}

#[derive(Serialize)]
struct ProjectsContext<'a> {
    projects: String,
    query: &'a str,
}

#[derive(Serialize)]
struct SkillsContext<'a> {
    skills: String,
    query: &'a str,
}

#[derive(Serialize)]
struct ExperienceContext<'a> {
    role: Option<&'a str>,
    company: Option<&'a str>,
    entry: Option<String>,
    query: &'a str,
}

/// Free-form answers about the profile
pub struct GenerativeFallback {
    backend: Box<dyn TextCompletionBackend>,
    prompts: PromptLoader,
    temperature: f32,
}

impl GenerativeFallback {
    pub fn new(backend: Box<dyn TextCompletionBackend>, prompts: PromptLoader, temperature: f32) -> Self {
        Self {
            backend,
            prompts,
            temperature,
        }
    }

    /// A fallback that answers every question with [`UNAVAILABLE_MESSAGE`]
    pub fn unavailable() -> Self {
        Self::new(Box::new(NullBackend), PromptLoader::embedded_only(), DEFAULT_TEMPERATURE)
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_available()
    }

    pub fn describe(&self) -> String {
        self.backend.describe()
    }

    /// Answer `query` in the voice of the profile's owner
    pub async fn generate(&self, query: &str, profile: &ProfileRecord) -> String {
        debug!(%query, "generate: called");
        if !self.backend.is_available() {
            return UNAVAILABLE_MESSAGE.to_string();
        }

        let family = QueryFamily::classify(query);
        debug!(?family, "generate: classified");

        let question = match self.family_question(family, query, profile) {
            Ok(Question::Ask(question)) => question,
            Ok(Question::Canned(reply)) => return reply.to_string(),
            Err(e) => return processing_error(e),
        };

        let prompt = match self.persona_prompt(profile, &question) {
            Ok(prompt) => prompt,
            Err(e) => return processing_error(e),
        };

        match self
            .backend
            .complete(&prompt, family.max_tokens(), self.temperature)
            .await
        {
            Ok(raw) => {
                let cleaned = clean_response(&raw, &prompt);
                if cleaned.is_empty() {
                    NOT_SURE_MESSAGE.to_string()
                } else {
                    cleaned
                }
            }
            Err(e) => {
                warn!(error = %e, "Generative backend failed");
                processing_error(e)
            }
        }
    }

    /// Rewrite the query to cite the part of the profile it is about
    fn family_question(&self, family: QueryFamily, query: &str, profile: &ProfileRecord) -> eyre::Result<Question> {
        let question = match family {
            QueryFamily::Projects => {
                let Some(projects) = profile.projects() else {
                    return Ok(Question::Canned(NO_PROJECTS_REPLY));
                };
                let names: Vec<&str> = projects
                    .iter()
                    .take(CITED_PROJECTS)
                    .map(|p| match p {
                        ProjectEntry::Bare(text) => text.as_str(),
                        ProjectEntry::Detailed { .. } => p.name().unwrap_or("Project"),
                    })
                    .collect();
                let ctx = ProjectsContext {
                    projects: names.join(", "),
                    query,
                };
                self.prompts.render("projects", &ctx)?
            }
            QueryFamily::Skills => {
                let Some(skills) = profile.skills() else {
                    return Ok(Question::Canned(NO_SKILLS_REPLY));
                };
                let ctx = SkillsContext {
                    skills: join_first(skills, CITED_SKILLS),
                    query,
                };
                self.prompts.render("skills", &ctx)?
            }
            QueryFamily::Experience => {
                let Some(latest) = profile.experience().and_then(|e| e.first()) else {
                    return Ok(Question::Canned(NO_EXPERIENCE_REPLY));
                };
                let ctx = match latest {
                    ExperienceEntry::Detailed { role, company, .. } => ExperienceContext {
                        role: Some(role.as_deref().filter(|s| !s.trim().is_empty()).unwrap_or("Developer")),
                        company: Some(company.as_deref().filter(|s| !s.trim().is_empty()).unwrap_or("a tech company")),
                        entry: None,
                        query,
                    },
                    ExperienceEntry::Bare(text) => ExperienceContext {
                        role: None,
                        company: None,
                        entry: Some(as_sentence(text)),
                        query,
                    },
                };
                self.prompts.render("experience", &ctx)?
            }
            QueryFamily::General => query.to_string(),
        };

        Ok(Question::Ask(question))
    }

    /// Wrap a question in the persona instruction
    fn persona_prompt(&self, profile: &ProfileRecord, question: &str) -> eyre::Result<String> {
        let ctx = PersonaContext {
            name: profile.name().unwrap_or("the developer"),
            title: profile.title().unwrap_or("Software Developer"),
            skills: profile
                .skills()
                .map(|s| join_first(s, PERSONA_SKILLS))
                .unwrap_or_default(),
            question,
        };
        self.prompts.render("persona", &ctx)
    }
}

fn join_first(items: &[String], n: usize) -> String {
    items.iter().take(n).map(String::as_str).collect::<Vec<_>>().join(", ")
}

/// Trim and end with terminal punctuation, adding a period only when missing
fn as_sentence(text: &str) -> String {
    let text = text.trim();
    if text.ends_with(['.', '!', '?']) {
        text.to_string()
    } else {
        format!("{}.", text)
    }
}

fn processing_error(e: impl std::fmt::Display) -> String {
    format!("🤖 AI processing error: {}", e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::client::mock::MockLlmClient;
    use std::sync::Arc;

    fn fallback_with(client: Arc<MockLlmClient>) -> GenerativeFallback {
        GenerativeFallback::new(
            Box::new(LlmBackend::new(client)),
            PromptLoader::embedded_only(),
            DEFAULT_TEMPERATURE,
        )
    }

    fn profile() -> ProfileRecord {
        serde_json::from_str(
            r#"{
                "name": "Ann",
                "title": "Data Engineer",
                "skills": ["Go", "SQL", "Rust", "Python", "Kafka", "Spark", "Airflow"],
                "projects": [
                    {"name": "Pipeline", "description": "ETL"},
                    "Side hustle",
                    {"description": "nameless"},
                    {"name": "Fourth", "description": "cut"}
                ],
                "experience": [{"role": "Engineer", "company": "Acme", "duration": "2022-2024"}]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_classify_families() {
        assert_eq!(QueryFamily::classify("What did you BUILD?"), QueryFamily::Projects);
        assert_eq!(QueryFamily::classify("which technology do you like"), QueryFamily::Skills);
        assert_eq!(QueryFamily::classify("tell me about your career"), QueryFamily::Experience);
        assert_eq!(QueryFamily::classify("favourite color?"), QueryFamily::General);
        // Projects are checked first
        assert_eq!(QueryFamily::classify("code you developed"), QueryFamily::Projects);
    }

    #[test]
    fn test_max_tokens_per_family() {
        assert_eq!(QueryFamily::Projects.max_tokens(), 120);
        assert_eq!(QueryFamily::Skills.max_tokens(), 100);
        assert_eq!(QueryFamily::Experience.max_tokens(), 120);
        assert_eq!(QueryFamily::General.max_tokens(), 150);
    }

    #[tokio::test]
    async fn test_unavailable_backend() {
        let fallback = GenerativeFallback::unavailable();
        assert!(!fallback.is_available());
        assert_eq!(fallback.generate("anything", &profile()).await, UNAVAILABLE_MESSAGE);
    }

    #[test]
    fn test_describe_names_backend() {
        assert_eq!(GenerativeFallback::unavailable().describe(), "none");
        let fallback = fallback_with(Arc::new(MockLlmClient::replying("hi")));
        assert!(fallback.is_available());
        assert_eq!(fallback.describe(), "mock-model");
    }

    #[tokio::test]
    async fn test_general_question_uses_persona_prompt() {
        let client = Arc::new(MockLlmClient::replying("I enjoy hiking. Also chess. And tea. And more."));
        let fallback = fallback_with(client.clone());

        let answer = fallback.generate("What are your hobbies?", &profile()).await;
        assert_eq!(answer, "I enjoy hiking. Also chess. And tea.");

        let request = &client.requests()[0];
        assert_eq!(request.max_tokens, 150);
        let prompt = &request.messages[0].content;
        assert!(prompt.starts_with("You are Ann, a Data Engineer with expertise in Go, SQL, Rust, Python, Kafka."));
        assert!(!prompt.contains("Spark"));
        assert!(prompt.contains("Question: What are your hobbies?"));
    }

    #[tokio::test]
    async fn test_project_question_cites_three_projects() {
        let client = Arc::new(MockLlmClient::replying("They were fun."));
        let fallback = fallback_with(client.clone());

        fallback.generate("what projects did you do", &profile()).await;

        let request = &client.requests()[0];
        assert_eq!(request.max_tokens, 120);
        let prompt = &request.messages[0].content;
        assert!(prompt.contains("I've worked on projects like Pipeline, Side hustle, Project. what projects did you do"));
        assert!(!prompt.contains("Fourth"));
    }

    #[tokio::test]
    async fn test_skill_question_cites_six_skills() {
        let client = Arc::new(MockLlmClient::replying("Lots."));
        let fallback = fallback_with(client.clone());

        fallback.generate("Favourite programming language?", &profile()).await;

        let prompt = &client.requests()[0].messages[0].content;
        assert!(prompt.contains("My technical skills include Go, SQL, Rust, Python, Kafka, Spark. Favourite"));
        assert!(!prompt.contains("Airflow"));
    }

    #[tokio::test]
    async fn test_experience_question_cites_latest_job() {
        let client = Arc::new(MockLlmClient::replying("Good times."));
        let fallback = fallback_with(client.clone());

        fallback.generate("your background?", &profile()).await;

        let prompt = &client.requests()[0].messages[0].content;
        assert!(prompt.contains("I worked as Engineer at Acme. your background?"));
    }

    #[tokio::test]
    async fn test_bare_experience_entry_single_period() {
        let client = Arc::new(MockLlmClient::new(vec![Ok("Yes.".to_string()), Ok("Yes.".to_string())]));
        let fallback = fallback_with(client.clone());

        let mut profile = profile();
        profile.experience = Some(vec![ExperienceEntry::Bare("Freelance, 2020.".to_string())]);
        fallback.generate("your career?", &profile).await;

        profile.experience = Some(vec![ExperienceEntry::Bare("Freelance, 2020".to_string())]);
        fallback.generate("your career?", &profile).await;

        let requests = client.requests();
        for request in &requests {
            let prompt = &request.messages[0].content;
            assert!(prompt.contains("Freelance, 2020. your career?"), "{}", prompt);
            assert!(!prompt.contains(".."));
        }
    }

    #[test]
    fn test_as_sentence() {
        assert_eq!(as_sentence(" Freelance "), "Freelance.");
        assert_eq!(as_sentence("Freelance!"), "Freelance!");
        assert_eq!(as_sentence("Freelance."), "Freelance.");
    }

    #[tokio::test]
    async fn test_canned_replies_skip_backend() {
        let client = Arc::new(MockLlmClient::new(vec![]));
        let fallback = fallback_with(client.clone());
        let empty = ProfileRecord::default();

        assert_eq!(fallback.generate("projects?", &empty).await, NO_PROJECTS_REPLY);
        assert_eq!(fallback.generate("skills?", &empty).await, NO_SKILLS_REPLY);
        assert_eq!(fallback.generate("career?", &empty).await, NO_EXPERIENCE_REPLY);
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_completion_is_not_sure() {
        let client = Arc::new(MockLlmClient::replying("Answer:"));
        let fallback = fallback_with(client);
        assert_eq!(fallback.generate("hello", &profile()).await, NOT_SURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_backend_error_is_rendered() {
        let client = Arc::new(MockLlmClient::new(vec![Err("connection reset".to_string())]));
        let fallback = fallback_with(client);

        let answer = fallback.generate("hello", &profile()).await;
        assert!(answer.starts_with("🤖 AI processing error:"));
        assert!(answer.contains("connection reset"));
    }

    #[tokio::test]
    async fn test_defaults_for_sparse_profile() {
        let client = Arc::new(MockLlmClient::replying("Hi."));
        let fallback = fallback_with(client.clone());

        fallback.generate("hello", &ProfileRecord::default()).await;

        let prompt = &client.requests()[0].messages[0].content;
        assert!(prompt.starts_with("You are the developer, a Software Developer."));
    }
}
