//! Static page content.
//!
//! [`PortfolioContent`] is the single configuration value the page is
//! rendered from. The built-in [`Default`] is the published portfolio; a JSON
//! file with the same shape can replace it (see [`crate::config::Config`]).

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::entities::{
    ContactLink, ExperienceEntry, Profile, Project, ResumeRef, SkillCategory,
};

/// Errors raised while loading a content file.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Failed to read content file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse content file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid content: {0}")]
    Invalid(#[from] ValidationErrors),
}

/// Everything the page displays, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_unique_skill_labels"))]
pub struct PortfolioContent {
    /// Browser tab title.
    pub page_title: String,

    #[validate(nested)]
    pub profile: Profile,

    /// Biography paragraphs. `**text**` marks emphasis.
    #[serde(default)]
    pub about: Vec<String>,

    #[serde(default)]
    pub skills: Vec<SkillCategory>,

    #[serde(default)]
    #[validate(nested)]
    pub projects: Vec<Project>,

    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,

    pub contact_blurb: String,

    #[serde(default)]
    #[validate(nested)]
    pub links: Vec<ContactLink>,

    pub footer: String,
}

impl PortfolioContent {
    /// Parses and validates content from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Reads, parses and validates a JSON content file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

fn validate_unique_skill_labels(content: &PortfolioContent) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for category in &content.skills {
        if !seen.insert(category.label.as_str()) {
            let mut err = ValidationError::new("duplicate_skill_label");
            err.message = Some(format!("Duplicate skill category: {}", category.label).into());
            return Err(err);
        }
    }
    Ok(())
}

impl Default for PortfolioContent {
    fn default() -> Self {
        Self {
            page_title: "Harivadan Kilambi — AI Engineer & Data Scientist".to_string(),
            profile: Profile {
                name: "Harivadan Kilambi".to_string(),
                headline: "AI Engineer | Data Scientist | AI/ML Enthusiast | Builder of Agentic RAG Systems & Streamlit Apps".to_string(),
                location: "Hyderabad, India".to_string(),
                email: "kilambihari@gmail.com".to_string(),
                image: "profile.jpeg".to_string(),
                resume: ResumeRef {
                    file: "HariKilambi_Resume.pdf".to_string(),
                    download_name: "HariKilambi_Resume.pdf".to_string(),
                },
            },
            about: vec![
                "I’m a **Computer Science (Data Science)** graduate (2021–2025) passionate about **AI/ML, Generative AI, and multi-agent systems**. \
                 I specialize in **LangChain, Gemini, Streamlit, and RAG (Retrieval-Augmented Generation)** architectures. \
                 Expanding my knowledge in AI by completing specialized courses and regularly following the latest trends, \
                 with strong skills in Data Analysis, Machine Learning, and Visualization. \
                 Seeking real-world experience to apply and grow technical and analytical skills in a professional setting."
                    .to_string(),
                "Beyond coding, I’m deeply interested in Indian culture, vegetarian lifestyle, and technology for impact."
                    .to_string(),
            ],
            skills: vec![
                SkillCategory::new("Languages", ["Python", "C", "R Programming"]),
                SkillCategory::new(
                    "Libraries & Frameworks",
                    [
                        "TensorFlow",
                        "PyTorch",
                        "Keras",
                        "Scikit-learn",
                        "Pandas",
                        "NumPy",
                        "LangChain",
                        "Google Gemini API",
                        "Streamlit",
                        "Hugging Face",
                        "Django",
                        "NLTK",
                    ],
                ),
                SkillCategory::new(
                    "Database & Tools",
                    ["MySQL", "SQL", "FAISS", "Jupyter", "VS Code", "Git", "GitHub"],
                ),
                SkillCategory::new(
                    "Visualization",
                    ["PowerBI", "Tableau", "Matplotlib", "Seaborn"],
                ),
                SkillCategory::new(
                    "Big Data Technologies",
                    ["Hadoop", "Hive", "Apache Spark", "Kafka"],
                ),
                SkillCategory::new(
                    "Concepts",
                    [
                        "Machine Learning",
                        "Deep Learning",
                        "RAG Systems",
                        "NLP",
                        "MCP Architecture",
                    ],
                ),
            ],
            projects: vec![
                Project::new(
                    "Agentic RAG Chatbot (Gemini + MCP)",
                    "A multi-agent RAG chatbot using Gemini, FAISS, and MCP-style message passing. Deployed directly via GitHub. \
                     Designed Ingestion agent, Retrieval agent, and LLMResponse agent for modular, scalable architecture, \
                     enabling efficient message passing between agents. Integrated Streamlit UI for real-time document upload, \
                     search, and conversational Q&A with context aware responses.",
                    ["Python", "Gemini API", "MCP", "FAISS", "Streamlit", "RAG", "NLP", "Pandas"],
                ),
                Project::new(
                    "AI Marketing Idea Generator",
                    "Streamlit app that generates ad copies, slogans, and campaign ideas using Gemini & LangChain. \
                     Gets results in formats suitable for Social media, Email Marketing, web banners and more. \
                     An API key is loaded from Streamlit secrets. A custom wrapper around Gemini is built by extending \
                     langchain.llms.base.LLM. LangChain’s LLMChain is used to call Gemini and return results.",
                    ["LangChain", "Gemini API", "Streamlit", "Python"],
                ),
                Project::new(
                    "Employee Career Path Prediction using AI",
                    "Developed a proof-of-concept AI solution to predict employee performance using a Random Forest model \
                     and visualize career paths using a Markov chain. Engineered a full-stack, proof-of-concept AI solution \
                     for HR analytics, demonstrating the potential for predicting employee performance, recommending training, \
                     and visualizing career paths. Engineered a user-friendly, interactive dashboard with Streamlit to present \
                     key insights and model outputs.",
                    ["Gemini", "Scikit-learn", "Streamlit", "Pandas", "Python"],
                ),
            ],
            experience: vec![ExperienceEntry {
                role: "AI Engineer Intern".to_string(),
                organization: "Workcohol (Remote)".to_string(),
                period: "Mar 2025 to Jun 2025".to_string(),
                achievements: vec![
                    "Built AI-driven predictive analytics and NLP solutions".to_string(),
                    "Developed Streamlit dashboards integrating Gemini + LangChain".to_string(),
                    "Automated RAG pipelines for real-time knowledge retrieval".to_string(),
                ],
            }],
            contact_blurb:
                "If you’d like to collaborate or hire me, reach out via email or connect below:"
                    .to_string(),
            links: vec![
                ContactLink::new("LinkedIn", "https://linkedin.com/in/harikilambi"),
                ContactLink::new("GitHub", "https://github.com/kilambihari"),
            ],
            footer: "© 2025 Harivadan Kilambi | Built with ❤️ using Rust".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content_is_valid() {
        let content = PortfolioContent::default();
        assert!(content.validate().is_ok());
        assert_eq!(content.skills.len(), 6);
        assert_eq!(content.projects.len(), 3);
        assert_eq!(content.links.len(), 2);
    }

    #[test]
    fn test_duplicate_skill_labels_rejected() {
        let mut content = PortfolioContent::default();
        content
            .skills
            .push(SkillCategory::new("Languages", ["Rust"]));
        assert!(content.validate().is_err());
    }

    #[test]
    fn test_empty_skill_list_allowed() {
        let mut content = PortfolioContent::default();
        content
            .skills
            .push(SkillCategory::new("Learning", Vec::<String>::new()));
        assert!(content.validate().is_ok());
    }

    #[test]
    fn test_nested_project_validation() {
        let mut content = PortfolioContent::default();
        content.projects[1].title.clear();
        assert!(content.validate().is_err());
    }

    #[test]
    fn test_from_json_round_trip_of_default() {
        let json = serde_json::to_string(&PortfolioContent::default()).unwrap();
        let parsed = PortfolioContent::from_json(&json).unwrap();
        assert_eq!(parsed, PortfolioContent::default());
    }

    #[test]
    fn test_from_json_rejects_invalid_content() {
        let mut value = serde_json::to_value(PortfolioContent::default()).unwrap();
        value["profile"]["email"] = serde_json::json!("");

        let result = PortfolioContent::from_json(&value.to_string());
        assert!(matches!(result, Err(ContentError::Invalid(_))));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let result = PortfolioContent::from_json("{ not json");
        assert!(matches!(result, Err(ContentError::Parse(_))));
    }

    #[test]
    fn test_from_json_file_missing() {
        let result = PortfolioContent::from_json_file("/definitely/not/here.json");
        assert!(matches!(result, Err(ContentError::Io(_))));
    }
}
