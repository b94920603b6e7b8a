//! Canned questions for common portfolio topics

use serde::{Deserialize, Serialize};

/// A shortcut question routed through the failover controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "topic", content = "name", rename_all = "snake_case")]
pub enum Topic {
    /// Details about a single project
    ProjectInfo(String),
    ListProjects,
    SkillsSummary,
    Background,
    CareerAdvice,
    Contact,
    TechRecommendation,
    ProjectRecommendations,
}

impl Topic {
    /// The question sent to the model
    pub fn question(&self) -> String {
        match self {
            Topic::ProjectInfo(name) => {
                format!("Tell me detailed information about the project: {}", name.trim())
            }
            Topic::ListProjects => "List all my projects with their technologies".to_string(),
            Topic::SkillsSummary => {
                "Summarize my technical skills based on my projects".to_string()
            }
            Topic::Background => {
                "Tell me about Abhishek's background, education, and professional journey"
                    .to_string()
            }
            Topic::CareerAdvice => {
                "Based on my portfolio and experience, what career advice would you give me?"
                    .to_string()
            }
            Topic::Contact => {
                "How can someone contact Abhishek or learn more about his work?".to_string()
            }
            Topic::TechRecommendation => {
                "Based on my portfolio, which technologies should I focus on for career growth?"
                    .to_string()
            }
            Topic::ProjectRecommendations => {
                "Based on my current portfolio, what types of projects should I consider working on next?"
                    .to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_info_question() {
        let topic = Topic::ProjectInfo(" Quick Eats ".to_string());
        assert_eq!(
            topic.question(),
            "Tell me detailed information about the project: Quick Eats"
        );
    }

    #[test]
    fn test_fixed_questions() {
        assert_eq!(
            Topic::ListProjects.question(),
            "List all my projects with their technologies"
        );
        assert!(Topic::Contact.question().contains("contact Abhishek"));
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(Topic::ProjectInfo("C-Tutor".into())).unwrap();
        assert_eq!(json["topic"], "project_info");
        assert_eq!(json["name"], "C-Tutor");
    }
}
