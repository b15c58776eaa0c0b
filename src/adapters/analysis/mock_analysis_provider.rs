//! Fixed demonstration analysis used when no model credential is configured.

use async_trait::async_trait;

use crate::domain::analysis::{
    AffinityGroup, AnalysisResult, CodebookEntry, Motivation, PainPoint, Persona, Recommendation,
    Severity, Theme,
};
use crate::domain::research::ResearchText;
use crate::ports::{AnalysisProvider, UpstreamAnalysisError};

/// Returns the same canned e-commerce analysis for every input.
///
/// The input text is validated upstream and otherwise ignored. Every call
/// yields a value equal to `MockAnalysisProvider::payload()`.
#[derive(Debug, Clone, Default)]
pub struct MockAnalysisProvider;

impl MockAnalysisProvider {
    pub fn new() -> Self {
        Self
    }

    /// The fixed demonstration payload.
    pub fn payload() -> AnalysisResult {
        AnalysisResult {
            pain_points: strings(&[
                "Users struggle to find relevant features quickly in the navigation",
                "The checkout process is too lengthy and confusing, causing cart abandonment",
                "Mobile experience is frustrating with small buttons and text",
                "Lack of clear feedback when actions are completed successfully",
            ])
            .into_iter()
            .map(PainPoint::Text)
            .collect(),
            motivations: strings(&[
                "Users want to complete tasks efficiently without unnecessary steps",
                "They value clear communication and transparency about processes",
                "Mobile-first users expect seamless experiences across devices",
                "Users are motivated by personalized recommendations and content",
            ])
            .into_iter()
            .map(Motivation::Text)
            .collect(),
            themes: vec![
                theme(
                    "Navigation & Information Architecture",
                    &[
                        "I couldn't find what I was looking for even though I knew it existed",
                        "The menu structure doesn't match how I think about these things",
                    ],
                ),
                theme(
                    "Trust & Credibility",
                    &[
                        "I wasn't sure if my order went through - there was no confirmation",
                        "I wanted to see reviews before making a decision but couldn't find them easily",
                    ],
                ),
                theme(
                    "Mobile Experience",
                    &[
                        "The buttons were so small I kept tapping the wrong thing",
                        "I gave up and switched to my laptop because mobile was too frustrating",
                    ],
                ),
            ],
            affinity_groups: vec![
                group(
                    "Usability Issues",
                    &[
                        "Confusing navigation labels",
                        "Small touch targets on mobile",
                        "Unclear error messages",
                        "No search functionality",
                    ],
                ),
                group(
                    "Content & Communication",
                    &[
                        "Missing product information",
                        "No status updates",
                        "Lack of help documentation",
                        "Inconsistent terminology",
                    ],
                ),
                group(
                    "Performance & Speed",
                    &[
                        "Slow page load times",
                        "Delayed search results",
                        "Laggy interactions",
                    ],
                ),
                group(
                    "Trust Signals",
                    &[
                        "No customer reviews visible",
                        "Missing security badges",
                        "Unclear return policy",
                        "No social proof",
                    ],
                ),
            ],
            codebook: vec![
                code(
                    "Navigation Confusion",
                    "Instances where users expressed difficulty finding features, pages, or information due to unclear menu structure, labeling, or information architecture",
                    8,
                    &[
                        "I couldn't find what I was looking for even though I knew it existed",
                        "The menu structure doesn't match how I think about these things",
                        "I kept going in circles trying to find the settings",
                    ],
                    "Usability",
                ),
                code(
                    "Mobile Usability Issues",
                    "Problems specific to mobile device usage including touch target size, responsive design failures, or mobile-specific interaction patterns",
                    6,
                    &[
                        "The buttons were so small I kept tapping the wrong thing",
                        "I gave up and switched to my laptop because mobile was too frustrating",
                        "Text is unreadable on my phone",
                    ],
                    "Usability",
                ),
                code(
                    "Missing Feedback",
                    "Situations where the system failed to provide confirmation, status updates, or acknowledgment of user actions",
                    5,
                    &[
                        "I wasn't sure if my order went through - there was no confirmation",
                        "No indication that my file was uploading",
                        "Clicked the button but nothing happened, no idea if it worked",
                    ],
                    "Usability",
                ),
                code(
                    "Trust Concerns",
                    "Expressed uncertainty, hesitation, or lack of confidence in the system due to missing credibility indicators, unclear policies, or security concerns",
                    4,
                    &[
                        "I wanted to see reviews before making a decision but couldn't find them easily",
                        "No security badges made me worried about entering my credit card",
                        "The return policy was buried, made me not want to buy",
                    ],
                    "Emotional Response",
                ),
                code(
                    "Efficiency Desire",
                    "User expressions of wanting faster, streamlined processes with fewer steps or reduced cognitive load",
                    7,
                    &[
                        "Users want to complete tasks efficiently without unnecessary steps",
                        "Why do I need to fill out so many forms?",
                        "Just let me skip to what I need",
                    ],
                    "User Goals",
                ),
                code(
                    "Information Gaps",
                    "Missing content, unclear instructions, or insufficient detail that prevents users from making informed decisions",
                    5,
                    &[
                        "Missing product information",
                        "No help documentation when I got stuck",
                        "Couldn't find the specs I needed to compare",
                    ],
                    "Content",
                ),
            ],
            personas: vec![
                Persona {
                    name: "Sarah the Busy Professional".to_string(),
                    role: "Primary User - Mobile-First".to_string(),
                    age: "28-35".to_string(),
                    context: None,
                    goals: strings(&[
                        "Complete purchases quickly during breaks",
                        "Find products that match specific needs",
                        "Track orders easily",
                        "Get reliable customer support",
                    ]),
                    frustrations: strings(&[
                        "Too many steps in checkout process",
                        "Can't save preferences for faster reordering",
                        "Mobile site is hard to use",
                        "No way to contact support quickly",
                    ]),
                    behaviors: strings(&[
                        "Primarily shops on mobile device",
                        "Abandons cart if process is too complex",
                        "Reads reviews before purchasing",
                        "Values time-saving features",
                    ]),
                    mental_model: None,
                    quote: "I just want to get in, find what I need, and get out. Every extra click makes me reconsider if I really need this.".to_string(),
                },
                Persona {
                    name: "Mike the Research-Oriented Buyer".to_string(),
                    role: "Secondary User - Desktop".to_string(),
                    age: "35-45".to_string(),
                    context: None,
                    goals: strings(&[
                        "Compare multiple options thoroughly",
                        "Read detailed specifications",
                        "Find the best value for money",
                        "Make informed decisions",
                    ]),
                    frustrations: strings(&[
                        "Difficulty comparing products side-by-side",
                        "Incomplete product information",
                        "No filtering by specific attributes",
                        "Limited search capabilities",
                    ]),
                    behaviors: strings(&[
                        "Spends time researching before buying",
                        "Uses desktop for major purchases",
                        "Reads all available reviews",
                        "Checks competitor sites for comparison",
                    ]),
                    mental_model: None,
                    quote: "I need all the details before I buy. If I can't find the information I need, I'll go somewhere else.".to_string(),
                },
            ],
            recommendations: vec![
                Recommendation {
                    priority: Severity::Critical,
                    issue: "Checkout takes too many steps and users abandon their carts".to_string(),
                    recommendation: "Cut checkout down to a single page with guest checkout and saved payment details".to_string(),
                    principle: Some("Nielsen: Flexibility and efficiency of use".to_string()),
                },
                Recommendation {
                    priority: Severity::High,
                    issue: "Users are never told whether an action worked".to_string(),
                    recommendation: "Show a clear confirmation after every order, upload and save".to_string(),
                    principle: Some("Norman: Feedback".to_string()),
                },
                Recommendation {
                    priority: Severity::Medium,
                    issue: "Touch targets on mobile are too small to hit reliably".to_string(),
                    recommendation: "Make every tappable control at least 44 by 44 points and increase body text size".to_string(),
                    principle: Some("Fitts's Law".to_string()),
                },
            ],
        }
    }
}

#[async_trait]
impl AnalysisProvider for MockAnalysisProvider {
    async fn analyze(&self, text: &ResearchText) -> Result<AnalysisResult, UpstreamAnalysisError> {
        tracing::info!(
            chars = text.char_count(),
            "No model credential configured, returning demonstration analysis"
        );
        Ok(Self::payload())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn theme(name: &str, quotes: &[&str]) -> Theme {
    Theme {
        theme: name.to_string(),
        quotes: strings(quotes),
        principle: None,
    }
}

fn group(category: &str, items: &[&str]) -> AffinityGroup {
    AffinityGroup {
        category: category.to_string(),
        items: strings(items),
    }
}

fn code(name: &str, definition: &str, frequency: u32, examples: &[&str], category: &str) -> CodebookEntry {
    CodebookEntry {
        code: name.to_string(),
        definition: definition.to_string(),
        frequency,
        examples: strings(examples),
        category: Some(category.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn research() -> ResearchText {
        ResearchText::parse("Participant 3 said the checkout flow asked for the same address twice.")
            .unwrap()
    }

    #[tokio::test]
    async fn returns_two_personas_led_by_sarah() {
        let result = MockAnalysisProvider::new().analyze(&research()).await.unwrap();
        assert_eq!(result.personas.len(), 2);
        assert_eq!(result.personas[0].name, "Sarah the Busy Professional");
    }

    #[tokio::test]
    async fn output_does_not_depend_on_input() {
        let provider = MockAnalysisProvider::new();
        let other = ResearchText::parse("x".repeat(400)).unwrap();

        let first = provider.analyze(&research()).await.unwrap();
        let second = provider.analyze(&other).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }

    #[test]
    fn every_code_is_recurring() {
        let payload = MockAnalysisProvider::payload();
        assert_eq!(payload.codebook.len(), 6);
        assert!(payload.codebook.iter().all(|entry| entry.is_recurring()));
    }

    #[test]
    fn payload_shape() {
        let payload = MockAnalysisProvider::payload();
        assert_eq!(payload.pain_points.len(), 4);
        assert_eq!(payload.motivations.len(), 4);
        assert_eq!(payload.themes.len(), 3);
        assert_eq!(payload.affinity_groups.len(), 4);
        assert_eq!(payload.recommendations.len(), 3);
        assert_eq!(payload.recommendations[0].priority, Severity::Critical);
    }

    #[test]
    fn name_is_mock() {
        assert_eq!(MockAnalysisProvider::new().name(), "mock");
    }
}
