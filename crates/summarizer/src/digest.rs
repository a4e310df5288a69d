//! Placeholder summarization backend

use std::time::Duration;

use async_trait::async_trait;
use threadtalk_core::PostDigest;

use crate::url::{extract_post_id, is_valid_reddit_url};
use crate::SummarizeError;

/// Summarization backend: URL in, digest out.
///
/// Treated as an opaque async call with latency; the session engine never
/// sees this trait, only the digest it produces.
#[async_trait]
pub trait Summarizer: Send + Sync + 'static {
    async fn summarize(&self, url: &str) -> Result<PostDigest, SummarizeError>;
}

/// Canned-digest backend with simulated latency.
///
/// The digest is selected by the byte sum of the post id, so the same URL
/// always summarizes to the same digest.
pub struct MockSummarizer {
    latency: Duration,
}

impl MockSummarizer {
    pub fn new() -> Self {
        Self {
            latency: Duration::from_secs(3),
        }
    }

    /// Override the simulated backend latency
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    fn pick(post_id: &str) -> PostDigest {
        let digests = canned_digests();
        let sum: usize = post_id.bytes().map(|b| b as usize).sum();
        let index = sum % digests.len();
        digests.into_iter().nth(index).unwrap_or_else(|| {
            PostDigest::new("Reddit Discussion", "A community discussion.", Vec::new())
        })
    }
}

impl Default for MockSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize(&self, url: &str) -> Result<PostDigest, SummarizeError> {
        if !is_valid_reddit_url(url) {
            return Err(SummarizeError::InvalidUrl(url.to_string()));
        }

        tokio::time::sleep(self.latency).await;

        let post_id = extract_post_id(url);
        tracing::debug!(post_id, "serving canned digest");
        Ok(Self::pick(post_id))
    }
}

fn canned_digests() -> Vec<PostDigest> {
    vec![
        PostDigest::new(
            "The Future of AI Development: Balancing Innovation with Ethics",
            "A comprehensive discussion examining the current state of AI development and its \
             trajectory. The Reddit community explores both the transformative opportunities and \
             significant challenges facing developers, with particular emphasis on ethical AI \
             development, bias mitigation, and the balance between automation and human \
             creativity in programming.",
            vec![
                "AI will revolutionize software development by automating routine coding tasks \
                 and accelerating development cycles"
                    .to_string(),
                "Human creativity, critical thinking, and ethical judgment remain irreplaceable \
                 in programming"
                    .to_string(),
                "The key is finding the right balance between AI assistance and human expertise \
                 to enhance rather than replace developers"
                    .to_string(),
                "Ethical AI development requires transparent algorithms, bias mitigation, and \
                 inclusive development practices"
                    .to_string(),
                "Open-source AI tools democratize development but raise concerns about code \
                 quality and security"
                    .to_string(),
            ],
        ),
        PostDigest::new(
            "Climate Solutions: The Great Technology vs. Policy Debate",
            "An in-depth Reddit discussion analyzing various approaches to addressing climate \
             change. The community examines the ongoing debate between technological innovation \
             and policy interventions, covering renewable energy breakthroughs, carbon capture \
             technologies, nuclear power, and the critical role of government regulation in \
             creating systemic environmental change.",
            vec![
                "Technological innovation alone can solve climate issues through breakthrough \
                 solutions like fusion energy and advanced carbon capture"
                    .to_string(),
                "Policy changes, carbon pricing, and strict regulations are essential for \
                 meaningful environmental progress at scale"
                    .to_string(),
                "A combined approach of aggressive policy and technological innovation creates \
                 the most effective climate strategy"
                    .to_string(),
                "Individual action and corporate responsibility must complement systemic \
                 changes, but can't replace them"
                    .to_string(),
                "Nuclear energy is essential for clean baseload power, despite public concerns \
                 about safety"
                    .to_string(),
            ],
        ),
        PostDigest::new(
            "Remote Work Revolution: Redefining the Future of Employment",
            "A comprehensive Reddit discussion exploring how remote work has fundamentally \
             transformed workplace culture post-pandemic. The community examines its \
             multifaceted effects on employee productivity, team collaboration, company \
             culture, mental health, and work-life balance, featuring insights from employees, \
             managers, and business owners across various industries.",
            vec![
                "Remote work significantly increases productivity, reduces commute stress, and \
                 improves work-life balance for most employees"
                    .to_string(),
                "In-person collaboration is essential for creativity, mentorship, and building \
                 strong team relationships"
                    .to_string(),
                "Hybrid models offer the optimal balance of remote flexibility and office \
                 interaction for different work types"
                    .to_string(),
                "The future of work requires new management approaches, digital collaboration \
                 tools, and performance metrics"
                    .to_string(),
                "Remote work creates geographic inequality, with some areas losing talent while \
                 others struggle with housing costs"
                    .to_string(),
            ],
        ),
        PostDigest::new(
            "Social Media's Mental Health Crisis: A Generation Under Pressure",
            "A thoughtful Reddit discussion examining the complex relationship between social \
             media usage and mental health, particularly among Gen Z and millennials. The \
             community explores both the benefits of digital connection and community building, \
             alongside the concerning rise in anxiety, depression, and body image issues linked \
             to algorithm-driven social platforms.",
            vec![
                "Social media creates unrealistic expectations, comparison culture, and FOMO \
                 that significantly harm mental health"
                    .to_string(),
                "Digital platforms provide valuable community, support networks, and connection \
                 for marginalized groups"
                    .to_string(),
                "Algorithm-driven content feeds are designed to be addictive and exploit \
                 psychological vulnerabilities"
                    .to_string(),
                "Digital literacy education and mindful usage practices are key to healthy \
                 social media relationships"
                    .to_string(),
                "Platform regulation and design changes are needed to prioritize user wellbeing \
                 over engagement metrics"
                    .to_string(),
            ],
        ),
        PostDigest::new(
            "The Global Housing Crisis: Causes, Consequences, and Solutions",
            "An extensive Reddit analysis of the housing affordability crisis affecting major \
             cities worldwide. The discussion covers the complex interplay of factors including \
             rising prices, supply shortages, investment speculation, zoning restrictions, and \
             various proposed solutions ranging from zoning reform and rent control to social \
             housing programs and speculation taxes.",
            vec![
                "Restrictive zoning laws, NIMBY policies, and excessive regulations artificially \
                 limit housing supply and drive up costs"
                    .to_string(),
                "Investment speculation, corporate ownership, and treating housing as a \
                 commodity drive up prices unfairly"
                    .to_string(),
                "Government intervention through rent control, social housing, and tenant \
                 protections is necessary to ensure affordability"
                    .to_string(),
                "Market-based solutions, streamlined permitting, and massive construction \
                 increases are the only long-term answer"
                    .to_string(),
                "The crisis requires coordinated policy addressing supply, speculation, wages, \
                 and urban planning simultaneously"
                    .to_string(),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick() -> MockSummarizer {
        MockSummarizer::new().with_latency(Duration::from_millis(0))
    }

    #[tokio::test]
    async fn test_invalid_url_rejected() {
        let result = quick().summarize("https://example.com/post").await;
        assert!(matches!(result, Err(SummarizeError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_same_url_same_digest() {
        let summarizer = quick();
        let url = "https://www.reddit.com/r/rust/comments/abc123/borrow_checker";

        let first = summarizer.summarize(url).await.unwrap();
        let second = summarizer.summarize(url).await.unwrap();
        assert_eq!(first, second);
        assert!(!first.title.is_empty());
        assert_eq!(first.viewpoints.len(), 5);
    }

    #[tokio::test]
    async fn test_different_ids_can_differ() {
        let summarizer = quick();

        let a = summarizer
            .summarize("https://reddit.com/r/rust/comments/a/t")
            .await
            .unwrap();
        let b = summarizer
            .summarize("https://reddit.com/r/rust/comments/b/t")
            .await
            .unwrap();
        // Adjacent ids land on adjacent pool entries.
        assert_ne!(a.title, b.title);
    }
}
