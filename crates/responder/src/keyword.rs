//! Keyword-matched response generation

use async_trait::async_trait;
use rand::seq::SliceRandom;

use threadtalk_core::{ResponseContext, ResponseGenerator, Result};

use crate::templates;

/// Conversation length beyond which unmatched messages get the
/// follow-up reply instead of a generic acknowledgement.
const FOLLOW_UP_THRESHOLD: usize = 4;

/// The placeholder response policy.
///
/// Checks the message for topical keywords in a fixed priority order
/// (first match wins), falls back to a follow-up reply once the
/// conversation has accumulated, and otherwise picks uniformly from a
/// generic acknowledgement pool. Never errors for well-formed input.
#[derive(Debug, Default)]
pub struct KeywordResponder;

impl KeywordResponder {
    pub fn new() -> Self {
        Self
    }
}

fn contains_any(message: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| message.contains(k))
}

#[async_trait]
impl ResponseGenerator for KeywordResponder {
    async fn generate(&self, message: &str, ctx: &ResponseContext) -> Result<String> {
        let post = match ctx.post.as_ref() {
            Some(post) => post,
            None => return Ok(templates::NO_POST_GUIDANCE.to_string()),
        };

        let lower = message.to_lowercase();

        if contains_any(&lower, &["summary", "summarize"]) {
            return Ok(templates::summary_reply(post));
        }

        if contains_any(&lower, &["viewpoint", "opinion", "perspective"]) {
            let reply = match post.viewpoints.choose(&mut rand::thread_rng()) {
                Some(viewpoint) => templates::viewpoint_reply(viewpoint),
                None => templates::NO_VIEWPOINTS_REPLY.to_string(),
            };
            return Ok(reply);
        }

        if contains_any(&lower, &["detail", "more", "explain"]) {
            return Ok(templates::detail_reply(post));
        }

        if contains_any(&lower, &["argument", "debate"]) {
            if post.viewpoints.is_empty() {
                return Ok(templates::NO_VIEWPOINTS_REPLY.to_string());
            }
            return Ok(templates::argument_reply(post));
        }

        if contains_any(&lower, &["implication", "impact"]) {
            return Ok(templates::IMPLICATION_REPLY.to_string());
        }

        if ctx.message_count > FOLLOW_UP_THRESHOLD {
            return Ok(templates::follow_up_reply(post));
        }

        let pool = templates::acknowledgement_pool(post);
        let reply = pool
            .choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_else(|| pool[0].clone());
        Ok(reply)
    }
}
