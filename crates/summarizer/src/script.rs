//! Podcast-style narration script for a post digest

use threadtalk_core::PostDigest;

/// Transition phrases for the first five viewpoints; later viewpoints
/// reuse the generic connective.
const TRANSITIONS: [&str; 5] = [
    "First, some users argue that",
    "On the other hand, others believe that",
    "Additionally, there's a perspective that",
    "Another interesting take suggests that",
    "Finally, some community members point out that",
];

const GENERIC_TRANSITION: &str = "Another viewpoint suggests that";

/// Build a 60-120 second narration script from a digest.
///
/// The segments are joined with pause markers so the speech adapter
/// leaves natural gaps between them.
pub fn podcast_script(digest: &PostDigest) -> String {
    let intro = format!(
        "Welcome to your personalized Reddit digest. Today we're diving into an interesting \
         discussion titled: {}.",
        digest.title
    );

    let summary = format!("Let me break this down for you. {}", digest.summary);

    let viewpoints_intro = "Now, what makes this discussion particularly fascinating are the \
                            diverse viewpoints from the community.";

    let viewpoints_content = digest
        .viewpoints
        .iter()
        .enumerate()
        .map(|(index, viewpoint)| {
            let transition = TRANSITIONS.get(index).copied().unwrap_or(GENERIC_TRANSITION);
            format!("{} {}", transition, viewpoint.to_lowercase())
        })
        .collect::<Vec<_>>()
        .join(". ");

    let outro = "That's a wrap on today's Reddit digest. These discussions show how complex \
                 and nuanced online conversations can be. Thanks for listening, and keep \
                 exploring!";

    [
        intro.as_str(),
        summary.as_str(),
        viewpoints_intro,
        viewpoints_content.as_str(),
        outro,
    ]
    .join(". ... ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_shape() {
        let digest = PostDigest::new(
            "Test Discussion",
            "A short summary.",
            vec!["View one".to_string(), "View two".to_string()],
        );

        let script = podcast_script(&digest);
        assert!(script.starts_with("Welcome to your personalized Reddit digest"));
        assert!(script.contains("Test Discussion"));
        assert!(script.contains("First, some users argue that view one"));
        assert!(script.contains("On the other hand, others believe that view two"));
        assert!(script.ends_with("keep exploring!"));
    }

    #[test]
    fn test_script_with_no_viewpoints() {
        let digest = PostDigest::new("Empty", "Nothing to see.", vec![]);
        let script = podcast_script(&digest);
        assert!(script.contains("Nothing to see."));
    }

    #[test]
    fn test_sixth_viewpoint_uses_generic_transition() {
        let viewpoints = (1..=6).map(|i| format!("View {i}")).collect();
        let digest = PostDigest::new("Many", "Summary.", viewpoints);

        let script = podcast_script(&digest);
        assert!(script.contains("Another viewpoint suggests that view 6"));
    }
}
