//! Reply templates for the keyword rule table

use threadtalk_core::RedditPost;

/// Reply when no post is selected
pub(crate) const NO_POST_GUIDANCE: &str =
    "I don't have a Reddit post loaded to discuss. Please share a Reddit URL first.";

/// Generic acknowledgements used when no rule matches a short conversation
pub(crate) fn acknowledgement_pool(post: &RedditPost) -> [String; 4] {
    [
        format!(
            "That's an insightful question about this Reddit discussion. Based on the thread \
             about {}, the community seems divided but engaged.",
            post.title
        ),
        "Interesting point. The Reddit post you shared touches on this topic, and the community \
         responses show there's real depth to this issue."
            .to_string(),
        "Good question. From what I can see in the Reddit discussion, this is exactly the kind \
         of nuanced topic that generates thoughtful debate."
            .to_string(),
        "That's worth exploring further. The original Reddit post and community responses \
         suggest this is a multifaceted issue with valid concerns on different sides."
            .to_string(),
    ]
}

pub(crate) fn summary_reply(post: &RedditPost) -> String {
    format!(
        "Here's a comprehensive summary: {}. This discussion has generated significant interest \
         due to its relevance to current trends and diverse perspectives.",
        post.summary
    )
}

pub(crate) fn viewpoint_reply(viewpoint: &str) -> String {
    format!(
        "One particularly interesting perspective from the discussion is: {}. This viewpoint \
         reflects a broader trend in how people are thinking about this topic.",
        viewpoint
    )
}

/// Fallback for the viewpoint rule when the post carries no viewpoints
pub(crate) const NO_VIEWPOINTS_REPLY: &str =
    "The thread didn't surface clearly distinct viewpoints, but the overall discussion still \
     gives a good sense of where the community stands.";

pub(crate) fn detail_reply(post: &RedditPost) -> String {
    let themes: Vec<&str> = post
        .viewpoints
        .iter()
        .take(2)
        .map(String::as_str)
        .collect();
    format!(
        "Let me elaborate on that. {} The community discussion reveals several key themes: {}. \
         These perspectives highlight the complexity of the issue.",
        post.summary,
        themes.join(", and ")
    )
}

pub(crate) fn argument_reply(post: &RedditPost) -> String {
    format!(
        "The main arguments in this discussion center around different approaches to the topic. \
         {}. These varying viewpoints create a rich dialogue.",
        post.viewpoints.join(". Another perspective suggests ")
    )
}

pub(crate) const IMPLICATION_REPLY: &str =
    "The implications of this discussion are quite significant. Based on the Reddit thread, \
     this could impact how we think about similar issues in the future. The community seems \
     particularly concerned about the long-term effects.";

pub(crate) fn follow_up_reply(post: &RedditPost) -> String {
    format!(
        "That's a great follow-up question. Building on our previous discussion about {}, I \
         think this adds another layer to consider. The Reddit community's insights suggest \
         there are multiple valid approaches to this topic.",
        post.title
    )
}
