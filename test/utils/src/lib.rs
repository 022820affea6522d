/// Creation response for a first post, with no similar posts yet.
pub fn create_post_response_fixture() -> &'static str {
    return r#"
{
    "session_id": "abc123",
    "ai_response": "That's wonderful to hear!",
    "similar_posts": [],
    "suggestions": ["Try journaling more"]
}
"#
    .trim();
}

/// Creation response carrying two similar posts and two suggestions.
pub fn create_post_response_with_similar_fixture() -> &'static str {
    return r#"
{
    "post_id": "p9",
    "session_id": "xyz789",
    "ai_response": "It sounds like a heavy day.",
    "similar_posts": [
        {
            "post_id": "p1",
            "content": "Could not sleep again",
            "emotion": "sad",
            "timestamp": "2024-03-05T10:15:00.123456",
            "upvotes": 2
        },
        {
            "post_id": "p2",
            "content": "Everything <b>feels</b> slow",
            "emotion": "sad",
            "timestamp": "2024-03-06T08:00:00",
            "upvotes": 0
        }
    ],
    "suggestions": [
        "Try the 5-4-3-2-1 grounding technique",
        "A short walk might help clear your mind"
    ]
}
"#
    .trim();
}

/// Listing of three posts, the last one without an emotion or vote count.
pub fn posts_fixture() -> &'static str {
    return r#"
[
    {
        "post_id": "p1",
        "content": "Got the job!",
        "emotion": "happy",
        "timestamp": "2024-03-05T10:15:00.123456",
        "upvotes": 5
    },
    {
        "post_id": "p2",
        "content": "Missing home",
        "emotion": "sad",
        "timestamp": "2024-03-04T21:40:00",
        "upvotes": 1
    },
    {
        "post_id": "p3",
        "content": "Just a regular day",
        "timestamp": "2024-03-03T09:00:00"
    }
]
"#
    .trim();
}
