//! Built-in demo fixtures. `telechat fixtures` prints these as JSON.

use std::collections::HashMap;

use crate::common::types::{
    Attachment, Contact, Conversation, ConversationKind, DeliveryState, GalleryItem, Message,
    ReplyRef, SavedKind, SavedMessage, StoryItem, StoryUser,
};

use super::ChatStore;

// Recency anchor for the seeded feed; only relative order matters.
const NOW: i64 = 1_758_000_000;

fn conversation(
    id: &str,
    name: &str,
    kind: ConversationKind,
    last_message: &str,
    timestamp: &str,
    last_activity: i64,
) -> Conversation {
    Conversation {
        id: id.to_string(),
        name: name.to_string(),
        avatar: None,
        kind,
        unread_count: 0,
        is_muted: false,
        last_message: last_message.to_string(),
        timestamp: timestamp.to_string(),
        last_activity,
        last_message_status: None,
    }
}

fn direct_kind(
    is_online: bool,
    last_seen: Option<&str>,
    bio: Option<&str>,
    username: Option<&str>,
    phone: Option<&str>,
) -> ConversationKind {
    ConversationKind::Direct {
        is_online,
        last_seen: last_seen.map(str::to_string),
        bio: bio.map(str::to_string),
        username: username.map(str::to_string),
        phone: phone.map(str::to_string),
    }
}

fn incoming(id: &str, conversation_id: &str, content: &str, sent_at: &str, sender: &str) -> Message {
    Message {
        id: id.to_string(),
        conversation_id: conversation_id.to_string(),
        content: content.to_string(),
        sent_at: sent_at.to_string(),
        is_own: false,
        sender_name: Some(sender.to_string()),
        sender_avatar: None,
        delivery_state: None,
        attachment: None,
        reply_to: None,
    }
}

fn outgoing(
    id: &str,
    conversation_id: &str,
    content: &str,
    sent_at: &str,
    state: DeliveryState,
) -> Message {
    Message {
        id: id.to_string(),
        conversation_id: conversation_id.to_string(),
        content: content.to_string(),
        sent_at: sent_at.to_string(),
        is_own: true,
        sender_name: None,
        sender_avatar: None,
        delivery_state: Some(state),
        attachment: None,
        reply_to: None,
    }
}

fn story(id: &str, content: &str, timestamp: &str, color: [u8; 3]) -> StoryItem {
    StoryItem {
        id: id.to_string(),
        content: Some(content.to_string()),
        image_url: None,
        color: Some(color),
        timestamp: timestamp.to_string(),
    }
}

pub fn seed() -> ChatStore {
    let mut conversations = vec![
        Conversation {
            unread_count: 3,
            last_message_status: Some(DeliveryState::Delivered),
            ..conversation(
                "1",
                "Alice Johnson",
                direct_kind(
                    true,
                    None,
                    Some("Software developer. Coffee enthusiast."),
                    Some("alice_dev"),
                    Some("+1 234 567 8900"),
                ),
                "Hey! Are you coming to the party tonight?",
                "2:34 PM",
                NOW,
            )
        },
        Conversation {
            last_message_status: Some(DeliveryState::Read),
            ..conversation(
                "3",
                "Bob Smith",
                direct_kind(
                    false,
                    Some("last seen 2h ago"),
                    Some("Full-stack developer. Open source contributor."),
                    Some("bob_codes"),
                    None,
                ),
                "Thanks for your help with the code review!",
                "Yesterday",
                NOW - 86_400,
            )
        },
        Conversation {
            last_message_status: Some(DeliveryState::Read),
            ..conversation(
                "4",
                "Carol White",
                direct_kind(true, None, Some("UX Designer. Cat mom."), Some("carol_ux"), None),
                "See you at the meeting tomorrow!",
                "Yesterday",
                NOW - 90_000,
            )
        },
        Conversation {
            last_message_status: Some(DeliveryState::Read),
            ..conversation(
                "6",
                "David Brown",
                direct_kind(false, Some("last seen yesterday"), None, None, None),
                "The concert was amazing!",
                "Sun",
                NOW - 430_000,
            )
        },
        Conversation {
            last_message_status: Some(DeliveryState::Delivered),
            ..conversation(
                "7",
                "Eva Green",
                direct_kind(true, None, None, None, None),
                "Happy birthday!",
                "Sat",
                NOW - 520_000,
            )
        },
        Conversation {
            unread_count: 12,
            ..conversation(
                "2",
                "Team Project",
                ConversationKind::Group { member_count: 8 },
                "Sarah: The presentation is ready for review",
                "1:15 PM",
                NOW - 4_700,
            )
        },
        Conversation {
            unread_count: 5,
            ..conversation(
                "5",
                "Family Group",
                ConversationKind::Group { member_count: 6 },
                "Mom: Don't forget Sunday dinner!",
                "Mon",
                NOW - 340_000,
            )
        },
        conversation(
            "g3",
            "College Friends",
            ConversationKind::Group { member_count: 15 },
            "Jake: Reunion next month?",
            "Tue",
            NOW - 250_000,
        ),
        conversation(
            "g4",
            "Book Club",
            ConversationKind::Group { member_count: 8 },
            "Next read: The Great Gatsby",
            "Wed",
            NOW - 160_000,
        ),
    ];

    conversations.extend([
        conversation(
            "ch1",
            "Tech News Daily",
            ConversationKind::Channel {
                description: "Latest technology news and updates".to_string(),
                subscriber_count: 125_000,
                is_subscribed: true,
                is_verified: true,
                last_post: Some("Apple announces new MacBook Pro with M4 chip".to_string()),
                last_post_time: Some("1h ago".to_string()),
            },
            "Apple announces new MacBook Pro with M4 chip",
            "1h ago",
            0,
        ),
        conversation(
            "ch2",
            "Crypto Updates",
            ConversationKind::Channel {
                description: "Cryptocurrency market analysis and news".to_string(),
                subscriber_count: 89_000,
                is_subscribed: false,
                is_verified: true,
                last_post: Some("Bitcoin reaches new all-time high".to_string()),
                last_post_time: None,
            },
            "Bitcoin reaches new all-time high",
            "",
            0,
        ),
        conversation(
            "ch3",
            "Design Inspiration",
            ConversationKind::Channel {
                description: "Daily design inspiration and resources".to_string(),
                subscriber_count: 45_000,
                is_subscribed: true,
                is_verified: false,
                last_post: Some("10 UI trends for 2025".to_string()),
                last_post_time: None,
            },
            "10 UI trends for 2025",
            "",
            0,
        ),
        conversation(
            "ch4",
            "Startup Hub",
            ConversationKind::Channel {
                description: "Startup news, funding updates, and tips".to_string(),
                subscriber_count: 67_000,
                is_subscribed: false,
                is_verified: true,
                last_post: Some("Series A funding tips from YC partners".to_string()),
                last_post_time: None,
            },
            "Series A funding tips from YC partners",
            "",
            0,
        ),
    ]);

    let bot = |id: &str,
               name: &str,
               username: &str,
               description: &str,
               category: &str,
               is_verified: bool,
               rating: f32,
               users_count: u64| {
        conversation(
            id,
            name,
            ConversationKind::Bot {
                username: username.to_string(),
                description: description.to_string(),
                category: category.to_string(),
                is_verified,
                rating: Some(rating),
                users_count: Some(users_count),
            },
            "",
            "",
            0,
        )
    };
    conversations.extend([
        bot(
            "b1",
            "GPT Assistant",
            "gpt_helper",
            "AI-powered assistant for answering questions and helping with tasks",
            "AI & Productivity",
            true,
            4.8,
            500_000,
        ),
        bot(
            "b2",
            "Weather Bot",
            "weather_now",
            "Get real-time weather updates for any location",
            "Utilities",
            false,
            4.5,
            120_000,
        ),
        bot(
            "b3",
            "Translate Bot",
            "translator",
            "Translate text between 100+ languages instantly",
            "AI & Productivity",
            true,
            4.7,
            300_000,
        ),
        bot(
            "b4",
            "Quiz Master",
            "quiz_bot",
            "Test your knowledge with fun trivia quizzes",
            "Games",
            false,
            4.3,
            80_000,
        ),
        bot(
            "b5",
            "Reminder Bot",
            "remind_me",
            "Set reminders and never forget important tasks",
            "Utilities",
            false,
            4.6,
            200_000,
        ),
    ]);

    let mut messages: HashMap<String, Vec<Message>> = HashMap::new();
    messages.insert(
        "1".to_string(),
        vec![
            incoming("m1", "1", "Hey! How's it going?", "2:30 PM", "Alice"),
            outgoing(
                "m2",
                "1",
                "Pretty good! Just finished that project.",
                "2:31 PM",
                DeliveryState::Read,
            ),
            incoming("m3", "1", "Nice! We should celebrate", "2:32 PM", "Alice"),
            Message {
                attachment: Some(Attachment::Image {
                    url: "https://picsum.photos/seed/venue/640/480".to_string(),
                    caption: Some("Look at this venue!".to_string()),
                }),
                ..incoming("m13", "1", "", "2:33 PM", "Alice")
            },
            incoming("m4", "1", "Are you coming to the party tonight?", "2:34 PM", "Alice"),
        ],
    );
    messages.insert(
        "2".to_string(),
        vec![
            incoming(
                "m5",
                "2",
                "Team, I've updated the project timeline.",
                "12:00 PM",
                "Mike",
            ),
            Message {
                attachment: Some(Attachment::Link {
                    url: "https://docs.example.com/timeline".to_string(),
                    title: "Q3 Project Timeline".to_string(),
                    description: Some("Milestones and owners for the release".to_string()),
                }),
                ..incoming("m14", "2", "", "12:02 PM", "Mike")
            },
            outgoing("m6", "2", "Looks good to me!", "12:15 PM", DeliveryState::Read),
            incoming("m7", "2", "I'll review the changes today.", "12:45 PM", "Sarah"),
            incoming(
                "m8",
                "2",
                "The presentation is ready for review",
                "1:15 PM",
                "Sarah",
            ),
            Message {
                attachment: Some(Attachment::Gallery {
                    items: vec![
                        GalleryItem::Image {
                            url: "https://picsum.photos/seed/slide1/480/320".to_string(),
                        },
                        GalleryItem::Image {
                            url: "https://picsum.photos/seed/slide2/480/320".to_string(),
                        },
                        GalleryItem::Video {
                            url: "https://cdn.example.com/walkthrough.mp4".to_string(),
                            duration_secs: 95,
                        },
                    ],
                }),
                ..incoming("m15", "2", "Slides preview", "1:16 PM", "Sarah")
            },
        ],
    );
    messages.insert(
        "3".to_string(),
        vec![
            incoming(
                "m9",
                "3",
                "Can you help me with this code review?",
                "Yesterday",
                "Bob",
            ),
            outgoing(
                "m10",
                "3",
                "Sure! Send me the PR link",
                "Yesterday",
                DeliveryState::Read,
            ),
            Message {
                attachment: Some(Attachment::Audio {
                    url: "https://cdn.example.com/voice-note.ogg".to_string(),
                    duration_secs: 42,
                    file_size_bytes: Some(356_000),
                }),
                ..incoming("m16", "3", "", "Yesterday", "Bob")
            },
            Message {
                reply_to: Some(ReplyRef {
                    sender_name: "You".to_string(),
                    snippet: "Sure! Send me the PR link".to_string(),
                }),
                ..incoming("m11", "3", "Done! Take a look when you can", "Yesterday", "Bob")
            },
            incoming(
                "m12",
                "3",
                "Thanks for your help with the code review!",
                "Yesterday",
                "Bob",
            ),
        ],
    );
    messages.insert(
        "ch1".to_string(),
        vec![Message {
            attachment: Some(Attachment::Video {
                url: "https://cdn.example.com/m4-keynote.mp4".to_string(),
                duration_secs: 180,
                view_count: Some(48_200),
            }),
            ..incoming(
                "m17",
                "ch1",
                "Apple announces new MacBook Pro with M4 chip",
                "1h ago",
                "Tech News Daily",
            )
        }],
    );

    let contact = |id: &str, name: &str, is_online: bool, last_seen: Option<&str>| Contact {
        id: id.to_string(),
        name: name.to_string(),
        avatar: None,
        is_online,
        last_seen: last_seen.map(str::to_string),
    };
    let contacts = vec![
        contact("1", "Alice Johnson", true, None),
        contact("3", "Bob Smith", false, Some("last seen 2h ago")),
        contact("4", "Carol White", true, None),
        contact("6", "David Brown", false, Some("last seen yesterday")),
        contact("7", "Eva Green", true, None),
        contact("8", "Frank Miller", false, Some("last seen 3d ago")),
        contact("9", "Grace Lee", true, None),
    ];

    let story_user = |id: &str, name: &str, is_viewed: bool| StoryUser {
        id: id.to_string(),
        name: name.to_string(),
        avatar: None,
        is_viewed,
    };
    // David and Eva stay in the roster without content; the viewer skips them.
    let story_roster = vec![
        story_user("1", "Alice Johnson", false),
        story_user("3", "Bob Smith", true),
        story_user("4", "Carol White", false),
        story_user("6", "David Brown", false),
        story_user("7", "Eva Green", true),
    ];

    let mut stories: HashMap<String, Vec<StoryItem>> = HashMap::new();
    stories.insert(
        "1".to_string(),
        vec![
            story("us1", "Just finished my morning workout!", "2h ago", [74, 222, 128]),
            story("us2", "Coffee time", "4h ago", [251, 146, 60]),
        ],
    );
    stories.insert(
        "3".to_string(),
        vec![story("us3", "Working on something exciting!", "5h ago", [167, 139, 250])],
    );
    stories.insert(
        "4".to_string(),
        vec![story("us4", "New design coming soon!", "1h ago", [244, 114, 182])],
    );

    let saved_message =
        |id: &str, content: &str, from: &str, chat: &str, timestamp: &str, kind: SavedKind| {
            SavedMessage {
                id: id.to_string(),
                content: content.to_string(),
                from_name: from.to_string(),
                from_avatar: None,
                chat_name: chat.to_string(),
                timestamp: timestamp.to_string(),
                saved_kind: kind,
            }
        };
    let saved = vec![
        saved_message(
            "sm1",
            "Here's the link to the project documentation you asked for",
            "Alice Johnson",
            "Alice Johnson",
            "Yesterday",
            SavedKind::Link,
        ),
        saved_message(
            "sm2",
            "Meeting notes from today's standup",
            "Bob Smith",
            "Team Project",
            "2 days ago",
            SavedKind::Text,
        ),
        saved_message(
            "sm3",
            "Check out this design mockup",
            "Carol White",
            "Design Team",
            "3 days ago",
            SavedKind::Image,
        ),
    ];

    ChatStore {
        conversations,
        messages,
        contacts,
        story_roster,
        stories,
        saved,
    }
}
