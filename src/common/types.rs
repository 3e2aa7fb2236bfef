use serde::{Deserialize, Serialize};

/// Delivery progress of an own message. Meaningless on incoming messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryState {
    Sent,
    Delivered,
    Read,
}

/// Back-reference to a quoted message, by display values only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyRef {
    pub sender_name: String,
    pub snippet: String,
}

/// One image or video entry inside a gallery attachment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GalleryItem {
    Image { url: String },
    Video { url: String, duration_secs: u32 },
}

/// Media or link payload attached to a message.
///
/// URLs are opaque display strings; nothing is fetched or validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Attachment {
    Image {
        url: String,
        caption: Option<String>,
    },
    Video {
        url: String,
        duration_secs: u32,
        view_count: Option<u64>,
    },
    Audio {
        url: String,
        duration_secs: u32,
        file_size_bytes: Option<u64>,
    },
    Link {
        url: String,
        title: String,
        description: Option<String>,
    },
    Gallery {
        items: Vec<GalleryItem>,
    },
}

impl Attachment {
    /// Short label used for chat-list previews ("Photo", "Video", ...).
    pub fn label(&self) -> &'static str {
        match self {
            Attachment::Image { .. } => "Photo",
            Attachment::Video { .. } => "Video",
            Attachment::Audio { .. } => "Audio",
            Attachment::Link { .. } => "Link",
            Attachment::Gallery { .. } => "Album",
        }
    }
}

/// A single chat entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Opaque stable identifier. No ordering is inferred from it.
    pub id: String,
    pub conversation_id: String,
    /// May be empty when only an attachment is present.
    pub content: String,
    /// Display-formatted timestamp. Treated as opaque text, never sorted.
    pub sent_at: String,
    pub is_own: bool,
    pub sender_name: Option<String>,
    pub sender_avatar: Option<String>,
    pub delivery_state: Option<DeliveryState>,
    pub attachment: Option<Attachment>,
    pub reply_to: Option<ReplyRef>,
}

impl Message {
    /// Builds a freshly authored own message, stamped with the local time.
    pub fn own(conversation_id: &str, content: String, reply_to: Option<ReplyRef>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            conversation_id: conversation_id.to_string(),
            content,
            sent_at: chrono::Local::now().format("%H:%M").to_string(),
            is_own: true,
            sender_name: None,
            sender_avatar: None,
            delivery_state: Some(DeliveryState::Sent),
            attachment: None,
            reply_to,
        }
    }

    /// Text shown in list previews: the body, or the attachment label.
    pub fn preview(&self) -> String {
        if !self.content.is_empty() {
            self.content.clone()
        } else if let Some(att) = &self.attachment {
            att.label().to_string()
        } else {
            String::new()
        }
    }
}

/// Per-kind fields of a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConversationKind {
    Direct {
        is_online: bool,
        last_seen: Option<String>,
        bio: Option<String>,
        username: Option<String>,
        phone: Option<String>,
    },
    Group {
        member_count: u32,
    },
    Channel {
        description: String,
        subscriber_count: u64,
        is_subscribed: bool,
        is_verified: bool,
        last_post: Option<String>,
        last_post_time: Option<String>,
    },
    Bot {
        username: String,
        description: String,
        category: String,
        is_verified: bool,
        rating: Option<f32>,
        users_count: Option<u64>,
    },
}

/// Any addressable chat context: direct chat, group, channel, or bot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
    pub kind: ConversationKind,
    pub unread_count: u32,
    pub is_muted: bool,
    /// Preview of the most recent message, display text only.
    pub last_message: String,
    /// Display-formatted recency ("2:34 PM", "Yesterday", ...).
    pub timestamp: String,
    /// Unix-epoch recency key; orders the "All" feed, newest first.
    pub last_activity: i64,
    pub last_message_status: Option<DeliveryState>,
}

impl Conversation {
    pub fn is_direct(&self) -> bool {
        matches!(self.kind, ConversationKind::Direct { .. })
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind, ConversationKind::Group { .. })
    }
}

/// Entry in the new-chat dialog roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
    pub is_online: bool,
    pub last_seen: Option<String>,
}

/// Story roster entry. Content lives separately, keyed by user id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryUser {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
    pub is_viewed: bool,
}

/// One ephemeral story frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryItem {
    pub id: String,
    pub content: Option<String>,
    pub image_url: Option<String>,
    /// Backdrop base colour; rendered as a vertical gradient.
    pub color: Option<[u8; 3]>,
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavedKind {
    Text,
    Image,
    File,
    Link,
}

/// A bookmarked message. Lives in its own list, separate from threads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedMessage {
    pub id: String,
    pub content: String,
    pub from_name: String,
    pub from_avatar: Option<String>,
    pub chat_name: String,
    pub timestamp: String,
    pub saved_kind: SavedKind,
}
