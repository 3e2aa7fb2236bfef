/// Actions the UI hands off to the collaborator service.
///
/// Every action that the interface exposes but the demo does not implement
/// locally becomes a named command here instead of a hardcoded log call in
/// a component.
#[derive(Debug, Clone)]
pub enum ServiceCommand {
    CreateGroup {
        member_ids: Vec<String>,
        name: String,
    },
    CreateChannel,
    StartBot {
        bot_id: String,
    },
    AddStory,
    StoryReply {
        user_id: String,
        text: String,
    },
    StoryLike {
        user_id: String,
    },
    ToggleMute {
        conversation_id: String,
    },
    AddContact {
        conversation_id: String,
    },
    BlockUser {
        conversation_id: String,
    },
    DeleteChat {
        conversation_id: String,
    },
    Call {
        conversation_id: String,
        video: bool,
    },
    PickAttachment,
    OpenEmojiPicker,
    RecordVoice,
    OpenSettings,
    /// Emitted after a message is appended locally so the service can echo
    /// a delivery update back.
    MessageSent {
        conversation_id: String,
        message_id: String,
    },
}
