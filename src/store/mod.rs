//! In-memory application data, seeded wholesale at startup.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::common::types::{
    Contact, Conversation, ConversationKind, DeliveryState, Message, ReplyRef, SavedMessage,
    StoryItem, StoryUser,
};
use crate::config::AppConfig;

mod seed;

pub use seed::seed;

/// Owns every conversation, thread, contact, story, and saved message.
///
/// Constructed once in `main` and passed by reference to the UI; there is
/// no ambient global state. Threads are insertion-ordered vectors keyed by
/// conversation id, and insertion order is assumed to be display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatStore {
    pub conversations: Vec<Conversation>,
    pub messages: HashMap<String, Vec<Message>>,
    pub contacts: Vec<Contact>,
    pub story_roster: Vec<StoryUser>,
    pub stories: HashMap<String, Vec<StoryItem>>,
    pub saved: Vec<SavedMessage>,
}

impl ChatStore {
    pub fn conversation(&self, id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    pub fn conversation_mut(&mut self, id: &str) -> Option<&mut Conversation> {
        self.conversations.iter_mut().find(|c| c.id == id)
    }

    /// Thread for a conversation; empty slice when none exists yet.
    pub fn messages_for(&self, conversation_id: &str) -> &[Message] {
        self.messages
            .get(conversation_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Appends an own message and refreshes the conversation's preview.
    /// Returns the new message's id.
    pub fn send_message(
        &mut self,
        conversation_id: &str,
        content: String,
        reply_to: Option<ReplyRef>,
    ) -> String {
        let message = Message::own(conversation_id, content, reply_to);
        let id = message.id.clone();
        self.append_message(message);
        id
    }

    /// Appends a message to its thread, creating the thread if needed, and
    /// updates the owning conversation's preview fields when it exists.
    pub fn append_message(&mut self, message: Message) {
        let preview = message.preview();
        let sent_at = message.sent_at.clone();
        let status = message.delivery_state;
        let conversation_id = message.conversation_id.clone();
        let front = self
            .conversations
            .iter()
            .map(|c| c.last_activity)
            .max()
            .unwrap_or(0)
            + 1;

        self.messages
            .entry(conversation_id.clone())
            .or_default()
            .push(message);

        if let Some(conversation) = self.conversation_mut(&conversation_id) {
            conversation.last_message = preview;
            conversation.timestamp = sent_at;
            conversation.last_message_status = status;
            conversation.last_activity = front;
        }
    }

    /// Updates the delivery state of an own message, and the conversation
    /// preview tick when the message is still the latest one. Unknown ids
    /// are ignored.
    pub fn set_delivery_state(
        &mut self,
        conversation_id: &str,
        message_id: &str,
        state: DeliveryState,
    ) {
        let Some(thread) = self.messages.get_mut(conversation_id) else {
            return;
        };
        let is_latest = thread.last().is_some_and(|m| m.id == message_id);
        let Some(message) = thread.iter_mut().find(|m| m.id == message_id) else {
            return;
        };
        if !message.is_own {
            return;
        }
        message.delivery_state = Some(state);
        if is_latest {
            if let Some(conversation) = self.conversation_mut(conversation_id) {
                conversation.last_message_status = Some(state);
            }
        }
    }

    /// Direct chats and groups, sorted most recently active first.
    pub fn recent_feed(&self) -> Vec<&Conversation> {
        let mut feed: Vec<&Conversation> = self
            .conversations
            .iter()
            .filter(|c| c.is_direct() || c.is_group())
            .collect();
        feed.sort_by_key(|c| std::cmp::Reverse(c.last_activity));
        feed
    }

    pub fn groups(&self) -> impl Iterator<Item = &Conversation> {
        self.conversations.iter().filter(|c| c.is_group())
    }

    pub fn channels(&self) -> impl Iterator<Item = &Conversation> {
        self.conversations
            .iter()
            .filter(|c| matches!(c.kind, ConversationKind::Channel { .. }))
    }

    pub fn bots(&self) -> impl Iterator<Item = &Conversation> {
        self.conversations
            .iter()
            .filter(|c| matches!(c.kind, ConversationKind::Bot { .. }))
    }

    /// Flips the subscription flag of a channel. No-op on anything else.
    pub fn toggle_subscription(&mut self, conversation_id: &str) {
        if let Some(conversation) = self.conversation_mut(conversation_id) {
            if let ConversationKind::Channel { is_subscribed, .. } = &mut conversation.kind {
                *is_subscribed = !*is_subscribed;
            }
        }
    }

    pub fn remove_saved(&mut self, saved_id: &str) {
        self.saved.retain(|m| m.id != saved_id);
    }

    pub fn stories_for(&self, user_id: &str) -> &[StoryItem] {
        self.stories
            .get(user_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Roster entries that actually own story content, in roster order.
    /// Users with an empty or missing story list are skipped.
    pub fn story_users_with_content(&self) -> Vec<&StoryUser> {
        self.story_roster
            .iter()
            .filter(|u| !self.stories_for(&u.id).is_empty())
            .collect()
    }

    pub fn mark_story_viewed(&mut self, user_id: &str) {
        if let Some(user) = self.story_roster.iter_mut().find(|u| u.id == user_id) {
            user.is_viewed = true;
        }
    }
}

/// Builds the store from the configured fixtures file, or from the built-in
/// seed when no file is configured or it cannot be used.
pub fn load_or_seed(config: &AppConfig) -> ChatStore {
    let Some(path) = &config.fixtures_path else {
        return seed();
    };
    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<ChatStore>(&content) {
            Ok(store) => store,
            Err(err) => {
                log::warn!("Failed to parse fixtures file {path}: {err}");
                seed()
            }
        },
        Err(err) => {
            log::warn!("Failed to read fixtures file {path}: {err}");
            seed()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_messages_reference_existing_conversations() {
        let store = seed();
        for conversation_id in store.messages.keys() {
            assert!(
                store.conversation(conversation_id).is_some(),
                "thread {conversation_id} has no conversation"
            );
        }
    }

    #[test]
    fn send_message_appends_and_updates_preview() {
        let mut store = seed();
        let before = store.messages_for("1").len();
        store.send_message("1", "hello there".to_string(), None);
        assert_eq!(store.messages_for("1").len(), before + 1);

        let conversation = store.conversation("1").unwrap();
        assert_eq!(conversation.last_message, "hello there");
        assert_eq!(
            conversation.last_message_status,
            Some(DeliveryState::Sent)
        );
    }

    #[test]
    fn send_message_to_unknown_id_creates_thread_only() {
        let mut store = seed();
        let count = store.conversations.len();
        store.send_message("no-such-chat", "hi".to_string(), None);
        assert_eq!(store.messages_for("no-such-chat").len(), 1);
        assert_eq!(store.conversations.len(), count);
    }

    #[test]
    fn sending_moves_conversation_to_front_of_recent_feed() {
        let mut store = seed();
        store.send_message("3", "bump".to_string(), None);
        let feed = store.recent_feed();
        assert_eq!(feed[0].id, "3");
    }

    #[test]
    fn delivery_update_only_touches_own_messages() {
        let mut store = seed();
        let incoming_id = store.messages_for("1")[0].id.clone();
        store.set_delivery_state("1", &incoming_id, DeliveryState::Read);
        assert_eq!(store.messages_for("1")[0].delivery_state, None);

        let own_id = store.send_message("1", "ping".to_string(), None);
        store.set_delivery_state("1", &own_id, DeliveryState::Delivered);
        let message = store
            .messages_for("1")
            .iter()
            .find(|m| m.id == own_id)
            .unwrap();
        assert_eq!(message.delivery_state, Some(DeliveryState::Delivered));
        assert_eq!(
            store.conversation("1").unwrap().last_message_status,
            Some(DeliveryState::Delivered)
        );
    }

    #[test]
    fn toggle_subscription_flips_only_the_target_channel() {
        let mut store = seed();
        let channel_ids: Vec<String> = store.channels().map(|c| c.id.clone()).collect();
        let target = &channel_ids[0];
        let subscribed = |store: &ChatStore, id: &str| match store.conversation(id).unwrap().kind {
            ConversationKind::Channel { is_subscribed, .. } => is_subscribed,
            _ => unreachable!(),
        };

        let before: Vec<bool> = channel_ids.iter().map(|id| subscribed(&store, id)).collect();
        store.toggle_subscription(target);
        assert_eq!(subscribed(&store, target), !before[0]);
        for (id, was) in channel_ids.iter().zip(&before).skip(1) {
            assert_eq!(subscribed(&store, id), *was);
        }
    }

    #[test]
    fn toggle_subscription_ignores_non_channels() {
        let mut store = seed();
        let before = store.conversation("1").unwrap().clone();
        store.toggle_subscription("1");
        assert_eq!(store.conversation("1").unwrap(), &before);
    }

    #[test]
    fn remove_saved_filters_only_the_saved_list() {
        let mut store = seed();
        let saved_id = store.saved[0].id.clone();
        let threads_before: usize = store.messages.values().map(Vec::len).sum();
        let saved_before = store.saved.len();

        store.remove_saved(&saved_id);
        assert_eq!(store.saved.len(), saved_before - 1);
        assert!(store.saved.iter().all(|m| m.id != saved_id));
        let threads_after: usize = store.messages.values().map(Vec::len).sum();
        assert_eq!(threads_before, threads_after);
    }

    #[test]
    fn story_users_with_content_skips_empty_rosters() {
        let store = seed();
        let with_content = store.story_users_with_content();
        assert!(!with_content.is_empty());
        assert!(with_content.len() < store.story_roster.len());
        for user in with_content {
            assert!(!store.stories_for(&user.id).is_empty());
        }
    }

    #[test]
    fn mark_story_viewed_sets_the_flag() {
        let mut store = seed();
        let id = store.story_users_with_content()[0].id.clone();
        store.mark_story_viewed(&id);
        assert!(
            store
                .story_roster
                .iter()
                .find(|u| u.id == id)
                .unwrap()
                .is_viewed
        );
    }

    #[test]
    fn fixtures_round_trip_through_json() {
        let store = seed();
        let json = serde_json::to_string(&store).unwrap();
        let back: ChatStore = serde_json::from_str(&json).unwrap();
        assert_eq!(back.conversations.len(), store.conversations.len());
        assert_eq!(back.saved.len(), store.saved.len());
    }
}
