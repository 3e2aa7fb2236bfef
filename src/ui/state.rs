//! UI-only state: selection, open panels, composer, and overlay machines.

use crate::common::types::ReplyRef;
use crate::store::ChatStore;

/// Sidebar category tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    All,
    Groups,
    Channels,
    Bots,
    Saved,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::Groups,
        Category::Channels,
        Category::Bots,
        Category::Saved,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Groups => "Groups",
            Category::Channels => "Channels",
            Category::Bots => "Bots",
            Category::Saved => "Saved",
        }
    }
}

/// Message composer state for the active thread.
#[derive(Debug, Default)]
pub struct ComposeState {
    pub input: String,
    pub reply_to: Option<ReplyRef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogMode {
    /// Clicking a contact immediately opens that conversation.
    #[default]
    DirectSelect,
    /// Clicks toggle membership in the pending group.
    GroupCompose,
}

/// Transient state of the new-chat dialog. Dropped on close, which resets
/// everything.
#[derive(Debug, Default)]
pub struct NewChatDialog {
    pub search: String,
    pub mode: DialogMode,
    pub members: Vec<String>,
    pub group_name: String,
}

impl NewChatDialog {
    pub fn toggle_member(&mut self, contact_id: &str) {
        if let Some(pos) = self.members.iter().position(|id| id == contact_id) {
            self.members.remove(pos);
        } else {
            self.members.push(contact_id.to_string());
        }
    }

    /// Creation needs at least two members and a non-blank name.
    pub fn can_create(&self) -> bool {
        self.members.len() >= 2 && !self.group_name.trim().is_empty()
    }

    /// Consumes the pending group when the guard passes, clearing the
    /// composer. Returns `None` (and changes nothing) otherwise.
    pub fn take_group(&mut self) -> Option<(Vec<String>, String)> {
        if !self.can_create() {
            return None;
        }
        let name = self.group_name.trim().to_string();
        let members = std::mem::take(&mut self.members);
        self.group_name.clear();
        self.mode = DialogMode::DirectSelect;
        Some((members, name))
    }
}

/// Outcome of a story-viewer step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryStep {
    Stay,
    Closed,
}

/// Playback state of the full-screen story viewer. One exists per open
/// viewer; dropping it is the teardown.
#[derive(Debug)]
pub struct StoryViewer {
    pub user_id: String,
    pub index: usize,
    /// 0.0..=1.0 through the current story.
    pub progress: f32,
    pub paused: bool,
    pub reply_input: String,
}

impl StoryViewer {
    pub fn new(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            index: 0,
            progress: 0.0,
            paused: false,
            reply_input: String::new(),
        }
    }

    /// Advances playback by `dt` seconds. While paused, progress holds.
    pub fn tick(&mut self, dt: f32, story_duration: f32, store: &ChatStore) -> StoryStep {
        if self.paused {
            return StoryStep::Stay;
        }
        self.progress += dt / story_duration.max(0.1);
        if self.progress >= 1.0 {
            self.next(store)
        } else {
            StoryStep::Stay
        }
    }

    /// Moves to the next story, then to the next roster user with content,
    /// and closes past the end.
    pub fn next(&mut self, store: &ChatStore) -> StoryStep {
        if self.index + 1 < store.stories_for(&self.user_id).len() {
            self.index += 1;
            self.progress = 0.0;
            return StoryStep::Stay;
        }
        match self.neighbor_user(store, 1) {
            Some(user_id) => {
                self.user_id = user_id;
                self.index = 0;
                self.progress = 0.0;
                StoryStep::Stay
            }
            None => StoryStep::Closed,
        }
    }

    /// Moves to the previous story, or to the previous user with content.
    /// At the very beginning this is a no-op.
    pub fn previous(&mut self, store: &ChatStore) {
        if self.index > 0 {
            self.index -= 1;
            self.progress = 0.0;
            return;
        }
        if let Some(user_id) = self.neighbor_user(store, -1) {
            self.user_id = user_id;
            self.index = 0;
            self.progress = 0.0;
        }
    }

    fn neighbor_user(&self, store: &ChatStore, step: isize) -> Option<String> {
        let roster = store.story_users_with_content();
        let position = roster.iter().position(|u| u.id == self.user_id)?;
        let neighbor = position.checked_add_signed(step)?;
        roster.get(neighbor).map(|u| u.id.clone())
    }
}

/// Top-level UI state: which conversation is active and which panels are
/// open. Overlays are `Option`s; `None` means closed.
#[derive(Debug, Default)]
pub struct UiState {
    pub selected: Option<String>,
    pub show_profile: bool,
    pub active_tab: Category,
    pub search: String,
    pub show_search: bool,
    pub bot_search: String,
    pub saved_search: String,
    pub compose: ComposeState,
    pub new_chat: Option<NewChatDialog>,
    pub story_viewer: Option<StoryViewer>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activates a conversation; closes any open story viewer and drops a
    /// pending reply from the previous thread.
    pub fn select_conversation(&mut self, conversation_id: &str) {
        self.selected = Some(conversation_id.to_string());
        self.story_viewer = None;
        self.compose.reply_to = None;
        self.compose.input.clear();
    }

    /// Narrow-layout back navigation.
    pub fn back(&mut self) {
        self.selected = None;
        self.show_profile = false;
    }

    /// The profile panel needs an active conversation and a wide viewport.
    pub fn open_profile(&mut self, narrow: bool) {
        if self.selected.is_some() && !narrow {
            self.show_profile = true;
        }
    }

    /// Opens the story viewer when the user has content; otherwise ignored.
    pub fn open_story(&mut self, user_id: &str, store: &ChatStore) {
        if !store.stories_for(user_id).is_empty() {
            self.story_viewer = Some(StoryViewer::new(user_id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    #[test]
    fn selecting_a_conversation_closes_the_story_viewer() {
        let store = seed();
        let mut state = UiState::new();
        state.open_story("1", &store);
        assert!(state.story_viewer.is_some());

        state.select_conversation("3");
        assert_eq!(state.selected.as_deref(), Some("3"));
        assert!(state.story_viewer.is_none());
    }

    #[test]
    fn profile_panel_requires_selection_and_wide_viewport() {
        let mut state = UiState::new();
        state.open_profile(false);
        assert!(!state.show_profile);

        state.select_conversation("1");
        state.open_profile(true);
        assert!(!state.show_profile);

        state.open_profile(false);
        assert!(state.show_profile);
    }

    #[test]
    fn back_clears_selection_and_profile() {
        let mut state = UiState::new();
        state.select_conversation("1");
        state.open_profile(false);
        state.back();
        assert!(state.selected.is_none());
        assert!(!state.show_profile);
    }

    #[test]
    fn opening_a_story_for_a_user_without_content_is_ignored() {
        let store = seed();
        let mut state = UiState::new();
        // David is in the roster but has no stored stories.
        state.open_story("6", &store);
        assert!(state.story_viewer.is_none());
    }

    #[test]
    fn group_creation_guard_blocks_small_or_unnamed_groups() {
        let mut dialog = NewChatDialog::default();
        assert!(dialog.take_group().is_none());

        dialog.toggle_member("1");
        dialog.group_name = "Weekend Crew".to_string();
        assert!(!dialog.can_create());
        assert!(dialog.take_group().is_none());
        assert_eq!(dialog.members.len(), 1);

        dialog.toggle_member("3");
        dialog.group_name = "   ".to_string();
        assert!(dialog.take_group().is_none());
    }

    #[test]
    fn group_creation_clears_the_composer() {
        let mut dialog = NewChatDialog::default();
        dialog.mode = DialogMode::GroupCompose;
        dialog.toggle_member("1");
        dialog.toggle_member("3");
        dialog.group_name = " Weekend Crew ".to_string();

        let (members, name) = dialog.take_group().expect("guard should pass");
        assert_eq!(members, ["1", "3"]);
        assert_eq!(name, "Weekend Crew");
        assert!(dialog.members.is_empty());
        assert!(dialog.group_name.is_empty());
        assert_eq!(dialog.mode, DialogMode::DirectSelect);
    }

    #[test]
    fn toggle_member_adds_then_removes() {
        let mut dialog = NewChatDialog::default();
        dialog.toggle_member("4");
        assert_eq!(dialog.members, ["4"]);
        dialog.toggle_member("4");
        assert!(dialog.members.is_empty());
    }

    #[test]
    fn story_next_walks_stories_then_users_then_closes() {
        let store = seed();
        // Roster with content: Alice ("1", 2 stories), Bob ("3"), Carol ("4").
        let mut viewer = StoryViewer::new("1");
        assert_eq!(viewer.next(&store), StoryStep::Stay);
        assert_eq!((viewer.user_id.as_str(), viewer.index), ("1", 1));

        assert_eq!(viewer.next(&store), StoryStep::Stay);
        assert_eq!((viewer.user_id.as_str(), viewer.index), ("3", 0));

        assert_eq!(viewer.next(&store), StoryStep::Stay);
        assert_eq!((viewer.user_id.as_str(), viewer.index), ("4", 0));

        // Last story of the last user with content: close, never wrap.
        assert_eq!(viewer.next(&store), StoryStep::Closed);
    }

    #[test]
    fn story_previous_stops_at_the_very_first_story() {
        let store = seed();
        let mut viewer = StoryViewer::new("3");
        viewer.previous(&store);
        assert_eq!((viewer.user_id.as_str(), viewer.index), ("1", 0));

        viewer.previous(&store);
        assert_eq!((viewer.user_id.as_str(), viewer.index), ("1", 0));
    }

    #[test]
    fn story_tick_pauses_without_resetting_progress() {
        let store = seed();
        let mut viewer = StoryViewer::new("1");
        assert_eq!(viewer.tick(1.0, 5.0, &store), StoryStep::Stay);
        let progress = viewer.progress;
        assert!(progress > 0.0);

        viewer.paused = true;
        assert_eq!(viewer.tick(1.0, 5.0, &store), StoryStep::Stay);
        assert_eq!(viewer.progress, progress);

        viewer.paused = false;
        viewer.tick(1.0, 5.0, &store);
        assert!(viewer.progress > progress);
    }

    #[test]
    fn story_tick_advances_at_full_progress() {
        let store = seed();
        let mut viewer = StoryViewer::new("4");
        // Carol has one story and is the last user with content.
        assert_eq!(viewer.tick(6.0, 5.0, &store), StoryStep::Closed);
    }
}
