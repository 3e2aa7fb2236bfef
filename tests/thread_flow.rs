use telechat::common::types::DeliveryState;
use telechat::store::{seed, ChatStore};
use telechat::ui::grouping;
use telechat::ui::state::{StoryStep, StoryViewer, UiState};

#[test]
fn seeded_group_thread_groups_by_sender() {
    let store = seed();
    let thread = store.messages_for("2");
    let annotations = grouping::annotate(thread);
    assert_eq!(annotations.len(), thread.len());

    // Mike's two messages form one run; the own reply breaks it; Sarah's
    // three messages form another run even though she follows another
    // incoming sender elsewhere in the thread.
    let firsts: Vec<bool> = annotations.iter().map(|a| a.is_first_in_run).collect();
    let lasts: Vec<bool> = annotations.iter().map(|a| a.is_last_in_run).collect();
    assert_eq!(firsts, [true, false, true, true, false, false]);
    assert_eq!(lasts, [false, true, true, false, false, true]);
}

#[test]
fn sending_into_a_selected_thread_extends_the_final_run() {
    let mut store = seed();
    let mut ui = UiState::new();
    ui.select_conversation("1");

    let conversation_id = ui.selected.clone().unwrap();
    store.send_message(&conversation_id, "On my way!".to_string(), None);
    store.send_message(&conversation_id, "Save me a seat".to_string(), None);

    let thread = store.messages_for("1");
    let annotations = grouping::annotate(thread);
    let last_two = &annotations[thread.len() - 2..];
    assert!(last_two[0].is_first_in_run);
    assert!(!last_two[0].is_last_in_run);
    assert!(!last_two[1].is_first_in_run);
    assert!(last_two[1].is_last_in_run);
}

#[test]
fn empty_threads_annotate_to_nothing() {
    let store = seed();
    // Channels beyond the first are seeded without any posts.
    assert!(store.messages_for("ch2").is_empty());
    assert!(grouping::annotate(store.messages_for("ch2")).is_empty());
}

#[test]
fn selecting_a_channel_without_history_is_not_an_error() {
    let store = seed();
    let mut ui = UiState::new();
    ui.select_conversation("ch2");
    assert!(store.conversation("ch2").is_some());
    assert!(store.messages_for("ch2").is_empty());
}

#[test]
fn delivery_echo_reaches_the_latest_message_preview() {
    let mut store = seed();
    let message_id = store.send_message("3", "thanks again".to_string(), None);
    store.set_delivery_state("3", &message_id, DeliveryState::Delivered);

    let conversation = store.conversation("3").unwrap();
    assert_eq!(conversation.last_message, "thanks again");
    assert_eq!(
        conversation.last_message_status,
        Some(DeliveryState::Delivered)
    );
}

#[test]
fn story_viewer_walks_the_whole_roster_and_closes() {
    let store = seed();
    let users_with_content = store.story_users_with_content();
    let first = users_with_content[0].id.clone();
    let total_stories: usize = users_with_content
        .iter()
        .map(|user| store.stories_for(&user.id).len())
        .sum();

    let mut viewer = StoryViewer::new(&first);
    let mut seen = 1;
    loop {
        match viewer.next(&store) {
            StoryStep::Stay => seen += 1,
            StoryStep::Closed => break,
        }
        assert!(seen <= total_stories, "viewer wrapped around");
    }
    assert_eq!(seen, total_stories);
}

#[test]
fn fixtures_survive_a_json_round_trip() {
    let store = seed();
    let json = serde_json::to_string(&store).expect("serialize fixtures");
    let decoded: ChatStore = serde_json::from_str(&json).expect("deserialize fixtures");
    assert_eq!(decoded.conversations, store.conversations);
    assert_eq!(decoded.messages, store.messages);
    assert_eq!(decoded.story_roster, store.story_roster);
}
