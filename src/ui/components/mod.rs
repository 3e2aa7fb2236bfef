pub mod avatar;
pub mod chat_area;
pub mod input_bar;
pub mod message_bubble;
pub mod new_chat_dialog;
pub mod profile_panel;
pub mod sidebar;
pub mod story_viewer;
