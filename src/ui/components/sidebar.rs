//! Left panel: header, stories bar, category tabs, and the per-tab lists.

use egui::{
    Align, Color32, CornerRadius, Frame, Label, Layout, Margin, Response, RichText, ScrollArea,
    Sense, Stroke, TextEdit, Ui, UiBuilder,
};

use crate::common::types::{Conversation, ConversationKind, DeliveryState, SavedKind};
use crate::store::ChatStore;
use crate::ui::state::{Category, UiState};
use crate::ui::{format, theme};

use super::avatar;

#[derive(Default)]
pub struct SidebarActions {
    pub select: Option<String>,
    pub open_story: Option<String>,
    pub add_story: bool,
    pub new_chat: bool,
    pub new_group: bool,
    pub create_channel: bool,
    pub start_bot: Option<String>,
    pub toggle_subscribe: Option<String>,
    pub delete_saved: Option<String>,
    pub open_settings: bool,
}

pub fn render(ui: &mut Ui, store: &ChatStore, state: &mut UiState) -> SidebarActions {
    let mut actions = SidebarActions::default();

    header(ui, state, &mut actions);
    stories_bar(ui, store, &mut actions);
    ui.separator();
    tabs(ui, store, state);
    ui.separator();

    match state.active_tab {
        Category::All => all_list(ui, store, state, &mut actions),
        Category::Groups => groups_list(ui, store, state, &mut actions),
        Category::Channels => channels_list(ui, store, state, &mut actions),
        Category::Bots => bots_list(ui, store, state, &mut actions),
        Category::Saved => saved_list(ui, store, state, &mut actions),
    }

    actions
}

fn header(ui: &mut Ui, state: &mut UiState, actions: &mut SidebarActions) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.menu_button("☰", |ui| {
            if ui.button("New Message").clicked() {
                actions.new_chat = true;
                ui.close();
            }
            if ui.button("New Group").clicked() {
                actions.new_group = true;
                ui.close();
            }
            ui.separator();
            if ui.button("Saved Messages").clicked() {
                state.active_tab = Category::Saved;
                ui.close();
            }
            if ui.button("Settings").clicked() {
                actions.open_settings = true;
                ui.close();
            }
        });
        ui.label(RichText::new("xmo").heading().strong());
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button("🔍").clicked() {
                state.show_search = !state.show_search;
                if !state.show_search {
                    state.search.clear();
                }
            }
            if ui.button("✏").clicked() {
                actions.new_chat = true;
            }
        });
    });
    if state.show_search {
        ui.add(
            TextEdit::singleline(&mut state.search)
                .hint_text("Search chats...")
                .desired_width(f32::INFINITY),
        );
    }
    ui.add_space(4.0);
}

fn stories_bar(ui: &mut Ui, store: &ChatStore, actions: &mut SidebarActions) {
    ScrollArea::horizontal()
        .id_salt("stories_bar")
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    if story_circle(ui, "You", None).clicked() {
                        actions.add_story = true;
                    }
                    ui.label(RichText::new("Your story").small().weak());
                });
                for user in &store.story_roster {
                    let has_content = !store.stories_for(&user.id).is_empty();
                    let ring = if !has_content {
                        None
                    } else if user.is_viewed {
                        Some(theme::OFFLINE)
                    } else {
                        Some(theme::ACCENT)
                    };
                    ui.vertical(|ui| {
                        if story_circle(ui, &user.name, ring).clicked() && has_content {
                            actions.open_story = Some(user.id.clone());
                        }
                        ui.label(RichText::new(first_name(&user.name)).small().weak());
                    });
                }
            });
        });
}

fn story_circle(ui: &mut Ui, name: &str, ring: Option<Color32>) -> Response {
    let response = avatar::avatar(ui, name, 44.0);
    if let Some(colour) = ring {
        ui.painter()
            .circle_stroke(response.rect.center(), 25.0, Stroke::new(2.0, colour));
    }
    response
}

fn tabs(ui: &mut Ui, store: &ChatStore, state: &mut UiState) {
    let unread_all: u32 = store.recent_feed().iter().map(|c| c.unread_count).sum();
    let unread_groups: u32 = store.groups().map(|c| c.unread_count).sum();

    ui.horizontal_wrapped(|ui| {
        for category in Category::ALL {
            let unread = match category {
                Category::All => unread_all,
                Category::Groups => unread_groups,
                _ => 0,
            };
            let text = if unread > 0 {
                format!("{} ({})", category.label(), format::unread_badge(unread))
            } else {
                category.label().to_string()
            };
            if ui
                .selectable_label(state.active_tab == category, text)
                .clicked()
            {
                state.active_tab = category;
            }
        }
    });
}

fn matches_search(conversation: &Conversation, query: &str) -> bool {
    query.is_empty() || conversation.name.to_lowercase().contains(query)
}

fn all_list(ui: &mut Ui, store: &ChatStore, state: &UiState, actions: &mut SidebarActions) {
    let query = state.search.to_lowercase();
    let feed: Vec<&Conversation> = store
        .recent_feed()
        .into_iter()
        .filter(|c| matches_search(c, &query))
        .collect();
    conversation_list(ui, "all_list", &feed, state, actions, "No chats found");
}

fn groups_list(ui: &mut Ui, store: &ChatStore, state: &UiState, actions: &mut SidebarActions) {
    let query = state.search.to_lowercase();
    let groups: Vec<&Conversation> = store
        .groups()
        .filter(|c| matches_search(c, &query))
        .collect();
    conversation_list(ui, "groups_list", &groups, state, actions, "No groups yet");
}

fn conversation_list(
    ui: &mut Ui,
    id_salt: &str,
    conversations: &[&Conversation],
    state: &UiState,
    actions: &mut SidebarActions,
    empty_text: &str,
) {
    ScrollArea::vertical()
        .id_salt(id_salt)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if conversations.is_empty() {
                ui.add_space(24.0);
                ui.vertical_centered(|ui| ui.label(RichText::new(empty_text).weak()));
                return;
            }
            for conversation in conversations {
                let selected = state.selected.as_deref() == Some(conversation.id.as_str());
                if chat_row(ui, conversation, selected).clicked() {
                    actions.select = Some(conversation.id.clone());
                }
            }
        });
}

fn chat_row(ui: &mut Ui, conversation: &Conversation, is_selected: bool) -> Response {
    let fill = if is_selected {
        theme::PANEL_SELECTED
    } else {
        Color32::TRANSPARENT
    };
    ui.scope_builder(
        UiBuilder::new()
            .id_salt(conversation.id.as_str())
            .sense(Sense::click()),
        |ui| {
            Frame::new()
                .fill(fill)
                .corner_radius(CornerRadius::same(6))
                .inner_margin(Margin::symmetric(8, 6))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        match conversation.kind {
                            ConversationKind::Direct { is_online, .. } => {
                                avatar::avatar_with_status(ui, &conversation.name, 40.0, is_online);
                            }
                            _ => {
                                avatar::avatar(ui, &conversation.name, 40.0);
                            }
                        }
                        ui.vertical(|ui| {
                            ui.horizontal(|ui| {
                                ui.add(
                                    Label::new(RichText::new(&conversation.name).strong())
                                        .truncate(),
                                );
                                if let Some(tag) = kind_tag(conversation) {
                                    ui.label(RichText::new(tag).small().color(theme::ACCENT));
                                }
                                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                    ui.label(
                                        RichText::new(&conversation.timestamp).small().weak(),
                                    );
                                });
                            });
                            ui.horizontal(|ui| {
                                if let Some(state) = conversation.last_message_status {
                                    let tick = match state {
                                        DeliveryState::Read => "✓✓",
                                        _ => "✓",
                                    };
                                    ui.label(RichText::new(tick).small().color(theme::ACCENT));
                                }
                                ui.add(
                                    Label::new(
                                        RichText::new(&conversation.last_message).small().weak(),
                                    )
                                    .truncate(),
                                );
                                if conversation.unread_count > 0 {
                                    ui.with_layout(
                                        Layout::right_to_left(Align::Center),
                                        |ui| {
                                            let fill = if conversation.is_muted {
                                                theme::UNREAD_MUTED
                                            } else {
                                                theme::ACCENT
                                            };
                                            badge(
                                                ui,
                                                &format::unread_badge(conversation.unread_count),
                                                fill,
                                            );
                                        },
                                    );
                                }
                            });
                        });
                    });
                });
        },
    )
    .response
}

fn badge(ui: &mut Ui, text: &str, fill: Color32) {
    Frame::new()
        .fill(fill)
        .corner_radius(CornerRadius::same(9))
        .inner_margin(Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small().color(Color32::WHITE));
        });
}

fn kind_tag(conversation: &Conversation) -> Option<&'static str> {
    match conversation.kind {
        ConversationKind::Direct { .. } => None,
        ConversationKind::Group { .. } => Some("Group"),
        ConversationKind::Channel { .. } => Some("Channel"),
        ConversationKind::Bot { .. } => Some("Bot"),
    }
}

fn channels_list(ui: &mut Ui, store: &ChatStore, state: &UiState, actions: &mut SidebarActions) {
    if ui.button("+ Create New Channel").clicked() {
        actions.create_channel = true;
    }
    ScrollArea::vertical()
        .id_salt("channels_list")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let channels: Vec<&Conversation> = store.channels().collect();
            if channels.is_empty() {
                ui.add_space(24.0);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("No channels yet").weak());
                    ui.label(RichText::new("Create or subscribe to channels").small().weak());
                });
                return;
            }
            for channel in channels {
                let ConversationKind::Channel {
                    subscriber_count,
                    is_subscribed,
                    is_verified,
                    last_post,
                    ..
                } = &channel.kind
                else {
                    continue;
                };
                let selected = state.selected.as_deref() == Some(channel.id.as_str());
                let row = ui.scope_builder(
                    UiBuilder::new()
                        .id_salt(channel.id.as_str())
                        .sense(Sense::click()),
                    |ui| {
                        Frame::new()
                            .fill(if selected {
                                theme::PANEL_SELECTED
                            } else {
                                Color32::TRANSPARENT
                            })
                            .corner_radius(CornerRadius::same(6))
                            .inner_margin(Margin::symmetric(8, 6))
                            .show(ui, |ui| {
                                ui.set_width(ui.available_width());
                                ui.horizontal(|ui| {
                                    avatar::avatar(ui, &channel.name, 40.0);
                                    ui.vertical(|ui| {
                                        ui.horizontal(|ui| {
                                            ui.add(
                                                Label::new(
                                                    RichText::new(&channel.name).strong(),
                                                )
                                                .truncate(),
                                            );
                                            if *is_verified {
                                                ui.label(
                                                    RichText::new("✔")
                                                        .small()
                                                        .color(theme::VERIFIED),
                                                );
                                            }
                                        });
                                        ui.label(
                                            RichText::new(format!(
                                                "{} subscribers",
                                                format::compact_count(*subscriber_count)
                                            ))
                                            .small()
                                            .weak(),
                                        );
                                        if let Some(post) = last_post {
                                            ui.add(
                                                Label::new(RichText::new(post).small().weak())
                                                    .truncate(),
                                            );
                                        }
                                    });
                                    ui.with_layout(
                                        Layout::right_to_left(Align::Center),
                                        |ui| {
                                            let label =
                                                if *is_subscribed { "Joined" } else { "Join" };
                                            if ui.button(label).clicked() {
                                                actions.toggle_subscribe =
                                                    Some(channel.id.clone());
                                            }
                                        },
                                    );
                                });
                            });
                    },
                );
                if row.response.clicked() {
                    actions.select = Some(channel.id.clone());
                }
            }
        });
}

fn bots_list(ui: &mut Ui, store: &ChatStore, state: &mut UiState, actions: &mut SidebarActions) {
    ui.add(
        TextEdit::singleline(&mut state.bot_search)
            .hint_text("Search bots...")
            .desired_width(f32::INFINITY),
    );
    let query = state.bot_search.to_lowercase();

    let bots: Vec<&Conversation> = store
        .bots()
        .filter(|bot| {
            if query.is_empty() {
                return true;
            }
            let ConversationKind::Bot { username, .. } = &bot.kind else {
                return false;
            };
            bot.name.to_lowercase().contains(&query) || username.to_lowercase().contains(&query)
        })
        .collect();

    ScrollArea::vertical()
        .id_salt("bots_list")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if bots.is_empty() {
                ui.add_space(24.0);
                ui.vertical_centered(|ui| ui.label(RichText::new("No bots found").weak()));
                return;
            }
            let mut categories: Vec<&str> = Vec::new();
            for bot in &bots {
                if let ConversationKind::Bot { category, .. } = &bot.kind {
                    if !categories.contains(&category.as_str()) {
                        categories.push(category.as_str());
                    }
                }
            }
            for heading in categories {
                ui.add_space(6.0);
                ui.label(RichText::new(heading.to_uppercase()).small().weak());
                for bot in &bots {
                    let ConversationKind::Bot {
                        username,
                        description,
                        category,
                        is_verified,
                        rating,
                        ..
                    } = &bot.kind
                    else {
                        continue;
                    };
                    if category.as_str() != heading {
                        continue;
                    }
                    let selected = state.selected.as_deref() == Some(bot.id.as_str());
                    let row = ui.scope_builder(
                        UiBuilder::new().id_salt(bot.id.as_str()).sense(Sense::click()),
                        |ui| {
                            Frame::new()
                                .fill(if selected {
                                    theme::PANEL_SELECTED
                                } else {
                                    Color32::TRANSPARENT
                                })
                                .corner_radius(CornerRadius::same(6))
                                .inner_margin(Margin::symmetric(8, 6))
                                .show(ui, |ui| {
                                    ui.set_width(ui.available_width());
                                    ui.horizontal(|ui| {
                                        avatar::avatar(ui, &bot.name, 40.0);
                                        ui.vertical(|ui| {
                                            ui.horizontal(|ui| {
                                                ui.label(
                                                    RichText::new(&bot.name).strong(),
                                                );
                                                if *is_verified {
                                                    ui.label(
                                                        RichText::new("⚡")
                                                            .small()
                                                            .color(theme::VERIFIED),
                                                    );
                                                }
                                            });
                                            ui.label(
                                                RichText::new(format!("@{username}"))
                                                    .small()
                                                    .color(theme::ACCENT),
                                            );
                                            ui.add(
                                                Label::new(
                                                    RichText::new(description).small().weak(),
                                                )
                                                .truncate(),
                                            );
                                            if let Some(rating) = rating {
                                                ui.label(
                                                    RichText::new(format!("★ {rating:.1}"))
                                                        .small()
                                                        .weak(),
                                                );
                                            }
                                        });
                                        ui.with_layout(
                                            Layout::right_to_left(Align::Center),
                                            |ui| {
                                                if ui.button("Start").clicked() {
                                                    actions.start_bot = Some(bot.id.clone());
                                                }
                                            },
                                        );
                                    });
                                });
                        },
                    );
                    if row.response.clicked() {
                        actions.select = Some(bot.id.clone());
                    }
                }
            }
        });
}

fn saved_list(ui: &mut Ui, store: &ChatStore, state: &mut UiState, actions: &mut SidebarActions) {
    ui.add(
        TextEdit::singleline(&mut state.saved_search)
            .hint_text("Search saved messages...")
            .desired_width(f32::INFINITY),
    );
    let query = state.saved_search.to_lowercase();

    ScrollArea::vertical()
        .id_salt("saved_list")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let saved: Vec<_> = store
                .saved
                .iter()
                .filter(|message| {
                    query.is_empty()
                        || message.content.to_lowercase().contains(&query)
                        || message.from_name.to_lowercase().contains(&query)
                        || message.chat_name.to_lowercase().contains(&query)
                })
                .collect();
            if saved.is_empty() {
                ui.add_space(24.0);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("No saved messages").weak());
                    ui.label(
                        RichText::new("Long press messages to save them").small().weak(),
                    );
                });
                return;
            }
            for message in saved {
                Frame::new()
                    .inner_margin(Margin::symmetric(8, 6))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            avatar::avatar(ui, &message.from_name, 36.0);
                            ui.vertical(|ui| {
                                ui.horizontal(|ui| {
                                    ui.label(RichText::new(&message.from_name).strong());
                                    ui.with_layout(
                                        Layout::right_to_left(Align::Center),
                                        |ui| {
                                            if ui.button("🗑").clicked() {
                                                actions.delete_saved =
                                                    Some(message.id.clone());
                                            }
                                            ui.label(
                                                RichText::new(&message.timestamp)
                                                    .small()
                                                    .weak(),
                                            );
                                        },
                                    );
                                });
                                ui.label(
                                    RichText::new(format!("in {}", message.chat_name))
                                        .small()
                                        .weak(),
                                );
                                ui.horizontal(|ui| {
                                    ui.label(
                                        RichText::new(saved_kind_glyph(message.saved_kind))
                                            .small()
                                            .weak(),
                                    );
                                    ui.add(
                                        Label::new(RichText::new(&message.content).small())
                                            .truncate(),
                                    );
                                });
                            });
                        });
                    });
            }
        });
}

fn saved_kind_glyph(kind: SavedKind) -> &'static str {
    match kind {
        SavedKind::Text => "💬",
        SavedKind::Image => "🖼",
        SavedKind::File => "📄",
        SavedKind::Link => "🔗",
    }
}

fn first_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}
