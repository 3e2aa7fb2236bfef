//! Annotates a thread with visual run boundaries.
//!
//! A run is a maximal contiguous stretch of messages from the same side of
//! the conversation: own messages group together, and incoming messages
//! group per sender, so two people posting back-to-back in a group chat get
//! separate runs. Recomputed on every render; the input is never mutated.

use crate::common::types::Message;

/// Display annotation for one message, parallel to the input list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunAnnotation {
    /// Gates the sender-name label above an incoming bubble.
    pub is_first_in_run: bool,
    /// Gates the avatar beside a group bubble and the closing corner shape.
    pub is_last_in_run: bool,
}

/// Single O(n) pass over the ordered message list.
pub fn annotate(messages: &[Message]) -> Vec<RunAnnotation> {
    (0..messages.len())
        .map(|i| RunAnnotation {
            is_first_in_run: i == 0 || breaks_run(&messages[i - 1], &messages[i]),
            is_last_in_run: i + 1 == messages.len() || breaks_run(&messages[i], &messages[i + 1]),
        })
        .collect()
}

fn breaks_run(a: &Message, b: &Message) -> bool {
    a.is_own != b.is_own || (!a.is_own && a.sender_name != b.sender_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(is_own: bool, sender: Option<&str>) -> Message {
        Message {
            id: String::new(),
            conversation_id: "t".to_string(),
            content: "x".to_string(),
            sent_at: "1:00 PM".to_string(),
            is_own,
            sender_name: sender.map(str::to_string),
            sender_avatar: None,
            delivery_state: None,
            attachment: None,
            reply_to: None,
        }
    }

    fn firsts(annotations: &[RunAnnotation]) -> Vec<bool> {
        annotations.iter().map(|a| a.is_first_in_run).collect()
    }

    fn lasts(annotations: &[RunAnnotation]) -> Vec<bool> {
        annotations.iter().map(|a| a.is_last_in_run).collect()
    }

    #[test]
    fn empty_list_yields_no_annotations() {
        assert!(annotate(&[]).is_empty());
    }

    #[test]
    fn boundaries_fall_exactly_on_side_transitions() {
        let alice = Some("Alice");
        let thread = vec![
            msg(false, alice),
            msg(false, alice),
            msg(true, None),
            msg(true, None),
            msg(false, alice),
        ];
        let annotations = annotate(&thread);
        assert_eq!(firsts(&annotations), [true, false, true, false, true]);
        assert_eq!(lasts(&annotations), [false, true, false, true, true]);
    }

    #[test]
    fn uniform_side_is_one_run() {
        let thread = vec![msg(true, None), msg(true, None), msg(true, None)];
        let annotations = annotate(&thread);
        assert_eq!(firsts(&annotations), [true, false, false]);
        assert_eq!(lasts(&annotations), [false, false, true]);
    }

    #[test]
    fn single_message_is_both_first_and_last() {
        let annotations = annotate(&[msg(false, Some("Alice"))]);
        assert_eq!(
            annotations,
            [RunAnnotation {
                is_first_in_run: true,
                is_last_in_run: true
            }]
        );
    }

    #[test]
    fn adjacent_incoming_senders_split_into_runs() {
        let thread = vec![
            msg(false, Some("Mike")),
            msg(false, Some("Mike")),
            msg(false, Some("Sarah")),
            msg(true, None),
        ];
        let annotations = annotate(&thread);
        assert_eq!(firsts(&annotations), [true, false, true, true]);
        assert_eq!(lasts(&annotations), [false, true, true, true]);
    }

    #[test]
    fn annotation_is_pure_and_idempotent() {
        let thread = vec![
            msg(false, Some("Alice")),
            msg(true, None),
            msg(false, Some("Bob")),
        ];
        let snapshot = thread.clone();
        let first = annotate(&thread);
        let second = annotate(&thread);
        assert_eq!(first, second);
        assert_eq!(thread, snapshot);
    }
}
