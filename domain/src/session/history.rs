//! Sliding-window trimming of a conversation log.

use super::entities::Message;

/// Cap `messages` at the pinned first message plus the `max` most recent ones.
///
/// When the log is longer than `max`, it becomes `[messages[0]] +
/// messages[len - max..]`. The cut is positional, so it can separate a user
/// message from its reply. Logs of length `<= max` are left untouched.
///
/// Returns the number of messages dropped.
pub fn trim_history(messages: &mut Vec<Message>, max: usize) -> usize {
    let len = messages.len();
    if len <= max || len == 0 {
        return 0;
    }

    let pinned = messages[0].clone();
    let tail_start = len - max;
    let mut trimmed = Vec::with_capacity(max + 1);
    trimmed.push(pinned);
    trimmed.extend(messages.drain(tail_start..));

    let dropped = len - trimmed.len();
    *messages = trimmed;
    dropped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::entities::Role;

    fn log(turns: usize) -> Vec<Message> {
        let mut messages = vec![Message::system("SYS")];
        for i in 0..turns {
            messages.push(Message::user(format!("q{}", i)));
            messages.push(Message::assistant(format!("a{}", i)));
        }
        messages
    }

    #[test]
    fn test_no_trim_at_or_below_limit() {
        let mut messages = log(3);
        assert_eq!(trim_history(&mut messages, 10), 0);
        assert_eq!(messages.len(), 7);
    }

    #[test]
    fn test_trim_keeps_pinned_plus_last_n() {
        // 1 + 2*5 = 11 > 10
        let original = log(5);
        let mut messages = original.clone();
        let dropped = trim_history(&mut messages, 10);

        let mut expected = vec![original[0].clone()];
        expected.extend_from_slice(&original[original.len() - 10..]);

        assert_eq!(messages, expected);
        assert_eq!(messages.len(), 11);
        assert_eq!(dropped, 0);
        assert_eq!(messages[0].role, Role::System);
    }

    #[test]
    fn test_trim_drops_oldest_middle_entries() {
        let original = log(6); // 13 messages
        let mut messages = original.clone();
        let dropped = trim_history(&mut messages, 10);

        assert_eq!(dropped, 2);
        assert_eq!(messages.len(), 11);
        assert_eq!(messages[0], Message::system("SYS"));
        assert_eq!(messages[1], original[3]);
        assert_eq!(messages.last(), original.last());
    }

    #[test]
    fn test_trim_can_split_a_turn() {
        let mut messages = log(6);
        messages.push(Message::user("dangling"));
        // 14 messages, keep last 10 → first kept is an assistant reply
        trim_history(&mut messages, 10);
        assert_eq!(messages[1].role, Role::Assistant);
    }

    #[test]
    fn test_small_limit() {
        let mut messages = log(2);
        trim_history(&mut messages, 1);
        assert_eq!(messages, vec![Message::system("SYS"), Message::assistant("a1")]);
    }
}
