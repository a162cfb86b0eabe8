//! Console output formatter for tutoring sessions

use crate::config::OutputConfig;
use colored::Colorize;
use leetbud_domain::{Difficulty, ProblemRecord};
use regex::Regex;
use std::sync::LazyLock;

static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(.*?)`").unwrap());
static BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^- ").unwrap());
static ANSI: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").unwrap());

const TOP_LEFT: char = '╭';
const TOP_RIGHT: char = '╮';
const BOTTOM_LEFT: char = '╰';
const BOTTOM_RIGHT: char = '╯';
const HORIZONTAL: char = '─';
const VERTICAL: char = '│';

/// Formats problems and replies for terminal display
#[derive(Debug, Clone)]
pub struct ConsoleFormatter {
    width: usize,
}

impl ConsoleFormatter {
    /// Disabling colour applies process-wide; otherwise `colored` decides
    /// from the terminal and `NO_COLOR`/`CLICOLOR` as usual.
    pub fn new(config: &OutputConfig) -> Self {
        if !config.color {
            colored::control::set_override(false);
        }
        Self {
            width: config.width,
        }
    }

    /// Draw a reply in a box at the configured width
    pub fn format_reply(&self, text: &str) -> String {
        Self::draw_box(text, self.width)
    }

    /// Highlight `**bold**` and `` `code` `` spans and turn `- ` list markers into bullets
    pub fn format_markdown(text: &str) -> String {
        let text = BOLD.replace_all(text, |caps: &regex::Captures| {
            caps[1].red().bold().to_string()
        });
        let text = CODE.replace_all(&text, |caps: &regex::Captures| caps[1].cyan().to_string());
        BULLET.replace_all(&text, "• ").into_owned()
    }

    /// Draw a rounded box around `text`, word-wrapped to fit `width` columns.
    ///
    /// Wrapping is measured on visible characters, so colour codes never
    /// push a line past the right border.
    pub fn draw_box(text: &str, width: usize) -> String {
        let width = width.max(5);
        let inner = width - 4;
        let text = Self::format_markdown(text);

        let horizontal = HORIZONTAL.to_string().repeat(width - 2);
        let mut out = format!("{}{}{}\n", TOP_LEFT, horizontal, TOP_RIGHT);

        for line in text.split('\n').flat_map(|line| wrap_line(line, inner)) {
            let padding = inner.saturating_sub(visible_len(&line));
            out.push_str(&format!(
                "{} {}{} {}\n",
                VERTICAL,
                line,
                " ".repeat(padding),
                VERTICAL
            ));
        }

        out.push_str(&format!("{}{}{}", BOTTOM_LEFT, horizontal, BOTTOM_RIGHT));
        out
    }

    pub fn format_user_message(message: &str) -> String {
        format!("{} {}", "[You]:".blue(), message)
    }

    /// `Problem {id}: {title} ({difficulty})` with the difficulty coloured
    pub fn format_problem_header(record: &ProblemRecord) -> String {
        let difficulty = match record.difficulty() {
            Difficulty::Easy => "Easy".green(),
            Difficulty::Medium => "Medium".yellow(),
            Difficulty::Hard => "Hard".red(),
        };
        format!(
            "{} ({})",
            format!("Problem {}: {}", record.id(), record.title()).bold(),
            difficulty
        )
    }

    pub fn format_topics(record: &ProblemRecord) -> String {
        if record.topics().is_empty() {
            return format!("{} none listed", "Topics:".dimmed());
        }
        let topics: Vec<&str> = record.topics().iter().map(String::as_str).collect();
        format!("{} {}", "Topics:".dimmed(), topics.join(", "))
    }

    /// Remove ANSI colour sequences
    pub fn strip_ansi(text: &str) -> String {
        ANSI.replace_all(text, "").into_owned()
    }
}

fn visible_len(text: &str) -> usize {
    ConsoleFormatter::strip_ansi(text).chars().count()
}

/// Break one line into pieces of at most `inner` visible characters,
/// preferring to break at spaces.
fn wrap_line(line: &str, inner: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    // no word placed on `current` yet
    let mut fresh = true;

    for word in line.split(' ') {
        let mut word = word.to_string();

        while visible_len(&word) > inner {
            if !fresh {
                lines.push(std::mem::take(&mut current));
                fresh = true;
            }
            let (head, tail) = split_visible(&word, inner);
            lines.push(head);
            word = tail;
        }

        if !fresh {
            if visible_len(&current) + 1 + visible_len(&word) > inner {
                lines.push(std::mem::take(&mut current));
            } else {
                current.push(' ');
            }
        }
        current.push_str(&word);
        fresh = false;
    }

    lines.push(current);
    lines
}

/// Split after `count` visible characters; escape sequences stay with the head.
fn split_visible(text: &str, count: usize) -> (String, String) {
    let mut seen = 0;
    let mut in_escape = false;
    for (idx, ch) in text.char_indices() {
        if in_escape {
            if ch == 'm' {
                in_escape = false;
            }
            continue;
        }
        if ch == '\x1b' {
            in_escape = true;
            continue;
        }
        if seen == count {
            return (text[..idx].to_string(), text[idx..].to_string());
        }
        seen += 1;
    }
    (text.to_string(), String::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn plain() {
        colored::control::set_override(false);
    }

    fn record(difficulty: Difficulty) -> ProblemRecord {
        ProblemRecord::new(
            1,
            "Two Sum",
            difficulty,
            "Find two numbers.",
            "[2,7,11,15]\n9",
            BTreeSet::from(["Array".to_string(), "Hash Table".to_string()]),
        )
    }

    #[test]
    fn test_format_markdown_plain() {
        plain();
        let text = "Use a **hash map** and `dict.get`\n- first\n- second";
        assert_eq!(
            ConsoleFormatter::format_markdown(text),
            "Use a hash map and dict.get\n• first\n• second"
        );
    }

    #[test]
    fn test_bullet_only_at_line_start() {
        plain();
        assert_eq!(ConsoleFormatter::format_markdown("a - b"), "a - b");
    }

    #[test]
    fn test_strip_ansi() {
        assert_eq!(
            ConsoleFormatter::strip_ansi("\x1b[1;31mbold\x1b[0m text"),
            "bold text"
        );
    }

    #[test]
    fn test_draw_box_shape() {
        plain();
        let boxed = ConsoleFormatter::draw_box("hello", 11);
        let lines: Vec<&str> = boxed.lines().collect();
        assert_eq!(lines[0], "╭─────────╮");
        assert_eq!(lines[1], "│ hello   │");
        assert_eq!(lines[2], "╰─────────╯");
    }

    #[test]
    fn test_draw_box_wraps_at_spaces() {
        plain();
        let boxed = ConsoleFormatter::draw_box("aaa bbb ccc", 11);
        let lines: Vec<&str> = boxed.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "│ aaa bbb │");
        assert_eq!(lines[2], "│ ccc     │");
    }

    #[test]
    fn test_draw_box_splits_long_words() {
        plain();
        let boxed = ConsoleFormatter::draw_box("abcdefghij", 9);
        let lines: Vec<&str> = boxed.lines().collect();
        assert_eq!(lines[1], "│ abcde │");
        assert_eq!(lines[2], "│ fghij │");
    }

    #[test]
    fn test_draw_box_lines_have_equal_visible_width() {
        let text = "\x1b[31mcoloured words\x1b[0m should not count toward the wrap width at all";
        let boxed = ConsoleFormatter::draw_box(text, 24);
        for line in boxed.lines() {
            assert_eq!(visible_len(line), 24, "bad line: {:?}", line);
        }
    }

    #[test]
    fn test_draw_box_keeps_blank_lines() {
        plain();
        let boxed = ConsoleFormatter::draw_box("one\n\ntwo", 9);
        let lines: Vec<&str> = boxed.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[2], "│       │");
    }

    #[test]
    fn test_problem_header_and_topics() {
        plain();
        let record = record(Difficulty::Medium);
        assert_eq!(
            ConsoleFormatter::format_problem_header(&record),
            "Problem 1: Two Sum (Medium)"
        );
        assert_eq!(
            ConsoleFormatter::format_topics(&record),
            "Topics: Array, Hash Table"
        );
    }

    #[test]
    fn test_enabled_colour_does_not_force_ansi() {
        plain();
        let formatter = ConsoleFormatter::new(&OutputConfig {
            color: true,
            width: 40,
        });
        assert_eq!(ConsoleFormatter::format_user_message("hi"), "[You]: hi");
        assert!(!formatter.format_reply("**hint**").contains('\x1b'));
    }

    #[test]
    fn test_user_message() {
        plain();
        assert_eq!(ConsoleFormatter::format_user_message("hi"), "[You]: hi");
    }
}
