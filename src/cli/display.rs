// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal styling for the tally CLI.
//!
//! Pair output is never styled: it has to match snapshot text byte for byte.
//! Styling is for the conformance report box and the stderr status lines.
//! The palette follows `TALLY_THEME` ("dark" or "light"), then the
//! `COLORFGBG` background hint, and falls back to dark (OneDark / One Light).
//! `NO_COLOR` or a non-TTY stream turns color off.

use std::fmt::Write;
use std::sync::OnceLock;

/// Inner width of the report box, between the two `│` borders.
pub const BOX_WIDTH: usize = 80;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

// ═══════════════════════════════════════════════════════════════════════════
// THEME
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// What a piece of text means. Each theme maps roles to a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Fail,
    Pass,
    Warn,
    Label,
    Muted,
}

impl Theme {
    fn rgb(self, role: Role) -> (u8, u8, u8) {
        match (self, role) {
            (Theme::Dark, Role::Fail) => (224, 108, 117),
            (Theme::Dark, Role::Pass) => (152, 195, 121),
            (Theme::Dark, Role::Warn) => (229, 192, 123),
            (Theme::Dark, Role::Label) => (86, 182, 194),
            (Theme::Dark, Role::Muted) => (92, 99, 112),
            (Theme::Light, Role::Fail) => (228, 86, 73),
            (Theme::Light, Role::Pass) => (80, 161, 79),
            (Theme::Light, Role::Warn) => (193, 132, 1),
            (Theme::Light, Role::Label) => (1, 132, 188),
            (Theme::Light, Role::Muted) => (160, 161, 167),
        }
    }
}

fn parse_theme(name: &str) -> Option<Theme> {
    match name.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// `COLORFGBG` is "fg;bg"; background 7 and up (except 8) is light.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg = value.rsplit(';').next()?.parse::<u8>().ok()?;
    Some(if bg >= 7 && bg != 8 {
        Theme::Light
    } else {
        Theme::Dark
    })
}

fn detect_theme() -> Theme {
    std::env::var("TALLY_THEME")
        .ok()
        .and_then(|name| parse_theme(&name))
        .or_else(|| {
            std::env::var("COLORFGBG")
                .ok()
                .and_then(|value| theme_from_colorfgbg(&value))
        })
        .unwrap_or(Theme::Dark)
}

/// The active theme, detected once per process.
pub fn theme() -> Theme {
    static THEME: OnceLock<Theme> = OnceLock::new();
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// STYLING
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

fn colors_enabled(stream: Stream) -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    match stream {
        Stream::Stdout => atty::is(atty::Stream::Stdout),
        Stream::Stderr => atty::is(atty::Stream::Stderr),
    }
}

fn style(theme: Theme, role: Role, bold: bool, text: &str) -> String {
    let (r, g, b) = theme.rgb(role);
    let weight = if bold { BOLD } else { "" };
    format!("{}\x1b[38;2;{};{};{}m{}{}", weight, r, g, b, text, RESET)
}

/// `text` in the color for `role`, or unchanged when `stream` is plain.
pub fn paint(stream: Stream, role: Role, bold: bool, text: &str) -> String {
    if colors_enabled(stream) {
        style(theme(), role, bold, text)
    } else {
        text.to_string()
    }
}

/// Length as it appears on screen, skipping ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        match c {
            '\x1b' => in_escape = true,
            'm' if in_escape => in_escape = false,
            _ if !in_escape => len += 1,
            _ => {}
        }
    }
    len
}

/// Shorten plain text to `max` characters, ending in `…`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

// ═══════════════════════════════════════════════════════════════════════════
// OUTPUT
// ═══════════════════════════════════════════════════════════════════════════

/// Lay out `rows` in a box titled `label`, padded to `BOX_WIDTH`.
pub fn boxed(label: &str, rows: &[String]) -> String {
    let border = |s: &str| paint(Stream::Stdout, Role::Muted, false, s);
    let title = format!("─ {} ", paint(Stream::Stdout, Role::Label, true, label));
    let fill = BOX_WIDTH.saturating_sub(visible_len(&title));

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}{}{}",
        border("┌"),
        title,
        border(&format!("{}┐", "─".repeat(fill)))
    );
    for row in rows {
        let pad = BOX_WIDTH.saturating_sub(visible_len(row));
        let _ = writeln!(out, "{}{}{}{}", border("│"), row, " ".repeat(pad), border("│"));
    }
    out.push_str(&border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
    out
}

pub fn outcome_mark(passed: bool) -> String {
    if passed {
        paint(Stream::Stdout, Role::Pass, true, "✓")
    } else {
        paint(Stream::Stdout, Role::Fail, true, "✗")
    }
}

/// Diagnostic line on stderr.
pub fn status(message: &str) {
    eprintln!("{} {}", paint(Stream::Stderr, Role::Muted, false, "›"), message);
}

pub fn warn(message: &str) {
    eprintln!("{} {}", paint(Stream::Stderr, Role::Warn, true, "!"), message);
}

pub fn error(message: &str) {
    eprintln!("{} {}", paint(Stream::Stderr, Role::Fail, true, "❌"), message);
}
