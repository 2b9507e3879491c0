//! Line classifier and match parser.
//!
//! Works on the visible text of the league page, one line at a time:
//! round headers ("Jornada N") set the current round, bye lines
//! ("DESCANSA …") are recognized and dropped, and scorelines
//! ("Home Team  Away Team 2-1") become [`Match`] records. Every other
//! line is skipped silently; parsing never fails.

use crate::domain::model::Match;

pub const DEFAULT_ROUND_KEYWORD: &str = "Jornada";
pub const DEFAULT_BYE_MARKER: &str = "DESCANSA";

/// Trailing marker on the bye lines of the source page, e.g. "DESCANSA Epsilon ---".
const BYE_SUFFIX: &str = "---";

pub struct MatchParser {
    round_keyword: String,
    bye_marker: String,
}

impl Default for MatchParser {
    fn default() -> Self {
        Self::new(DEFAULT_ROUND_KEYWORD, DEFAULT_BYE_MARKER)
    }
}

impl MatchParser {
    pub fn new(round_keyword: impl Into<String>, bye_marker: impl Into<String>) -> Self {
        Self {
            round_keyword: round_keyword.into(),
            bye_marker: bye_marker.into(),
        }
    }

    /// Extract all scorelines from the page text, tagged with the round
    /// in effect at their position. Lines before the first round header
    /// are ignored.
    pub fn parse(&self, text: &str) -> Vec<Match> {
        let mut matches = Vec::new();
        let mut round: Option<u32> = None;

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(n) = self.round_header(line) {
                // Rounds are numbered from 1; a zero header clears the
                // round in effect instead of tagging matches with it.
                round = (n > 0).then_some(n);
                continue;
            }

            let Some(round) = round else {
                continue;
            };

            if self.is_bye_line(line) {
                continue;
            }

            if let Some((home, away, home_goals, away_goals)) = split_scoreline(line) {
                let home_team = normalize_team(home);
                let away_team = normalize_team(away);
                if home_team.is_empty() || away_team.is_empty() {
                    continue;
                }
                matches.push(Match {
                    round,
                    home_team,
                    away_team,
                    home_goals,
                    away_goals,
                });
            }
        }

        matches
    }

    /// "Jornada 12" → Some(12). The keyword is matched case-insensitively
    /// and the whole line must be keyword + whitespace + integer. Returns
    /// the number as written; the caller decides what zero means.
    fn round_header(&self, line: &str) -> Option<u32> {
        let rest = strip_prefix_ci(line, &self.round_keyword)?;
        // Require at least one whitespace char between keyword and number.
        let trimmed = rest.trim_start();
        if trimmed.len() == rest.len() {
            return None;
        }
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        trimmed.parse().ok()
    }

    fn is_bye_line(&self, line: &str) -> bool {
        line.starts_with(&self.bye_marker)
            || (line.ends_with(BYE_SUFFIX) && line.contains(&self.bye_marker))
    }
}

/// Case-insensitive version of `str::strip_prefix`.
fn strip_prefix_ci<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let mut chars = line.char_indices();
    for expected in prefix.chars() {
        let (_, got) = chars.next()?;
        if !got.eq_ignore_ascii_case(&expected) {
            return None;
        }
    }
    match chars.next() {
        Some((i, _)) => Some(&line[i..]),
        None => Some(""),
    }
}

/// Split a scoreline into (home, away, home goals, away goals).
///
/// Shape: home segment, whitespace, away segment, whitespace, "H-A" at end
/// of line. Both segments may contain spaces, so the split is ambiguous in
/// general; the home segment is the shortest prefix that still lets the
/// rest of the line match. The home/away boundary prefers a run of two or
/// more whitespace characters, which is how the rendered page separates
/// its columns; when the line has no such run, any single space can be
/// the boundary.
fn split_scoreline(line: &str) -> Option<(&str, &str, u32, u32)> {
    split_at_boundary(line, 2).or_else(|| split_at_boundary(line, 1))
}

fn split_at_boundary(line: &str, min_gap: usize) -> Option<(&str, &str, u32, u32)> {
    for (start, end, len) in whitespace_runs(line) {
        if len < min_gap || start == 0 {
            continue;
        }
        let home = &line[..start];
        if let Some((away, hg, ag)) = split_away_and_score(&line[end..]) {
            return Some((home, away, hg, ag));
        }
    }
    None
}

/// Shortest away segment whose remainder is whitespace + "H-A" at end.
fn split_away_and_score(rest: &str) -> Option<(&str, u32, u32)> {
    for (start, end, _) in whitespace_runs(rest) {
        if start == 0 {
            continue;
        }
        if let Some((hg, ag)) = parse_score(&rest[end..]) {
            return Some((&rest[..start], hg, ag));
        }
    }
    None
}

/// "2-1" → Some((2, 1)); anything else → None.
fn parse_score(s: &str) -> Option<(u32, u32)> {
    let (h, a) = s.split_once('-')?;
    if h.is_empty() || a.is_empty() {
        return None;
    }
    if !h.bytes().all(|b| b.is_ascii_digit()) || !a.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((h.parse().ok()?, a.parse().ok()?))
}

/// Maximal whitespace runs as (byte start, byte end, char count), left to right.
fn whitespace_runs(s: &str) -> Vec<(usize, usize, usize)> {
    let mut runs = Vec::new();
    let mut current: Option<(usize, usize)> = None;

    for (i, ch) in s.char_indices() {
        if ch.is_whitespace() {
            match current.as_mut() {
                Some((_, count)) => *count += 1,
                None => current = Some((i, 1)),
            }
        } else if let Some((start, count)) = current.take() {
            runs.push((start, i, count));
        }
    }
    if let Some((start, count)) = current {
        runs.push((start, s.len(), count));
    }
    runs
}

/// Collapse whitespace runs, canonicalize apostrophes to U+2019, trim.
pub fn normalize_team(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;

    for ch in raw.trim().chars() {
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        match ch {
            '\'' | '\u{2018}' | '\u{2019}' | '\u{02BC}' => out.push('\u{2019}'),
            other => out.push(other),
        }
    }
    out
}
