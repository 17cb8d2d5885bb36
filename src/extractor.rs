use once_cell::sync::OnceCell;
use regex::Regex;
use thiserror::Error;

use crate::classifier::classify;
use crate::data_models::Citation;

/// Characters of context read before a URL's first occurrence.
pub const BEFORE_WINDOW: usize = 300;
/// Characters of context read after it.
pub const AFTER_WINDOW: usize = 500;

// Exclusive bounds on title length, in characters.
const MIN_TITLE_CHARS: usize = 5;
const MAX_TITLE_CHARS: usize = 200;

const MIN_SNIPPET_CHARS: usize = 10;

const TRAILING_PUNCTUATION: [char; 7] = ['.', ',', ';', ':', '!', '?', '*'];

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid extraction pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("offset {0} is not on a character boundary")]
    Boundary(usize),
}

struct Patterns {
    full_url: Regex,
    bare_domain: Regex,
    known_host: Regex,
    quoted: Regex,
    date: Regex,
}

static PATTERNS: OnceCell<Patterns> = OnceCell::new();

fn patterns() -> Result<&'static Patterns, ParseError> {
    PATTERNS.get_or_try_init(|| {
        Ok(Patterns {
            full_url: Regex::new(r#"(?i)https?://[^\s<>"'()\[\]{}“”‘’]+"#)?,
            bare_domain: Regex::new(
                r#"(?i)(?:www\.)?(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z]{2,}(?:/[^\s<>"'()\[\]{}“”‘’]*)?"#,
            )?,
            known_host: Regex::new(
                r#"(?i)(?:kosis\.kr|kostat\.go\.kr|index\.go\.kr|data\.go\.kr|youtube\.com|youtu\.be|tv\.naver\.com)/[^\s<>"'()\[\]{}“”‘’]*"#,
            )?,
            quoted: Regex::new(r#""([^"\n]+)"|“([^”\n]+)”|'([^'\n]+)'|‘([^’\n]+)’"#)?,
            date: Regex::new(r"\d{4}[-/.]\d{1,2}[-/.]\d{1,2}|\d{1,2}[-/.]\d{1,2}[-/.]\d{4}")?,
        })
    })
}

/// A URL candidate and the byte offset of its first occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlHit {
    pub url: String,
    pub start: usize,
}

fn collect_hits(pattern: &Regex, text: &str, out: &mut Vec<UrlHit>) {
    for m in pattern.find_iter(text) {
        let url = m.as_str().trim_end_matches(TRAILING_PUNCTUATION);
        let bare = url
            .trim_start_matches("https://")
            .trim_start_matches("http://");
        if bare.is_empty() {
            continue;
        }
        out.push(UrlHit {
            url: url.to_string(),
            start: m.start(),
        });
    }
}

/// Runs the full-URL, bare-domain and known-host scans and merges them in
/// order of first occurrence. A hit that is a substring of an accepted URL,
/// or contains one, is dropped, and so is any hit lying inside the text of a
/// hit already looked at.
pub fn scan_urls(text: &str) -> Result<Vec<UrlHit>, ParseError> {
    let patterns = patterns()?;

    let mut hits = Vec::new();
    collect_hits(&patterns.full_url, text, &mut hits);
    collect_hits(&patterns.bare_domain, text, &mut hits);
    collect_hits(&patterns.known_host, text, &mut hits);

    // Earlier first; at the same offset the longer (full) URL goes first.
    hits.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then_with(|| b.url.len().cmp(&a.url.len()))
    });

    // Spans of every hit looked at so far, accepted or not. A hit inside one
    // of them is a partial scan of text already decided on.
    let mut seen: Vec<(usize, usize)> = Vec::new();
    let mut accepted: Vec<UrlHit> = Vec::new();
    for hit in hits {
        let end = hit.start + hit.url.len();
        if seen.iter().any(|&(s, e)| hit.start >= s && end <= e) {
            continue;
        }
        seen.push((hit.start, end));

        let overlaps = accepted
            .iter()
            .any(|a| a.url.contains(&hit.url) || hit.url.contains(&a.url));
        if !overlaps {
            accepted.push(hit);
        }
    }
    Ok(accepted)
}

/// Up to `max_chars` characters ending at byte offset `end`.
pub fn window_before(text: &str, end: usize, max_chars: usize) -> Result<&str, ParseError> {
    let head = text.get(..end).ok_or(ParseError::Boundary(end))?;
    if max_chars == 0 {
        return Ok("");
    }
    let start = head
        .char_indices()
        .rev()
        .nth(max_chars - 1)
        .map(|(i, _)| i)
        .unwrap_or(0);
    Ok(&head[start..])
}

/// Up to `max_chars` characters starting at byte offset `start`.
pub fn window_after(text: &str, start: usize, max_chars: usize) -> Result<&str, ParseError> {
    let tail = text.get(start..).ok_or(ParseError::Boundary(start))?;
    let end = tail
        .char_indices()
        .nth(max_chars)
        .map(|(i, _)| i)
        .unwrap_or(tail.len());
    Ok(&tail[..end])
}

pub fn placeholder_title(index: usize) -> String {
    format!("근거 자료 {}", index + 1)
}

fn title_length_ok(title: &str) -> bool {
    let len = title.chars().count();
    len > MIN_TITLE_CHARS && len < MAX_TITLE_CHARS
}

/// Nearest qualifying quoted text, else the text after the last period.
fn find_title(before: &str, patterns: &Patterns) -> Option<String> {
    let quoted = patterns
        .quoted
        .captures_iter(before)
        .filter_map(|caps| {
            caps.iter()
                .skip(1)
                .flatten()
                .next()
                .map(|m| m.as_str().trim())
        })
        .filter(|t| title_length_ok(t))
        .last();
    if let Some(title) = quoted {
        return Some(title.to_string());
    }

    let (_, tail) = before.rsplit_once('.')?;
    let tail = tail.trim().trim_end_matches([':', '-']).trim_end();
    title_length_ok(tail).then(|| tail.to_string())
}

/// First sentence after the URL, or the first two if the first is too short.
fn find_snippet(after: &str) -> Option<String> {
    let after = after.trim_start_matches(TRAILING_PUNCTUATION);
    let snippet = match after.find('.') {
        Some(first) => {
            let sentence = &after[..=first];
            if sentence.trim().chars().count() < MIN_SNIPPET_CHARS {
                match after[first + 1..].find('.') {
                    Some(second) => &after[..=first + 1 + second],
                    None => after,
                }
            } else {
                sentence
            }
        }
        None => after,
    };
    let snippet = snippet.trim();
    (!snippet.is_empty()).then(|| snippet.to_string())
}

fn find_date(before: &str, after: &str, patterns: &Patterns) -> Option<String> {
    // Nearest to the URL on either side, preceding context first.
    patterns
        .date
        .find_iter(before)
        .last()
        .or_else(|| patterns.date.find(after))
        .map(|m| m.as_str().to_string())
}

/// Absolute form: `//host` gets `https:`, a scheme-less URL gets `https://`.
pub fn normalize_url(url: &str) -> String {
    let lower = url.to_ascii_lowercase();
    if url.starts_with("//") {
        format!("https:{url}")
    } else if lower.starts_with("http://") || lower.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

/// One citation per surviving URL, in first-appearance order.
pub fn extract_citations(text: &str) -> Result<Vec<Citation>, ParseError> {
    let patterns = patterns()?;
    let hits = scan_urls(text)?;

    let mut citations = Vec::with_capacity(hits.len());
    for (index, hit) in hits.iter().enumerate() {
        let end = hit.start + hit.url.len();
        let before = window_before(text, hit.start, BEFORE_WINDOW)?;
        let after = window_after(text, end, AFTER_WINDOW)?;

        let title = find_title(before, patterns).unwrap_or_else(|| placeholder_title(index));
        let citation = Citation::new(title, normalize_url(&hit.url), classify(&hit.url))
            .with_snippet(find_snippet(after))
            .with_date(find_date(before, after, patterns));
        citations.push(citation);
    }

    log::debug!("extracted {} citations", citations.len());
    Ok(citations)
}
