use once_cell::sync::Lazy;
use regex::Regex;

/// Header phrases that introduce a block of follow-up questions.
pub const HEADERS: [&str; 3] = ["더 탐색해 보세요:", "관련 질문:", "추가 질문:"];

const MIN_QUESTION_CHARS: usize = 5;

// Block runs from the header to the next blank line or the end of text.
static BLOCK: Lazy<Option<Regex>> = Lazy::new(|| {
    let headers = HEADERS
        .iter()
        .map(|h| regex::escape(h))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?:{headers})([\s\S]*?)(?:\r?\n[ \t]*\r?\n|\z)"))
        .map_err(|e| log::error!("related question pattern failed to compile: {e}"))
        .ok()
});

/// Follow-up questions from the first header block, or `None` if nothing
/// long enough survives.
pub fn extract_related_questions(text: &str) -> Option<Vec<String>> {
    let block = BLOCK.as_ref()?.captures(text)?.get(1)?.as_str();

    let questions: Vec<String> = block
        .lines()
        .map(|line| {
            let line = line.trim();
            let line = line.strip_prefix(['-', '*', '•']).unwrap_or(line);
            line.trim().to_string()
        })
        .filter(|q| q.chars().count() > MIN_QUESTION_CHARS)
        .collect();

    (!questions.is_empty()).then_some(questions)
}
