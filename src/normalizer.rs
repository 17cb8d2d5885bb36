use std::collections::HashSet;

use chrono::NaiveDate;

use crate::data_models::{Citation, CitationType, SearchResponse};
use crate::extractor::extract_citations;
use crate::related::extract_related_questions;

pub const PARSE_FAILURE_SUMMARY: &str =
    "근거 자료 검색 결과를 처리하는 과정에서 오류가 발생했습니다.";

/// Synthetic citations live under this reserved example domain.
pub const PLACEHOLDER_BASE_URL: &str = "https://example.com/evidence";

/// Minimums a response is padded up to when the provider text is sparse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddingPolicy {
    pub enabled: bool,
    pub min_total: usize,
    pub min_news: usize,
}

impl Default for PaddingPolicy {
    fn default() -> Self {
        PaddingPolicy {
            enabled: true,
            min_total: 5,
            min_news: 2,
        }
    }
}

impl PaddingPolicy {
    pub fn disabled() -> Self {
        PaddingPolicy {
            enabled: false,
            ..PaddingPolicy::default()
        }
    }
}

struct Template {
    citation_type: CitationType,
    slug: &'static str,
    title: &'static str,
    snippet: &'static str,
}

impl Template {
    fn render(&self, topic: &str, stance: &str, date: Option<String>) -> Citation {
        let fill = |s: &str| s.replace("{topic}", topic).replace("{stance}", stance);
        Citation {
            title: fill(self.title),
            url: format!("{PLACEHOLDER_BASE_URL}/{}", self.slug),
            snippet: Some(fill(self.snippet)),
            date,
            citation_type: self.citation_type,
            placeholder: true,
        }
    }
}

const NEWS_POOL: [Template; 2] = [
    Template {
        citation_type: CitationType::News,
        slug: "news-1",
        title: "[예시] {topic} 관련 최신 보도",
        snippet: "'{stance}' 주장과 관련된 국내 언론 보도를 직접 검색해 확인해 보세요.",
    },
    Template {
        citation_type: CitationType::News,
        slug: "news-2",
        title: "[예시] {topic}: 전문가 의견과 쟁점 정리",
        snippet: "'{stance}'에 대한 찬반 전문가 의견을 다룬 기사를 찾아보세요.",
    },
];

const MIXED_POOL: [Template; 3] = [
    Template {
        citation_type: CitationType::Academic,
        slug: "academic-1",
        title: "[예시] {topic}에 관한 학술 연구",
        snippet: "RISS, DBpia 등 학술 데이터베이스에서 '{stance}' 관련 논문을 찾아보세요.",
    },
    Template {
        citation_type: CitationType::Statistics,
        slug: "statistics-1",
        title: "[예시] {topic} 관련 통계 자료",
        snippet: "KOSIS 국가통계포털에서 '{stance}' 주장을 뒷받침할 수치를 확인해 보세요.",
    },
    Template {
        citation_type: CitationType::Video,
        slug: "video-1",
        title: "[예시] {topic} 관련 영상 자료",
        snippet: "'{topic}'을 다룬 강연이나 다큐멘터리 영상을 참고해 보세요.",
    },
];

/// Keeps the first citation for each exact URL string.
pub fn dedup_by_url(citations: Vec<Citation>) -> Vec<Citation> {
    let mut seen = HashSet::new();
    citations
        .into_iter()
        .filter(|c| seen.insert(c.url.clone()))
        .collect()
}

fn push_unique(citations: &mut Vec<Citation>, citation: Citation) -> bool {
    if citations.iter().any(|c| c.url == citation.url) {
        return false;
    }
    citations.push(citation);
    true
}

/// Appends placeholder news until `min_news` is met, then mixed placeholders
/// until `min_total` is met, each bounded by its pool. Returns how many were
/// added.
pub fn pad_with_placeholders(
    citations: &mut Vec<Citation>,
    topic: &str,
    stance: &str,
    today: NaiveDate,
    policy: &PaddingPolicy,
) -> usize {
    if !policy.enabled {
        return 0;
    }
    let before = citations.len();
    let date = today.format("%Y-%m-%d").to_string();

    let mut news = citations
        .iter()
        .filter(|c| c.citation_type == CitationType::News)
        .count();
    for template in &NEWS_POOL {
        if news >= policy.min_news {
            break;
        }
        if push_unique(citations, template.render(topic, stance, Some(date.clone()))) {
            news += 1;
        }
    }

    for template in &MIXED_POOL {
        if citations.len() >= policy.min_total {
            break;
        }
        push_unique(citations, template.render(topic, stance, None));
    }

    citations.len() - before
}

/// First paragraph of the reply: lines up to the first blank one.
pub fn summarize(content: &str) -> String {
    content
        .trim()
        .lines()
        .take_while(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn parse_failure_response() -> SearchResponse {
    SearchResponse {
        summary: PARSE_FAILURE_SUMMARY.to_string(),
        citations: Vec::new(),
        related_questions: None,
    }
}

/// Turns raw provider text into the response sent to the student. Extraction
/// failures are recovered into an apology summary with no citations.
pub fn build_search_response(
    content: &str,
    topic: &str,
    stance: &str,
    today: NaiveDate,
    policy: &PaddingPolicy,
) -> SearchResponse {
    let citations = match extract_citations(content) {
        Ok(citations) => citations,
        Err(e) => {
            log::error!("failed to parse provider response: {:#}", e);
            return parse_failure_response();
        }
    };

    let mut citations = dedup_by_url(citations);
    let extracted = citations.len();
    let padded = pad_with_placeholders(&mut citations, topic, stance, today, policy);
    if padded > 0 {
        log::info!("padded {extracted} extracted citations with {padded} placeholders");
    }

    SearchResponse {
        summary: summarize(content),
        citations,
        related_questions: extract_related_questions(content),
    }
}
