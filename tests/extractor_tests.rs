use debate_evidence::data_models::CitationType;
use debate_evidence::extractor::*;

#[test]
fn test_no_urls_yields_no_citations() {
    let citations = extract_citations("근거를 찾지 못했습니다. 다른 주제로 시도해 보세요.").unwrap();
    assert!(citations.is_empty());
}

#[test]
fn test_quoted_title_is_preferred() {
    let text = "첫 문장입니다. 관련 보도 \"AI 위협론 확산\" 기사 https://news.example.kr/article/1 에서 전문가들은 위험을 경고했다. 다음 문장.";
    let citations = extract_citations(text).unwrap();

    assert_eq!(citations.len(), 1);
    let c = &citations[0];
    assert_eq!(c.title, "AI 위협론 확산");
    assert_eq!(c.url, "https://news.example.kr/article/1");
    assert_eq!(c.citation_type, CitationType::News);
    assert_eq!(c.snippet.as_deref(), Some("에서 전문가들은 위험을 경고했다."));
    assert_eq!(c.date, None);
    assert!(!c.placeholder);
}

#[test]
fn test_nearest_quote_wins() {
    let text = "\"첫 번째 제목입니다\" 그리고 \"두 번째 제목입니다\" https://x.example.org/a";
    let citations = extract_citations(text).unwrap();
    assert_eq!(citations[0].title, "두 번째 제목입니다");
}

#[test]
fn test_title_after_last_period() {
    let text = "첫 문장입니다. 한국은행 경제 전망 보고서 https://www.bok.or.kr/report 참고";
    let citations = extract_citations(text).unwrap();
    assert_eq!(citations[0].title, "한국은행 경제 전망 보고서");
}

#[test]
fn test_title_length_bounds_are_exclusive() {
    // five characters in quotes is too short and there is no period to fall back on
    let citations = extract_citations("\"가나다라마\" https://x.example.org/a").unwrap();
    assert_eq!(citations[0].title, "근거 자료 1");

    let citations = extract_citations("\"가나다라마바\" https://x.example.org/a").unwrap();
    assert_eq!(citations[0].title, "가나다라마바");
}

#[test]
fn test_placeholder_title_uses_position() {
    let filler = "가".repeat(310);
    let text = format!(
        "첫 링크 https://one.example.org/a {filler} 두 번째 링크 https://two.example.org/b"
    );
    let citations = extract_citations(&text).unwrap();

    assert_eq!(citations.len(), 2);
    assert_eq!(citations[0].title, "근거 자료 1");
    assert_eq!(citations[1].title, "근거 자료 2");
    assert_eq!(placeholder_title(2), "근거 자료 3");
}

#[test]
fn test_date_in_preceding_context() {
    let text = "통계청 보도자료 2023-11-30에 따르면 https://kostat.go.kr/board/1 참조";
    let citations = extract_citations(text).unwrap();
    assert_eq!(citations.len(), 1);
    assert_eq!(citations[0].date.as_deref(), Some("2023-11-30"));
}

#[test]
fn test_date_preceding_checked_before_following() {
    let text = "발표일 2023/1/2 https://x.example.org/a 갱신 2024/3/4 기준.";
    let citations = extract_citations(text).unwrap();
    assert_eq!(citations[0].date.as_deref(), Some("2023/1/2"));

    let text = "자료 https://x.example.org/stats 2024.01.05 발표.";
    let citations = extract_citations(text).unwrap();
    assert_eq!(citations[0].date.as_deref(), Some("2024.01.05"));

    let text = "자료 https://x.example.org/a 게시일 5.3.2021 입니다.";
    let citations = extract_citations(text).unwrap();
    assert_eq!(citations[0].date.as_deref(), Some("5.3.2021"));
}

#[test]
fn test_invalid_calendar_date_is_kept() {
    let text = "발표 2023-13-45 https://x.example.org/a";
    let citations = extract_citations(text).unwrap();
    assert_eq!(citations[0].date.as_deref(), Some("2023-13-45"));
}

#[test]
fn test_bare_domain_is_normalized() {
    let text = "세계은행 자료 data.worldbank.org/indicator/SP.POP 참고";
    let citations = extract_citations(text).unwrap();
    assert_eq!(citations.len(), 1);
    assert_eq!(citations[0].url, "https://data.worldbank.org/indicator/SP.POP");
    assert_eq!(citations[0].citation_type, CitationType::Statistics);
}

#[test]
fn test_full_url_suppresses_its_bare_domain() {
    let hits = scan_urls("영상 https://www.youtube.com/watch?v=abc123 보기").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].url, "https://www.youtube.com/watch?v=abc123");
}

#[test]
fn test_known_host_without_scheme() {
    let citations = extract_citations("영상:youtu.be/xyz789 참고").unwrap();
    assert_eq!(citations.len(), 1);
    assert_eq!(citations[0].url, "https://youtu.be/xyz789");
    assert_eq!(citations[0].citation_type, CitationType::Video);
}

#[test]
fn test_first_occurrence_order_and_repeats() {
    let text = "A https://a.example.org/x B https://b.example.org/y 다시 A https://a.example.org/x";
    let hits = scan_urls(text).unwrap();
    let urls: Vec<&str> = hits.iter().map(|h| h.url.as_str()).collect();
    assert_eq!(urls, vec!["https://a.example.org/x", "https://b.example.org/y"]);
    assert_eq!(hits[0].start, 2);
}

#[test]
fn test_url_containing_an_accepted_url_is_suppressed() {
    let text = "https://a.example.org/x 그리고 https://a.example.org/x/more";
    let hits = scan_urls(text).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].url, "https://a.example.org/x");
}

#[test]
fn test_url_stops_at_brackets_and_quotes() {
    let hits = scan_urls("[기사](https://news.example.com/a) \"https://b.example.com/c\"").unwrap();
    let urls: Vec<&str> = hits.iter().map(|h| h.url.as_str()).collect();
    assert_eq!(urls, vec!["https://news.example.com/a", "https://b.example.com/c"]);
}

#[test]
fn test_decimal_numbers_are_not_domains() {
    let hits = scan_urls("성장률은 2023.11.30 기준 3.5%였다.").unwrap();
    assert!(hits.is_empty());
}

#[test]
fn test_normalize_url() {
    assert_eq!(normalize_url("example.org/a"), "https://example.org/a");
    assert_eq!(normalize_url("//cdn.example.org/a"), "https://cdn.example.org/a");
    assert_eq!(normalize_url("http://example.org"), "http://example.org");
    assert_eq!(normalize_url("https://example.org"), "https://example.org");
}

#[test]
fn test_suppressed_url_does_not_return_without_scheme() {
    let text = "http://a.example.org/x 그리고 http://a.example.org/x/more";
    let citations = extract_citations(text).unwrap();
    assert_eq!(citations.len(), 1);
    assert_eq!(citations[0].url, "http://a.example.org/x");
}

#[test]
fn test_adjacent_items_keep_their_own_dates() {
    let text = "1. \"첫 번째 기사 제목\" 2023-01-01 https://a.example.kr/news/1 설명입니다.\n2. \"두 번째 기사 제목\" 2024-02-02 https://b.example.kr/news/2 설명입니다.";
    let citations = extract_citations(text).unwrap();

    assert_eq!(citations.len(), 2);
    assert_eq!(citations[0].title, "첫 번째 기사 제목");
    assert_eq!(citations[0].date.as_deref(), Some("2023-01-01"));
    assert_eq!(citations[1].title, "두 번째 기사 제목");
    assert_eq!(citations[1].date.as_deref(), Some("2024-02-02"));
}

#[test]
fn test_snippet_skips_punctuation_stripped_from_url() {
    let text = "자료 https://example.org/report, 정부가 발표한 공식 자료입니다. 끝";
    let citations = extract_citations(text).unwrap();
    assert_eq!(citations[0].url, "https://example.org/report");
    assert_eq!(
        citations[0].snippet.as_deref(),
        Some("정부가 발표한 공식 자료입니다.")
    );
}
