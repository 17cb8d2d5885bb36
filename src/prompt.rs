use crate::data_models::CitationType;
use crate::error::SearchError;

/// System and user instructions sent to the provider for one search.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedPrompt {
    pub system: String,
    pub user: String,
}

/// Falls back to every selectable type when the student picked none.
pub fn effective_types(selected: &[CitationType]) -> Vec<CitationType> {
    let mut types: Vec<CitationType> = Vec::new();
    for t in selected {
        if *t != CitationType::Other && !types.contains(t) {
            types.push(*t);
        }
    }
    if types.is_empty() {
        return CitationType::SELECTABLE.to_vec();
    }
    types
}

pub fn compose(
    topic: &str,
    stance: &str,
    selected: &[CitationType],
) -> Result<ComposedPrompt, SearchError> {
    let topic = topic.trim();
    let stance = stance.trim();
    if topic.is_empty() {
        return Err(SearchError::InvalidInput("topic is empty".to_string()));
    }
    if stance.is_empty() {
        return Err(SearchError::InvalidInput("stance is empty".to_string()));
    }

    let types = effective_types(selected)
        .iter()
        .map(CitationType::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    let system = format!(
        "당신은 학생의 토론 준비를 돕는 AI 연구 보조원입니다.
주어진 토론 주제와 학생의 주장/입장을 바탕으로 신뢰할 수 있는 근거 자료를 찾아 제공하세요.
각 근거 자료는 제목, URL, 요약 또는 핵심 내용, 가능한 경우 날짜 정보(YYYY-MM-DD)를 포함해야 합니다.
다음 근거 자료 유형에 집중하세요: {types}

근거 자료를 찾을 때 다음 사항을 지키세요:
1. 근거 자료를 최소 5개 이상 제시하세요.
2. 그중 뉴스 기사(news)를 최소 2개 이상 포함하세요.
3. 최신 정보를 우선으로 하되, 주제에 따라 역사적 맥락이 중요한 경우 관련 자료도 포함하세요.
4. 한국어 자료를 우선적으로 찾되, 필요시 영어 자료도 포함할 수 있습니다.

응답 형식:
- 첫 문단: 찾은 자료들을 바탕으로 핵심 논점과 근거를 간결하게 요약
- 근거 자료 목록: 각 자료마다 \"제목\", 전체 URL(https://로 시작), 간략한 설명을 한 항목으로 작성
- 각 근거 자료에 유형 태그 지정 (news, academic, statistics, video, other 중 하나)
- 마지막에 '관련 질문:' 아래 후속 질문을 한 줄에 하나씩 작성

응답은 후처리하기 쉽도록 일관된 구조로 작성해주세요."
    );

    let user = format!(
        "토론 주제: {topic}
나의 주장/입장: {stance}
원하는 근거 자료 유형: {types}

이 주장을 뒷받침할 수 있는 신뢰할 수 있는 근거 자료를 찾아주세요."
    );

    Ok(ComposedPrompt { system, user })
}
