use crate::data_models::CitationType;

/// Ordered rule table. The first rule with a matching fragment wins, so a
/// URL that hits both a news and a statistics fragment is `News`.
pub const RULES: &[(CitationType, &[&str])] = &[
    (
        CitationType::Video,
        &[
            "youtube.com",
            "youtu.be",
            "vimeo.com",
            "tv.naver.com",
            "tv.kakao.com",
            "dailymotion.com",
            "ted.com/talks",
        ],
    ),
    (
        CitationType::Academic,
        &[
            "scholar.google",
            "sciencedirect",
            "researchgate",
            "dbpia",
            "riss.kr",
            "kci.go.kr",
            "scienceon.kisti",
            "kiss.kstudy",
            "jstor.org",
            "springer",
            "arxiv.org",
            "pubmed",
            "ncbi.nlm.nih.gov",
            "nature.com",
            ".ac.",
            ".edu",
            "journal",
        ],
    ),
    (
        CitationType::News,
        &[
            "news",
            "article",
            "press",
            "media",
            ".kr/",
            "chosun.com",
            "joongang.co.kr",
            "donga.com",
            "hani.co.kr",
            "khan.co.kr",
            "yna.co.kr",
            "hankyung.com",
            "mk.co.kr",
            "kbs.co.kr",
            "imbc.com",
            "sbs.co.kr",
            "ytn.co.kr",
            "bbc.com",
            "nytimes.com",
            "reuters.com",
        ],
    ),
    (
        CitationType::Statistics,
        &[
            "kosis",
            "kostat",
            "index.go.kr",
            "data.go.kr",
            "statista",
            "oecd.org",
            "worldbank.org",
            "census.gov",
            "ourworldindata",
            "stat",
        ],
    ),
];

/// Buckets a raw (unnormalized) URL by case-insensitive substring checks.
pub fn classify(url: &str) -> CitationType {
    let url = url.to_lowercase();
    RULES
        .iter()
        .find(|(_, fragments)| fragments.iter().any(|f| url.contains(f)))
        .map(|(citation_type, _)| *citation_type)
        .unwrap_or(CitationType::Other)
}
