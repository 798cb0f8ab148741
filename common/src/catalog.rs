//! Fixed wizard catalogs: suggested sites, profession labels and named
//! keyword preset groups.


pub const SITE_SUGGESTIONS: &[&str] = &[
    "github.com",
    "linkedin.com",
    "wellfound.com",
    "stackoverflow.com",
    "glassdoor.com",
    "indeed.com",
    "lever.co",
    "greenhouse.io",
    "hired.com",
    "monster.com",
    "ziprecruiter.com",
    "careerbuilder.com",
    "dribbble.com",
    "behance.net",
    "remoteok.com",
    "weworkremotely.com",
    "eurojobs.com",
    "jobsite.co.uk",
    "reed.co.uk",
    "stepstone.de",
    "jobs.ch",
    "irishjobs.ie",
];

pub const TYPE_OPTIONS: &[&str] = &[
    "frontend",
    "backend",
    "fullstack",
    "devops",
    "mobile",
    "data engineer",
    "data scientist",
    "machine learning engineer",
    "ai engineer",
    "mlops engineer",
    "research scientist",
    "analytics engineer",
    "llm engineer",
    "nlp engineer",
    "computer vision",
    "platform engineer",
    "sre",
    "security engineer",
];


/// One named group of keyword suggestions.
pub struct KeywordPreset {
    pub group: &'static str,
    pub terms: &'static [&'static str],
}

pub const KEYWORD_PRESETS: &[KeywordPreset] = &[
    KeywordPreset {
        group: "Frontend",
        terms: &["react", "typescript", "angular", "vue", "next.js", "vite"],
    },
    KeywordPreset {
        group: "Backend",
        terms: &["node", "java", "python", "golang", "django", "spring boot"],
    },
    KeywordPreset {
        group: "Mobile",
        terms: &["react native", "flutter", "swift", "kotlin", "android", "ios"],
    },
    KeywordPreset {
        group: "Data & AI",
        terms: &[
            "machine learning",
            "deep learning",
            "nlp",
            "pytorch",
            "tensorflow",
            "llm",
        ],
    },
];
