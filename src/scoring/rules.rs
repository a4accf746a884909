//! Weights and vocabularies for the heuristic scorer.
//!
//! Everything the scorer knows about skills, roles and job descriptions is
//! declared here so each table can be audited and tested on its own.

/// Query mentions the assessment duration verbatim.
pub const DURATION_MENTION: i32 = 5;
/// Assessment fits under a requested ceiling.
pub const DURATION_WITHIN_CEILING: i32 = 3;
/// Assessment exceeds a requested ceiling.
pub const DURATION_OVER_CEILING: i32 = -10;
/// Assessment falls inside a requested range.
pub const DURATION_IN_RANGE: i32 = 4;

pub const NAME_TERM: i32 = 2;
pub const TYPE_TERM: i32 = 3;
pub const SKILL_SYNONYM: i32 = 5;
pub const ROLE_SYNONYM: i32 = 5;
pub const ROLE_TYPE_PAIR: i32 = 3;

pub const JD_LANGUAGE: i32 = 4;
pub const JD_FRAMEWORK: i32 = 3;
pub const JD_ROLE: i32 = 3;

/// Tokens of this many characters or fewer are ignored.
pub const MIN_TOKEN_CHARS: usize = 2;

/// Queries longer than this (in characters) are treated as job descriptions.
pub const JOB_DESCRIPTION_CHARS: usize = 500;

/// Test types containing this are matched by every skill synonym and framework.
pub const TECHNICAL_TYPE: &str = "technical";

/// A canonical keyword and the query tokens that point at it.
#[derive(Debug, Clone, Copy)]
pub struct SynonymRule {
    pub keyword: &'static str,
    pub synonyms: &'static [&'static str],
}

impl SynonymRule {
    #[must_use]
    pub fn matches_token(&self, token: &str) -> bool {
        self.synonyms.contains(&token)
    }
}

/// Query keyword that rewards a test-type family.
#[derive(Debug, Clone, Copy)]
pub struct RoleTypePair {
    pub query_keyword: &'static str,
    pub type_fragment: &'static str,
    pub bonus: i32,
}

pub const TECHNICAL_SKILLS: &[SynonymRule] = &[
    SynonymRule { keyword: "java", synonyms: &["java"] },
    SynonymRule { keyword: "javascript", synonyms: &["javascript", "js"] },
    SynonymRule { keyword: "python", synonyms: &["python"] },
    SynonymRule { keyword: "sql", synonyms: &["sql", "database"] },
    SynonymRule { keyword: "html", synonyms: &["html", "html5"] },
    SynonymRule { keyword: "css", synonyms: &["css", "css3"] },
    SynonymRule { keyword: "selenium", synonyms: &["selenium", "testing"] },
    SynonymRule { keyword: "qa", synonyms: &["qa", "test", "testing", "quality"] },
];

pub const ROLES: &[SynonymRule] = &[
    SynonymRule { keyword: "sales", synonyms: &["sales", "selling", "service"] },
    SynonymRule { keyword: "admin", synonyms: &["admin", "administrative", "administration"] },
    SynonymRule { keyword: "qa", synonyms: &["qa", "quality", "tester", "testing"] },
    SynonymRule { keyword: "language", synonyms: &["english", "language", "communication"] },
    SynonymRule { keyword: "marketing", synonyms: &["seo", "marketing", "content"] },
];

pub const ROLE_TYPE_PAIRS: &[RoleTypePair] = &[
    RoleTypePair { query_keyword: "developer", type_fragment: "technical", bonus: ROLE_TYPE_PAIR },
    RoleTypePair { query_keyword: "admin", type_fragment: "administrative", bonus: ROLE_TYPE_PAIR },
    RoleTypePair { query_keyword: "sales", type_fragment: "sales", bonus: ROLE_TYPE_PAIR },
    RoleTypePair { query_keyword: "manager", type_fragment: "comprehensive", bonus: ROLE_TYPE_PAIR },
    RoleTypePair { query_keyword: "writer", type_fragment: "content", bonus: ROLE_TYPE_PAIR },
    RoleTypePair { query_keyword: "analyst", type_fragment: "cognitive", bonus: ROLE_TYPE_PAIR },
    RoleTypePair { query_keyword: "tester", type_fragment: "qa", bonus: ROLE_TYPE_PAIR },
];

pub const JD_LANGUAGES: &[&str] = &["java", "javascript", "python", "sql", "html", "css"];

pub const JD_FRAMEWORKS: &[&str] = &["react", "angular", "vue", "node", "express", "django", "flask"];

pub const JD_ROLES: &[&str] = &[
    "developer", "engineer", "manager", "analyst", "admin", "assistant", "tester", "qa",
];
