//! Static skill keyword catalog
//!
//! The catalog order is significant: extraction and matching report keywords
//! in this order, never in input order.

/// Known skill and technology terms, in reporting order.
pub const SKILL_CATALOG: &[&str] = &[
    "C#", "ASP.NET", ".NET Core", ".NET", "Python", "Java", "Go", "Ruby", "PHP",
    "SQL", "NoSQL", "PostgreSQL", "MySQL", "MongoDB", "Redis", "Elasticsearch",
    "Azure", "AWS", "Google Cloud", "GCP", "Docker", "Kubernetes", "Terraform", "CI/CD",
    "React", "Angular", "Vue", "JavaScript", "TypeScript", "HTML", "CSS", "Node.js", "jQuery",
    "Microservices", "API", "REST", "Agile", "Scrum", "Git", "Jira", "TDD",
    "Machine Learning", "Data Science", "AI", "Artificial Intelligence", "Deep Learning", "NLP",
];

/// Fallback target set used when a job description is blank or contains no
/// recognizable catalog term. A deliberate policy, not an error case.
pub const FALLBACK_KEYWORDS: &[&str] = &["C#", ".NET", "React", "SQL", "Azure"];

pub fn fallback_keywords() -> Vec<String> {
    FALLBACK_KEYWORDS.iter().map(|s| s.to_string()).collect()
}
