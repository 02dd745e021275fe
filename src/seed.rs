// src/seed.rs
// Built-in sample catalog and JSON seed file loading

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

use crate::error::{PatternError, Result};
use crate::model::{Pattern, Tag};

/// Which built-in records to load at startup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleData {
    None,
    #[default]
    Default,
    Extended,
}

impl SampleData {
    pub fn patterns(self) -> Vec<Pattern> {
        match self {
            SampleData::None => Vec::new(),
            SampleData::Default => sample_patterns(),
            SampleData::Extended => extended_catalog(),
        }
    }
}

impl fmt::Display for SampleData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleData::None => write!(f, "none"),
            SampleData::Default => write!(f, "default"),
            SampleData::Extended => write!(f, "extended"),
        }
    }
}

impl FromStr for SampleData {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(SampleData::None),
            "default" => Ok(SampleData::Default),
            "extended" => Ok(SampleData::Extended),
            _ => Err(PatternError::Config(format!("Unknown sample data set: {s}"))),
        }
    }
}

// Config files go through the same case-insensitive parsing as the CLI
impl<'de> Deserialize<'de> for SampleData {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

fn solution_url(name: &str) -> String {
    format!("/solution/{name}")
}

fn ecs_with_msk() -> Pattern {
    let name = "ECS with MSK - Rediscache";
    Pattern {
        id: "1".to_string(),
        title: name.to_string(),
        name: name.to_string(),
        url: solution_url(name),
        ring: "identify".to_string(),
        quadrant: "enterprise".to_string(),
        status: "Moved In".to_string(),
        is_new: "FALSE".to_string(),
        description:
            "High availability and performance for customer applications with ECS, MSK, and Redis"
                .to_string(),
        pattern: Vec::new(),
        use_case: Vec::new(),
        tags: vec![
            Tag::new("architecturedesign", "Architecture Design", "Microservices Architecture")
                .with_class("fas fa-cubes"),
            Tag::new("platform", "Platform", "AWS"),
        ],
    }
}

fn data_broker() -> Pattern {
    let name = "Data Broker for SaaS, AWS, and On-Premises Systems";
    Pattern {
        id: "15".to_string(),
        title: name.to_string(),
        name: name.to_string(),
        url: solution_url(name),
        ring: "identify".to_string(),
        quadrant: "data".to_string(),
        status: "Moved In".to_string(),
        is_new: "FALSE".to_string(),
        description: "Scalable broker system for connecting SaaS, AWS, and on-premises systems."
            .to_string(),
        pattern: Vec::new(),
        use_case: vec!["Third-Party Data Connections and Centralized Broker Solutions".to_string()],
        tags: vec![
            Tag::new("architecturedesign", "Architecture Design", "Data Broker")
                .with_class("fas fa-network-wired"),
            Tag::new("architecturedesign", "Architecture Design", "Event Driven Architecture")
                .with_class("fa-broadcast-tower"),
        ],
    }
}

fn external_api_client() -> Pattern {
    let name = "External API Client";
    Pattern {
        id: "16".to_string(),
        title: name.to_string(),
        name: name.to_string(),
        url: solution_url(name),
        ring: "identify".to_string(),
        quadrant: "integration".to_string(),
        status: "Moved In".to_string(),
        is_new: "FALSE".to_string(),
        description:
            "Providing product capabilities to external clients and internal users via Markets."
                .to_string(),
        pattern: Vec::new(),
        use_case: vec!["Public API Design and Security".to_string()],
        tags: vec![
            Tag::new("platform", "Platform", "AWS"),
            Tag::new("platform", "Platform", "ECS"),
            Tag::new("architecturedesign", "Architecture Design", "Microservices Architecture")
                .with_class("fas fa-cubes"),
        ],
    }
}

/// The default sample catalog: a single enterprise/identify record with id "1"
pub fn sample_patterns() -> Vec<Pattern> {
    vec![ecs_with_msk()]
}

/// Default sample plus the data broker ("15") and external API client ("16") records
pub fn extended_catalog() -> Vec<Pattern> {
    vec![ecs_with_msk(), data_broker(), external_api_client()]
}

/// Load a JSON array of patterns from disk
pub fn load_seed_file(path: &Path) -> Result<Vec<Pattern>> {
    let contents = std::fs::read_to_string(path)?;
    let patterns: Vec<Pattern> = serde_json::from_str(&contents)?;

    if let Some(blank) = patterns.iter().position(|p| p.id.trim().is_empty()) {
        return Err(PatternError::InvalidInput(format!(
            "seed entry {blank} in {} has no id",
            path.display()
        )));
    }

    debug!(path = %path.display(), count = patterns.len(), "Loaded seed file");
    Ok(patterns)
}

/// Pretty JSON of `patterns`, ordered by id
pub fn catalog_json(mut patterns: Vec<Pattern>) -> Result<String> {
    patterns.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(serde_json::to_string_pretty(&patterns)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_sample_patterns_single_identify_record() {
        let patterns = sample_patterns();
        assert_eq!(patterns.len(), 1);

        let ecs = &patterns[0];
        assert_eq!(ecs.id, "1");
        assert_eq!(ecs.url, "/solution/ECS with MSK - Rediscache");
        assert_eq!(ecs.tags[0].class_name.as_deref(), Some("fas fa-cubes"));
        assert_eq!(ecs.tags[1].class_name, None);
    }

    #[test]
    fn test_extended_catalog_ids() {
        let ids: Vec<String> = extended_catalog().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["1", "15", "16"]);
    }

    #[test]
    fn test_sample_data_parse() {
        assert_eq!("none".parse::<SampleData>().unwrap(), SampleData::None);
        assert_eq!("Extended".parse::<SampleData>().unwrap(), SampleData::Extended);
        assert_eq!(" DEFAULT ".parse::<SampleData>().unwrap(), SampleData::Default);
        assert!("everything".parse::<SampleData>().is_err());
        assert!(SampleData::None.patterns().is_empty());
        assert_eq!(SampleData::Extended.to_string(), "extended");
    }

    #[test]
    fn test_sample_data_deserialize_ignores_case() {
        let parsed: Vec<SampleData> =
            serde_json::from_str(r#"["Extended", "NONE", "default"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![SampleData::Extended, SampleData::None, SampleData::Default]
        );
        assert!(serde_json::from_str::<SampleData>(r#""all""#).is_err());
        assert_eq!(serde_json::to_string(&SampleData::Extended).unwrap(), r#""extended""#);
    }

    #[test]
    fn test_catalog_json_sorted_by_id() {
        let mut patterns = extended_catalog();
        patterns.reverse();

        let json = catalog_json(patterns).unwrap();
        let parsed: Vec<Pattern> = serde_json::from_str(&json).unwrap();
        let ids: Vec<&str> = parsed.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "15", "16"]);
        assert!(json.lines().count() > 1);
        assert_eq!(catalog_json(Vec::new()).unwrap(), "[]");
    }

    #[test]
    fn test_load_seed_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "42", "name": "Strangler Fig", "ring": "trial", "quadrant": "tools",
                 "tags": [{{"tagId": "platform", "tagName": "Platform", "tagValue": "GCP"}}]}}]"#
        )
        .unwrap();

        let patterns = load_seed_file(file.path()).unwrap();
        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].name, "Strangler Fig");
        assert_eq!(patterns[0].tags[0].tag_value, "GCP");
    }

    #[test]
    fn test_load_seed_file_rejects_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not a list").unwrap();

        let err = load_seed_file(file.path()).unwrap_err();
        assert!(matches!(err, PatternError::Json(_)));
    }

    #[test]
    fn test_load_seed_file_rejects_blank_id() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": "1"}}, {{"name": "anonymous"}}]"#).unwrap();

        let err = load_seed_file(file.path()).unwrap_err();
        assert!(matches!(err, PatternError::InvalidInput(_)));
    }

    #[test]
    fn test_load_seed_file_missing() {
        let err = load_seed_file(Path::new("/nonexistent/patterns.json")).unwrap_err();
        assert!(matches!(err, PatternError::Io(_)));
    }
}
