// src/models/user_agent.rs

use serde::{Deserialize, Serialize};

/// One entry of the weighted browser identity catalog.
///
/// The catalog carries many more fields per record; only these two are read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAgentRecord {
    #[serde(rename = "userAgent")]
    pub user_agent: String,

    /// Popularity score
    pub weight: f64,
}

impl UserAgentRecord {
    pub fn new(user_agent: impl Into<String>, weight: f64) -> Self {
        Self {
            user_agent: user_agent.into(),
            weight,
        }
    }
}

/// Pick the record with the highest weight.
///
/// Among equal weights the last one in catalog order wins.
pub fn select_user_agent(records: &[UserAgentRecord]) -> Option<&UserAgentRecord> {
    records.iter().max_by(|a, b| a.weight.total_cmp(&b.weight))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_max_weight() {
        let records = vec![
            UserAgentRecord::new("low", 0.1),
            UserAgentRecord::new("high", 0.9),
            UserAgentRecord::new("mid", 0.5),
        ];
        assert_eq!(select_user_agent(&records).unwrap().user_agent, "high");
    }

    #[test]
    fn test_select_tie_takes_last() {
        let records = vec![
            UserAgentRecord::new("first", 0.5),
            UserAgentRecord::new("second", 0.5),
        ];
        assert_eq!(select_user_agent(&records).unwrap().user_agent, "second");
    }

    #[test]
    fn test_select_empty() {
        assert!(select_user_agent(&[]).is_none());
    }

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let json = r#"[{"appName":"Netscape","userAgent":"Mozilla/5.0 X","weight":0.0123,"vendor":""}]"#;
        let records: Vec<UserAgentRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records, vec![UserAgentRecord::new("Mozilla/5.0 X", 0.0123)]);
    }
}
