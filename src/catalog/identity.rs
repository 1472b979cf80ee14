//! Identifiers and closed enumerations carried by every job record.
//!
//! Category, employment type and urgency are closed sets. Deserializing a
//! catalog with a value outside these sets fails, so a loaded `JobRecord`
//! can never hold an unknown label.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable key of a job posting (for example `cwb-welder`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub String);

impl JobId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for JobId {
    fn from(value: &str) -> Self {
        JobId(value.to_string())
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum JobCategory {
    Welding,
    Pipefitting,
    Electrical,
    Operations,
    #[serde(rename = "QA/QC")]
    QaQc,
    Management,
    Administration,
    #[serde(rename = "General Labour")]
    GeneralLabour,
}

impl JobCategory {
    /// Every category in display order.
    pub const ALL: [JobCategory; 8] = [
        JobCategory::Welding,
        JobCategory::Pipefitting,
        JobCategory::Electrical,
        JobCategory::Operations,
        JobCategory::QaQc,
        JobCategory::Management,
        JobCategory::Administration,
        JobCategory::GeneralLabour,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobCategory::Welding => "Welding",
            JobCategory::Pipefitting => "Pipefitting",
            JobCategory::Electrical => "Electrical",
            JobCategory::Operations => "Operations",
            JobCategory::QaQc => "QA/QC",
            JobCategory::Management => "Management",
            JobCategory::Administration => "Administration",
            JobCategory::GeneralLabour => "General Labour",
        }
    }
}

impl TryFrom<&str> for JobCategory {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self> {
        match JobCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
        {
            Some(category) => Ok(category),
            None => bail!("Unknown job category: {value}"),
        }
    }
}

impl fmt::Display for JobCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EmploymentType {
    #[serde(rename = "Full-time")]
    FullTime,
    Contract,
    Apprentice,
}

impl EmploymentType {
    pub const ALL: [EmploymentType; 3] = [
        EmploymentType::FullTime,
        EmploymentType::Contract,
        EmploymentType::Apprentice,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-time",
            EmploymentType::Contract => "Contract",
            EmploymentType::Apprentice => "Apprentice",
        }
    }
}

impl TryFrom<&str> for EmploymentType {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self> {
        match EmploymentType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
        {
            Some(kind) => Ok(kind),
            None => bail!("Unknown employment type: {value}"),
        }
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hiring priority. Only used for badges and the priority-hire count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    Medium,
    Normal,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::High => "high",
            Urgency::Medium => "medium",
            Urgency::Normal => "normal",
        }
    }

    pub fn is_priority(&self) -> bool {
        matches!(self, Urgency::High)
    }
}

impl TryFrom<&str> for Urgency {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self> {
        match value {
            "high" => Ok(Urgency::High),
            "medium" => Ok(Urgency::Medium),
            "normal" => Ok(Urgency::Normal),
            other => bail!("Unknown urgency: {other}"),
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_round_trip_through_serde() {
        for category in JobCategory::ALL {
            let encoded = serde_json::to_string(&category).unwrap();
            assert_eq!(encoded, format!("\"{}\"", category.as_str()));
            let decoded: JobCategory = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, category);
        }
    }

    #[test]
    fn unknown_category_label_is_rejected() {
        assert!(JobCategory::try_from("Plumbing").is_err());
        assert!(serde_json::from_str::<JobCategory>("\"Plumbing\"").is_err());
    }

    #[test]
    fn labels_must_match_exactly() {
        assert_eq!(JobCategory::try_from("QA/QC").unwrap(), JobCategory::QaQc);
        assert!(JobCategory::try_from("qa/qc").is_err());
        assert!(JobCategory::try_from("welding").is_err());
        assert_eq!(
            EmploymentType::try_from("Full-time").unwrap(),
            EmploymentType::FullTime
        );
        assert!(EmploymentType::try_from("full-time").is_err());
        assert!(EmploymentType::try_from("apprentice").is_err());
    }

    #[test]
    fn only_high_urgency_is_priority() {
        assert!(Urgency::High.is_priority());
        assert!(!Urgency::Medium.is_priority());
        assert!(!Urgency::Normal.is_priority());
    }
}
