//! Job postings as returned by the lookup endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A single job posting. Owned by the server; the client only reads it.
///
/// Every text field defaults to empty so a sparse record still renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub job_posted_on: String,
    #[serde(default)]
    pub fixed_salary: Option<Number>,
    #[serde(default)]
    pub salary_from: Option<Number>,
    #[serde(default)]
    pub salary_to: Option<Number>,
}

/// Body of `GET /api/v1/job/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct JobEnvelope {
    pub job: JobRecord,
}

/// How a job's pay is presented.
#[derive(Debug, Clone, PartialEq)]
pub enum Salary {
    Fixed(Number),
    Range {
        from: Option<Number>,
        to: Option<Number>,
    },
}

impl JobRecord {
    /// A non-zero fixed salary wins; anything else falls back to the range,
    /// even when the range is empty too.
    pub fn salary(&self) -> Salary {
        match &self.fixed_salary {
            Some(fixed) if !is_zero(fixed) => Salary::Fixed(fixed.clone()),
            _ => Salary::Range {
                from: self.salary_from.clone(),
                to: self.salary_to.clone(),
            },
        }
    }
}

fn is_zero(n: &Number) -> bool {
    n.as_f64() == Some(0.0)
}

impl fmt::Display for Salary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Salary::Fixed(amount) => write!(f, "{amount}"),
            Salary::Range { from, to } => {
                if let Some(from) = from {
                    write!(f, "{from}")?;
                }
                f.write_str(" - ")?;
                if let Some(to) = to {
                    write!(f, "{to}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn job(value: serde_json::Value) -> JobRecord {
        serde_json::from_value::<JobEnvelope>(json!({ "job": value }))
            .unwrap()
            .job
    }

    #[test]
    fn test_fixed_salary_alone() {
        let record = job(json!({ "_id": "j1", "title": "Engineer", "fixedSalary": 5000 }));
        assert_eq!(record.id, "j1");
        assert_eq!(record.salary(), Salary::Fixed(Number::from(5000u64)));
        assert_eq!(record.salary().to_string(), "5000");
    }

    #[test]
    fn test_range_when_no_fixed_salary() {
        let record = job(json!({ "title": "Designer", "salaryFrom": 1000, "salaryTo": 2000 }));
        assert_eq!(record.salary().to_string(), "1000 - 2000");
    }

    #[test]
    fn test_zero_fixed_salary_falls_back_to_range() {
        let record = job(json!({ "fixedSalary": 0, "salaryFrom": 10, "salaryTo": 20 }));
        assert_eq!(record.salary().to_string(), "10 - 20");
    }

    #[test]
    fn test_no_salary_renders_empty_ends() {
        let record = job(json!({ "title": "Volunteer" }));
        assert_eq!(
            record.salary(),
            Salary::Range {
                from: None,
                to: None
            }
        );
        assert_eq!(record.salary().to_string(), " - ");
        assert_eq!(record.category, "");
    }

    #[test]
    fn test_camel_case_fields() {
        let record = job(json!({
            "_id": "j2",
            "jobPostedOn": "2024-05-01T00:00:00.000Z",
            "postedBy": "u1",
            "expired": false,
        }));
        assert_eq!(record.job_posted_on, "2024-05-01T00:00:00.000Z");
        assert_eq!(record.id, "j2");
    }
}
