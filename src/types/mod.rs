use serde::{Deserialize, Serialize};

// ============= Search Parameters =============

/// Parameters for a job search against the upstream jobs endpoint.
///
/// `city` and `job_title` use the empty string for "not set"; latitude and
/// longitude are only emitted as filters when both are non-zero.
#[derive(Debug, Clone, PartialEq)]
pub struct JobSearchParams {
    pub page: u32,
    pub limit: u32,
    pub sort: String,
    pub city: String,
    pub job_title: String,
    pub latitude: f64,
    pub longitude: f64,
    pub distance: f64,
}

impl Default for JobSearchParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            sort: "relevance".to_string(),
            city: String::new(),
            job_title: String::new(),
            latitude: 0.0,
            longitude: 0.0,
            distance: 40.0,
        }
    }
}

// ============= Upstream Response Types =============

/// Response from the function-titles suggestion endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionTitlesResponse {
    pub suggestions: Vec<String>,
}

/// Geographic coordinates with numeric types.
///
/// The upstream transmits these as strings; the client parses them into f64
/// during decoding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Response from the geolocation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoLocationResponse {
    pub city_center: Coordinates,
    pub city_name: String,
}

// ============= Job Listing Types =============

/// Paginated response from the jobs search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobsResponse {
    pub page: u32,
    pub limit: u32,
    pub pages: u32,
    pub total: u32,
    #[serde(rename = "_links", default)]
    pub links: Links,
    #[serde(rename = "_embedded", default)]
    pub embedded: EmbeddedJobs,
}

/// Hyperlink references for paging through a jobs response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "self", default)]
    pub self_link: Link,
    #[serde(default)]
    pub first: Link,
    #[serde(default)]
    pub last: Link,
    #[serde(default)]
    pub next: Link,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmbeddedJobs {
    #[serde(default)]
    pub jobs: Vec<Job>,
}

/// A single job listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub dco_title: String,
    pub description: String,
    pub company: Company,
    pub salary: SalaryRange,
    pub contract_type: String,
    pub career_level: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub industries: Vec<String>,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    pub working_hours: HoursRange,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub website: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoursRange {
    pub min: u32,
    pub max: u32,
}

// ============= Error Types =============

/// Boxed error cause carried inside [`NvbError::Api`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors produced by the upstream client.
///
/// `Api` covers transport failures (status 0), non-2xx responses (status from
/// the response, raw body as message) and decode failures. `Validation` is
/// raised before any network call happens.
#[derive(Debug, thiserror::Error)]
pub enum NvbError {
    #[error("API error {status} at {endpoint}: {message}")]
    Api {
        status: u16,
        message: String,
        endpoint: String,
        source: Option<BoxError>,
    },

    #[error("validation error for parameter '{parameter}' (value: {value}): {message}")]
    Validation {
        parameter: &'static str,
        value: String,
        message: &'static str,
    },
}

impl NvbError {
    pub fn api(
        status: u16,
        message: impl Into<String>,
        endpoint: impl Into<String>,
        source: Option<BoxError>,
    ) -> Self {
        Self::Api {
            status,
            message: message.into(),
            endpoint: endpoint.into(),
            source,
        }
    }

    pub fn validation(
        parameter: &'static str,
        value: impl std::fmt::Display,
        message: &'static str,
    ) -> Self {
        Self::Validation {
            parameter,
            value: value.to_string(),
            message,
        }
    }
}

pub type Result<T> = std::result::Result<T, NvbError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_job(id: &str) -> Job {
        Job {
            id: id.to_string(),
            title: "Rust Engineer".to_string(),
            dco_title: "Software Engineer".to_string(),
            description: "Build backend services".to_string(),
            company: Company {
                name: "Acme BV".to_string(),
                website: "https://acme.example".to_string(),
                slug: "acme-bv".to_string(),
                kind: "direct".to_string(),
            },
            salary: SalaryRange {
                min: 3500,
                max: 5200,
            },
            contract_type: "fulltime".to_string(),
            career_level: "medior".to_string(),
            categories: vec!["ICT".to_string()],
            industries: vec![],
            start_date: "2024-01-01".to_string(),
            end_date: "2024-02-01".to_string(),
            status: "open".to_string(),
            working_hours: HoursRange { min: 32, max: 40 },
        }
    }

    fn sample_response(jobs: Vec<Job>) -> JobsResponse {
        JobsResponse {
            page: 1,
            limit: 10,
            pages: 3,
            total: 25,
            links: Links {
                self_link: Link {
                    href: "/jobs?page=1".to_string(),
                },
                first: Link {
                    href: "/jobs?page=1".to_string(),
                },
                last: Link {
                    href: "/jobs?page=3".to_string(),
                },
                next: Link {
                    href: "/jobs?page=2".to_string(),
                },
            },
            embedded: EmbeddedJobs { jobs },
        }
    }

    #[test]
    fn jobs_response_round_trip_empty() {
        let response = sample_response(vec![]);
        let encoded = serde_json::to_string(&response).unwrap();
        let decoded: JobsResponse = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded.total, 25);
        assert!(decoded.embedded.jobs.is_empty());
        // Empty job list must still be present in the encoded form
        assert!(encoded.contains("\"_embedded\""));
        assert!(encoded.contains("\"jobs\":[]"));
    }

    #[test]
    fn jobs_response_round_trip_single() {
        let response = sample_response(vec![sample_job("1")]);
        let encoded = serde_json::to_string(&response).unwrap();
        let decoded: JobsResponse = serde_json::from_str(&encoded).unwrap();

        let job = &decoded.embedded.jobs[0];
        assert_eq!(job.id, "1");
        assert_eq!(job.company.name, "Acme BV");
        assert_eq!(job.company.kind, "direct");
        assert_eq!(job.salary.min, 3500);
        assert_eq!(job.salary.max, 5200);
        assert_eq!(job.working_hours.max, 40);
        // Empty industries survive as an empty set, not as absence
        assert!(job.industries.is_empty());
        assert!(encoded.contains("\"industries\":[]"));
    }

    #[test]
    fn jobs_response_round_trip_many() {
        let jobs: Vec<Job> = (0..5).map(|i| sample_job(&i.to_string())).collect();
        let response = sample_response(jobs);
        let encoded = serde_json::to_string(&response).unwrap();
        let decoded: JobsResponse = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded.embedded.jobs.len(), 5);
        assert_eq!(decoded.links.next.href, "/jobs?page=2");
        assert_eq!(decoded.links.self_link.href, "/jobs?page=1");
    }

    #[test]
    fn job_decodes_upstream_field_names() {
        let payload = json!({
            "id": "j-42",
            "title": "Verpleegkundige",
            "dcoTitle": "Nurse",
            "description": "Zorg",
            "company": {"name": "Ziekenhuis", "website": "", "slug": "zh", "type": "direct"},
            "salary": {"min": 2800, "max": 3900},
            "contractType": "parttime",
            "careerLevel": "senior",
            "categories": [],
            "industries": ["healthcare"],
            "startDate": "2024-03-01",
            "endDate": "2024-04-01",
            "status": "open",
            "workingHours": {"min": 24, "max": 32}
        });

        let job: Job = serde_json::from_value(payload).unwrap();
        assert_eq!(job.dco_title, "Nurse");
        assert_eq!(job.contract_type, "parttime");
        assert_eq!(job.working_hours.min, 24);
        assert!(job.categories.is_empty());
    }

    #[test]
    fn jobs_response_tolerates_missing_links() {
        let payload = json!({
            "page": 1,
            "limit": 10,
            "pages": 0,
            "total": 0
        });

        let decoded: JobsResponse = serde_json::from_value(payload).unwrap();
        assert!(decoded.links.next.href.is_empty());
        assert!(decoded.embedded.jobs.is_empty());
    }

    #[test]
    fn api_error_display_includes_status_and_endpoint() {
        let err = NvbError::api(404, "not found", "https://api.example/jobs", None);
        assert_eq!(
            err.to_string(),
            "API error 404 at https://api.example/jobs: not found"
        );
    }

    #[test]
    fn validation_error_display_names_parameter_and_value() {
        let err = NvbError::validation("limit", 101, "limit must be <= 100");
        assert_eq!(
            err.to_string(),
            "validation error for parameter 'limit' (value: 101): limit must be <= 100"
        );
    }
}
