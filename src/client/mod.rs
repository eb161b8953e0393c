//! HTTP client for the Nationale Vacaturebank REST API.
//!
//! All four operations are single best-effort GET round trips: build a URL,
//! perform the request with the configured timeout, decode the JSON body into
//! a typed response. Failures surface immediately as [`NvbError`] values with
//! full diagnostic context; there are no retries and no caching.

use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::types::{
    Coordinates, FunctionTitlesResponse, GeoLocationResponse, JobSearchParams, JobsResponse,
    NvbError, Result,
};

const SITE: &str = "nationalevacaturebank.nl";

/// Client for the upstream job-listing API.
///
/// Holds an immutable base URL and a pooled `reqwest::Client`; cloning is
/// cheap and the client is safe for concurrent use.
#[derive(Debug, Clone)]
pub struct NvbClient {
    http: reqwest::Client,
    base_url: Url,
}

impl NvbClient {
    /// Create a client against `base_url` with the given request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| NvbError::api(0, "invalid base URL", base_url, Some(e.into())))?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                NvbError::api(
                    0,
                    "failed to build HTTP client",
                    base_url.as_str(),
                    Some(e.into()),
                )
            })?;

        Ok(Self { http, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| NvbError::api(0, "invalid endpoint path", path, Some(e.into())))
    }

    /// Perform a GET request and decode the JSON body into `T`.
    ///
    /// Transport failures map to status 0, non-2xx responses carry the raw
    /// body as the error message, and decode failures keep the response
    /// status alongside the parse cause.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(url = %url, "GET upstream");

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| NvbError::api(0, "request failed", url.as_str(), Some(e.into())))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NvbError::api(status.as_u16(), body, url.as_str(), None));
        }

        let body = response.text().await.map_err(|e| {
            NvbError::api(
                status.as_u16(),
                "failed to read response",
                url.as_str(),
                Some(e.into()),
            )
        })?;

        serde_json::from_str(&body).map_err(|e| {
            NvbError::api(
                status.as_u16(),
                "failed to parse JSON",
                url.as_str(),
                Some(e.into()),
            )
        })
    }

    /// Search for job function title suggestions.
    pub async fn search_function_titles(&self, query: &str) -> Result<FunctionTitlesResponse> {
        if query.is_empty() {
            return Err(NvbError::validation("query", query, "query cannot be empty"));
        }

        let mut url = self.endpoint(&format!("/api/jobs/v3/sites/{SITE}/function-titles"))?;
        url.query_pairs_mut().append_pair("query", query);

        self.get_json(url).await
    }

    /// Search Dutch cities by name prefix.
    pub async fn search_cities(&self, starts_with: &str) -> Result<Vec<String>> {
        if starts_with.is_empty() {
            return Err(NvbError::validation(
                "startsWith",
                starts_with,
                "startsWith cannot be empty",
            ));
        }

        let mut url = self.endpoint("/api/v1/cities/nl")?;
        url.query_pairs_mut().append_pair("startsWith", starts_with);

        self.get_json(url).await
    }

    /// Look up the geographic center of a Dutch city.
    ///
    /// The upstream sends latitude/longitude as strings; they are parsed into
    /// numeric coordinates here so callers never see the string form.
    pub async fn get_geo_location(&self, city_name: &str) -> Result<GeoLocationResponse> {
        if city_name.is_empty() {
            return Err(NvbError::validation(
                "cityName",
                city_name,
                "cityName cannot be empty",
            ));
        }

        let mut url = self.endpoint("/api/v1/geolocations/nl")?;
        url.path_segments_mut()
            .map_err(|_| {
                NvbError::api(
                    0,
                    "base URL cannot carry path segments",
                    self.base_url.as_str(),
                    None,
                )
            })?
            .push(city_name);

        let raw: RawGeoLocation = self.get_json(url.clone()).await?;

        let latitude = raw.city_center.latitude.parse::<f64>().map_err(|e| {
            NvbError::api(0, "invalid latitude format", url.as_str(), Some(e.into()))
        })?;
        let longitude = raw.city_center.longitude.parse::<f64>().map_err(|e| {
            NvbError::api(0, "invalid longitude format", url.as_str(), Some(e.into()))
        })?;

        Ok(GeoLocationResponse {
            city_center: Coordinates {
                latitude,
                longitude,
            },
            city_name: raw.city_name,
        })
    }

    /// Search job listings.
    ///
    /// `page`, `limit` and `sort` are always sent; the optional `filters`
    /// query parameter is assembled from the geo/city/title fields of
    /// `params`.
    pub async fn find_jobs(&self, params: &JobSearchParams) -> Result<JobsResponse> {
        if params.page < 1 {
            return Err(NvbError::validation(
                "page",
                params.page,
                "page must be >= 1",
            ));
        }
        if params.limit < 1 {
            return Err(NvbError::validation(
                "limit",
                params.limit,
                "limit must be >= 1",
            ));
        }
        if params.limit > 100 {
            return Err(NvbError::validation(
                "limit",
                params.limit,
                "limit must be <= 100",
            ));
        }

        let mut url = self.endpoint(&format!("/api/jobs/v3/sites/{SITE}/jobs"))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("page", &params.page.to_string());
            pairs.append_pair("limit", &params.limit.to_string());
            pairs.append_pair("sort", &params.sort);
            if let Some(filters) = build_filters(params) {
                pairs.append_pair("filters", &filters);
            }
        }

        self.get_json(url).await
    }
}

/// Wire shape of the geolocation endpoint, which carries coordinates as
/// strings.
#[derive(Debug, Deserialize)]
struct RawGeoLocation {
    #[serde(rename = "cityCenter")]
    city_center: RawCoordinates,
    #[serde(rename = "cityName")]
    city_name: String,
}

#[derive(Debug, Deserialize)]
struct RawCoordinates {
    latitude: String,
    longitude: String,
}

/// Assemble the space-joined `filters` query value.
///
/// Clause order is fixed: `latitude` (6 decimals) + `longitude` (6 decimals)
/// + `distance` (0 decimals) as a unit when both coordinates are non-zero,
/// then `city:`, then `dcoTitle:`. Returns `None` when no clause applies.
fn build_filters(params: &JobSearchParams) -> Option<String> {
    let mut filters = Vec::new();

    if params.latitude != 0.0 && params.longitude != 0.0 {
        filters.push(format!("latitude:{:.6}", params.latitude));
        filters.push(format!("longitude:{:.6}", params.longitude));
        filters.push(format!("distance:{:.0}", params.distance));
    }

    if !params.city.is_empty() {
        filters.push(format!("city:{}", params.city));
    }

    if !params.job_title.is_empty() {
        filters.push(format!("dcoTitle:{}", params.job_title));
    }

    if filters.is_empty() {
        None
    } else {
        Some(filters.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_geo_clause_formats_fixed_decimals() {
        let params = JobSearchParams {
            latitude: 52.37,
            longitude: 4.89,
            distance: 10.0,
            ..Default::default()
        };

        assert_eq!(
            build_filters(&params).unwrap(),
            "latitude:52.370000 longitude:4.890000 distance:10"
        );
    }

    #[test]
    fn filters_absent_without_both_coordinates() {
        let only_latitude = JobSearchParams {
            latitude: 52.37,
            distance: 25.0,
            ..Default::default()
        };
        assert_eq!(build_filters(&only_latitude), None);

        let origin = JobSearchParams {
            distance: 99.0,
            ..Default::default()
        };
        assert_eq!(build_filters(&origin), None);
    }

    #[test]
    fn filters_keep_fixed_clause_order() {
        let params = JobSearchParams {
            latitude: 52.37,
            longitude: 4.89,
            distance: 40.0,
            city: "Amsterdam".to_string(),
            job_title: "Software Engineer".to_string(),
            ..Default::default()
        };

        assert_eq!(
            build_filters(&params).unwrap(),
            "latitude:52.370000 longitude:4.890000 distance:40 city:Amsterdam dcoTitle:Software Engineer"
        );
    }

    #[test]
    fn filters_city_and_title_without_geo() {
        let params = JobSearchParams {
            city: "Utrecht".to_string(),
            job_title: "Nurse".to_string(),
            ..Default::default()
        };

        assert_eq!(build_filters(&params).unwrap(), "city:Utrecht dcoTitle:Nurse");
    }

    #[test]
    fn new_rejects_invalid_base_url() {
        let err = NvbClient::new("not a url", Duration::from_secs(5)).unwrap_err();
        match err {
            NvbError::Api { status, message, .. } => {
                assert_eq!(status, 0);
                assert_eq!(message, "invalid base URL");
            }
            other => panic!("expected API error, got {other}"),
        }
    }
}
