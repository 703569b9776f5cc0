//! Typed gateway to the remote advisory service.
//!
//! Every operation is a single attempt: no caching, no retries. Transport failures,
//! non-success statuses and contract violations all surface as [`ServiceError`].

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use shared::{
    domain::{
        CatalogKind, FieldCatalog, HealthStatus, MentorRecord, PlacementPrediction,
        PlacementProfile, SkillRecommendation,
    },
    error::ServiceErrorBody,
    protocol::{
        FieldsResponse, HealthResponse, MatchMentorsRequest, MatchMentorsResponse,
        PredictPlacementRequest, PredictPlacementResponse, RecommendSkillsRequest,
        RecommendSkillsResponse,
    },
};
use tracing::{debug, warn};
use url::Url;

use crate::error::ServiceError;

pub const MIN_TOP_N: u8 = 1;
pub const MAX_TOP_N: u8 = 10;

#[async_trait]
pub trait AdvisoryService: Send + Sync {
    async fn fetch_general_fields(&self) -> Result<FieldCatalog, ServiceError>;
    async fn fetch_mentor_fields(&self) -> Result<FieldCatalog, ServiceError>;
    async fn recommend_skills(
        &self,
        field: &str,
        known_skills: &[String],
    ) -> Result<SkillRecommendation, ServiceError>;
    /// Mentors come back in the service's ranking order.
    async fn match_mentors(&self, field: &str, top_n: u8)
        -> Result<Vec<MentorRecord>, ServiceError>;
    async fn predict_placement(
        &self,
        profile: &PlacementProfile,
    ) -> Result<PlacementPrediction, ServiceError>;
    async fn check_health(&self) -> Result<HealthStatus, ServiceError>;
}

pub struct HttpAdvisoryClient {
    http: Client,
    base_url: Url,
}

impl HttpAdvisoryClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_http_client(Client::new(), base_url)
    }

    pub fn with_http_client(http: Client, base_url: &str) -> Result<Self> {
        Ok(Self {
            http,
            base_url: normalize_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
    ) -> Result<T, ServiceError> {
        let url = self.endpoint(operation, path)?;
        debug!(operation, path = url.path(), "calling advisory service");
        self.execute(operation, self.http.get(url)).await
    }

    async fn post<B, T>(
        &self,
        operation: &'static str,
        path: &str,
        body: &B,
    ) -> Result<T, ServiceError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.endpoint(operation, path)?;
        debug!(operation, path = url.path(), "calling advisory service");
        self.execute(operation, self.http.post(url).json(body)).await
    }

    fn endpoint(&self, operation: &'static str, path: &str) -> Result<Url, ServiceError> {
        self.base_url
            .join(path)
            .map_err(|err| {
                ServiceError::network(operation, format!("invalid endpoint {path}: {err}"))
            })
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<T, ServiceError> {
        let result: Result<T, ServiceError> = async {
            let response = request
                .send()
                .await
                .map_err(|err| ServiceError::network(operation, err))?;
            let status = response.status();
            let body = response
                .bytes()
                .await
                .map_err(|err| ServiceError::network(operation, err))?;

            if !status.is_success() {
                let detail = serde_json::from_slice::<ServiceErrorBody>(&body)
                    .map(|body| body.message())
                    .unwrap_or_else(|_| String::from_utf8_lossy(&body).trim().to_string());
                return Err(ServiceError::Service {
                    operation,
                    status: status.as_u16(),
                    detail,
                });
            }

            serde_json::from_slice::<T>(&body)
                .map_err(|err| ServiceError::malformed(operation, err))
        }
        .await;

        if let Err(err) = &result {
            warn!(operation, kind = ?err.kind(), "advisory service call failed: {err}");
        }
        result
    }
}

#[async_trait]
impl AdvisoryService for HttpAdvisoryClient {
    async fn fetch_general_fields(&self) -> Result<FieldCatalog, ServiceError> {
        let body: FieldsResponse = self.get("fetch_general_fields", "available-fields").await?;
        Ok(body.into())
    }

    async fn fetch_mentor_fields(&self) -> Result<FieldCatalog, ServiceError> {
        let body: FieldsResponse = self.get("fetch_mentor_fields", "mentor-fields").await?;
        Ok(body.into())
    }

    async fn recommend_skills(
        &self,
        field: &str,
        known_skills: &[String],
    ) -> Result<SkillRecommendation, ServiceError> {
        const OPERATION: &str = "recommend_skills";
        let body: RecommendSkillsResponse = self
            .post(
                OPERATION,
                "recommend-skills",
                &RecommendSkillsRequest {
                    field_of_interest: field.to_string(),
                    user_skills: known_skills.to_vec(),
                },
            )
            .await?;
        body.try_into()
            .map_err(|violation| ServiceError::contract(OPERATION, violation))
    }

    async fn match_mentors(
        &self,
        field: &str,
        top_n: u8,
    ) -> Result<Vec<MentorRecord>, ServiceError> {
        const OPERATION: &str = "match_mentors";
        let body: MatchMentorsResponse = self
            .post(
                OPERATION,
                "match-mentors",
                &MatchMentorsRequest {
                    field_of_interest: field.to_string(),
                    top_n: top_n.clamp(MIN_TOP_N, MAX_TOP_N),
                },
            )
            .await?;
        body.try_into()
            .map_err(|violation| ServiceError::contract(OPERATION, violation))
    }

    async fn predict_placement(
        &self,
        profile: &PlacementProfile,
    ) -> Result<PlacementPrediction, ServiceError> {
        const OPERATION: &str = "predict_placement";
        let body: PredictPlacementResponse = self
            .post(
                OPERATION,
                "predict-placement",
                &PredictPlacementRequest::from(profile.clone()),
            )
            .await?;
        body.try_into()
            .map_err(|violation| ServiceError::contract(OPERATION, violation))
    }

    async fn check_health(&self) -> Result<HealthStatus, ServiceError> {
        let body: HealthResponse = self.get("check_health", "health").await?;
        Ok(body.into())
    }
}

fn normalize_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    let url = Url::parse(&with_slash)
        .with_context(|| format!("invalid advisory service url '{raw}'"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("advisory service url '{raw}' must use http or https");
    }
    Ok(url)
}

/// A service operation captured as data so it can be executed away from the controller
/// that prepared it.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceCall {
    FetchFields(CatalogKind),
    RecommendSkills {
        field: String,
        known_skills: Vec<String>,
    },
    MatchMentors {
        field: String,
        top_n: u8,
    },
    PredictPlacement(PlacementProfile),
}

#[derive(Debug)]
pub enum ServiceReply {
    Fields(Result<FieldCatalog, ServiceError>),
    Skills(Result<SkillRecommendation, ServiceError>),
    Mentors(Result<Vec<MentorRecord>, ServiceError>),
    Placement(Result<PlacementPrediction, ServiceError>),
}

impl ServiceCall {
    pub fn operation(&self) -> &'static str {
        match self {
            ServiceCall::FetchFields(CatalogKind::General) => "fetch_general_fields",
            ServiceCall::FetchFields(CatalogKind::Mentor) => "fetch_mentor_fields",
            ServiceCall::RecommendSkills { .. } => "recommend_skills",
            ServiceCall::MatchMentors { .. } => "match_mentors",
            ServiceCall::PredictPlacement(_) => "predict_placement",
        }
    }

    /// The reply this call produces when it fails with `error`.
    pub fn failed(&self, error: ServiceError) -> ServiceReply {
        match self {
            ServiceCall::FetchFields(_) => ServiceReply::Fields(Err(error)),
            ServiceCall::RecommendSkills { .. } => ServiceReply::Skills(Err(error)),
            ServiceCall::MatchMentors { .. } => ServiceReply::Mentors(Err(error)),
            ServiceCall::PredictPlacement(_) => ServiceReply::Placement(Err(error)),
        }
    }

    pub async fn execute(self, service: &dyn AdvisoryService) -> ServiceReply {
        match self {
            ServiceCall::FetchFields(CatalogKind::General) => {
                ServiceReply::Fields(service.fetch_general_fields().await)
            }
            ServiceCall::FetchFields(CatalogKind::Mentor) => {
                ServiceReply::Fields(service.fetch_mentor_fields().await)
            }
            ServiceCall::RecommendSkills {
                field,
                known_skills,
            } => ServiceReply::Skills(service.recommend_skills(&field, &known_skills).await),
            ServiceCall::MatchMentors { field, top_n } => {
                ServiceReply::Mentors(service.match_mentors(&field, top_n).await)
            }
            ServiceCall::PredictPlacement(profile) => {
                ServiceReply::Placement(service.predict_placement(&profile).await)
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/service_tests.rs"]
mod tests;
