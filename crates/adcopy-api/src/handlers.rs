//! API Handlers
//!
//! Thin wrappers: validate the request, call the pure generators and
//! scorer, record metrics.

use adcopy_core::{AwarenessLevel, CopyBrief, MasterStyle, Niche, Tone, ADCOPY_VERSION};
use adcopy_gen::{
    generate_classifieds, generate_copy, generate_emails, ClassifiedOptions, ClassifiedOutcome,
    CopyOutcome, EmailOutcome, EmailSequenceOptions, Engine, SequenceArchetype,
    CLASSIFIED_COUNT_RANGE, EMAIL_COUNT_RANGE,
};
use adcopy_score::{
    best_report, compare, score, score_all, AbComparison, CampaignInput, Channel, ScoreBand,
    ScoreReport, VariantStats,
};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

// ============================================================================
// Requests / responses
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CopyRequest {
    pub brief: CopyBrief,
    #[serde(default)]
    pub engine: Option<Engine>,
}

#[derive(Debug, Serialize)]
pub struct CopyResponse {
    #[serde(flatten)]
    pub outcome: CopyOutcome,
    /// Score of the text shown to the user (model output when present)
    pub score: ScoreReport,
    pub band: ScoreBand,
}

#[derive(Debug, Deserialize)]
pub struct EmailRequest {
    pub brief: CopyBrief,
    #[serde(default)]
    pub options: EmailSequenceOptions,
    #[serde(default)]
    pub engine: Option<Engine>,
}

#[derive(Debug, Deserialize)]
pub struct ClassifiedRequest {
    pub brief: CopyBrief,
    #[serde(default)]
    pub options: ClassifiedOptions,
    #[serde(default)]
    pub engine: Option<Engine>,
}

/// Either one text or several variants to rank
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub variants: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct AbRequest {
    pub a: VariantStats,
    pub b: VariantStats,
}

#[derive(Debug, Deserialize)]
pub struct CampaignQuery {
    #[serde(default)]
    pub channel: Option<Channel>,
}

// ============================================================================
// Service
// ============================================================================

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": ADCOPY_VERSION,
        "default_engine": state.config.default_engine,
        "providers": {
            "openai_key": state.config.openai_key_present,
            "gemini_key": state.config.gemini_key_present,
            "wired": state.provider.as_ref().map(|p| p.engine()),
        }
    }))
}

/// Every closed label set the API accepts
pub async fn catalog() -> Json<Value> {
    Json(json!({
        "tones": Tone::ALL.iter().map(|t| t.label().to_string()).collect::<Vec<_>>(),
        "awareness_levels": AwarenessLevel::ALL.iter().map(|a| a.label()).collect::<Vec<_>>(),
        "master_styles": MasterStyle::ALL.iter().map(|s| s.label().to_string()).collect::<Vec<_>>(),
        "niches": Niche::ALL.iter().map(|n| n.label()).collect::<Vec<_>>(),
        "sequence_archetypes": SequenceArchetype::ALL.iter().map(|a| a.label()).collect::<Vec<_>>(),
        "channels": Channel::ALL.iter().map(|c| c.label()).collect::<Vec<_>>(),
        "engines": Engine::ALL.iter().map(|e| e.as_str()).collect::<Vec<_>>(),
        "email_count": { "min": EMAIL_COUNT_RANGE.start(), "max": EMAIL_COUNT_RANGE.end() },
        "classified_count": {
            "min": CLASSIFIED_COUNT_RANGE.start(),
            "max": CLASSIFIED_COUNT_RANGE.end(),
        },
    }))
}

pub async fn metrics(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let body = state
        .metrics
        .encode()
        .map_err(|e| ApiError::Internal(format!("metrics encoding failed: {}", e)))?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        body,
    ))
}

// ============================================================================
// Generation
// ============================================================================

pub async fn copy(
    State(state): State<AppState>,
    payload: Result<Json<CopyRequest>, JsonRejection>,
) -> ApiResult<Json<CopyResponse>> {
    let Json(req) = payload?;
    req.brief.validate()?;

    let engine = state.engine_for(req.engine);
    let provider = state.provider.clone();
    let brief = req.brief;
    let outcome = run_blocking(move || generate_copy(&brief, engine, provider.as_deref())).await?;

    let report = score(outcome.ai_text.as_deref().unwrap_or(&outcome.sales_copy));
    state
        .metrics
        .record_generation("copy", outcome.used.as_str(), outcome.fell_back());
    state.metrics.observe_score(report.total_score);

    Ok(Json(CopyResponse {
        band: report.band(),
        score: report,
        outcome,
    }))
}

pub async fn emails(
    State(state): State<AppState>,
    payload: Result<Json<EmailRequest>, JsonRejection>,
) -> ApiResult<Json<EmailOutcome>> {
    let Json(req) = payload?;
    req.brief.validate()?;
    check_count(
        "email count",
        req.options.count,
        *EMAIL_COUNT_RANGE.start(),
        *EMAIL_COUNT_RANGE.end(),
    )?;

    let engine = state.engine_for(req.engine);
    let provider = state.provider.clone();
    let outcome = run_blocking(move || {
        generate_emails(&req.brief, &req.options, engine, provider.as_deref())
    })
    .await?;
    state
        .metrics
        .record_generation("emails", outcome.used.as_str(), outcome.requested != outcome.used);

    Ok(Json(outcome))
}

pub async fn classifieds(
    State(state): State<AppState>,
    payload: Result<Json<ClassifiedRequest>, JsonRejection>,
) -> ApiResult<Json<ClassifiedOutcome>> {
    let Json(req) = payload?;
    req.brief.validate()?;
    check_count(
        "ad count",
        req.options.count,
        *CLASSIFIED_COUNT_RANGE.start(),
        *CLASSIFIED_COUNT_RANGE.end(),
    )?;

    let engine = state.engine_for(req.engine);
    let provider = state.provider.clone();
    let outcome = run_blocking(move || {
        generate_classifieds(&req.brief, &req.options, engine, provider.as_deref())
    })
    .await?;
    state
        .metrics
        .record_generation("classifieds", outcome.used.as_str(), outcome.requested != outcome.used);

    Ok(Json(outcome))
}

/// Provider completions block on network I/O, so generation runs on the
/// blocking pool instead of an async worker
async fn run_blocking<T, F>(generate: F) -> ApiResult<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(generate)
        .await
        .map_err(|e| ApiError::Internal(format!("generation task failed: {}", e)))
}

fn check_count(what: &str, count: usize, min: usize, max: usize) -> ApiResult<()> {
    if (min..=max).contains(&count) {
        Ok(())
    } else {
        Err(ApiError::BadRequest(format!(
            "{} must be between {} and {}, got {}",
            what, min, max, count
        )))
    }
}

// ============================================================================
// Analysis
// ============================================================================

pub async fn score_text(
    State(state): State<AppState>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(req) = payload?;

    match (req.text, req.variants) {
        (Some(text), None) => {
            let report = score(&text);
            state.metrics.observe_score(report.total_score);
            Ok(Json(json!({ "report": report, "band": report.band() })))
        }
        (None, Some(variants)) if !variants.is_empty() => {
            let reports = score_all(&variants);
            for report in &reports {
                state.metrics.observe_score(report.total_score);
            }
            Ok(Json(json!({
                "reports": reports,
                "best": best_report(&reports),
            })))
        }
        (None, Some(_)) => Err(ApiError::BadRequest("variants must not be empty".to_string())),
        _ => Err(ApiError::BadRequest(
            "provide exactly one of 'text' or 'variants'".to_string(),
        )),
    }
}

pub async fn ab_test(
    payload: Result<Json<AbRequest>, JsonRejection>,
) -> ApiResult<Json<AbComparison>> {
    let Json(req) = payload?;
    Ok(Json(compare(req.a, req.b)?))
}

// ============================================================================
// Campaign history
// ============================================================================

pub async fn record_campaign(
    State(state): State<AppState>,
    payload: Result<Json<CampaignInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let Json(input) = payload?;
    let record = state.history.write().await.record(&input)?;

    tracing::info!(
        channel = record.channel.label(),
        campaign = %record.campaign,
        roas = record.metrics.roas,
        "campaign recorded"
    );

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": record.verdict.message(),
            "record": record,
        })),
    ))
}

pub async fn list_campaigns(
    State(state): State<AppState>,
    query: Result<Query<CampaignQuery>, QueryRejection>,
) -> ApiResult<Json<Value>> {
    let Query(query) = query?;
    let history = state.history.read().await;

    Ok(Json(json!({
        "records": history.list(query.channel),
        "channels": history.channels(),
        "summary": history.summary(),
    })))
}

pub async fn clear_campaigns(State(state): State<AppState>) -> Json<Value> {
    let mut history = state.history.write().await;
    let cleared = history.len();
    history.clear();
    tracing::info!(cleared, "campaign history cleared");
    Json(json!({ "cleared": cleared }))
}
