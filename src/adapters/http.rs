//! HTTP surface: diagnostic status page and collaborator ingestion.
//!
//! | Route                   | Purpose                                   |
//! |-------------------------|-------------------------------------------|
//! | `GET /`                 | plain-text [`StatusReport`]               |
//! | `POST /report/{source}` | apply a partial snapshot update as `source` |

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::Deserialize;

use crate::app::ports::Clock;
use crate::app::reporter::Reporter;
use crate::channels::ChangeSignal;
use crate::diagnostics::StatusReport;
use crate::error::Error;
use crate::snapshot::{InputSource, Snapshot};
use crate::store::StateStore;

use super::time::SystemClock;

#[derive(Clone)]
pub struct AppState {
    store: Arc<StateStore>,
    signal: Arc<ChangeSignal>,
}

impl AppState {
    pub fn new(store: Arc<StateStore>, signal: Arc<ChangeSignal>) -> Self {
        Self { store, signal }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(status))
        .route("/report/{source}", post(report))
        .with_state(state)
}

/// Partial observation pushed by an external collaborator. Absent fields
/// leave the canonical value untouched.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportBody {
    pub media_playing: Option<bool>,
    pub media_audio_only_playing: Option<bool>,
    pub amp_link_powered: Option<bool>,
    pub lock_unlocked: Option<bool>,
    pub amp_powered: Option<bool>,
    pub cleaner_cleaning: Option<bool>,
    /// Amplifier input as its wire code, e.g. `"GAME"`.
    pub amp_source: Option<String>,
}

impl ReportBody {
    /// Parse the input code up front so a bad request changes nothing.
    pub fn amp_source(&self) -> Result<Option<InputSource>, Error> {
        self.amp_source.as_deref().map(str::parse::<InputSource>).transpose()
    }

    pub fn apply(&self, amp_source: Option<InputSource>, s: &mut Snapshot) {
        let set = |field: &mut bool, v: Option<bool>| {
            if let Some(v) = v {
                *field = v;
            }
        };
        set(&mut s.media_playing, self.media_playing);
        set(&mut s.media_audio_only_playing, self.media_audio_only_playing);
        set(&mut s.amp_link_powered, self.amp_link_powered);
        set(&mut s.lock_unlocked, self.lock_unlocked);
        set(&mut s.amp_powered, self.amp_powered);
        set(&mut s.cleaner_cleaning, self.cleaner_cleaning);
        if let Some(src) = amp_source {
            s.amp_source = src;
        }
    }
}

async fn status(State(st): State<AppState>) -> String {
    StatusReport::capture(&st.store, SystemClock.now()).render()
}

async fn report(
    State(st): State<AppState>,
    Path(source): Path<String>,
    Json(body): Json<ReportBody>,
) -> Result<StatusCode, (StatusCode, String)> {
    let amp_source = body
        .amp_source()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let reporter = Reporter::new(source, st.store, st.signal, SystemClock);
    reporter.report(|s| body.apply(amp_source, s));
    Ok(StatusCode::NO_CONTENT)
}
