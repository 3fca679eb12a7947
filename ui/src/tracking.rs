//! Click tracking.
//!
//! Components never talk to an analytics backend directly; they emit a
//! [`TrackEvent`] through the [`Tracking`] handle found in context. Emitting
//! is fire-and-forget: a failing or missing backend is logged and otherwise
//! ignored, so it can never interrupt the navigation or copy action that
//! triggered it.
use std::fmt;
use std::rc::Rc;

use dioxus::prelude::*;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

/// Descriptor sent to the analytics collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackEvent {
    pub action: &'static str,
    pub object_type: &'static str,
}

#[derive(Debug, Error)]
pub enum TrackError {
    #[error("analytics backend unavailable")]
    Unavailable,
    #[error("analytics backend rejected event: {0}")]
    Rejected(String),
}

pub trait Tracker {
    fn track(&self, event: &TrackEvent) -> Result<(), TrackError>;
}

/// Writes every event to the `tracking` log target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTracker;

impl Tracker for LogTracker {
    fn track(&self, event: &TrackEvent) -> Result<(), TrackError> {
        let payload =
            serde_json::to_string(event).map_err(|err| TrackError::Rejected(err.to_string()))?;
        info!(target: "tracking", %payload, "click");
        Ok(())
    }
}

/// Forwards events to `window.analytics.track(action, { objectType })` when
/// the page embeds an analytics snippet.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowAnalyticsTracker;

#[cfg(target_arch = "wasm32")]
impl Tracker for WindowAnalyticsTracker {
    fn track(&self, event: &TrackEvent) -> Result<(), TrackError> {
        use js_sys::{Function, Object, Reflect};
        use wasm_bindgen::{JsCast, JsValue};

        let window = web_sys::window().ok_or(TrackError::Unavailable)?;
        let analytics = Reflect::get(&window, &JsValue::from_str("analytics"))
            .map_err(|_| TrackError::Unavailable)?;
        if analytics.is_undefined() || analytics.is_null() {
            return Err(TrackError::Unavailable);
        }
        let track: Function = Reflect::get(&analytics, &JsValue::from_str("track"))
            .map_err(|_| TrackError::Unavailable)?
            .dyn_into()
            .map_err(|_| TrackError::Unavailable)?;

        let props = Object::new();
        Reflect::set(
            &props,
            &JsValue::from_str("objectType"),
            &JsValue::from_str(event.object_type),
        )
        .map_err(|err| TrackError::Rejected(format!("{err:?}")))?;

        track
            .call2(&analytics, &JsValue::from_str(event.action), &props)
            .map(|_| ())
            .map_err(|err| TrackError::Rejected(format!("{err:?}")))
    }
}

/// Shared handle to the active [`Tracker`], passed around through context.
#[derive(Clone)]
pub struct Tracking {
    inner: Rc<dyn Tracker>,
}

impl Tracking {
    pub fn new(tracker: impl Tracker + 'static) -> Self {
        Self {
            inner: Rc::new(tracker),
        }
    }

    /// The tracker a host gets unless it chooses otherwise.
    pub fn platform_default() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(WindowAnalyticsTracker)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::new(LogTracker)
        }
    }

    /// Record `event` once. Failures are logged and dropped.
    pub fn emit(&self, event: &TrackEvent) {
        if let Err(err) = self.inner.track(event) {
            debug!(target: "tracking", action = event.action, %err, "tracking event dropped");
        }
    }
}

impl Default for Tracking {
    fn default() -> Self {
        Self::new(LogTracker)
    }
}

impl fmt::Debug for Tracking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tracking").finish_non_exhaustive()
    }
}

/// Fetch the [`Tracking`] handle provided by an ancestor, falling back to
/// [`LogTracker`] when none is mounted.
pub fn use_tracking() -> Tracking {
    use_hook(|| try_consume_context::<Tracking>().unwrap_or_default())
}
