//! GroveEvent enum: what happened during one input or timer tick, drained
//! by the frontend after every dispatch.

use serde::Serialize;

use crate::router::Transition;
use crate::screen::SpecialistId;
use crate::screens::call::BreathPhase;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "data")]
pub enum GroveEvent {
    #[serde(rename = "navigated")]
    Navigated(Transition),

    /// Bucket picked up or put down
    #[serde(rename = "drag")]
    Drag { active: bool },

    #[serde(rename = "watered")]
    Watered { level: u32, saturated: bool },

    #[serde(rename = "breath")]
    Breath(BreathPhase),

    /// A message posted to the forest board
    #[serde(rename = "message_sent")]
    MessageSent { text: String },

    #[serde(rename = "booking_confirmed")]
    BookingConfirmed(BookingSummary),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialist: Option<SpecialistId>,
    pub date: chrono::NaiveDate,
    pub time: &'static str,
    pub session_type: &'static str,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

impl GroveEvent {
    /// `{"event": "...", "data": {...}}`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
