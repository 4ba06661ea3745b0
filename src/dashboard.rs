//! Documentation types for the dashboard payload.
//!
//! The client never validates responses against these; [`Bridge::get_dashboard`] returns an
//! untyped JSON value. Consumers that want a typed view can deserialize into
//! [`DashboardView`]. Fields mirror the service's wire names; anything the service adds
//! beyond them is simply ignored by serde.
//!
//! [`Bridge::get_dashboard`]: crate::flows::Bridge::get_dashboard

// self
use crate::_prelude::*;

/// Top-level dashboard view for the authenticated user's monitored pools.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
	/// Service-assigned response type tag.
	#[serde(default)]
	pub rsp_type: Option<String>,
	/// Overall status rollup (`GREEN`, `YELLOW`, `RED`).
	#[serde(default)]
	pub status: Option<String>,
	/// Last-modified instant, ISO formatted.
	#[serde(default)]
	pub last_modified: Option<String>,
	/// One view per monitored water body.
	#[serde(default)]
	pub water_bodies: Vec<WaterBodyView>,
	/// Status-to-color mapping used by the service's own UI.
	#[serde(default)]
	pub status_colors: Option<StatusColors>,
	/// Support contact info.
	#[serde(default)]
	pub contact: Option<ContactInfo>,
	/// Store link advertised alongside the dashboard.
	#[serde(default)]
	pub store_url: Option<String>,
	/// Help-center link.
	#[serde(default)]
	pub help_url: Option<String>,
}

/// Per-water-body view: identity, live measurements, and alerts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterBodyView {
	/// Water-body identifier.
	pub water_body_id: String,
	/// Display name.
	#[serde(default)]
	pub name: Option<String>,
	/// Status rollup for this water body.
	#[serde(default)]
	pub status: Option<String>,
	/// Latest water temperature reading.
	#[serde(default)]
	pub water_temp: Option<f64>,
	/// Instant of the latest temperature reading.
	#[serde(default)]
	pub water_temp_time: Option<String>,
	/// Sanitizer type configured for this water body.
	#[serde(default)]
	pub sanitizer_type: Option<String>,
	/// Latest measurement set.
	#[serde(default)]
	pub measurements: Vec<MeasurementView>,
	/// Active alerts, most severe first.
	#[serde(default)]
	pub alerts: Vec<AlertView>,
	/// Everything else the service reports for the water body (pods, targets, address).
	#[serde(flatten)]
	pub extra: serde_json::Map<String, JsonValue>,
}

/// One measurement tile (free chlorine, pH, flow, and so on).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementView {
	/// Measurement type tag.
	#[serde(rename = "type")]
	pub kind: String,
	/// Human-readable title.
	#[serde(default)]
	pub title: Option<String>,
	/// Display value, pre-formatted by the service.
	#[serde(default)]
	pub value: Option<String>,
	/// Numeric value, when the measurement has one.
	#[serde(default)]
	pub float_value: Option<f64>,
	/// Status classification for this measurement.
	#[serde(default)]
	pub status: Option<String>,
	/// Instant the measurement was taken.
	#[serde(default)]
	pub measure_time: Option<String>,
}

/// One alert raised against a water body or measurement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertView {
	/// Alert category.
	#[serde(default)]
	pub category: Option<String>,
	/// Triggering condition.
	#[serde(default)]
	pub condition: Option<String>,
	/// Status classification carried by the alert.
	#[serde(default)]
	pub status: Option<String>,
	/// Alert text shown to the user.
	#[serde(default)]
	pub text: Option<String>,
}

/// Status-to-color mapping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusColors {
	/// Color for the `GREEN` status.
	#[serde(rename = "GREEN")]
	pub green: String,
	/// Color for the `YELLOW` status.
	#[serde(rename = "YELLOW")]
	pub yellow: String,
	/// Color for the `RED` status.
	#[serde(rename = "RED")]
	pub red: String,
}

/// Support contact info advertised on the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
	/// Main web presence.
	#[serde(default)]
	pub web: Option<String>,
	/// Support site.
	#[serde(default)]
	pub support_web: Option<String>,
	/// Support email address.
	#[serde(default)]
	pub support_email: Option<String>,
	/// Support phone number.
	#[serde(default)]
	pub support_phone: Option<String>,
}
