use serde::{Deserialize, Serialize};

/// A single row of a GTFS `stops.txt` file.
///
/// Serialized with the GTFS column names, so the JSON keys match the header
/// of the file the record was read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    #[serde(rename = "stop_id")]
    pub id: String,
    #[serde(rename = "stop_code")]
    pub code: i64,
    #[serde(rename = "stop_name")]
    pub name: String,
    #[serde(rename = "stop_desc")]
    pub description: String,
    #[serde(rename = "stop_lat")]
    pub latitude: f64,
    #[serde(rename = "stop_lon")]
    pub longitude: f64,
    pub zone_id: String,
    #[serde(rename = "stop_url")]
    pub url: String,
    /// 0 = stop/platform, 1 = station, 2 = entrance/exit, 3 = generic node,
    /// 4 = boarding area. Not checked against that range.
    pub location_type: i64,
    /// `stop_id` of the parent station, if any. Not checked for existence.
    pub parent_station: String,
    pub stop_timezone: String,
    /// 0 = unknown, 1 = accessible, 2 = not accessible.
    pub wheelchair_boarding: i64,
}
