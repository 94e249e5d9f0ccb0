use std::{collections::HashMap, fs::File, io::Read, num::ParseIntError, path::Path, str::FromStr};

use csv::{ReaderBuilder, StringRecord};
use tracing::info;

use super::load_error::LoadError;
use crate::types::stop::Stop;

/// Read a GTFS `stops.txt` file into memory, keeping file order.
///
/// The first failure stops the load; bad rows are never skipped.
pub fn load_stops<P: AsRef<Path>>(path: P) -> Result<Vec<Stop>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let stops = load_stops_from_reader(file)?;

    info!(count = stops.len(), path = %path.display(), "Loaded stops");

    Ok(stops)
}

/// Same as [`load_stops`], for any CSV source.
pub fn load_stops_from_reader<R: Read>(reader: R) -> Result<Vec<Stop>, LoadError> {
    // rows may be shorter or longer than the header
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
    let columns = Columns::from_headers(rdr.headers()?)?;

    let mut stops = Vec::new();
    for result in rdr.records() {
        let record = result?;
        stops.push(columns.stop(&record)?);
    }

    Ok(stops)
}

/// Position of every column a [`Stop`] is built from.
struct Columns {
    id: usize,
    code: usize,
    name: usize,
    description: usize,
    latitude: usize,
    longitude: usize,
    zone_id: usize,
    url: usize,
    location_type: usize,
    parent_station: usize,
    stop_timezone: usize,
    wheelchair_boarding: usize,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self, LoadError> {
        let index: HashMap<&str, usize> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.trim_start_matches('\u{feff}'), i))
            .collect();

        let find = |column: &'static str| {
            index
                .get(column)
                .copied()
                .ok_or(LoadError::MissingColumn { column })
        };

        Ok(Columns {
            id: find("stop_id")?,
            code: find("stop_code")?,
            name: find("stop_name")?,
            description: find("stop_desc")?,
            latitude: find("stop_lat")?,
            longitude: find("stop_lon")?,
            zone_id: find("zone_id")?,
            url: find("stop_url")?,
            location_type: find("location_type")?,
            parent_station: find("parent_station")?,
            stop_timezone: find("stop_timezone")?,
            wheelchair_boarding: find("wheelchair_boarding")?,
        })
    }

    fn stop(&self, record: &StringRecord) -> Result<Stop, LoadError> {
        Ok(Stop {
            id: text(record, self.id, "stop_id")?,
            code: integer(record, self.code, "stop_code")?,
            name: text(record, self.name, "stop_name")?,
            description: text(record, self.description, "stop_desc")?,
            latitude: float(record, self.latitude, "stop_lat")?,
            longitude: float(record, self.longitude, "stop_lon")?,
            zone_id: text(record, self.zone_id, "zone_id")?,
            url: text(record, self.url, "stop_url")?,
            location_type: integer(record, self.location_type, "location_type")?,
            parent_station: text(record, self.parent_station, "parent_station")?,
            stop_timezone: text(record, self.stop_timezone, "stop_timezone")?,
            wheelchair_boarding: integer(
                record,
                self.wheelchair_boarding,
                "wheelchair_boarding",
            )?,
        })
    }
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, |p| p.line())
}

fn field<'r>(
    record: &'r StringRecord,
    idx: usize,
    column: &'static str,
) -> Result<&'r str, LoadError> {
    record.get(idx).ok_or_else(|| LoadError::MissingField {
        line: line_of(record),
        column,
    })
}

fn text(record: &StringRecord, idx: usize, column: &'static str) -> Result<String, LoadError> {
    field(record, idx, column).map(str::to_string)
}

fn integer<T>(record: &StringRecord, idx: usize, column: &'static str) -> Result<T, LoadError>
where
    T: FromStr<Err = ParseIntError>,
{
    let value = field(record, idx, column)?;
    value.parse().map_err(|source| LoadError::InvalidInteger {
        line: line_of(record),
        column,
        value: value.to_string(),
        source,
    })
}

fn float(record: &StringRecord, idx: usize, column: &'static str) -> Result<f64, LoadError> {
    let value = field(record, idx, column)?;
    value.parse().map_err(|source| LoadError::InvalidFloat {
        line: line_of(record),
        column,
        value: value.to_string(),
        source,
    })
}
