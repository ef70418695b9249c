use anyhow::Result as AnyResult;
use csv::{Reader, ReaderBuilder, Trim};
use log::debug;
use phf::phf_ordered_map;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::TimeZone;

/// Built-in zones, in the order they are offered.
static TIME_ZONES: phf::OrderedMap<&'static str, i32> = phf_ordered_map! {
    "GMT" => 0,
    "New York (EST)" => -5,
    "London (GMT)" => 0,
    "Beijing (CST)" => 8,
    "Sydney (AEDT)" => 11,
};

#[derive(Debug, Deserialize)]
struct ZoneRow {
    name: String,
    offset: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeZoneTable {
    zones: Vec<TimeZone>,
}

impl TimeZoneTable {
    pub fn builtin() -> Self {
        Self {
            zones: TIME_ZONES
                .entries()
                .map(|(name, offset)| TimeZone::new(*name, *offset))
                .collect(),
        }
    }

    pub fn zones(&self) -> &[TimeZone] {
        &self.zones
    }

    /// First zone in the table, the one a fresh simulation starts in.
    pub fn default_zone(&self) -> TimeZone {
        self.zones.first().cloned().unwrap_or_else(TimeZone::gmt)
    }

    /// Case-insensitive lookup by display name.
    pub fn find(&self, name: &str) -> Result<TimeZone> {
        let wanted = name.trim();
        self.zones
            .iter()
            .find(|z| z.name.eq_ignore_ascii_case(wanted))
            .cloned()
            .ok_or_else(|| Error::UnknownTimeZone {
                name: name.to_string(),
                known: self.names().join(", "),
            })
    }

    pub fn names(&self) -> Vec<&str> {
        self.zones.iter().map(|z| z.name.as_str()).collect()
    }
}

// Rows with a blank name are skipped. Offsets must be whole hours.
fn parse_zones_from_reader<R: std::io::Read>(mut rdr: Reader<R>) -> Result<TimeZoneTable> {
    let mut zones = Vec::new();
    for rec in rdr.deserialize() {
        let row: ZoneRow = rec?;
        if row.name.is_empty() {
            continue;
        }
        let offset_hours = row
            .offset
            .parse::<i32>()
            .map_err(|_| Error::BadTimeZoneOffset {
                name: row.name.clone(),
                offset: row.offset.clone(),
            })?;
        zones.push(TimeZone::new(row.name, offset_hours));
    }
    if zones.is_empty() {
        return Err(Error::EmptyTimeZoneTable);
    }
    debug!("parsed {} time zones", zones.len());
    Ok(TimeZoneTable { zones })
}

/// Load time zones from a `name,offset` CSV, or the built-in table.
pub fn load_time_zones(path: Option<&str>) -> AnyResult<TimeZoneTable> {
    if let Some(p) = path {
        let rdr = ReaderBuilder::new().trim(Trim::All).from_path(p)?;
        Ok(parse_zones_from_reader(rdr)?)
    } else {
        Ok(TimeZoneTable::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_from_str(csv: &str) -> Result<TimeZoneTable> {
        let rdr = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(csv.as_bytes());
        parse_zones_from_reader(rdr)
    }

    #[test]
    fn builtin_table_keeps_order_and_offsets() {
        let t = TimeZoneTable::builtin();
        assert_eq!(
            t.names(),
            vec![
                "GMT",
                "New York (EST)",
                "London (GMT)",
                "Beijing (CST)",
                "Sydney (AEDT)"
            ]
        );
        let offsets: Vec<i32> = t.zones().iter().map(|z| z.offset_hours).collect();
        assert_eq!(offsets, vec![0, -5, 0, 8, 11]);
        assert_eq!(t.default_zone(), TimeZone::gmt());
    }

    #[test]
    fn find_is_case_insensitive() {
        let t = TimeZoneTable::builtin();
        assert_eq!(t.find("beijing (cst)").unwrap().offset_hours, 8);
        assert_eq!(t.find(" Sydney (AEDT) ").unwrap().offset_hours, 11);
    }

    #[test]
    fn find_unknown_lists_known_names() {
        let err = TimeZoneTable::builtin().find("Mars").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Mars"));
        assert!(msg.contains("New York (EST)"));
    }

    #[test]
    fn parses_csv_rows() {
        let csv = "\
name,offset
Tokyo (JST), 9
Honolulu (HST),-10
,3
Beijing (CST),+8
";
        let t = parse_from_str(csv).unwrap();
        assert_eq!(
            t.names(),
            vec!["Tokyo (JST)", "Honolulu (HST)", "Beijing (CST)"]
        );
        assert_eq!(t.find("Honolulu (HST)").unwrap().offset_hours, -10);
        assert_eq!(t.find("Beijing (CST)").unwrap().offset_hours, 8);
        assert_eq!(t.default_zone().name, "Tokyo (JST)");
    }

    #[test]
    fn fractional_offset_is_an_error() {
        let err = parse_from_str("name,offset\nKolkata (IST),5.5\n").unwrap_err();
        assert!(matches!(
            &err,
            Error::BadTimeZoneOffset { name, offset } if name == "Kolkata (IST)" && offset == "5.5"
        ));
        assert!(err.to_string().contains("Kolkata (IST)"));
    }

    #[test]
    fn non_numeric_offset_is_an_error() {
        let csv = "\
name,offset
Tokyo (JST),9
Nowhere,nine
";
        assert!(matches!(
            parse_from_str(csv),
            Err(Error::BadTimeZoneOffset { name, .. }) if name == "Nowhere"
        ));
    }

    #[test]
    fn empty_csv_is_an_error() {
        assert!(matches!(
            parse_from_str("name,offset\n"),
            Err(Error::EmptyTimeZoneTable)
        ));
    }

    #[test]
    fn load_without_path_is_builtin() {
        assert_eq!(load_time_zones(None).unwrap(), TimeZoneTable::builtin());
    }

    #[test]
    fn load_missing_file_errors() {
        assert!(load_time_zones(Some("/nonexistent/zones.csv")).is_err());
    }
}
