use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use transit_direction::{CompassDirection, StopIdentifier};

#[derive(Serialize)]
struct Row<'a> {
    stop_id: &'a str,
    direction: CompassDirection,
}

/// One `stop_id<TAB>direction` line per stop.
pub fn write_text<W: Write>(mut out: W, resolved: &[(StopIdentifier, CompassDirection)]) -> Result<()> {
    for (stop_id, direction) in resolved {
        writeln!(out, "{}\t{}", stop_id, direction)?;
    }
    out.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(mut out: W, resolved: &[(StopIdentifier, CompassDirection)]) -> Result<()> {
    let rows: Vec<Row> = resolved
        .iter()
        .map(|(stop_id, direction)| Row {
            stop_id: stop_id.as_str(),
            direction: *direction,
        })
        .collect();

    serde_json::to_writer_pretty(&mut out, &rows)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<(StopIdentifier, CompassDirection)> {
        vec![
            (StopIdentifier::new("2000"), CompassDirection::NE),
            (StopIdentifier::new("2605"), CompassDirection::Unknown),
        ]
    }

    #[test]
    fn test_text_output() {
        let mut buf = Vec::new();
        write_text(&mut buf, &sample()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "2000\tNE\n2605\tunknown\n");
    }

    #[test]
    fn test_json_output() {
        let mut buf = Vec::new();
        write_json(&mut buf, &sample()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                { "stop_id": "2000", "direction": "NE" },
                { "stop_id": "2605", "direction": "unknown" },
            ])
        );
    }
}
