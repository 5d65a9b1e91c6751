use super::timestamp::DEFAULT_DATE_FORMAT;
use super::{RawTicket, SourceResult, Ticket};
use crate::Result;
use camino::Utf8PathBuf;
use csv::{Reader, StringRecord};
use ohno::IntoAppError;
use std::fs::File;
use std::io::{self, Read};
use std::time::Instant;

const LOG_TARGET: &str = "    loader";

/// Normalize raw rows into ticket records using the default date format.
#[must_use]
pub fn load(rows: impl IntoIterator<Item = RawTicket>) -> Vec<Ticket> {
    load_with_format(rows, DEFAULT_DATE_FORMAT)
}

/// Normalize raw rows into ticket records, parsing timestamps with `date_format`.
///
/// Never fails: bad cells become defaults or absent values. An empty input yields an empty
/// collection, which callers treat as "no data".
#[must_use]
pub fn load_with_format(rows: impl IntoIterator<Item = RawTicket>, date_format: &str) -> Vec<Ticket> {
    rows.into_iter()
        .enumerate()
        .map(|(index, raw)| {
            log_unparsed_dates(index, &raw, date_format);
            let ticket = Ticket::from_raw(raw, date_format);
            if ticket.key.is_empty() {
                log::warn!(target: LOG_TARGET, "Row {} has no issue key", index + 1);
            }

            ticket
        })
        .collect()
}

/// Read tickets from a CSV stream with a header row.
///
/// # Errors
///
/// Returns an error if the stream is not valid CSV (for example rows with a different number of
/// fields than the header, or invalid UTF-8).
pub fn load_csv(source: impl Read, date_format: &str) -> Result<Vec<Ticket>> {
    let start = Instant::now();

    let mut reader = Reader::from_reader(source);
    let headers = reader.headers().into_app_err("reading CSV header row")?.clone();

    let mut rows = Vec::new();
    let mut record = StringRecord::new();
    while reader.read_record(&mut record).into_app_err("reading CSV record")? {
        let row: RawTicket = record
            .deserialize(Some(&headers))
            .into_app_err_with(|| format!("decoding CSV record {}", rows.len() + 1))?;
        rows.push(row);
    }

    let tickets = load_with_format(rows, date_format);

    log::debug!(
        target: LOG_TARGET,
        "Loaded {} ticket(s) in {:.3}s",
        tickets.len(),
        start.elapsed().as_secs_f64()
    );

    Ok(tickets)
}

/// Load tickets from the first candidate path that exists.
///
/// Returns [`SourceResult::NotFound`] when none of the candidates exist, so that callers can
/// report a "no data" condition instead of an error.
///
/// # Errors
///
/// Returns an error if an existing file cannot be read or is not valid CSV.
pub fn load_csv_file(candidates: &[Utf8PathBuf], date_format: &str) -> Result<SourceResult<Vec<Ticket>>> {
    for path in candidates {
        match File::open(path) {
            Ok(file) => {
                log::info!(target: LOG_TARGET, "Loading tickets from '{path}'");
                let tickets = load_csv(io::BufReader::new(file), date_format).into_app_err_with(|| format!("loading tickets from '{path}'"))?;
                return Ok(SourceResult::Found(tickets));
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!(target: LOG_TARGET, "No ticket data at '{path}'");
            }
            Err(e) => return Err(e).into_app_err_with(|| format!("opening ticket data '{path}'")),
        }
    }

    log::warn!(target: LOG_TARGET, "No ticket data found in {} candidate location(s)", candidates.len());
    Ok(SourceResult::NotFound(candidates.to_vec()))
}

fn log_unparsed_dates(index: usize, raw: &RawTicket, date_format: &str) {
    if !log::log_enabled!(target: LOG_TARGET, log::Level::Debug) {
        return;
    }

    for (column, cell) in [("Created", &raw.created), ("Updated", &raw.updated), ("Resolved", &raw.resolved)] {
        if let Some(text) = cell
            && !text.trim().is_empty()
            && super::parse_timestamp(text, date_format).is_none()
        {
            log::debug!(target: LOG_TARGET, "Row {}: unparseable {column} value '{text}'", index + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Issue key,Summary,Assignee,Reporter,Status,Priority,Issue Type,Created,Updated,Resolved,Sprint
ABC-1,Fix login,Alice,Carol,Done,High,Bug,01/Jan/24 10:00 AM,03/Jan/24 10:00 AM,03/Jan/24 10:00 AM,S1
ABC-2,Add search,,,To Do,,,02/Jan/24 09:00 AM,,,S1
ABC-3,Broken date,Bob,Carol,In Progress,Low,Story,yesterday,,,S2
";

    #[test]
    fn test_load_empty_rows() {
        let tickets = load(Vec::new());
        assert!(tickets.is_empty());
    }

    #[test]
    fn test_load_csv_sample() {
        let tickets = load_csv(SAMPLE.as_bytes(), DEFAULT_DATE_FORMAT).unwrap();
        assert_eq!(tickets.len(), 3);

        assert_eq!(tickets[0].key, "ABC-1");
        assert_eq!(tickets[0].resolution_days, Some(2));

        assert_eq!(tickets[1].assignee, "Unassigned");
        assert_eq!(tickets[1].reporter, "Unknown");
        assert_eq!(tickets[1].priority, "Medium");
        assert_eq!(tickets[1].issue_type, "Task");
        assert_eq!(tickets[1].resolved_at, None);

        assert_eq!(tickets[2].created_at, None);
        assert_eq!(tickets[2].created_week, None);
    }

    #[test]
    fn test_load_csv_missing_columns() {
        let data = "Issue key,Status\nABC-9,Done\n";
        let tickets = load_csv(data.as_bytes(), DEFAULT_DATE_FORMAT).unwrap();
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].assignee, "Unassigned");
        assert_eq!(tickets[0].summary, "");
        assert_eq!(tickets[0].created_at, None);
    }

    #[test]
    fn test_load_csv_header_only() {
        let data = "Issue key,Summary,Status\n";
        let tickets = load_csv(data.as_bytes(), DEFAULT_DATE_FORMAT).unwrap();
        assert!(tickets.is_empty());
    }

    #[test]
    fn test_load_csv_empty_stream() {
        let tickets = load_csv("".as_bytes(), DEFAULT_DATE_FORMAT).unwrap();
        assert!(tickets.is_empty());
    }

    #[test]
    fn test_load_csv_unequal_lengths_is_error() {
        let data = "Issue key,Status\nABC-1,Done,Extra\n";
        let result = load_csv(data.as_bytes(), DEFAULT_DATE_FORMAT);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_csv_invalid_utf8_is_error() {
        let data: &[u8] = b"Issue key,Summary\nABC-1,Caf\xe9 \xff\n";
        let result = load_csv(data, DEFAULT_DATE_FORMAT);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_csv_keeps_row_order() {
        let tickets = load_csv(SAMPLE.as_bytes(), DEFAULT_DATE_FORMAT).unwrap();
        let keys: Vec<_> = tickets.iter().map(|t| t.key.as_str()).collect();
        assert_eq!(keys, ["ABC-1", "ABC-2", "ABC-3"]);
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_csv_file_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = Utf8PathBuf::try_from(tmp.path().join("Jira.csv")).unwrap();

        let result = load_csv_file(&[missing.clone()], DEFAULT_DATE_FORMAT).unwrap();
        match result {
            SourceResult::NotFound(tried) => assert_eq!(tried, vec![missing]),
            SourceResult::Found(_) => panic!("Expected NotFound"),
        }
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_csv_file_uses_first_existing_candidate() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = Utf8PathBuf::try_from(tmp.path().join("missing.csv")).unwrap();
        let present = Utf8PathBuf::try_from(tmp.path().join("Jira.csv")).unwrap();
        std::fs::write(&present, SAMPLE).unwrap();

        let result = load_csv_file(&[missing, present], DEFAULT_DATE_FORMAT).unwrap();
        assert_eq!(result.found().unwrap().len(), 3);
    }

    #[test]
    fn test_load_csv_file_no_candidates() {
        let result = load_csv_file(&[], DEFAULT_DATE_FORMAT).unwrap();
        assert!(!result.is_found());
    }
}
