use csv::{ReaderBuilder, Trim};
use log::debug;

use crate::donations::{DonationRecord, parse_amount};

const DATE_FIELD: usize = 0;
const ENTITY_FIELD: usize = 1;
const AMOUNT_FIELD: usize = 2;

/// Turn raw `date,entity,amount` lines into records.
///
/// Blank lines and lines without an entity name are skipped. Every other line becomes a
/// record, even when its amount is unusable; the aggregator decides what gets summed.
/// There is no header handling and no quoting, so a comma inside a name shifts the fields.
pub fn parse(raw_text: &str) -> Vec<DonationRecord> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::None)
        .from_reader(raw_text.as_bytes());

    let mut records = Vec::new();
    let mut sequence_id = 0;

    for (index, result) in rdr.records().enumerate() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                debug!("skipping unreadable record {}: {}", index + 1, e);
                continue;
            }
        };

        let entity_name = match row.get(ENTITY_FIELD) {
            Some(name) if !name.trim().is_empty() => name,
            _ => {
                debug!("skipping record {} without an entity name", index + 1);
                continue;
            }
        };

        sequence_id += 1;
        records.push(DonationRecord {
            sequence_id,
            date: row.get(DATE_FIELD).unwrap_or_default().to_string(),
            entity_name: entity_name.to_string(),
            amount: row.get(AMOUNT_FIELD).map_or(f64::NAN, parse_amount),
        });
    }

    debug!("parsed {} records", records.len());
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_yields_nothing() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n").is_empty());
        assert!(parse("  \n").is_empty());
        assert!(parse("\r\n\t\n").is_empty());
    }

    #[test]
    fn test_field_extraction() {
        let records = parse("2023-01-01,Acme,500.5");
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.sequence_id, 1);
        assert_eq!(record.date, "2023-01-01");
        assert_eq!(record.entity_name, "Acme");
        assert_eq!(record.amount, 500.5);
    }

    #[test]
    fn test_entity_name_is_kept_verbatim() {
        let records = parse("2023-01-01, Acme Ltd ,10\n2023-01-02,acme ltd,20");
        assert_eq!(records[0].entity_name, " Acme Ltd ");
        assert_eq!(records[1].entity_name, "acme ltd");
    }

    #[test]
    fn test_invalid_amount_is_retained() {
        let records = parse("2023-01-04,PartyC,abc\n2023-01-05,PartyD");
        assert_eq!(records.len(), 2);
        assert!(records[0].amount.is_nan());
        assert!(records[1].amount.is_nan());
    }

    #[test]
    fn test_lines_without_entity_are_skipped() {
        let records = parse(",,\n2023-01-01,  ,5\n2023-01-02\n2023-01-03,B,7");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].entity_name, "B");
        assert_eq!(records[0].sequence_id, 1);
    }

    #[test]
    fn test_sequence_ids_count_accepted_records() {
        let records = parse("2023-01-01,A,1\n\n2023-01-02,B,2\n\n2023-01-03,C,3\n");
        let ids: Vec<u32> = records.iter().map(|r| r.sequence_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let records = parse("2023-01-01,A,1\r\n2023-01-02,B,2\r\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].amount, 2.0);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let records = parse("2023-01-01,A,1,extra,fields");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].amount, 1.0);
    }
}
