use crate::model::AwardRecord;
use std::collections::BTreeMap;

/// Winning years per producer, keyed by producer name.
///
/// Years within a producer are ascending and unique: two wins in the same
/// year collapse into one.
pub fn build_win_history(records: &[AwardRecord]) -> BTreeMap<String, Vec<i32>> {
    let mut grouped: BTreeMap<String, Vec<i32>> = BTreeMap::new();

    for record in records.iter().filter(|r| r.won) {
        grouped
            .entry(record.producer.clone())
            .or_default()
            .push(record.year);
    }

    for years in grouped.values_mut() {
        years.sort_unstable();
        years.dedup();
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32, producer: &str, won: bool) -> AwardRecord {
        AwardRecord {
            year,
            producer: producer.to_string(),
            won,
        }
    }

    #[test]
    fn groups_only_winning_records_sorted() {
        let records = vec![
            record(2015, "John G.", true),
            record(2000, "John H.", false),
            record(2012, "John G.", true),
            record(2018, "John H.", true),
        ];
        let history = build_win_history(&records);

        assert_eq!(history.len(), 2);
        assert_eq!(history["John G."], vec![2012, 2015]);
        assert_eq!(history["John H."], vec![2018]);
    }

    #[test]
    fn same_year_wins_count_once() {
        let records = vec![
            record(1990, "Joel Silver", true),
            record(1990, "Joel Silver", true),
            record(1991, "Joel Silver", true),
        ];
        let history = build_win_history(&records);
        assert_eq!(history["Joel Silver"], vec![1990, 1991]);
    }

    #[test]
    fn producers_come_out_in_name_order() {
        let records = vec![
            record(2000, "Zed", true),
            record(2000, "Abe", true),
            record(2000, "Mia", true),
        ];
        let names: Vec<_> = build_win_history(&records).into_keys().collect();
        assert_eq!(names, vec!["Abe", "Mia", "Zed"]);
    }
}
