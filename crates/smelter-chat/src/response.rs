//! Plain-text answer rendering.
//!
//! Numbers go through `f64`'s `Display`, which prints the shortest string
//! that round-trips, so values read back exactly as stored (`10.0` as `10`).

use smelter_core::types::{BatchRecord, LookupKey};

use crate::rules::Attribute;

/// "of batch 700001" or "at timestamp 2024-09-02T00:10:00Z".
fn subject(key: &LookupKey) -> String {
    match key {
        LookupKey::BatchId(id) => format!("of batch {}", id),
        LookupKey::Timestamp(ts) => format!("at timestamp {}", ts),
    }
}

fn summary_heading(key: &LookupKey) -> String {
    match key {
        LookupKey::BatchId(id) => format!("Details for batch {}", id),
        LookupKey::Timestamp(ts) => format!("Details at timestamp {}", ts),
    }
}

/// Answer for a key that resolved to no record.
pub fn not_found(key: &LookupKey) -> String {
    match key {
        LookupKey::BatchId(id) => format!("Batch {} not found.", id),
        LookupKey::Timestamp(ts) => format!("No batch found at timestamp {}.", ts),
    }
}

/// Answer reporting `attribute` of `batch`, phrased around `key`.
pub fn render(key: &LookupKey, attribute: Attribute, batch: &BatchRecord) -> String {
    let subject = subject(key);
    match attribute {
        Attribute::Uts => format!("The UTS {} is {}.", subject, batch.uts),
        Attribute::Elongation => {
            format!("The elongation {} is {}%.", subject, batch.elongation)
        }
        Attribute::Conductivity => {
            format!("The conductivity {} is {}.", subject, batch.conductivity)
        }
        Attribute::Grade => format!("The grade {} is {}.", subject, batch.grade),
        Attribute::Material => format!("The material {} is {}.", subject, batch.material),
        Attribute::Composition => {
            let fields: Vec<String> = batch
                .composition
                .entries()
                .iter()
                .map(|(label, value)| format!("{}: {}", label, value))
                .collect();
            format!("The composition {} is: {}.", subject, fields.join(", "))
        }
        Attribute::Timestamp => format!("The timestamp {} is {}.", subject, batch.timestamp),
        Attribute::Summary => format!(
            "{}: UTS: {}, Elongation: {}%, Conductivity: {}, Grade: {}, Material: {}.",
            summary_heading(key),
            batch.uts,
            batch.elongation,
            batch.conductivity,
            batch.grade,
            batch.material
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smelter_store::seed_records;

    fn batch(idx: usize) -> BatchRecord {
        seed_records().remove(idx)
    }

    fn id(v: &str) -> LookupKey {
        LookupKey::BatchId(v.to_string())
    }

    fn ts(v: &str) -> LookupKey {
        LookupKey::Timestamp(v.to_string())
    }

    #[test]
    fn test_render_uts() {
        assert_eq!(
            render(&id("700001"), Attribute::Uts, &batch(0)),
            "The UTS of batch 700001 is 10.3."
        );
    }

    #[test]
    fn test_render_whole_number_without_fraction() {
        assert_eq!(
            render(&id("700003"), Attribute::Uts, &batch(2)),
            "The UTS of batch 700003 is 10."
        );
    }

    #[test]
    fn test_render_elongation_percent() {
        assert_eq!(
            render(&ts("2024-09-02T00:10:00Z"), Attribute::Elongation, &batch(0)),
            "The elongation at timestamp 2024-09-02T00:10:00Z is 15.6%."
        );
    }

    #[test]
    fn test_render_text_attributes() {
        let b = batch(4);
        assert_eq!(
            render(&id("700005"), Attribute::Grade, &b),
            "The grade of batch 700005 is WE20."
        );
        assert_eq!(
            render(&id("700005"), Attribute::Material, &b),
            "The material of batch 700005 is WE200095."
        );
        assert_eq!(
            render(&id("700005"), Attribute::Timestamp, &b),
            "The timestamp of batch 700005 is 2024-09-02T04:45:00Z."
        );
    }

    #[test]
    fn test_render_composition() {
        assert_eq!(
            render(&ts("2024-09-02T01:15:00Z"), Attribute::Composition, &batch(1)),
            "The composition at timestamp 2024-09-02T01:15:00Z is: Si: 0.06, Fe: 0.21, \
             Ti: 0.001, V: 0.003, Cu: 0.001, Mn: 0.004, Other Impurities: 0.02, Al: 99.705."
        );
    }

    #[test]
    fn test_render_composition_trailing_zero_dropped() {
        // Fe is stored as 0.20 for 800007.
        let answer = render(&id("800007"), Attribute::Composition, &batch(6));
        assert!(answer.contains("Fe: 0.2,"));
    }

    #[test]
    fn test_render_summary() {
        assert_eq!(
            render(&id("800010"), Attribute::Summary, &batch(9)),
            "Details for batch 800010: UTS: 9.9, Elongation: 18.7%, Conductivity: 61.3, \
             Grade: WE20, Material: WE200095."
        );
        assert_eq!(
            render(&ts("2024-09-02T09:47:00Z"), Attribute::Summary, &batch(9)),
            "Details at timestamp 2024-09-02T09:47:00Z: UTS: 9.9, Elongation: 18.7%, \
             Conductivity: 61.3, Grade: WE20, Material: WE200095."
        );
    }

    #[test]
    fn test_not_found_messages() {
        assert_eq!(not_found(&id("999999")), "Batch 999999 not found.");
        assert_eq!(
            not_found(&ts("2030-01-01T00:00:00Z")),
            "No batch found at timestamp 2030-01-01T00:00:00Z."
        );
    }
}
