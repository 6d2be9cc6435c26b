//! The fixed production dataset served by the store.

use smelter_core::types::{BatchRecord, Composition};

const GRADE: &str = "WE20";
const MATERIAL: &str = "WE200095";

/// Composition columns: si, fe, ti, v, cu, mn, othimp, al.
type CompositionRow = [f64; 8];

fn batch(
    batch_id: &str,
    uts: f64,
    elongation: f64,
    conductivity: f64,
    c: CompositionRow,
    timestamp: &str,
) -> BatchRecord {
    BatchRecord {
        batch_id: batch_id.to_string(),
        uts,
        elongation,
        conductivity,
        grade: GRADE.to_string(),
        material: MATERIAL.to_string(),
        composition: Composition {
            si: c[0],
            fe: c[1],
            ti: c[2],
            v: c[3],
            cu: c[4],
            mn: c[5],
            othimp: c[6],
            al: c[7],
        },
        timestamp: timestamp.to_string(),
    }
}

/// The ten seed batches, in production order.
pub fn seed_records() -> Vec<BatchRecord> {
    vec![
        batch("700001", 10.3, 15.6, 61.5, [0.07, 0.25, 0.002, 0.004, 0.001, 0.005, 0.02, 99.665], "2024-09-02T00:10:00Z"),
        batch("700002", 9.8, 18.2, 61.3, [0.06, 0.21, 0.001, 0.003, 0.001, 0.004, 0.02, 99.705], "2024-09-02T01:15:00Z"),
        batch("700003", 10.0, 20.1, 61.4, [0.06, 0.18, 0.001, 0.002, 0.001, 0.003, 0.02, 99.742], "2024-09-02T02:22:00Z"),
        batch("700004", 9.6, 22.3, 61.2, [0.07, 0.22, 0.003, 0.005, 0.001, 0.004, 0.02, 99.688], "2024-09-02T03:37:00Z"),
        batch("700005", 10.2, 16.9, 61.5, [0.06, 0.19, 0.002, 0.003, 0.001, 0.004, 0.02, 99.721], "2024-09-02T04:45:00Z"),
        batch("800006", 9.7, 19.8, 61.3, [0.06, 0.23, 0.001, 0.002, 0.001, 0.005, 0.02, 99.678], "2024-09-02T05:53:00Z"),
        batch("800007", 10.1, 17.5, 61.4, [0.07, 0.20, 0.002, 0.004, 0.001, 0.003, 0.02, 99.702], "2024-09-02T06:11:00Z"),
        batch("800008", 9.5, 21.6, 61.2, [0.06, 0.17, 0.001, 0.003, 0.001, 0.004, 0.02, 99.759], "2024-09-02T07:26:00Z"),
        batch("800009", 10.4, 16.2, 61.5, [0.07, 0.21, 0.002, 0.002, 0.001, 0.004, 0.02, 99.695], "2024-09-02T08:39:00Z"),
        batch("800010", 9.9, 18.7, 61.3, [0.06, 0.22, 0.001, 0.003, 0.001, 0.005, 0.02, 99.687], "2024-09-02T09:47:00Z"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_ten_batches() {
        assert_eq!(seed_records().len(), 10);
    }

    #[test]
    fn test_seed_shared_classifiers() {
        for record in seed_records() {
            assert_eq!(record.grade, "WE20");
            assert_eq!(record.material, "WE200095");
            assert_eq!(record.composition.othimp, 0.02);
        }
    }

    #[test]
    fn test_seed_first_and_last() {
        let records = seed_records();
        assert_eq!(records[0].batch_id, "700001");
        assert_eq!(records[0].uts, 10.3);
        assert_eq!(records[9].batch_id, "800010");
        assert_eq!(records[9].timestamp, "2024-09-02T09:47:00Z");
        assert_eq!(records[9].composition.al, 99.687);
    }
}
