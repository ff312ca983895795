use crate::types::{CrashRecord, FreqTable, MonthRow, StreetRow, VehicleRow};
use crate::util::{format_int, month_name};
use chrono::Datelike;

/// Sentinel shown when no vehicle-type data exists.
pub const UNKNOWN_VEHICLE: &str = "Unknown";

/// Every statistic the menu can display, computed once from the cleaned
/// dataset. The menu only reads this; nothing here is recomputed per
/// selection.
#[derive(Debug, Clone)]
pub struct CrashSummary {
    pub total_crashes: usize,
    pub total_injured: u64,
    pub total_killed: u64,
    /// Multiset over both street columns; each record contributes 0–2.
    pub street_counts: FreqTable,
    pub top_streets: Vec<(String, u64)>,
    /// Dense: one slot per calendar month, January at index 0.
    pub monthly_counts: [u64; 12],
    /// Month number 1–12; the lowest month wins a tie.
    pub peak_month: u32,
    pub vehicle_type_counts: FreqTable,
    pub most_common_vehicle: (String, u64),
    pub top_3_vehicles: Vec<(String, u64)>,
}

impl CrashSummary {
    pub fn compute(records: &[CrashRecord]) -> Self {
        let mut total_injured = 0u64;
        let mut total_killed = 0u64;
        let mut street_counts = FreqTable::new();
        let mut monthly_counts = [0u64; 12];
        let mut vehicle_type_counts = FreqTable::new();

        for r in records {
            total_injured += r.persons_injured;
            total_killed += r.persons_killed;
            if let Some(s) = r.on_street.as_deref() {
                street_counts.add(s);
            }
            if let Some(s) = r.cross_street.as_deref() {
                street_counts.add(s);
            }
            monthly_counts[r.datetime.month0() as usize] += 1;
            if let Some(v) = r.vehicle_type.as_deref() {
                vehicle_type_counts.add(v);
            }
        }

        // Strict-greater scan from January, so the lowest month number
        // wins when counts tie.
        let mut peak_month = 1u32;
        for m in 2..=12u32 {
            if monthly_counts[(m - 1) as usize] > monthly_counts[(peak_month - 1) as usize] {
                peak_month = m;
            }
        }

        let top_streets = street_counts.top(5);
        let most_common_vehicle = vehicle_type_counts
            .ranked()
            .into_iter()
            .next()
            .unwrap_or_else(|| (UNKNOWN_VEHICLE.to_string(), 0));
        let top_3_vehicles = vehicle_type_counts.top(3);

        CrashSummary {
            total_crashes: records.len(),
            total_injured,
            total_killed,
            street_counts,
            top_streets,
            monthly_counts,
            peak_month,
            vehicle_type_counts,
            most_common_vehicle,
            top_3_vehicles,
        }
    }

    /// Peak month as a display name plus its count.
    pub fn peak(&self) -> (&'static str, u64) {
        (
            month_name(self.peak_month),
            self.monthly_counts[(self.peak_month - 1) as usize],
        )
    }

    /// Vehicle ranking over every type, highest count first.
    pub fn vehicle_ranking(&self) -> Vec<(String, u64)> {
        self.vehicle_type_counts.ranked()
    }

    pub fn street_rows(&self) -> Vec<StreetRow> {
        self.top_streets
            .iter()
            .enumerate()
            .map(|(i, (street, n))| StreetRow {
                rank: i + 1,
                street: street.clone(),
                accidents: format_int(*n),
            })
            .collect()
    }

    pub fn vehicle_rows(&self) -> Vec<VehicleRow> {
        self.top_3_vehicles
            .iter()
            .enumerate()
            .map(|(i, (vehicle, n))| VehicleRow {
                rank: i + 1,
                vehicle_type: vehicle.clone(),
                collisions: format_int(*n),
            })
            .collect()
    }

    pub fn monthly_rows(&self) -> Vec<MonthRow> {
        self.monthly_counts
            .iter()
            .enumerate()
            .map(|(i, &n)| MonthRow {
                month: month_name(i as u32 + 1).to_string(),
                accidents: format_int(n),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(
        date: (i32, u32, u32),
        injured: u64,
        killed: u64,
        on: Option<&str>,
        cross: Option<&str>,
        vehicle: Option<&str>,
    ) -> CrashRecord {
        CrashRecord {
            datetime: NaiveDate::from_ymd_opt(date.0, date.1, date.2)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
            persons_injured: injured,
            persons_killed: killed,
            on_street: on.map(|s| s.to_string()),
            cross_street: cross.map(|s| s.to_string()),
            vehicle_type: vehicle.map(|s| s.to_string()),
        }
    }

    #[test]
    fn totals_sum_over_all_records() {
        let records = vec![
            record((2024, 1, 5), 2, 0, Some("MAIN ST"), None, Some("Sedan")),
            record((2024, 1, 6), 0, 1, None, Some("MAIN ST"), Some("Sedan")),
        ];
        let s = CrashSummary::compute(&records);
        assert_eq!(s.total_crashes, 2);
        assert_eq!(s.total_injured, 2);
        assert_eq!(s.total_killed, 1);
    }

    #[test]
    fn street_mass_counts_both_columns() {
        let records = vec![
            record((2024, 1, 5), 0, 0, Some("MAIN ST"), Some("1 AVE"), None),
            record((2024, 2, 1), 0, 0, Some("MAIN ST"), None, None),
            record((2024, 3, 1), 0, 0, None, None, None),
        ];
        let s = CrashSummary::compute(&records);
        assert_eq!(s.street_counts.total(), 3);
        assert_eq!(s.street_counts.count("MAIN ST"), 2);
        assert_eq!(s.top_streets[0], ("MAIN ST".to_string(), 2));
    }

    #[test]
    fn monthly_table_is_dense_and_sums_to_total() {
        let records = vec![
            record((2024, 1, 5), 0, 0, None, None, None),
            record((2024, 1, 9), 0, 0, None, None, None),
            record((2024, 7, 4), 0, 0, None, None, None),
        ];
        let s = CrashSummary::compute(&records);
        assert_eq!(s.monthly_counts.len(), 12);
        assert_eq!(s.monthly_counts.iter().sum::<u64>() as usize, s.total_crashes);
        assert_eq!(s.monthly_counts[0], 2);
        assert_eq!(s.monthly_counts[6], 1);
        assert_eq!(s.monthly_counts[11], 0);
    }

    #[test]
    fn peak_month_tie_goes_to_the_lowest_month() {
        let records = vec![
            record((2024, 3, 1), 0, 0, None, None, None),
            record((2024, 7, 1), 0, 0, None, None, None),
        ];
        let s = CrashSummary::compute(&records);
        assert_eq!(s.peak_month, 3);
        assert_eq!(s.peak(), ("March", 1));
    }

    #[test]
    fn empty_dataset_peaks_in_january_with_zero() {
        let s = CrashSummary::compute(&[]);
        assert_eq!(s.peak_month, 1);
        assert_eq!(s.peak(), ("January", 0));
        assert_eq!(s.total_crashes, 0);
    }

    #[test]
    fn missing_vehicle_data_yields_the_unknown_sentinel() {
        let records = vec![record((2024, 1, 5), 0, 0, None, None, None)];
        let s = CrashSummary::compute(&records);
        assert!(s.vehicle_type_counts.is_empty());
        assert_eq!(s.most_common_vehicle, (UNKNOWN_VEHICLE.to_string(), 0));
        assert!(s.top_3_vehicles.is_empty());
    }

    #[test]
    fn top_vehicles_is_capped_at_three() {
        let records = vec![
            record((2024, 1, 1), 0, 0, None, None, Some("Sedan")),
            record((2024, 1, 2), 0, 0, None, None, Some("Sedan")),
            record((2024, 1, 3), 0, 0, None, None, Some("SUV")),
            record((2024, 1, 4), 0, 0, None, None, Some("Bike")),
            record((2024, 1, 5), 0, 0, None, None, Some("Truck")),
        ];
        let s = CrashSummary::compute(&records);
        assert_eq!(s.top_3_vehicles.len(), 3);
        assert_eq!(s.most_common_vehicle, ("Sedan".to_string(), 2));
        // Ties behind the leader keep dataset order.
        assert_eq!(s.top_3_vehicles[1].0, "SUV");
        assert_eq!(s.top_3_vehicles[2].0, "Bike");
    }

    #[test]
    fn presentation_rows_mirror_the_rankings() {
        let records = vec![
            record((2024, 2, 1), 0, 0, Some("MAIN ST"), None, Some("Sedan")),
            record((2024, 2, 2), 0, 0, Some("MAIN ST"), None, Some("Sedan")),
        ];
        let s = CrashSummary::compute(&records);
        let streets = s.street_rows();
        assert_eq!(streets.len(), 1);
        assert_eq!(streets[0].rank, 1);
        assert_eq!(streets[0].street, "MAIN ST");
        assert_eq!(streets[0].accidents, "2");
        let months = s.monthly_rows();
        assert_eq!(months.len(), 12);
        assert_eq!(months[1].month, "February");
        assert_eq!(months[1].accidents, "2");
        let vehicles = s.vehicle_rows();
        assert_eq!(vehicles[0].vehicle_type, "Sedan");
        assert_eq!(vehicles[0].collisions, "2");
    }
}
