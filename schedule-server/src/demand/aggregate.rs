//! Demand aggregation into time slots.

use indexmap::IndexMap;

use crate::domain::ClockTime;

use super::{DemandError, DemandRecord, PassengerSource};

/// First synthesized slot, 06:00.
const SYNTHESIZED_START_MINS: i64 = 6 * 60;

/// Spacing between synthesized slots.
const SYNTHESIZED_STEP_MINS: i64 = 30;

/// Total passengers per departure time slot.
///
/// Iteration follows the order in which slots were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemandMap {
    slots: IndexMap<ClockTime, u32>,
}

impl DemandMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add passengers to a slot, creating it if needed.
    pub fn add(&mut self, slot: ClockTime, passengers: u32) {
        let total = self.slots.entry(slot).or_insert(0);
        *total = total.saturating_add(passengers);
    }

    /// Demand for one slot.
    pub fn get(&self, slot: ClockTime) -> Option<u32> {
        self.slots.get(&slot).copied()
    }

    /// Number of distinct time slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (ClockTime, u32)> + '_ {
        self.slots.iter().map(|(slot, demand)| (*slot, *demand))
    }

    /// Slots by descending demand; ties keep first-seen order.
    pub fn by_demand_desc(&self) -> Vec<(ClockTime, u32)> {
        let mut slots: Vec<_> = self.iter().collect();
        slots.sort_by(|a, b| b.1.cmp(&a.1));
        slots
    }

    /// Slots by ascending time of day.
    pub fn by_time(&self) -> Vec<(ClockTime, u32)> {
        let mut slots: Vec<_> = self.iter().collect();
        slots.sort_by_key(|(slot, _)| slot.minute_of_day());
        slots
    }

    /// Sum of demand over all slots.
    pub fn total(&self) -> u64 {
        self.slots.values().map(|&d| u64::from(d)).sum()
    }
}

impl FromIterator<(ClockTime, u32)> for DemandMap {
    fn from_iter<I: IntoIterator<Item = (ClockTime, u32)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (slot, passengers) in iter {
            map.add(slot, passengers);
        }
        map
    }
}

/// The slot assigned to the `index`-th record when it has no `time`.
///
/// Slots start at 06:00 and advance half an hour every two records, with
/// the minute alternating :00/:30 by index parity. Labels wrap past
/// midnight.
pub fn synthesized_slot(index: usize) -> ClockTime {
    // Two records per hour, so the pattern repeats every 48 records
    let index = (index % 48) as i64;
    let hour_offset = index / 2 * 60;
    let minute = index % 2 * SYNTHESIZED_STEP_MINS;
    ClockTime::from_minutes(SYNTHESIZED_START_MINS + hour_offset + minute)
}

/// Sum passenger demand per time slot.
///
/// Rows without a usable passenger figure draw one from `source`. Rows
/// without a `time` get a [`synthesized_slot`] from their position. A
/// malformed `time` abandons the whole aggregation.
pub fn aggregate_demand(
    records: &[DemandRecord],
    source: &mut dyn PassengerSource,
) -> Result<DemandMap, DemandError> {
    let mut map = DemandMap::new();

    for (index, record) in records.iter().enumerate() {
        let passengers = match record.passengers() {
            Some(p) => p,
            None => source.fallback_passengers(),
        };

        let slot = match record.time() {
            Some(label) => ClockTime::parse(label).map_err(|source| DemandError::InvalidTime {
                row: index + 1,
                source,
            })?,
            None => synthesized_slot(index),
        };

        map.add(slot, passengers);
    }

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demand::{FixedPassengers, RandomPassengers};

    fn t(s: &str) -> ClockTime {
        ClockTime::parse(s).unwrap()
    }

    fn record(pairs: &[(&str, &str)]) -> DemandRecord {
        DemandRecord::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn sums_records_sharing_a_slot() {
        let records = vec![
            record(&[("time", "08:00"), ("passengers", "100")]),
            record(&[("time", "08:00"), ("passengers", "50")]),
        ];

        let map = aggregate_demand(&records, &mut FixedPassengers::new(vec![])).unwrap();

        assert_eq!(map.len(), 1);
        assert_eq!(map.get(t("08:00")), Some(150));
    }

    #[test]
    fn labels_are_normalised() {
        let records = vec![
            record(&[("time", "8:00"), ("passengers", "10")]),
            record(&[("time", "08:00"), ("passengers", "5")]),
        ];

        let map = aggregate_demand(&records, &mut FixedPassengers::new(vec![])).unwrap();
        assert_eq!(map.get(t("08:00")), Some(15));
    }

    #[test]
    fn synthesized_slots_follow_row_index() {
        assert_eq!(synthesized_slot(0), t("06:00"));
        assert_eq!(synthesized_slot(1), t("06:30"));
        assert_eq!(synthesized_slot(2), t("07:00"));
        assert_eq!(synthesized_slot(3), t("07:30"));
        assert_eq!(synthesized_slot(35), t("23:30"));
        assert_eq!(synthesized_slot(36), t("00:00"));
        assert_eq!(synthesized_slot(48), t("06:00"));
    }

    #[test]
    fn missing_time_uses_position() {
        let records = vec![
            record(&[("passengers", "100")]),
            record(&[("time", "12:00"), ("passengers", "1")]),
            record(&[("passengers", "200")]),
        ];

        let map = aggregate_demand(&records, &mut FixedPassengers::new(vec![])).unwrap();

        assert_eq!(map.get(t("06:00")), Some(100));
        assert_eq!(map.get(t("07:00")), Some(200));
        assert_eq!(map.get(t("12:00")), Some(1));
    }

    #[test]
    fn missing_passengers_use_source() {
        let records = vec![
            record(&[("time", "09:00")]),
            record(&[("time", "10:00"), ("passengers", "n/a")]),
        ];

        let map = aggregate_demand(&records, &mut FixedPassengers::new(vec![120, 80])).unwrap();

        assert_eq!(map.get(t("09:00")), Some(120));
        assert_eq!(map.get(t("10:00")), Some(80));
    }

    #[test]
    fn seeded_fallback_is_deterministic() {
        let records = vec![record(&[]), record(&[]), record(&[])];

        let a = aggregate_demand(&records, &mut RandomPassengers::seeded(42)).unwrap();
        let b = aggregate_demand(&records, &mut RandomPassengers::seeded(42)).unwrap();

        assert_eq!(a, b);
        for (_, demand) in a.iter() {
            assert!((50..350).contains(&demand));
        }
    }

    #[test]
    fn malformed_time_is_an_error() {
        let records = vec![
            record(&[("time", "08:00"), ("passengers", "10")]),
            record(&[("time", "8 o'clock"), ("passengers", "10")]),
        ];

        let err = aggregate_demand(&records, &mut FixedPassengers::new(vec![])).unwrap_err();
        assert!(matches!(err, DemandError::InvalidTime { row: 2, .. }));
    }

    #[test]
    fn insertion_order_is_kept() {
        let map: DemandMap = [(t("09:00"), 1), (t("07:00"), 2), (t("09:00"), 3)]
            .into_iter()
            .collect();

        let order: Vec<_> = map.iter().collect();
        assert_eq!(order, vec![(t("09:00"), 4), (t("07:00"), 2)]);
    }

    #[test]
    fn sorted_views() {
        let map: DemandMap = [(t("09:00"), 100), (t("07:00"), 300), (t("08:00"), 100)]
            .into_iter()
            .collect();

        let by_demand: Vec<_> = map.by_demand_desc().into_iter().map(|(s, _)| s).collect();
        assert_eq!(by_demand, vec![t("07:00"), t("09:00"), t("08:00")]);

        let by_time: Vec<_> = map.by_time().into_iter().map(|(s, _)| s).collect();
        assert_eq!(by_time, vec![t("07:00"), t("08:00"), t("09:00")]);

        assert_eq!(map.total(), 500);
    }
}
