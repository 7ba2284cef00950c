//! Availability Slots
//!
//! Half-hour grid offered to mentors, plus date grouping of saved slots.

use chrono::{Duration, NaiveTime};

use crate::models::{AvailabilitySlot, SlotStatus};

const FIRST_SLOT: (u32, u32) = (9, 0);
const LAST_SLOT: (u32, u32) = (17, 30);
const SLOT_MINUTES: i64 = 30;

/// "09:00 AM" ... "05:30 PM"
pub fn time_slots() -> Vec<String> {
    let (Some(mut time), Some(last)) = (
        NaiveTime::from_hms_opt(FIRST_SLOT.0, FIRST_SLOT.1, 0),
        NaiveTime::from_hms_opt(LAST_SLOT.0, LAST_SLOT.1, 0),
    ) else {
        return Vec::new();
    };
    let mut slots = Vec::new();
    while time <= last {
        slots.push(time.format("%I:%M %p").to_string());
        time += Duration::minutes(SLOT_MINUTES);
    }
    slots
}

/// Add `time` if absent, remove it if present.
pub fn toggle_time(selected: &mut Vec<String>, time: &str) {
    if let Some(index) = selected.iter().position(|t| t == time) {
        selected.remove(index);
    } else {
        selected.push(time.to_string());
    }
}

/// Distinct slot dates, ascending
pub fn slot_dates(slots: &[AvailabilitySlot]) -> Vec<String> {
    let mut dates: Vec<String> = slots.iter().map(|slot| slot.date.clone()).collect();
    dates.sort();
    dates.dedup();
    dates
}

/// Slots on `date`, or all of them
pub fn slots_on<'a>(slots: &'a [AvailabilitySlot], date: Option<&str>) -> Vec<&'a AvailabilitySlot> {
    slots
        .iter()
        .filter(|slot| date.map_or(true, |date| slot.date == date))
        .collect()
}

/// Slots a learner can still book
pub fn open_slots(slots: &[AvailabilitySlot]) -> Vec<AvailabilitySlot> {
    slots
        .iter()
        .filter(|slot| slot.status == SlotStatus::Available)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(id: u32, date: &str, status: SlotStatus) -> AvailabilitySlot {
        AvailabilitySlot {
            id,
            date: date.into(),
            time: "10:00 AM".into(),
            status,
        }
    }

    #[test]
    fn test_half_hour_grid() {
        let slots = time_slots();
        assert_eq!(slots.len(), 18);
        assert_eq!(slots.first().map(String::as_str), Some("09:00 AM"));
        assert_eq!(slots.last().map(String::as_str), Some("05:30 PM"));
        assert!(slots.contains(&"12:30 PM".to_string()));
    }

    #[test]
    fn test_toggle_time() {
        let mut selected = Vec::new();
        toggle_time(&mut selected, "09:00 AM");
        toggle_time(&mut selected, "10:30 AM");
        toggle_time(&mut selected, "09:00 AM");
        assert_eq!(selected, vec!["10:30 AM".to_string()]);
    }

    #[test]
    fn test_dates_and_filters() {
        let slots = vec![
            slot(1, "2025-06-03", SlotStatus::Available),
            slot(2, "2025-06-01", SlotStatus::Booked),
            slot(3, "2025-06-03", SlotStatus::Cancelled),
        ];
        assert_eq!(slot_dates(&slots), vec!["2025-06-01", "2025-06-03"]);
        assert_eq!(slots_on(&slots, Some("2025-06-03")).len(), 2);
        assert_eq!(slots_on(&slots, None).len(), 3);
        let open = open_slots(&slots);
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].id, 1);
    }
}
