use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{DayPart, GroupedSlots, TimeSlot};

/// Generates the bookable slots for one calendar date: every
/// `interval_minutes`-aligned minute from `start_hour:00` inclusive up
/// to `end_hour:00` exclusive, in ascending order.
///
/// A slot is unavailable when its time is strictly before `now` (only
/// relevant when `date` is today) or when its label appears in
/// `booked_labels`. Out-of-range windows (`start_hour >= end_hour`, a
/// zero interval) yield an empty vec rather than an error. The clock is
/// an explicit parameter; identical inputs produce identical slots,
/// ids included.
pub fn generate(
    date: NaiveDate,
    start_hour: u32,
    end_hour: u32,
    interval_minutes: u32,
    booked_labels: &[String],
    now: NaiveDateTime,
) -> Vec<TimeSlot> {
    let mut slots = Vec::new();
    if interval_minutes == 0 {
        return slots;
    }

    for hour in start_hour..end_hour {
        let mut minute = 0;
        while minute < 60 {
            let Some(at) = date.and_hms_opt(hour, minute, 0) else {
                minute += interval_minutes;
                continue;
            };

            let label = format_label(hour, minute);
            let is_past = at < now;
            let is_booked = booked_labels.iter().any(|b| b == &label);

            slots.push(TimeSlot {
                id: format!("slot-{hour}-{minute}"),
                label,
                available: !is_past && !is_booked,
            });

            minute += interval_minutes;
        }
    }

    slots
}

/// 12-hour label with zero-padded minutes: hour 0 is "12:00 AM",
/// hour 12 is "12:00 PM".
pub fn format_label(hour: u32, minute: u32) -> String {
    let period = if hour < 12 { "AM" } else { "PM" };
    let display_hour = if hour % 12 == 0 { 12 } else { hour % 12 };
    format!("{display_hour}:{minute:02} {period}")
}

/// Parses a generated label back to its 24-hour `(hour, minute)`.
/// "12:00 AM" is hour 0, "12:00 PM" is hour 12, any other PM hour gets
/// 12 added. Returns None for labels this module did not produce.
pub fn parse_label(label: &str) -> Option<(u32, u32)> {
    let (time, period) = label.split_once(' ')?;
    let (hour_str, minute_str) = time.split_once(':')?;
    let hour: u32 = hour_str.parse().ok()?;
    let minute: u32 = minute_str.parse().ok()?;
    if !(1..=12).contains(&hour) || minute > 59 {
        return None;
    }

    let hour24 = match period {
        "AM" => {
            if hour == 12 {
                0
            } else {
                hour
            }
        }
        "PM" => {
            if hour == 12 {
                12
            } else {
                hour + 12
            }
        }
        _ => return None,
    };
    Some((hour24, minute))
}

/// Buckets slots into morning/afternoon/evening for display, keyed on
/// the label's parsed 24-hour value.
pub fn group(slots: Vec<TimeSlot>) -> GroupedSlots {
    let mut grouped = GroupedSlots::default();
    for slot in slots {
        let Some((hour, _)) = parse_label(&slot.label) else {
            continue;
        };
        match DayPart::from_hour24(hour) {
            DayPart::Morning => grouped.morning.push(slot),
            DayPart::Afternoon => grouped.afternoon.push(slot),
            DayPart::Evening => grouped.evening.push(slot),
        }
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    #[test]
    fn test_slot_count_matches_window() {
        // 9:00..20:00 every 30 min = 22 slots
        let slots = generate(date("2025-06-16"), 9, 20, 30, &[], dt("2025-06-01 00:00"));
        assert_eq!(slots.len(), 22);

        // 9:00..17:00 every 20 min = 24 slots
        let slots = generate(date("2025-06-16"), 9, 17, 20, &[], dt("2025-06-01 00:00"));
        assert_eq!(slots.len(), 24);

        // 8:00..20:00 hourly = 12 slots
        let slots = generate(date("2025-06-16"), 8, 20, 60, &[], dt("2025-06-01 00:00"));
        assert_eq!(slots.len(), 12);
    }

    #[test]
    fn test_slots_ascending_with_unique_ids() {
        let slots = generate(date("2025-06-16"), 9, 17, 20, &[], dt("2025-06-01 00:00"));
        let times: Vec<(u32, u32)> = slots
            .iter()
            .map(|s| parse_label(&s.label).unwrap())
            .collect();
        let mut sorted = times.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(times, sorted);

        let ids: HashSet<&str> = slots.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), slots.len());
    }

    #[test]
    fn test_ids_are_deterministic() {
        let a = generate(date("2025-06-16"), 9, 11, 30, &[], dt("2025-06-01 00:00"));
        let b = generate(date("2025-06-16"), 9, 11, 30, &[], dt("2025-06-01 00:00"));
        assert_eq!(a, b);
        assert_eq!(a[0].id, "slot-9-0");
        assert_eq!(a[1].id, "slot-9-30");
    }

    #[test]
    fn test_past_slots_unavailable_today() {
        // now = 13:10 on the same day: everything through 1:00 PM is gone
        let slots = generate(date("2025-06-16"), 9, 17, 60, &[], dt("2025-06-16 13:10"));
        for slot in &slots {
            let (hour, _) = parse_label(&slot.label).unwrap();
            assert_eq!(slot.available, hour >= 14, "slot {}", slot.label);
        }
    }

    #[test]
    fn test_future_date_all_available() {
        let slots = generate(date("2025-06-20"), 9, 17, 30, &[], dt("2025-06-16 13:10"));
        assert!(slots.iter().all(|s| s.available));
    }

    #[test]
    fn test_booked_labels_unavailable() {
        let booked = vec!["10:00 AM".to_string(), "2:30 PM".to_string()];
        let slots = generate(date("2025-06-20"), 9, 17, 30, &booked, dt("2025-06-01 00:00"));
        for slot in &slots {
            let expect_booked = slot.label == "10:00 AM" || slot.label == "2:30 PM";
            assert_eq!(slot.available, !expect_booked, "slot {}", slot.label);
        }
    }

    #[test]
    fn test_inverted_window_yields_nothing() {
        assert!(generate(date("2025-06-16"), 17, 9, 30, &[], dt("2025-06-01 00:00")).is_empty());
        assert!(generate(date("2025-06-16"), 9, 9, 30, &[], dt("2025-06-01 00:00")).is_empty());
    }

    #[test]
    fn test_zero_interval_yields_nothing() {
        assert!(generate(date("2025-06-16"), 9, 17, 0, &[], dt("2025-06-01 00:00")).is_empty());
    }

    #[test]
    fn test_label_wraparound() {
        assert_eq!(format_label(0, 0), "12:00 AM");
        assert_eq!(format_label(12, 0), "12:00 PM");
        assert_eq!(format_label(13, 5), "1:05 PM");
        assert_eq!(format_label(23, 30), "11:30 PM");
        assert_eq!(format_label(9, 0), "9:00 AM");
    }

    #[test]
    fn test_label_round_trip() {
        for hour in 0..24 {
            for minute in [0, 15, 30, 45] {
                let label = format_label(hour, minute);
                assert_eq!(parse_label(&label), Some((hour, minute)), "label {label}");
            }
        }
    }

    #[test]
    fn test_parse_label_boundaries() {
        assert_eq!(parse_label("12:00 AM"), Some((0, 0)));
        assert_eq!(parse_label("12:00 PM"), Some((12, 0)));
        assert_eq!(parse_label("1:00 PM"), Some((13, 0)));
    }

    #[test]
    fn test_parse_label_rejects_garbage() {
        assert_eq!(parse_label("noon"), None);
        assert_eq!(parse_label("13:00 PM"), None);
        assert_eq!(parse_label("10:00"), None);
        assert_eq!(parse_label("10:75 AM"), None);
        assert_eq!(parse_label("0:30 AM"), None);
    }

    #[test]
    fn test_grouping_boundaries() {
        let slots = generate(date("2025-06-20"), 5, 22, 30, &[], dt("2025-06-01 00:00"));
        let grouped = group(slots);

        assert!(grouped.morning.iter().all(|s| {
            let (h, _) = parse_label(&s.label).unwrap();
            (5..12).contains(&h)
        }));
        assert!(grouped.afternoon.iter().all(|s| {
            let (h, _) = parse_label(&s.label).unwrap();
            (12..17).contains(&h)
        }));
        assert!(grouped.evening.iter().all(|s| {
            let (h, _) = parse_label(&s.label).unwrap();
            h >= 17
        }));

        // noon sits in the afternoon, 11:30 in the morning, 5 PM in the evening
        assert!(grouped.afternoon.iter().any(|s| s.label == "12:00 PM"));
        assert!(grouped.morning.iter().any(|s| s.label == "11:30 AM"));
        assert!(grouped.evening.iter().any(|s| s.label == "5:00 PM"));
    }

    #[test]
    fn test_midnight_groups_as_evening() {
        let slots = generate(date("2025-06-20"), 0, 1, 30, &[], dt("2025-06-01 00:00"));
        assert_eq!(slots[0].label, "12:00 AM");
        let grouped = group(slots);
        assert_eq!(grouped.evening.len(), 2);
        assert!(grouped.morning.is_empty());
    }
}
