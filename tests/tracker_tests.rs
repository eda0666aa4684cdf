use dogcare::core::streak::{MS_PER_DAY, days_between};
use dogcare::store::keys;
use dogcare::{KeyValueStore, MemoryStore, Tracker};

const T0: i64 = 1_700_000_000_000;

fn empty_tracker() -> Tracker<MemoryStore> {
    Tracker::new(MemoryStore::new())
}

#[test]
fn test_no_data_reads_as_defaults() {
    let tracker = empty_tracker();

    assert_eq!(tracker.last_water().unwrap(), None);
    assert_eq!(tracker.last_incident().unwrap(), None);
    assert!(tracker.water_history().unwrap().is_empty());
    assert_eq!(tracker.high_score().unwrap(), 0);
    assert_eq!(tracker.current_streak_days(T0).unwrap(), None);
}

#[test]
fn test_record_water_prepends_to_history() {
    let mut tracker = empty_tracker();

    tracker.record_water(100).unwrap();
    tracker.record_water(200).unwrap();
    let before = tracker.water_history().unwrap();
    assert_eq!(before, vec![200, 100]);

    tracker.record_water(300).unwrap();
    let after = tracker.water_history().unwrap();

    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after[0], 300);
    assert_eq!(&after[1..], before.as_slice());
    assert_eq!(tracker.last_water().unwrap(), Some(300));
}

#[test]
fn test_record_water_never_deduplicates() {
    let mut tracker = empty_tracker();

    tracker.record_water(T0).unwrap();
    tracker.record_water(T0).unwrap();

    assert_eq!(tracker.water_history().unwrap(), vec![T0, T0]);
}

#[test]
fn test_persisted_values_use_the_documented_format() {
    let mut tracker = empty_tracker();

    tracker.record_water(100).unwrap();
    tracker.record_water(200).unwrap();
    tracker.record_incident(150).unwrap();
    tracker.refresh_high_score(4).unwrap();

    let store = tracker.store();
    assert_eq!(store.get(keys::LAST_WATER).unwrap().as_deref(), Some("200"));
    assert_eq!(store.get(keys::WATER_HISTORY).unwrap().as_deref(), Some("[200,100]"));
    assert_eq!(store.get(keys::LAST_INCIDENT).unwrap().as_deref(), Some("150"));
    assert_eq!(store.get(keys::HIGH_SCORE).unwrap().as_deref(), Some("4"));
}

#[test]
fn test_record_incident_overwrites_previous() {
    let mut tracker = empty_tracker();

    tracker.record_incident(T0).unwrap();
    tracker.record_incident(T0 + 5 * MS_PER_DAY).unwrap();

    assert_eq!(tracker.last_incident().unwrap(), Some(T0 + 5 * MS_PER_DAY));
    assert_eq!(tracker.current_streak_days(T0 + 5 * MS_PER_DAY).unwrap(), Some(0));
}

#[test]
fn test_streak_is_zero_within_first_day() {
    let mut tracker = empty_tracker();
    tracker.record_incident(T0).unwrap();

    for now in [T0, T0 + 1, T0 + MS_PER_DAY / 2, T0 + MS_PER_DAY - 1] {
        assert_eq!(tracker.current_streak_days(now).unwrap(), Some(0), "now = {now}");
    }
    assert_eq!(tracker.current_streak_days(T0 + MS_PER_DAY).unwrap(), Some(1));
}

#[test]
fn test_streak_truncates_partial_days() {
    let mut tracker = empty_tracker();
    tracker.record_incident(T0).unwrap();

    let now = T0 + 2 * MS_PER_DAY + 1000;
    assert_eq!(tracker.current_streak_days(now).unwrap(), Some(2));
}

#[test]
fn test_streak_matches_floor_of_delta() {
    let mut tracker = empty_tracker();
    tracker.record_incident(T0).unwrap();

    for delta in [0, 999, MS_PER_DAY, 3 * MS_PER_DAY + 7, 400 * MS_PER_DAY - 1] {
        let expected = delta / MS_PER_DAY;
        assert_eq!(tracker.current_streak_days(T0 + delta).unwrap(), Some(expected));
    }
}

#[test]
fn test_future_incident_clamps_to_zero() {
    assert_eq!(days_between(T0 + 3 * MS_PER_DAY, T0), 0);

    let mut tracker = empty_tracker();
    tracker.record_incident(T0 + 3 * MS_PER_DAY).unwrap();
    assert_eq!(tracker.current_streak_days(T0).unwrap(), Some(0));
}

#[test]
fn test_extreme_stored_incident_does_not_overflow() {
    assert_eq!(days_between(i64::MIN, i64::MAX), i64::MAX / MS_PER_DAY);
    assert_eq!(days_between(i64::MAX, i64::MIN), 0);

    let tracker = Tracker::new(MemoryStore::from_pairs([(
        keys::LAST_INCIDENT,
        "-9223372036854775808",
    )]));
    assert_eq!(
        tracker.current_streak_days(T0).unwrap(),
        Some(i64::MAX / MS_PER_DAY)
    );

    let tracker = Tracker::new(MemoryStore::from_pairs([(
        keys::LAST_INCIDENT,
        "9223372036854775807",
    )]));
    assert_eq!(tracker.current_streak_days(T0).unwrap(), Some(0));
}

#[test]
fn test_refresh_high_score_only_raises() {
    let mut tracker = empty_tracker();

    let mut last = 0;
    for streak in [3, 1, 7, 7, 0, 2, 9, 4] {
        let best = tracker.refresh_high_score(streak).unwrap();
        assert!(best >= last, "high score went down: {last} -> {best}");
        assert_eq!(best, last.max(streak));
        last = best;
    }
    assert_eq!(tracker.high_score().unwrap(), 9);
}

#[test]
fn test_refresh_high_score_is_idempotent() {
    let mut tracker = empty_tracker();

    assert_eq!(tracker.refresh_high_score(5).unwrap(), 5);
    let snapshot = tracker.snapshot().unwrap();
    assert_eq!(tracker.refresh_high_score(5).unwrap(), 5);
    assert_eq!(tracker.snapshot().unwrap(), snapshot);
}

#[test]
fn test_equal_streak_does_not_write() {
    let mut tracker = Tracker::new(MemoryStore::from_pairs([(keys::HIGH_SCORE, "05")]));

    assert_eq!(tracker.refresh_high_score(5).unwrap(), 5);
    // the raw value is untouched because 5 > 5 is false
    assert_eq!(tracker.store().get(keys::HIGH_SCORE).unwrap().as_deref(), Some("05"));
}

#[test]
fn test_malformed_values_read_as_defaults() {
    let store = MemoryStore::from_pairs([
        (keys::LAST_WATER, "yesterday"),
        (keys::LAST_INCIDENT, ""),
        (keys::WATER_HISTORY, "{\"not\":\"an array\"}"),
        (keys::HIGH_SCORE, "lots"),
    ]);
    let mut tracker = Tracker::new(store);

    assert_eq!(tracker.last_water().unwrap(), None);
    assert_eq!(tracker.last_incident().unwrap(), None);
    assert!(tracker.water_history().unwrap().is_empty());
    assert_eq!(tracker.high_score().unwrap(), 0);

    // a broken history is replaced, not appended to
    tracker.record_water(T0).unwrap();
    assert_eq!(tracker.water_history().unwrap(), vec![T0]);
}

#[test]
fn test_refresh_without_incident_leaves_high_score_alone() {
    let mut tracker = empty_tracker();
    tracker.record_water(T0).unwrap();

    let model = tracker.refresh(T0 + 10 * MS_PER_DAY).unwrap();

    assert_eq!(model.streak_days, None);
    assert_eq!(model.streak_text(), "none");
    assert_eq!(model.high_score, 0);
    assert_eq!(tracker.store().get(keys::HIGH_SCORE).unwrap(), None);
}

#[test]
fn test_refresh_updates_high_score_as_time_passes() {
    let mut tracker = empty_tracker();
    tracker.record_incident(T0).unwrap();

    let model = tracker.refresh(T0 + 3 * MS_PER_DAY + 10).unwrap();
    assert_eq!(model.streak_days, Some(3));
    assert_eq!(model.high_score, 3);

    tracker.record_incident(T0 + 4 * MS_PER_DAY).unwrap();
    let model = tracker.refresh(T0 + 5 * MS_PER_DAY).unwrap();
    assert_eq!(model.streak_days, Some(1));
    assert_eq!(model.high_score, 3);
    assert_eq!(model.streak_text(), "1 day");
    assert_eq!(model.high_score_text(), "3 days");
}

#[test]
fn test_display_texts_for_empty_store() {
    let mut tracker = empty_tracker();
    let model = tracker.refresh(T0).unwrap();

    assert_eq!(model.last_water_text("%Y"), "No record yet");
    assert_eq!(model.streak_text(), "none");
    assert_eq!(model.high_score_text(), "0 days");
    assert!(model.history_texts("%Y").is_empty());
}

#[test]
fn test_tracker_works_through_a_borrowed_store() {
    let mut store = MemoryStore::new();
    {
        let mut tracker = Tracker::new(&mut store);
        tracker.record_water(T0).unwrap();
    }
    assert_eq!(store.len(), 2);
}
