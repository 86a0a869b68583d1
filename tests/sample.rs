use chrono::{DateTime, Duration, Utc};
use placetrace::sample::sample_by_interval;
use placetrace::types::track::TrackPoint;

fn point_at(seconds: i64) -> TrackPoint {
    TrackPoint {
        latitude: 35.0,
        longitude: 139.0,
        time: DateTime::<Utc>::from_timestamp(seconds, 0).unwrap(),
    }
}

fn seconds(points: &[TrackPoint]) -> Vec<i64> {
    points.iter().map(|point| point.time.timestamp()).collect()
}

#[test]
fn empty_input_yields_empty_output() {
    let sampled = sample_by_interval(&[], Duration::minutes(5));
    assert!(sampled.is_empty());
}

#[test]
fn first_point_is_always_kept() {
    let points = vec![point_at(0), point_at(10), point_at(20)];
    let sampled = sample_by_interval(&points, Duration::minutes(5));
    assert_eq!(seconds(&sampled), vec![0]);
}

#[test]
fn keeps_points_once_the_accumulated_gap_reaches_the_interval() {
    // Gaps of 100 and 300 seconds: the second point stays below the
    // 300 second threshold, the third crosses it.
    let points = vec![point_at(0), point_at(100), point_at(400)];
    let sampled = sample_by_interval(&points, Duration::minutes(5));
    assert_eq!(seconds(&sampled), vec![0, 400]);
}

#[test]
fn accumulates_small_gaps_until_the_threshold() {
    let points = vec![point_at(0), point_at(290), point_at(310), point_at(620)];
    let sampled = sample_by_interval(&points, Duration::minutes(5));
    assert_eq!(seconds(&sampled), vec![0, 310, 620]);
}

#[test]
fn retained_points_are_spaced_by_at_least_the_interval() {
    let points: Vec<TrackPoint> = (0..=30).map(|i| point_at(i * 60)).collect();
    let interval = Duration::minutes(5);
    let sampled = sample_by_interval(&points, interval);

    assert_eq!(sampled.len(), 7);
    assert!(sampled
        .windows(2)
        .all(|pair| pair[1].time - pair[0].time >= interval));
}

#[test]
fn last_point_is_not_duplicated_when_already_retained() {
    // The scan itself retains the final point, so the trailing check must
    // not append it a second time.
    let points = vec![point_at(0), point_at(100), point_at(400)];
    let sampled = sample_by_interval(&points, Duration::minutes(5));
    assert_eq!(sampled.len(), 2);
}

#[test]
fn trailing_points_inside_the_interval_are_dropped() {
    let points = vec![point_at(0), point_at(400), point_at(500)];
    let sampled = sample_by_interval(&points, Duration::minutes(5));
    assert_eq!(seconds(&sampled), vec![0, 400]);
}
