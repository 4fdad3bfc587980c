//! Ranking threshold at the table sizes around the ranking boundary

use meteor_game::score_sheet::{MemoryScoreSheet, RankingThreshold, ScoreRow, ScoreSheet};

/// `size` rows scoring `size*100, ..., 200, 100`
fn table(size: usize) -> Vec<ScoreRow> {
    (0..size)
        .map(|i| (format!("P{i}"), ((size - i) * 100).to_string()))
        .collect()
}

fn threshold(size: usize) -> RankingThreshold {
    let sheet = MemoryScoreSheet::new(table(size));
    RankingThreshold::from_rows(&sheet.rows().unwrap()).unwrap()
}

#[test]
fn test_empty_table_has_no_threshold() {
    let threshold = threshold(0);
    assert_eq!(threshold, RankingThreshold::Unavailable { index: None, total: 0 });
    assert!(threshold.admits(0));
}

#[test]
fn test_single_row_table_uses_that_row() {
    let threshold = threshold(1);
    assert_eq!(threshold, RankingThreshold::Score(100));
    assert!(!threshold.admits(100));
    assert!(threshold.admits(101));
}

#[test]
fn test_nine_rows_use_the_last_row() {
    let threshold = threshold(9);
    assert_eq!(threshold, RankingThreshold::Score(100));
    assert!(!threshold.admits(99));
}

#[test]
fn test_ten_rows_point_past_the_end() {
    let threshold = threshold(10);
    assert_eq!(threshold, RankingThreshold::Unavailable { index: Some(10), total: 10 });
    assert!(threshold.admits(1));
}

#[test]
fn test_eleven_rows_use_the_eleventh_row() {
    let threshold = threshold(11);
    assert_eq!(threshold, RankingThreshold::Score(100));
    assert!(threshold.admits(101));
    assert!(!threshold.admits(100));
}

#[test]
fn test_full_ten_row_table_admits_a_zero_point_run() {
    let sheet = MemoryScoreSheet::from_scores((0..10_u32).map(|i| ("P", 1000 - i * 10)));
    let threshold = RankingThreshold::from_rows(&sheet.rows().unwrap()).unwrap();
    assert!(matches!(threshold, RankingThreshold::Unavailable { index: Some(10), total: 10 }));
    assert!(threshold.admits(0));
}
