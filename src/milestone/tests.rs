//! Tests for the milestone module.

use super::*;
use approx::assert_abs_diff_eq;

fn uniform_thousand_schedule() -> MilestoneSchedule {
    // Uniform $1000 targets so scenario numbers stay easy to read.
    MilestoneSchedule::new(vec![
        MilestoneTier { level: 1, target_business: 1_000.0, reward: 10.0 },
        MilestoneTier { level: 2, target_business: 1_000.0, reward: 10.0 },
        MilestoneTier { level: 3, target_business: 1_000.0, reward: 10.0 },
        MilestoneTier { level: 4, target_business: 1_000.0, reward: 10.0 },
        MilestoneTier { level: 5, target_business: 1_000.0, reward: 10.0 },
    ])
    .unwrap()
}

#[test]
fn test_default_schedule_table() {
    let schedule = MilestoneSchedule::default();
    assert_eq!(schedule.tiers().len(), 5);

    let first = schedule.for_level(1).unwrap();
    assert_abs_diff_eq!(first.target_business, 1_000.0);
    assert_abs_diff_eq!(first.reward, 10.0);

    let last = schedule.for_level(5).unwrap();
    assert_abs_diff_eq!(last.target_business, 40_000.0);
    assert_abs_diff_eq!(last.reward, 20.0);

    assert!(schedule.for_level(6).is_none());
}

#[test]
fn test_schedule_rejects_wrong_arity() {
    let err = MilestoneSchedule::new(vec![MilestoneTier {
        level: 1,
        target_business: 1_000.0,
        reward: 10.0,
    }])
    .unwrap_err();
    assert!(matches!(err, ScheduleError::WrongArity { expected: 5, actual: 1 }));
}

#[test]
fn test_schedule_rejects_zero_target() {
    let mut tiers: Vec<MilestoneTier> = MilestoneSchedule::default().tiers().to_vec();
    tiers[2].target_business = 0.0;
    let err = MilestoneSchedule::new(tiers).unwrap_err();
    assert!(matches!(err, ScheduleError::NonPositiveTarget { level: 3, .. }));
}

#[test]
fn test_schedule_rejects_out_of_order_levels() {
    let mut tiers: Vec<MilestoneTier> = MilestoneSchedule::default().tiers().to_vec();
    tiers.swap(1, 2);
    let err = MilestoneSchedule::new(tiers).unwrap_err();
    assert!(matches!(err, ScheduleError::OutOfOrder { found: 3, position: 1 }));
}

#[test]
fn test_schedule_rejects_negative_reward() {
    let mut tiers: Vec<MilestoneTier> = MilestoneSchedule::default().tiers().to_vec();
    tiers[4].reward = -1.0;
    let err = MilestoneSchedule::new(tiers).unwrap_err();
    assert!(matches!(err, ScheduleError::NegativeReward { level: 5, .. }));
}

#[test]
fn test_schedule_yaml_round_trip() {
    let yaml = "\
- { level: 1, target_business: 1000.0, reward: 10.0 }
- { level: 2, target_business: 10000.0, reward: 20.0 }
- { level: 3, target_business: 20000.0, reward: 20.0 }
- { level: 4, target_business: 30000.0, reward: 20.0 }
- { level: 5, target_business: 40000.0, reward: 20.0 }
";
    let schedule = MilestoneSchedule::from_yaml_str(yaml).unwrap();
    assert_eq!(schedule, MilestoneSchedule::default());
}

#[test]
fn test_schedule_yaml_rejects_invalid_table() {
    let yaml = "- { level: 1, target_business: -5.0, reward: 10.0 }";
    assert!(MilestoneSchedule::from_yaml_str(yaml).is_err());
}

#[test]
fn test_progress_halfway() {
    let schedule = uniform_thousand_schedule();
    let mut deposits = LevelDeposits::new();
    deposits.set(1, 500.0);

    let progress = compute_progress(&deposits, &schedule);
    assert_abs_diff_eq!(progress[0].raw_percent, 50.0);
    assert_abs_diff_eq!(progress[0].display_percent(), 50.0);
    assert!(!progress[0].achieved());
    assert_abs_diff_eq!(progress[0].remaining(), 500.0);
}

#[test]
fn test_progress_overshoot_keeps_raw_clamps_display() {
    let schedule = uniform_thousand_schedule();
    let mut deposits = LevelDeposits::new();
    deposits.set(1, 1_200.0);

    let progress = compute_progress(&deposits, &schedule);
    assert_abs_diff_eq!(progress[0].raw_percent, 120.0);
    assert_abs_diff_eq!(progress[0].display_percent(), 100.0);
    assert!(progress[0].achieved());
    assert_abs_diff_eq!(progress[0].remaining(), 0.0);
}

#[test]
fn test_progress_missing_level_defaults_to_zero() {
    let schedule = MilestoneSchedule::default();
    let deposits = LevelDeposits::new();

    let progress = compute_progress(&deposits, &schedule);
    assert_eq!(progress.len(), 5);
    for entry in &progress {
        assert_abs_diff_eq!(entry.current_business, 0.0);
        assert_abs_diff_eq!(entry.raw_percent, 0.0);
        assert!(!entry.achieved());
    }
}

#[test]
fn test_progress_rounds_to_two_decimals() {
    let schedule = MilestoneSchedule::default();
    let mut deposits = LevelDeposits::new();
    // 333.333... / 1000 * 100 = 33.3333...%
    deposits.set(1, 1_000.0 / 3.0);

    let progress = compute_progress(&deposits, &schedule);
    assert_abs_diff_eq!(progress[0].raw_percent, 33.33);
}

#[test]
fn test_progress_entries_follow_schedule_order() {
    let schedule = MilestoneSchedule::default();
    let deposits = LevelDeposits::from_iter([(3, 100.0)]);

    let progress = compute_progress(&deposits, &schedule);
    let levels: Vec<u32> = progress.iter().map(|p| p.level).collect();
    assert_eq!(levels, vec![1, 2, 3, 4, 5]);
    assert_abs_diff_eq!(progress[2].current_business, 100.0);
}

#[test]
fn test_active_levels_counts_nonzero_business() {
    let schedule = MilestoneSchedule::default();
    let deposits = LevelDeposits::from_iter([(1, 100.0), (2, 0.0), (4, 50.0)]);

    let progress = compute_progress(&deposits, &schedule);
    assert_eq!(active_levels(&progress), 2);
}

#[test]
fn test_active_levels_empty() {
    assert_eq!(active_levels(&[]), 0);
}
