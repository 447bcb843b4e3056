use crate::error::TransformError;
use crate::transforms::{SizeScheduler, SizeStepScheduler};

#[test]
fn test_size_step_scheduler_progression() {
    let scheduler =
        SizeStepScheduler::new(vec![10, 20], vec![vec![8, 8], vec![16, 16], vec![32, 32]])
            .unwrap();

    assert_eq!(scheduler.size_for_step(0), vec![8, 8]);
    assert_eq!(scheduler.size_for_step(9), vec![8, 8]);
    assert_eq!(scheduler.size_for_step(10), vec![16, 16]);
    assert_eq!(scheduler.size_for_step(19), vec![16, 16]);
    assert_eq!(scheduler.size_for_step(20), vec![32, 32]);
    assert_eq!(scheduler.size_for_step(1000), vec![32, 32]);
}

#[test]
fn test_size_step_scheduler_accepts_unsorted_milestones() {
    let scheduler =
        SizeStepScheduler::new(vec![20, 10], vec![vec![8], vec![32], vec![16]]).unwrap();

    assert_eq!(scheduler.size_for_step(0), vec![8]);
    assert_eq!(scheduler.size_for_step(15), vec![16]);
    assert_eq!(scheduler.size_for_step(25), vec![32]);
}

#[test]
fn test_size_step_scheduler_rejects_arity_mismatch() {
    assert!(matches!(
        SizeStepScheduler::new(vec![10], vec![vec![8]]),
        Err(TransformError::InputValidationError(_))
    ));
    assert!(matches!(
        SizeStepScheduler::new(vec![], vec![vec![8], vec![16]]),
        Err(TransformError::InputValidationError(_))
    ));
}

#[test]
fn test_size_step_scheduler_rejects_bad_sizes() {
    assert!(matches!(
        SizeStepScheduler::new(vec![10], vec![vec![8], vec![]]),
        Err(TransformError::InputValidationError(_))
    ));
    assert!(matches!(
        SizeStepScheduler::new(vec![10], vec![vec![0], vec![8]]),
        Err(TransformError::InputValidationError(_))
    ));
}

#[test]
fn test_size_step_scheduler_len() {
    let scheduler = SizeStepScheduler::new(vec![5], vec![vec![4], vec![8]]).unwrap();
    assert_eq!(scheduler.len(), 2);
    assert!(!scheduler.is_empty());
}

#[test]
fn test_closure_scheduler() {
    let scheduler = |step: usize| vec![if step < 5 { 4 } else { 8 }];
    assert_eq!(scheduler.size_for_step(0), vec![4]);
    assert_eq!(scheduler.size_for_step(5), vec![8]);
}
