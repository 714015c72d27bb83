use super::*;

#[test]
fn begin_supersedes_previous_owner() {
    let mut mutex = MutatorMutex::new();
    let first = mutex.begin();
    let second = mutex.begin();
    assert!(!mutex.is_current(first));
    assert!(mutex.is_current(second));
    assert_eq!(
        mutex.finish(first),
        Err(MutationError::Superseded {
            id: first,
            by: Some(second)
        })
    );
    assert_eq!(mutex.finish(second), Ok(()));
    assert!(!mutex.is_current(second));
}

#[test]
fn finished_mutation_cannot_finish_twice() {
    let mut mutex = MutatorMutex::new();
    let id = mutex.begin();
    assert_eq!(mutex.finish(id), Ok(()));
    assert_eq!(
        mutex.finish(id),
        Err(MutationError::Superseded { id, by: None })
    );
}

#[test]
fn immediate_mutation_invalidates_long_running_one() {
    let mut mutex = MutatorMutex::new();
    let settle = mutex.begin();
    let snap = mutex.begin();
    assert_eq!(mutex.finish(snap), Ok(()));
    assert!(!mutex.is_current(settle));
    let err = mutex.finish(settle).expect_err("settle was superseded");
    assert!(err.to_string().contains("no longer active"));
}
