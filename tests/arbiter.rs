use pointbrowse::GestureArbiter;

#[test]
fn first_owner_wins_and_second_is_rejected() {
    let arbiter = GestureArbiter::new();
    let a = arbiter.register();
    let b = arbiter.register();
    assert_ne!(a, b);

    assert!(arbiter.try_acquire(a));
    assert!(!arbiter.try_acquire(b));
    assert_eq!(arbiter.owner(), Some(a));
}

#[test]
fn reacquire_by_holder_succeeds() {
    let arbiter = GestureArbiter::new();
    let a = arbiter.register();
    assert!(arbiter.try_acquire(a));
    assert!(arbiter.try_acquire(a));
    assert!(arbiter.is_held_by(a));
}

#[test]
fn release_by_non_owner_is_noop() {
    let arbiter = GestureArbiter::new();
    let a = arbiter.register();
    let b = arbiter.register();
    arbiter.try_acquire(a);
    assert!(!arbiter.release(b));
    assert!(arbiter.is_held_by(a));
    assert!(arbiter.release(a));
    assert!(!arbiter.is_locked());
}

#[test]
fn clones_share_the_lock() {
    let arbiter = GestureArbiter::new();
    let other = arbiter.clone();
    let a = arbiter.register();
    let b = other.register();
    assert_ne!(a, b);
    assert!(other.try_acquire(b));
    assert!(arbiter.is_locked());
    assert!(!arbiter.is_available_to(a));
    assert!(arbiter.is_available_to(b));
}
