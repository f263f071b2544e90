use super::*;

#[test]
fn starts_waiting_and_auto_wires_once() {
    let state = Lifecycle::default();
    assert_eq!(state, Lifecycle::Waiting);
    assert!(state.may_auto_wire());

    let state = state.wired();
    assert!(!state.may_auto_wire());
}

#[test]
fn explicit_init_before_ready_blocks_auto_wire() {
    let state = Lifecycle::Waiting.wired();
    assert!(!state.may_auto_wire(), "ready hook would replace the caller's page");
}

#[test]
fn dispose_blocks_auto_wire_even_before_ready() {
    assert!(!Lifecycle::Waiting.disposed().may_auto_wire());
    assert!(!Lifecycle::Active.disposed().may_auto_wire());
}

#[test]
fn validation_never_wires_a_page() {
    assert_eq!(Lifecycle::Waiting.validation_route(), ValidationRoute::Detached);
    assert_eq!(Lifecycle::Disposed.validation_route(), ValidationRoute::Detached);
    assert_eq!(Lifecycle::Active.validation_route(), ValidationRoute::Page);
}

#[test]
fn reinit_after_dispose_is_active_again() {
    let state = Lifecycle::Active.disposed().wired();
    assert_eq!(state, Lifecycle::Active);
    assert_eq!(state.validation_route(), ValidationRoute::Page);
}
