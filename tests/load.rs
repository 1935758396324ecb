use globevis_rs::app::LoadState;

#[test]
fn load_resolves_exactly_once() {
    let mut state = LoadState::Loading;
    assert!(state.is_loading());
    assert!(!state.is_ready());
    assert!(!state.is_failed());

    assert!(state.resolve_ok());
    assert!(state.is_ready());

    // Results arriving after the resolution are dropped.
    assert!(!state.resolve_err("late failure".into()));
    assert!(state.is_ready());
    assert!(!state.resolve_ok());
    assert_eq!(state, LoadState::Ready);
}

#[test]
fn failure_is_terminal() {
    let mut state = LoadState::Loading;
    assert!(state.resolve_err("no route to host".into()));
    assert!(state.is_failed());

    assert!(!state.resolve_ok());
    assert!(state.is_failed());
    assert!(!state.resolve_err("second failure".into()));
    assert_eq!(state, LoadState::Failed("no route to host".into()));
}
