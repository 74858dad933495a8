use super::*;
use crate::controller::form::{FormController, NameCheckTicket};
use crossbeam_channel::bounded;
use directory_client::{DirectoryError, MockDirectory};
use std::sync::Arc;

const DEBOUNCE: Duration = Duration::from_millis(500);

fn worker_with(mock: Arc<MockDirectory>) -> (Worker, Receiver<UiEvent>) {
    let (ui_tx, ui_rx) = bounded(64);
    let worker = Worker::new(Directory::from_shared(mock), ui_tx, DEBOUNCE);
    (worker, ui_rx)
}

fn schedule(worker: &mut Worker, ticket: u64, name: &str) {
    let flow = worker.handle(BackendCommand::ScheduleNameCheck {
        ticket: NameCheckTicket(ticket),
        name: name.to_string(),
    });
    assert!(flow.is_continue());
}

async fn settle(duration: Duration) {
    tokio::time::sleep(duration).await;
    tokio::task::yield_now().await;
}

#[tokio::test(start_paused = true)]
async fn rapid_keystrokes_issue_one_check_for_the_final_value() {
    let mock = Arc::new(MockDirectory::new().with_latency(Duration::ZERO));
    let (mut worker, ui_rx) = worker_with(mock.clone());

    for (ticket, name) in ["A", "Al", "Ali", "Alic", "Alice"].iter().enumerate() {
        schedule(&mut worker, ticket as u64 + 1, name);
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    settle(DEBOUNCE).await;

    assert_eq!(mock.checked_names().await, vec!["Alice".to_string()]);
    match ui_rx.try_recv() {
        Ok(UiEvent::NameChecked { ticket, outcome }) => {
            assert_eq!(ticket, NameCheckTicket(5));
            assert_eq!(outcome, Ok(true));
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert!(ui_rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn no_check_before_the_window_elapses() {
    let mock = Arc::new(MockDirectory::new().with_latency(Duration::ZERO));
    let (mut worker, ui_rx) = worker_with(mock.clone());

    schedule(&mut worker, 1, "Bob");
    tokio::time::sleep(Duration::from_millis(450)).await;
    assert!(mock.checked_names().await.is_empty());
    assert!(ui_rx.try_recv().is_err());

    settle(Duration::from_millis(100)).await;
    assert_eq!(mock.checked_names().await, vec!["Bob".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn new_keystroke_aborts_an_in_flight_check() {
    let mock = Arc::new(MockDirectory::new().with_latency(Duration::from_millis(300)));
    let (mut worker, ui_rx) = worker_with(mock.clone());

    schedule(&mut worker, 1, "Bo");
    // the first check is now in flight inside the mock's latency
    tokio::time::sleep(Duration::from_millis(600)).await;
    schedule(&mut worker, 2, "Bob");
    settle(Duration::from_millis(900)).await;

    assert_eq!(
        mock.checked_names().await,
        vec!["Bo".to_string(), "Bob".to_string()]
    );
    let events: Vec<_> = ui_rx.try_iter().collect();
    assert_eq!(events.len(), 1);
    assert!(matches!(
        events[0],
        UiEvent::NameChecked {
            ticket: NameCheckTicket(2),
            ..
        }
    ));
}

#[tokio::test(start_paused = true)]
async fn failed_check_is_still_reported() {
    let mock = Arc::new(
        MockDirectory::new()
            .with_latency(Duration::ZERO)
            .failing_name_checks("directory down"),
    );
    let (mut worker, ui_rx) = worker_with(mock);

    schedule(&mut worker, 7, "Alice");
    settle(DEBOUNCE + Duration::from_millis(10)).await;

    match ui_rx.try_recv() {
        Ok(UiEvent::NameChecked { ticket, outcome }) => {
            assert_eq!(ticket, NameCheckTicket(7));
            assert_eq!(
                outcome,
                Err(DirectoryError::NameCheckFailed("directory down".into()))
            );
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn loads_locations_on_request() {
    let mock = Arc::new(
        MockDirectory::new()
            .with_latency(Duration::from_millis(50))
            .with_locations(["NYC", "LA"]),
    );
    let (mut worker, ui_rx) = worker_with(mock.clone());

    assert!(worker.handle(BackendCommand::LoadLocations).is_continue());
    settle(Duration::from_millis(60)).await;

    match ui_rx.try_recv() {
        Ok(UiEvent::LocationsLoaded(Ok(locations))) => {
            assert_eq!(locations, vec!["NYC".to_string(), "LA".to_string()]);
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert_eq!(mock.location_calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn location_failure_is_reported_not_raised() {
    let mock = Arc::new(
        MockDirectory::new()
            .with_latency(Duration::ZERO)
            .failing_locations("boom"),
    );
    let (mut worker, ui_rx) = worker_with(mock);

    assert!(worker.handle(BackendCommand::LoadLocations).is_continue());
    settle(Duration::from_millis(10)).await;

    assert!(matches!(
        ui_rx.try_recv(),
        Ok(UiEvent::LocationsLoaded(Err(
            DirectoryError::LocationFetchFailed(_)
        )))
    ));
}

#[tokio::test(start_paused = true)]
async fn shutdown_cancels_the_pending_check() {
    let mock = Arc::new(MockDirectory::new().with_latency(Duration::ZERO));
    let (mut worker, ui_rx) = worker_with(mock.clone());

    schedule(&mut worker, 1, "Alice");
    assert!(worker.handle(BackendCommand::Shutdown).is_break());
    worker.stop();
    settle(Duration::from_secs(2)).await;

    assert!(mock.checked_names().await.is_empty());
    assert!(ui_rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn results_after_ui_teardown_are_dropped_quietly() {
    let mock = Arc::new(MockDirectory::new().with_latency(Duration::ZERO));
    let (mut worker, ui_rx) = worker_with(mock.clone());

    schedule(&mut worker, 1, "Alice");
    drop(ui_rx);
    settle(DEBOUNCE + Duration::from_millis(10)).await;

    assert_eq!(mock.checked_names().await, vec!["Alice".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn controller_and_worker_agree_end_to_end() {
    let mock = Arc::new(
        MockDirectory::new()
            .with_latency(Duration::from_millis(20))
            .with_locations(["NYC"])
            .with_taken_names(["Bob"]),
    );
    let (mut worker, ui_rx) = worker_with(mock.clone());
    let mut form = FormController::new();

    let pump = |form: &mut FormController| {
        for event in ui_rx.try_iter() {
            match event {
                UiEvent::LocationsLoaded(outcome) => form.on_locations_loaded(outcome),
                UiEvent::NameChecked { ticket, outcome } => {
                    form.on_name_checked(ticket, outcome);
                }
                UiEvent::Info(_) | UiEvent::Error(_) => {}
            }
        }
    };

    assert!(worker.handle(form.mount().expect("mount")).is_continue());
    for name in ["B", "Bo", "Bob"] {
        assert!(worker
            .handle(form.set_name(name).expect("schedule"))
            .is_continue());
    }
    settle(DEBOUNCE + Duration::from_millis(50)).await;
    pump(&mut form);

    assert_eq!(form.locations(), &["NYC".to_string()]);
    assert!(form.state().name_error);
    form.set_location("NYC");
    assert_eq!(form.add(), None);

    assert!(worker
        .handle(form.set_name("Bobby").expect("schedule"))
        .is_continue());
    settle(DEBOUNCE + Duration::from_millis(50)).await;
    pump(&mut form);

    assert!(!form.state().name_error);
    assert!(!form.state().is_checking_name);
    let entry = form.add().expect("added");
    assert_eq!(entry.name, "Bobby");
    assert_eq!(entry.location, "NYC");
    assert_eq!(
        mock.checked_names().await,
        vec!["Bob".to_string(), "Bobby".to_string()]
    );
}
