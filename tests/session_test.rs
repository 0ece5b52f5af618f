//! Tests for session lifecycle: validation, completion notification, teardown.

use scramble::{
    Bounds, Color, GameOutcome, HandleId, Phase, Point, SessionController, SessionEvent, Surface,
    TileMetrics, Timing,
};
use std::time::Duration;

/// Surface that only tracks which elements are alive.
#[derive(Debug, Default)]
struct CountingSurface {
    next_handle: u64,
    alive: Vec<HandleId>,
}

impl CountingSurface {
    fn alive(&self) -> &[HandleId] {
        &self.alive
    }
}

impl Surface for CountingSurface {
    fn create_tile(&mut self, _label: &str, _color: Color) -> HandleId {
        let handle = HandleId::new(self.next_handle);
        self.next_handle += 1;
        self.alive.push(handle);
        handle
    }

    fn set_position(&mut self, _handle: HandleId, _position: Point) {}

    fn set_label(&mut self, _handle: HandleId, _text: &str) {}

    fn remove(&mut self, handle: HandleId) {
        self.alive.retain(|alive| *alive != handle);
    }

    fn bounds(&self) -> Bounds {
        Bounds::new(48, 14)
    }
}

fn controller() -> SessionController<CountingSurface> {
    SessionController::new(
        CountingSurface::default(),
        Timing::fast(),
        TileMetrics::default(),
    )
}

fn handle_of(controller: &SessionController<CountingSurface>, order: usize) -> HandleId {
    controller
        .engine()
        .expect("active engine")
        .tiles()
        .iter()
        .find(|tile| tile.order() == order)
        .expect("tile with order")
        .handle()
}

async fn pump_until_input_open(controller: &mut SessionController<CountingSurface>) {
    loop {
        match controller.next_event().await {
            Some(SessionEvent::InputOpen) => return,
            Some(_) => {}
            None => panic!("session ended before input opened"),
        }
    }
}

#[tokio::test]
async fn invalid_input_creates_no_engine() {
    let mut controller = controller();
    for raw in ["abc", "", "2", "8", "5.5"] {
        assert!(controller.start_session(raw).is_err(), "{raw:?}");
        assert!(controller.engine().is_none());
        assert!(!controller.is_active());
        assert!(controller.surface().alive().is_empty());
    }
    assert_eq!(controller.next_event().await, None);
}

#[tokio::test]
async fn invalid_input_leaves_running_game_untouched() {
    let mut controller = controller();
    controller.start_session("3").expect("valid count");
    assert!(controller.is_active());

    assert!(controller.start_session("9").is_err());
    assert!(controller.is_active());
    assert_eq!(controller.engine().expect("engine").tile_count(), 3);
    assert_eq!(controller.surface().alive().len(), 3);
}

#[tokio::test]
async fn session_runs_to_completion_with_explicit_notification() {
    let mut controller = controller();
    controller.start_session("3").expect("valid count");

    // A click before the input phase opens is swallowed by the engine.
    controller.click(handle_of(&controller, 1));

    assert_eq!(
        controller.next_event().await,
        Some(SessionEvent::ScrambleStarted)
    );
    assert_eq!(controller.next_event().await, Some(SessionEvent::TilesMoved));
    assert_eq!(controller.next_event().await, Some(SessionEvent::TilesMoved));
    assert_eq!(controller.next_event().await, Some(SessionEvent::InputOpen));
    assert!(controller.engine().expect("engine").clicked().is_empty());

    controller.click(handle_of(&controller, 1));
    controller.click(handle_of(&controller, 2));
    assert_eq!(
        controller.next_event().await,
        Some(SessionEvent::TileRevealed)
    );
    assert_eq!(
        controller.next_event().await,
        Some(SessionEvent::TileRevealed)
    );

    controller.click(handle_of(&controller, 3));
    assert_eq!(
        controller.next_event().await,
        Some(SessionEvent::Finished(GameOutcome::Completed))
    );

    // Terminal: the controller goes quiet instead of being polled.
    assert!(!controller.is_active());
    assert_eq!(controller.next_event().await, None);
}

#[tokio::test]
async fn wrong_click_finishes_with_wrong_order() {
    let mut controller = controller();
    controller.start_session("4").expect("valid count");
    pump_until_input_open(&mut controller).await;

    controller.click(handle_of(&controller, 2));
    assert_eq!(
        controller.next_event().await,
        Some(SessionEvent::Finished(GameOutcome::WrongOrder))
    );

    let engine = controller.engine().expect("engine");
    assert_eq!(engine.phase(), Phase::Lost);
    assert!(engine.tiles().iter().all(|tile| tile.revealed()));
    assert!(!controller.is_active());
}

#[tokio::test]
async fn restart_replaces_engine_and_cancels_stale_timers() {
    let mut controller = controller();
    controller.start_session("3").expect("valid count");
    let old_handles: Vec<_> = controller
        .engine()
        .expect("engine")
        .tiles()
        .iter()
        .map(|tile| tile.handle())
        .collect();

    // Replace the session while the first still has its memorize timer pending.
    controller.start_session("4").expect("valid count");
    assert_eq!(controller.engine().expect("engine").tile_count(), 4);
    assert_eq!(controller.surface().alive().len(), 4);
    for handle in old_handles {
        assert!(!controller.surface().alive().contains(&handle));
    }

    // The replacement runs to its end undisturbed by the discarded session.
    pump_until_input_open(&mut controller).await;
    for order in 1..=4 {
        controller.click(handle_of(&controller, order));
    }
    loop {
        match controller.next_event().await {
            Some(SessionEvent::Finished(outcome)) => {
                assert_eq!(outcome, GameOutcome::Completed);
                break;
            }
            Some(SessionEvent::TileRevealed) => {}
            other => panic!("unexpected event {other:?}"),
        }
    }
}

#[tokio::test]
async fn try_next_event_drains_without_blocking() {
    let mut controller = controller();
    assert_eq!(controller.try_next_event(), None);

    controller.start_session("3").expect("valid count");
    // Nothing has been delivered yet.
    assert_eq!(controller.try_next_event(), None);

    // Give the fast timers room to run the whole scramble.
    tokio::time::sleep(Duration::from_millis(300)).await;

    let mut events = Vec::new();
    while let Some(event) = controller.try_next_event() {
        events.push(event);
    }
    assert!(events.contains(&SessionEvent::ScrambleStarted), "{events:?}");
    assert!(events.contains(&SessionEvent::InputOpen), "{events:?}");
    assert_eq!(
        controller.engine().expect("engine").phase(),
        Phase::AwaitingInput
    );
}
