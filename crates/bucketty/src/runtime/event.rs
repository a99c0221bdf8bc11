use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event;
use tokio::sync::mpsc;

use crate::app::App;
use crate::runtime::{EventResult, key_handler};

/// Reads crossterm events on a dedicated thread until `shutdown` is set or
/// the receiving side goes away.
pub(crate) fn spawn_event_reader(event_tx: mpsc::UnboundedSender<Event>, shutdown: Arc<AtomicBool>) {
    std::thread::spawn(move || {
        while !shutdown.load(Ordering::Relaxed) {
            match crossterm::event::poll(Duration::from_millis(250)) {
                Ok(true) => {
                    if let Ok(event) = crossterm::event::read()
                        && event_tx.send(event).is_err()
                    {
                        break;
                    }
                }
                Ok(false) => {}
                Err(_) => break,
            }
        }
    });
}

pub(crate) async fn process_events(
    app: &mut App,
    event_rx: &mut mpsc::UnboundedReceiver<Event>,
    tick: &mut tokio::time::Interval,
) -> EventResult {
    enum LoopSignal {
        AppEvent(Option<crate::app::AppEvent>),
        Event(Option<Event>),
        Tick,
    }

    // Wait for a terminal event, a backend result, or the next tick (for
    // redraws). Waiting here yields to tokio so spawned requests can make
    // progress on this worker thread.
    let signal = tokio::select! {
        biased;
        event = event_rx.recv() => LoopSignal::Event(event),
        app_event = app.next_app_event() => LoopSignal::AppEvent(app_event),
        _ = tick.tick() => LoopSignal::Tick,
    };
    let maybe_event = match signal {
        LoopSignal::Event(event) => event,
        LoopSignal::AppEvent(app_event) => {
            if let Some(app_event) = app_event {
                app.apply_app_events(app_event);
            }
            None
        }
        LoopSignal::Tick => {
            app.on_tick();
            None
        }
    };

    if matches!(process_event(app, maybe_event), EventResult::Quit) {
        return EventResult::Quit;
    }

    // Drain remaining queued events before re-rendering so rapid key
    // presses are processed immediately instead of one-per-frame.
    while let Ok(event) = event_rx.try_recv() {
        if matches!(process_event(app, Some(event)), EventResult::Quit) {
            return EventResult::Quit;
        }
    }

    EventResult::Continue
}

fn process_event(app: &mut App, event: Option<Event>) -> EventResult {
    match event {
        Some(Event::Key(key)) => key_handler::handle_key_event(app, key),
        Some(Event::Paste(pasted)) => {
            key_handler::handle_paste_event(app, &pasted);

            EventResult::Continue
        }
        _ => EventResult::Continue,
    }
}
