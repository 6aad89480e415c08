//! Terminal event polling for the TUI

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;
use tokio::time::interval;

/// How long a single blocking poll waits for terminal input
const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Application events
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Key press
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Periodic tick driving the download spinner
    Tick,
}

/// Forwards terminal input and ticks to the app loop
pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
    _task: tokio::task::JoinHandle<()>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel(100);

        let task = tokio::spawn(async move {
            let mut tick_interval = interval(tick_rate);

            loop {
                tokio::select! {
                    _ = tick_interval.tick() => {
                        if tx.send(AppEvent::Tick).await.is_err() {
                            break;
                        }
                    }
                    result = tokio::task::spawn_blocking(|| {
                        event::poll(POLL_TIMEOUT).unwrap_or(false)
                    }) => {
                        if !result.unwrap_or(false) {
                            continue;
                        }
                        let Some(app_event) = event::read().ok().and_then(translate) else {
                            continue;
                        };
                        if tx.send(app_event).await.is_err() {
                            break;
                        }
                    }
                }
            }
        });

        Self { rx, _task: task }
    }

    /// Get the next event
    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}

/// Map a crossterm event to an app event. Key releases and repeats are
/// dropped so typed text is not doubled on terminals that report them.
fn translate(evt: CrosstermEvent) -> Option<AppEvent> {
    match evt {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
        CrosstermEvent::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        _ => None,
    }
}

/// q or Ctrl-C
pub fn is_quit_key(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            ..
        } | KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
    )
}

/// Esc or Backspace
pub fn is_back_key(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Esc,
            ..
        } | KeyEvent {
            code: KeyCode::Backspace,
            modifiers: KeyModifiers::NONE,
            ..
        }
    )
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;

    use super::*;

    #[test]
    fn test_quit_and_back_keys() {
        assert!(is_quit_key(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_quit_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_quit_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));

        assert!(is_back_key(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_back_key(&KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)));
        assert!(!is_back_key(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
    }

    #[test]
    fn test_translate_drops_key_release() {
        let release = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(translate(CrosstermEvent::Key(release)).is_none());

        let press = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert!(matches!(
            translate(CrosstermEvent::Key(press)),
            Some(AppEvent::Key(_))
        ));
        assert!(matches!(
            translate(CrosstermEvent::Resize(80, 24)),
            Some(AppEvent::Resize(80, 24))
        ));
        assert!(translate(CrosstermEvent::FocusGained).is_none());
    }
}
