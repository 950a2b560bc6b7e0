use crate::state::{Focus, State};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        if tx_clone.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(e) => error!("Failed to read terminal event: {}", e),
                },
                Ok(false) => {}
                Err(e) => error!("Failed to poll terminal events: {}", e),
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Block until the next terminal event arrives.
    ///
    pub fn next(&self) -> Result<Event<KeyEvent>> {
        Ok(self.rx.recv()?)
    }
}

/// Apply a terminal event to state. Returns true if the application should
/// continue or false if exit was requested.
///
pub fn handle(event: Event<KeyEvent>, state: &mut State) -> bool {
    match event {
        Event::Tick => {
            if state.is_loading() {
                state.advance_spinner_index();
            }
            true
        }
        Event::Input(key) => handle_key(key, state),
    }
}

/// Route one key press according to the current focus.
///
pub fn handle_key(key: KeyEvent, state: &mut State) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        debug!("Processing exit terminal event '{:?}'...", key);
        return false;
    }

    match state.current_focus() {
        Focus::Modal => modal_key(key, state),
        Focus::Search => search_key(key, state),
        Focus::ConfirmDelete => confirm_delete_key(key, state),
        Focus::Table => return table_key(key, state),
    }
    true
}

fn modal_key(key: KeyEvent, state: &mut State) {
    match key.code {
        KeyCode::Esc => {
            debug!("Processing cancel modal event '{:?}'...", key);
            state.close_modal();
        }
        KeyCode::Enter => {
            debug!("Processing submit modal event '{:?}'...", key);
            if let Err(e) = state.submit() {
                error!("Failed to submit form: {}", e);
            }
        }
        KeyCode::Tab | KeyCode::Down => {
            state.next_form_field();
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.previous_form_field();
        }
        KeyCode::Backspace => {
            state.backspace_form();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.add_form_char(c);
        }
        _ => {}
    }
}

fn search_key(key: KeyEvent, state: &mut State) {
    match key.code {
        KeyCode::Esc => {
            debug!("Processing exit search mode event '{:?}'...", key);
            state.exit_search_mode(true);
        }
        KeyCode::Enter => {
            state.exit_search_mode(false);
        }
        KeyCode::Backspace => {
            state.backspace_search();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.add_search_char(c);
        }
        _ => {}
    }
}

fn confirm_delete_key(key: KeyEvent, state: &mut State) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('y') => {
            debug!("Processing confirm delete event '{:?}'...", key);
            if let Err(e) = state.confirm_delete() {
                error!("Failed to request deletion: {}", e);
            }
        }
        KeyCode::Esc | KeyCode::Char('n') => {
            debug!("Processing cancel delete confirmation event '{:?}'...", key);
            state.cancel_delete();
        }
        _ => {}
    }
}

fn table_key(key: KeyEvent, state: &mut State) -> bool {
    match key.code {
        KeyCode::Char('q') => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            state.next_row();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.previous_row();
        }
        KeyCode::Char('/') => {
            state.enter_search_mode();
        }
        KeyCode::Char('a') => {
            state.open_add_modal();
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Err(e) = state.open_edit_for_selected() {
                warn!("Cannot edit: {}", e);
            }
        }
        KeyCode::Char('d') => {
            if let Err(e) = state.request_delete_selected() {
                warn!("Cannot delete: {}", e);
            }
        }
        KeyCode::Char('r') => {
            info!("Refreshing records...");
            if let Err(e) = state.fetch_records() {
                error!("Failed to request records: {}", e);
            }
        }
        KeyCode::Char('l') => {
            state.toggle_log();
        }
        KeyCode::Esc => {
            state.clear_notice();
        }
        _ => {}
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Record, RecordId};
    use crate::events::network::Event as NetworkEvent;
    use crate::state::{FormField, ModalMode};
    use crate::ui::Theme;
    use std::sync::mpsc::{channel, Receiver};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(state: &mut State, text: &str) {
        for c in text.chars() {
            assert!(handle_key(press(KeyCode::Char(c)), state));
        }
    }

    fn loaded_state() -> (State, Receiver<NetworkEvent>) {
        let (tx, rx) = channel();
        let mut state = State::new(tx, Theme::default());
        state.set_records(
            vec![
                Record {
                    id: RecordId::Number(1),
                    code: "10".to_string(),
                    name: "Alpha".to_string(),
                    description: "first".to_string(),
                },
                Record {
                    id: RecordId::Number(2),
                    code: "20".to_string(),
                    name: "Beta".to_string(),
                    description: "second".to_string(),
                },
            ],
            0,
        );
        (state, rx)
    }

    #[test]
    fn quit_keys() {
        let (mut state, _rx) = loaded_state();
        assert!(!handle_key(press(KeyCode::Char('q')), &mut state));
        assert!(!handle_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut state
        ));
    }

    #[test]
    fn q_is_text_inside_search() {
        let (mut state, _rx) = loaded_state();
        handle_key(press(KeyCode::Char('/')), &mut state);
        assert!(handle_key(press(KeyCode::Char('q')), &mut state));
        assert_eq!(state.search_term(), "q");
    }

    #[test]
    fn search_filters_while_typing() {
        let (mut state, rx) = loaded_state();
        handle_key(press(KeyCode::Char('/')), &mut state);
        type_text(&mut state, "BET");
        assert_eq!(state.filtered_records().len(), 1);
        handle_key(press(KeyCode::Enter), &mut state);
        assert_eq!(state.current_focus(), Focus::Table);
        assert_eq!(state.search_term(), "BET");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn add_flow_through_keys() {
        let (mut state, rx) = loaded_state();
        handle_key(press(KeyCode::Char('a')), &mut state);
        assert!(state.is_modal_open());
        type_text(&mut state, "7");
        handle_key(press(KeyCode::Tab), &mut state);
        type_text(&mut state, "Widget");
        handle_key(press(KeyCode::Tab), &mut state);
        type_text(&mut state, "A widget");
        handle_key(press(KeyCode::Enter), &mut state);
        assert!(matches!(
            rx.try_recv().unwrap(),
            NetworkEvent::CreateRecord { draft } if draft.name == "Widget" && draft.code == "7"
        ));
    }

    #[test]
    fn letters_in_code_are_ignored() {
        let (mut state, _rx) = loaded_state();
        handle_key(press(KeyCode::Char('a')), &mut state);
        type_text(&mut state, "q1");
        assert_eq!(state.current_form_field(), FormField::Code);
        assert_eq!(state.form_data().code, "1");
        assert!(state.is_modal_open());
    }

    #[test]
    fn invalid_submit_keeps_modal() {
        let (mut state, rx) = loaded_state();
        handle_key(press(KeyCode::Char('a')), &mut state);
        handle_key(press(KeyCode::Enter), &mut state);
        assert!(state.is_modal_open());
        assert!(state.field_errors().has_errors());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn edit_and_cancel() {
        let (mut state, rx) = loaded_state();
        handle_key(press(KeyCode::Char('j')), &mut state);
        handle_key(press(KeyCode::Char('e')), &mut state);
        assert_eq!(state.modal_mode(), ModalMode::Edit);
        assert_eq!(state.form_data().name, "Beta");
        handle_key(press(KeyCode::Esc), &mut state);
        assert!(!state.is_modal_open());
        assert_eq!(state.current_focus(), Focus::Table);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn delete_needs_confirmation() {
        let (mut state, rx) = loaded_state();
        handle_key(press(KeyCode::Char('d')), &mut state);
        assert!(rx.try_recv().is_err());
        handle_key(press(KeyCode::Enter), &mut state);
        assert!(matches!(
            rx.try_recv().unwrap(),
            NetworkEvent::DeleteRecord { id } if id == RecordId::Number(1)
        ));
    }

    #[test]
    fn refresh_requests_fetch() {
        let (mut state, rx) = loaded_state();
        handle_key(press(KeyCode::Char('r')), &mut state);
        assert!(matches!(
            rx.try_recv().unwrap(),
            NetworkEvent::FetchRecords
        ));
    }

    #[test]
    fn tick_advances_spinner_only_while_loading() {
        let (mut state, _rx) = loaded_state();
        handle(Event::Tick, &mut state);
        assert_eq!(*state.get_spinner_index(), 0);
        state.fetch_records().unwrap();
        handle(Event::Tick, &mut state);
        assert_eq!(*state.get_spinner_index(), 1);
    }
}
