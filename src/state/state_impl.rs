use crate::api::{Draft, Record, RecordId};
use crate::app::NetworkEventSender;
use crate::events::network::Event as NetworkEvent;
use crate::ui::{Theme, SPINNER_FRAME_COUNT};
use crate::utils::filter::filter_records;
use log::*;
use ratatui::layout::Rect;
use ratatui::widgets::TableState;

use super::error::StateError;
use super::form::{validate_form, FormErrors, FormField, ModalMode};
use super::navigation::Focus;

/// Number of captured log lines kept for the log pane.
///
const MAX_LOG_ENTRIES: usize = 500;

/// Houses data representative of application state.
///
/// All mutation goes through the methods below. Network outcomes are applied
/// by the network event handler through the same methods.
pub struct State {
    net_sender: Option<NetworkEventSender>,
    terminal_size: Rect,
    spinner_index: usize,
    focus: Focus,
    records: Vec<Record>,
    filtered_records: Vec<Record>,
    records_generation: u64,
    table_state: TableState,
    search_term: String,
    modal_open: bool,
    modal_mode: ModalMode,
    selected_record: Option<Record>,
    form_data: Draft,
    form_field: FormField,
    field_errors: FormErrors,
    awaiting_submit: bool,
    delete_confirmation: Option<RecordId>,
    pending_requests: usize,
    notice: Option<String>,
    log_entries: Vec<String>,
    show_log: bool,
    theme: Theme,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            terminal_size: Rect::default(),
            spinner_index: 0,
            focus: Focus::Table,
            records: vec![],
            filtered_records: vec![],
            records_generation: 0,
            table_state: TableState::default(),
            search_term: String::new(),
            modal_open: false,
            modal_mode: ModalMode::Add,
            selected_record: None,
            form_data: Draft::default(),
            form_field: FormField::Code,
            field_errors: FormErrors::default(),
            awaiting_submit: false,
            delete_confirmation: None,
            pending_requests: 0,
            notice: None,
            log_entries: vec![],
            show_log: true,
            theme: Theme::default(),
        }
    }
}

impl State {
    /// Return new instance that dispatches requests through the sender.
    ///
    pub fn new(net_sender: NetworkEventSender, theme: Theme) -> Self {
        State {
            net_sender: Some(net_sender),
            theme,
            ..State::default()
        }
    }

    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    pub fn set_terminal_size(&mut self, size: Rect) -> &mut Self {
        self.terminal_size = size;
        self
    }

    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index += 1;
        if self.spinner_index >= SPINNER_FRAME_COUNT {
            self.spinner_index = 0;
        }
        self
    }

    pub fn get_spinner_index(&self) -> &usize {
        &self.spinner_index
    }

    pub fn current_focus(&self) -> Focus {
        self.focus
    }

    // --- records -----------------------------------------------------------

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn filtered_records(&self) -> &[Record] {
        &self.filtered_records
    }

    pub fn records_generation(&self) -> u64 {
        self.records_generation
    }

    /// Ask the network thread for the full collection.
    ///
    pub fn fetch_records(&mut self) -> Result<(), StateError> {
        self.dispatch(NetworkEvent::FetchRecords)
    }

    /// Replace all records with a fetched list. `generation` is the value of
    /// `records_generation` when the request was sent; the list is dropped if
    /// a local mutation was applied since. Returns whether the list was
    /// applied.
    ///
    pub fn set_records(&mut self, records: Vec<Record>, generation: u64) -> bool {
        if generation != self.records_generation {
            warn!(
                "Discarding stale record list (requested at generation {}, now {}).",
                generation, self.records_generation
            );
            return false;
        }
        self.records = records;
        self.refresh_filter();
        true
    }

    /// Append a record returned by a successful create. The modal is closed
    /// if it still shows the submitted draft.
    ///
    pub fn record_created(&mut self, record: Record) -> &mut Self {
        debug!("Appending created record {}.", record.id);
        self.records.push(record);
        self.records_generation += 1;
        self.refresh_filter();
        if self.awaiting_submit && self.modal_mode == ModalMode::Add {
            self.close_modal();
        }
        self
    }

    /// Replace the record with the same id by the server's representation.
    /// The modal is closed if it still shows the submitted edit of that
    /// record.
    ///
    pub fn record_updated(&mut self, record: Record) -> Result<(), StateError> {
        let position = self
            .records
            .iter()
            .position(|r| r.id == record.id)
            .ok_or_else(|| StateError::RecordNotFound {
                id: record.id.to_string(),
            })?;
        let editing_same = self.modal_mode == ModalMode::Edit
            && self
                .selected_record
                .as_ref()
                .map_or(false, |selected| selected.id == record.id);
        self.records[position] = record;
        self.records_generation += 1;
        self.refresh_filter();
        if self.awaiting_submit && editing_same {
            self.close_modal();
        }
        Ok(())
    }

    /// Remove the record with the given id and close the modal if open.
    ///
    pub fn record_removed(&mut self, id: &RecordId) -> Result<(), StateError> {
        let position = self
            .records
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| StateError::RecordNotFound { id: id.to_string() })?;
        self.records.remove(position);
        self.records_generation += 1;
        self.refresh_filter();
        if self.modal_open {
            self.close_modal();
        }
        Ok(())
    }

    // --- search ------------------------------------------------------------

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Update the search term and recompute the filtered view.
    ///
    pub fn set_search_term(&mut self, term: &str) -> &mut Self {
        self.search_term = term.to_owned();
        self.refresh_filter();
        self
    }

    pub fn add_search_char(&mut self, c: char) -> &mut Self {
        self.search_term.push(c);
        self.refresh_filter();
        self
    }

    pub fn backspace_search(&mut self) -> &mut Self {
        self.search_term.pop();
        self.refresh_filter();
        self
    }

    pub fn enter_search_mode(&mut self) -> &mut Self {
        self.focus = Focus::Search;
        self
    }

    /// Leave the search box, optionally clearing the term.
    ///
    pub fn exit_search_mode(&mut self, clear: bool) -> &mut Self {
        if clear {
            self.set_search_term("");
        }
        self.focus = Focus::Table;
        self
    }

    pub fn is_search_mode(&self) -> bool {
        self.focus == Focus::Search
    }

    fn refresh_filter(&mut self) {
        self.filtered_records = filter_records(&self.records, &self.search_term);
        let selected = match (self.table_state.selected(), self.filtered_records.len()) {
            (_, 0) => None,
            (Some(i), len) => Some(i.min(len - 1)),
            (None, _) => Some(0),
        };
        self.table_state.select(selected);
    }

    // --- table selection ---------------------------------------------------

    pub fn get_table_state(&mut self) -> &mut TableState {
        &mut self.table_state
    }

    pub fn selected_row_record(&self) -> Option<&Record> {
        self.table_state
            .selected()
            .and_then(|i| self.filtered_records.get(i))
    }

    pub fn next_row(&mut self) -> &mut Self {
        if self.filtered_records.is_empty() {
            return self;
        }
        let next = match self.table_state.selected() {
            Some(i) if i + 1 < self.filtered_records.len() => i + 1,
            Some(_) => 0,
            None => 0,
        };
        self.table_state.select(Some(next));
        self
    }

    pub fn previous_row(&mut self) -> &mut Self {
        if self.filtered_records.is_empty() {
            return self;
        }
        let previous = match self.table_state.selected() {
            Some(0) | None => self.filtered_records.len() - 1,
            Some(i) => i - 1,
        };
        self.table_state.select(Some(previous));
        self
    }

    // --- modal -------------------------------------------------------------

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn modal_mode(&self) -> ModalMode {
        self.modal_mode
    }

    pub fn selected_record(&self) -> Option<&Record> {
        self.selected_record.as_ref()
    }

    pub fn form_data(&self) -> &Draft {
        &self.form_data
    }

    pub fn field_errors(&self) -> &FormErrors {
        &self.field_errors
    }

    pub fn current_form_field(&self) -> FormField {
        self.form_field
    }

    pub fn open_add_modal(&mut self) -> &mut Self {
        debug!("Opening add modal.");
        self.modal_mode = ModalMode::Add;
        self.modal_open = true;
        self.selected_record = None;
        self.form_data = Draft::default();
        self.form_field = FormField::Code;
        self.field_errors = FormErrors::default();
        self.awaiting_submit = false;
        self.focus = Focus::Modal;
        self
    }

    pub fn open_edit_modal(&mut self, record: Record) -> &mut Self {
        debug!("Opening edit modal for record {}.", record.id);
        self.modal_mode = ModalMode::Edit;
        self.modal_open = true;
        self.form_data = record.to_draft();
        self.selected_record = Some(record);
        self.form_field = FormField::Code;
        self.field_errors = FormErrors::default();
        self.awaiting_submit = false;
        self.focus = Focus::Modal;
        self
    }

    /// Open the edit modal for the highlighted table row.
    ///
    pub fn open_edit_for_selected(&mut self) -> Result<(), StateError> {
        let record = self
            .selected_row_record()
            .cloned()
            .ok_or(StateError::NoSelection)?;
        self.open_edit_modal(record);
        Ok(())
    }

    pub fn close_modal(&mut self) -> &mut Self {
        self.modal_open = false;
        self.modal_mode = ModalMode::Add;
        self.selected_record = None;
        self.form_data = Draft::default();
        self.form_field = FormField::Code;
        self.field_errors = FormErrors::default();
        self.awaiting_submit = false;
        if self.focus == Focus::Modal {
            self.focus = Focus::Table;
        }
        self
    }

    pub fn next_form_field(&mut self) -> &mut Self {
        self.form_field = self.form_field.next();
        self
    }

    pub fn previous_form_field(&mut self) -> &mut Self {
        self.form_field = self.form_field.previous();
        self
    }

    /// Type a character into the focused input. Characters the input does
    /// not accept are ignored.
    ///
    pub fn add_form_char(&mut self, c: char) -> &mut Self {
        if self.form_field.accepts(c) {
            self.form_field.value_mut(&mut self.form_data).push(c);
        }
        self
    }

    pub fn backspace_form(&mut self) -> &mut Self {
        self.form_field.value_mut(&mut self.form_data).pop();
        self
    }

    pub fn set_form_value(&mut self, field: FormField, value: &str) -> &mut Self {
        *field.value_mut(&mut self.form_data) = value.to_owned();
        self
    }

    /// Validate a draft and show the outcome in the modal. Returns whether
    /// the draft may be submitted.
    ///
    pub fn validate_form(&mut self, draft: &Draft) -> bool {
        self.field_errors = validate_form(draft);
        !self.field_errors.has_errors()
    }

    /// Validate the modal's draft and dispatch a create or update request
    /// depending on the modal mode. Returns whether a request was sent. The
    /// modal stays open until the request succeeds.
    ///
    pub fn submit(&mut self) -> Result<bool, StateError> {
        let draft = self.form_data.clone();
        match (self.modal_mode, self.selected_record.as_ref()) {
            (ModalMode::Edit, Some(record)) => {
                let id = record.id.clone();
                self.update(id, draft)
            }
            (ModalMode::Edit, None) => Err(StateError::NoSelection),
            (ModalMode::Add, _) => self.add(draft),
        }
    }

    /// Validate the draft and, if it passes, request its creation.
    ///
    pub fn add(&mut self, draft: Draft) -> Result<bool, StateError> {
        if !self.validate_form(&draft) {
            debug!("Create request aborted by validation.");
            return Ok(false);
        }
        self.dispatch(NetworkEvent::CreateRecord { draft })?;
        self.awaiting_submit = self.modal_open;
        Ok(true)
    }

    /// Validate the draft and, if it passes, request an update of the record.
    ///
    pub fn update(&mut self, id: RecordId, draft: Draft) -> Result<bool, StateError> {
        if !self.validate_form(&draft) {
            debug!("Update request for record {} aborted by validation.", id);
            return Ok(false);
        }
        self.dispatch(NetworkEvent::UpdateRecord { id, draft })?;
        self.awaiting_submit = self.modal_open;
        Ok(true)
    }

    /// Request deletion of a record. No validation applies.
    ///
    pub fn remove(&mut self, id: RecordId) -> Result<(), StateError> {
        self.dispatch(NetworkEvent::DeleteRecord { id })
    }

    // --- delete confirmation -----------------------------------------------

    /// Ask for confirmation before deleting the highlighted row.
    ///
    pub fn request_delete_selected(&mut self) -> Result<(), StateError> {
        let id = self
            .selected_row_record()
            .map(|r| r.id.clone())
            .ok_or(StateError::NoSelection)?;
        self.delete_confirmation = Some(id);
        self.focus = Focus::ConfirmDelete;
        Ok(())
    }

    pub fn pending_delete(&self) -> Option<&RecordId> {
        self.delete_confirmation.as_ref()
    }

    pub fn confirm_delete(&mut self) -> Result<(), StateError> {
        self.focus = Focus::Table;
        match self.delete_confirmation.take() {
            Some(id) => self.remove(id),
            None => Ok(()),
        }
    }

    pub fn cancel_delete(&mut self) -> &mut Self {
        self.delete_confirmation = None;
        self.focus = Focus::Table;
        self
    }

    // --- requests ----------------------------------------------------------

    fn dispatch(&mut self, event: NetworkEvent) -> Result<(), StateError> {
        let sender = self
            .net_sender
            .as_ref()
            .ok_or_else(|| StateError::NetworkUnavailable("no sender".to_string()))?;
        sender
            .send(event)
            .map_err(|e| StateError::NetworkUnavailable(e.to_string()))?;
        self.pending_requests += 1;
        Ok(())
    }

    pub fn request_finished(&mut self) -> &mut Self {
        self.pending_requests = self.pending_requests.saturating_sub(1);
        self
    }

    pub fn is_loading(&self) -> bool {
        self.pending_requests > 0
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn set_notice(&mut self, notice: String) -> &mut Self {
        self.notice = Some(notice);
        self
    }

    pub fn clear_notice(&mut self) -> &mut Self {
        self.notice = None;
        self
    }

    // --- log pane ----------------------------------------------------------

    pub fn add_log_entry(&mut self, entry: String) -> &mut Self {
        self.log_entries.push(entry);
        if self.log_entries.len() > MAX_LOG_ENTRIES {
            let overflow = self.log_entries.len() - MAX_LOG_ENTRIES;
            self.log_entries.drain(..overflow);
        }
        self
    }

    pub fn get_log_entries(&self) -> &[String] {
        &self.log_entries
    }

    pub fn is_log_visible(&self) -> bool {
        self.show_log
    }

    pub fn toggle_log(&mut self) -> &mut Self {
        self.show_log = !self.show_log;
        self
    }
}
