//! Application state for the three-pane RFP workflow.
//!
//! Each pane owns an independent state struct and its own request
//! bookkeeping; there is deliberately no shared store between them. Network
//! work is described by [`Action`] values that the run loop executes, and
//! completions come back as [`ApiEvent`]s applied here.

use std::collections::BTreeSet;

use rfpctl_core::{parse_rfp_id, DispatchAck, Vendor};
use serde_json::Value;

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Composer,
    Roster,
    Compare,
}

impl Pane {
    pub fn next(self) -> Self {
        match self {
            Pane::Composer => Pane::Roster,
            Pane::Roster => Pane::Compare,
            Pane::Compare => Pane::Composer,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Pane::Composer => Pane::Compare,
            Pane::Roster => Pane::Composer,
            Pane::Compare => Pane::Roster,
        }
    }
}

/// Input mode (vim-ish)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigate panes and lists, trigger operations
    #[default]
    Normal,
    /// Type into the focused pane's active field
    Edit,
}

impl Mode {
    /// Display name for the status bar
    pub fn display_name(&self) -> &'static str {
        match self {
            Mode::Normal => "NORMAL",
            Mode::Edit => "EDIT",
        }
    }
}

/// Lifecycle of a pane's most recent request.
///
/// `Failed` is an addition over the source system, which left a rejected
/// request invisible; prior displayed data is kept either way.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Displaying,
    Failed(String),
}

/// Per-operation request bookkeeping.
///
/// Duplicate, uncoordinated requests are allowed by default; the generation
/// counter only guarantees that a stale completion cannot clobber the state
/// a newer completion already wrote.
#[derive(Debug, Default)]
pub struct RequestTracker {
    in_flight: u32,
    next_gen: u64,
    newest_done: u64,
}

impl RequestTracker {
    /// Register a new request; returns its generation tag
    pub fn begin(&mut self) -> u64 {
        self.next_gen += 1;
        self.in_flight += 1;
        self.next_gen
    }

    /// Register a completion; returns true when it is the newest seen so far
    /// (only then may the caller update displayed state)
    pub fn finish(&mut self, gen: u64) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        if gen > self.newest_done {
            self.newest_done = gen;
            true
        } else {
            false
        }
    }

    pub fn busy(&self) -> bool {
        self.in_flight > 0
    }
}

/// Network work requested by the UI, executed by the run loop
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    CreateRfp { text: String, gen: u64 },
    LoadVendors { gen: u64 },
    AddVendor { name: String, email: String, gen: u64 },
    SendRfp { vendor_ids: Vec<i64>, rfp_id: i64, gen: u64 },
    Compare { rfp_id: String, gen: u64 },
}

/// Completion of a network operation, delivered over the event channel.
///
/// Errors arrive pre-formatted: the panes only display them.
#[derive(Debug)]
pub enum ApiEvent {
    RfpCreated { gen: u64, result: Result<Value, String> },
    VendorsLoaded { gen: u64, result: Result<Vec<Vendor>, String> },
    VendorAdded { gen: u64, result: Result<(), String> },
    RfpSent { gen: u64, result: Result<DispatchAck, String> },
    Compared { gen: u64, result: Result<Value, String> },
}

/// RFP Composer pane: one text buffer, one displayed record
#[derive(Debug, Default)]
pub struct ComposerState {
    /// Draft text; kept populated after submission, never auto-cleared
    pub text: String,
    /// Last record the server returned for a create (full record, not an id)
    pub result: Option<Value>,
    pub phase: Phase,
    pub requests: RequestTracker,
}

/// Which roster input is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RosterField {
    #[default]
    Name,
    Email,
    RfpId,
}

impl RosterField {
    pub fn next(self) -> Self {
        match self {
            RosterField::Name => RosterField::Email,
            RosterField::Email => RosterField::RfpId,
            RosterField::RfpId => RosterField::Name,
        }
    }
}

/// Vendor Roster pane: full-replace vendor list, client-local selection
#[derive(Debug, Default)]
pub struct RosterState {
    pub vendors: Vec<Vendor>,
    /// Selected vendor ids. Never cleared by a dispatch, and a roster reload
    /// that drops a selected id leaves it selected until explicitly toggled.
    pub selected: BTreeSet<i64>,
    /// Highlighted row in the vendor list
    pub cursor: usize,
    pub name_input: String,
    pub email_input: String,
    pub rfp_id_input: String,
    pub field: RosterField,
    /// Load, add and dispatch are independent actions over the one list;
    /// each keeps its own phase so a roster reload completing late cannot
    /// paper over a failed dispatch (or vice versa).
    pub load_phase: Phase,
    pub add_phase: Phase,
    pub send_phase: Phase,
    /// Acceptance ack from the last dispatch (acceptance, not delivery)
    pub last_ack: Option<DispatchAck>,
    pub load_requests: RequestTracker,
    pub add_requests: RequestTracker,
    pub send_requests: RequestTracker,
}

impl RosterState {
    /// Flip membership of a vendor id in the selection
    pub fn toggle(&mut self, id: i64) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Id of the vendor under the cursor, if any
    pub fn vendor_at_cursor(&self) -> Option<i64> {
        self.vendors.get(self.cursor).map(|v| v.id)
    }
}

/// Proposal Comparator pane: pass-through viewer
#[derive(Debug, Default)]
pub struct CompareState {
    pub rfp_id_input: String,
    /// Last comparison payload, rendered verbatim
    pub result: Option<Value>,
    pub phase: Phase,
    pub requests: RequestTracker,
}

/// Main application state
#[derive(Debug)]
pub struct App {
    pub mode: Mode,
    pub focused: Pane,
    pub composer: ComposerState,
    pub roster: RosterState,
    pub compare: CompareState,
    /// When set, a new submission is ignored while one is in flight.
    /// Off by default to match the source system's permissive behavior.
    pub single_flight: bool,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(single_flight: bool) -> Self {
        Self {
            mode: Mode::Normal,
            focused: Pane::Composer,
            composer: ComposerState::default(),
            roster: RosterState::default(),
            compare: CompareState::default(),
            single_flight,
            status_message: None,
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    /// The text buffer edits go into, given focus and roster field
    pub fn active_input_mut(&mut self) -> &mut String {
        match self.focused {
            Pane::Composer => &mut self.composer.text,
            Pane::Roster => match self.roster.field {
                RosterField::Name => &mut self.roster.name_input,
                RosterField::Email => &mut self.roster.email_input,
                RosterField::RfpId => &mut self.roster.rfp_id_input,
            },
            Pane::Compare => &mut self.compare.rfp_id_input,
        }
    }

    pub fn input_char(&mut self, c: char) {
        self.active_input_mut().push(c);
    }

    pub fn input_backspace(&mut self) {
        self.active_input_mut().pop();
    }

    // --- Composer ---

    /// Submit the draft text as a new RFP. Empty text is forwarded as-is;
    /// the buffer stays populated regardless of outcome.
    pub fn submit_composer(&mut self) -> Option<Action> {
        if self.single_flight && self.composer.requests.busy() {
            self.set_status("create already in flight (single-flight mode)");
            return None;
        }
        let gen = self.composer.requests.begin();
        self.composer.phase = Phase::Submitting;
        Some(Action::CreateRfp {
            text: self.composer.text.clone(),
            gen,
        })
    }

    // --- Roster ---

    /// Fetch the full vendor set; always a complete replace, never a patch
    pub fn start_roster_load(&mut self) -> Option<Action> {
        if self.single_flight && self.roster.load_requests.busy() {
            self.set_status("roster load already in flight (single-flight mode)");
            return None;
        }
        let gen = self.roster.load_requests.begin();
        self.roster.load_phase = Phase::Submitting;
        Some(Action::LoadVendors { gen })
    }

    /// Submit the name/email inputs as a new vendor. The inputs are cleared
    /// and the roster reloaded only after the server confirms.
    pub fn submit_add_vendor(&mut self) -> Option<Action> {
        if self.single_flight && self.roster.add_requests.busy() {
            self.set_status("add already in flight (single-flight mode)");
            return None;
        }
        let gen = self.roster.add_requests.begin();
        self.roster.add_phase = Phase::Submitting;
        Some(Action::AddVendor {
            name: self.roster.name_input.clone(),
            email: self.roster.email_input.clone(),
            gen,
        })
    }

    /// Dispatch the typed RFP id to the current selection.
    ///
    /// An empty selection is a valid dispatch (`vendor_ids: []`). A
    /// non-numeric id is rejected here as a validation error rather than
    /// forwarding a coerced sentinel the way the source system did.
    pub fn submit_send(&mut self) -> Option<Action> {
        let rfp_id = match parse_rfp_id(&self.roster.rfp_id_input) {
            Ok(id) => id,
            Err(err) => {
                self.roster.send_phase = Phase::Failed(err.to_string());
                return None;
            }
        };
        if self.single_flight && self.roster.send_requests.busy() {
            self.set_status("dispatch already in flight (single-flight mode)");
            return None;
        }
        let gen = self.roster.send_requests.begin();
        self.roster.send_phase = Phase::Submitting;
        Some(Action::SendRfp {
            vendor_ids: self.roster.selected.iter().copied().collect(),
            rfp_id,
            gen,
        })
    }

    /// Toggle selection of the vendor under the cursor
    pub fn toggle_at_cursor(&mut self) {
        if let Some(id) = self.roster.vendor_at_cursor() {
            self.roster.toggle(id);
        }
    }

    pub fn roster_cursor_down(&mut self) {
        if !self.roster.vendors.is_empty() {
            self.roster.cursor = (self.roster.cursor + 1) % self.roster.vendors.len();
        }
    }

    pub fn roster_cursor_up(&mut self) {
        if !self.roster.vendors.is_empty() {
            self.roster.cursor = self
                .roster
                .cursor
                .checked_sub(1)
                .unwrap_or(self.roster.vendors.len() - 1);
        }
    }

    // --- Comparator ---

    /// Fetch the comparison payload for the typed RFP id.
    ///
    /// The id is free text forwarded as-is; the server interprets the path
    /// segment, so there is no client-side validation here (unlike the
    /// dispatch flow, where the id enters a typed request body).
    pub fn submit_compare(&mut self) -> Option<Action> {
        if self.single_flight && self.compare.requests.busy() {
            self.set_status("compare already in flight (single-flight mode)");
            return None;
        }
        let gen = self.compare.requests.begin();
        self.compare.phase = Phase::Submitting;
        Some(Action::Compare {
            rfp_id: self.compare.rfp_id_input.clone(),
            gen,
        })
    }

    // --- Completions ---

    /// Apply a network completion. State updates only on success; a failure
    /// becomes a visible `Failed` phase and leaves prior data untouched.
    /// May return a follow-up action (roster reload after a vendor add).
    pub fn apply(&mut self, event: ApiEvent) -> Option<Action> {
        match event {
            ApiEvent::RfpCreated { gen, result } => {
                let newest = self.composer.requests.finish(gen);
                if !newest {
                    return None;
                }
                match result {
                    Ok(record) => {
                        self.composer.result = Some(record);
                        self.composer.phase = Phase::Displaying;
                    }
                    Err(msg) => self.composer.phase = Phase::Failed(msg),
                }
                None
            }
            ApiEvent::VendorsLoaded { gen, result } => {
                let newest = self.roster.load_requests.finish(gen);
                if !newest {
                    return None;
                }
                match result {
                    Ok(vendors) => {
                        // Full replace. The selection is not reconciled:
                        // ids no longer on the roster stay selected until
                        // the user toggles them.
                        self.roster.vendors = vendors;
                        if self.roster.cursor >= self.roster.vendors.len() {
                            self.roster.cursor = self.roster.vendors.len().saturating_sub(1);
                        }
                        self.roster.load_phase = Phase::Displaying;
                    }
                    Err(msg) => self.roster.load_phase = Phase::Failed(msg),
                }
                None
            }
            ApiEvent::VendorAdded { gen, result } => {
                let newest = self.roster.add_requests.finish(gen);
                if !newest {
                    return None;
                }
                match result {
                    Ok(()) => {
                        self.roster.name_input.clear();
                        self.roster.email_input.clear();
                        self.roster.add_phase = Phase::Displaying;
                        self.start_roster_load()
                    }
                    Err(msg) => {
                        self.roster.add_phase = Phase::Failed(msg);
                        None
                    }
                }
            }
            ApiEvent::RfpSent { gen, result } => {
                let newest = self.roster.send_requests.finish(gen);
                if !newest {
                    return None;
                }
                match result {
                    Ok(ack) => {
                        // Acceptance only, and the selection survives so the
                        // same set can be dispatched again.
                        self.roster.last_ack = Some(ack);
                        self.roster.send_phase = Phase::Displaying;
                    }
                    Err(msg) => self.roster.send_phase = Phase::Failed(msg),
                }
                None
            }
            ApiEvent::Compared { gen, result } => {
                let newest = self.compare.requests.finish(gen);
                if !newest {
                    return None;
                }
                match result {
                    Ok(payload) => {
                        self.compare.result = Some(payload);
                        self.compare.phase = Phase::Displaying;
                    }
                    Err(msg) => self.compare.phase = Phase::Failed(msg),
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vendor(id: i64, name: &str) -> Vendor {
        Vendor {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    fn loaded(app: &mut App, gen: u64, vendors: Vec<Vendor>) {
        app.apply(ApiEvent::VendorsLoaded {
            gen,
            result: Ok(vendors),
        });
    }

    #[test]
    fn double_toggle_is_a_noop() {
        let mut app = App::new(false);
        let before = app.roster.selected.clone();
        app.roster.toggle(3);
        app.roster.toggle(3);
        assert_eq!(app.roster.selected, before);
    }

    #[test]
    fn toggle_order_does_not_matter() {
        let mut a = App::new(false);
        a.roster.toggle(3);
        a.roster.toggle(5);
        let mut b = App::new(false);
        b.roster.toggle(5);
        b.roster.toggle(3);
        assert_eq!(a.roster.selected, b.roster.selected);
    }

    #[test]
    fn composer_submit_keeps_text_and_displays_full_record() {
        let mut app = App::new(false);
        app.composer.text = "Need 10 laptops".to_string();

        let action = app.submit_composer().unwrap();
        let gen = match &action {
            Action::CreateRfp { text, gen } => {
                assert_eq!(text, "Need 10 laptops");
                *gen
            }
            other => panic!("unexpected action {other:?}"),
        };
        assert_eq!(app.composer.phase, Phase::Submitting);

        let record = json!({"id": 7, "title": "Need 10 laptops...", "raw_input": "Need 10 laptops"});
        app.apply(ApiEvent::RfpCreated {
            gen,
            result: Ok(record.clone()),
        });

        assert_eq!(app.composer.phase, Phase::Displaying);
        assert_eq!(app.composer.result, Some(record));
        // The draft is not cleared after a successful create
        assert_eq!(app.composer.text, "Need 10 laptops");
    }

    #[test]
    fn composer_allows_empty_submission() {
        let mut app = App::new(false);
        let action = app.submit_composer().unwrap();
        assert!(matches!(action, Action::CreateRfp { text, .. } if text.is_empty()));
    }

    #[test]
    fn failed_create_keeps_prior_record_visible() {
        let mut app = App::new(false);
        let first = app.submit_composer().unwrap();
        let gen1 = match first {
            Action::CreateRfp { gen, .. } => gen,
            _ => unreachable!(),
        };
        app.apply(ApiEvent::RfpCreated {
            gen: gen1,
            result: Ok(json!({"id": 7})),
        });

        let second = app.submit_composer().unwrap();
        let gen2 = match second {
            Action::CreateRfp { gen, .. } => gen,
            _ => unreachable!(),
        };
        app.apply(ApiEvent::RfpCreated {
            gen: gen2,
            result: Err("server returned 500 for create rfp: boom".to_string()),
        });

        assert!(matches!(app.composer.phase, Phase::Failed(_)));
        assert_eq!(app.composer.result, Some(json!({"id": 7})));
    }

    #[test]
    fn stale_completion_does_not_clobber_newer_result() {
        let mut app = App::new(false);
        let gen1 = match app.submit_composer().unwrap() {
            Action::CreateRfp { gen, .. } => gen,
            _ => unreachable!(),
        };
        let gen2 = match app.submit_composer().unwrap() {
            Action::CreateRfp { gen, .. } => gen,
            _ => unreachable!(),
        };

        // Newer request resolves first
        app.apply(ApiEvent::RfpCreated {
            gen: gen2,
            result: Ok(json!({"id": 8})),
        });
        // Older one trickles in afterwards and must be ignored
        app.apply(ApiEvent::RfpCreated {
            gen: gen1,
            result: Ok(json!({"id": 7})),
        });

        assert_eq!(app.composer.result, Some(json!({"id": 8})));
        assert_eq!(app.composer.phase, Phase::Displaying);
    }

    #[test]
    fn duplicate_submissions_allowed_by_default_but_not_single_flight() {
        let mut permissive = App::new(false);
        assert!(permissive.submit_composer().is_some());
        assert!(permissive.submit_composer().is_some());

        let mut guarded = App::new(true);
        assert!(guarded.submit_composer().is_some());
        assert!(guarded.submit_composer().is_none());
        assert!(guarded.status_message.is_some());
    }

    #[test]
    fn send_uses_current_selection_and_keeps_it_afterwards() {
        let mut app = App::new(false);
        loaded(&mut app, 1, vec![vendor(3, "Acme"), vendor(5, "Globex")]);
        app.roster.toggle(3);
        app.roster.toggle(5);
        app.roster.rfp_id_input = "7".to_string();

        let action = app.submit_send().unwrap();
        let gen = match &action {
            Action::SendRfp {
                vendor_ids,
                rfp_id,
                gen,
            } => {
                assert_eq!(vendor_ids, &vec![3, 5]);
                assert_eq!(*rfp_id, 7);
                *gen
            }
            other => panic!("unexpected action {other:?}"),
        };

        app.apply(ApiEvent::RfpSent {
            gen,
            result: Ok(DispatchAck {
                ok: true,
                sent_to: vec!["a@acme.com".to_string()],
            }),
        });

        // Selection survives a successful dispatch (repeat sends allowed)
        assert_eq!(
            app.roster.selected.iter().copied().collect::<Vec<_>>(),
            vec![3, 5]
        );
        assert_eq!(app.roster.send_phase, Phase::Displaying);
        assert!(app.roster.last_ack.as_ref().unwrap().ok);
    }

    #[test]
    fn send_with_empty_selection_is_valid() {
        let mut app = App::new(false);
        app.roster.rfp_id_input = "7".to_string();
        let action = app.submit_send().unwrap();
        assert!(matches!(
            action,
            Action::SendRfp { vendor_ids, rfp_id: 7, .. } if vendor_ids.is_empty()
        ));
    }

    #[test]
    fn non_numeric_rfp_id_is_a_validation_error_not_a_request() {
        let mut app = App::new(false);
        app.roster.rfp_id_input = "seven".to_string();
        assert!(app.submit_send().is_none());
        match &app.roster.send_phase {
            Phase::Failed(msg) => assert!(msg.contains("invalid RFP id")),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn comparator_forwards_non_numeric_ids_unvalidated() {
        // Unlike the dispatch flow, the comparator id is server-interpreted
        let mut app = App::new(false);
        app.compare.rfp_id_input = "NaN".to_string();
        let action = app.submit_compare().unwrap();
        assert!(matches!(action, Action::Compare { rfp_id, .. } if rfp_id == "NaN"));
        assert_eq!(app.compare.phase, Phase::Submitting);
    }

    #[test]
    fn reload_that_drops_a_selected_id_keeps_it_selected() {
        let mut app = App::new(false);
        loaded(&mut app, 1, vec![vendor(3, "Acme"), vendor(5, "Globex")]);
        app.roster.toggle(3);
        app.roster.toggle(5);

        // Vendor 5 disappears from the roster
        loaded(&mut app, 2, vec![vendor(3, "Acme")]);
        assert!(app.roster.selected.contains(&5));

        // Subsequent toggles still work, including on the stale id
        app.toggle_at_cursor(); // cursor on vendor 3
        assert!(!app.roster.selected.contains(&3));
        app.roster.toggle(5);
        assert!(!app.roster.selected.contains(&5));
    }

    #[test]
    fn selection_stays_subset_of_roster_when_only_toggling_rendered_rows() {
        let mut app = App::new(false);
        loaded(&mut app, 1, vec![vendor(3, "Acme"), vendor(5, "Globex")]);

        app.toggle_at_cursor();
        app.roster_cursor_down();
        app.toggle_at_cursor();

        let roster_ids: BTreeSet<i64> = app.roster.vendors.iter().map(|v| v.id).collect();
        assert!(app.roster.selected.is_subset(&roster_ids));
    }

    #[test]
    fn add_vendor_clears_inputs_and_triggers_reload_only_on_success() {
        let mut app = App::new(false);
        app.roster.name_input = "Acme".to_string();
        app.roster.email_input = "a@acme.com".to_string();

        let gen = match app.submit_add_vendor().unwrap() {
            Action::AddVendor { name, email, gen } => {
                assert_eq!(name, "Acme");
                assert_eq!(email, "a@acme.com");
                gen
            }
            other => panic!("unexpected action {other:?}"),
        };

        let follow_up = app.apply(ApiEvent::VendorAdded {
            gen,
            result: Ok(()),
        });
        assert!(matches!(follow_up, Some(Action::LoadVendors { .. })));
        assert!(app.roster.name_input.is_empty());
        assert!(app.roster.email_input.is_empty());
    }

    #[test]
    fn failed_add_keeps_inputs_for_retry() {
        let mut app = App::new(false);
        app.roster.name_input = "Acme".to_string();
        app.roster.email_input = "a@acme.com".to_string();

        let gen = match app.submit_add_vendor().unwrap() {
            Action::AddVendor { gen, .. } => gen,
            _ => unreachable!(),
        };
        let follow_up = app.apply(ApiEvent::VendorAdded {
            gen,
            result: Err("server returned 422 for add vendor: bad email".to_string()),
        });

        assert!(follow_up.is_none());
        assert_eq!(app.roster.name_input, "Acme");
        assert!(matches!(app.roster.add_phase, Phase::Failed(_)));
    }

    #[test]
    fn roster_reload_does_not_mask_a_failed_dispatch() {
        let mut app = App::new(false);
        app.roster.rfp_id_input = "7".to_string();
        let gen = match app.submit_send().unwrap() {
            Action::SendRfp { gen, .. } => gen,
            _ => unreachable!(),
        };
        app.apply(ApiEvent::RfpSent {
            gen,
            result: Err("server returned 500 for send rfp: boom".to_string()),
        });
        assert!(matches!(app.roster.send_phase, Phase::Failed(_)));

        // A reload finishing afterwards reports on its own phase only
        loaded(&mut app, 1, vec![vendor(3, "Acme")]);
        assert_eq!(app.roster.load_phase, Phase::Displaying);
        assert!(matches!(app.roster.send_phase, Phase::Failed(_)));
    }

    #[test]
    fn compare_displays_payload_verbatim() {
        let mut app = App::new(false);
        app.compare.rfp_id_input = "7".to_string();
        let gen = match app.submit_compare().unwrap() {
            Action::Compare { rfp_id, gen } => {
                assert_eq!(rfp_id, "7");
                gen
            }
            other => panic!("unexpected action {other:?}"),
        };

        let payload = json!({"matches": [{"vendor": "Acme", "score": 8.5}]});
        app.apply(ApiEvent::Compared {
            gen,
            result: Ok(payload.clone()),
        });
        assert_eq!(app.compare.result, Some(payload));
        assert_eq!(app.compare.phase, Phase::Displaying);
    }

    #[test]
    fn cursor_wraps_and_survives_shrinking_roster() {
        let mut app = App::new(false);
        loaded(&mut app, 1, vec![vendor(3, "Acme"), vendor(5, "Globex")]);
        app.roster_cursor_down();
        assert_eq!(app.roster.cursor, 1);
        app.roster_cursor_down();
        assert_eq!(app.roster.cursor, 0);
        app.roster_cursor_up();
        assert_eq!(app.roster.cursor, 1);

        loaded(&mut app, 2, vec![vendor(3, "Acme")]);
        assert_eq!(app.roster.cursor, 0);
    }

    #[test]
    fn edit_routing_targets_the_focused_field() {
        let mut app = App::new(false);
        app.focused = Pane::Roster;
        app.roster.field = RosterField::Email;
        app.input_char('a');
        app.input_char('@');
        assert_eq!(app.roster.email_input, "a@");
        assert!(app.roster.name_input.is_empty());

        app.focused = Pane::Compare;
        app.input_char('7');
        assert_eq!(app.compare.rfp_id_input, "7");

        app.input_backspace();
        assert!(app.compare.rfp_id_input.is_empty());
    }
}
