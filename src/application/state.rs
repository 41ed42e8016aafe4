//! Application state for the location picker screen.
//!
//! [`App`] owns the two option lists, the two selections and the UI mode.
//! It never performs I/O: lookups it wants done are queued as
//! [`FetchRequest`]s and their results come back through
//! [`App::apply_outcome`].

use crate::domain::{Destination, FetchOutcome, FetchRequest, PickerKind};

/// Which control currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Region,
    Place,
    Confirm,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Region => Focus::Place,
            Focus::Place => Focus::Confirm,
            Focus::Confirm => Focus::Region,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Region => Focus::Confirm,
            Focus::Place => Focus::Region,
            Focus::Confirm => Focus::Place,
        }
    }
}

/// Represents the current mode of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Moving focus between the pickers and the enter button
    Normal,
    /// A picker's option list is open
    Picking(PickerKind),
    /// Help popup is displayed
    Help,
}

/// Main application state for the screen.
///
/// # Examples
///
/// ```
/// use coleta::application::App;
/// use coleta::domain::FetchRequest;
///
/// let mut app = App::new();
/// let requests = app.take_requests();
/// assert_eq!(requests[0], FetchRequest::Regions);
/// assert!(app.selected_region.is_empty());
/// ```
#[derive(Debug)]
pub struct App {
    /// Region codes, sorted ascending
    pub regions: Vec<String>,
    /// Place names for the latest selected region, in response order
    pub places: Vec<String>,
    pub selected_region: String,
    pub selected_place: String,
    pub focus: Focus,
    pub mode: AppMode,
    /// Highlighted row of the open picker; 0 is the placeholder entry
    pub picker_cursor: usize,
    pub help_scroll: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
    pub regions_loading: bool,
    pub places_loading: bool,
    pub should_quit: bool,
    destination: Option<Destination>,
    place_seq: u64,
    outbox: Vec<FetchRequest>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            regions: Vec::new(),
            places: Vec::new(),
            selected_region: String::new(),
            selected_place: String::new(),
            focus: Focus::Region,
            mode: AppMode::Normal,
            picker_cursor: 0,
            help_scroll: 0,
            status_message: None,
            regions_loading: false,
            places_loading: false,
            should_quit: false,
            destination: None,
            place_seq: 0,
            outbox: Vec::new(),
        }
    }
}

impl App {
    /// Creates the screen in its mounted state.
    ///
    /// Mounting queues the region lookup and a place lookup for the
    /// (still empty) selected region.
    pub fn new() -> Self {
        let mut app = Self::default();
        app.request_regions();
        app.request_places();
        app
    }

    /// Drains the lookups queued since the last call.
    pub fn take_requests(&mut self) -> Vec<FetchRequest> {
        std::mem::take(&mut self.outbox)
    }

    fn request_regions(&mut self) {
        self.regions_loading = true;
        self.outbox.push(FetchRequest::Regions);
    }

    fn request_places(&mut self) {
        self.place_seq += 1;
        self.places_loading = true;
        self.outbox.push(FetchRequest::Places {
            region: self.selected_region.clone(),
            seq: self.place_seq,
        });
    }

    /// Sets the selected region and queues a lookup of its places.
    ///
    /// Re-selecting the current region queues a new lookup as well. When the
    /// region actually changes, the city list and the selected place are
    /// cleared so nothing from the previous region can be picked.
    pub fn select_region(&mut self, region: impl Into<String>) {
        let region = region.into();
        if region != self.selected_region {
            self.places.clear();
            self.selected_place.clear();
            self.clamp_picker_cursor();
        }
        tracing::debug!(region = %region, "region selected");
        self.selected_region = region;
        self.request_places();
    }

    pub fn select_place(&mut self, place: impl Into<String>) {
        self.selected_place = place.into();
        tracing::debug!(place = %self.selected_place, "place selected");
    }

    /// Records the navigation to the points screen with the current
    /// selections. Empty selections are accepted as-is.
    pub fn confirm(&mut self) {
        let destination = Destination::new(self.selected_region.clone(), self.selected_place.clone());
        if destination.matches_everything() {
            tracing::info!("navigating to all points");
        } else {
            tracing::info!(region = %destination.region, place = %destination.place, "navigating to points");
        }
        self.destination = Some(destination);
    }

    /// Takes the pending navigation, if the user confirmed.
    pub fn take_destination(&mut self) -> Option<Destination> {
        self.destination.take()
    }

    /// Applies a completed lookup.
    ///
    /// Place results are only accepted for the most recently queued place
    /// lookup. On failure the affected list keeps its previous contents.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Regions(result) => {
                self.regions_loading = false;
                match result {
                    Ok(codes) => {
                        tracing::info!(count = codes.len(), "states loaded");
                        self.regions = codes;
                    }
                    Err(error) => {
                        tracing::warn!(%error, "failed to load states");
                        self.status_message = Some(format!("Could not load states: {}", error));
                    }
                }
            }
            FetchOutcome::Places { region, seq, result } => {
                if seq != self.place_seq {
                    tracing::debug!(region = %region, seq, latest = self.place_seq, "discarding superseded city list");
                    return;
                }
                self.places_loading = false;
                match result {
                    Ok(names) => {
                        tracing::info!(region = %region, count = names.len(), "cities loaded");
                        self.places = names;
                    }
                    Err(error) if region.is_empty() => {
                        tracing::debug!(%error, "no cities without a state");
                    }
                    Err(error) => {
                        tracing::warn!(region = %region, %error, "failed to load cities");
                        self.status_message = Some(format!("Could not load cities for {}: {}", region, error));
                    }
                }
            }
        }
        self.clamp_picker_cursor();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Options offered by a picker, without the placeholder entry.
    pub fn picker_options(&self, kind: PickerKind) -> &[String] {
        match kind {
            PickerKind::Region => &self.regions,
            PickerKind::Place => &self.places,
        }
    }

    pub fn picker_value(&self, kind: PickerKind) -> &str {
        match kind {
            PickerKind::Region => &self.selected_region,
            PickerKind::Place => &self.selected_place,
        }
    }

    /// Opens a picker with the current value highlighted.
    pub fn open_picker(&mut self, kind: PickerKind) {
        let value = self.picker_value(kind);
        self.picker_cursor = self
            .picker_options(kind)
            .iter()
            .position(|option| option == value)
            .map(|index| index + 1)
            .unwrap_or(0);
        self.mode = AppMode::Picking(kind);
    }

    pub fn close_picker(&mut self) {
        self.mode = AppMode::Normal;
        self.picker_cursor = 0;
    }

    /// Moves the picker highlight by `delta` rows, stopping at either end.
    pub fn move_picker_cursor(&mut self, delta: isize) {
        let last = self.picker_last_row();
        self.picker_cursor = self.picker_cursor.saturating_add_signed(delta).min(last);
    }

    pub fn picker_cursor_to_end(&mut self) {
        self.picker_cursor = self.picker_last_row();
    }

    /// Selects the highlighted entry of the open picker and closes it.
    ///
    /// The placeholder entry selects the empty value.
    pub fn pick_current(&mut self) {
        let AppMode::Picking(kind) = self.mode else {
            return;
        };
        let value = match self.picker_cursor {
            0 => String::new(),
            row => self
                .picker_options(kind)
                .get(row - 1)
                .cloned()
                .unwrap_or_default(),
        };
        self.close_picker();
        match kind {
            PickerKind::Region => self.select_region(value),
            PickerKind::Place => self.select_place(value),
        }
    }

    fn picker_last_row(&self) -> usize {
        match self.mode {
            AppMode::Picking(kind) => self.picker_options(kind).len(),
            _ => 0,
        }
    }

    fn clamp_picker_cursor(&mut self) {
        let last = self.picker_last_row();
        if self.picker_cursor > last {
            self.picker_cursor = last;
        }
    }

    pub fn open_help(&mut self) {
        self.mode = AppMode::Help;
        self.help_scroll = 0;
    }

    pub fn close_help(&mut self) {
        self.mode = AppMode::Normal;
    }

    /// Loading indicator for the status bar, if any lookup is outstanding.
    pub fn loading_message(&self) -> Option<&'static str> {
        match (self.regions_loading, self.places_loading) {
            (true, true) => Some("Loading states and cities…"),
            (true, false) => Some("Loading states…"),
            (false, true) => Some("Loading cities…"),
            (false, false) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DirectoryError;

    fn places_outcome(region: &str, seq: u64, names: &[&str]) -> FetchOutcome {
        FetchOutcome::Places {
            region: region.to_string(),
            seq,
            result: Ok(names.iter().map(|n| n.to_string()).collect()),
        }
    }

    fn last_place_seq(requests: &[FetchRequest]) -> u64 {
        requests
            .iter()
            .filter_map(|r| match r {
                FetchRequest::Places { seq, .. } => Some(*seq),
                _ => None,
            })
            .last()
            .unwrap()
    }

    #[test]
    fn test_app_default() {
        let app = App::default();
        assert!(app.regions.is_empty());
        assert!(app.places.is_empty());
        assert!(app.selected_region.is_empty());
        assert!(app.selected_place.is_empty());
        assert_eq!(app.focus, Focus::Region);
        assert_eq!(app.mode, AppMode::Normal);
        assert!(app.status_message.is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_mount_queues_regions_and_empty_region_places() {
        let mut app = App::new();
        let requests = app.take_requests();
        assert_eq!(
            requests,
            vec![
                FetchRequest::Regions,
                FetchRequest::Places { region: String::new(), seq: 1 },
            ]
        );
        assert!(app.take_requests().is_empty());
        assert!(app.regions_loading);
        assert!(app.places_loading);
    }

    #[test]
    fn test_regions_published_as_given() {
        let mut app = App::new();
        app.apply_outcome(FetchOutcome::Regions(Ok(vec![
            "AC".to_string(),
            "RJ".to_string(),
            "SP".to_string(),
        ])));
        assert_eq!(app.regions, vec!["AC", "RJ", "SP"]);
        assert!(!app.regions_loading);
    }

    #[test]
    fn test_places_for_selected_region_keep_order() {
        let mut app = App::new();
        app.select_region("SP");
        let seq = last_place_seq(&app.take_requests());
        app.apply_outcome(places_outcome("SP", seq, &["Santos", "Campinas"]));
        assert_eq!(app.places, vec!["Santos", "Campinas"]);
        assert!(!app.places_loading);
    }

    #[test]
    fn test_changing_region_replaces_places() {
        let mut app = App::new();
        app.select_region("SP");
        let seq = last_place_seq(&app.take_requests());
        app.apply_outcome(places_outcome("SP", seq, &["Santos", "Campinas"]));

        app.select_region("RJ");
        let seq = last_place_seq(&app.take_requests());
        app.apply_outcome(places_outcome("RJ", seq, &["Niterói"]));

        assert_eq!(app.places, vec!["Niterói"]);
        assert!(!app.places.iter().any(|p| p == "Santos" || p == "Campinas"));
    }

    #[test]
    fn test_superseded_places_are_discarded() {
        let mut app = App::new();
        app.take_requests();
        app.select_region("SP");
        let sp_seq = last_place_seq(&app.take_requests());
        app.select_region("RJ");
        let rj_seq = last_place_seq(&app.take_requests());

        app.apply_outcome(places_outcome("RJ", rj_seq, &["Niterói"]));
        app.apply_outcome(places_outcome("SP", sp_seq, &["Santos"]));

        assert_eq!(app.places, vec!["Niterói"]);
    }

    #[test]
    fn test_reselecting_same_region_queues_new_lookup() {
        let mut app = App::new();
        app.take_requests();
        app.select_region("SP");
        app.select_place("Santos");
        app.select_region("SP");
        let requests = app.take_requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(app.selected_place, "Santos");
    }

    #[test]
    fn test_changing_region_clears_place() {
        let mut app = App::new();
        app.select_region("SP");
        app.select_place("Santos");
        app.select_region("RJ");
        assert!(app.selected_place.is_empty());
    }

    #[test]
    fn test_failed_regions_keep_list_and_report() {
        let mut app = App::new();
        app.regions = vec!["AC".to_string()];
        app.apply_outcome(FetchOutcome::Regions(Err(DirectoryError::Status(500))));
        assert_eq!(app.regions, vec!["AC"]);
        assert!(app.status_message.as_ref().unwrap().contains("HTTP 500"));
        assert!(!app.regions_loading);
    }

    #[test]
    fn test_failed_places_leave_no_cities_from_previous_region() {
        let mut app = App::new();
        app.select_region("SP");
        let seq = last_place_seq(&app.take_requests());
        app.apply_outcome(places_outcome("SP", seq, &["Santos"]));

        app.select_region("RJ");
        let seq = last_place_seq(&app.take_requests());
        app.apply_outcome(FetchOutcome::Places {
            region: "RJ".to_string(),
            seq,
            result: Err(DirectoryError::Transport("timed out".to_string())),
        });

        assert!(app.places.is_empty());
        assert!(app.status_message.as_ref().unwrap().contains("RJ"));

        app.open_picker(PickerKind::Place);
        app.move_picker_cursor(1);
        app.pick_current();
        app.confirm();
        assert_eq!(app.take_destination(), Some(Destination::new("RJ", "")));
    }

    #[test]
    fn test_failed_refetch_of_same_region_keeps_list() {
        let mut app = App::new();
        app.select_region("SP");
        let seq = last_place_seq(&app.take_requests());
        app.apply_outcome(places_outcome("SP", seq, &["Santos"]));

        app.select_region("SP");
        let seq = last_place_seq(&app.take_requests());
        app.apply_outcome(FetchOutcome::Places {
            region: "SP".to_string(),
            seq,
            result: Err(DirectoryError::Status(500)),
        });

        assert_eq!(app.places, vec!["Santos"]);
    }

    #[test]
    fn test_pick_city_while_new_region_is_loading() {
        let mut app = App::new();
        app.select_region("SP");
        let seq = last_place_seq(&app.take_requests());
        app.apply_outcome(places_outcome("SP", seq, &["Santos"]));

        app.select_region("RJ");
        assert!(app.places_loading);
        assert!(app.places.is_empty());

        app.open_picker(PickerKind::Place);
        app.move_picker_cursor(1);
        app.pick_current();
        app.confirm();
        assert_eq!(app.take_destination(), Some(Destination::new("RJ", "")));
    }

    #[test]
    fn test_empty_region_failure_is_silent() {
        let mut app = App::new();
        app.take_requests();
        app.apply_outcome(FetchOutcome::Places {
            region: String::new(),
            seq: 1,
            result: Err(DirectoryError::Status(404)),
        });
        assert!(app.status_message.is_none());
        assert!(!app.places_loading);
    }

    #[test]
    fn test_confirm_with_empty_selections() {
        let mut app = App::new();
        app.confirm();
        assert_eq!(app.take_destination(), Some(Destination::new("", "")));
        assert!(app.take_destination().is_none());
    }

    #[test]
    fn test_confirm_with_selections() {
        let mut app = App::new();
        app.select_region("MG");
        app.select_place("Uberlândia");
        app.confirm();
        assert_eq!(app.take_destination(), Some(Destination::new("MG", "Uberlândia")));
    }

    #[test]
    fn test_confirm_before_any_lookup_resolves() {
        let mut app = App::new();
        assert!(app.regions_loading && app.places_loading);
        app.confirm();
        assert!(app.take_destination().is_some());
    }

    #[test]
    fn test_focus_cycles() {
        let mut app = App::default();
        app.focus_next();
        assert_eq!(app.focus, Focus::Place);
        app.focus_next();
        assert_eq!(app.focus, Focus::Confirm);
        app.focus_next();
        assert_eq!(app.focus, Focus::Region);
        app.focus_previous();
        assert_eq!(app.focus, Focus::Confirm);
    }

    #[test]
    fn test_open_picker_highlights_current_value() {
        let mut app = App::default();
        app.regions = vec!["AC".to_string(), "RJ".to_string(), "SP".to_string()];
        app.select_region("RJ");
        app.open_picker(PickerKind::Region);
        assert_eq!(app.mode, AppMode::Picking(PickerKind::Region));
        assert_eq!(app.picker_cursor, 2);
    }

    #[test]
    fn test_picker_cursor_stops_at_ends() {
        let mut app = App::default();
        app.regions = vec!["AC".to_string(), "RJ".to_string()];
        app.open_picker(PickerKind::Region);
        app.move_picker_cursor(-1);
        assert_eq!(app.picker_cursor, 0);
        app.move_picker_cursor(10);
        assert_eq!(app.picker_cursor, 2);
        app.picker_cursor = 0;
        app.picker_cursor_to_end();
        assert_eq!(app.picker_cursor, 2);
    }

    #[test]
    fn test_pick_region_queues_lookup() {
        let mut app = App::new();
        app.take_requests();
        app.regions = vec!["AC".to_string(), "RJ".to_string(), "SP".to_string()];
        app.open_picker(PickerKind::Region);
        app.move_picker_cursor(3);
        app.pick_current();
        assert_eq!(app.selected_region, "SP");
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(
            app.take_requests(),
            vec![FetchRequest::Places { region: "SP".to_string(), seq: 2 }]
        );
    }

    #[test]
    fn test_pick_placeholder_clears_selection() {
        let mut app = App::default();
        app.places = vec!["Santos".to_string()];
        app.select_place("Santos");
        app.open_picker(PickerKind::Place);
        app.move_picker_cursor(-1);
        app.pick_current();
        assert!(app.selected_place.is_empty());
    }

    #[test]
    fn test_places_shrinking_clamps_open_picker() {
        let mut app = App::new();
        app.select_region("SP");
        let seq = last_place_seq(&app.take_requests());
        app.apply_outcome(places_outcome("SP", seq, &["Santos", "Campinas", "Sorocaba"]));
        app.open_picker(PickerKind::Place);
        app.picker_cursor_to_end();

        assert_eq!(app.picker_cursor, 3);

        app.select_region("AC");
        assert_eq!(app.picker_cursor, 0);
        let seq = last_place_seq(&app.take_requests());
        app.apply_outcome(places_outcome("AC", seq, &["Rio Branco"]));
        app.move_picker_cursor(5);
        assert_eq!(app.picker_cursor, 1);
    }

    #[test]
    fn test_loading_message() {
        let mut app = App::new();
        assert_eq!(app.loading_message(), Some("Loading states and cities…"));
        app.apply_outcome(FetchOutcome::Regions(Ok(Vec::new())));
        assert_eq!(app.loading_message(), Some("Loading cities…"));
        app.apply_outcome(places_outcome("", 1, &[]));
        assert_eq!(app.loading_message(), None);
    }

    #[test]
    fn test_help_mode_transitions() {
        let mut app = App::default();
        app.help_scroll = 4;
        app.open_help();
        assert_eq!(app.mode, AppMode::Help);
        assert_eq!(app.help_scroll, 0);
        app.close_help();
        assert_eq!(app.mode, AppMode::Normal);
    }
}
