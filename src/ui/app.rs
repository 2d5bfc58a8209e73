use crate::catalog::{Product, DEMO_PRODUCTS};
use crate::config::FilterOptions;
use crate::ui::filter::FilterSelection;
use crate::ui::layout::SHEET_BREAKPOINT_COLS;
use crate::ui::mvi::Reducer;
use crate::ui::panel::{PanelIntent, PanelReducer, PanelState};
use crate::ui::sheet::{SheetCloseReason, SheetIntent, SheetReducer, SheetState};
use std::sync::Arc;

/// Which filter surface the app mounts.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PanelPreference {
    /// Decide per frame from the terminal width.
    Auto,
    Sidebar,
    Sheet,
}

/// The surface the current frame actually renders.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PanelVariant {
    Sidebar,
    Sheet,
}

/// Which filter instance produced a change notification.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PanelSource {
    Sidebar,
    Sheet,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Products,
    Sidebar,
}

/// Called after every dispatch that changed a filter selection, with the
/// instance it came from and the selection that resulted.
pub type FilterChangeHook = Arc<dyn Fn(PanelSource, &FilterSelection) + Send + Sync>;

/// Called when the bottom sheet goes away, with what triggered it.
pub type SheetCloseHook = Arc<dyn Fn(SheetCloseReason) + Send + Sync>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    preference: PanelPreference,
    size: Option<(u16, u16)>,
    /// Options every panel instance is built over.
    options: FilterOptions,
    products: Vec<Product>,
    product_scroll: usize,
    /// The permanent sidebar panel (MVI pattern).
    sidebar: PanelState,
    /// The bottom sheet with its staged panel (MVI pattern).
    sheet: SheetState,
    on_change: Option<FilterChangeHook>,
    on_sheet_close: Option<SheetCloseHook>,
    /// Latest change-hook payload, mirrored for the header.
    last_notified: Option<(PanelSource, FilterSelection)>,
}

impl App {
    pub fn new(options: FilterOptions, preference: PanelPreference) -> Self {
        let sidebar = PanelState::new(options.clone());
        Self {
            should_quit: false,
            focus: Focus::Products,
            preference,
            size: None,
            options,
            products: DEMO_PRODUCTS.to_vec(),
            product_scroll: 0,
            sidebar,
            sheet: SheetState::default(),
            on_change: None,
            on_sheet_close: None,
            last_notified: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        // The sidebar may have just left the screen.
        if self.focus == Focus::Sidebar && self.variant() != PanelVariant::Sidebar {
            self.focus = Focus::Products;
        }
    }

    /// The surface this frame renders, from the preference and the last
    /// known terminal width. An unknown width counts as wide.
    pub fn variant(&self) -> PanelVariant {
        match self.preference {
            PanelPreference::Sidebar => PanelVariant::Sidebar,
            PanelPreference::Sheet => PanelVariant::Sheet,
            PanelPreference::Auto => {
                let wide = self
                    .size
                    .map_or(true, |(cols, _)| cols >= SHEET_BREAKPOINT_COLS);
                if wide {
                    PanelVariant::Sidebar
                } else {
                    PanelVariant::Sheet
                }
            }
        }
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn focus_products(&mut self) {
        self.focus = Focus::Products;
    }

    /// Move focus into the sidebar. Fails when the sidebar is not on
    /// screen in the current variant.
    pub fn focus_sidebar(&mut self) -> bool {
        if self.variant() != PanelVariant::Sidebar {
            return false;
        }
        self.focus = Focus::Sidebar;
        true
    }

    pub fn toggle_focus(&mut self) {
        match self.focus {
            Focus::Products => {
                let _ = self.focus_sidebar();
            }
            Focus::Sidebar => self.focus = Focus::Products,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product_scroll(&self) -> usize {
        self.product_scroll
    }

    pub fn scroll_products(&mut self, delta: i32) {
        let max = self.products.len().saturating_sub(1) as i64;
        let next = (self.product_scroll as i64 + i64::from(delta)).clamp(0, max);
        self.product_scroll = next as usize;
    }

    pub fn last_notified(&self) -> Option<&(PanelSource, FilterSelection)> {
        self.last_notified.as_ref()
    }

    pub fn set_on_change(&mut self, hook: FilterChangeHook) {
        self.on_change = Some(hook);
    }

    pub fn set_on_sheet_close(&mut self, hook: SheetCloseHook) {
        self.on_sheet_close = Some(hook);
    }

    // ========================================================================
    // Sidebar panel methods (MVI pattern)
    // ========================================================================

    pub fn sidebar(&self) -> &PanelState {
        &self.sidebar
    }

    /// Dispatch an intent to the sidebar panel reducer.
    pub fn dispatch_sidebar(&mut self, intent: PanelIntent) {
        let before = self.sidebar.selection.clone();
        dispatch_mvi!(self, sidebar, PanelReducer, intent);
        if self.sidebar.selection != before {
            let after = self.sidebar.selection.clone();
            self.notify_change(PanelSource::Sidebar, after);
        }
    }

    // ========================================================================
    // Bottom sheet methods (MVI pattern)
    // ========================================================================

    pub fn sheet(&self) -> &SheetState {
        &self.sheet
    }

    pub fn sheet_is_open(&self) -> bool {
        self.sheet.is_visible()
    }

    /// Open the bottom sheet with a fresh panel over the configured
    /// options.
    pub fn open_sheet(&mut self) {
        self.dispatch_sheet(SheetIntent::Open {
            options: self.options.clone(),
        });
    }

    /// Dispatch an intent to the sheet reducer, firing whatever hooks the
    /// intent implies. Payloads are captured from the staged panel before
    /// the reducer discards it.
    pub fn dispatch_sheet(&mut self, intent: SheetIntent) {
        let staged = self.sheet.panel().map(|panel| panel.selection.clone());
        let edits_panel = matches!(intent, SheetIntent::Panel { .. });
        let close_reason = match &intent {
            SheetIntent::Apply => Some(SheetCloseReason::Apply),
            SheetIntent::ClearAll => Some(SheetCloseReason::ClearAll),
            SheetIntent::Dismiss { reason } => Some(*reason),
            SheetIntent::Open { .. } | SheetIntent::Panel { .. } => None,
        };

        dispatch_mvi!(self, sheet, SheetReducer, intent);

        if edits_panel {
            let after = self.sheet.panel().map(|panel| panel.selection.clone());
            if let (Some(before), Some(after)) = (staged, after) {
                if after != before {
                    self.notify_change(PanelSource::Sheet, after);
                }
            }
            return;
        }

        let Some(reason) = close_reason else {
            return;
        };
        // A sheet that was never open has nothing to close.
        let Some(before) = staged else {
            return;
        };
        match reason {
            SheetCloseReason::Apply => {
                self.notify_change(PanelSource::Sheet, before);
            }
            SheetCloseReason::ClearAll => {
                let cleared = FilterSelection::new(before.price_ceiling);
                if cleared != before {
                    self.notify_change(PanelSource::Sheet, cleared);
                }
            }
            SheetCloseReason::Backdrop | SheetCloseReason::CloseButton => {}
        }
        self.notify_sheet_closed(reason);
    }

    fn notify_change(&mut self, source: PanelSource, selection: FilterSelection) {
        tracing::debug!(
            ?source,
            active = selection.active_count(),
            max_price = selection.price.max,
            "filter selection changed"
        );
        if let Some(hook) = &self.on_change {
            hook(source, &selection);
        }
        self.last_notified = Some((source, selection));
    }

    fn notify_sheet_closed(&mut self, reason: SheetCloseReason) {
        tracing::debug!(?reason, "bottom sheet closed");
        if let Some(hook) = &self.on_sheet_close {
            hook(reason);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn make_app() -> App {
        App::new(FilterOptions::default(), PanelPreference::Auto)
    }

    fn change_log(app: &mut App) -> Arc<Mutex<Vec<(PanelSource, FilterSelection)>>> {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        app.set_on_change(Arc::new(move |source, selection| {
            sink.lock().unwrap().push((source, selection.clone()));
        }));
        log
    }

    fn close_log(app: &mut App) -> Arc<Mutex<Vec<SheetCloseReason>>> {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        app.set_on_sheet_close(Arc::new(move |reason| {
            sink.lock().unwrap().push(reason);
        }));
        log
    }

    // -- variant selection ------------------------------------------------

    #[test]
    fn width_picks_the_surface_when_auto() {
        let mut app = make_app();
        assert_eq!(app.variant(), PanelVariant::Sidebar);
        app.on_resize(80, 30);
        assert_eq!(app.variant(), PanelVariant::Sheet);
        app.on_resize(120, 30);
        assert_eq!(app.variant(), PanelVariant::Sidebar);
    }

    #[test]
    fn forced_preference_ignores_width() {
        let mut app = App::new(FilterOptions::default(), PanelPreference::Sheet);
        app.on_resize(200, 50);
        assert_eq!(app.variant(), PanelVariant::Sheet);
    }

    #[test]
    fn narrowing_moves_focus_off_the_sidebar() {
        let mut app = make_app();
        app.on_resize(120, 40);
        assert!(app.focus_sidebar());
        app.on_resize(60, 40);
        assert_eq!(app.focus(), Focus::Products);
    }

    #[test]
    fn sidebar_focus_refused_in_sheet_variant() {
        let mut app = make_app();
        app.on_resize(60, 40);
        assert!(!app.focus_sidebar());
        assert_eq!(app.focus(), Focus::Products);
    }

    // -- change hook, sidebar ---------------------------------------------

    #[test]
    fn sidebar_mutation_fires_the_change_hook() {
        let mut app = make_app();
        let changes = change_log(&mut app);

        app.dispatch_sidebar(PanelIntent::MoveDown);
        app.dispatch_sidebar(PanelIntent::Activate);

        let changes = changes.lock().unwrap();
        assert_eq!(changes.len(), 1);
        let (source, selection) = &changes[0];
        assert_eq!(*source, PanelSource::Sidebar);
        assert_eq!(selection.categories, vec!["Men".to_string()]);
    }

    #[test]
    fn navigation_alone_stays_silent() {
        let mut app = make_app();
        let changes = change_log(&mut app);

        app.dispatch_sidebar(PanelIntent::MoveDown);
        app.dispatch_sidebar(PanelIntent::MoveUp);

        assert!(changes.lock().unwrap().is_empty());
    }

    #[test]
    fn header_mirror_tracks_the_latest_notification() {
        let mut app = make_app();
        assert!(app.last_notified().is_none());
        app.dispatch_sidebar(PanelIntent::Activate);
        let (source, selection) = app.last_notified().unwrap();
        assert_eq!(*source, PanelSource::Sidebar);
        assert_eq!(selection.active_count(), 1);
    }

    // -- change and close hooks, sheet ------------------------------------

    #[test]
    fn sheet_edits_notify_with_the_sheet_source() {
        let mut app = make_app();
        let changes = change_log(&mut app);

        app.open_sheet();
        app.dispatch_sheet(SheetIntent::Panel {
            intent: PanelIntent::Activate,
        });

        let changes = changes.lock().unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].0, PanelSource::Sheet);
    }

    #[test]
    fn sheet_edits_leave_the_sidebar_alone() {
        let mut app = make_app();
        app.open_sheet();
        app.dispatch_sheet(SheetIntent::Panel {
            intent: PanelIntent::Activate,
        });
        assert!(app.sidebar().selection.is_empty());
    }

    #[test]
    fn apply_reports_the_staged_selection_then_closes() {
        let mut app = make_app();
        let changes = change_log(&mut app);
        let closes = close_log(&mut app);

        app.open_sheet();
        app.dispatch_sheet(SheetIntent::Panel {
            intent: PanelIntent::Activate,
        });
        app.dispatch_sheet(SheetIntent::Apply);

        assert!(!app.sheet_is_open());
        let changes = changes.lock().unwrap();
        assert_eq!(changes.len(), 2);
        assert_eq!(
            changes[1].1.categories,
            vec!["Women".to_string()],
            "apply must deliver the staged selection"
        );
        assert_eq!(closes.lock().unwrap().as_slice(), &[SheetCloseReason::Apply]);
    }

    #[test]
    fn clear_all_reports_a_reset_selection_then_closes() {
        let mut app = make_app();
        let changes = change_log(&mut app);
        let closes = close_log(&mut app);

        app.open_sheet();
        app.dispatch_sheet(SheetIntent::Panel {
            intent: PanelIntent::Activate,
        });
        app.dispatch_sheet(SheetIntent::ClearAll);

        assert!(!app.sheet_is_open());
        let changes = changes.lock().unwrap();
        assert!(changes.last().unwrap().1.is_empty());
        assert_eq!(
            closes.lock().unwrap().as_slice(),
            &[SheetCloseReason::ClearAll]
        );
    }

    #[test]
    fn clear_all_on_untouched_sheet_skips_the_change_hook() {
        let mut app = make_app();
        let changes = change_log(&mut app);
        let closes = close_log(&mut app);

        app.open_sheet();
        app.dispatch_sheet(SheetIntent::ClearAll);

        assert!(changes.lock().unwrap().is_empty());
        assert_eq!(
            closes.lock().unwrap().as_slice(),
            &[SheetCloseReason::ClearAll]
        );
    }

    #[test]
    fn plain_dismissals_close_without_a_change() {
        let mut app = make_app();
        let changes = change_log(&mut app);
        let closes = close_log(&mut app);

        app.open_sheet();
        app.dispatch_sheet(SheetIntent::Panel {
            intent: PanelIntent::Activate,
        });
        app.dispatch_sheet(SheetIntent::Dismiss {
            reason: SheetCloseReason::Backdrop,
        });

        assert!(!app.sheet_is_open());
        // Only the toggle notified, not the dismissal.
        assert_eq!(changes.lock().unwrap().len(), 1);
        assert_eq!(
            closes.lock().unwrap().as_slice(),
            &[SheetCloseReason::Backdrop]
        );
    }

    #[test]
    fn dismissing_a_hidden_sheet_fires_nothing() {
        let mut app = make_app();
        let closes = close_log(&mut app);
        app.dispatch_sheet(SheetIntent::Dismiss {
            reason: SheetCloseReason::CloseButton,
        });
        assert!(closes.lock().unwrap().is_empty());
    }

    #[test]
    fn reopening_the_sheet_starts_from_scratch() {
        let mut app = make_app();
        app.open_sheet();
        app.dispatch_sheet(SheetIntent::Panel {
            intent: PanelIntent::Activate,
        });
        app.dispatch_sheet(SheetIntent::Dismiss {
            reason: SheetCloseReason::Backdrop,
        });
        app.open_sheet();
        assert!(app.sheet().panel().unwrap().selection.is_empty());
    }

    // -- product list -----------------------------------------------------

    #[test]
    fn product_scroll_clamps_to_the_list() {
        let mut app = make_app();
        app.scroll_products(-3);
        assert_eq!(app.product_scroll(), 0);
        app.scroll_products(100);
        assert_eq!(app.product_scroll(), app.products().len() - 1);
    }
}
