use filterpane::config::FilterOptions;
use filterpane::ui::app::{App, PanelPreference, PanelSource};
use filterpane::ui::filter::FilterSelection;
use filterpane::ui::panel::PanelIntent;
use filterpane::ui::sheet::{SheetCloseReason, SheetIntent};
use std::sync::{Arc, Mutex};

fn make_app() -> App {
    App::new(FilterOptions::default(), PanelPreference::Auto)
}

fn record_changes(app: &mut App) -> Arc<Mutex<Vec<(PanelSource, FilterSelection)>>> {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    app.set_on_change(Arc::new(move |source, selection| {
        sink.lock().unwrap().push((source, selection.clone()));
    }));
    log
}

fn record_closes(app: &mut App) -> Arc<Mutex<Vec<SheetCloseReason>>> {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    app.set_on_sheet_close(Arc::new(move |reason| {
        sink.lock().unwrap().push(reason);
    }));
    log
}

fn steps(from: usize, to: usize) -> Vec<PanelIntent> {
    if to >= from {
        (from..to).map(|_| PanelIntent::MoveDown).collect()
    } else {
        (to..from).map(|_| PanelIntent::MoveUp).collect()
    }
}

/// Moves the sidebar cursor to the given row and activates it.
fn activate_sidebar_row(app: &mut App, row: usize) {
    let moves = steps(app.sidebar().cursor, row);
    for intent in moves {
        app.dispatch_sidebar(intent);
    }
    app.dispatch_sidebar(PanelIntent::Activate);
}

/// Same, but through the open sheet's staged panel.
fn activate_sheet_row(app: &mut App, row: usize) {
    let cursor = app.sheet().panel().expect("sheet open").cursor;
    for intent in steps(cursor, row) {
        app.dispatch_sheet(SheetIntent::Panel { intent });
    }
    app.dispatch_sheet(SheetIntent::Panel {
        intent: PanelIntent::Activate,
    });
}

// Stock row order: categories 0..=3, price 4, sizes 5..=10,
// colors 11..=16, ratings 17..=20.

#[test]
fn sidebar_session_then_clear_all_returns_to_initial() {
    let mut app = make_app();

    activate_sidebar_row(&mut app, 7); // size "M"
    activate_sidebar_row(&mut app, 11); // color "Black"
    activate_sidebar_row(&mut app, 17); // 4 stars and up
    app.dispatch_sidebar(PanelIntent::SetPriceMax { value: 250 });

    let selection = &app.sidebar().selection;
    assert_eq!(selection.sizes, vec!["M".to_string()]);
    assert_eq!(selection.colors, vec!["Black".to_string()]);
    assert_eq!(selection.rating_min, Some(4));
    assert_eq!(selection.price.max, 250);
    assert_eq!(selection.active_count(), 4);

    app.dispatch_sidebar(PanelIntent::ClearAll);
    assert!(app.sidebar().selection.is_empty());
    assert_eq!(app.sidebar().selection, FilterSelection::default());
}

#[test]
fn change_hook_reports_every_mutation_in_order() {
    let mut app = make_app();
    let changes = record_changes(&mut app);

    activate_sidebar_row(&mut app, 7);
    activate_sidebar_row(&mut app, 11);
    activate_sidebar_row(&mut app, 17);
    app.dispatch_sidebar(PanelIntent::SetPriceMax { value: 250 });
    app.dispatch_sidebar(PanelIntent::ClearAll);

    let changes = changes.lock().unwrap();
    let counts: Vec<usize> = changes
        .iter()
        .map(|(_, selection)| selection.active_count())
        .collect();
    // Cursor movement stays silent; only the five mutations report.
    assert_eq!(counts, vec![1, 2, 3, 4, 0]);
    assert!(changes
        .iter()
        .all(|(source, _)| *source == PanelSource::Sidebar));
}

#[test]
fn sheet_session_stages_applies_and_closes() {
    let mut app = App::new(FilterOptions::default(), PanelPreference::Sheet);
    let changes = record_changes(&mut app);
    let closes = record_closes(&mut app);

    app.open_sheet();
    activate_sheet_row(&mut app, 7); // size "M"
    activate_sheet_row(&mut app, 17); // 4 stars and up
    app.dispatch_sheet(SheetIntent::Panel {
        intent: PanelIntent::SetPriceMax { value: 250 },
    });
    app.dispatch_sheet(SheetIntent::Apply);

    assert!(!app.sheet_is_open());

    let changes = changes.lock().unwrap();
    // Three staged edits, then the apply hands over the final selection.
    assert_eq!(changes.len(), 4);
    let (source, applied) = changes.last().unwrap();
    assert_eq!(*source, PanelSource::Sheet);
    assert_eq!(applied.sizes, vec!["M".to_string()]);
    assert_eq!(applied.rating_min, Some(4));
    assert_eq!(applied.price.max, 250);

    assert_eq!(closes.lock().unwrap().as_slice(), &[SheetCloseReason::Apply]);
}

#[test]
fn sheet_clear_all_reports_reset_and_closes() {
    let mut app = App::new(FilterOptions::default(), PanelPreference::Sheet);
    let changes = record_changes(&mut app);
    let closes = record_closes(&mut app);

    app.open_sheet();
    activate_sheet_row(&mut app, 0);
    activate_sheet_row(&mut app, 7);
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
fn the_two_surfaces_never_share_a_selection() {
    let mut app = make_app();

    activate_sidebar_row(&mut app, 0); // category "Women"

    app.open_sheet();
    activate_sheet_row(&mut app, 1); // category "Men", staged only
    app.dispatch_sheet(SheetIntent::Apply);

    assert_eq!(
        app.sidebar().selection.categories,
        vec!["Women".to_string()]
    );
    assert_eq!(
        app.last_notified().unwrap().1.categories,
        vec!["Men".to_string()]
    );
}

#[test]
fn dismissing_without_applying_discards_the_staging() {
    let mut app = App::new(FilterOptions::default(), PanelPreference::Sheet);
    let closes = record_closes(&mut app);

    app.open_sheet();
    activate_sheet_row(&mut app, 7);
    app.dispatch_sheet(SheetIntent::Dismiss {
        reason: SheetCloseReason::Backdrop,
    });

    app.open_sheet();
    assert!(app.sheet().panel().unwrap().selection.is_empty());
    assert_eq!(
        closes.lock().unwrap().as_slice(),
        &[SheetCloseReason::Backdrop]
    );
}
