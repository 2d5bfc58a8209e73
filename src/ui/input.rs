use crate::ui::app::{App, Focus, PanelVariant};
use crate::ui::layout::sheet_rect;
use crate::ui::panel::PanelIntent;
use crate::ui::sheet::{SheetCloseReason, SheetIntent};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

/// Dollars moved per arrow press on the price row.
const PRICE_STEP: i64 = 10;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || key.code == KeyCode::Char('q') {
        app.request_quit();
        return;
    }

    // An open sheet swallows everything below this point.
    if app.sheet_is_open() {
        handle_sheet_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('f') => match app.variant() {
            PanelVariant::Sidebar => {
                let _ = app.focus_sidebar();
            }
            PanelVariant::Sheet => app.open_sheet(),
        },
        KeyCode::Tab => app.toggle_focus(),
        _ => match app.focus() {
            Focus::Products => handle_products_key(app, key),
            Focus::Sidebar => handle_sidebar_key(app, key),
        },
    }
}

/// Left clicks on the dimmed area around an open sheet dismiss it.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if !app.sheet_is_open() {
        return;
    }
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return;
    }
    let Some((cols, rows)) = app.size() else {
        return;
    };
    let sheet = sheet_rect(Rect::new(0, 0, cols, rows));
    if !sheet.contains(Position::new(mouse.column, mouse.row)) {
        app.dispatch_sheet(SheetIntent::Dismiss {
            reason: SheetCloseReason::Backdrop,
        });
    }
}

fn handle_products_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.scroll_products(-1),
        KeyCode::Down => app.scroll_products(1),
        _ => {}
    }
}

fn handle_sidebar_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.dispatch_sidebar(PanelIntent::MoveUp),
        KeyCode::Down => app.dispatch_sidebar(PanelIntent::MoveDown),
        KeyCode::Char(' ') | KeyCode::Enter => app.dispatch_sidebar(PanelIntent::Activate),
        KeyCode::Left => app.dispatch_sidebar(PanelIntent::AdjustPrice { delta: -PRICE_STEP }),
        KeyCode::Right => app.dispatch_sidebar(PanelIntent::AdjustPrice { delta: PRICE_STEP }),
        KeyCode::Char('c') => app.dispatch_sidebar(PanelIntent::ClearAll),
        KeyCode::Esc => app.focus_products(),
        _ => {}
    }
}

fn handle_sheet_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.dispatch_sheet(SheetIntent::Panel {
            intent: PanelIntent::MoveUp,
        }),
        KeyCode::Down => app.dispatch_sheet(SheetIntent::Panel {
            intent: PanelIntent::MoveDown,
        }),
        KeyCode::Char(' ') | KeyCode::Enter => app.dispatch_sheet(SheetIntent::Panel {
            intent: PanelIntent::Activate,
        }),
        KeyCode::Left => app.dispatch_sheet(SheetIntent::Panel {
            intent: PanelIntent::AdjustPrice { delta: -PRICE_STEP },
        }),
        KeyCode::Right => app.dispatch_sheet(SheetIntent::Panel {
            intent: PanelIntent::AdjustPrice { delta: PRICE_STEP },
        }),
        KeyCode::Char('a') => app.dispatch_sheet(SheetIntent::Apply),
        KeyCode::Char('c') => app.dispatch_sheet(SheetIntent::ClearAll),
        KeyCode::Esc | KeyCode::Char('x') => app.dispatch_sheet(SheetIntent::Dismiss {
            reason: SheetCloseReason::CloseButton,
        }),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
