use crate::ui::app::{App, Focus, PanelVariant};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_columns, layout_regions};
use crate::ui::products::render_products;
use crate::ui::sheet::render_sheet;
use crate::ui::sidebar::render_sidebar;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.last_notified()), header);

    match app.variant() {
        PanelVariant::Sidebar => {
            let (products_area, sidebar_area) = body_columns(body);
            render_products(
                frame,
                products_area,
                app.products(),
                app.product_scroll(),
                app.focus() == Focus::Products,
            );
            render_sidebar(
                frame,
                sidebar_area,
                app.sidebar(),
                app.focus() == Focus::Sidebar,
            );
        }
        PanelVariant::Sheet => {
            render_products(
                frame,
                body,
                app.products(),
                app.product_scroll(),
                !app.sheet_is_open(),
            );
        }
    }

    frame.render_widget(Footer::new().widget(footer, app.variant()), footer);

    // Overlay goes last so it paints over the product list.
    render_sheet(frame, app.sheet());
}
