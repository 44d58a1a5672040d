use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{
    Compare, Detail, FavoritesPanel, FilterBar, TitleBar, ToolList, filter_bar_height,
};
use crate::tui::{InputMode, Overlay, TuiState};

fn footer_text(tui: &TuiState, app: &App) -> &'static str {
    if tui.input_mode == InputMode::Search {
        return " Type to search  Enter/Esc Done ";
    }
    if app.compare_mode {
        " Enter/Space Pick  v View  x Clear  m Leave compare  f Fav  q Quit "
    } else {
        " / Search  c Category  p Price  s Sort  r Reset  Enter Details  f Fav  F Favorites  m Compare  q Quit "
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let visible = app.visible();
    let featured = if app.filter.is_unfiltered() && !app.compare_mode {
        app.catalog.featured(tui.featured_count)
    } else {
        Vec::new()
    };

    let layout = Layout::vertical([
        Length(1),
        Length(filter_bar_height(!featured.is_empty())),
        Min(0),
        Length(1),
    ]);
    let [title_area, filter_area, list_area, footer_area] = layout.areas(frame.area());

    TitleBar {
        visible_count: visible.len(),
        total_count: app.catalog.len(),
        free_count: app.catalog.free_count(),
        compare_picked: app.compare_mode.then(|| app.selection.len()),
        status_message: app.status_message.clone(),
    }
    .render(frame, title_area);

    FilterBar {
        filter: &app.filter,
        searching: tui.input_mode == InputMode::Search,
        featured: &featured,
    }
    .render(frame, filter_area);

    ToolList {
        records: &visible,
        state: &mut tui.tool_list,
        favorites: &app.favorites,
        selection: &app.selection,
        compare_mode: app.compare_mode,
        loading: !app.catalog_loaded,
    }
    .render(frame, list_area);

    frame.render_widget(
        Line::from(Span::styled(
            footer_text(tui, app),
            Style::default().fg(Color::DarkGray),
        )),
        footer_area,
    );

    let area = frame.area();
    match &mut tui.overlay {
        Some(Overlay::Detail(state)) => {
            if let Some(record) = app.catalog.get(state.id) {
                Detail {
                    record,
                    favorited: app.favorites.contains(record.id),
                    state,
                }
                .render(frame, area);
            }
        }
        Some(Overlay::Compare) => {
            let records = app.selected_records();
            Compare { records: &records }.render(frame, area);
        }
        Some(Overlay::Favorites(state)) => {
            let records = app.favorite_records();
            FavoritesPanel {
                state,
                records: &records,
            }
            .render(frame, area);
        }
        None => {}
    }

    if let Some(toast) = tui.toast.as_mut() {
        toast.render(frame, list_area);
    }
}
