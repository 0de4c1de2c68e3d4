//! The UI renders the application state into a menu pane, a page pane and a help bar.
//!
//! The page pane draws the laid-out rows visible at the current scroll offset, with a gutter
//! mark on the tracker's reference line. Rows belonging to an active section and menu links
//! pointing at one are highlighted.

use crate::app_state::AppState;
use crate::dom::NodeId;
use crate::layout::LineKind;
use crate::page::Page;
use crate::tracker::TOP_VALUE;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect as Area},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use std::collections::HashSet;

/// Columns taken by the menu pane, borders included.
pub const MENU_WIDTH: u16 = 24;
/// Columns reserved at the left of the page pane for the reference-line mark.
pub const GUTTER: u16 = 2;

/// Screen regions for one frame.
pub struct Regions {
    /// Menu pane, borders included.
    pub menu: Area,
    /// Page pane, borders included.
    pub page: Area,
    /// Help bar.
    pub help: Area,
}

impl Regions {
    #[must_use]
    /// Splits the terminal area.
    pub fn split(area: Area) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(area);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(MENU_WIDTH), Constraint::Min(0)])
            .split(rows[0]);
        Self {
            menu: columns[0],
            page: columns[1],
            help: rows[1],
        }
    }

    #[must_use]
    /// Menu pane without its border.
    pub fn menu_inner(&self) -> Area {
        Block::default().borders(Borders::ALL).inner(self.menu)
    }

    #[must_use]
    /// Width and height the page text is laid out in.
    pub fn page_text_size(&self) -> (usize, usize) {
        let inner = Block::default().borders(Borders::ALL).inner(self.page);
        (
            usize::from(inner.width.saturating_sub(GUTTER)),
            usize::from(inner.height),
        )
    }
}

/// Renders the whole screen.
pub fn draw(f: &mut Frame, app: &AppState) {
    let regions = Regions::split(f.area());
    draw_menu(f, app, regions.menu);
    draw_page(f, app, regions.page);
    draw_help(f, app, regions.help);
}

fn draw_menu(f: &mut Frame, app: &AppState, area: Area) {
    let items: Vec<ListItem> = app
        .menu_entries()
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            let mut style = if entry.active {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            if i == app.selected_link {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(entry.label).style(style)
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Menu"));
    f.render_widget(list, area);
}

fn active_sections(app: &AppState) -> HashSet<NodeId> {
    app.window
        .navigable_sections()
        .into_iter()
        .filter(|s| app.window.has_marker(*s))
        .collect()
}

fn in_any(app: &AppState, mut node: NodeId, sections: &HashSet<NodeId>) -> bool {
    loop {
        if sections.contains(&node) {
            return true;
        }
        match app.window.document().parent(node) {
            Some(parent) => node = parent,
            None => return false,
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn reference_row(app: &AppState) -> usize {
    (TOP_VALUE / app.window.viewport().row_height).floor() as usize
}

fn draw_page(f: &mut Frame, app: &AppState, area: Area) {
    let active = active_sections(app);
    let first = app.window.first_visible_row();
    let height = app.window.viewport().height;
    let marker_row = reference_row(app);

    let lines: Vec<Line> = app
        .window
        .layout()
        .lines()
        .iter()
        .skip(first)
        .take(height)
        .enumerate()
        .map(|(i, line)| {
            let gutter = if i == marker_row { "▸ " } else { "  " };
            let mut style = match line.kind {
                LineKind::Heading(1) => Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                LineKind::Heading(_) => Style::default().add_modifier(Modifier::BOLD),
                LineKind::Text | LineKind::Blank => Style::default(),
            };
            if in_any(app, line.block, &active) {
                style = style.fg(Color::Green);
            }
            Line::from(vec![
                Span::styled(gutter, Style::default().fg(Color::DarkGray)),
                Span::styled(line.text.clone(), style),
            ])
        })
        .collect();

    let active_ids = app.active_section_ids();
    let title = if active_ids.is_empty() {
        "Page".to_string()
    } else {
        format!("Page ({})", active_ids.join(", "))
    };
    let page = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(page, area);
}

fn draw_help(f: &mut Frame, app: &AppState, area: Area) {
    let help = app.message.clone().unwrap_or_else(|| {
        "↑/↓/PgUp/PgDn/Home/End: Scroll | Tab: Select link | Enter/Click: Go | q: Quit"
            .to_string()
    });
    let help_widget = Paragraph::new(help).block(Block::default().borders(Borders::ALL));
    f.render_widget(help_widget, area);
}
