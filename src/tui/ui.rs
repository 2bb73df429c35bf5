use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::nav::Nav;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{NavBar, TitleBar};

pub const NAV_BAR_WIDTH: u16 = 30;

const HELP_TEXT: &str = " ↑↓ Move  Enter Select/Toggle  ←→ Collapse/Expand  q Quit ";

pub fn draw_ui(frame: &mut Frame, nav: &Nav, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [title_area, main_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());
    let [nav_area, content_area] =
        Layout::horizontal([Length(NAV_BAR_WIDTH), Min(0)]).areas(main_area);

    TitleBar::new(nav.selected(), tui.last_notification.clone()).render(frame, title_area);
    NavBar::new(nav.rendered(), &mut tui.nav_bar).render(frame, nav_area);
    draw_content(frame, content_area, nav);

    let help = Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, help_area);
}

/// Right-hand pane: what the current selection points at.
fn draw_content(frame: &mut Frame, area: Rect, nav: &Nav) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let selected = nav.selected();
    let lines = match nav.find_item(&selected) {
        Some(item) => vec![
            Line::styled(
                item.label().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::from(format!("data-name: {}", item.name())),
        ],
        None if selected.is_empty() => vec![Line::from("Nothing selected.")],
        None => vec![Line::from(format!("No entry named '{}'.", selected))],
    };

    let content = Paragraph::new(lines)
        .block(block.title(" Content "))
        .alignment(Alignment::Center);
    frame.render_widget(content, area);
}
