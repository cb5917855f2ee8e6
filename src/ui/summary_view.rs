use crate::game::Summary;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// End-of-game screen: result a third of the way down, final scores at the
/// middle.
pub fn render(frame: &mut Frame, summary: &Summary) {
    let area = frame.area();
    frame.render_widget(Block::default().borders(Borders::ALL).title("SOS"), area);

    let headline = Paragraph::new(summary.headline())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(headline, text_row(area, area.height / 3));

    let scores = Paragraph::new(summary.scores_line()).alignment(Alignment::Center);
    frame.render_widget(scores, text_row(area, area.height / 2));

    let hint = Paragraph::new("Press Q to quit")
        .style(Style::default().add_modifier(Modifier::DIM))
        .alignment(Alignment::Center);
    frame.render_widget(hint, text_row(area, area.height.saturating_sub(2)));
}

/// A one-line strip inside the border at `offset` rows from the top of `area`.
fn text_row(area: Rect, offset: u16) -> Rect {
    let inner_width = area.width.saturating_sub(2);
    let y = area.y + offset.min(area.height.saturating_sub(1));
    Rect::new(area.x + 1, y, inner_width, 1).intersection(area)
}
