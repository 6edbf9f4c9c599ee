use super::board_view::BoardView;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    view: &BoardView,
    palette: &[Color; 2],
    current: Option<(&str, Color)>,
    selected_column: usize,
    message: Option<&str>,
) {
    let board_height = u16::try_from(view.height())
        .unwrap_or(u16::MAX)
        .saturating_add(4);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                     // Header
            Constraint::Min(board_height),             // Board
            Constraint::Length(3),                     // Message
            Constraint::Length(3),                     // Controls
        ])
        .split(frame.area());

    render_header(frame, current, chunks[0]);
    render_board(frame, view, palette, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, current: Option<(&str, Color)>, area: ratatui::layout::Rect) {
    let (status, color) = match current {
        Some((label, color)) => (format!("Current Player: {label}"), color),
        None => ("Game Over".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    view: &BoardView,
    palette: &[Color; 2],
    selected_column: usize,
    area: ratatui::layout::Rect,
) {
    let width = view.width();
    let rule = "═".repeat(width * 3 + 1);
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..width {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..view.height() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..width {
            let span = match view.piece(row, col) {
                None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                Some(player) => {
                    let mut style = Style::default().fg(palette[player.index()]);
                    if view.is_highlighted(row, col) {
                        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                    }
                    Span::styled(" ● ", style)
                }
            };
            row_spans.push(span);
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..width {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: ratatui::layout::Rect) {
    let text = message.unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let controls = Paragraph::new(Line::from(
        "←/→: Move  |  Enter: Drop  |  R: Restart  |  Q: Quit",
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Controls"),
    );

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{DropOutcome, Placement, PlayerIndex};
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_shows_current_player_and_pieces() {
        let mut view = BoardView::new(6, 7);
        view.apply(&DropOutcome::Placed {
            placement: Placement {
                row: 5,
                column: 0,
                player: PlayerIndex::First,
            },
            next_player: PlayerIndex::Second,
        });
        let palette = [Color::Red, Color::Yellow];

        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal
            .draw(|f| {
                render(
                    f,
                    &view,
                    &palette,
                    Some(("yellow", Color::Yellow)),
                    3,
                    Some("hello"),
                )
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Current Player: yellow"));
        assert!(text.contains("●"));
        assert!(text.contains("hello"));
    }

    #[test]
    fn test_render_game_over_header() {
        let view = BoardView::new(4, 4);
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|f| render(f, &view, &[Color::Red, Color::Blue], None, 0, None))
            .unwrap();
        assert!(buffer_text(&terminal).contains("Game Over"));
    }

    #[test]
    fn test_render_tall_board_in_small_terminal() {
        let view = BoardView::new(65535, 1);
        let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
        terminal
            .draw(|f| render(f, &view, &[Color::Red, Color::Yellow], None, 0, None))
            .unwrap();
        assert!(buffer_text(&terminal).contains("Connect Four"));
    }
}
