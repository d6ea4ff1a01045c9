use crate::game::{Board, Cell, GameEngine, GameStatus, Player, SIZE};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    engine: &GameEngine,
    human_mark: Player,
    agent_name: &str,
    cursor: (usize, usize),
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(11),    // Board
            Constraint::Length(3),  // Message
            Constraint::Length(4),  // Controls
        ])
        .split(frame.area());

    render_header(frame, engine, chunks[0]);
    render_board(frame, engine.board(), cursor, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, human_mark, agent_name, chunks[3]);
}

fn mark_color(player: Player) -> Color {
    match player {
        Player::X => Color::Red,
        Player::O => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, engine: &GameEngine, area: ratatui::layout::Rect) {
    let (status, color) = match engine.status() {
        GameStatus::InProgress => {
            let player = engine.current_player();
            (
                format!("Current Player: {}", player.name()),
                mark_color(player),
            )
        }
        GameStatus::Won(player) => (format!("{} wins!", player.name()), mark_color(player)),
        GameStatus::Draw => ("It's a draw!".to_string(), Color::Gray),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("4x4 Tic Tac Toe"),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    cursor: (usize, usize),
    area: ratatui::layout::Rect,
) {
    let mut lines = Vec::new();

    // Column numbers
    let mut col_line = vec![Span::raw("    ")];
    for col in 0..SIZE {
        if col == cursor.1 {
            col_line.push(Span::styled(
                format!(" {col}  "),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            col_line.push(Span::raw(format!(" {col}  ")));
        }
    }
    lines.push(Line::from(col_line));

    lines.push(Line::from("   ╔═══╦═══╦═══╦═══╗"));

    for row in 0..SIZE {
        let mut row_spans = Vec::new();
        if row == cursor.0 {
            row_spans.push(Span::styled(
                format!(" {row} "),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            row_spans.push(Span::raw(format!(" {row} ")));
        }
        row_spans.push(Span::raw("║"));

        for col in 0..SIZE {
            let cell = board.grid()[row][col];
            let (symbol, color) = match cell {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::X => (" X ", mark_color(Player::X)),
                Cell::O => (" O ", mark_color(Player::O)),
            };

            let mut style = Style::default().fg(color);
            if (row, col) == cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            row_spans.push(Span::styled(symbol, style));
            row_spans.push(Span::raw("║"));
        }
        lines.push(Line::from(row_spans));

        if row < SIZE - 1 {
            lines.push(Line::from("   ╠═══╬═══╬═══╬═══╣"));
        }
    }

    lines.push(Line::from("   ╚═══╩═══╩═══╩═══╝"));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(
    frame: &mut Frame,
    human_mark: Player,
    agent_name: &str,
    area: ratatui::layout::Rect,
) {
    let ai_mark = human_mark.other();
    let line1 = Line::from("Arrows: Move  |  Enter: Place  |  R: Restart  |  Q: Quit");
    let line2 = Line::from(vec![
        Span::raw("You: "),
        Span::styled(
            human_mark.name(),
            Style::default()
                .fg(mark_color(human_mark))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("   {agent_name}: ")),
        Span::styled(
            ai_mark.name(),
            Style::default()
                .fg(mark_color(ai_mark))
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
