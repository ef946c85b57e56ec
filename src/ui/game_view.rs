use crate::config::AppConfig;
use crate::game::{Board, GameOutcome, GameState, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn player_color(player: Player) -> Color {
    match player {
        Player::A => Color::Blue,
        Player::B => Color::Red,
    }
}

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_pit: usize,
    config: &AppConfig,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(7),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, config, chunks[0]);
    render_board(frame, game_state, selected_pit, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(
    frame: &mut Frame,
    game_state: &GameState,
    config: &AppConfig,
    area: ratatui::layout::Rect,
) {
    let (status, color) = match game_state.outcome() {
        Some(GameOutcome::Winner(player)) => (
            format!("Game Over: {} wins!", config.player_name(player)),
            player_color(player),
        ),
        Some(GameOutcome::Draw) => ("Game Over: it's a draw!".to_string(), Color::White),
        None => {
            let player = game_state.current_player();
            (
                format!("Current Player: {}", config.player_name(player)),
                player_color(player),
            )
        }
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Mancala"));

    frame.render_widget(header, area);
}

/// Board layout matches the physical table: B's store on the left,
/// A's store on the right, B's holes 13..8 across the top (so both rows
/// flow in sowing direction toward their owner's store), A's holes 1..6
/// across the bottom.
fn render_board(
    frame: &mut Frame,
    game_state: &GameState,
    selected_pit: usize,
    area: ratatui::layout::Rect,
) {
    let board = game_state.board();
    let cursor_live = !game_state.is_terminal();
    let mut lines = Vec::new();

    // Index labels over B's row.
    let mut top_labels = vec![Span::raw("      ")];
    for pit in (8..=13).rev() {
        top_labels.push(label_span(pit, cursor_live && pit == selected_pit));
    }
    top_labels.push(Span::raw("      "));
    lines.push(Line::from(top_labels));

    // B's row with B's store at the left edge.
    let mut b_row = vec![store_span(board, Player::B)];
    for pit in (8..=13).rev() {
        b_row.push(hole_span(board, pit, Player::B, cursor_live && pit == selected_pit));
    }
    b_row.push(Span::raw("      "));
    lines.push(Line::from(b_row));

    lines.push(Line::from(""));

    // A's row with A's store at the right edge.
    let mut a_row = vec![Span::raw("      ")];
    for pit in 1..=6 {
        a_row.push(hole_span(board, pit, Player::A, cursor_live && pit == selected_pit));
    }
    a_row.push(store_span(board, Player::A));
    lines.push(Line::from(a_row));

    // Index labels under A's row.
    let mut bottom_labels = vec![Span::raw("      ")];
    for pit in 1..=6 {
        bottom_labels.push(label_span(pit, cursor_live && pit == selected_pit));
    }
    bottom_labels.push(Span::raw("      "));
    lines.push(Line::from(bottom_labels));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn label_span(pit: usize, selected: bool) -> Span<'static> {
    let style = if selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Span::styled(format!("{pit:^5}"), style)
}

fn hole_span(board: &Board, pit: usize, owner: Player, selected: bool) -> Span<'static> {
    let style = if selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(player_color(owner))
    };
    Span::styled(format!("{:^5}", board.get(pit)), style)
}

fn store_span(board: &Board, owner: Player) -> Span<'static> {
    let text = match owner {
        Player::B => format!("{:^5} ", board.get(owner.store())),
        Player::A => format!(" {:^5}", board.get(owner.store())),
    };
    Span::styled(
        text,
        Style::default()
            .fg(player_color(owner))
            .add_modifier(Modifier::BOLD),
    )
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line1 = Line::from("←/→: Select hole  |  Enter: Sow  |  1-6: Jump  |  R: Restart  |  Q: Quit");
    let line2 = Line::from(vec![
        Span::styled(
            "B",
            Style::default()
                .fg(player_color(Player::B))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(": top row, store on the left   "),
        Span::styled(
            "A",
            Style::default()
                .fg(player_color(Player::A))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(": bottom row, store on the right"),
    ]);

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
