use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::config::CELL_WIDTH;
use crate::game::GameSession;
use crate::grid::CellState;
use crate::piece::PieceKind;

// ============================================================================
// Visual Constants
// ============================================================================

const BLOCK_CHAR: &str = "▐▌";
const EMPTY_CHAR: &str = "  ";
const BACKGROUND: Color = Color::Rgb(52, 73, 94);

// ============================================================================
// Color Mapping
// ============================================================================

/// Color per cell value. Index 0 is the empty cell.
pub const COLORS: [Option<Color>; 8] = [
    None,
    Some(Color::Cyan),
    Some(Color::Yellow),
    Some(Color::Magenta),
    Some(Color::Rgb(255, 165, 0)),
    Some(Color::Blue),
    Some(Color::LightGreen),
    Some(Color::Red),
];

pub fn color_for_id(id: u8) -> Option<Color> {
    COLORS.get(id as usize).copied().flatten()
}

pub fn piece_color(kind: PieceKind) -> Color {
    color_for_id(kind.id()).unwrap_or(Color::White)
}

// ============================================================================
// Rendering
// ============================================================================

/// Draws one full frame. Only reads the session.
pub fn render(frame: &mut Frame, game: &GameSession) {
    let area = frame.size();
    render_game(frame, game, area);
    if game.is_game_over() {
        render_game_over(frame, game, area);
    }
}

fn render_game(frame: &mut Frame, game: &GameSession, area: Rect) {
    let grid_display_width = (game.grid.width() as u16 * CELL_WIDTH) + 2;
    let grid_display_height = game.grid.height() as u16 + 2;
    let info_width = 14;
    let total_width = grid_display_width + info_width;
    let total_height = grid_display_height + 2;

    let main_area = centered_rect(total_width, total_height, area);

    let vertical = Layout::vertical([
        Constraint::Length(grid_display_height),
        Constraint::Fill(1),
    ])
    .split(main_area);

    let game_row = vertical[0];

    let horizontal = Layout::horizontal([
        Constraint::Length(grid_display_width),
        Constraint::Length(info_width),
    ])
    .split(game_row);

    render_grid(frame, game, horizontal[0]);
    render_info(frame, game, horizontal[1]);

    let controls_area = Rect {
        x: area.x,
        y: game_row.y + game_row.height,
        width: area.width,
        height: 1,
    };

    if controls_area.y < area.y + area.height {
        let controls = Paragraph::new(Line::from(
            "A/D: Move | S: Drop | W: Rotate | R: Restart | Q/ESC: Quit",
        ))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(controls, controls_area);
    }
}

fn render_grid(frame: &mut Frame, game: &GameSession, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Blockfall ")
        .title_alignment(Alignment::Center);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = game
        .visible_cells()
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|cell| match cell {
                    CellState::Empty => Span::raw(EMPTY_CHAR),
                    CellState::Filled(kind) => Span::styled(
                        BLOCK_CHAR,
                        Style::default().fg(piece_color(*kind)).bg(Color::Black),
                    ),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(BACKGROUND));
    frame.render_widget(paragraph, inner);
}

fn render_info(frame: &mut Frame, game: &GameSession, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Info ")
        .title_alignment(Alignment::Center);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("Score", Style::default().fg(Color::Yellow))),
        Line::from(game.score.to_string()),
        Line::from(""),
        Line::from(Span::styled("Lines", Style::default().fg(Color::Cyan))),
        Line::from(game.lines_cleared.to_string()),
        Line::from(""),
        Line::from(Span::styled("Level", Style::default().fg(Color::Green))),
        Line::from(game.level.to_string()),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

fn render_game_over(frame: &mut Frame, game: &GameSession, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("GAME OVER", Style::default().fg(Color::Red))),
        Line::from(""),
        Line::from(format!("Score: {}", game.score)),
        Line::from(format!("Lines: {}", game.lines_cleared)),
        Line::from(""),
        Line::from(Span::styled(
            "R to restart, ESC to quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Game Over ")
            .title_alignment(Alignment::Center)
            .style(Style::default().bg(Color::Black)),
    );

    let popup_area = centered_rect(28, 9, area);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(paragraph, popup_area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let horizontal = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width.min(area.width)),
        Constraint::Fill(1),
    ])
    .split(area);

    let vertical = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(area.height)),
        Constraint::Fill(1),
    ])
    .split(horizontal[1]);

    vertical[1]
}
