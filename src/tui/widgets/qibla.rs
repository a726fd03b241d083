use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::tui::theme;
use crate::utils::format::cardinal_name;

const GRID_WIDTH: usize = 25;
const GRID_HEIGHT: usize = 11;

pub fn render(frame: &mut Frame, area: Rect, bearing: u16) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(16), // compass face + badge
            Constraint::Min(0),     // how-to card
        ])
        .split(area);

    draw_compass(frame, chunks[0], bearing);
    draw_howto(frame, chunks[1]);
}

fn draw_compass(frame: &mut Frame, area: Rect, bearing: u16) {
    let block = Block::default()
        .title(Span::styled(" Qibla Direction ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(ratatui::style::Style::default().fg(theme::BORDER))
        .style(theme::surface());

    let mut lines = vec![Line::from(Span::styled(
        "Point yourself towards the Kaaba",
        theme::dim(),
    ))];
    for row in compass_grid(bearing) {
        lines.push(grid_line(&row));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("◆ ", theme::amber()),
        Span::styled(
            format!("{}°", bearing),
            theme::gold().add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}", cardinal_name(bearing)), theme::emerald()),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Character-cell compass face: a dotted ring with cardinal points and
/// a marker at the qibla bearing. Terminal cells are about twice as
/// tall as wide, so the vertical radius is halved.
fn compass_grid(bearing: u16) -> Vec<Vec<char>> {
    let mut grid = vec![vec![' '; GRID_WIDTH]; GRID_HEIGHT];
    let cx = (GRID_WIDTH / 2) as f64;
    let cy = (GRID_HEIGHT / 2) as f64;
    let rx = cx - 1.0;
    let ry = cy;

    let plot = |grid: &mut Vec<Vec<char>>, degrees: f64, c: char| {
        let rad = degrees.to_radians();
        let x = (cx + rx * rad.sin()).round() as usize;
        let y = (cy - ry * rad.cos()).round() as usize;
        if y < GRID_HEIGHT && x < GRID_WIDTH {
            grid[y][x] = c;
        }
    };

    for deg in (0..360).step_by(15) {
        plot(&mut grid, deg as f64, '·');
    }
    plot(&mut grid, 0.0, 'N');
    plot(&mut grid, 90.0, 'E');
    plot(&mut grid, 180.0, 'S');
    plot(&mut grid, 270.0, 'W');
    plot(&mut grid, f64::from(bearing), '◆');

    grid[cy as usize][cx as usize] = '+';
    grid
}

fn grid_line(row: &[char]) -> Line<'static> {
    let spans = row
        .iter()
        .map(|&c| match c {
            '◆' => Span::styled("◆", theme::amber().add_modifier(Modifier::BOLD)),
            'N' | 'E' | 'S' | 'W' => Span::styled(c.to_string(), theme::emerald()),
            '+' => Span::styled("+", theme::gold()),
            _ => Span::styled(c.to_string(), theme::dim()),
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

fn draw_howto(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(Span::styled(" How to use ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(ratatui::style::Style::default().fg(theme::BORDER))
        .style(theme::surface());

    let text = vec![
        Line::from(Span::styled(
            "  Face the marked bearing, measured clockwise from north.",
            theme::dim(),
        )),
        Line::from(Span::styled(
            "  The ◆ marker on the ring points towards the Qibla.",
            theme::dim(),
        )),
    ];

    frame.render_widget(Paragraph::new(text).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(grid: &[Vec<char>], needle: char) -> Option<(usize, usize)> {
        grid.iter().enumerate().find_map(|(y, row)| {
            row.iter()
                .position(|&c| c == needle)
                .map(|x| (x, y))
        })
    }

    #[test]
    fn cardinals_sit_on_their_axes() {
        let grid = compass_grid(245);
        let (nx, ny) = find(&grid, 'N').unwrap();
        let (sx, sy) = find(&grid, 'S').unwrap();
        let (ex, _) = find(&grid, 'E').unwrap();
        let (wx, _) = find(&grid, 'W').unwrap();
        assert_eq!(nx, sx);
        assert_eq!(nx, GRID_WIDTH / 2);
        assert!(ny < sy);
        assert!(wx < nx && nx < ex);
    }

    #[test]
    fn marker_lands_in_the_bearing_quadrant() {
        // 245° is south-west: left of and below center.
        let grid = compass_grid(245);
        let (mx, my) = find(&grid, '◆').unwrap();
        assert!(mx < GRID_WIDTH / 2);
        assert!(my > GRID_HEIGHT / 2);

        // 45° is north-east: right of and above center.
        let grid = compass_grid(45);
        let (mx, my) = find(&grid, '◆').unwrap();
        assert!(mx > GRID_WIDTH / 2);
        assert!(my < GRID_HEIGHT / 2);
    }

    #[test]
    fn due_north_marker_replaces_the_n_label() {
        let grid = compass_grid(0);
        let (mx, my) = find(&grid, '◆').unwrap();
        assert_eq!((mx, my), (GRID_WIDTH / 2, 0));
        assert!(find(&grid, 'N').is_none());
    }
}
