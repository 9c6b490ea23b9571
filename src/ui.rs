use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::game::GameState;
use crate::geometry::Direction;
use crate::snapshot::{Cell, Snapshot};

pub fn draw(frame: &mut Frame, snapshot: &Snapshot) {
    let layout = Layout::default()
        .direction(layout::Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + length
            Constraint::Min(0),    // Board
            Constraint::Length(1), // Board info
        ])
        .split(frame.area());

    frame.render_widget(
        Paragraph::new(format!("SNAKE    Length: {}", snapshot.length))
            .alignment(Alignment::Left)
            .block(Block::default().borders(Borders::ALL)),
        layout[0],
    );

    let block = Block::default()
        .title(snapshot.message)
        .borders(Borders::ALL)
        .border_style(border_style(snapshot.state));
    let inner_area = block.inner(layout[1]);
    frame.render_widget(block, layout[1]);
    frame.render_widget(snapshot, centered(inner_area, board_extent(snapshot)));

    frame.render_widget(Paragraph::new(info_line(snapshot)), layout[2]);
}

fn border_style(state: GameState) -> Style {
    match state {
        GameState::GameOver => Style::default().fg(Color::Red),
        GameState::Paused => Style::default().fg(Color::Yellow),
        _ => Style::default(),
    }
}

fn board_extent(snapshot: &Snapshot) -> (u16, u16) {
    (snapshot.size.width + 2, snapshot.size.height + 2)
}

fn centered(area: Rect, (width, height): (u16, u16)) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn info_line(snapshot: &Snapshot) -> String {
    let direction = match snapshot.direction {
        Some(Direction::Up) => "up",
        Some(Direction::Down) => "down",
        Some(Direction::Left) => "left",
        Some(Direction::Right) => "right",
        None => "-",
    };
    let body: Vec<String> = snapshot
        .body
        .iter()
        .map(|pos| format!("({}, {})", pos.x, pos.y))
        .collect();
    format!(
        "Width: {}  Height: {}  Head: ({}, {})  Direction: {}  Body: {}",
        snapshot.size.width,
        snapshot.size.height,
        snapshot.head.x,
        snapshot.head.y,
        direction,
        body.join(" ")
    )
}

fn wall_symbol(x: usize, y: usize, last_x: usize, last_y: usize) -> &'static str {
    let side = x == 0 || x == last_x;
    let cap = y == 0 || y == last_y;
    match (side, cap) {
        (true, true) => "+",
        (true, false) => "|",
        _ => "-",
    }
}

impl Widget for &Snapshot {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let last_x = self.size.width as usize + 1;
        let last_y = self.size.height as usize + 1;

        for (y, row) in self.rows().enumerate().take(area.height as usize) {
            for (x, cell) in row.iter().enumerate().take(area.width as usize) {
                let target = &mut buf[(area.x + x as u16, area.y + y as u16)];
                match cell {
                    Cell::Wall => {
                        target.set_symbol(wall_symbol(x, y, last_x, last_y));
                    }
                    Cell::SnakeHead => {
                        target.set_symbol("x").set_fg(Color::Yellow);
                    }
                    Cell::SnakeBody => {
                        target.set_symbol("o").set_fg(Color::Green);
                    }
                    Cell::Apple => {
                        target.set_symbol("@").set_fg(Color::LightRed);
                    }
                    Cell::Empty => {
                        target.set_symbol(" ");
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Coord, Size};
    use crate::snake::Snake;

    fn rendered_lines(snapshot: &Snapshot) -> Vec<String> {
        let area = Rect::new(0, 0, snapshot.size.width + 2, snapshot.size.height + 2);
        let mut buf = Buffer::empty(area);
        snapshot.render(area, &mut buf);

        (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn test_board_drawing() {
        let snake = Snake::from_body([Coord::new(1, 2), Coord::new(2, 2)], Direction::Right);
        let snapshot = Snapshot::new(Size::new(3, 3), GameState::Running, &snake, Coord::new(3, 3));

        assert_eq!(
            rendered_lines(&snapshot),
            vec!["+---+", "|   |", "|ox |", "|  @|", "+---+"]
        );
    }

    #[test]
    fn test_small_area_is_clipped() {
        let snake = Snake::new(Coord::new(3, 3));
        let snapshot = Snapshot::new(Size::new(5, 5), GameState::Init, &snake, Coord::new(1, 1));
        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);

        snapshot.render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "+");
        assert_eq!(buf[(1, 1)].symbol(), "@");
    }

    #[test]
    fn test_centered_board() {
        let area = Rect::new(1, 1, 20, 10);
        assert_eq!(centered(area, (7, 7)), Rect::new(7, 2, 7, 7));
        assert_eq!(centered(area, (30, 30)), area);
    }

    #[test]
    fn test_info_line() {
        let snake = Snake::new(Coord::new(3, 3));
        let snapshot = Snapshot::new(Size::new(5, 5), GameState::Init, &snake, Coord::new(1, 1));
        assert_eq!(
            info_line(&snapshot),
            "Width: 5  Height: 5  Head: (3, 3)  Direction: -  Body: (3, 3)"
        );
    }

    #[test]
    fn test_info_line_lists_body_tail_first() {
        let snake = Snake::from_body(
            [Coord::new(2, 4), Coord::new(2, 3), Coord::new(3, 3)],
            Direction::Right,
        );
        let snapshot = Snapshot::new(Size::new(5, 5), GameState::Running, &snake, Coord::new(1, 1));
        assert_eq!(
            info_line(&snapshot),
            "Width: 5  Height: 5  Head: (3, 3)  Direction: right  Body: (2, 4) (2, 3) (3, 3)"
        );
    }
}
