use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const SIDEBAR_WIDTH: u16 = 30;
pub const HAMBURGER_WIDTH: u16 = 8;

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    /// Persistent sidebar; `None` in compact layout.
    pub sidebar: Option<Rect>,
    /// Compact-layout top bar holding the hamburger.
    pub topbar: Option<Rect>,
    pub hamburger: Option<Rect>,
    /// Where the drawer slides in when open (compact layout).
    pub drawer: Rect,
    pub main: Rect,
    pub status_line: Rect,
    pub command_line: Rect,
}

pub fn areas(size: Rect, compact: bool) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size);
    let body = vertical[0];

    let drawer = Rect {
        width: SIDEBAR_WIDTH.min(body.width),
        ..body
    };

    if compact {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(body);
        let topbar = chunks[0];
        let hamburger = Rect {
            width: HAMBURGER_WIDTH.min(topbar.width),
            ..topbar
        };
        UiAreas {
            size,
            sidebar: None,
            topbar: Some(topbar),
            hamburger: Some(hamburger),
            drawer,
            main: chunks[1],
            status_line: vertical[1],
            command_line: vertical[2],
        }
    } else {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(body);
        UiAreas {
            size,
            sidebar: Some(chunks[0]),
            topbar: None,
            hamburger: None,
            drawer,
            main: chunks[1],
            status_line: vertical[1],
            command_line: vertical[2],
        }
    }
}

/// Cards laid out left-to-right, top-to-bottom, scrolled so `selected` is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardGrid {
    pub columns: usize,
    /// `(record index, cell)` for every visible card.
    pub cells: Vec<(usize, Rect)>,
}

impl CardGrid {
    pub fn index_at(&self, col: u16, row: u16) -> Option<usize> {
        self.cells
            .iter()
            .find(|(_, rect)| rect_contains(*rect, col, row))
            .map(|(index, _)| *index)
    }
}

pub fn card_grid(area: Rect, count: usize, min_width: u16, height: u16, selected: usize) -> CardGrid {
    if area.width == 0 || area.height == 0 || count == 0 || height == 0 {
        return CardGrid {
            columns: 1,
            cells: Vec::new(),
        };
    }

    let columns = (area.width / min_width.max(1)).max(1) as usize;
    let rows_visible = (area.height / height).max(1) as usize;
    let selected_row = selected.min(count - 1) / columns;
    let first_row = selected_row.saturating_sub(rows_visible - 1);
    let cell_width = area.width / columns as u16;
    let bottom = area.y.saturating_add(area.height);

    let mut cells = Vec::new();
    'rows: for row in 0..rows_visible {
        let y = area.y + (row as u16) * height;
        let cell_height = height.min(bottom.saturating_sub(y));
        for col in 0..columns {
            let index = (first_row + row) * columns + col;
            if index >= count {
                break 'rows;
            }
            cells.push((
                index,
                Rect {
                    x: area.x + (col as u16) * cell_width,
                    y,
                    width: cell_width,
                    height: cell_height,
                },
            ));
        }
    }

    CardGrid { columns, cells }
}

pub fn rect_contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

pub fn rect_inner(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(1),
        y: rect.y.saturating_add(1),
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(2),
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
