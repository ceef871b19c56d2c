use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Margin, Rect},
    style::{Color, Style, Stylize},
    symbols::border,
    text::{Line, Span, Text},
    widgets::{
        Block, Cell, Clear, Padding, Paragraph, Row, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Table, TableState, Wrap,
    },
};

use crate::model::{Model, Popup, PopupKind};
use crate::report::column_widths;
use crate::table::MISSING_MARKER;

pub const HEADER_HEIGHT: usize = 3;
pub const FOOTER_HEIGHT: usize = 3;
// Top and bottom border plus the column header row.
pub const TABLE_FRAME_HEIGHT: usize = 3;
/// Rows of the screen not available for table records.
pub const CHROME_HEIGHT: usize = HEADER_HEIGHT + FOOTER_HEIGHT + TABLE_FRAME_HEIGHT;

const BUTTON_WIDTH: u16 = 22;
const POPUP_WIDTH: u16 = 60;
const COLUMN_SPACING: u16 = 2;

pub const SCREEN_TITLE: &str = "Missing Information Report";
pub const SCREEN_SUBTITLE: &str =
    "Entries marked '---' need correction. Print this report and contact each dojo.";

#[derive(Debug, Default)]
pub struct ReportUI {
    table_state: TableState,
}

impl ReportUI {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw(&mut self, model: &Model, frame: &mut Frame) {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT as u16),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT as u16),
        ])
        .areas(frame.area());

        self.render_header(frame, header);
        self.render_table(model, frame, body);
        self.render_footer(model, frame, footer);

        if let Some(popup) = model.popup() {
            self.render_popup(popup, frame);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let text = Text::from(vec![
            Line::from(SCREEN_TITLE.bold()),
            Line::from(SCREEN_SUBTITLE.italic()),
        ]);
        let header = Paragraph::new(text)
            .centered()
            .block(Block::new().padding(Padding::top(1)));
        frame.render_widget(header, area);
    }

    fn render_table(&mut self, model: &Model, frame: &mut Frame, area: Rect) {
        let table = model.table();
        let instructions = Line::from(vec![
            " Scroll ".into(),
            "<Up/Down>".blue().bold(),
            " Print ".into(),
            "<P>".blue().bold(),
            " Quit ".into(),
            "<Q> ".blue().bold(),
        ]);
        let block = Block::bordered()
            .title(Line::from(" Competitors ".bold()).centered())
            .title_bottom(instructions.centered())
            .border_set(border::THICK);

        if table.is_empty() {
            let empty = Paragraph::new("No competitors loaded.").centered().block(block);
            frame.render_widget(empty, area);
            return;
        }

        let header = Row::new(table.columns().map(|c| Cell::from(c.bold())));
        let rows = table.records().iter().map(|record| {
            Row::new(record.fields().map(|field| {
                if field == MISSING_MARKER {
                    Cell::from(Span::styled(field, Style::new().fg(Color::Red).bold()))
                } else {
                    Cell::from(field)
                }
            }))
        });
        let widths = column_widths(table).map(|w| Constraint::Length(w as u16));

        let widget = Table::new(rows, widths)
            .header(header)
            .block(block)
            .column_spacing(COLUMN_SPACING)
            .row_highlight_style(Style::new().reversed());

        self.table_state.select(Some(model.selected_row()));
        frame.render_stateful_widget(widget, area, &mut self.table_state);

        let mut scrollbar_state = ScrollbarState::new(table.len()).position(model.selected_row());
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }

    fn render_footer(&self, model: &Model, frame: &mut Frame, area: Rect) {
        let [status_area, button_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(BUTTON_WIDTH)])
                .areas(area);

        let status = Paragraph::new(model.status_line())
            .block(Block::new().padding(Padding::new(1, 0, 1, 0)));
        frame.render_widget(status, status_area);

        let button = Paragraph::new(Line::from(vec![
            "Print Report ".bold(),
            "<P>".blue().bold(),
        ]))
        .centered()
        .block(Block::bordered().border_set(border::ROUNDED));
        frame.render_widget(button, button_area);
    }

    fn render_popup(&self, popup: &Popup, frame: &mut Frame) {
        let border_style = match popup.kind {
            PopupKind::Info => Style::new().fg(Color::Green),
            PopupKind::Error => Style::new().fg(Color::Red),
        };
        let area = frame.area();
        let width = std::cmp::min(POPUP_WIDTH, area.width);
        let text = Paragraph::new(popup.message.as_str()).wrap(Wrap { trim: false });
        // Word wrapped message plus the two borders.
        let message_lines = text.line_count(width.saturating_sub(2).max(1));
        let height = u16::try_from(message_lines + 2)
            .unwrap_or(u16::MAX)
            .min(area.height);
        let popup_area = centered_area(area, width, height);

        let block = Block::bordered()
            .title(Line::from(format!(" {} ", popup.title).bold()).centered())
            .title_bottom(Line::from(vec![" OK ".into(), "<Enter> ".blue().bold()]).centered())
            .border_set(border::THICK)
            .border_style(border_style);
        let text = text.block(block);

        frame.render_widget(Clear, popup_area);
        frame.render_widget(text, popup_area);
    }
}

fn centered_area(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}
