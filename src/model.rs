use tracing::{error, info, trace};

use crate::domain::Message;
use crate::printer::Printer;
use crate::report::format_report;
use crate::table::Table;
use crate::ui::CHROME_HEIGHT;

#[derive(Debug, PartialEq)]
pub enum Status {
    READY,
    QUITTING,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Modus {
    TABLE,
    POPUP,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PopupKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub title: String,
    pub message: String,
    pub kind: PopupKind,
}

impl Popup {
    fn info(title: &str, message: impl Into<String>) -> Self {
        Popup {
            title: title.to_string(),
            message: message.into(),
            kind: PopupKind::Info,
        }
    }

    fn error(title: &str, message: impl Into<String>) -> Self {
        Popup {
            title: title.to_string(),
            message: message.into(),
            kind: PopupKind::Error,
        }
    }
}

pub struct Model {
    table: Table,
    printer: Box<dyn Printer>,
    pub status: Status,
    modus: Modus,
    popup: Option<Popup>,
    selected_row: usize,
    page_size: usize,
}

impl Model {
    pub fn new(table: Table, printer: Box<dyn Printer>) -> Self {
        info!(
            "Loaded {} competitors, {} with missing data",
            table.len(),
            table.missing_count()
        );
        Self {
            table,
            printer,
            status: Status::READY,
            modus: Modus::TABLE,
            popup: None,
            selected_row: 0,
            page_size: 1,
        }
    }

    pub fn update(&mut self, message: Message) {
        trace!("Update: Modus {:?}, Message {:?}", self.modus, message);
        match self.modus {
            Modus::TABLE => match message {
                Message::Quit => self.quit(),
                Message::MoveDown => self.move_selection_down(1),
                Message::MoveUp => self.move_selection_up(1),
                Message::MovePageDown => self.move_selection_down(self.page_size),
                Message::MovePageUp => self.move_selection_up(self.page_size),
                Message::MoveBeginning => self.selected_row = 0,
                Message::MoveEnd => self.selected_row = self.table.len().saturating_sub(1),
                // The print button is the only control, so it always has focus.
                Message::Print | Message::Enter => self.print_report(),
                Message::Resize(width, height) => self.ui_resize(width, height),
                Message::Exit => (),
            },
            Modus::POPUP => match message {
                Message::Quit => self.quit(),
                Message::Enter | Message::Exit => self.close_popup(),
                Message::Resize(width, height) => self.ui_resize(width, height),
                _ => (),
            },
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn selected_row(&self) -> usize {
        self.selected_row
    }

    pub fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    pub fn status_line(&self) -> String {
        format!(
            "{} competitors loaded  •  {} records with missing data",
            self.table.len(),
            self.table.missing_count()
        )
    }

    // -------------------- Control handling functions ---------------------- //

    fn print_report(&mut self) {
        let text = format_report(&self.table);
        info!("Sending report ({} bytes) to printer ...", text.len());
        let popup = match self.printer.submit(&text) {
            Ok(()) => {
                info!("Report sent to printer.");
                Popup::info("Print", "Report sent to printer.")
            }
            Err(e) => {
                error!("Printing failed: {e}");
                Popup::error("Print Error", format!("Could not print:\n{e}"))
            }
        };
        self.show_popup(popup);
    }

    fn show_popup(&mut self, popup: Popup) {
        self.popup = Some(popup);
        self.modus = Modus::POPUP;
    }

    fn close_popup(&mut self) {
        trace!("Close popup ...");
        self.popup = None;
        self.modus = Modus::TABLE;
    }

    fn quit(&mut self) {
        self.status = Status::QUITTING;
    }

    fn ui_resize(&mut self, width: usize, height: usize) {
        trace!("UI was resized! w:{}, h:{}", width, height);
        self.page_size = height.saturating_sub(CHROME_HEIGHT).max(1);
    }

    fn move_selection_down(&mut self, size: usize) {
        let last = self.table.len().saturating_sub(1);
        self.selected_row = std::cmp::min(self.selected_row + size, last);
    }

    fn move_selection_up(&mut self, size: usize) {
        self.selected_row = self.selected_row.saturating_sub(size);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::printer::PrintError;
    use crate::roster::build_roster;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every submitted document and answers with a canned result.
    pub(crate) struct StubPrinter {
        pub(crate) submitted: Rc<RefCell<Vec<String>>>,
        pub(crate) stderr: Option<String>,
    }

    impl StubPrinter {
        pub(crate) fn ok() -> Self {
            StubPrinter {
                submitted: Rc::new(RefCell::new(Vec::new())),
                stderr: None,
            }
        }

        pub(crate) fn failing(stderr: &str) -> Self {
            StubPrinter {
                submitted: Rc::new(RefCell::new(Vec::new())),
                stderr: Some(stderr.to_string()),
            }
        }
    }

    impl Printer for StubPrinter {
        fn submit(&self, text: &str) -> Result<(), PrintError> {
            self.submitted.borrow_mut().push(text.to_string());
            match &self.stderr {
                None => Ok(()),
                Some(stderr) => Err(PrintError::Io(std::io::Error::other(stderr.clone()))),
            }
        }
    }

    #[test]
    fn print_success_shows_notice() {
        let printer = StubPrinter::ok();
        let submitted = printer.submitted.clone();
        let mut model = Model::new(build_roster(), Box::new(printer));

        model.update(Message::Print);

        let popup = model.popup().unwrap();
        assert_eq!(popup.kind, PopupKind::Info);
        assert_eq!(popup.title, "Print");
        assert_eq!(popup.message, "Report sent to printer.");
        assert_eq!(submitted.borrow().len(), 1);
        assert_eq!(submitted.borrow()[0], format_report(model.table()));
    }

    #[test]
    fn print_failure_shows_diagnostic() {
        let mut model = Model::new(build_roster(), Box::new(StubPrinter::failing("no printer")));

        model.update(Message::Enter);

        let popup = model.popup().unwrap();
        assert_eq!(popup.kind, PopupKind::Error);
        assert_eq!(popup.title, "Print Error");
        assert!(popup.message.starts_with("Could not print:\n"));
        assert!(popup.message.contains("no printer"));
    }

    #[test]
    fn popup_is_modal() {
        let printer = StubPrinter::ok();
        let submitted = printer.submitted.clone();
        let mut model = Model::new(build_roster(), Box::new(printer));

        model.update(Message::Print);
        model.update(Message::Print);
        model.update(Message::MoveDown);
        assert_eq!(submitted.borrow().len(), 1);
        assert_eq!(model.selected_row(), 0);

        model.update(Message::Exit);
        assert!(model.popup().is_none());
        model.update(Message::MoveDown);
        assert_eq!(model.selected_row(), 1);
    }

    #[test]
    fn enter_closes_popup() {
        let mut model = Model::new(build_roster(), Box::new(StubPrinter::ok()));
        model.update(Message::Print);
        model.update(Message::Enter);
        assert!(model.popup().is_none());
        assert_eq!(model.status, Status::READY);
    }

    #[test]
    fn selection_is_clamped() {
        let mut model = Model::new(build_roster(), Box::new(StubPrinter::ok()));
        model.update(Message::MoveUp);
        assert_eq!(model.selected_row(), 0);

        model.update(Message::MoveEnd);
        assert_eq!(model.selected_row(), 14);
        model.update(Message::MoveDown);
        assert_eq!(model.selected_row(), 14);

        model.update(Message::MoveBeginning);
        model.update(Message::Resize(80, CHROME_HEIGHT + 5));
        model.update(Message::MovePageDown);
        assert_eq!(model.selected_row(), 5);
        model.update(Message::MovePageUp);
        assert_eq!(model.selected_row(), 0);
    }

    #[test]
    fn empty_table_does_not_scroll() {
        let mut model = Model::new(Table::new(Vec::new()), Box::new(StubPrinter::ok()));
        model.update(Message::MoveDown);
        model.update(Message::MoveEnd);
        assert_eq!(model.selected_row(), 0);
    }

    #[test]
    fn status_line_counts() {
        let model = Model::new(build_roster(), Box::new(StubPrinter::ok()));
        assert_eq!(
            model.status_line(),
            "15 competitors loaded  •  12 records with missing data"
        );
    }

    #[test]
    fn quit() {
        let mut model = Model::new(build_roster(), Box::new(StubPrinter::ok()));
        model.update(Message::Quit);
        assert_eq!(model.status, Status::QUITTING);
    }
}
