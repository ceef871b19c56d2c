use std::time::Duration;
use tracing::trace;

use crate::domain::{AppError, Message, ReportConfig};
use ratatui::crossterm::event::{self, Event, KeyCode};

pub struct Controller {
    event_poll_time: u64,
}

impl Controller {
    pub fn new(cfg: &ReportConfig) -> Self {
        Self {
            event_poll_time: cfg.event_poll_time,
        }
    }

    pub fn handle_event(&self) -> Result<Option<Message>, AppError> {
        if event::poll(Duration::from_millis(self.event_poll_time))? {
            return Ok(match event::read()? {
                Event::Key(key) if key.kind == event::KeyEventKind::Press => self.handle_key(key),
                Event::Resize(width, height) => Some(Message::Resize(width.into(), height.into())),
                _ => None,
            });
        }
        Ok(None)
    }

    fn handle_key(&self, key: event::KeyEvent) -> Option<Message> {
        let message = match key.code {
            KeyCode::Char('q') => Some(Message::Quit),
            KeyCode::Char('p') | KeyCode::Char('P') => Some(Message::Print),
            KeyCode::Enter => Some(Message::Enter),
            KeyCode::Esc => Some(Message::Exit),
            KeyCode::Down | KeyCode::Char('j') => Some(Message::MoveDown),
            KeyCode::Up | KeyCode::Char('k') => Some(Message::MoveUp),
            KeyCode::PageDown => Some(Message::MovePageDown),
            KeyCode::PageUp => Some(Message::MovePageUp),
            KeyCode::Home | KeyCode::Char('g') => Some(Message::MoveBeginning),
            KeyCode::End | KeyCode::Char('G') => Some(Message::MoveEnd),
            _ => None,
        };
        trace!("Mapped: {key:?} => {message:?}");
        message
    }
}
