//! Interactive track selector
//!
//! Shows every track title in a filterable list. Typing narrows the list
//! with fuzzy matching, Enter picks the track playback starts from and
//! Esc or Ctrl+C cancels.

use std::io;
use std::time::Duration;

use crossterm::event::KeyEvent;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::event;
use crate::fuzzy;
use crate::tui;

const PINK: Color = Color::Rgb(255, 102, 170);
const TEXT: Color = Color::Rgb(205, 214, 244);
const SUBTLE: Color = Color::Rgb(147, 153, 178);
const HIGHLIGHT_BG: Color = Color::Rgb(45, 45, 60);

/// Rows moved by PageUp/PageDown
const PAGE: usize = 10;

/// How a selection prompt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Index into the original title list
    Selected(usize),
    Cancelled,
}

/// State of the selection prompt
pub struct Selector<'a> {
    titles: &'a [String],
    query: String,
    matches: Vec<usize>,
    cursor: usize,
    offset: usize,
}

impl<'a> Selector<'a> {
    pub fn new(titles: &'a [String]) -> Self {
        Self {
            titles,
            query: String::new(),
            matches: (0..titles.len()).collect(),
            cursor: 0,
            offset: 0,
        }
    }

    /// Title indices currently shown, best match first
    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    /// Apply a key press, returning the outcome once the prompt is done
    pub fn handle_key(&mut self, key: &KeyEvent) -> Option<Outcome> {
        if event::is_cancel(key) {
            return Some(Outcome::Cancelled);
        }

        if event::is_enter(key) {
            return self.matches.get(self.cursor).copied().map(Outcome::Selected);
        }

        if event::is_up(key) {
            self.cursor = self.cursor.saturating_sub(1);
        } else if event::is_down(key) {
            self.move_down(1);
        } else if event::is_page_up(key) {
            self.cursor = self.cursor.saturating_sub(PAGE);
        } else if event::is_page_down(key) {
            self.move_down(PAGE);
        } else if event::is_backspace(key) {
            if self.query.pop().is_some() {
                self.refilter();
            }
        } else if let Some(c) = event::typed_char(key) {
            self.query.push(c);
            self.refilter();
        }

        None
    }

    fn move_down(&mut self, rows: usize) {
        let last = self.matches.len().saturating_sub(1);
        self.cursor = (self.cursor + rows).min(last);
    }

    fn refilter(&mut self) {
        self.matches = fuzzy::rank(&self.query, self.titles);
        self.cursor = 0;
        self.offset = 0;
    }

    /// Keep the cursor inside a window of `height` rows
    fn scroll_to_cursor(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + height {
            self.offset = self.cursor + 1 - height;
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Query
                Constraint::Min(3),    // Matches
                Constraint::Length(1), // Hints
            ])
            .split(frame.area());

        let query = Paragraph::new(Line::from(vec![
            Span::styled("> ", Style::default().fg(PINK).bold()),
            Span::styled(self.query.as_str(), Style::default().fg(TEXT)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(PINK))
                .title(Span::styled(
                    " Select a track to start from ",
                    Style::default().fg(PINK).bold(),
                )),
        );
        frame.render_widget(query, chunks[0]);

        let list_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(SUBTLE));
        let height = list_block.inner(chunks[1]).height as usize;
        self.scroll_to_cursor(height);

        let items: Vec<ListItem> = self
            .matches
            .iter()
            .skip(self.offset)
            .take(height)
            .map(|&i| ListItem::new(self.titles[i].as_str()).style(Style::default().fg(TEXT)))
            .collect();

        let list = List::new(items)
            .block(list_block)
            .highlight_style(Style::default().fg(PINK).bg(HIGHLIGHT_BG).bold())
            .highlight_symbol("> ");
        let selected = (!self.matches.is_empty()).then(|| self.cursor.saturating_sub(self.offset));
        let mut state = ListState::default().with_selected(selected);
        frame.render_stateful_widget(list, chunks[1], &mut state);

        let hints = Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{}/{} ", self.matches.len(), self.titles.len()),
                Style::default().fg(PINK),
            ),
            Span::styled(
                "type to filter | ↑↓ move | Enter play | Esc cancel",
                Style::default().fg(SUBTLE),
            ),
        ]));
        frame.render_widget(hints, chunks[2]);
    }
}

/// Ask the user for the track to start from.
///
/// Returns `None` if the prompt was cancelled. The terminal is restored
/// before returning, including on error.
pub fn select(titles: &[String]) -> anyhow::Result<Option<usize>> {
    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let result = run(&mut terminal, titles);
    finish(result, tui::restore())
}

/// The prompt's own result wins over a failure to restore the terminal
fn finish<T>(result: anyhow::Result<T>, restored: io::Result<()>) -> anyhow::Result<T> {
    if let Err(e) = restored {
        tracing::warn!("Failed to restore the terminal: {}", e);
    }
    result
}

fn run(terminal: &mut tui::Tui, titles: &[String]) -> anyhow::Result<Option<usize>> {
    let mut selector = Selector::new(titles);

    loop {
        terminal.draw(|frame| selector.render(frame))?;

        if let Some(key) = event::poll(Duration::from_millis(100))? {
            match selector.handle_key(&key) {
                Some(Outcome::Selected(index)) => return Ok(Some(index)),
                Some(Outcome::Cancelled) => return Ok(None),
                None => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(selector: &mut Selector, s: &str) {
        for c in s.chars() {
            assert_eq!(selector.handle_key(&press(KeyCode::Char(c))), None);
        }
    }

    fn titles() -> Vec<String> {
        [
            "Freedom Dive : xi -  : ",
            "Blue Zenith : xi -  : ",
            "Big Black : The Quick Brown Fox -  : ",
        ]
        .map(String::from)
        .to_vec()
    }

    #[test]
    fn test_enter_selects_first_by_default() {
        let titles = titles();
        let mut selector = Selector::new(&titles);
        assert_eq!(
            selector.handle_key(&press(KeyCode::Enter)),
            Some(Outcome::Selected(0))
        );
    }

    #[test]
    fn test_navigation_is_clamped() {
        let titles = titles();
        let mut selector = Selector::new(&titles);

        selector.handle_key(&press(KeyCode::Up));
        selector.handle_key(&press(KeyCode::PageDown));
        selector.handle_key(&press(KeyCode::Down));
        assert_eq!(
            selector.handle_key(&press(KeyCode::Enter)),
            Some(Outcome::Selected(2))
        );

        selector.handle_key(&press(KeyCode::Up));
        assert_eq!(
            selector.handle_key(&press(KeyCode::Enter)),
            Some(Outcome::Selected(1))
        );
    }

    #[test]
    fn test_filter_returns_original_index() {
        let titles = titles();
        let mut selector = Selector::new(&titles);

        type_str(&mut selector, "zenith");
        assert_eq!(selector.matches(), &[1]);
        assert_eq!(
            selector.handle_key(&press(KeyCode::Enter)),
            Some(Outcome::Selected(1))
        );
    }

    #[test]
    fn test_backspace_widens_filter() {
        let titles = titles();
        let mut selector = Selector::new(&titles);

        type_str(&mut selector, "xiq");
        assert!(selector.matches().is_empty());
        assert_eq!(selector.handle_key(&press(KeyCode::Enter)), None);

        selector.handle_key(&press(KeyCode::Backspace));
        assert_eq!(selector.matches().len(), 2);
    }

    #[test]
    fn test_escape_and_ctrl_c_cancel() {
        let titles = titles();
        let mut selector = Selector::new(&titles);
        assert_eq!(
            selector.handle_key(&press(KeyCode::Esc)),
            Some(Outcome::Cancelled)
        );
        assert_eq!(
            selector.handle_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Outcome::Cancelled)
        );
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let titles: Vec<String> = (0..50).map(|i| format!("Track {}", i)).collect();
        let mut selector = Selector::new(&titles);

        for _ in 0..12 {
            selector.handle_key(&press(KeyCode::Down));
        }
        selector.scroll_to_cursor(5);
        assert_eq!(selector.offset, 8);

        selector.handle_key(&press(KeyCode::PageUp));
        selector.scroll_to_cursor(5);
        assert_eq!(selector.offset, 2);
    }

    #[test]
    fn test_selection_survives_restore_failure() {
        let broken = || Err(io::Error::new(io::ErrorKind::Other, "tty gone"));

        assert_eq!(finish(Ok(Some(3)), broken()).unwrap(), Some(3));
        assert_eq!(finish(Ok(None::<usize>), broken()).unwrap(), None);

        let err = finish::<Option<usize>>(Err(anyhow::anyhow!("draw failed")), broken());
        assert_eq!(err.unwrap_err().to_string(), "draw failed");
    }
}
