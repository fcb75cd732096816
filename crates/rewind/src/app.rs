//! Application state and key handling.
//!
//! [`App`] is the single owner of everything that changes while the game
//! runs. Renderers only ever see `&App` and the [`BoardView`] derived from it.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use derive_getters::Getters;
use rewind_tictactoe::{
    BoardView, CELL_COUNT, GameController, Line, MoveEntry, SortOrder, move_list,
};
use tracing::{debug, info, instrument, warn};

use crate::input::move_cursor;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the move list selection.
    MoveList,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::MoveList,
            Self::MoveList => Self::Board,
        }
    }
}

/// Result of handling a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep running.
    Stay,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
#[derive(Debug, Clone, Getters)]
pub struct App {
    game: GameController,
    highlight: Option<Line>,
    sort_order: SortOrder,
    cursor: usize,
    focus: Focus,
    selected: usize,
}

impl App {
    /// Creates a new application with the move list in `sort_order`.
    #[instrument]
    pub fn new(sort_order: SortOrder) -> Self {
        Self {
            game: GameController::new(),
            highlight: None,
            sort_order,
            cursor: CELL_COUNT / 2,
            focus: Focus::default(),
            selected: 0,
        }
    }

    /// Derives the board view for this frame and remembers its highlight.
    ///
    /// Call once per render, before drawing.
    pub fn board_view(&mut self) -> BoardView {
        let view = self.game.board_view(self.highlight);
        self.highlight = *view.highlight();
        view
    }

    /// Move list entries in display order.
    pub fn entries(&self) -> Vec<MoveEntry> {
        move_list(self.game.history(), self.game.current_move(), self.sort_order)
    }

    /// Handles a key event.
    #[instrument(skip(self, key), fields(code = ?key.code, focus = %self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Transition {
        if key.kind == KeyEventKind::Release {
            return Transition::Stay;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("User quit");
                return Transition::Quit;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                debug!(focus = %self.focus, "Switched focus");
            }
            KeyCode::Char('s') | KeyCode::Char('S') => self.toggle_sort(),
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.game.restart();
                self.selected = 0;
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::MoveList => self.handle_list_key(code),
            },
        }
        Transition::Stay
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.click_cell(self.cursor),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(digit) = c.to_digit(10) {
                    self.click_cell(digit as usize - 1);
                }
            }
            other => self.cursor = move_cursor(self.cursor, other),
        }
    }

    fn handle_list_key(&mut self, code: KeyCode) {
        let len = self.game.history().len();
        match code {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(len - 1),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = len - 1,
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_selected(),
            _ => {}
        }
    }

    /// Routes a click on cell `index` through the board view.
    ///
    /// Clicks the view ignores leave the game untouched.
    #[instrument(skip(self))]
    pub fn click_cell(&mut self, index: usize) {
        let Some(next) = self.game.board_view(self.highlight).click(index) else {
            return;
        };
        if let Err(e) = self.game.play(next) {
            warn!(error = %e, "Board view produced an unplayable snapshot");
            return;
        }
        self.cursor = index;
        self.clamp_selection();
    }

    /// Activates the selected move list entry.
    ///
    /// Plain-text entries (the current move) do nothing.
    #[instrument(skip(self), fields(selected = self.selected))]
    pub fn activate_selected(&mut self) {
        let Some(entry) = self.entries().get(self.selected).copied() else {
            return;
        };
        if !entry.is_jump() {
            debug!("Selected entry is the current move");
            return;
        }
        if let Err(e) = self.game.jump_to(*entry.move_number()) {
            warn!(error = %e, "Move list offered an invalid jump");
            return;
        }
        self.clamp_selection();
    }

    /// Flips the move list order, keeping the same entry selected.
    #[instrument(skip(self))]
    pub fn toggle_sort(&mut self) {
        self.set_sort_order(self.sort_order.toggle());
    }

    /// Applies the toggle widget's checked state.
    pub fn set_sort_order(&mut self, order: SortOrder) {
        if order == self.sort_order {
            return;
        }
        let last = self.game.history().len() - 1;
        self.selected = last - self.selected.min(last);
        self.sort_order = order;
        info!(order = %order, "Changed move list order");
    }

    fn clamp_selection(&mut self) {
        let last = self.game.history().len() - 1;
        self.selected = self.selected.min(last);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(SortOrder::default())
    }
}
