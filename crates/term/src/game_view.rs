//! GameView: draws the board, the cursor and the mark into a [`Console`].
//!
//! This module is pure (no I/O). It can be unit-tested against a
//! [`FrameBuffer`](crate::fb::FrameBuffer).

use arrayvec::ArrayString;

use crate::console::Console;
use crate::core::{Game, GameControl, Layout, SelectionState};
use crate::fb::{CellStyle, Rgb};
use crate::types::{Card, CardColor};

const TABLE_BG: Rgb = Rgb::new(0, 0, 0);

const CLOSED_STYLE: CellStyle = CellStyle::new(Rgb::new(200, 200, 255), Rgb::new(40, 60, 140));
const SHADE_ON_CLOSED: CellStyle = CellStyle::new(Rgb::new(10, 10, 30), Rgb::new(40, 60, 140));
const RED_CARD: CellStyle = CellStyle::new(Rgb::new(200, 30, 30), Rgb::new(235, 235, 235));
const BLACK_CARD: CellStyle = CellStyle::new(Rgb::new(20, 20, 20), Rgb::new(235, 235, 235));
const SHADE_ON_OPEN: CellStyle = CellStyle::new(Rgb::new(20, 20, 20), Rgb::new(235, 235, 235));
const EMPTY_STYLE: CellStyle = CellStyle::new(Rgb::new(110, 110, 120), TABLE_BG).dim();
const SELECT_STYLE: CellStyle = CellStyle::new(Rgb::new(255, 220, 60), TABLE_BG).bold();
const MARK_STYLE: CellStyle = CellStyle::new(Rgb::new(80, 220, 120), TABLE_BG).bold();
const BANNER_STYLE: CellStyle = CellStyle::new(Rgb::new(255, 220, 60), TABLE_BG).bold();

const CLOSED_PATTERN: &str = "╬╬";
const SHADE: char = '_';
const RECYCLE: &str = "↺";
const WIN_TEXT: &str = "You win! Press R to deal again.";

/// Text shown on an open card, e.g. `10♥`.
pub fn card_text(card: Card) -> ArrayString<8> {
    let mut text = ArrayString::new();
    text.push_str(card.label());
    text.push(card.suit.symbol());
    text
}

/// Board renderer.
///
/// Piles sit on a grid: the layout coordinate of a pile is scaled by the card
/// size plus spacing. Tableau piles spread downward, one row per closed card
/// and a full card height per open card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    card_w: u16,
    card_h: u16,
    spacing: u16,
    spread: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            card_w: 4,
            card_h: 3,
            spacing: 4,
            spread: 1,
        }
    }
}

impl GameView {
    /// Top-left corner of a pile.
    pub fn stack_origin(&self, layout: &Layout, stack_index: usize) -> Option<(u16, u16)> {
        let (lx, ly) = layout.index_to_layout(stack_index)?;
        let x = self.spacing + (self.spacing + self.card_w) * u16::try_from(lx).ok()?;
        let y = self.spacing + (self.spacing + self.card_h) * u16::try_from(ly).ok()?;
        Some((x, y))
    }

    /// Top-left corner of a card. Only tableau piles spread; every other pile
    /// draws all its cards at the pile origin.
    pub fn card_position(
        &self,
        game: &Game,
        layout: &Layout,
        stack_index: usize,
        card_index: usize,
    ) -> Option<(u16, u16)> {
        let (x, mut y) = self.stack_origin(layout, stack_index)?;
        if !game.is_central_stack(stack_index) {
            return Some((x, y));
        }

        let stack = game.stack(stack_index)?;
        let card = u16::try_from(card_index).ok()?;
        match stack.first_open_card() {
            Some(open) if card_index > open => {
                let open = u16::try_from(open).ok()?;
                y += open * self.spread + (card - open) * self.card_h;
            }
            _ => y += card * self.spread,
        }
        Some((x, y))
    }

    /// Draw one frame of the game. Does not call `begin`/`end`.
    pub fn render(&self, control: &GameControl, console: &mut dyn Console) {
        let game = control.game();
        let layout = control.layout();

        self.draw_stacks(game, layout, console);

        let selection = control.selection();
        if let Some(pos) =
            self.card_position(game, layout, selection.stack_index, selection.card_index)
        {
            self.draw_cursor(console, pos, SELECT_STYLE);
        }
        if selection.state == SelectionState::Move {
            if let Some(pos) = self.card_position(
                game,
                layout,
                selection.marked_stack_index,
                selection.marked_card_index,
            ) {
                self.draw_cursor(console, pos, MARK_STYLE);
            }
        }

        if game.is_won() {
            let len = WIN_TEXT.chars().count() as u16;
            let x = console.width().saturating_sub(len) / 2;
            console.set_draw_color(BANNER_STYLE);
            console.draw(x, 1, WIN_TEXT);
        }
    }

    fn draw_stacks(&self, game: &Game, layout: &Layout, console: &mut dyn Console) {
        for (index, stack) in game.stacks().iter().enumerate() {
            let Some(origin) = self.stack_origin(layout, index) else {
                continue;
            };

            if stack.is_empty() {
                if game.is_closed_stack(index) {
                    self.draw_empty(console, origin, Some(RECYCLE));
                } else if game.is_central_stack(index) {
                    self.draw_empty(console, origin, Some("K"));
                } else if game.is_end_stack(index) {
                    self.draw_empty(console, origin, Some("A"));
                } else {
                    self.draw_empty(console, origin, None);
                }
            } else if game.is_central_stack(index) {
                let last = stack.top_index();
                for (card_index, card) in stack.iter().enumerate() {
                    let Some(pos) = self.card_position(game, layout, index, card_index) else {
                        continue;
                    };
                    self.draw_card(console, *card, pos);
                    if card_index < last {
                        self.draw_shade(console, *card, pos);
                    }
                }
            } else if let Some(top) = stack.top() {
                self.draw_card(console, top, origin);
            }
        }
    }

    fn draw_card(&self, console: &mut dyn Console, card: Card, (x, y): (u16, u16)) {
        let (cx, cy) = self.center(x, y);
        if card.is_closed() {
            console.set_draw_color(CLOSED_STYLE);
            console.draw_rect(x, y, self.card_w, self.card_h, ' ');
            console.draw(cx, cy, CLOSED_PATTERN);
        } else {
            let style = match card.color() {
                CardColor::Red => RED_CARD,
                CardColor::Black => BLACK_CARD,
            };
            console.set_draw_color(style);
            console.draw_rect(x, y, self.card_w, self.card_h, ' ');
            console.draw(cx, cy, &card_text(card));
        }
    }

    /// Underline the visible edge of a covered card.
    fn draw_shade(&self, console: &mut dyn Console, card: Card, (x, y): (u16, u16)) {
        let (style, row) = if card.is_closed() {
            (SHADE_ON_CLOSED, y)
        } else {
            (SHADE_ON_OPEN, y + self.card_h.saturating_sub(1))
        };
        console.set_draw_color(style);
        console.draw_rect(x, row, self.card_w, 1, SHADE);
    }

    fn draw_empty(&self, console: &mut dyn Console, (x, y): (u16, u16), text: Option<&str>) {
        console.set_draw_color(EMPTY_STYLE);
        console.draw_rect_outline(x, y, self.card_w, self.card_h);
        if let Some(text) = text {
            let (cx, cy) = self.center(x, y);
            console.draw(cx, cy, text);
        }
    }

    /// Arrows on both sides of the card, pointing at it.
    fn draw_cursor(&self, console: &mut dyn Console, (x, y): (u16, u16), style: CellStyle) {
        let (_, cy) = self.center(x, y);
        console.set_draw_color(style);
        if let Some(left) = x.checked_sub(1) {
            console.draw(left, cy, "►");
        }
        console.draw(x + self.card_w, cy, "◄");
    }

    fn center(&self, x: u16, y: u16) -> (u16, u16) {
        (x + (self.card_w / 2).saturating_sub(1), y + self.card_h / 2)
    }
}
