//! MenuView: draws the pause menu.

use crate::console::Console;
use crate::core::MenuControl;
use crate::fb::{CellStyle, Rgb};

const TITLE_STYLE: CellStyle = CellStyle::new(Rgb::new(240, 240, 240), Rgb::new(0, 0, 0)).bold();
const TEXT_STYLE: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0));
const SELECT_STYLE: CellStyle = CellStyle::new(Rgb::new(255, 220, 60), Rgb::new(0, 0, 0)).bold();

const UNDERLINE_WIDTH: u16 = 20;

/// Title, a rule, the help text, then the options one under another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuView {
    margin: u16,
    subtitle_spacing: u16,
    spacing: u16,
    option_spacing: u16,
}

impl Default for MenuView {
    fn default() -> Self {
        Self {
            margin: 4,
            subtitle_spacing: 2,
            spacing: 3,
            option_spacing: 2,
        }
    }
}

impl MenuView {
    /// Row of the first option.
    pub fn first_option_row(&self) -> u16 {
        self.margin + 1 + self.subtitle_spacing + self.spacing
    }

    /// Draw the menu. Does not call `begin`/`end`.
    pub fn render(&self, control: &MenuControl, console: &mut dyn Console) {
        let menu = control.menu();
        let x = self.margin;
        let mut y = self.margin;

        console.set_draw_color(TITLE_STYLE);
        console.draw(x, y, menu.title());
        y += 1;
        console.draw_rect(x, y, UNDERLINE_WIDTH, 1, '=');

        y += self.subtitle_spacing;
        console.set_draw_color(TEXT_STYLE);
        console.draw(x, y, menu.text());

        y += self.spacing;
        for (index, item) in menu.items().iter().enumerate() {
            let label = item.label();
            if index == control.index() {
                console.set_draw_color(SELECT_STYLE);
                console.draw(x, y, label);
                console.draw(x.saturating_sub(1), y, "►");
                console.draw(x + label.chars().count() as u16, y, "◄");
            } else {
                console.set_draw_color(TEXT_STYLE);
                console.draw(x, y, label);
            }
            y += self.option_spacing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Menu;
    use crate::fb::FrameBuffer;
    use crate::types::Action;

    #[test]
    fn draws_title_and_highlights_selection() {
        let mut control = MenuControl::new(Menu::pause());
        control.action(Action::Down);

        let view = MenuView::default();
        let mut fb = FrameBuffer::new(80, 24);
        view.render(&control, &mut fb);

        assert!(fb.row_text(4).starts_with("    Soliterminal"));
        assert!(fb.row_text(5).starts_with("    ===================="));

        let first = view.first_option_row();
        assert_eq!(fb.row_text(first).trim_end(), "    Resume");
        assert_eq!(fb.row_text(first + 2).trim_end(), "   ►New Game◄");
        assert_eq!(fb.get(4, first + 2).map(|c| c.style), Some(SELECT_STYLE));
        assert_eq!(fb.row_text(first + 6).trim_end(), "    Exit without saving");
    }
}
