use soliterminal::core::{App, Game, GameControl, Layout};
use soliterminal::term::{card_text, render_app, Console, FrameBuffer, GameView, MenuView};
use soliterminal::types::Action;

#[test]
fn term_view_draws_every_tableau_top_card() {
    let control = GameControl::new(Game::deal(99), Layout::game());
    let view = GameView::default();
    let mut fb = FrameBuffer::new(64, 32);
    view.render(&control, &mut fb);

    for stack in 6..13 {
        let pile = control.game().stack(stack).unwrap();
        let top = pile.top().unwrap();
        let (x, y) = view
            .card_position(control.game(), control.layout(), stack, pile.top_index())
            .unwrap();
        let text = card_text(top);
        let shown: String = fb
            .row_text(y + 1)
            .chars()
            .skip(x as usize + 1)
            .take(text.chars().count())
            .collect();
        assert_eq!(shown, text.as_str(), "pile {stack}");
    }
}

#[test]
fn term_view_clips_to_small_console() {
    let control = GameControl::new(Game::deal(1), Layout::game());
    let mut fb = FrameBuffer::new(10, 5);
    GameView::default().render(&control, &mut fb);
    assert_eq!(fb.width(), 10);
    assert_eq!(fb.height(), 5);
}

#[test]
fn term_render_app_switches_between_board_and_menu() {
    let mut app = App::new(Game::deal(1));
    let mut fb = FrameBuffer::new(80, 30);

    render_app(&app, &mut fb).unwrap();
    assert!(!fb.to_text().contains("Soliterminal"));

    app.action(Action::Exit);
    render_app(&app, &mut fb).unwrap();
    let text = fb.to_text();
    assert!(text.contains("Soliterminal"));
    assert!(text.contains("Save and Exit"));
    assert!(!text.contains('╬'), "menu frame starts from a clear console");

    app.action(Action::Exit);
    render_app(&app, &mut fb).unwrap();
    assert!(!fb.to_text().contains("Soliterminal"));
}

#[test]
fn term_menu_view_marks_selected_option() {
    let mut app = App::new(Game::deal(1));
    app.action(Action::Exit);
    app.action(Action::Up);

    let view = MenuView::default();
    let mut fb = FrameBuffer::new(80, 30);
    fb.begin();
    view.render(app.menu_control(), &mut fb);

    let row = view.first_option_row() + 6;
    assert_eq!(fb.row_text(row).trim(), "►Exit without saving◄");
}
