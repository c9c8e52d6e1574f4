//! Property tests: whatever the player does, the deck stays whole.

use proptest::prelude::*;

use soliterminal::core::{App, Game, GameControl, Layout};
use soliterminal::types::{Action, DECK_SIZE, STACK_COUNT};

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Up),
        Just(Action::Down),
        Just(Action::Left),
        Just(Action::Right),
        Just(Action::Use),
        Just(Action::Use),
        Just(Action::None),
    ]
}

/// Raw engine calls with arbitrary (possibly invalid) indices
#[derive(Debug, Clone)]
enum Op {
    Open,
    Recycle,
    Move(usize, usize, usize),
    Flip(usize, usize),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Open),
        Just(Op::Recycle),
        (0..STACK_COUNT + 2, 0usize..25, 0..STACK_COUNT + 2)
            .prop_map(|(src, card, dst)| Op::Move(src, card, dst)),
        (0..STACK_COUNT + 2, 0usize..25).prop_map(|(stack, card)| Op::Flip(stack, card)),
    ]
}

proptest! {
    #[test]
    fn engine_ops_conserve_the_deck(seed in any::<u32>(), ops in prop::collection::vec(arb_op(), 0..200)) {
        let mut game = Game::deal(seed);
        for op in ops {
            match op {
                Op::Open => game.open_card(),
                Op::Recycle => game.reset_closed_stack(),
                Op::Move(src, card, dst) => {
                    game.move_cards(src, card, dst);
                }
                Op::Flip(stack, card) => {
                    game.flip_card(stack, card);
                }
            }
            prop_assert_eq!(game.card_count(), DECK_SIZE);
            prop_assert!(game.is_full_deck());
        }
    }

    #[test]
    fn cursor_stays_on_the_board(seed in any::<u32>(), actions in prop::collection::vec(arb_action(), 0..300)) {
        let mut control = GameControl::new(Game::deal(seed), Layout::game());
        for action in actions {
            control.action(action);
            prop_assert!(control.stack_index() < STACK_COUNT);
            let stack = control.game().stack(control.stack_index()).unwrap();
            prop_assert!(stack.is_empty() || control.card_index() < stack.len());
            prop_assert!(control.game().is_full_deck());
        }
    }

    #[test]
    fn check_win_is_idempotent(seed in any::<u32>()) {
        let mut game = Game::deal(seed);
        game.check_win();
        let once = game.clone();
        game.check_win();
        prop_assert_eq!(game, once);
    }

    #[test]
    fn app_never_loses_cards(actions in prop::collection::vec(
        prop_oneof![arb_action(), Just(Action::Exit)], 0..200)
    ) {
        let mut app = App::new(Game::deal(5));
        for action in actions {
            app.action(action);
            prop_assert!(app.game().is_full_deck());
        }
    }
}
