//! Round transitions.
//!
//! Every operation is total: it takes the current state and returns the
//! next one, returning an unchanged copy when the input does not apply.
//! Nothing here holds state of its own; the store owns the live value.

use rand::Rng;

use super::intent::Intent;
use super::state::{Playing, RoundState};
use crate::cards::draw_five_cards;
use crate::core::HAND_SIZE;
use crate::rules::{compare, is_correct, CompareResult, Guess};

/// Apply an intent.
///
/// `rng` is only consumed when `Enter` deals a new round.
///
/// # Panics
///
/// Panics on `Intent::Digit` outside 0..=9.
pub fn apply<R: Rng + ?Sized>(state: &RoundState, intent: Intent, rng: &mut R) -> RoundState {
    match intent {
        Intent::Digit(d) => on_digit(state, d),
        Intent::Backspace => on_backspace(state),
        Intent::Enter => on_enter(state, rng),
        Intent::Start => on_start(state),
        Intent::Guess(guess) => on_guess(state, guess),
    }
}

/// Type a digit.
///
/// While idle or entering an amount, the digit is appended and leading
/// zeros are stripped (a lone "0" stays). From any round state the round is
/// abandoned and a new amount starts with this digit.
///
/// # Panics
///
/// Panics if `d > 9`.
pub fn on_digit(state: &RoundState, d: u8) -> RoundState {
    assert!(d <= 9, "Digit must be 0-9, got {d}");

    match state {
        RoundState::AmountEntry { raw } => {
            let appended = format!("{raw}{d}");
            let trimmed = appended.trim_start_matches('0');
            let raw = if trimmed.is_empty() { "0" } else { trimmed };
            RoundState::AmountEntry { raw: raw.to_string() }
        }
        RoundState::Idle
        | RoundState::Ready { .. }
        | RoundState::Playing(_)
        | RoundState::Lost { .. }
        | RoundState::Won { .. } => RoundState::AmountEntry { raw: d.to_string() },
    }
}

/// Delete the last typed digit. Deleting the only digit returns to idle.
pub fn on_backspace(state: &RoundState) -> RoundState {
    match state {
        RoundState::AmountEntry { raw } => {
            let mut raw = raw.clone();
            raw.pop();
            if raw.is_empty() {
                RoundState::Idle
            } else {
                RoundState::AmountEntry { raw }
            }
        }
        _ => state.clone(),
    }
}

/// Confirm the typed amount, or dismiss a finished round.
///
/// An amount that does not parse (including one too large for `u64`) counts
/// as zero, and zero goes back to idle.
pub fn on_enter<R: Rng + ?Sized>(state: &RoundState, rng: &mut R) -> RoundState {
    match state {
        RoundState::AmountEntry { raw } => {
            let amount = raw.parse::<u64>().unwrap_or(0);
            if amount == 0 {
                RoundState::Idle
            } else {
                RoundState::Ready {
                    amount,
                    cards: draw_five_cards(rng),
                }
            }
        }
        RoundState::Lost { .. } | RoundState::Won { .. } => RoundState::Idle,
        RoundState::Idle | RoundState::Ready { .. } | RoundState::Playing(_) => state.clone(),
    }
}

/// Reveal the first card.
pub fn on_start(state: &RoundState) -> RoundState {
    match state {
        RoundState::Ready { amount, cards } => RoundState::Playing(Playing::new(*amount, *cards)),
        _ => state.clone(),
    }
}

/// Guess the next card.
///
/// - Tie: the card is revealed, the amount stays, nothing is celebrated.
/// - Miss: the round is lost with the current amount; the losing card
///   counts as revealed.
/// - Hit: the amount doubles. Revealing the last card wins the round.
pub fn on_guess(state: &RoundState, guess: Guess) -> RoundState {
    let RoundState::Playing(playing) = state else {
        return state.clone();
    };
    let (Some(prev), Some(next)) = (playing.current_card(), playing.next_card()) else {
        return state.clone();
    };
    if !playing.awaiting_guess {
        return state.clone();
    }

    let revealed_count = playing.revealed_count + 1;

    if compare(prev, next) == CompareResult::Tie {
        if revealed_count >= HAND_SIZE {
            return RoundState::Won {
                amount: playing.amount,
                cards: playing.cards,
                pending_win_sound: false,
            };
        }
        return RoundState::Playing(Playing {
            revealed_count,
            awaiting_guess: true,
            pending_celebration: false,
            ..playing.clone()
        });
    }

    if !is_correct(guess, prev, next) {
        return RoundState::Lost {
            last_amount: playing.amount,
            cards: playing.cards,
            revealed_count,
        };
    }

    let amount = playing.amount.saturating_mul(2);
    if revealed_count >= HAND_SIZE {
        RoundState::Won {
            amount,
            cards: playing.cards,
            pending_win_sound: true,
        }
    } else {
        RoundState::Playing(Playing {
            amount,
            cards: playing.cards,
            revealed_count,
            awaiting_guess: true,
            pending_celebration: true,
            pending_coin_sound: true,
            celebration_tick: playing.celebration_tick.wrapping_add(1),
        })
    }
}

/// Clear the celebration signal.
pub fn acknowledge_celebration(state: &RoundState) -> RoundState {
    match state {
        RoundState::Playing(playing) => RoundState::Playing(Playing {
            pending_celebration: false,
            ..playing.clone()
        }),
        _ => state.clone(),
    }
}

/// Clear the coin sound signal.
pub fn acknowledge_coin_sound(state: &RoundState) -> RoundState {
    match state {
        RoundState::Playing(playing) => RoundState::Playing(Playing {
            pending_coin_sound: false,
            ..playing.clone()
        }),
        _ => state.clone(),
    }
}

/// Clear the win sound signal.
pub fn acknowledge_win_sound(state: &RoundState) -> RoundState {
    match state {
        RoundState::Won { amount, cards, .. } => RoundState::Won {
            amount: *amount,
            cards: *cards,
            pending_win_sound: false,
        },
        _ => state.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Draw, Rank, Suit};
    use crate::core::GameRng;

    fn draw(ranks: [Rank; 5]) -> Draw {
        let suits = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs];
        let mut cards = [Card::new(Suit::Clubs, Rank::Two); 5];
        for i in 0..5 {
            cards[i] = Card::new(suits[i], ranks[i]);
        }
        Draw::new(cards).unwrap()
    }

    fn playing(amount: u64, cards: Draw, revealed_count: usize) -> RoundState {
        RoundState::Playing(Playing {
            revealed_count,
            ..Playing::new(amount, cards)
        })
    }

    fn entry(raw: &str) -> RoundState {
        RoundState::AmountEntry { raw: raw.to_string() }
    }

    #[test]
    fn test_digit_from_idle() {
        assert_eq!(on_digit(&RoundState::Idle, 7), entry("7"));
        assert_eq!(on_digit(&RoundState::Idle, 0), entry("0"));
    }

    #[test]
    fn test_digit_strips_leading_zeros() {
        let state = on_digit(&RoundState::Idle, 0);
        let state = on_digit(&state, 0);
        assert_eq!(state, entry("0"));

        let state = on_digit(&state, 5);
        assert_eq!(state, entry("5"));

        let state = on_digit(&state, 0);
        assert_eq!(state, entry("50"));
    }

    #[test]
    fn test_digit_abandons_round() {
        let cards = draw([Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six]);

        assert_eq!(on_digit(&RoundState::Ready { amount: 5, cards }, 3), entry("3"));
        assert_eq!(on_digit(&playing(5, cards, 2), 3), entry("3"));
        assert_eq!(
            on_digit(
                &RoundState::Won {
                    amount: 80,
                    cards,
                    pending_win_sound: true
                },
                0
            ),
            entry("0")
        );
    }

    #[test]
    #[should_panic(expected = "Digit must be 0-9")]
    fn test_digit_out_of_range() {
        on_digit(&RoundState::Idle, 10);
    }

    #[test]
    fn test_backspace() {
        assert_eq!(on_backspace(&entry("42")), entry("4"));
        assert_eq!(on_backspace(&entry("4")), RoundState::Idle);
        assert_eq!(on_backspace(&RoundState::Idle), RoundState::Idle);
    }

    #[test]
    fn test_enter_deals_round() {
        let mut rng = GameRng::new(42);
        let state = on_enter(&entry("500"), &mut rng);

        match state {
            RoundState::Ready { amount, cards } => {
                assert_eq!(amount, 500);
                assert_eq!(cards, draw_five_cards(&mut GameRng::new(42)));
            }
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[test]
    fn test_enter_zero_or_overflow_goes_idle() {
        let mut rng = GameRng::new(1);

        assert_eq!(on_enter(&entry("0"), &mut rng), RoundState::Idle);
        assert_eq!(
            on_enter(&entry("99999999999999999999999"), &mut rng),
            RoundState::Idle
        );
    }

    #[test]
    fn test_enter_dismisses_finished_round() {
        let mut rng = GameRng::new(1);
        let cards = draw([Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six]);
        let lost = RoundState::Lost {
            last_amount: 10,
            cards,
            revealed_count: 2,
        };

        assert_eq!(on_enter(&lost, &mut rng), RoundState::Idle);
        assert_eq!(on_enter(&RoundState::Idle, &mut rng), RoundState::Idle);

        let ready = RoundState::Ready { amount: 10, cards };
        assert_eq!(on_enter(&ready, &mut rng), ready);
    }

    #[test]
    fn test_start() {
        let cards = draw([Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six]);
        let state = on_start(&RoundState::Ready { amount: 500, cards });

        assert_eq!(state, RoundState::Playing(Playing::new(500, cards)));
        assert_eq!(on_start(&RoundState::Idle), RoundState::Idle);
        assert_eq!(on_start(&state), state);
    }

    #[test]
    fn test_correct_guess_doubles_and_celebrates() {
        let cards = draw([Rank::Two, Rank::Nine, Rank::Four, Rank::Five, Rank::Six]);
        let state = on_guess(&playing(500, cards, 1), Guess::Higher);

        let p = state.as_playing().unwrap();
        assert_eq!(p.amount, 1000);
        assert_eq!(p.revealed_count, 2);
        assert!(p.awaiting_guess);
        assert!(p.pending_celebration);
        assert!(p.pending_coin_sound);
        assert_eq!(p.celebration_tick, 1);
    }

    #[test]
    fn test_wrong_guess_loses() {
        let cards = draw([Rank::Two, Rank::Nine, Rank::Four, Rank::Five, Rank::Six]);
        let state = on_guess(&playing(500, cards, 1), Guess::Lower);

        assert_eq!(
            state,
            RoundState::Lost {
                last_amount: 500,
                cards,
                revealed_count: 2
            }
        );
    }

    #[test]
    fn test_tie_reveals_without_doubling() {
        let cards = draw([Rank::Two, Rank::Three, Rank::Eight, Rank::Eight, Rank::Six]);
        let before = RoundState::Playing(Playing {
            revealed_count: 3,
            pending_celebration: true,
            ..Playing::new(500, cards)
        });

        let state = on_guess(&before, Guess::Lower);
        let p = state.as_playing().unwrap();
        assert_eq!(p.amount, 500);
        assert_eq!(p.revealed_count, 4);
        assert!(!p.pending_celebration);
        assert!(p.awaiting_guess);
    }

    #[test]
    fn test_tie_on_last_card_wins_without_sound() {
        let cards = draw([Rank::Two, Rank::Three, Rank::Four, Rank::Six, Rank::Six]);
        let state = on_guess(&playing(300, cards, 4), Guess::Higher);

        assert_eq!(
            state,
            RoundState::Won {
                amount: 300,
                cards,
                pending_win_sound: false
            }
        );
    }

    #[test]
    fn test_correct_last_guess_wins_with_sound() {
        let cards = draw([Rank::Two, Rank::Three, Rank::Four, Rank::Six, Rank::Ace]);
        let state = on_guess(&playing(300, cards, 4), Guess::Higher);

        assert_eq!(
            state,
            RoundState::Won {
                amount: 600,
                cards,
                pending_win_sound: true
            }
        );
    }

    #[test]
    fn test_guess_ignored_when_not_awaiting() {
        let cards = draw([Rank::Two, Rank::Nine, Rank::Four, Rank::Five, Rank::Six]);
        let state = RoundState::Playing(Playing {
            awaiting_guess: false,
            ..Playing::new(500, cards)
        });

        assert_eq!(on_guess(&state, Guess::Higher), state);
        assert_eq!(on_guess(&RoundState::Idle, Guess::Higher), RoundState::Idle);
    }

    #[test]
    fn test_guess_ignored_outside_revealed_range() {
        let cards = draw([Rank::Two, Rank::Nine, Rank::Four, Rank::Five, Rank::Six]);

        for revealed_count in [0, HAND_SIZE, HAND_SIZE + 3] {
            let state = playing(500, cards, revealed_count);
            assert_eq!(on_guess(&state, Guess::Higher), state);
            assert_eq!(on_guess(&state, Guess::Lower), state);
        }
    }

    #[test]
    fn test_acknowledgements() {
        let cards = draw([Rank::Two, Rank::Nine, Rank::Four, Rank::Five, Rank::Six]);
        let state = on_guess(&playing(500, cards, 1), Guess::Higher);

        let state = acknowledge_coin_sound(&state);
        let p = state.as_playing().unwrap();
        assert!(!p.pending_coin_sound);
        assert!(p.pending_celebration);

        let state = acknowledge_celebration(&state);
        assert!(!state.as_playing().unwrap().pending_celebration);

        // Idempotent
        assert_eq!(acknowledge_celebration(&state), state);

        let won = RoundState::Won {
            amount: 10,
            cards,
            pending_win_sound: true,
        };
        let won = acknowledge_win_sound(&won);
        assert_eq!(won.outcome(), Some(crate::round::RoundOutcome::Won { amount: 10 }));
        assert_eq!(acknowledge_win_sound(&won), won);
        assert_eq!(acknowledge_coin_sound(&won), won);
    }
}
