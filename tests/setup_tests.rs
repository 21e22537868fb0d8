//! Game-start configuration and initialization tests.

use commander_tally::core::{
    parse_starting_life, GameSetup, SeatColor, SeatId, SetupError, StatusFlags, LIFE_PRESETS,
};

/// The custom-life field accepts positive whole numbers only.
#[test]
fn test_custom_life_validation() {
    assert_eq!(parse_starting_life("25"), Ok(25));

    for rejected in ["20.5", "0", "-3", "abc"] {
        assert_eq!(
            parse_starting_life(rejected),
            Err(SetupError::InvalidStartingLife),
            "{rejected:?} should not start a game"
        );
    }
}

/// The validation error reads as a sentence the config screen shows.
#[test]
fn test_validation_error_message() {
    let message = parse_starting_life("20.5").unwrap_err().to_string();
    assert_eq!(
        message,
        "Starting life must be a whole number greater than or equal to 1."
    );
}

/// An accepted custom value becomes every seat's starting life.
#[test]
fn test_accepted_value_applies_to_all_seats() {
    let life = parse_starting_life("25").expect("valid input");
    let state = GameSetup::new().starting_life(life).seat_count(4).start();

    for (_, player) in state.players() {
        assert_eq!(player.life, 25);
    }
}

/// Freshly-seated players: chosen life, zero poison, palette color by
/// seat, no commander, zeroed ledger with a self sentinel, flags false.
#[test]
fn test_initial_player_layout() {
    let state = GameSetup::new().starting_life(40).seat_count(4).start();

    let expected_colors = [
        SeatColor::Red,
        SeatColor::Blue,
        SeatColor::Green,
        SeatColor::Yellow,
    ];

    for (seat, player) in state.players() {
        assert_eq!(player.life, 40);
        assert_eq!(player.poison, 0);
        assert_eq!(player.color, expected_colors[seat.index()]);
        assert_eq!(player.status, StatusFlags::default());
        assert!(player.commander.is_none());

        for other in SeatId::all(4) {
            let entry = player.damage.from_source(other);
            if other == seat {
                assert_eq!(entry, None, "self entry must stay not-applicable");
            } else {
                assert_eq!(entry, Some(0));
            }
        }
    }
}

/// Every preset and seat count produces a well-formed table.
#[test]
fn test_presets_and_seat_counts() {
    for life in LIFE_PRESETS {
        for seats in 1..=6 {
            let state = GameSetup::new().starting_life(life).seat_count(seats).start();
            assert_eq!(state.seat_count(), seats);
            assert_eq!(state.outcome(), None);
        }
    }
}

/// Resetting is just dropping the state and building a new one; nothing
/// carries over.
#[test]
fn test_new_game_starts_clean() {
    let mut state = GameSetup::new().starting_life(20).seat_count(2).start();
    state.set_life(SeatId::new(0), 0);
    state.set_poison(SeatId::new(1), 7);

    state = GameSetup::new().starting_life(30).seat_count(3).start();

    assert_eq!(state.seat_count(), 3);
    assert_eq!(state.player(SeatId::new(0)).life, 30);
    assert_eq!(state.player(SeatId::new(1)).poison, 0);
    assert_eq!(state.outcome(), None);
}
