use predictor_core::chance::ReachEstimator;
use predictor_core::game::phase::GamePhase;
use predictor_core::game::session::{DealOutcome, GameSession};
use predictor_core::model::rank::Rank;
use predictor_core::model::suit::Suit;

#[test]
fn consecutive_hands_share_one_depleting_population() {
    let mut session = GameSession::with_seed(3, 1, 1000, 11).expect("valid configuration");

    for _ in 0..5 {
        session.deal().expect("first hand deals cleanly");
    }
    // 6 hole cards + 3 community cards left the pool; no automatic
    // replenish happened at the hand boundary.
    assert_eq!(session.population().unseen_len(), 43);
    assert_eq!(session.phase(), GamePhase::HoleCards);

    for _ in 0..5 {
        session.deal().expect("second hand deals cleanly");
    }
    assert_eq!(session.population().unseen_len(), 34);
}

#[test]
fn replenish_grows_pool_by_exactly_one_configured_set() {
    let mut session = GameSession::with_seed(2, 2, 1000, 5).expect("valid configuration");
    assert_eq!(session.population().unseen_len(), 104);
    session.replenish();
    assert_eq!(session.population().unseen_len(), 208);
}

#[test]
fn betting_round_watermark_survives_smaller_bets() {
    let mut session = GameSession::with_seed(2, 1, 1000, 5).expect("valid configuration");
    session.reset_min_bet();
    session.place_bet(0, 80);
    session.place_bet(1, 30);
    assert_eq!(session.min_bet(), 80);
    assert_eq!(session.pot().total(), 110);
    assert_eq!(session.participant(0).money(), 920);
    assert_eq!(session.participant(1).money(), 970);
}

#[test]
fn own_and_table_viewpoints_diverge_after_hole_cards() {
    let mut session = GameSession::with_seed(2, 1, 1000, 9).expect("valid configuration");
    session.deal().expect("hole cards");

    // No community cards yet: the opponent stand-in sees nothing.
    let table = session.table_chances();
    assert_eq!(table.one_pair, 0.0);

    let own = session.chances_for(0);
    assert!(own.one_pair > 0.0);

    let DealOutcome::FlopDealt(cards) = session.deal().expect("flop") else {
        panic!("expected a flop");
    };
    let table = session.table_chances();
    let reference = ReachEstimator::new(session.population().unseen(), &cards).estimate();
    assert_eq!(table.as_array(), reference.as_array());
}

#[test]
fn manual_give_mode_matches_reference_pair_numbers() {
    let mut session = GameSession::with_seed(1, 1, 1000, 1).expect("valid configuration");
    session.give_card(0, Suit::Hearts, Rank::Five).expect("five of hearts");
    session
        .give_card(0, Suit::Diamonds, Rank::Five)
        .expect("five of diamonds");

    let chances = session.chances_for(0);
    assert_eq!(chances.one_pair, 1.0);
    assert_eq!(chances.two_pair, 1.0);
    let ratio = 2.0 / 50.0;
    assert!((chances.three_of_a_kind - (ratio + ratio * ratio)).abs() < 1e-9);
}
