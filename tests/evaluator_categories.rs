use joker_score::cards::{parse_cards, Card, Enhancement, Suit};
use joker_score::evaluator::{evaluate, HandRank, RuleFlags};
use joker_score::view::{CardView, SuitRemap, ViewModifiers};

fn classify_with(text: &str, rules: RuleFlags, mods: ViewModifiers) -> (HandRank, Vec<bool>) {
    let cards = parse_cards(text).expect("valid cards");
    classify_cards(&cards, rules, mods)
}

fn classify_cards(cards: &[Card], rules: RuleFlags, mods: ViewModifiers) -> (HandRank, Vec<bool>) {
    let views: Vec<CardView> = cards.iter().map(|c| CardView::project(*c, &mods)).collect();
    let mut marks = vec![false; cards.len()];
    let rank = evaluate(rules, &views, &mut marks).expect("matching buffers");
    (rank, marks)
}

fn classify(text: &str) -> (HandRank, Vec<bool>) {
    classify_with(text, RuleFlags::default(), ViewModifiers::default())
}

#[test]
fn category_straight_small() {
    let (rank, marks) = classify("2h 3s 4c 5d 6h");
    assert_eq!(rank, HandRank::Straight);
    assert_eq!(marks, vec![true; 5]);
}

#[test]
fn category_straight_ace_low() {
    let (rank, marks) = classify("As 2h 3d 4s 5s");
    assert_eq!(rank, HandRank::Straight);
    assert_eq!(marks, vec![true; 5]);
}

#[test]
fn category_straight_ace_high_any_order() {
    let (rank, marks) = classify("Ah Js Tc Kd Qh");
    assert_eq!(rank, HandRank::Straight);
    assert_eq!(marks, vec![true; 5]);
}

#[test]
fn no_wraparound_straight() {
    assert_eq!(classify("Qs Kh As 2d 3c").0, HandRank::HighCard);
}

#[test]
fn four_cards_are_never_a_straight_without_the_rule() {
    assert_eq!(classify("2h 3s 4c 5d").0, HandRank::HighCard);
    let four_fingers = RuleFlags { four_fingers: true, shortcut: false };
    let (rank, marks) = classify_with("2h 3s 4c 5d 9c", four_fingers, ViewModifiers::default());
    assert_eq!(rank, HandRank::Straight);
    assert_eq!(marks, vec![true, true, true, true, false]);
}

#[test]
fn shortcut_allows_single_gaps() {
    let shortcut = RuleFlags { four_fingers: false, shortcut: true };
    let plain = ViewModifiers::default();
    assert_eq!(classify("3h 5s 7c 9d Jc").0, HandRank::HighCard);
    assert_eq!(classify_with("3h 5s 7c 9d Jc", shortcut, plain).0, HandRank::Straight);
    // two missing ranks in a row still break the run
    assert_eq!(classify_with("2h 5s 7c 9d Jc", shortcut, plain).0, HandRank::HighCard);
}

#[test]
fn wildcard_flush_via_merged_suits() {
    // The eight counts as hearts and spades at once, completing a heart flush.
    let mods = ViewModifiers {
        suit_remap: SuitRemap::identity().merge(Suit::Spades, Suit::Hearts),
        all_face: false,
    };
    let (rank, marks) = classify_with("2h 5h 9h Kh 8s", RuleFlags::default(), mods);
    assert_eq!(rank, HandRank::Flush);
    assert_eq!(marks, vec![true; 5]);
    assert_eq!(classify("2h 5h 9h Kh 8s").0, HandRank::HighCard);
}

#[test]
fn wild_enhancement_completes_a_flush() {
    let mut cards = parse_cards("2d 5d 9d Kd 8s").unwrap();
    cards[4] = cards[4].with_enhancement(Enhancement::Wild);
    let (rank, marks) = classify_cards(&cards, RuleFlags::default(), ViewModifiers::default());
    assert_eq!(rank, HandRank::Flush);
    assert_eq!(marks, vec![true; 5]);
}

#[test]
fn wild_two_and_merged_eight_make_a_heart_flush() {
    let mut cards = parse_cards("2c 4h 6h 8s Th").unwrap();
    cards[0] = cards[0].with_enhancement(Enhancement::Wild);
    let mods = ViewModifiers {
        suit_remap: SuitRemap::identity().merge(Suit::Spades, Suit::Hearts),
        all_face: false,
    };
    let (rank, marks) = classify_cards(&cards, RuleFlags::default(), mods);
    assert_eq!(rank, HandRank::Flush);
    assert_eq!(marks, vec![true; 5]);

    // every other rank from two to ten is a straight once single gaps are allowed
    let shortcut = RuleFlags { four_fingers: false, shortcut: true };
    assert_eq!(classify_cards(&cards, shortcut, mods).0, HandRank::StraightFlush);
    let plain = ViewModifiers::default();
    assert_eq!(classify_cards(&cards, RuleFlags::default(), plain).0, HandRank::HighCard);
}

#[test]
fn oversized_hands_count_past_a_byte() {
    let cards = vec!["2c".parse::<Card>().unwrap(); 256];
    let (rank, marks) = classify_cards(&cards, RuleFlags::default(), ViewModifiers::default());
    assert_eq!(rank, HandRank::FlushFive);
    assert_eq!(marks, vec![true; 256]);
}

#[test]
fn last_qualifying_suit_wins() {
    // With four-card flushes and an all-suit wild, both clubs and spades qualify.
    let mut cards = parse_cards("2c 5c 9c 3s 7s Js Ah").unwrap();
    cards[6] = cards[6].with_enhancement(Enhancement::Wild);
    let four_fingers = RuleFlags { four_fingers: true, shortcut: false };
    let (rank, marks) = classify_cards(&cards, four_fingers, ViewModifiers::default());
    assert_eq!(rank, HandRank::Flush);
    assert_eq!(marks, vec![false, false, false, true, true, true, true]);
}

#[test]
fn flush_five_outranks_five_of_a_kind() {
    let (rank, marks) = classify("7h 7h 7h 7h 7h");
    assert_eq!(rank, HandRank::FlushFive);
    assert_eq!(marks, vec![true; 5]);
    assert_eq!(classify("7h 7h 7d 7h 7h").0, HandRank::FiveOfAKind);
    assert!(HandRank::FlushFive > HandRank::FiveOfAKind);
}

#[test]
fn flush_house_outranks_full_house() {
    let (rank, marks) = classify("Qs Qs Qs 4s 4s");
    assert_eq!(rank, HandRank::FlushHouse);
    assert_eq!(marks, vec![true; 5]);
    assert_eq!(classify("Qs Qs Qh 4s 4s").0, HandRank::FullHouse);
    assert!(HandRank::FlushHouse > HandRank::FullHouse);
    assert!(HandRank::FlushHouse > HandRank::FourOfAKind);
}

#[test]
fn straight_flush_marks_the_union() {
    let four_fingers = RuleFlags { four_fingers: true, shortcut: false };
    // flush of hearts over five cards, straight over the first four
    let (rank, marks) = classify_with("9h Th Jh Qh 3h", four_fingers, ViewModifiers::default());
    assert_eq!(rank, HandRank::StraightFlush);
    assert_eq!(marks, vec![true; 5]);
}

#[test]
fn group_hands_mark_only_their_cards() {
    let (t, f) = (true, false);
    assert_eq!(classify("9c 9d 9h 9s Ac"), (HandRank::FourOfAKind, vec![t, t, t, t, f]));
    assert_eq!(classify("9c Kd 9h 2s 9s"), (HandRank::ThreeOfAKind, vec![t, f, t, f, t]));
    assert_eq!(classify("9c Kd 9h Ks 2s"), (HandRank::TwoPair, vec![t, t, t, t, f]));
    assert_eq!(classify("4c 4d 9h Ks 2s"), (HandRank::Pair, vec![true, true, false, false, false]));
    assert_eq!(classify("5c 5d 5h 8s 8c"), (HandRank::FullHouse, vec![true; 5]));
}

#[test]
fn high_card_marks_first_of_the_highest_rank() {
    let (rank, marks) = classify("4c Kd 9h 2s 7c");
    assert_eq!(rank, HandRank::HighCard);
    assert_eq!(marks, vec![false, true, false, false, false]);
    assert_eq!(classify("Ah"), (HandRank::HighCard, vec![true]));
}

#[test]
fn two_pair_in_six_cards_takes_the_highest_pairs() {
    let (rank, marks) = classify("3c 3d Jh Js 8c 8d");
    assert_eq!(rank, HandRank::TwoPair);
    assert_eq!(marks, vec![false, false, true, true, true, true]);
}

#[test]
fn mismatched_mark_buffer_is_an_error() {
    let cards = parse_cards("As Ks").unwrap();
    let views: Vec<CardView> =
        cards.iter().map(|c| CardView::project(*c, &ViewModifiers::default())).collect();
    let mut marks = [false; 3];
    assert!(evaluate(RuleFlags::default(), &views, &mut marks).is_err());
}
