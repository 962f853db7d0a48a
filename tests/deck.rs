//! Card and deck tests.

use patience::{Card, Colour, DECK_SIZE, Deck, DeckOrder, Rank, ShuffleSeed, Suit, standard_deck};

fn card(rank: u8, suit: Suit) -> Card {
    Card::new(suit, Rank::from_value(rank).unwrap())
}

#[test]
fn card_colour_and_rank_arithmetic() {
    assert_eq!(card(5, Suit::Hearts).colour(), Colour::Red);
    assert_eq!(card(5, Suit::Diamonds).colour(), Colour::Red);
    assert_eq!(card(5, Suit::Clubs).colour(), Colour::Black);
    assert_eq!(Card::joker(Suit::RedJoker).colour(), Colour::Red);
    assert_eq!(Card::joker(Suit::BlackJoker).colour(), Colour::Black);

    assert_eq!(Rank::Ace.value(), 1);
    assert_eq!(Rank::King.next(), None);
    assert_eq!(Rank::Ace.previous(), None);
    assert_eq!(Rank::Nine.next(), Some(Rank::Ten));
    assert_eq!(Rank::from_value(0), None);
    assert_eq!(Rank::from_value(14), None);

    assert!(card(6, Suit::Hearts).is_one_below(card(7, Suit::Hearts)));
    assert!(!card(7, Suit::Hearts).is_one_below(card(6, Suit::Hearts)));
    assert!(!Card::joker(Suit::RedJoker).is_one_below(card(1, Suit::Hearts)));

    assert_eq!(Suit::Spades.index(), Some(3));
    assert_eq!(Suit::RedJoker.index(), None);
    assert_eq!(Suit::from_index(1), Some(Suit::Diamonds));
    assert_eq!(Suit::from_index(4), None);
}

#[test]
fn card_display() {
    assert_eq!(card(1, Suit::Spades).to_string(), "AS");
    assert_eq!(card(10, Suit::Hearts).to_string(), "TH");
    assert_eq!(Card::joker(Suit::BlackJoker).to_string(), "BJ");
}

#[test]
fn standard_deck_is_forward_ordered() {
    let cards = standard_deck();
    assert_eq!(cards.len(), DECK_SIZE);
    assert_eq!(cards[0], card(1, Suit::Clubs));
    assert_eq!(cards[13], card(1, Suit::Diamonds));
    assert_eq!(cards[51], card(13, Suit::Spades));
}

#[test]
fn lookup_and_removal_keep_order() {
    let mut deck = Deck::from_cards(standard_deck());

    assert_eq!(
        deck.card(Suit::Hearts, Some(Rank::Queen)),
        Some(card(12, Suit::Hearts))
    );
    assert_eq!(deck.card(Suit::RedJoker, None), None);
    assert_eq!(deck.top(), Some(card(1, Suit::Clubs)));
    assert_eq!(deck.bottom(), Some(card(13, Suit::Spades)));

    assert_eq!(
        deck.remove_card(Suit::Clubs, Some(Rank::Two)),
        Some(card(2, Suit::Clubs))
    );
    assert_eq!(deck.get(1), Some(card(3, Suit::Clubs)));
    assert_eq!(deck.remove_card(Suit::Clubs, Some(Rank::Two)), None);

    assert_eq!(deck.remove_top_card(), Some(card(1, Suit::Clubs)));
    assert_eq!(deck.remove_bottom_card(), Some(card(13, Suit::Spades)));
    assert_eq!(deck.len(), DECK_SIZE - 3);

    let hearts = deck.remove_cards_of_suit(Suit::Hearts);
    assert_eq!(hearts.len(), 13);
    assert_eq!(hearts[0], card(1, Suit::Hearts));
    assert_eq!(hearts[12], card(13, Suit::Hearts));

    let kings = deck.remove_cards_of_rank(Rank::King);
    assert_eq!(kings, vec![card(13, Suit::Clubs), card(13, Suit::Diamonds)]);
    assert_eq!(deck.len(), DECK_SIZE - 3 - 13 - 2);
}

#[test]
fn out_of_range_access_returns_none() {
    let mut deck = Deck::new();

    assert_eq!(deck.get(0), None);
    assert_eq!(deck.top(), None);
    assert_eq!(deck.bottom(), None);
    assert_eq!(deck.remove_top_card(), None);
    assert_eq!(deck.remove_bottom_card(), None);
    assert_eq!(deck.remove_at(3), None);

    deck.set_cards(standard_deck());
    assert_eq!(deck.get(DECK_SIZE), None);
    assert_eq!(deck.remove_at(DECK_SIZE), None);
}

#[test]
fn shuffle_with_fixed_seed_is_reproducible() {
    let mut first = Deck::from_cards(standard_deck());
    let mut second = Deck::from_cards(standard_deck());

    first.shuffle(ShuffleSeed::Fixed(99));
    second.shuffle(ShuffleSeed::Fixed(99));
    assert_eq!(first.cards(), second.cards());
    assert_eq!(first.order(), DeckOrder::Random);
    assert_ne!(first.cards(), standard_deck().as_slice());

    // Continuing from identical generator states stays in step.
    first.shuffle(ShuffleSeed::Continue);
    second.shuffle(ShuffleSeed::Continue);
    assert_eq!(first.cards(), second.cards());
}

#[test]
fn integer_seed_convention() {
    assert_eq!(ShuffleSeed::from(12), ShuffleSeed::Fixed(12));
    assert_eq!(ShuffleSeed::from(-1), ShuffleSeed::Continue);
    assert_eq!(ShuffleSeed::from(0), ShuffleSeed::default());
}

#[test]
fn sort_is_idempotent() {
    let mut deck = Deck::from_cards(standard_deck());
    deck.shuffle(ShuffleSeed::Fixed(5));

    deck.sort();
    assert_eq!(deck.order(), DeckOrder::Forward);
    let once = deck.cards().to_vec();
    deck.sort();
    assert_eq!(deck.cards(), once.as_slice());
    assert_eq!(once, standard_deck());
}

#[test]
fn reverse_sort_mirrors_forward_order() {
    let mut deck = Deck::from_cards(standard_deck());
    deck.shuffle(ShuffleSeed::Fixed(6));

    deck.reverse_sort();
    assert_eq!(deck.order(), DeckOrder::Reverse);
    assert_eq!(deck.top(), Some(card(13, Suit::Spades)));
    assert_eq!(deck.bottom(), Some(card(1, Suit::Clubs)));

    let mut mirrored = standard_deck();
    mirrored.reverse();
    assert_eq!(deck.cards(), mirrored.as_slice());

    deck.reverse_sort();
    assert_eq!(deck.cards(), mirrored.as_slice());
}

#[test]
fn reverse_twice_returns_to_forward() {
    let mut deck = Deck::from_cards(standard_deck());
    deck.sort();

    deck.reverse();
    assert_eq!(deck.order(), DeckOrder::Reverse);
    deck.reverse();
    assert_eq!(deck.order(), DeckOrder::Forward);
    assert_eq!(deck.cards(), standard_deck().as_slice());

    deck.shuffle(ShuffleSeed::Fixed(1));
    deck.reverse();
    assert_eq!(deck.order(), DeckOrder::Random);
}

#[test]
fn sort_keeps_jokers_after_ranked_cards() {
    let mut cards = vec![
        Card::joker(Suit::BlackJoker),
        card(3, Suit::Spades),
        Card::joker(Suit::RedJoker),
        card(1, Suit::Diamonds),
    ];
    let mut deck = Deck::from_cards(cards.clone());

    deck.sort();
    assert_eq!(
        deck.cards(),
        &[
            card(1, Suit::Diamonds),
            card(3, Suit::Spades),
            Card::joker(Suit::BlackJoker),
            Card::joker(Suit::RedJoker),
        ]
    );

    cards.retain(|c| !c.suit.is_joker());
    deck.set_cards(cards);
    deck.reverse_sort();
    assert_eq!(
        deck.cards(),
        &[card(3, Suit::Spades), card(1, Suit::Diamonds)]
    );
}

#[test]
fn arrange_random_always_reshuffles() {
    let mut deck = Deck::from_cards(standard_deck());
    deck.shuffle(ShuffleSeed::Fixed(21));
    let before = deck.cards().to_vec();

    deck.arrange(DeckOrder::Random);
    assert_ne!(deck.cards(), before.as_slice());

    deck.arrange(DeckOrder::Forward);
    assert_eq!(deck.cards(), standard_deck().as_slice());
}

#[test]
fn add_and_take_cards() {
    let mut deck = Deck::new();
    deck.add_cards([card(4, Suit::Clubs), card(5, Suit::Clubs)]);
    assert_eq!(deck.len(), 2);

    let taken = deck.take_cards();
    assert_eq!(taken, vec![card(4, Suit::Clubs), card(5, Suit::Clubs)]);
    assert!(deck.is_empty());
}
