//! Drill integration tests.

extern crate alloc;

use alloc::collections::VecDeque;

use bjdrill::drill::PROMPT;
use bjdrill::{
    Action, DEALER_RANKS, DEFAULT_REASON, Deal, DealSource, Drill, DrillOptions, HandGenerator,
    PLAYER_RANKS, ParseActionError, RoundOutcome, RoundResult, Tally,
};

/// Deals a fixed sequence, then repeats the last deal.
struct Scripted(VecDeque<Deal>);

impl Scripted {
    fn new(deals: &[Deal]) -> Self {
        Self(deals.iter().copied().collect())
    }
}

impl DealSource for Scripted {
    fn deal(&mut self) -> Deal {
        if self.0.len() > 1 {
            self.0.pop_front().unwrap()
        } else {
            self.0[0]
        }
    }
}

fn quiet() -> DrillOptions {
    DrillOptions::default().with_banner(false)
}

fn run(deals: &[Deal], input: &str, options: DrillOptions) -> (Tally, String) {
    let mut source = Scripted::new(deals);
    let mut drill = Drill::with_source(&mut source, options);
    let mut output = Vec::new();
    let tally = drill.run(input.as_bytes(), &mut output).unwrap();
    assert_eq!(drill.tally(), tally);
    (tally, String::from_utf8(output).unwrap())
}

#[test]
fn action_tokens_parse_in_any_case() {
    for action in Action::ALL {
        let token = action.token();
        assert_eq!(token.parse::<Action>(), Ok(action));
        assert_eq!(token.to_uppercase().parse::<Action>(), Ok(action));
        assert_eq!(format!("  {token}\t\n").parse::<Action>(), Ok(action));
        assert_eq!(action.to_string(), token);
    }
    assert_eq!(" St ".parse::<Action>(), Ok(Action::Stand));
    assert_eq!("sP".parse::<Action>(), Ok(Action::Split));
}

#[test]
fn action_parse_errors() {
    assert_eq!("".parse::<Action>(), Err(ParseActionError::Empty));
    assert_eq!("  \n".parse::<Action>(), Err(ParseActionError::Empty));
    assert_eq!("hit".parse::<Action>(), Err(ParseActionError::Unknown));
    assert_eq!("s".parse::<Action>(), Err(ParseActionError::Unknown));
    assert_eq!("h st".parse::<Action>(), Err(ParseActionError::Unknown));
}

#[test]
fn deal_derivation() {
    let soft = Deal::new(1, 7, 9).hand_state();
    assert_eq!(soft.player_total, 8);
    assert!(soft.is_soft);
    assert!(!soft.is_pair);
    assert_eq!(soft.dealer_card, 9);

    let ace_ten = Deal::new(10, 1, 2).hand_state();
    assert_eq!(ace_ten.player_total, 11);
    assert!(ace_ten.is_soft);

    let hard = Deal::new(9, 7, 10).hand_state();
    assert!(!hard.is_soft);
    assert!(!hard.is_pair);

    let pair = Deal::new(4, 4, 5).hand_state();
    assert!(pair.is_pair);
    assert!(!pair.is_soft);
    assert_eq!(pair.resolve().0, Action::Split);
}

#[test]
fn generator_is_seeded_and_in_range() {
    let mut a = HandGenerator::new(1234);
    let mut b = HandGenerator::new(1234);
    let mut seen_ace = false;
    let mut seen_dealer_ace = false;
    for _ in 0..1000 {
        let deal = a.deal();
        assert_eq!(deal, b.deal());
        assert!(PLAYER_RANKS.contains(&deal.card1));
        assert!(PLAYER_RANKS.contains(&deal.card2));
        assert!(DEALER_RANKS.contains(&deal.dealer_card));
        seen_ace |= deal.card1 == 1 || deal.card2 == 1;
        seen_dealer_ace |= deal.dealer_card == 11;
    }
    assert!(seen_ace);
    assert!(seen_dealer_ace);
}

#[test]
fn generators_with_different_seeds_differ() {
    let mut a = HandGenerator::new(1);
    let mut b = HandGenerator::new(2);
    let first: Vec<Deal> = (0..20).map(|_| a.deal()).collect();
    let second: Vec<Deal> = (0..20).map(|_| b.deal()).collect();
    assert_ne!(first, second);
}

#[test]
fn grading_accepts_every_token_variant() {
    let hands = [
        Deal::new(5, 6, 6),
        Deal::new(9, 7, 5),
        Deal::new(9, 7, 10),
        Deal::new(4, 4, 5),
    ];
    for deal in hands {
        let hand = deal.hand_state();
        let token = hand.resolve().0.token();
        for input in [
            token.to_string(),
            token.to_uppercase(),
            format!(" {token} \n"),
            format!("\t{}\r\n", token.to_uppercase()),
        ] {
            let result = RoundResult::grade(hand, &input);
            assert_eq!(result.outcome, RoundOutcome::Correct, "{input:?}");
        }
    }
}

#[test]
fn grading_wrong_and_unknown_answers() {
    let hand = Deal::new(9, 7, 10).hand_state();

    let wrong = RoundResult::grade(hand, "st");
    assert_eq!(wrong.outcome, RoundOutcome::Wrong);
    assert_eq!(wrong.answer, Some(Action::Stand));
    assert_eq!(wrong.expected, Action::Hit);
    assert_eq!(wrong.reason, DEFAULT_REASON);

    let garbage = RoundResult::grade(hand, "hit me");
    assert_eq!(garbage.outcome, RoundOutcome::Wrong);
    assert_eq!(garbage.answer, None);

    let empty = RoundResult::grade(hand, "\n");
    assert!(!empty.is_correct());
}

#[test]
fn tally_wrong_never_underflows() {
    let tally = Tally {
        rounds: 0,
        correct: 1,
    };
    assert_eq!(tally.wrong(), 0);
}

#[test]
fn tally_counts_rounds() {
    let hand = Deal::new(5, 6, 6).hand_state();
    let mut tally = Tally::default();
    tally.record(&RoundResult::grade(hand, "d"));
    tally.record(&RoundResult::grade(hand, "h"));
    tally.record(&RoundResult::grade(hand, "D"));
    assert_eq!(tally.rounds, 3);
    assert_eq!(tally.correct, 2);
    assert_eq!(tally.wrong(), 1);
}

#[test]
fn correct_round_transcript() {
    let (tally, output) = run(&[Deal::new(5, 6, 6)], "d\n", quiet().with_rounds(Some(1)));
    assert_eq!(tally, Tally { rounds: 1, correct: 1 });
    assert_eq!(
        output,
        format!(
            "\nYour cards: 5 and 6 (Total: 11)\n\
             Dealer's visible card: 6\n\
             {PROMPT}Correct! You played optimally.\n\
             \nSession over: 1/1 correct.\n"
        )
    );
}

#[test]
fn wrong_round_transcript() {
    let (tally, output) = run(&[Deal::new(10, 6, 10)], "ST\n", quiet().with_rounds(Some(1)));
    assert_eq!(tally, Tally { rounds: 1, correct: 0 });
    assert!(output.contains("Your cards: 10 and 6 (Total: 16)\n"));
    assert!(output.contains("Dealer's visible card: 10\n"));
    assert!(output.contains("Wrong! The correct move was: h.\n"));
    assert!(output.contains(&format!("Reason: {DEFAULT_REASON}\n")));
    assert!(!output.contains("Correct!"));
}

#[test]
fn pair_round_reports_split() {
    let (_, output) = run(&[Deal::new(8, 8, 10)], "h\n", quiet().with_rounds(Some(1)));
    assert!(output.contains("Wrong! The correct move was: sp.\n"));
    assert!(output.contains("Reason: Splitting eights avoids a weak 16"));
}

#[test]
fn session_ends_at_end_of_input() {
    let deals = [Deal::new(5, 6, 6), Deal::new(10, 7, 9), Deal::new(2, 3, 4)];
    let (tally, output) = run(&deals, "d\nst\nsp\n", quiet());
    assert_eq!(tally, Tally { rounds: 3, correct: 2 });
    assert_eq!(output.matches(PROMPT).count(), 4);
    assert!(output.ends_with("\n\nSession over: 2/3 correct.\n"));
}

#[test]
fn answer_without_trailing_newline_is_graded() {
    let (tally, _) = run(&[Deal::new(5, 6, 6)], "  D  ", quiet());
    assert_eq!(tally, Tally { rounds: 1, correct: 1 });
}

#[test]
fn invalid_utf8_answer_is_graded_wrong() {
    let mut drill = Drill::with_source(Scripted::new(&[Deal::new(5, 6, 6)]), quiet());
    let mut input: &[u8] = b"\xff\xfe\nd\n";
    let mut output = Vec::new();

    let first = drill.play_round(&mut input, &mut output).unwrap().unwrap();
    assert_eq!(first.outcome, RoundOutcome::Wrong);
    assert_eq!(first.answer, None);

    let second = drill.play_round(&mut input, &mut output).unwrap().unwrap();
    assert_eq!(second.outcome, RoundOutcome::Correct);

    assert!(drill.play_round(&mut input, &mut output).unwrap().is_none());
    assert_eq!(drill.tally(), Tally { rounds: 2, correct: 1 });

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Wrong! The correct move was: d.\n"));
    assert!(output.contains("Correct! You played optimally.\n"));
}

#[test]
fn invalid_utf8_does_not_end_a_session() {
    let mut drill = Drill::with_source(Scripted::new(&[Deal::new(5, 6, 6)]), quiet());
    let mut output = Vec::new();
    let tally = drill.run(&b"\xff\xfe\nd\n"[..], &mut output).unwrap();
    assert_eq!(tally, Tally { rounds: 2, correct: 1 });
}

#[test]
fn empty_input_ends_immediately() {
    let (tally, output) = run(&[Deal::new(5, 6, 6)], "", quiet());
    assert_eq!(tally, Tally::default());
    assert!(output.ends_with("Session over: 0/0 correct.\n"));
}

#[test]
fn round_limit_stops_before_reading_more() {
    let (tally, output) = run(&[Deal::new(5, 6, 6)], "d\nd\nd\nd\n", quiet().with_rounds(Some(2)));
    assert_eq!(tally.rounds, 2);
    assert_eq!(output.matches(PROMPT).count(), 2);
}

#[test]
fn banner_is_printed_first() {
    let (_, output) = run(&[Deal::new(5, 6, 6)], "", DrillOptions::default());
    assert!(output.starts_with(
        "Welcome to the Blackjack Strategy Trainer!\n\
         Enter your moves using: h = hit, st = stand, d = double, sp = split\n\
         Press Ctrl+C to quit.\n\n"
    ));
}

#[test]
fn seeded_drills_are_reproducible() {
    let options = quiet().with_seed(99).with_rounds(Some(5));
    let input = "h\nh\nh\nh\nh\n";

    let mut first = Vec::new();
    Drill::new(options).run(input.as_bytes(), &mut first).unwrap();
    let mut second = Vec::new();
    let mut drill = Drill::new(options);
    drill.run(input.as_bytes(), &mut second).unwrap();

    assert_eq!(first, second);
    assert_eq!(drill.tally().rounds, 5);
}

#[test]
fn options_builder_sets_fields() {
    let options = DrillOptions::default()
        .with_seed(5)
        .with_rounds(Some(8))
        .with_banner(false);
    assert_eq!(options.seed, 5);
    assert_eq!(options.rounds, Some(8));
    assert!(!options.banner);

    let defaults = DrillOptions::default();
    assert_eq!(defaults.rounds, None);
    assert!(defaults.banner);
}
