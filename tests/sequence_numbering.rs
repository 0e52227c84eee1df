use ascii_eta::alphabet::Alphabet;
use ascii_eta::config::{ConfigError, MAX_SUPPORTED_LENGTH};
use ascii_eta::numbering::{count_up_to, SequenceNumbering};
use ascii_eta::types::{DomainError, Edge, SequenceNumber};
use num_bigint::BigUint;
use proptest::prelude::*;

fn printable() -> SequenceNumbering {
    SequenceNumbering::new(Alphabet::printable_ascii(), 16).unwrap()
}

fn rank(numbering: &SequenceNumbering, s: &str) -> u64 {
    numbering
        .rank_of(s)
        .unwrap()
        .to_string()
        .parse()
        .unwrap()
}

#[test]
fn invariant_max_length_is_bounded() {
    let alphabet = Alphabet::printable_ascii();
    assert!(matches!(
        SequenceNumbering::new(alphabet, 0),
        Err(ConfigError::MaxStringLength(0))
    ));
    assert!(matches!(
        SequenceNumbering::new(alphabet, MAX_SUPPORTED_LENGTH + 1),
        Err(ConfigError::MaxStringLength(_))
    ));
    assert!(SequenceNumbering::new(alphabet, usize::MAX).is_err());

    let widest = SequenceNumbering::new(alphabet, MAX_SUPPORTED_LENGTH).unwrap();
    assert_eq!(widest.max_length(), MAX_SUPPORTED_LENGTH);
}

#[test]
fn invariant_rank_is_dense_along_enumeration() {
    // A small alphabet reaches longer strings quickly.
    let alphabet = Alphabet::new(32, 42).unwrap();
    let numbering = SequenceNumbering::new(alphabet, 5).unwrap();

    for (i, s) in alphabet.enumerate(5).take(10_000).enumerate() {
        let expected = SequenceNumber::from(i as u64 + 1);
        assert_eq!(
            numbering.rank_of(&s).unwrap(),
            expected,
            "expected {s:?} to have sequence number {expected}"
        );
    }
}

#[test]
fn invariant_rank_is_dense_for_tiny_alphabet() {
    let alphabet = Alphabet::new(32, 34).unwrap();
    let numbering = SequenceNumbering::new(alphabet, 8).unwrap();

    let ranks: Vec<u64> = alphabet
        .enumerate(8)
        .map(|s| rank(&numbering, &s))
        .collect();
    let expected: Vec<u64> = (1..=ranks.len() as u64).collect();
    assert_eq!(ranks, expected);
    assert_eq!(
        BigUint::from(ranks.len() as u64),
        count_up_to(alphabet.size(), 8)
    );
}

#[test]
fn golden_printable_ranks() {
    let numbering = printable();
    assert_eq!(rank(&numbering, "!"), 1);
    assert_eq!(rank(&numbering, "~"), 94);
    assert_eq!(rank(&numbering, "!!"), 95);
    assert_eq!(rank(&numbering, "~~"), 94 + 8836);
    assert_eq!(rank(&numbering, "! !"), 94 + 8836 + 1);
}

#[test]
fn invariant_longest_string_holds_last_rank() {
    let numbering = printable();
    let longest = "~".repeat(16);

    let last = numbering.rank_of(&longest).unwrap();
    assert_eq!(last, numbering.last_rank());
    assert!(last.as_biguint() > &BigUint::from(u64::MAX));
}

#[test]
fn invariant_invalid_strings_have_no_rank() {
    let numbering = printable();

    assert_eq!(numbering.rank_of(""), Err(DomainError::EmptyString));
    assert_eq!(
        numbering.rank_of(" hello"),
        Err(DomainError::BoundaryAtEdge(Edge::Start))
    );
    assert_eq!(
        numbering.rank_of("hello "),
        Err(DomainError::BoundaryAtEdge(Edge::End))
    );
    assert_eq!(
        numbering.rank_of(" a b c "),
        Err(DomainError::BoundaryAtEdge(Edge::Start))
    );
    assert_eq!(
        numbering.rank_of("snowman \u{2603}"),
        Err(DomainError::OutsideAlphabet {
            ch: '\u{2603}',
            position: 8
        })
    );
    assert_eq!(
        numbering.rank_of(&"a".repeat(17)),
        Err(DomainError::TooLong {
            length: 17,
            max: 16
        })
    );
    assert!(numbering.rank_of("a b c").is_ok());
}

#[test]
fn invariant_decode_rejects_out_of_range_ranks() {
    let numbering = printable();

    assert_eq!(
        numbering.string_at(&SequenceNumber::from(0)),
        Err(DomainError::RankZero)
    );

    let beyond = SequenceNumber::new(numbering.last_rank().into_inner() + 1u32);
    assert!(matches!(
        numbering.string_at(&beyond),
        Err(DomainError::RankOutOfRange(_))
    ));

    assert_eq!(
        numbering.string_at(&numbering.last_rank()).unwrap(),
        "~".repeat(16)
    );
}

#[test]
fn invariant_decode_follows_enumeration() {
    let alphabet = Alphabet::new(32, 36).unwrap();
    let numbering = SequenceNumbering::new(alphabet, 4).unwrap();

    for (i, s) in alphabet.enumerate(4).enumerate() {
        let decoded = numbering
            .string_at(&SequenceNumber::from(i as u64 + 1))
            .unwrap();
        assert_eq!(decoded, s);
    }
}

fn valid_printable() -> impl Strategy<Value = String> {
    "[!-~]([ -~]{0,14}[!-~])?"
}

proptest! {
    #[test]
    fn prop_rank_round_trips(s in valid_printable()) {
        let numbering = printable();
        let rank = numbering.rank_of(&s).unwrap();
        let decoded = numbering.string_at(&rank).unwrap();
        prop_assert_eq!(&decoded, &s);
        prop_assert_eq!(numbering.rank_of(&decoded).unwrap(), rank);
    }

    #[test]
    fn prop_rank_preserves_canonical_order(a in valid_printable(), b in valid_printable()) {
        let numbering = printable();
        let alphabet = numbering.alphabet();
        let key_a = (a.len(), alphabet.digits(&a).unwrap());
        let key_b = (b.len(), alphabet.digits(&b).unwrap());
        prop_assert_eq!(
            key_a.cmp(&key_b),
            numbering.rank_of(&a).unwrap().cmp(&numbering.rank_of(&b).unwrap())
        );
    }

    #[test]
    fn prop_boundary_at_edge_never_ranks(inner in "[ -~]{0,14}") {
        let numbering = printable();
        let leading = format!(" {inner}");
        let trailing = format!("{inner}! ");
        prop_assert!(numbering.rank_of(&leading).is_err());
        prop_assert!(numbering.rank_of(&trailing).is_err());
    }
}
