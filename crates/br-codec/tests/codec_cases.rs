use br_codec::alphabet::{self, AlphabetBuilder, Indicator, Symbol};
use br_codec::error::{AlphabetError, CodecError, NotationError};
use br_codec::notation::{format_debug, parse_notation};
use br_codec::translator::Translator;
use br_core::cell::Cell;
use br_core::config::CodecConfig;

fn dots(cells: &[Cell]) -> Vec<Vec<u8>> {
    cells.iter().map(|c| c.to_vec()).collect()
}

fn encode(text: &str) -> Vec<Vec<u8>> {
    let translator = Translator::from_config(&CodecConfig::default()).unwrap();
    dots(&translator.text_to_braille(text).unwrap().output)
}

#[test]
fn hola() {
    assert_eq!(
        encode("hola"),
        vec![vec![1, 2, 5], vec![1, 3, 5], vec![1, 2, 3], vec![1]]
    );
}

#[test]
fn numbers_take_one_sign_per_run() {
    assert_eq!(encode("12"), vec![vec![3, 4, 5, 6], vec![1], vec![1, 2]]);
    assert_eq!(
        encode("1 2"),
        vec![
            vec![3, 4, 5, 6],
            vec![1],
            vec![],
            vec![3, 4, 5, 6],
            vec![1, 2]
        ]
    );
}

#[test]
fn capital_and_mixed() {
    assert_eq!(encode("A"), vec![vec![4, 6], vec![1]]);
    assert_eq!(
        encode("Bus 15"),
        vec![
            vec![4, 6],
            vec![1, 2],
            vec![1, 3, 6],
            vec![2, 3, 4],
            vec![],
            vec![3, 4, 5, 6],
            vec![1],
            vec![1, 5]
        ]
    );
}

#[test]
fn hola_123_mundo_round_trip() {
    let translator = Translator::from_config(&CodecConfig::default()).unwrap();
    let encoded = translator.text_to_braille("Hola 123 Mundo").unwrap();
    assert!(encoded.is_exact());
    assert_eq!(
        format_debug(&encoded.output),
        "46|125|135|123|1|_|3456|1|12|14|_|46|134|136|1345|145|135"
    );
    let decoded = translator.braille_to_text(&encoded.output).unwrap();
    assert_eq!(decoded.output, "Hola 123 Mundo");
}

#[test]
fn parse_errors_name_the_culprit() {
    match parse_notation("125 17") {
        Err(NotationError::InvalidDigit { token, digit, offset }) => {
            assert_eq!(token, "17");
            assert_eq!(digit, '7');
            assert_eq!(offset, 5);
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(matches!(
        parse_notation("112"),
        Err(NotationError::DuplicateDot { digit: '1', .. })
    ));
    assert_eq!(parse_notation(""), Err(NotationError::EmptyInput));
}

#[test]
fn out_of_domain_char_is_flagged_not_fatal() {
    let translator = Translator::from_config(&CodecConfig::default()).unwrap();
    let result = translator.text_to_braille("a#b").unwrap();
    assert_eq!(result.output.len(), 3);
    assert_eq!(result.fallback_flags(3), vec![false, true, false]);
}

#[test]
fn conflicting_alphabet_is_rejected() {
    let cell = Cell::from_dots(&[1, 2]).unwrap();
    let err = AlphabetBuilder::new()
        .entry('b', cell)
        .entry('β', cell)
        .indicator(Indicator::Numeric, Cell::from_dots(&[3, 4, 5, 6]).unwrap())
        .indicator(Indicator::Capital, Cell::from_dots(&[4, 6]).unwrap())
        .indicator(Indicator::Letter, Cell::from_dots(&[5, 6]).unwrap())
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        AlphabetError::BuildConflict {
            cell,
            first: Symbol::Char('b'),
            second: Symbol::Char('β'),
        }
    );
    assert!(err.to_string().contains("12"));
}

#[test]
fn custom_alphabet_through_translator() {
    let table = AlphabetBuilder::new()
        .entry('a', Cell::from_dots(&[1]).unwrap())
        .entry('b', Cell::from_dots(&[1, 2]).unwrap())
        .entry('c', Cell::from_dots(&[1, 4]).unwrap())
        .entry('d', Cell::from_dots(&[1, 4, 5]).unwrap())
        .entry('e', Cell::from_dots(&[1, 5]).unwrap())
        .entry('f', Cell::from_dots(&[1, 2, 4]).unwrap())
        .entry('g', Cell::from_dots(&[1, 2, 4, 5]).unwrap())
        .entry('h', Cell::from_dots(&[1, 2, 5]).unwrap())
        .entry('i', Cell::from_dots(&[2, 4]).unwrap())
        .entry('j', Cell::from_dots(&[2, 4, 5]).unwrap())
        .entry(' ', Cell::EMPTY)
        .indicator(Indicator::Numeric, Cell::from_dots(&[3, 4, 5, 6]).unwrap())
        .indicator(Indicator::Capital, Cell::from_dots(&[6]).unwrap())
        .indicator(Indicator::Letter, Cell::from_dots(&[5, 6]).unwrap())
        .build()
        .unwrap();
    let translator = Translator::with_alphabet(&table, &CodecConfig::default()).unwrap();

    let encoded = translator.text_to_braille("Bad 42").unwrap();
    assert_eq!(encoded.output[0], Cell::from_dots(&[6]).unwrap());
    assert_eq!(translator.braille_to_text(&encoded.output).unwrap().output, "Bad 42");

    // 'z' is not in this table
    assert!(!translator.text_to_braille("z").unwrap().is_exact());
}

#[test]
fn standard_table_exposes_indicators() {
    let table = alphabet::standard().unwrap();
    assert_eq!(
        table.symbol_for(Cell::from_dots(&[3, 4, 5, 6]).unwrap()),
        Some(Symbol::Indicator(Indicator::Numeric))
    );
    assert_eq!(table.char_for(Cell::from_dots(&[4, 6]).unwrap()), None);
}

#[test]
fn placeholder_conflict_from_config() {
    let config = CodecConfig {
        placeholder_char: 'a',
        ..CodecConfig::default()
    };
    assert!(matches!(
        Translator::from_config(&config),
        Err(CodecError::PlaceholderConflict { .. })
    ));
}
