use assert_matches::assert_matches;
use strtok::{StringTokenizer, TokenizerError};

const CORPUS: &[(&str, &str)] = &[
    ("", " "),
    ("the quick brown fox", " \t\n\r\u{000C}"),
    ("a,b,,c", ","),
    (",,,", ","),
    ("  leading and trailing  ", " "),
    ("k1=v1;k2=v2;;k3", "=;"),
    ("über,straße,,ñ", ","),
    ("no delimiters here", "|"),
    ("mixed\tws\r\nlines\u{000C}end", " \t\n\r\u{000C}"),
    ("z-a-z", "z"),
];

fn drain(tokenizer: &mut StringTokenizer) -> Vec<String> {
    let mut tokens = Vec::new();
    while tokenizer.has_more_tokens().unwrap() {
        tokens.push(tokenizer.next_token().unwrap());
    }
    tokens
}

#[test]
fn count_matches_number_of_tokens_produced() {
    for &(text, delimiters) in CORPUS {
        for return_delimiters in [false, true] {
            let mut tokenizer =
                StringTokenizer::with_return_delimiters(text, delimiters, return_delimiters);
            let expected = tokenizer.count_tokens().unwrap();
            let produced = drain(&mut tokenizer).len();
            assert_eq!(
                expected, produced,
                "text={:?} delimiters={:?} return={}",
                text, delimiters, return_delimiters
            );
        }
    }
}

#[test]
fn repeated_has_more_tokens_does_not_change_output() {
    for &(text, delimiters) in CORPUS {
        let baseline = drain(&mut StringTokenizer::with_delimiters(text, delimiters));

        let mut tokenizer = StringTokenizer::with_delimiters(text, delimiters);
        let mut tokens = Vec::new();
        while tokenizer.has_more_tokens().unwrap() {
            assert!(tokenizer.has_more_tokens().unwrap());
            assert!(tokenizer.has_more_tokens().unwrap());
            tokens.push(tokenizer.next_token().unwrap());
        }

        assert_eq!(tokens, baseline, "text={:?}", text);
    }
}

#[test]
fn retained_delimiters_reconstruct_text() {
    for &(text, delimiters) in CORPUS {
        let tokenizer = StringTokenizer::with_return_delimiters(text, delimiters, true);
        let rebuilt: String = tokenizer.collect();
        assert_eq!(rebuilt, text);
    }
}

#[test]
fn tokens_and_skipped_spans_reconstruct_text() {
    for &(text, delimiters) in CORPUS {
        let chars: Vec<char> = text.chars().collect();
        let mut tokenizer = StringTokenizer::with_delimiters(text, delimiters);
        let mut rebuilt = String::new();
        let mut cursor = 0;

        while tokenizer.has_more_tokens().unwrap() {
            let token = tokenizer.next_spanned_token().unwrap();
            assert!(token.span.contains(token.span.start));
            assert!(!token.span.contains(token.span.end));
            let skipped: String = chars[cursor..token.span.start.offset].iter().collect();
            assert!(skipped.chars().all(|c| delimiters.contains(c)));
            rebuilt.push_str(&skipped);
            rebuilt.push_str(&token.value);
            cursor = token.span.end.offset;
        }
        rebuilt.extend(&chars[cursor..]);

        assert_eq!(rebuilt, text);
    }
}

#[test]
fn empty_input_has_no_tokens() {
    let mut tokenizer = StringTokenizer::new("");
    assert!(!tokenizer.has_more_tokens().unwrap());
    assert_eq!(tokenizer.count_tokens().unwrap(), 0);
}

#[test]
fn delimiter_only_input() {
    let text = " \t \n";
    assert_eq!(StringTokenizer::new(text).count_tokens().unwrap(), 0);

    let mut returning = StringTokenizer::with_return_delimiters(text, " \t\n", true);
    let tokens = drain(&mut returning);
    assert_eq!(tokens, [" ", "\t", " ", "\n"]);
}

#[test]
fn classic_scenarios() {
    let mut words = StringTokenizer::new("the quick brown fox");
    assert_eq!(words.count_tokens().unwrap(), 4);
    assert_eq!(drain(&mut words), ["the", "quick", "brown", "fox"]);

    let mut collapsed = StringTokenizer::with_delimiters("a,b,,c", ",");
    assert_eq!(drain(&mut collapsed), ["a", "b", "c"]);

    let mut kept = StringTokenizer::with_return_delimiters("a,b", ",", true);
    assert_eq!(drain(&mut kept), ["a", ",", "b"]);
}

#[test]
fn misuse_is_reported_as_errors() {
    let mut empty = StringTokenizer::with_delimiters("text", "");
    assert_matches!(empty.next_token(), Err(TokenizerError::EmptyDelimiterSet));

    let mut exhausted = StringTokenizer::new("only");
    assert_eq!(exhausted.next_token().unwrap(), "only");
    assert_matches!(
        exhausted.next_token(),
        Err(TokenizerError::NoSuchToken { .. })
    );
    // Still exhausted on a second attempt
    assert_matches!(
        exhausted.next_token_with(","),
        Err(TokenizerError::NoSuchToken { .. })
    );
}

#[test]
fn mid_iteration_delimiter_change() {
    let mut tokenizer = StringTokenizer::with_delimiters("a:b,c", ":");
    assert_eq!(tokenizer.next_token().unwrap(), "a");
    assert!(tokenizer.has_more_tokens().unwrap());
    assert_eq!(tokenizer.next_token_with(":,").unwrap(), "b");
    assert_eq!(tokenizer.next_token().unwrap(), "c");
    assert!(!tokenizer.has_more_tokens().unwrap());
}

#[test]
fn error_messages_are_descriptive() {
    let err = TokenizerError::NoSuchToken {
        position: 4,
        length: 4,
    };
    assert_eq!(
        err.to_string(),
        "No tokens remain at position 4 (text length 4)"
    );
    assert_eq!(
        TokenizerError::EmptyDelimiterSet.to_string(),
        "Delimiter set is empty"
    );
}
