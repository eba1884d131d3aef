use crate::token::{Token, TokenTag};
use crate::tokenizer::Tokenizer;

fn tokenize(source: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new(source.as_bytes());
    let mut tokens = Vec::new();
    loop {
        let token = tokenizer.next();
        if token.tag == TokenTag::Eof {
            break;
        }
        tokens.push(token);
    }
    tokens
}

fn tags(source: &str) -> Vec<TokenTag> {
    tokenize(source).iter().map(|t| t.tag).collect()
}

#[test]
fn shift_operator_family() {
    assert_eq!(
        tags(">>>= >>> >>= >> >= > <<= << <= <"),
        vec![
            TokenTag::ShrEqual,
            TokenTag::Shr,
            TokenTag::SarEqual,
            TokenTag::Sar,
            TokenTag::GreaterThanEqual,
            TokenTag::GreaterThan,
            TokenTag::ShlEqual,
            TokenTag::Shl,
            TokenTag::LessThanEqual,
            TokenTag::LessThan,
        ]
    );
}

#[test]
fn lone_angle_brackets_do_not_collapse() {
    assert_eq!(tags("< <"), vec![TokenTag::LessThan, TokenTag::LessThan]);
}

#[test]
fn compound_operators() {
    assert_eq!(
        tags("+ ++ += - -- -= -> * ** *= / /= % %= = == => ! != & && &= | || |= ^ ^= ~ ? : := . , ;"),
        vec![
            TokenTag::Plus,
            TokenTag::PlusPlus,
            TokenTag::PlusEqual,
            TokenTag::Minus,
            TokenTag::MinusMinus,
            TokenTag::MinusEqual,
            TokenTag::Arrow,
            TokenTag::Asterisk,
            TokenTag::AsteriskAsterisk,
            TokenTag::AsteriskEqual,
            TokenTag::Slash,
            TokenTag::SlashEqual,
            TokenTag::Percent,
            TokenTag::PercentEqual,
            TokenTag::Equal,
            TokenTag::EqualEqual,
            TokenTag::FatArrow,
            TokenTag::Bang,
            TokenTag::BangEqual,
            TokenTag::Ampersand,
            TokenTag::AmpersandAmpersand,
            TokenTag::AmpersandEqual,
            TokenTag::Pipe,
            TokenTag::PipePipe,
            TokenTag::PipeEqual,
            TokenTag::Caret,
            TokenTag::CaretEqual,
            TokenTag::Tilde,
            TokenTag::QuestionMark,
            TokenTag::Colon,
            TokenTag::ColonEqual,
            TokenTag::Period,
            TokenTag::Comma,
            TokenTag::Semicolon,
        ]
    );
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(
        tags("contract uint256 bytes32 wei foo $bar _baz from solidity true"),
        vec![
            TokenTag::Contract,
            TokenTag::Uint256,
            TokenTag::Bytes32,
            TokenTag::Wei,
            TokenTag::Identifier,
            TokenTag::Identifier,
            TokenTag::Identifier,
            TokenTag::Identifier,
            TokenTag::Identifier,
            TokenTag::Identifier,
        ]
    );
}

#[test]
fn reserved_words_have_their_own_tags() {
    assert_eq!(
        tags("let case default switch byte var fixed"),
        vec![
            TokenTag::Let,
            TokenTag::Case,
            TokenTag::Default,
            TokenTag::Switch,
            TokenTag::Byte,
            TokenTag::Var,
            TokenTag::Fixed,
        ]
    );
}

#[test]
fn number_literals() {
    assert_eq!(
        tags("1 123_456 0x1F_a0 1.5 2e10 1e-2 3.14e+5"),
        vec![TokenTag::NumberLiteral; 7]
    );
}

#[test]
fn trailing_period_is_not_part_of_a_number() {
    assert_eq!(
        tags("1. 1.foo"),
        vec![
            TokenTag::NumberLiteral,
            TokenTag::Period,
            TokenTag::NumberLiteral,
            TokenTag::Period,
            TokenTag::Identifier,
        ]
    );
    // A semver style version splits into number, period, number.
    assert_eq!(
        tags("0.8.0"),
        vec![
            TokenTag::NumberLiteral,
            TokenTag::Period,
            TokenTag::NumberLiteral,
        ]
    );
    // An exponent without digits is not consumed either.
    assert_eq!(tags("1e"), vec![TokenTag::NumberLiteral, TokenTag::Identifier]);
}

#[test]
fn string_literals() {
    let tokens = tokenize("\"hello\"");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].tag, TokenTag::StringLiteral);
    assert_eq!((tokens[0].start, tokens[0].end), (0, 7));

    // An escaped quote does not terminate the literal.
    assert_eq!(tags(r#""a\"b""#), vec![TokenTag::StringLiteral]);
}

#[test]
fn unterminated_string_is_invalid_to_end_of_line() {
    let tokens = tokenize("\"abc\nx");
    assert_eq!(tokens[0].tag, TokenTag::Invalid);
    assert_eq!((tokens[0].start, tokens[0].end), (0, 4));
    assert_eq!(tokens[1].tag, TokenTag::Identifier);

    let tokens = tokenize("\"abc");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].tag, TokenTag::Invalid);
    assert_eq!((tokens[0].start, tokens[0].end), (0, 4));
}

#[test]
fn control_byte_in_string_is_invalid() {
    assert_eq!(
        tags("\"a\u{1}b\""),
        vec![TokenTag::Invalid, TokenTag::Identifier, TokenTag::Invalid]
    );
}

#[test]
fn line_and_doc_comments() {
    assert_eq!(
        tags("a // plain\nb /// doc\nc //// not doc\nd"),
        vec![
            TokenTag::Identifier,
            TokenTag::Identifier,
            TokenTag::DocComment,
            TokenTag::Identifier,
            TokenTag::Identifier,
        ]
    );

    // The doc comment token stops before the line break.
    let tokens = tokenize("/// hi\n");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].tag, TokenTag::DocComment);
    assert_eq!((tokens[0].start, tokens[0].end), (0, 6));
}

#[test]
fn block_and_container_comments() {
    assert_eq!(
        tags("a /* x */ b /** y */ c /**/ d"),
        vec![
            TokenTag::Identifier,
            TokenTag::Identifier,
            TokenTag::DocCommentContainer,
            TokenTag::Identifier,
            TokenTag::Identifier,
        ]
    );

    // Unterminated block comment.
    let tokens = tokenize("/* abc");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].tag, TokenTag::Invalid);
    assert_eq!((tokens[0].start, tokens[0].end), (0, 6));
}

#[test]
fn carriage_return_in_comment_needs_a_line_feed() {
    // Bare `\r` inside a line comment turns the rest of the line invalid.
    assert_eq!(tags("// a\rb\n"), vec![TokenTag::Invalid]);
    // A `\r\n` pair terminates the comment normally.
    assert_eq!(tags("// a\r\nb"), vec![TokenTag::Identifier]);
}

#[test]
fn byte_order_mark_is_skipped() {
    let tokens = tokenize("\u{FEFF}contract");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].tag, TokenTag::Contract);
    assert_eq!(tokens[0].start, 3);
}

#[test]
fn empty_input_yields_an_eof_tail() {
    let mut tokenizer = Tokenizer::new(b"");
    for _ in 0..3 {
        let token = tokenizer.next();
        assert_eq!(token.tag, TokenTag::Eof);
        assert_eq!((token.start, token.end), (0, 0));
    }
}

#[test]
fn eof_tail_after_content() {
    let mut tokenizer = Tokenizer::new(b"a");
    assert_eq!(tokenizer.next().tag, TokenTag::Identifier);
    for _ in 0..3 {
        let token = tokenizer.next();
        assert_eq!(token.tag, TokenTag::Eof);
        assert_eq!((token.start, token.end), (1, 1));
    }
}

#[test]
fn token_spans_are_byte_offsets() {
    let tokens = tokenize("contract C");
    assert_eq!((tokens[0].start, tokens[0].end), (0, 8));
    assert_eq!((tokens[1].start, tokens[1].end), (9, 10));
}

#[test]
fn token_ranges_cover_everything_but_whitespace() {
    let source = "contract C { function f(uint256 a) public { x = a + 1; } }";
    let tokens = tokenize(source);
    let mut covered = vec![false; source.len()];
    let mut last_end = 0u32;
    for token in &tokens {
        assert!(token.start >= last_end, "tokens overlap or go backwards");
        for index in token.start as usize..token.end as usize {
            covered[index] = true;
        }
        last_end = token.end;
    }
    for (index, byte) in source.bytes().enumerate() {
        if !covered[index] {
            assert!(byte.is_ascii_whitespace(), "byte {} is not covered", index);
        }
    }
}

#[test]
fn unknown_bytes_are_invalid_tokens() {
    assert_eq!(tags("@"), vec![TokenTag::Invalid]);
    assert_eq!(tags("#!"), vec![TokenTag::Invalid, TokenTag::Bang]);
}
