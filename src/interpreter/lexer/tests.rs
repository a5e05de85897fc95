use super::*;

fn token_types(source: &str) -> Vec<TokenType> {
    let (tokens, errors) = scan(source);
    assert!(errors.is_empty(), "unexpected lexer errors: {:?}", errors);
    tokens.iter().map(Token::token_type).collect()
}

fn rendered(source: &str) -> Vec<String> {
    scan(source).0.iter().map(|token| token.to_string()).collect()
}

mod punctuation {
    use super::*;

    #[test]
    pub fn test_single_characters() {
        assert_eq!(vec![
            TokenType::ParenthesisLeft, TokenType::ParenthesisRight,
            TokenType::BracketLeft, TokenType::BracketRight,
            TokenType::Comma, TokenType::Dot, TokenType::Minus, TokenType::Plus,
            TokenType::Semicolon, TokenType::Star, TokenType::Slash,
            TokenType::Eof,
        ], token_types("(){},.-+;*/"));
    }

    #[test]
    pub fn test_longest_match() {
        assert_eq!(vec![
            TokenType::NotEqual, TokenType::Not,
            TokenType::Equal, TokenType::Assign,
            TokenType::LessEqual, TokenType::Less,
            TokenType::GreaterEqual, TokenType::Greater,
            TokenType::Eof,
        ], token_types("!= ! == = <= < >= >"));

        assert_eq!(vec![TokenType::Equal, TokenType::Assign, TokenType::Eof], token_types("==="));
    }

    #[test]
    pub fn test_comment_is_skipped() {
        let (tokens, errors) = scan("( // ) @ \"\n)");

        assert!(errors.is_empty());
        assert_eq!(vec![TokenType::ParenthesisLeft, TokenType::ParenthesisRight, TokenType::Eof],
                   tokens.iter().map(Token::token_type).collect::<Vec<_>>());
        assert_eq!(2, tokens[1].line());
    }

    #[test]
    pub fn test_rendering() {
        assert_eq!(vec![
            "LEFT_PAREN ( null", "BANG_EQUAL != null", "SLASH / null", "EOF  null",
        ], rendered("(!=/"));
    }
}

mod literals {
    use super::*;

    #[test]
    pub fn test_string() {
        let (tokens, errors) = scan("\"hello world\"");

        assert!(errors.is_empty());
        assert_eq!(2, tokens.len());
        assert_eq!(TokenType::String, tokens[0].token_type());
        assert_eq!("\"hello world\"", tokens[0].source());
        assert_eq!(Some(&Literal::String(String::from("hello world"))), tokens[0].literal());
        assert_eq!("STRING \"hello world\" hello world", tokens[0].to_string());
    }

    #[test]
    pub fn test_string_payloads_are_kept_verbatim() {
        for payload in ["", "123", "nil", "a\\b", "tab\there", "// not a comment", "ünïcödé"] {
            let (tokens, errors) = scan(&format!("\"{}\"", payload));

            assert!(errors.is_empty());
            assert_eq!(2, tokens.len());
            assert_eq!(Some(&Literal::String(payload.to_owned())), tokens[0].literal());
        }
    }

    #[test]
    pub fn test_multiline_string() {
        let (tokens, _) = scan("\"a\nb\" +");

        assert_eq!(1, tokens[0].line());
        assert_eq!(2, tokens[1].line());
    }

    #[test]
    pub fn test_numbers() {
        assert_eq!(vec![
            "NUMBER 42 42.0", "NUMBER 1.2300 1.23", "NUMBER 3.14 3.14", "EOF  null",
        ], rendered("42 1.2300 3.14"));

        let (tokens, _) = scan("1.5");
        assert_eq!(Some(&Literal::Number(1.5)), tokens[0].literal());
    }

    #[test]
    pub fn test_trailing_dot_is_separate() {
        assert_eq!(vec![
            "NUMBER 123 123.0", "DOT . null", "EOF  null",
        ], rendered("123."));

        assert_eq!(vec![
            TokenType::Dot, TokenType::Number, TokenType::Eof,
        ], token_types(".5"));
    }

    #[test]
    pub fn test_identifiers_and_keywords() {
        assert_eq!(vec![
            TokenType::Identifier, TokenType::And, TokenType::Identifier,
            TokenType::Nil, TokenType::Identifier, TokenType::While, TokenType::Eof,
        ], token_types("foo and _bar2 nil nil_ while"));

        assert_eq!(vec!["VAR var null", "IDENTIFIER orchid null", "EOF  null"], rendered("var orchid"));
    }
}

mod errors {
    use super::*;

    #[test]
    pub fn test_unexpected_characters_are_collected() {
        let (tokens, errors) = scan(",.$(#");

        assert_eq!(vec![
            LexerError::UnexpectedCharacter { line: 1, character: '$' },
            LexerError::UnexpectedCharacter { line: 1, character: '#' },
        ], errors);
        assert_eq!(vec![TokenType::Comma, TokenType::Dot, TokenType::ParenthesisLeft, TokenType::Eof],
                   tokens.iter().map(Token::token_type).collect::<Vec<_>>());
        assert_eq!("[line 1] Error: Unexpected character: $", errors[0].to_string());
    }

    #[test]
    pub fn test_unterminated_string() {
        let (tokens, errors) = scan("\n\n\"abc");

        assert_eq!(vec![LexerError::UnterminatedString { line: 3 }], errors);
        assert_eq!(1, tokens.len());
        assert_eq!(TokenType::Eof, tokens[0].token_type());
        assert_eq!(3, tokens[0].line());
        assert_eq!("[line 3] Error: Unterminated string.", errors[0].to_string());
    }

    #[test]
    pub fn test_error_lines() {
        let (_, errors) = scan("1\n@\n\n%");

        assert_eq!(vec![2, 4], errors.iter().map(LexerError::line).collect::<Vec<_>>());
    }
}
