#![deny(warnings)]

use crate::scanner::Scanner;


#[derive(Clone, PartialEq, Debug)]
pub enum MathToken {
    Unknown(String),
    Number(f64),
    Variable(String),
    Function(String, usize), // arity
    UOp(String), BOp(String),
    OParen, CParen, Comma,
}

/// Splits calculator input into `MathToken`s.
pub struct MathTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
    prev: Option<MathToken>
}

impl<I: Iterator<Item=char>> MathTokenizer<I> {
    pub fn new(source: I) -> Self {
        MathTokenizer{src: Scanner::new(source), prev: None}
    }

    // a sign is unary unless it follows something that yields a value
    fn expects_operand(&self) -> bool {
        !matches!(self.prev,
                  Some(MathToken::Number(_)) | Some(MathToken::Variable(_)) | Some(MathToken::CParen))
    }

    fn symbol(&self, sym: char) -> MathToken {
        match sym {
            '(' => MathToken::OParen,
            ')' => MathToken::CParen,
            ',' => MathToken::Comma,
            '-' | '+' if self.expects_operand() => MathToken::UOp(sym.to_string()),
            _ => MathToken::BOp(sym.to_string()),
        }
    }

    // `mod` is an operator, a word before '(' names a function
    fn word(&mut self, word: String) -> MathToken {
        if word == "mod" {
            MathToken::BOp(word)
        } else if self.src.peek_past_ws() == Some('(') {
            MathToken::Function(word, 0)
        } else {
            MathToken::Variable(word)
        }
    }

    fn get_token(&mut self) -> Option<MathToken> {
        self.src.skip_ws();
        if let Some(sym) = self.src.scan_symbol() {
            Some(self.symbol(sym))
        } else if let Some(word) = self.src.scan_word() {
            Some(self.word(word))
        } else if let Some(num) = self.src.scan_number() {
            match num.parse::<f64>() {
                Ok(n) => Some(MathToken::Number(n)),
                Err(_) => Some(MathToken::Unknown(num)),
            }
        } else {
            let c = self.src.bump()?;
            self.src.drop_lexeme();
            Some(MathToken::Unknown(c.to_string()))
        }
    }
}

impl<I: Iterator<Item=char>> Iterator for MathTokenizer<I> {
    type Item = MathToken;
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.get_token();
        self.prev = token.clone();
        token
    }
}
