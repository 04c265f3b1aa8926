#![deny(warnings)]

use crate::scanner::Scanner;

const SYMBOLS: &str = "+-*/%^(),";

fn is_digit(c: char) -> bool { c.is_ascii_digit() }

/*
 * Lexing rules for math input. Each rule either consumes a whole lexeme
 * and returns it or leaves the scanner untouched.
 */
impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn skip_ws(&mut self) {
        self.skip_while(char::is_whitespace);
        self.drop_lexeme();
    }

    // unsigned numbers [0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?, signs are operators
    pub fn scan_number(&mut self) -> Option<String> {
        if !self.skip_while(is_digit) {
            return None;
        }
        let mark = self.mark();
        if self.accept_if(|c| c == '.').is_some() && !self.skip_while(is_digit) {
            self.rewind(mark);
            return Some(self.take()); // '12.' leaves the dot behind
        }
        let mark = self.mark();
        if self.accept_if(|c| c == 'e' || c == 'E').is_some() {
            self.accept_if(|c| c == '+' || c == '-');
            if !self.skip_while(is_digit) {
                self.rewind(mark);
            }
        }
        Some(self.take())
    }

    // single char operators and punctuation
    pub fn scan_symbol(&mut self) -> Option<char> {
        let sym = self.accept_if(|c| SYMBOLS.contains(c))?;
        self.drop_lexeme();
        Some(sym)
    }

    // [a-zA-Z_][a-zA-Z0-9_]*, function names, `mod`, variables
    pub fn scan_word(&mut self) -> Option<String> {
        self.accept_if(|c| c.is_ascii_alphabetic() || c == '_')?;
        self.skip_while(|c| c.is_ascii_alphanumeric() || c == '_');
        Some(self.take())
    }
}

///////////////////////////////////////////////////////////////////////////////
