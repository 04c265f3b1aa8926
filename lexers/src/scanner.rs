#![deny(warnings)]

/// Char cursor for the math tokenizer. Chars are pulled from the source on
/// demand; `buf` holds the lexeme being built (`buf[..len]`) followed by
/// whatever lookahead has been read so far.
pub struct Scanner<I: Iterator<Item=char>> {
    src: I,
    buf: Vec<char>,
    len: usize,
}

impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn new(source: I) -> Scanner<I> {
        Scanner{src: source, buf: Vec::new(), len: 0}
    }

    // read from the source until buf holds at least n chars
    fn fill(&mut self, n: usize) -> bool {
        while self.buf.len() < n {
            match self.src.next() {
                Some(c) => self.buf.push(c),
                None => return false,
            }
        }
        true
    }

    fn peek_nth(&mut self, n: usize) -> Option<char> {
        let at = self.len + n;
        if self.fill(at + 1) { Some(self.buf[at]) } else { None }
    }

    pub fn peek(&mut self) -> Option<char> {
        self.peek_nth(0)
    }

    /// First char after any run of whitespace, nothing is consumed.
    pub fn peek_past_ws(&mut self) -> Option<char> {
        let mut n = 0;
        while let Some(c) = self.peek_nth(n) {
            if !c.is_whitespace() { return Some(c); }
            n += 1;
        }
        None
    }

    /// Append the next char to the lexeme.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.len += 1;
        Some(c)
    }

    pub fn accept_if(&mut self, pred: impl Fn(char) -> bool) -> Option<char> {
        match self.peek() {
            Some(c) if pred(c) => self.bump(),
            _ => None,
        }
    }

    pub fn skip_while(&mut self, pred: impl Fn(char) -> bool) -> bool {
        let mut advanced = false;
        while self.accept_if(&pred).is_some() { advanced = true; }
        advanced
    }

    pub fn mark(&self) -> usize { self.len }

    /// Give back everything consumed after `mark`.
    pub fn rewind(&mut self, mark: usize) {
        self.len = self.len.min(mark);
    }

    /// Hand out the lexeme and start a new one.
    pub fn take(&mut self) -> String {
        let lexeme = self.buf.drain(..self.len).collect();
        self.len = 0;
        lexeme
    }

    pub fn drop_lexeme(&mut self) {
        self.buf.drain(..self.len);
        self.len = 0;
    }
}
