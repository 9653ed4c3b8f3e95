/// Case-insensitive keyword matcher over whitespace-delimited tokens.
///
/// The keyword is stored uppercased once, so each comparison only folds the
/// candidate token. Folding is Unicode uppercasing, so one input char may
/// expand to several (`ß` -> `SS`).
#[derive(Debug, Clone, Default)]
pub struct WordComparer {
    pub length: usize,
    pub word: Vec<char>,
}

impl WordComparer {
    pub fn new(word: &str) -> Self {
        let word: Vec<char> = word.to_uppercase().chars().collect();
        Self { length: word.len(), word }
    }

    fn fold(text: &str) -> impl Iterator<Item = char> + '_ {
        text.chars().flat_map(char::to_uppercase)
    }

    pub fn is_block_delimiter(ch: char) -> bool {
        ch.is_whitespace()
    }

    /// True when `token` is exactly this keyword, ignoring case.
    pub fn compare(&self, token: &str) -> bool {
        let mut position = 0;
        for ch in Self::fold(token) {
            if position >= self.length || self.word[position] != ch {
                return false;
            }
            position += 1;
        }

        position == self.length
    }

    /// True when `text` starts with this keyword followed by end of text, a
    /// block delimiter, or one of `postfix`.
    pub fn compare_prefix(&self, text: &str, postfix: &[char]) -> bool {
        let mut chars = Self::fold(text);
        for expected in self.word.iter() {
            match chars.next() {
                Some(ch) if ch == *expected => {}
                _ => return false,
            }
        }

        match chars.next() {
            None => true,
            Some(next) => Self::is_block_delimiter(next) || postfix.contains(&next),
        }
    }
}
