use super::{Code, Position};
use once_cell::unsync::OnceCell;

impl<'c> From<&'c [u8]> for Code<'c> {
    fn from(value: &'c [u8]) -> Self {
        Code::new(value)
    }
}
impl<'c> From<&'c str> for Code<'c> {
    fn from(value: &'c str) -> Self {
        Code::new(value.as_bytes())
    }
}

impl<'c> Code<'c> {
    pub fn new(value: &'c [u8]) -> Self {
        Self {
            value,
            line_breaks: OnceCell::new(),
        }
    }

    pub fn obtain_line_breaks(&self) -> &Vec<usize> {
        self.line_breaks.get_or_init(|| {
            self.value
                .iter()
                .enumerate()
                .filter_map(|(index, n)| if *n == b'\n' { Some(index) } else { None })
                .collect()
        })
    }

    /// Index of the line containing the byte offset, counted from zero.
    pub fn line_index(&self, pointer: usize) -> usize {
        let line_breaks = self.obtain_line_breaks();
        match line_breaks.binary_search(&pointer) {
            Ok(index) | Err(index) => index,
        }
    }

    /// Whether two byte offsets fall on the same source line.
    pub fn same_line(&self, first: usize, second: usize) -> bool {
        self.line_index(first) == self.line_index(second)
    }

    pub fn obtain_position(&self, pointer: usize) -> Position {
        let index = self.line_index(pointer);
        if index == 0 {
            let s = unsafe { std::str::from_utf8_unchecked(&self.value[..pointer]) };
            Position::new(1, s.len() + 1)
        } else {
            let break_point = self.obtain_line_breaks()[index - 1] + 1;
            let s = unsafe { std::str::from_utf8_unchecked(&self.value[break_point..pointer]) };
            Position::new(index + 1, s.len() + 1)
        }
    }
}
