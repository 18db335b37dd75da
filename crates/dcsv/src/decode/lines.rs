/// Iterates the lines of an in-memory document, stripping `\n` or `\r\n`.
///
/// A final line without terminator is yielded as-is, a lone trailing `\r`
/// included, matching `BufRead::lines`. A trailing terminator does not
/// produce an extra empty line.
pub struct LineIter<'a> {
    rest: &'a str,
}

pub fn iter(input: &str) -> LineIter<'_> {
    LineIter { rest: input }
}

impl<'a> Iterator for LineIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        match self.rest.find('\n') {
            Some(pos) => {
                let (raw, remaining) = self.rest.split_at(pos + 1);
                self.rest = remaining;
                let line = &raw[..pos];
                Some(line.strip_suffix('\r').unwrap_or(line))
            }
            None => Some(core::mem::take(&mut self.rest)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_terminators() {
        let lines: Vec<_> = iter("a\r\nb\n\nc").collect();
        assert_eq!(lines, vec!["a", "b", "", "c"]);
    }

    #[test]
    fn unterminated_carriage_return_is_kept() {
        let lines: Vec<_> = iter("a\r\nb\r").collect();
        assert_eq!(lines, vec!["a", "b\r"]);
    }

    #[test]
    fn trailing_newline_is_not_a_line() {
        assert_eq!(iter("a\n").count(), 1);
        assert_eq!(iter("\n\n").count(), 2);
        assert_eq!(iter("").count(), 0);
    }
}
