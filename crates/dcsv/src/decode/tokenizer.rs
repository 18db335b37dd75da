use crate::options::Delimiters;

/// Splits lines into unescaped field values for one delimiter configuration.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    delims: Delimiters,
    doubled: String,
}

impl Tokenizer {
    pub fn new(delims: Delimiters) -> Self {
        let doubled = delims.text_delimiter().repeat(2);
        Self { delims, doubled }
    }

    pub fn delimiters(&self) -> &Delimiters {
        &self.delims
    }

    /// Split one line (without its terminator) into fields.
    ///
    /// Outside a quoted region the separator closes the current field, even
    /// when it is empty. A single text delimiter opens or closes a quoted
    /// region; a doubled one inside a quoted region stands for one literal
    /// delimiter. A field still empty at end of line is not emitted, so
    /// `a,b,` yields `["a", "b"]` and an empty line yields nothing.
    pub fn split(&self, line: &str) -> Vec<String> {
        let sep = self.delims.field_separator();
        let quote = self.delims.text_delimiter();
        let mut out = Vec::new();
        let mut field = String::new();
        let mut literal = false;
        let mut i = 0usize;
        while i < line.len() {
            let rest = &line[i..];
            if !literal && rest.starts_with(sep) {
                out.push(core::mem::take(&mut field));
                i += sep.len();
            } else if rest.starts_with(quote) {
                if literal && rest.starts_with(self.doubled.as_str()) {
                    field.push_str(quote);
                    i += self.doubled.len();
                } else {
                    literal = !literal;
                    i += quote.len();
                }
            } else {
                let run = plain_run(rest, sep, quote);
                field.push_str(&rest[..run]);
                i += run;
            }
        }
        if !field.is_empty() {
            out.push(field);
        }
        out
    }
}

/// Length of the prefix of `rest` that starts with neither token.
/// `rest` is known not to start with a token that applies at offset 0.
#[cfg(not(feature = "perf_memchr"))]
#[inline]
fn plain_run(rest: &str, _sep: &str, _quote: &str) -> usize {
    rest.chars().next().map_or(rest.len(), char::len_utf8)
}

#[cfg(feature = "perf_memchr")]
#[inline]
fn plain_run(rest: &str, sep: &str, quote: &str) -> usize {
    let b = rest.as_bytes();
    // Token first bytes are ASCII or UTF-8 lead bytes, so any hit is a char boundary.
    let (s0, q0) = (sep.as_bytes()[0], quote.as_bytes()[0]);
    let first = rest.chars().next().map_or(b.len(), char::len_utf8);
    match memchr::memchr2(s0, q0, &b[first..]) {
        Some(rel) => first + rel,
        None => b.len(),
    }
}
