use crate::options::Delimiters;

/// A cell needs quoting when it holds either token; nothing else is escaped.
pub fn needs_quotes(cell: &str, delims: &Delimiters) -> bool {
    cell.contains(delims.text_delimiter()) || cell.contains(delims.field_separator())
}

/// Append the on-line form of a cell to `out`.
///
/// Occurrences of the text delimiter are doubled and the whole cell wrapped in
/// it; a cell holding only the separator is wrapped as-is; anything else is
/// appended unchanged.
pub fn escape_cell_into(out: &mut String, cell: &str, delims: &Delimiters) {
    if needs_quotes(cell, delims) {
        escape_and_quote_into(out, cell, delims);
    } else {
        out.push_str(cell);
    }
}

fn escape_and_quote_into(out: &mut String, cell: &str, delims: &Delimiters) {
    let quote = delims.text_delimiter();
    out.push_str(quote);
    let mut rest = cell;
    while let Some(pos) = rest.find(quote) {
        out.push_str(&rest[..pos]);
        out.push_str(quote);
        out.push_str(quote);
        rest = &rest[pos + quote.len()..];
    }
    out.push_str(rest);
    out.push_str(quote);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom() -> Delimiters {
        Delimiters::new("[F]", "[T]").unwrap()
    }

    fn escape_cell(cell: &str, delims: &Delimiters) -> String {
        let mut out = String::new();
        escape_cell_into(&mut out, cell, delims);
        out
    }

    #[test]
    fn plain_cells_are_unchanged() {
        let d = Delimiters::office();
        assert!(!needs_quotes("content", &d));
        assert_eq!(escape_cell("content", &d), "content");
        assert_eq!(escape_cell("", &d), "");
    }

    #[test]
    fn appends_after_existing_text() {
        let mut out = String::from("x,");
        escape_cell_into(&mut out, "a,b", &Delimiters::office());
        assert_eq!(out, "x,\"a,b\"");
    }

    #[test]
    fn separator_is_quoted_without_doubling() {
        assert_eq!(escape_cell("A,B", &Delimiters::office()), "\"A,B\"");
        assert_eq!(escape_cell("cont[F]ent", &custom()), "[T]cont[F]ent[T]");
    }

    #[test]
    fn delimiter_is_doubled_and_quoted() {
        let d = Delimiters::office();
        assert_eq!(escape_cell("A\"B", &d), "\"A\"\"B\"");
        assert_eq!(escape_cell("\"", &d), "\"\"\"\"");
        assert_eq!(escape_cell("a,\"b\"", &d), "\"a,\"\"b\"\"\"");
        assert_eq!(escape_cell("[T]content[T]", &custom()), "[T][T][T]content[T][T][T]");
    }

    #[test]
    fn newlines_are_not_escaped() {
        assert_eq!(escape_cell("a\nb", &Delimiters::office()), "a\nb");
    }
}
