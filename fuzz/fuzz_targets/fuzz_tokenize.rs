#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use dcsv::{CellStore, Delimiters, SparseTable};

#[derive(Arbitrary, Debug)]
struct Input {
    separator: String,
    delimiter: String,
    document: String,
}

fuzz_target!(|input: Input| {
    let Ok(delims) = Delimiters::new(input.separator, input.delimiter) else {
        return;
    };
    let mut table = SparseTable::new(delims);
    if table.load(input.document.as_bytes()).is_ok() {
        // Anything that decodes must encode again.
        let _ = dcsv::encode_to_string(&table).expect("encoding a decoded table failed");
        for (r, c, _) in table.cells() {
            assert!(r < table.rows() && c < table.columns());
        }
    }
});
