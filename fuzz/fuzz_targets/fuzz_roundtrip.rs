#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use dcsv::{CellStore, Delimiters, SparseTable};

#[derive(Arbitrary, Debug)]
enum Tokens {
    Office,
    Bracket,
    Swapped,
}

#[derive(Arbitrary, Debug)]
struct Input {
    tokens: Tokens,
    rows: Vec<Vec<String>>,
}

fuzz_target!(|input: Input| {
    let delims = match input.tokens {
        Tokens::Office => Delimiters::office(),
        Tokens::Bracket => Delimiters::new("[F]", "[T]").unwrap(),
        Tokens::Swapped => Delimiters::new("'", ";").unwrap(),
    };
    let mut table = SparseTable::new(delims.clone());
    for (r, row) in input.rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            // Line breaks inside cells are outside the format.
            if cell.contains(['\n', '\r']) {
                return;
            }
            table.add(r, c, cell.as_str());
        }
    }

    let encoded = dcsv::encode_to_string(&table).unwrap();
    let decoded = dcsv::decode_from_str(&encoded, delims).unwrap();
    for (r, c, cell) in table.cells() {
        let got = decoded.get(r, c).unwrap_or_default();
        if got != cell {
            panic!(
                "roundtrip mismatch at [{r},{c}]\nEncoded:\n{encoded}\nOriginal: {cell:?}\nDecoded: {got:?}"
            );
        }
    }
});
