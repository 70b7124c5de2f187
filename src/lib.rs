pub mod error;
pub mod headings;
pub mod key;
pub mod split;
pub mod transpose;

pub use error::{Result, TransposeError};
pub use headings::Headings;
pub use key::{strip_dates, KeyNormalizer};
pub use split::{split_fields, Splitter};
pub use transpose::{detect_boundary, transpose, transpose_str, Summary, Transposer};

pub fn version() -> String {
    std::format!("{}-Alpha", env!("CARGO_PKG_VERSION"))
}

pub fn about() -> String {
    "Transpose CSV data: rows of 'key, value, value ...' become columns, \n\
    one column per distinct key, starting a new block whenever a key repeats.\n\
    Dates (digits/digits/digits) are removed from keys before grouping.\n\n\
    This program comes with ABSOLUTELY NO WARRANTY.\n\
    This is free software, and you are welcome to redistribute\n\
    it under certain conditions."
        .to_string()
}

/// Worked example shown with the usage message.
pub fn usage_example() -> String {
    let source = "header1,row1Value1\n\
    header2,row2Value1\n\
    header3 11/31/2011,row3Value1,row3Value2\n\
    header1,row4Value1,row4Value2\n\
    header2,row5Value1\n\
    header3 11/31/2011,row6Value1,row6Value2\n";
    let output = transpose_str(source).unwrap_or_default();
    let mut ret = String::from("Source data:\n");
    for line in source.lines() {
        ret.push_str("  ");
        ret.push_str(line);
        ret.push('\n');
    }
    ret.push_str("Output:\n");
    for line in output.lines() {
        ret.push_str("  ");
        ret.push_str(line);
        ret.push('\n');
    }
    ret
}
