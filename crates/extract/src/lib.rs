// Compiled regex cache: each pattern is compiled once, on first use, and
// shared across threads.
macro_rules! re {
    ($name:ident, $pat:expr) => {
        pub(crate) fn $name() -> &'static ::regex::Regex {
            static R: ::std::sync::OnceLock<::regex::Regex> = ::std::sync::OnceLock::new();
            R.get_or_init(|| ::regex::Regex::new($pat).expect("invalid regex"))
        }
    };
}
pub(crate) use re;

pub mod amount;
pub mod date;
pub mod extractor;
pub mod pipeline;
pub mod reassemble;
pub mod year;

pub use amount::{parse_amount, AmountParseError};
pub use date::{find_date, DateError, DateMatch};
pub use extractor::SkipReason;
pub use pipeline::{
    extract_transactions, extract_with_report, process_batch, DocumentReport, SkippedLine,
};
pub use reassemble::reassemble_lines;
pub use year::infer_year;
