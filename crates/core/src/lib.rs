pub mod category;
pub mod money;
pub mod month;
pub mod transaction;

pub use category::Category;
pub use money::Money;
pub use month::Month;
pub use transaction::{CategorizedTransaction, DocumentLines, Transaction};
