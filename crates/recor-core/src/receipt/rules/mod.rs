//! Rule-based field extractors for recognized receipt text.
//!
//! Each field has its own pass with its own disambiguation rules. The
//! passes are independent: a miss in one never blocks the others.

pub mod amounts;
pub mod dates;
pub mod patterns;
pub mod store;

pub use amounts::{extract_total, AmountExtractor};
pub use dates::{extract_date, DateExtractor};
pub use store::{extract_store_name, StoreNameExtractor};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text. `None` means the field was not
    /// detected; that is an expected outcome, not an error.
    fn extract(&self, text: &str) -> Option<Self::Output>;
}
