//! Rule-based field extractors for registration certificates.
//!
//! Each extractor is an independent rule chain over the line sequence:
//! rules are tried top-to-bottom and the first match wins. No chain raises
//! on absence; a field without a match is `None`.

pub mod address;
pub mod company;
pub mod dates;
pub mod directors;
pub mod patterns;
pub mod phone;
pub mod registration;

pub use address::extract_business_address;
pub use company::{extract_company_name, CompanyName};
pub use dates::extract_incorporation_date;
pub use directors::{extract_directors, DirectorWindows};
pub use phone::extract_business_phone;
pub use registration::extract_registration_number;
