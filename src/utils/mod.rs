pub mod error;
pub mod swagger_doc;
pub mod token;
pub mod validation;
