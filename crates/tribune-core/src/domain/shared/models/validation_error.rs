// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Message content must not be empty.")]
    EmptyContent,
    #[error("Message content exceeds {max} characters (got {len}).")]
    ContentTooLong { len: usize, max: usize },
    #[error("Subject must not be empty.")]
    EmptySubject,
    #[error("Subject exceeds {max} characters (got {len}).")]
    SubjectTooLong { len: usize, max: usize },
    #[error("Rating must be between 1 and 5 (got {value}).")]
    RatingOutOfRange { value: u8 },
    #[error("Phone numbers must consist of 10 to 15 digits.")]
    InvalidPhoneNumber,
}
