// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use super::DirectoryId;

/// The directory's public record of a representative. Purely informational;
/// nothing in here feeds back into conversation state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepresentativeCard {
    pub id: DirectoryId,
    pub name: String,
    pub governorate: Option<String>,
    pub district: Option<String>,
    pub party: Option<String>,
    pub average_rating: Option<f32>,
    #[serde(default)]
    pub is_featured: bool,
}
