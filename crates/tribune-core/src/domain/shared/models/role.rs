// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// The fixed role a profile is created with. Roles never change after
/// profile creation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    Citizen,
    Representative,
    Admin,
}

impl Role {
    pub fn is_citizen(&self) -> bool {
        matches!(self, Role::Citizen)
    }

    pub fn is_representative(&self) -> bool {
        matches!(self, Role::Representative)
    }
}
