// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use tribune_utils::id_string;

id_string!(
    /// Opaque identifier of a user account. Role information lives on the
    /// user's `Profile`, never on the identifier itself.
    UserId
);
