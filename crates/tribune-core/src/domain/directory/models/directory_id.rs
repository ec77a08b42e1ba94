// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use tribune_utils::id_string;

id_string!(
    /// Identifier of a representative in the external directory service.
    DirectoryId
);
