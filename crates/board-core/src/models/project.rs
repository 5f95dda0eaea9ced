//! Project entity - the single organizational container for the board.

use serde::{Deserialize, Serialize};

/// The board tracks exactly one project. Its `key` is the short uppercase
/// code used as the prefix of every issue id (e.g. "ARBO" in "ARBO-7").
/// There is no update path; the project is fixed at seeding time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub key: String,
    pub name: String,
    pub description: String,
}
