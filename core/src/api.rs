//! Payloads returned by the trivia API. Only the fields the board uses are
//! decoded; anything else in the response is ignored.

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::CategoryId;

/// One entry of `GET {base}/categories?count=N`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryId,
}

/// Body of `GET {base}/category?id=ID`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDetail {
    pub title: String,
    pub clues: Vec<ClueDetail>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueDetail {
    pub question: String,
    pub answer: String,
}
