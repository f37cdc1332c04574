use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A person who can belong to groups and take part in expenses.
///
/// Relations always store `id`; `name` is for display only.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl Member {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Member {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MemberSearch {
    /// Case-insensitive match against name or email
    pub search: Option<String>,
}

impl MemberSearch {
    pub fn matches(&self, member: &Member) -> bool {
        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(needle) => {
                let needle = needle.to_lowercase();
                member.name.to_lowercase().contains(&needle) || member.email.to_lowercase().contains(&needle)
            }
        }
    }
}
