//! Checklist Models
//!
//! Data structures for categories, item state, comments and users.
//! Field names follow the persisted JSON shape so existing saved data loads unchanged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Author shown when nobody is logged in or a stored comment has no author
pub const ANONYMOUS: &str = "Anônimo";

/// Static category supplied by the host page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "categoria")]
    pub name: String,
    #[serde(rename = "itens", default)]
    pub items: Vec<String>,
}

#[cfg(test)]
impl Category {
    pub fn new(name: impl Into<String>, items: &[&str]) -> Self {
        Self {
            name: name.into(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Build the state lookup key for an item of a category
pub fn item_key(category: &str, item: &str) -> String {
    format!("{}_{}", category, item)
}

/// Persisted state of one checklist item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemState {
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// A comment on an item, with replies and reaction tallies
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "CommentRepr")]
pub struct Comment {
    pub user: Option<String>,
    pub text: String,
    pub replies: Vec<Reply>,
    pub reactions: BTreeMap<String, u32>,
}

impl Comment {
    pub fn new(user: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            user: Some(user.into()),
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn author(&self) -> &str {
        display_author(&self.user)
    }

    pub fn reaction_count(&self, label: &str) -> u32 {
        self.reactions.get(label).copied().unwrap_or(0)
    }
}

/// Older saves stored comments as bare strings
#[derive(Deserialize)]
#[serde(untagged)]
enum CommentRepr {
    Full {
        #[serde(default)]
        user: Option<String>,
        #[serde(default)]
        text: String,
        #[serde(default)]
        replies: Vec<Reply>,
        #[serde(default)]
        reactions: BTreeMap<String, u32>,
    },
    Text(String),
}

impl From<CommentRepr> for Comment {
    fn from(repr: CommentRepr) -> Self {
        match repr {
            CommentRepr::Full { user, text, replies, reactions } => Comment { user, text, replies, reactions },
            CommentRepr::Text(text) => Comment { text, ..Default::default() },
        }
    }
}

/// A reply to a comment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub text: String,
}

impl Reply {
    pub fn new(user: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            user: Some(user.into()),
            text: text.into(),
        }
    }

    pub fn author(&self) -> &str {
        display_author(&self.user)
    }
}

fn display_author(user: &Option<String>) -> &str {
    match user.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => ANONYMOUS,
    }
}

/// A user allowed to log in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub login: String,
    #[serde(rename = "senha")]
    pub password: String,
    #[serde(rename = "nome")]
    pub display_name: String,
}

impl User {
    pub fn new(login: &str, password: &str, display_name: &str) -> Self {
        Self {
            login: login.to_string(),
            password: password.to_string(),
            display_name: display_name.to_string(),
        }
    }
}

/// A reaction button shown under each comment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reaction {
    pub icon: &'static str,
    pub label: &'static str,
}

pub const REACTIONS: &[Reaction] = &[
    Reaction { icon: "👍", label: "curtir" },
    Reaction { icon: "❤️", label: "amei" },
    Reaction { icon: "😂", label: "haha" },
    Reaction { icon: "😮", label: "uau" },
    Reaction { icon: "😢", label: "triste" },
];
