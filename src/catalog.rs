use crate::core_types::TokenId;
use crate::error::{BoardError, BoardResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumString};

/// What a token does to its cell when placed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TokenRole {
    /// Ordinary icon token; locks only by pairing with a same-id token.
    #[default]
    Icon,
    /// Locks its own cell immediately, no partner required.
    Lock,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenDef {
    pub id: TokenId,
    /// Short display glyph for terminal rendering.
    pub glyph: String,
    /// Opaque visual tag for a renderer (css color, sprite name, ...).
    pub tint: String,
    #[serde(default)]
    pub role: TokenRole,
}

/// The fixed, ordered set of placeable tokens.
///
/// Exactly one token carries [`TokenRole::Lock`]. Catalog order is
/// definition order and is what pickers should present.
#[derive(Debug, Clone, Default)]
pub struct TokenCatalog {
    tokens: Vec<TokenDef>,
    by_id: HashMap<TokenId, usize>,
    lock_id: TokenId,
}

impl TokenCatalog {
    pub fn new(tokens: Vec<TokenDef>) -> BoardResult<Self> {
        if tokens.is_empty() {
            return Err(BoardError::Catalog("catalog has no tokens".to_string()));
        }

        let mut by_id = HashMap::new();
        let mut lock_id: Option<TokenId> = None;

        for (idx, def) in tokens.iter().enumerate() {
            if by_id.insert(def.id.clone(), idx).is_some() {
                return Err(BoardError::Catalog(format!(
                    "duplicate token id '{}'",
                    def.id
                )));
            }
            if def.role == TokenRole::Lock {
                if lock_id.is_some() {
                    return Err(BoardError::Catalog(
                        "more than one lock token defined".to_string(),
                    ));
                }
                lock_id = Some(def.id.clone());
            }
        }

        let lock_id = lock_id
            .ok_or_else(|| BoardError::Catalog("no lock token defined".to_string()))?;

        Ok(Self {
            tokens,
            by_id,
            lock_id,
        })
    }

    /// The default icon set of the minigame aid.
    pub fn builtin() -> Self {
        let defaults = vec![
            ("wine", "W", "#7b1e3c"),
            ("tankard", "T", "#b5832a"),
            ("bread", "B", "#c9974d"),
            ("cheese", "C", "#e3b932"),
            ("fish", "F", "#4a7fa5"),
            ("grapes", "G", "#5e3a87"),
            ("coin", "O", "#d4af37"),
            ("gem", "J", "#2aa198"),
        ];

        let mut tokens: Vec<TokenDef> = defaults
            .into_iter()
            .map(|(id, glyph, tint)| TokenDef {
                id: id.to_string(),
                glyph: glyph.to_string(),
                tint: tint.to_string(),
                role: TokenRole::Icon,
            })
            .collect();

        tokens.push(TokenDef {
            id: crate::consts::LOCK_TOKEN_ID.to_string(),
            glyph: "#".to_string(),
            tint: "#555555".to_string(),
            role: TokenRole::Lock,
        });

        Self::new(tokens).expect("built-in catalog is well formed")
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> BoardResult<Self> {
        let content = fs::read_to_string(path)?;
        let tokens: Vec<TokenDef> = serde_json::from_str(&content)?;
        Self::new(tokens)
    }

    pub fn get(&self, id: &str) -> Option<&TokenDef> {
        self.by_id.get(id).map(|&idx| &self.tokens[idx])
    }

    pub fn is_lock(&self, id: &str) -> bool {
        self.lock_id == id
    }

    pub fn lock_id(&self) -> &str {
        &self.lock_id
    }

    pub fn tokens(&self) -> &[TokenDef] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
