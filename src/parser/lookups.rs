use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::lexer::tokens::TokenKind;

/// Operator precedence, lowest first.
///
/// `Default` marks a token that is not a binary operator; it sorts below every
/// real operator so a climbing loop stops on it.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Additive,
    Multiplicative,
}

lazy_static! {
    pub static ref BP_LOOKUP: HashMap<TokenKind, BindingPower> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Plus, BindingPower::Additive);
        map.insert(TokenKind::Dash, BindingPower::Additive);
        map.insert(TokenKind::Star, BindingPower::Multiplicative);
        map.insert(TokenKind::Slash, BindingPower::Multiplicative);
        map
    };
}

impl BindingPower {
    pub fn of(kind: TokenKind) -> BindingPower {
        BP_LOOKUP
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    pub fn is_operator(&self) -> bool {
        *self != BindingPower::Default
    }
}
