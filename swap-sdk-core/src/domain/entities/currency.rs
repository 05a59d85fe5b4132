//! Currency entities
//! 
//! A currency is either the chain's native gas asset or an ERC20 [`Token`].
//! Both share the base capability set of decimals, symbol and name.

use super::token::Token;
use crate::shared::constants::{NATIVE_DECIMALS, NATIVE_NAME, NATIVE_SYMBOL};
use crate::shared::types::Decimals;

/// Fields every currency carries
pub trait BaseCurrency {
    fn decimals(&self) -> Decimals;
    fn symbol(&self) -> Option<&str>;
    fn name(&self) -> Option<&str>;
}

/// A chain's native asset. Only the process-wide [`NATIVE_ETHER`] exists;
/// currencies refer to it by `&'static` and compare by identity.
#[derive(Debug)]
pub struct NativeCurrency {
    decimals: Decimals,
    symbol: Option<&'static str>,
    name: Option<&'static str>,
}

impl BaseCurrency for NativeCurrency {
    fn decimals(&self) -> Decimals {
        self.decimals
    }

    fn symbol(&self) -> Option<&str> {
        self.symbol
    }

    fn name(&self) -> Option<&str> {
        self.name
    }
}

#[derive(Debug, Clone)]
pub enum Currency {
    Native(&'static NativeCurrency),
    Token(Token),
}

impl Currency {
    pub fn is_native(&self) -> bool {
        matches!(self, Currency::Native(_))
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Currency::Token(token) => Some(token),
            Currency::Native(_) => None,
        }
    }
}

impl BaseCurrency for Currency {
    fn decimals(&self) -> Decimals {
        match self {
            Currency::Native(native) => native.decimals(),
            Currency::Token(token) => token.decimals(),
        }
    }

    fn symbol(&self) -> Option<&str> {
        match self {
            Currency::Native(native) => native.symbol(),
            Currency::Token(token) => token.symbol(),
        }
    }

    fn name(&self) -> Option<&str> {
        match self {
            Currency::Native(native) => native.name(),
            Currency::Token(token) => token.name(),
        }
    }
}

impl From<Token> for Currency {
    fn from(token: Token) -> Self {
        Currency::Token(token)
    }
}

pub static NATIVE_ETHER: NativeCurrency = NativeCurrency {
    decimals: NATIVE_DECIMALS,
    symbol: Some(NATIVE_SYMBOL),
    name: Some(NATIVE_NAME),
};

/// The native currency as a [`Currency`]
pub static ETHER: Currency = Currency::Native(&NATIVE_ETHER);

/// Compares two currencies for equality.
///
/// Tokens compare by chain and address. A token never equals a native
/// currency. Native currencies are singletons and compare by identity.
pub fn currency_equals(currency_a: &Currency, currency_b: &Currency) -> bool {
    match (currency_a, currency_b) {
        (Currency::Token(a), Currency::Token(b)) => a.equals(b),
        (Currency::Token(_), _) | (_, Currency::Token(_)) => false,
        (Currency::Native(a), Currency::Native(b)) => std::ptr::eq(*a, *b),
    }
}
