use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutability {
    Mutable,
    Immutable,
}

impl Mutability {
    pub fn is_mutable(&self) -> bool {
        matches!(self, Mutability::Mutable)
    }
}

impl Display for Mutability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mutability::Mutable => write!(f, "let"),
            Mutability::Immutable => write!(f, "const"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variable {
    pub mutability: Mutability,
    pub value: u32,
}

impl Variable {
    pub fn mutable(value: u32) -> Self {
        Self { mutability: Mutability::Mutable, value }
    }

    pub fn immutable(value: u32) -> Self {
        Self { mutability: Mutability::Immutable, value }
    }
}
