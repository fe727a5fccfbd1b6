use std::fmt;

/// The header layouts introduced by protocol upgrades, from the 15-field
/// legacy shape through the 21-field Prague shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForkLayout {
    Legacy,
    London,
    Shanghai,
    Cancun,
    Prague,
}

impl ForkLayout {
    /// Number of RLP items a canonical header of this layout carries.
    pub fn field_count(&self) -> usize {
        match self {
            ForkLayout::Legacy => 15,
            ForkLayout::London => 16,
            ForkLayout::Shanghai => 17,
            ForkLayout::Cancun => 20,
            ForkLayout::Prague => 21,
        }
    }
}

impl fmt::Display for ForkLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ForkLayout::Legacy => "legacy",
            ForkLayout::London => "london",
            ForkLayout::Shanghai => "shanghai",
            ForkLayout::Cancun => "cancun",
            ForkLayout::Prague => "prague",
        };
        write!(f, "{}", name)
    }
}
