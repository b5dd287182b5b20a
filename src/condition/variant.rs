/// The variant on an operation.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum Variant {
    None = 0,
    IfExists = 1,
    Negated = 2,
    IfExistsNegated = 3,
}

impl Variant {
    #[inline]
    pub(super) fn as_usize(self) -> usize {
        self as usize
    }

    #[inline]
    pub(super) fn if_exists(self) -> bool {
        matches!(self, Self::IfExists | Self::IfExistsNegated)
    }

    #[inline]
    pub(super) fn negated(self) -> bool {
        matches!(self, Self::Negated | Self::IfExistsNegated)
    }

    /// The same variant with the `IfExists` suffix applied.
    #[inline]
    pub(super) fn with_if_exists(self) -> Self {
        if self.negated() {
            Self::IfExistsNegated
        } else {
            Self::IfExists
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::Variant, pretty_assertions::assert_eq};

    #[test_log::test]
    fn test_variant_flags() {
        assert!(!Variant::None.if_exists());
        assert!(Variant::IfExists.if_exists());
        assert!(Variant::IfExistsNegated.negated());
        assert!(!Variant::IfExists.negated());

        assert_eq!(Variant::None.with_if_exists(), Variant::IfExists);
        assert_eq!(Variant::IfExists.with_if_exists(), Variant::IfExists);
        assert_eq!(Variant::Negated.with_if_exists(), Variant::IfExistsNegated);
        assert_eq!(Variant::IfExistsNegated.with_if_exists(), Variant::IfExistsNegated);
        assert_eq!(Variant::Negated.as_usize(), 2);
    }
}
