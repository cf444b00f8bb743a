#[repr(transparent)]
pub struct Flags(u8);
#[automatically_derived]
impl ::core::clone::Clone for Flags {
    #[inline]
    fn clone(&self) -> Flags {
        let _: ::core::clone::AssertParamIsClone<u8>;
        *self
    }
}
#[automatically_derived]
impl ::core::marker::Copy for Flags {}
#[automatically_derived]
impl ::core::marker::StructuralPartialEq for Flags {}
#[automatically_derived]
impl ::core::cmp::PartialEq for Flags {
    #[inline]
    fn eq(&self, other: &Flags) -> bool {
        self.0 == other.0
    }
}
#[automatically_derived]
impl ::core::cmp::Eq for Flags {
    #[inline]
    #[doc(hidden)]
    #[coverage(off)]
    fn assert_receiver_is_total_eq(&self) -> () {
        let _: ::core::cmp::AssertParamIsEq<u8>;
    }
}
#[automatically_derived]
impl ::core::cmp::PartialOrd for Flags {
    #[inline]
    fn partial_cmp(
        &self,
        other: &Flags,
    ) -> ::core::option::Option<::core::cmp::Ordering> {
        ::core::cmp::PartialOrd::partial_cmp(&self.0, &other.0)
    }
}
#[automatically_derived]
impl ::core::cmp::Ord for Flags {
    #[inline]
    fn cmp(&self, other: &Flags) -> ::core::cmp::Ordering {
        ::core::cmp::Ord::cmp(&self.0, &other.0)
    }
}
#[automatically_derived]
impl ::core::hash::Hash for Flags {
    #[inline]
    fn hash<__H: ::core::hash::Hasher>(&self, state: &mut __H) -> () {
        ::core::hash::Hash::hash(&self.0, state)
    }
}
#[allow(non_upper_case_globals)]
impl Flags {
    pub const None: Self = Self(0);
    pub const A: Self = Self(1);
    pub const B: Self = Self(2);
}
#[allow(dead_code)]
impl Flags {
    /// Reinterprets a raw representation, which need not equal any declared constant.
    #[inline]
    pub const fn from_repr(repr: u8) -> Self {
        Self(repr)
    }
    /// The underlying representation.
    #[inline]
    pub const fn into_repr(self) -> u8 {
        self.0
    }
    /// Bitwise-or of the underlying representations.
    #[inline]
    pub const fn or(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
    /// Applies the operator of the same name without the `_assign` suffix in place.
    #[inline]
    pub const fn or_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
    /// Bitwise-and of the underlying representations.
    #[inline]
    pub const fn and(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
    /// Applies the operator of the same name without the `_assign` suffix in place.
    #[inline]
    pub const fn and_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
    /// Bitwise-xor of the underlying representations.
    #[inline]
    pub const fn xor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
    /// Applies the operator of the same name without the `_assign` suffix in place.
    #[inline]
    pub const fn xor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
    /// Bitwise complement of the underlying representation.
    #[inline]
    pub const fn complement(self) -> Self {
        Self(!self.0)
    }
    /// Whether no bit is set. Negate it to test whether any bit is set.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}
impl ::bitwise_enum::BitwiseEnum for Flags {
    type Repr = u8;
    #[inline]
    fn from_repr(repr: Self::Repr) -> Self {
        Self(repr)
    }
    #[inline]
    fn into_repr(self) -> Self::Repr {
        self.0
    }
}
impl ::core::convert::From<Flags> for u8 {
    #[inline]
    fn from(value: Flags) -> Self {
        value.0
    }
}
impl ::core::ops::BitOr for Flags {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self::or(self, rhs)
    }
}
impl ::core::ops::BitOrAssign for Flags {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        Self::or_assign(self, rhs)
    }
}
impl ::core::ops::BitAnd for Flags {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self::and(self, rhs)
    }
}
impl ::core::ops::BitAndAssign for Flags {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        Self::and_assign(self, rhs)
    }
}
impl ::core::ops::BitXor for Flags {
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self::xor(self, rhs)
    }
}
impl ::core::ops::BitXorAssign for Flags {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        Self::xor_assign(self, rhs)
    }
}
impl ::core::ops::Not for Flags {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self::complement(self)
    }
}
impl ::core::fmt::Debug for Flags {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        ::bitwise_enum::__private::fmt_flags(
            f,
            "Flags",
            self.0,
            &[("None", Self::None.0), ("A", Self::A.0), ("B", Self::B.0)],
        )
    }
}
impl ::core::default::Default for Flags {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}
fn main() {}
