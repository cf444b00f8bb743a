#[bitwise_enum::bitwise]
enum Flags {
    Zero = 0b00,
    A = 0b01,
    B = 0b10,
}

const AB: Flags = Flags::A.or(Flags::B);
const A: Flags = AB.and(Flags::B.complement());
const NOTHING: Flags = A.xor(Flags::A);
const ASSIGNED: Flags = {
    let mut x = Flags::Zero;
    x.or_assign(Flags::A);
    x.or_assign(Flags::B);
    x.and_assign(Flags::A.complement());
    x.xor_assign(Flags::A);
    x
};

const _: () = assert!(AB.into_repr() == 0b11);
const _: () = assert!(A.into_repr() == Flags::A.into_repr());
const _: () = assert!(NOTHING.is_zero());
const _: () = assert!(!AB.is_zero());
const _: () = assert!(ASSIGNED.into_repr() == 0b11);
const _: () = assert!(Flags::from_repr(0b10).into_repr() == Flags::B.into_repr());
const _: () = assert!(bitwise_enum::is_bitwise_enum!(Flags));

fn main() {}
