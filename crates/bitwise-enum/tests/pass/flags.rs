#[bitwise_enum::bitwise]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flags {
    Zero = 0b00,
    A = 0b01,
    B = 0b10,
}

fn main() {
    let mut x = Flags::A | Flags::B;
    x &= !Flags::B;
    x ^= Flags::B;
    x |= Flags::Zero;
    assert_eq!(x, Flags::A | Flags::B);
    assert!(!x.is_zero());
    assert!(Flags::Zero.is_zero());
}
