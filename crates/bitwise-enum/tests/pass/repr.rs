use bitwise_enum::{BitwiseEnum, BitwiseEnumExt};

const SHIFT: u32 = 30;

#[bitwise_enum::bitwise]
#[repr(i32)]
enum Signed {
    Low = 1,
    Mid = 1 << SHIFT,
    High = 1 << 31,
    AfterHigh,
    All = -1,
}

#[bitwise_enum::bitwise]
#[repr(i8)]
enum Byte {
    Low = 1,
    Sign = 1 << 7,
    Both = (1 << 7) | 1,
}

#[bitwise_enum::bitwise]
enum Implicit {
    A,
    B,
    C = 0x1_00,
    D,
}

fn repr<T: BitwiseEnum>(value: T) -> T::Repr {
    value.into_repr()
}

fn main() {
    assert_eq!(repr(Signed::High), i32::MIN);
    assert_eq!(repr(Signed::AfterHigh), i32::MIN + 1);
    assert_eq!(repr(Signed::Mid), 1 << 30);
    assert!(Signed::Low | Signed::High | Signed::All == Signed::All);
    assert!(Signed::Low | Signed::High == Signed::AfterHigh);
    assert_eq!(<Signed as BitwiseEnumExt>::REPR_WIDTH, 32);

    assert_eq!(repr(Byte::Sign), i8::MIN);
    assert!(Byte::Low | Byte::Sign == Byte::Both);
    assert!(!Byte::Low == Byte::from_repr(-2));

    let values = [Implicit::A, Implicit::B, Implicit::C, Implicit::D].map(u16::from);
    assert_eq!(values, [0, 1, 0x100, 0x101]);
    assert_eq!(<Implicit as BitwiseEnumExt>::REPR_WIDTH, 16);
}
