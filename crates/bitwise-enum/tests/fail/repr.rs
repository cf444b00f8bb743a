#[bitwise_enum::bitwise]
#[repr(C)]
enum A { X }

#[bitwise_enum::bitwise]
#[repr(u7)]
enum B { X }

#[bitwise_enum::bitwise]
#[repr(u8)]
enum C { X = 0x100 }

const D: u8 = 1;

#[bitwise_enum::bitwise]
enum E { X = D }

fn main() {
    let _ = D;
}
