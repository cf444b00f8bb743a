#[bitwise_enum::bitwise]
enum Flags {
    A(u8),
}

fn main() {}
