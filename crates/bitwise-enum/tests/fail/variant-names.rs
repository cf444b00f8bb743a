#[bitwise_enum::bitwise]
enum Flags {
    A,
    or,
}

fn main() {}
