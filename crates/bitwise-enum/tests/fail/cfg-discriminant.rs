#[bitwise_enum::bitwise]
enum Flags {
    A,
    #[cfg(any())]
    B,
    C,
}

fn main() {}
