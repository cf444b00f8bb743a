#[bitwise_enum::bitwise]
enum Flags {}

fn main() {}
