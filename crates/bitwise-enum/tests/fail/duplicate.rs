#[bitwise_enum::bitwise]
#[bitwise_enum::bitwise]
enum Flags { A }

fn main() {}
