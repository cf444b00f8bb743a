#[bitwise_enum::bitwise]
struct Flags(u8);

#[bitwise_enum::bitwise]
trait Flags {}

fn main() {}
