#[bitwise_enum::bitwise(krate = "x")]
enum A { X }

#[bitwise_enum::bitwise(crate = "x", crate = "y")]
enum B { X }

fn main() {}
