#[bitwise_enum::bitwise]
#[derive(Default)]
enum A { X }

#[bitwise_enum::bitwise]
enum B {
    #[default]
    X,
}

fn main() {}
