#[bitwise_enum::bitwise]
#[derive(Debug, Default)]
pub enum Flags {
    #[default]
    None,
    A = 0b01,
    B = 0b10,
}

fn main() {}
