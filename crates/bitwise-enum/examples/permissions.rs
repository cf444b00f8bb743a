// SPDX-License-Identifier: MPL-2.0

use bitwise_enum::bitwise;

/// Unix permission bits for one class of user.
#[bitwise]
#[derive(Debug, Default)]
enum Perm {
    #[default]
    None = 0,
    Exec = 1 << 0,
    Write = 1 << 1,
    Read = 1 << 2,
}

impl Perm {
    const ALL: Self = Self::Read.or(Self::Write).or(Self::Exec);

    fn describe(self) -> String {
        [(Self::Read, 'r'), (Self::Write, 'w'), (Self::Exec, 'x')]
            .into_iter()
            .map(|(perm, c)| if (self & perm).is_zero() { '-' } else { c })
            .collect()
    }
}

fn main() {
    let mut perm = Perm::default();
    perm |= Perm::Read | Perm::Write;
    println!("{perm:?} = {}", perm.describe());

    perm ^= Perm::ALL;
    println!("{perm:?} = {}", perm.describe());

    perm &= !Perm::Exec;
    println!("{perm:?} = {} ({:03b})", perm.describe(), u8::from(perm));
}
