mod flags {
    /// Permissions on a file.
    #[bitwise_enum::bitwise]
    #[derive(Debug, Default, PartialOrd, Ord)]
    pub enum Mode {
        /// No permission.
        #[default]
        None = 0,
        Read = 4,
        Write = 2,
        #[cfg(any())]
        Missing = 1,
        Exec = 1,
    }
}

use flags::Mode;

fn main() {
    assert_eq!(Mode::default(), Mode::None);
    assert!(Mode::Read > Mode::Write);

    let rw = Mode::Read | Mode::Write;
    assert_eq!(format!("{:?}", Mode::Exec), "Exec");
    assert_eq!(format!("{rw:?}"), "Mode(6)");
    assert_eq!(u8::from(rw), 6);
}
