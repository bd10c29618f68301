mod fs;
mod shuffle;
mod strings;
mod time;
pub use fs::*;
pub use shuffle::*;
pub use strings::*;
pub use time::*;

/// md5 小写16进制
pub fn md5_hex(s: impl AsRef<[u8]>) -> String {
    format!("{:x}", md5::compute(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn md5() {
        assert_eq!("d41d8cd98f00b204e9800998ecf8427e", md5_hex(""));
        assert_eq!("5d41402abc4b2a76b9719d911017c592", md5_hex("hello"));
        assert_eq!(md5_hex("hello"), md5_hex(b"hello".to_vec()));
    }
}
