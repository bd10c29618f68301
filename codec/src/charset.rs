use crate::Result;
use encoding_rs::GBK;
use net::err::UtilError;

/// 将内容转码成GBK
pub fn gbk_encode(src: &str) -> Result<Vec<u8>> {
    let (data, _, had_errors) = GBK.encode(src);
    if had_errors {
        return Err(UtilError::Charset(format!("utf8 -> gbk {:?}", src)));
    }
    Ok(data.into_owned())
}

/// 将GBK内容转码成UTF-8
pub fn gbk_decode(src: &[u8]) -> Result<String> {
    match GBK.decode_without_bom_handling_and_without_replacement(src) {
        Some(data) => Ok(data.into_owned()),
        None => Err(UtilError::Charset(format!("gbk -> utf8 {} bytes", src.len()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use net::err::ErrorKind;

    #[test]
    fn gbk() {
        let b = gbk_encode("中文abc").unwrap();
        assert_eq!(&[0xd6, 0xd0, 0xce, 0xc4, b'a', b'b', b'c'], b.as_slice());
        assert_eq!("中文abc", gbk_decode(&b).unwrap());
        assert_eq!("", gbk_decode(&[]).unwrap());
    }

    #[test]
    fn gbk_errors() {
        assert_eq!(ErrorKind::Charset, gbk_encode("😀").unwrap_err().kind());
        assert_eq!(ErrorKind::Charset, gbk_decode(&[0xd6]).unwrap_err().kind());
    }
}
