use crate::Result;
use base64::{engine::general_purpose, Engine as _};
use net::err::UtilError;

/// url encode string, 空格转成 + 而不是 %20
pub fn url_encode(str: &str) -> String {
    urlencoding::encode(str).replace("%20", "+")
}

/// url decode string, + 还原为空格，%后必须跟两位16进制
pub fn url_decode(str: &str) -> Result<String> {
    let b = str.as_bytes();
    let mut i = 0;
    while i < b.len() {
        if b[i] != b'%' {
            i += 1;
            continue;
        }
        let valid = b.len() > i + 2 && b[i + 1].is_ascii_hexdigit() && b[i + 2].is_ascii_hexdigit();
        if !valid {
            return Err(UtilError::FormatErr(format!("url转换失败 {}", str)));
        }
        i += 3;
    }
    Ok(urlencoding::decode(&str.replace('+', " "))?.into_owned())
}

/// base64 encode
pub fn base64_encode(str: &str) -> String {
    general_purpose::STANDARD.encode(str.as_bytes())
}

/// base64 decode
pub fn base64_decode(str: &str) -> Result<String> {
    let raw = general_purpose::STANDARD
        .decode(str)
        .map_err(|e| UtilError::FormatErr(format!("base64解码失败 {}", e)))?;
    Ok(String::from_utf8(raw)?)
}
