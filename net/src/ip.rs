use crate::err::UtilError;
use crate::Result;
use std::net::Ipv4Addr;

/// "192.168.1.1" -> 3232235777，第一段为高位
pub fn ip2long(ip: &str) -> Result<u32> {
    let parts: Vec<&str> = ip.split('.').collect();
    if parts.len() != 4 {
        return Err(UtilError::AddressError(ip.to_string()));
    }
    let mut int_ip: u32 = 0;
    for (key, value) in parts.iter().enumerate() {
        let octet = value
            .parse::<u8>()
            .map_err(|_| UtilError::AddressError(ip.to_string()))?;
        int_ip |= (octet as u32) << ((3 - key) * 8);
    }
    Ok(int_ip)
}

/// IP转成字符串 大端解析
pub fn long2ip(int_ip: u32) -> String {
    Ipv4Addr::from(int_ip).to_string()
}

/// 低位字节在前: b0.b1.b2.b3
pub fn long2ip_big(int_ip: i64) -> String {
    let [b0, b1, b2, b3] = octets(int_ip);
    format!("{}.{}.{}.{}", b0, b1, b2, b3)
}

/// IP转成字符串 (小端解析)，高位字节在前: b3.b2.b1.b0
pub fn long2ip_little(int_ip: i64) -> String {
    let [b0, b1, b2, b3] = octets(int_ip);
    format!("{}.{}.{}.{}", b3, b2, b1, b0)
}

//只取低32位
fn octets(int_ip: i64) -> [u8; 4] {
    (int_ip as u32).to_le_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::err::ErrorKind;
    use rstest::rstest;

    #[rstest]
    #[case("0.0.0.0", 0)]
    #[case("127.0.0.1", 2130706433)]
    #[case("192.168.1.1", 3232235777)]
    #[case("255.255.255.255", u32::MAX)]
    fn ip2long_ok(#[case] ip: &str, #[case] want: u32) {
        assert_eq!(want, ip2long(ip).unwrap());
        assert_eq!(ip, long2ip(want));
    }

    #[rstest]
    #[case("1.2.3")]
    #[case("1.2.3.4.5")]
    #[case("256.1.1.1")]
    #[case("a.b.c.d")]
    #[case("1.2.-3.4")]
    #[case("")]
    fn ip2long_err(#[case] ip: &str) {
        let err = ip2long(ip).unwrap_err();
        assert_eq!(ErrorKind::Address, err.kind());
    }

    #[test]
    fn byte_order_variants() {
        let v = 3232235777i64;
        assert_eq!("1.1.168.192", long2ip_big(v));
        assert_eq!("192.168.1.1", long2ip_little(v));
        // 超出32位的部分忽略
        assert_eq!("192.168.1.1", long2ip_little(v + (1 << 32)));
        assert_eq!("255.255.255.255", long2ip_big(-1));
    }
}
