//! 数值与字节互转。整数按大端，浮点按小端，下游依赖这个布局，不要统一。

use crate::Result;
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use net::err::UtilError;

fn need(buf: &[u8], n: usize) -> Result<&[u8]> {
    if buf.len() < n {
        return Err(UtilError::ShortBuffer {
            need: n,
            got: buf.len(),
        });
    }
    Ok(&buf[..n])
}

pub fn int64_to_bytes(i: i64) -> [u8; 8] {
    let mut buf = [0u8; 8];
    BigEndian::write_i64(&mut buf, i);
    buf
}

pub fn bytes_to_int64(buf: &[u8]) -> Result<i64> {
    Ok(BigEndian::read_i64(need(buf, 8)?))
}

/// 低32位写入前4字节，返回长度仍为8，后4字节为0
pub fn int32_to_bytes(i: i64) -> [u8; 8] {
    let mut buf = [0u8; 8];
    BigEndian::write_u32(&mut buf[..4], i as u32);
    buf
}

pub fn bytes_to_int32(buf: &[u8]) -> Result<i32> {
    Ok(BigEndian::read_i32(need(buf, 4)?))
}

/// 文本数字，如 b"123"
pub fn bytes_to_int(buf: &[u8]) -> Result<i64> {
    Ok(std::str::from_utf8(buf)?.parse::<i64>()?)
}

pub fn float32_to_bytes(float: f32) -> [u8; 4] {
    let mut buf = [0u8; 4];
    LittleEndian::write_f32(&mut buf, float);
    buf
}

pub fn bytes_to_float32(buf: &[u8]) -> Result<f32> {
    Ok(LittleEndian::read_f32(need(buf, 4)?))
}

pub fn float64_to_bytes(float: f64) -> [u8; 8] {
    let mut buf = [0u8; 8];
    LittleEndian::write_f64(&mut buf, float);
    buf
}

pub fn bytes_to_float64(buf: &[u8]) -> Result<f64> {
    Ok(LittleEndian::read_f64(need(buf, 8)?))
}
