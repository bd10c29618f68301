use num_enum::*;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilError {
    #[error("IoError: {0}")]
    IoError(String),

    #[error("{0}")]
    Custom(String),

    #[error("{0} Address error")]
    AddressError(String),

    #[error("{0}")]
    FormatErr(String),

    #[error("buffer too short, need {need} got {got}")]
    ShortBuffer { need: usize, got: usize },

    #[error("字符集转换失败 {0}")]
    Charset(String),

    #[error("无法解析的时间 {0:?}")]
    UnparseableTimestamp(String),
}

/// 错误类别，repr(u8) 方便对外暴露错误码
#[derive(IntoPrimitive, TryFromPrimitive, Debug, PartialEq, Eq, Clone, Copy)]
#[repr(u8)]
pub enum ErrorKind {
    Io = 1,
    Custom,
    Address,
    Format,
    ShortBuffer,
    Charset,
    UnparseableTimestamp,
}

impl UtilError {
    pub fn new_with_string(s: String) -> UtilError {
        UtilError::Custom(s)
    }
    pub fn kind(&self) -> ErrorKind {
        match self {
            UtilError::IoError(_) => ErrorKind::Io,
            UtilError::Custom(_) => ErrorKind::Custom,
            UtilError::AddressError(_) => ErrorKind::Address,
            UtilError::FormatErr(_) => ErrorKind::Format,
            UtilError::ShortBuffer { .. } => ErrorKind::ShortBuffer,
            UtilError::Charset(_) => ErrorKind::Charset,
            UtilError::UnparseableTimestamp(_) => ErrorKind::UnparseableTimestamp,
        }
    }
    pub fn code(&self) -> u8 {
        self.kind().into()
    }
}

impl std::convert::From<std::io::Error> for UtilError {
    fn from(err: std::io::Error) -> Self {
        UtilError::IoError(err.to_string())
    }
}

use std::string::FromUtf8Error;
impl std::convert::From<FromUtf8Error> for UtilError {
    fn from(err: FromUtf8Error) -> Self {
        UtilError::FormatErr(format!("byte转utf8错误,{}", err))
    }
}
impl std::convert::From<std::str::Utf8Error> for UtilError {
    fn from(err: std::str::Utf8Error) -> Self {
        UtilError::FormatErr(format!("byte转utf8错误,{}", err))
    }
}

impl std::convert::From<std::num::ParseIntError> for UtilError {
    fn from(err: std::num::ParseIntError) -> Self {
        UtilError::FormatErr(format!("数字转换失败{}", err))
    }
}

impl<T: TryFromPrimitive> std::convert::From<TryFromPrimitiveError<T>> for UtilError {
    fn from(_err: TryFromPrimitiveError<T>) -> Self {
        UtilError::FormatErr("error ErrorKind".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_and_code() {
        let err = UtilError::UnparseableTimestamp("x".to_string());
        assert_eq!(ErrorKind::UnparseableTimestamp, err.kind());
        assert_eq!(7, err.code());
        assert_eq!(ErrorKind::Io, ErrorKind::try_from(1u8).unwrap());

        let err: UtilError = ErrorKind::try_from(0u8).unwrap_err().into();
        assert_eq!(ErrorKind::Format, err.kind());
    }

    #[test]
    fn from_conversions() {
        let err: UtilError = "abc".parse::<i64>().unwrap_err().into();
        assert_eq!(ErrorKind::Format, err.kind());

        let err: UtilError = String::from_utf8(vec![0xff, 0xfe]).unwrap_err().into();
        assert!(err.to_string().starts_with("byte转utf8错误"));

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: UtilError = io.into();
        assert_eq!(UtilError::IoError("gone".to_string()), err);
    }

    #[test]
    fn display() {
        assert_eq!(
            "1.2.3 Address error",
            UtilError::AddressError("1.2.3".into()).to_string()
        );
        assert_eq!(
            "buffer too short, need 8 got 3",
            UtilError::ShortBuffer { need: 8, got: 3 }.to_string()
        );
    }
}
