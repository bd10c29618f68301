use net::Result;
use std::path::Path;

pub fn exist(path: impl AsRef<Path>) -> bool {
    std::fs::metadata(path).is_ok()
}

pub fn read_file_byte(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    std::fs::read(path).map_err(|e| {
        log::debug!("read {} failed: {}", path.display(), e);
        e.into()
    })
}

pub fn read_file_str(path: impl AsRef<Path>) -> Result<String> {
    let raw = read_file_byte(path)?;
    Ok(String::from_utf8(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use net::err::ErrorKind;
    use std::io::Write;

    #[test]
    fn read_and_exist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        assert!(!exist(&path));
        assert!(exist(dir.path()));

        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all("中文\n".as_bytes()).unwrap();
        drop(f);

        assert!(exist(&path));
        assert_eq!("中文\n".as_bytes(), read_file_byte(&path).unwrap());
        assert_eq!("中文\n", read_file_str(&path).unwrap());
    }

    #[test]
    fn read_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        assert_eq!(ErrorKind::Io, read_file_byte(&missing).unwrap_err().kind());
        assert_eq!(ErrorKind::Io, read_file_str(&missing).unwrap_err().kind());

        let bin = dir.path().join("bin");
        std::fs::write(&bin, [0xff, 0xfe, 0x00]).unwrap();
        assert_eq!(3, read_file_byte(&bin).unwrap().len());
        assert_eq!(ErrorKind::Format, read_file_str(&bin).unwrap_err().kind());
    }
}
