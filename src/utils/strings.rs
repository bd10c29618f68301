/// 截取字符串，按字符计算。
///
/// start 为负数时从 `len - 1 + start` 开始；length 为负数时向前截取。
pub fn sub_str(str: &str, start: isize, length: isize) -> String {
    let rs: Vec<char> = str.chars().collect();
    let rl = rs.len() as isize;
    let mut start = start;
    if start < 0 {
        start = rl - 1 + start;
    }
    let mut end = start + length;
    if start > end {
        std::mem::swap(&mut start, &mut end);
    }
    let start = start.clamp(0, rl) as usize;
    let end = end.clamp(0, rl) as usize;
    rs[start..end].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("hello", 0, 2, "he")]
    #[case("hello", 1, 3, "ell")]
    #[case("hello", 3, 10, "lo")]
    #[case("hello", 10, 2, "")]
    #[case("hello", -1, 1, "l")]
    #[case("hello", -2, 2, "ll")]
    #[case("hello", 3, -2, "el")]
    #[case("hello", -10, 3, "")]
    #[case("中文字符串", 1, 2, "文字")]
    #[case("", 0, 5, "")]
    fn sub_str_cases(
        #[case] s: &str,
        #[case] start: isize,
        #[case] length: isize,
        #[case] want: &str,
    ) {
        assert_eq!(want, sub_str(s, start, length));
    }
}
