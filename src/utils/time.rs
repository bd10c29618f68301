use chrono::prelude::*;
use chrono_tz::{OffsetName, Tz};
use net::Result;
use net::err::UtilError;
use static_init::dynamic;
use std::collections::HashMap;
use std::fmt;
use std::fmt::Write as _;

/// 时区来源，默认使用进程本地时区
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Location {
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
    Zone(Tz),
}

impl Location {
    pub fn offset_at(&self, utc: &DateTime<Utc>) -> FixedOffset {
        match self {
            Location::Local => *utc.with_timezone(&Local).offset(),
            Location::Utc => Utc.fix(),
            Location::Fixed(offset) => *offset,
            Location::Zone(tz) => tz.offset_from_utc_datetime(&utc.naive_utc()).fix(),
        }
    }

    /// Local 拿不到时区缩写，返回 None
    pub fn abbreviation_at(&self, utc: &DateTime<Utc>) -> Option<String> {
        match self {
            Location::Utc => Some("UTC".to_string()),
            Location::Zone(tz) => tz
                .offset_from_utc_datetime(&utc.naive_utc())
                .abbreviation()
                .map(str::to_owned),
            Location::Local | Location::Fixed(_) => None,
        }
    }
}

//带时区名的时间，零值表示没有时间
#[derive(Debug, Clone, PartialEq)]
pub struct Time {
    data: DateTime<FixedOffset>,
    zone: Option<String>,
}

fn zero_naive() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// 零值 0001-01-01 00:00:00 UTC，表示"没有时间"
impl Default for Time {
    fn default() -> Self {
        Time {
            data: Utc.fix().from_utc_datetime(&zero_naive()),
            zone: None,
        }
    }
}

impl From<DateTime<FixedOffset>> for Time {
    fn from(data: DateTime<FixedOffset>) -> Self {
        Time { data, zone: None }
    }
}

pub fn now() -> Time {
    now_in(&Location::Local)
}

pub fn now_in(loc: &Location) -> Time {
    Time::from_utc(Utc::now(), loc)
}

impl Time {
    pub fn zero() -> Time {
        Time::default()
    }
    pub fn is_zero(&self) -> bool {
        self.data.naive_utc() == zero_naive()
    }
    fn from_utc(utc: DateTime<Utc>, loc: &Location) -> Time {
        Time {
            data: utc.with_timezone(&loc.offset_at(&utc)),
            zone: loc.abbreviation_at(&utc),
        }
    }
    /// 同一时刻换到另一个时区
    pub fn in_location(&self, loc: &Location) -> Time {
        Time::from_utc(self.data.with_timezone(&Utc), loc)
    }
    pub fn date_time(&self) -> DateTime<FixedOffset> {
        self.data
    }
    pub fn zone_name(&self) -> Option<&str> {
        self.zone.as_deref()
    }
    pub fn offset_seconds(&self) -> i32 {
        self.data.offset().local_minus_utc()
    }
    pub fn year(&self) -> i32 {
        self.data.year()
    }
    pub fn month(&self) -> u32 {
        self.data.month()
    }
    pub fn day(&self) -> u32 {
        self.data.day()
    }
    pub fn hour(&self) -> u32 {
        self.data.hour()
    }
    pub fn minute(&self) -> u32 {
        self.data.minute()
    }
    pub fn second(&self) -> u32 {
        self.data.second()
    }
    pub fn nanosecond(&self) -> u32 {
        self.data.nanosecond()
    }
    pub fn unix(&self) -> i64 {
        self.data.timestamp()
    }
    pub fn unix_millis(&self) -> i64 {
        self.data.timestamp_millis()
    }
    /// %Y-%m-%d %H:%M:%S
    pub fn strftime(&self, fmt: &str) -> Result<String> {
        let mut out = String::new();
        write!(out, "{}", self.data.format(fmt))
            .map_err(|_| UtilError::FormatErr(format!("时间格式错误 {:?}", fmt)))?;
        Ok(out)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data.format("%Y-%m-%d %H:%M:%S %z"))?;
        if let Some(zone) = &self.zone {
            write!(f, " {}", zone)?;
        }
        Ok(())
    }
}

#[dynamic]
static TOKENS: HashMap<char, &'static str> = HashMap::from([
    // 年
    ('Y', "%Y"), // 4 位数字完整表示的年份
    ('y', "%y"), // 2 位数字表示的年份
    // 月
    ('m', "%m"),  // 有前导零
    ('n', "%-m"), // 没有前导零
    ('M', "%b"),  // Jan
    ('F', "%B"),  // January
    // 日
    ('d', "%d"),
    ('j', "%-d"),
    ('D', "%a"), // Mon
    ('l', "%A"), // Monday
    // 时间
    ('g', "%-I"), // 12 小时，没有前导零
    ('G', "%H"),  // 24 小时，与 H 相同
    ('h', "%I"),
    ('H', "%H"),
    ('a', "%P"), // am/pm
    ('A', "%p"), // AM/PM
    ('i', "%M"),
    ('s', "%S"),
]);

/// "Y-m-d H:i:s" -> "%Y-%m-%d %H:%M:%S"，未知字符原样保留
fn to_strftime(pattern: &str) -> String {
    let mut layout = String::with_capacity(pattern.len() * 2);
    for c in pattern.chars() {
        match TOKENS.get(&c) {
            Some(spec) => layout.push_str(spec),
            None if c == '%' => layout.push_str("%%"),
            None => layout.push(c),
        }
    }
    layout
}

/// 跟 PHP 中 date 类似的使用方式，如果 ts 没传递，则使用当前时间
pub fn format(pattern: &str, ts: Option<&Time>) -> String {
    let layout = to_strftime(pattern);
    let out = match ts {
        Some(t) => t.strftime(&layout),
        None => now().strftime(&layout),
    };
    // to_strftime 只会产出合法格式符
    out.unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Shape {
    DateTime,
    Date,
    Clock,
    NoYear,
    Rfc3339,
}

struct Layout {
    /// 以空白分隔；单独的 %z 是数字时区，单独的 %Z 是时区名
    pattern: &'static str,
    shape: Shape,
}

const fn layout(pattern: &'static str, shape: Shape) -> Layout {
    Layout { pattern, shape }
}

//顺序即优先级
static LAYOUTS: &[Layout] = &[
    layout("%Y-%m-%d %H:%M:%S %z %Z", Shape::DateTime),
    layout("%Y-%m-%d %H:%M:%S %z", Shape::DateTime),
    layout("%Y-%m-%d %H:%M:%S", Shape::DateTime),
    layout("%Y/%m/%d %H:%M:%S %z %Z", Shape::DateTime),
    layout("%Y/%m/%d %H:%M:%S %z", Shape::DateTime),
    layout("%Y/%m/%d %H:%M:%S", Shape::DateTime),
    layout("%Y-%m-%d %z %Z", Shape::Date),
    layout("%Y-%m-%d %z", Shape::Date),
    layout("%Y-%m-%d", Shape::Date),
    layout("%Y/%m/%d %z %Z", Shape::Date),
    layout("%Y/%m/%d %z", Shape::Date),
    layout("%Y/%m/%d", Shape::Date),
    layout("%Y-%m-%d %H:%M:%S %z %z", Shape::DateTime),
    layout("%Y/%m/%d %H:%M:%S %z %z", Shape::DateTime),
    layout("%Y-%m-%d %z %z", Shape::Date),
    layout("%Y/%m/%d %z %z", Shape::Date),
    layout("%a %b %e %H:%M:%S %Y", Shape::DateTime), // ANSIC
    layout("%a %b %e %H:%M:%S %Z %Y", Shape::DateTime), // UnixDate
    layout("%a %b %d %H:%M:%S %z %Y", Shape::DateTime), // RubyDate
    layout("%d %b %y %H:%M %Z", Shape::DateTime),    // RFC822
    layout("%d %b %y %H:%M %z", Shape::DateTime),    // RFC822Z
    layout("%A, %d-%b-%y %H:%M:%S %Z", Shape::DateTime), // RFC850
    layout("%a, %d %b %Y %H:%M:%S %Z", Shape::DateTime), // RFC1123
    layout("%a, %d %b %Y %H:%M:%S %z", Shape::DateTime), // RFC1123Z
    layout("RFC3339", Shape::Rfc3339),
    layout("RFC3339Nano", Shape::Rfc3339),
    layout("%-I:%M%p", Shape::Clock),                // Kitchen
    layout("%b %e %H:%M:%S", Shape::NoYear),         // Stamp
    layout("%b %e %H:%M:%S%.3f", Shape::NoYear),
    layout("%b %e %H:%M:%S%.6f", Shape::NoYear),
    layout("%b %e %H:%M:%S%.9f", Shape::NoYear),
];

impl Shape {
    fn parse_naive(self, value: &str, pattern: &str) -> Option<NaiveDateTime> {
        match self {
            Shape::DateTime => NaiveDateTime::parse_from_str(value, pattern).ok(),
            Shape::Date => NaiveDate::parse_from_str(value, pattern)
                .ok()?
                .and_hms_opt(0, 0, 0),
            Shape::Clock => {
                let t = NaiveTime::parse_from_str(value, pattern).ok()?;
                Some(NaiveDate::from_ymd_opt(0, 1, 1)?.and_time(t))
            }
            // 没有年份的按第0年
            Shape::NoYear => NaiveDateTime::parse_from_str(
                &format!("0000 {}", value),
                &format!("%Y {}", pattern),
            )
            .ok(),
            Shape::Rfc3339 => None,
        }
    }
}

/// "+0800" / "-0530"
fn parse_offset(tok: &str) -> Option<FixedOffset> {
    let b = tok.as_bytes();
    if b.len() != 5 || !b[1..].iter().all(u8::is_ascii_digit) {
        return None;
    }
    let sign = match b[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let n: i32 = tok[1..].parse().ok()?;
    let (hh, mm) = (n / 100, n % 100);
    if mm > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hh * 3600 + mm * 60))
}

/// CST / HKT / ChST，或者没有名字的 +08 / -3
fn is_zone_name(tok: &str) -> bool {
    let b = tok.as_bytes();
    match b.first() {
        Some(b'+' | b'-') => {
            (2..=3).contains(&b.len())
                && b[1..].iter().all(u8::is_ascii_digit)
                && tok[1..].parse::<u8>().is_ok_and(|h| h <= 23)
        }
        Some(c) if c.is_ascii_uppercase() => {
            (3..=5).contains(&b.len()) && b.iter().all(u8::is_ascii_alphabetic)
        }
        _ => false,
    }
}

/// 星期只校验名字，不要求与日期一致
fn is_weekday(spec: &str, tok: &str) -> bool {
    let (spec, tok) = match spec.strip_suffix(',') {
        Some(spec) => match tok.strip_suffix(',') {
            Some(tok) => (spec, tok),
            None => return false,
        },
        None => (spec, tok),
    };
    let long = match spec {
        "%a" => false,
        "%A" => true,
        _ => return false,
    };
    (tok.len() > 3) == long && tok.parse::<Weekday>().is_ok()
}

impl Layout {
    fn parse(&self, value: &str) -> Option<Time> {
        if self.shape == Shape::Rfc3339 {
            return DateTime::parse_from_rfc3339(value).ok().map(Time::from);
        }
        let pats: Vec<&str> = self.pattern.split_whitespace().collect();
        let vals: Vec<&str> = value.split_whitespace().collect();
        if pats.len() != vals.len() {
            return None;
        }
        let mut offset = None;
        let mut zone = None;
        let mut pattern = Vec::with_capacity(pats.len());
        let mut rest = Vec::with_capacity(vals.len());
        for (p, v) in pats.iter().zip(vals.iter()) {
            match *p {
                "%z" if offset.is_none() => offset = Some(parse_offset(v)?),
                "%z" => {
                    parse_offset(v)?;
                    zone = Some(v.to_string());
                }
                "%Z" if is_zone_name(v) => zone = Some(v.to_string()),
                "%Z" => return None,
                "%a" | "%a," | "%A" | "%A," => {
                    if !is_weekday(p, v) {
                        return None;
                    }
                }
                // 秒后面可以跟小数，layout 里没写也接受
                _ if p.ends_with("%S") => {
                    pattern.push(format!("{}%.f", p));
                    rest.push(*v);
                }
                _ => {
                    pattern.push(p.to_string());
                    rest.push(*v);
                }
            }
        }
        let pattern = pattern.join(" ");
        let mut naive = self.shape.parse_naive(&rest.join(" "), &pattern)?;
        // %y: 69-99 为 19xx，chrono 只从 70 开始
        if pattern.contains("%y") && naive.year() == 2069 {
            naive = naive.with_year(1969)?;
        }
        // 没有数字时区的按 UTC
        let offset = offset.unwrap_or(Utc.fix());
        let data = offset.from_local_datetime(&naive).single()?;
        Some(Time { data, zone })
    }
}

fn scan(value: &str) -> Option<(usize, Time)> {
    LAYOUTS.iter().enumerate().find_map(|(i, layout)| {
        let t = layout.parse(value);
        if t.is_none() {
            log::trace!("layout {} {:?} not match {:?}", i, layout.pattern, value);
        }
        t.map(|t| (i, t))
    })
}

/// 依次尝试内置 layout，第一个成功的为准。空字符串返回零值。
pub fn parse(value: &str) -> Result<Time> {
    if value.is_empty() {
        return Ok(Time::default());
    }
    match scan(value) {
        Some((i, t)) => {
            log::debug!("parse {:?} by layout {} {:?}", value, i, LAYOUTS[i].pattern);
            Ok(t)
        }
        None => {
            log::debug!("parse {:?} failed, tried {} layouts", value, LAYOUTS.len());
            Err(UtilError::UnparseableTimestamp(value.to_string()))
        }
    }
}

fn offset_string(offset: FixedOffset) -> String {
    let secs = offset.local_minus_utc();
    let sign = if secs < 0 { '-' } else { '+' };
    let secs = secs.abs();
    format!("{}{:02}{:02}", sign, secs / 3600, secs % 3600 / 60)
}

/// 不带时区的字符串，补上 loc 当前的偏移和时区名后再 parse，loc 默认为本地时区
pub fn parse_local(value: &str, loc: Option<&Location>) -> Result<Time> {
    if value.is_empty() {
        return Ok(Time::default());
    }
    let loc = loc.copied().unwrap_or_default();
    let now = Utc::now();
    let mut value = format!("{} {}", value, offset_string(loc.offset_at(&now)));
    if let Some(name) = loc.abbreviation_at(&now).filter(|n| is_zone_name(n)) {
        value.push(' ');
        value.push_str(&name);
    }
    parse(&value)
}
