//! Fixed-capacity text rendering used by the formatted print helpers.

use core::fmt::{self, Write};

use heapless::String;
use time::PrimitiveDateTime;

pub const TEXT_CAPACITY: usize = 64;

pub type Text = String<TEXT_CAPACITY>;

/// Writes into a [`Text`], keeping whatever fits once capacity runs out.
struct Truncating<'a> {
    text: &'a mut Text,
    overflowed: bool,
}

impl Write for Truncating<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.text.push(c).is_err() {
                self.overflowed = true;
                return Err(fmt::Error);
            }
        }
        Ok(())
    }
}

fn render<F>(write: F) -> Result<Text, fmt::Error>
where
    F: FnOnce(&mut Truncating<'_>) -> fmt::Result,
{
    let mut text = Text::new();
    let mut out = Truncating {
        text: &mut text,
        overflowed: false,
    };
    match write(&mut out) {
        Ok(()) => {}
        Err(_) if out.overflowed => {
            warn!("Formatted text exceeds {} bytes, truncating", TEXT_CAPACITY);
        }
        Err(error) => return Err(error),
    }
    Ok(text)
}

/// Formats `args`, cut short at [`TEXT_CAPACITY`] bytes.
pub fn format(args: fmt::Arguments<'_>) -> Result<Text, fmt::Error> {
    render(|out| out.write_fmt(args))
}

/// Renders `time` using a subset of `strftime` directives, cut short at
/// [`TEXT_CAPACITY`] bytes.
///
/// Supported: `%H %I %M %S %p %d %e %m %y %Y %%`. Any other directive is
/// copied as is.
pub fn strftime(format: &str, time: &PrimitiveDateTime) -> Result<Text, fmt::Error> {
    render(|out| write_time(out, format, time))
}

fn write_time<W: Write>(out: &mut W, format: &str, time: &PrimitiveDateTime) -> fmt::Result {
    let mut chars = format.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.write_char(c)?;
            continue;
        }
        match chars.next() {
            Some('H') => write!(out, "{:02}", time.hour())?,
            Some('I') => write!(out, "{:02}", twelve_hour(time.hour()))?,
            Some('M') => write!(out, "{:02}", time.minute())?,
            Some('S') => write!(out, "{:02}", time.second())?,
            Some('p') => out.write_str(if time.hour() < 12 { "AM" } else { "PM" })?,
            Some('d') => write!(out, "{:02}", time.day())?,
            Some('e') => write!(out, "{:>2}", time.day())?,
            Some('m') => write!(out, "{:02}", u8::from(time.month()))?,
            Some('y') => write!(out, "{:02}", time.year().rem_euclid(100))?,
            Some('Y') => write!(out, "{}", time.year())?,
            Some('%') => out.write_char('%')?,
            Some(other) => {
                out.write_char('%')?;
                out.write_char(other)?;
            }
            None => out.write_char('%')?,
        }
    }
    Ok(())
}

fn twelve_hour(hour: u8) -> u8 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::{Date, Month};

    fn at(hour: u8, minute: u8, second: u8) -> PrimitiveDateTime {
        Date::from_calendar_date(2024, Month::March, 5)
            .unwrap()
            .with_hms(hour, minute, second)
            .unwrap()
    }

    #[test]
    fn clock_directives() {
        let time = at(7, 9, 3);
        assert_eq!(strftime("%H:%M", &time).unwrap().as_str(), "07:09");
        assert_eq!(strftime("%M%S", &time).unwrap().as_str(), "0903");
        assert_eq!(strftime("%I%p", &at(0, 0, 0)).unwrap().as_str(), "12AM");
        assert_eq!(strftime("%I%p", &at(13, 0, 0)).unwrap().as_str(), "01PM");
        assert_eq!(strftime("%I%p", &at(12, 0, 0)).unwrap().as_str(), "12PM");
    }

    #[test]
    fn date_directives() {
        let time = at(7, 9, 3);
        assert_eq!(strftime("%d%m", &time).unwrap().as_str(), "0503");
        assert_eq!(strftime("%e", &time).unwrap().as_str(), " 5");
        assert_eq!(strftime("%y", &time).unwrap().as_str(), "24");
        assert_eq!(strftime("%Y", &time).unwrap().as_str(), "2024");
    }

    #[test]
    fn literal_and_unknown_directives() {
        let time = at(7, 9, 3);
        assert_eq!(strftime("%%%q-", &time).unwrap().as_str(), "%%q-");
        assert_eq!(strftime("1%", &time).unwrap().as_str(), "1%");
    }

    #[test]
    fn format_arguments() {
        assert_eq!(format(format_args!("{:>4}", 42)).unwrap().as_str(), "  42");
    }

    #[test]
    fn long_text_is_truncated() {
        let long = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdefX";
        let kept = &long[..TEXT_CAPACITY];
        assert_eq!(format(format_args!("{}", long)).unwrap().as_str(), kept);
        assert_eq!(strftime(long, &at(0, 0, 0)).unwrap().as_str(), kept);
    }

    #[test]
    fn directive_cut_at_capacity() {
        let format = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcde%Y";
        let text = strftime(format, &at(0, 0, 0)).unwrap();
        assert_eq!(text.len(), TEXT_CAPACITY);
        assert!(text.ends_with("e2"));
    }

    #[test]
    fn display_errors_still_fail() {
        struct Broken;
        impl core::fmt::Display for Broken {
            fn fmt(&self, _: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                Err(core::fmt::Error)
            }
        }
        assert!(format(format_args!("{}", Broken)).is_err());
    }
}
