use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

pub mod config;
pub mod elves;
pub mod error;
pub mod logger;
pub mod parser;

pub use elves::Elves;
pub use error::{Error, Result};

use parser::Line;

/// Groups the input into elves. Stops at the first bad line; nothing collected so far survives.
pub fn read_elves<R>(reader: R) -> Result<Elves>
where
    R: BufRead,
{
    reader
        .split(b'\n')
        .enumerate()
        .try_fold(Elves::default(), |elves, (i, item)| {
            let bytes = item?;
            let line = i + 1;

            // Bytes that aren't UTF-8 can't be a number either.
            let s = match std::str::from_utf8(&bytes) {
                Ok(s) => s,
                Err(e) => {
                    tracing::debug!(line, error = %e, "rejected input line");
                    return Err(Error::Parse {
                        line,
                        text: String::from_utf8_lossy(&bytes).trim().to_owned(),
                    });
                }
            };

            match parser::parse_line(s) {
                Ok(Line::Calories(n)) => elves.eat(n, line),
                Ok(Line::Blank) => Ok(elves.next()),
                Err(e) => {
                    tracing::debug!(line, error = ?e, "rejected input line");
                    Err(Error::Parse {
                        line,
                        text: s.trim().to_owned(),
                    })
                }
            }
        })
}

/// Total carried by the `top` best-supplied elves (`top == 1` is the single best elf).
pub fn count_calories<R>(reader: R, top: usize) -> Result<u64>
where
    R: BufRead,
{
    let elves = read_elves(reader)?;
    tracing::debug!(elves = elves.totals().len(), "finished reading");

    if top == 1 {
        Ok(elves.max())
    } else {
        elves.top(top)
    }
}

/// Like [`count_calories`], reading from the file at `path`, or stdin when `path` is `-`.
pub fn count_calories_in(path: &Path, top: usize) -> Result<u64> {
    if path == Path::new("-") {
        tracing::info!("reading from stdin");
        return count_calories(std::io::stdin().lock(), top);
    }

    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_owned(),
        source,
    })?;
    tracing::info!(path = %path.display(), "reading input");

    count_calories(BufReader::new(file), top)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    static EXAMPLE: &str = "1000\n2000\n3000\n\n4000\n\n5000\n6000\n\n7000\n8000\n9000\n\n10000\n";

    #[rstest]
    #[case("10\n20\n\n5\n", 30)]
    #[case("1\n1\n1\n\n0\n\n100\n", 100)]
    #[case("", 0)]
    #[case("\n\n\n", 0)]
    #[case("1\n2\n3", 6)]
    #[case("  7 \n\t\n 8\n", 8)]
    #[case(EXAMPLE, 24000)]
    fn test_max(#[case] input: &str, #[case] expected: u64) {
        assert_eq!(count_calories(input.as_bytes(), 1).unwrap(), expected);
    }

    #[test]
    fn test_top_three() {
        assert_eq!(count_calories(EXAMPLE.as_bytes(), 3).unwrap(), 45000);
    }

    #[test]
    fn test_trailing_blank_line_adds_empty_elf() {
        let elves = read_elves("5\n\n".as_bytes()).unwrap();
        assert_eq!(elves.totals(), &[5, 0]);

        let elves = read_elves("5".as_bytes()).unwrap();
        assert_eq!(elves.totals(), &[5]);
    }

    #[test]
    fn test_bad_line_aborts() {
        let r = count_calories("10\n20\n\nabc\n99999\n".as_bytes(), 1);
        match r {
            Err(Error::Parse { line, text }) => {
                assert_eq!(line, 4);
                assert_eq!(text, "abc");
            }
            r => panic!("expected parse error, got {:?}", r),
        }
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let r = count_calories(&b"1\n\xff\xfe\n"[..], 1);
        match r {
            Err(e @ Error::Parse { line: 2, .. }) => assert_eq!(e.exit_code(), 2),
            r => panic!("expected parse error, got {:?}", r),
        }
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(count_calories("10\r\n20\r\n\r\n5\r\n".as_bytes(), 1).unwrap(), 30);
    }
}
