use std::io::{self, BufRead};

/// Feed every `\n`-terminated line of `reader` to `f`.
///
/// Invalid UTF-8 is replaced, never fatal. The line handed to `f` still
/// carries its line ending; the parser trims it. Returns the number of
/// lines read.
pub fn for_each_line<R, F>(mut reader: R, mut f: F) -> io::Result<u64>
where
    R: BufRead,
    F: FnMut(&str),
{
    let mut buf = Vec::with_capacity(1024);
    let mut count = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        count += 1;
        f(&String::from_utf8_lossy(&buf));
    }

    Ok(count)
}
