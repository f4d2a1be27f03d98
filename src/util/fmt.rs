use std::fmt::{self, Debug, Formatter};

/// Debug-formats as the contained string, without quotes.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Writes every item of `iter` with `write_item`, separated by `sep`. Nothing is written after the
/// last item.
pub fn write_joined<I, F>(f: &mut Formatter<'_>, iter: I, sep: &str, mut write_item: F) -> fmt::Result
where
    I: IntoIterator,
    F: FnMut(&mut Formatter<'_>, I::Item) -> fmt::Result,
{
    let mut iter = iter.into_iter();
    if let Some(first) = iter.next() {
        write_item(f, first)?;
        for item in iter {
            f.write_str(sep)?;
            write_item(f, item)?;
        }
    }
    Ok(())
}
