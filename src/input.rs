use std::{
    fs,
    io::{self, Write},
    path::Path,
};

/// Writes the target accounts to `path`, one per line.
///
/// The service treats the input file as opaque, this helper only covers
/// the common plain-text layout.
///
/// # Errors
///
/// Will return `Err` if the file cannot be created or written.
pub fn write_targets<S: AsRef<str>>(targets: &[S], path: impl AsRef<Path>) -> io::Result<()> {
    let mut file = fs::File::create(path.as_ref())?;
    for target in targets {
        writeln!(file, "{}", target.as_ref())?;
    }
    Ok(())
}
