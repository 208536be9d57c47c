use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub fn open_file_buf_read<P: AsRef<Path>>(path: P) -> io::Result<BufReader<File>> {
    let file = File::open(path)?;
    Ok(BufReader::new(file))
}

// directly copied from [https://doc.rust-lang.org/std/io/trait.BufRead.html#method.has_data_left]
// unfortunately, that method isn't stable yet
pub fn has_data_left<R: BufRead>(mut reader: R) -> io::Result<bool> {
    reader.fill_buf().map(|b| !b.is_empty())
}

/// A file that only appears at its destination once [`StagedFile::commit`]
/// succeeds.
///
/// The bytes are written to a temporary file next to the destination and
/// renamed into place on commit. Dropping an uncommitted `StagedFile` (for
/// instance because serialization failed halfway) deletes the temporary file,
/// so readers never observe a partially written artifact.
pub struct StagedFile {
    writer: BufWriter<NamedTempFile>,
    destination: PathBuf,
}

impl StagedFile {
    /// Creates the destination's parent directories if needed and opens a
    /// temporary file inside them.
    pub fn create<P: AsRef<Path>>(destination: P) -> io::Result<Self> {
        let destination = destination.as_ref().to_path_buf();
        let parent = match destination.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent)?;
        let temp = NamedTempFile::new_in(&parent)?;
        Ok(Self {
            writer: BufWriter::new(temp),
            destination,
        })
    }
    pub fn commit(self) -> io::Result<()> {
        let temp = self.writer.into_inner().map_err(|e| e.into_error())?;
        temp.as_file().sync_all()?;
        temp.persist(&self.destination).map_err(|e| e.error)?;
        Ok(())
    }
}

impl Write for StagedFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }
    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
