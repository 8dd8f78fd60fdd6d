//! The compression module runs the three commands of huffcode against files.
//!
//! - Build: count the byte frequencies of the input, build the huffman tree, save the code table.
//! - Encode: load a code table, then write the code of every input byte as '0'/'1' text.
//! - Decode: load a code table, then walk the tree over the '0'/'1' text to restore the bytes.
//!
//! Tables and token files are plain text. Each command reads its inputs whole, or through
//! buffered readers, and produces its output in memory. The output file is only created
//! once the command has succeeded, so a failed run leaves nothing behind.
//!

pub mod compress;
pub mod decompress;

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};

use log::{debug, warn};

/// Open an output file. An existing file is only replaced when `force` is set.
fn create_output(path: &str, force: bool) -> io::Result<BufWriter<File>> {
    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    match options.open(path) {
        Ok(file) => Ok(BufWriter::new(file)),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            warn!("Use --force to overwrite {}.", path);
            Err(e)
        }
        Err(e) => Err(e),
    }
}

/// Write a finished result to a new output file.
pub(crate) fn write_output(path: &str, force: bool, data: &[u8]) -> io::Result<()> {
    let mut f_out = create_output(path, force)?;
    f_out.write_all(data)?;
    f_out.flush()?;
    debug!("Wrote {} bytes to {}.", data.len(), path);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::write_output;
    use std::fs;
    use std::io;

    #[test]
    fn existing_output_kept_test() {
        let dir = std::env::temp_dir().join(format!("huffcode-out-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("kept.new");
        let name = path.to_string_lossy().into_owned();
        fs::write(&path, "old").unwrap();

        let err = write_output(&name, false, b"new").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read(&path).unwrap(), b"old");

        write_output(&name, true, b"new").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"new");
        fs::remove_dir_all(&dir).unwrap();
    }
}
