use std::{
    collections::BTreeMap,
    io::{Seek, Write},
};

use zip::{CompressionMethod, ZipWriter, result::ZipResult, write::FileOptions};

/// Packs named files into a deflated ZIP archive, in name order.
pub fn write_zip<W: Write + Seek>(writer: W, files: &BTreeMap<String, Vec<u8>>) -> ZipResult<W> {
    let mut zip = ZipWriter::new(writer);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
    for (name, bytes) in files {
        zip.start_file(name.as_str(), options)?;
        zip.write_all(bytes)?;
    }
    zip.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::{Cursor, Read};

    #[test]
    fn writes_every_file() {
        let files: BTreeMap<String, Vec<u8>> = [
            ("590.png".to_string(), b"png bytes".to_vec()),
            ("111.jpg".to_string(), vec![0xff, 0xd8, 0x00]),
        ]
        .into_iter()
        .collect();

        let cursor = write_zip(Cursor::new(Vec::new()), &files).unwrap();
        let mut archive = zip::ZipArchive::new(cursor).unwrap();

        let names: Vec<&str> = archive.file_names().collect();
        assert_eq!(names.len(), 2);
        let mut content = Vec::new();
        archive
            .by_name("590.png")
            .unwrap()
            .read_to_end(&mut content)
            .unwrap();
        assert_eq!(content, b"png bytes");
    }

    #[test]
    fn empty_set_is_a_valid_archive() {
        let cursor = write_zip(Cursor::new(Vec::new()), &BTreeMap::new()).unwrap();
        assert_eq!(zip::ZipArchive::new(cursor).unwrap().len(), 0);
    }
}
