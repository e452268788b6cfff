use crate::Error;
use flate2::read::GzDecoder;
use std::io::Read;

pub fn decompress_gzip_to_string(compressed: &[u8]) -> Result<String, Error> {
    let mut decoder = GzDecoder::new(compressed);
    let mut decompressed = String::new();
    decoder.read_to_string(&mut decompressed)?;

    Ok(decompressed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn test_decompresses_gzip_bytes() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"Organization Name\nAcme\n").unwrap();
        let compressed = encoder.finish().unwrap();

        assert_eq!(
            decompress_gzip_to_string(&compressed).unwrap(),
            "Organization Name\nAcme\n"
        );
    }

    #[test]
    fn test_rejects_invalid_bytes() {
        assert!(matches!(
            decompress_gzip_to_string(b"not gzip"),
            Err(Error::IoError(_))
        ));
    }
}
