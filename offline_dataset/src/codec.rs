use super::{DecodeError, EncodeError};
use file_io::{has_data_left, open_file_buf_read, StagedFile};
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};
use std::path::Path;
use trajectory_data::Dataset;
use zstd::{Decoder, Encoder};

const MAGIC: [u8; 8] = *b"TOYOFFDS";
const VERSION: u32 = 2;
const COMPRESSION_LEVEL: i32 = 0;

#[derive(Serialize, Deserialize)]
struct Header {
    magic: [u8; 8],
    version: u32,
}

/// Writes the header uncompressed, then the trajectories as one checksummed
/// zstd frame of bincode.
pub fn serialize_into<W: Write>(mut writer: W, dataset: &Dataset) -> Result<(), EncodeError> {
    let header = Header {
        magic: MAGIC,
        version: VERSION,
    };
    bincode::serialize_into(&mut writer, &header)?;
    let mut encoder = Encoder::new(&mut writer, COMPRESSION_LEVEL)?;
    encoder.include_checksum(true)?;
    bincode::serialize_into(&mut encoder, dataset)?;
    encoder.finish()?;
    writer.flush()?;
    Ok(())
}

/// Reads a dataset written by [`serialize_into`] and requires the reader to
/// be exhausted afterwards.
pub fn deserialize_from<R: BufRead>(mut reader: R) -> Result<Dataset, DecodeError> {
    let header: Header = bincode::deserialize_from(&mut reader)?;
    if header.magic != MAGIC {
        return Err(DecodeError::BadMagic);
    }
    if header.version != VERSION {
        return Err(DecodeError::UnsupportedVersion {
            found: header.version,
            expected: VERSION,
        });
    }
    let mut decoder = Decoder::with_buffer(&mut reader)?.single_frame();
    let dataset = bincode::deserialize_from(&mut decoder)?;
    // the frame checksum is only verified once the decoder reaches the frame end
    let rest = io::copy(&mut decoder, &mut io::sink())
        .map_err(|e| DecodeError::Malformed(e.into()))?;
    if rest != 0 {
        return Err(DecodeError::TrailingData);
    }
    drop(decoder);
    if has_data_left(&mut reader)? {
        return Err(DecodeError::TrailingData);
    }
    Ok(dataset)
}

/// Writes `dataset` to `path` all-or-nothing, creating parent directories.
pub fn save_dataset<P: AsRef<Path>>(path: P, dataset: &Dataset) -> Result<(), EncodeError> {
    let mut file = StagedFile::create(path)?;
    serialize_into(&mut file, dataset)?;
    file.commit()?;
    Ok(())
}

pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset, DecodeError> {
    let file = open_file_buf_read(path)?;
    deserialize_from(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trajectory_data::{PolicyInfo, StepInfo, TrajectoryRecorder};

    fn sample_dataset() -> Dataset {
        let trajectories = (0..4)
            .map(|i| {
                let mut recorder = TrajectoryRecorder::new();
                recorder.record(
                    vec![1, 0, 0],
                    i % 2,
                    0.0,
                    StepInfo { adv_action: 1 },
                    PolicyInfo::new(),
                );
                recorder.record(
                    vec![0, 1, 0],
                    1,
                    -15.0 + f64::from(i),
                    StepInfo { adv_action: 0 },
                    PolicyInfo::from([("p".to_string(), 0.5)]),
                );
                recorder.finish()
            })
            .collect::<Vec<_>>();
        Dataset::new(trajectories)
    }

    fn encoded(dataset: &Dataset) -> Vec<u8> {
        let mut bytes = vec![];
        serialize_into(&mut bytes, dataset).unwrap();
        bytes
    }

    #[test]
    fn decoding_restores_the_dataset() {
        let dataset = sample_dataset();
        let bytes = encoded(&dataset);
        assert_eq!(deserialize_from(bytes.as_slice()).unwrap(), dataset);
    }

    #[test]
    fn empty_dataset_is_encodable() {
        let bytes = encoded(&Dataset::default());
        assert!(deserialize_from(bytes.as_slice()).unwrap().is_empty());
    }

    #[test]
    fn foreign_bytes_are_rejected_by_magic() {
        let mut bytes = encoded(&sample_dataset());
        bytes[0] ^= 0xff;
        assert!(matches!(
            deserialize_from(bytes.as_slice()),
            Err(DecodeError::BadMagic)
        ));
    }

    #[test]
    fn future_versions_are_rejected() {
        let mut bytes = encoded(&sample_dataset());
        // the version follows the 8 magic bytes, little endian
        bytes[8] = 3;
        assert!(matches!(
            deserialize_from(bytes.as_slice()),
            Err(DecodeError::UnsupportedVersion {
                found: 3,
                expected: 2
            })
        ));
    }

    #[test]
    fn truncated_payload_is_malformed() {
        let bytes = encoded(&sample_dataset());
        let truncated = &bytes[..bytes.len() - 6];
        assert!(matches!(
            deserialize_from(truncated),
            Err(DecodeError::Malformed(_))
        ));
        assert!(matches!(
            deserialize_from(&bytes[..5]),
            Err(DecodeError::Malformed(_))
        ));
    }

    #[test]
    fn appended_bytes_are_trailing_data() {
        let mut bytes = encoded(&sample_dataset());
        bytes.extend_from_slice(b"junk");
        assert!(matches!(
            deserialize_from(bytes.as_slice()),
            Err(DecodeError::TrailingData)
        ));
    }

    #[test]
    fn corrupted_checksum_is_malformed() {
        let mut bytes = encoded(&sample_dataset());
        let last = bytes.len() - 1;
        bytes[last] ^= 0x01;
        assert!(matches!(
            deserialize_from(bytes.as_slice()),
            Err(DecodeError::Malformed(_))
        ));
    }

    #[test]
    fn flipped_payload_bytes_never_decode_to_other_data() {
        let dataset = sample_dataset();
        let bytes = encoded(&dataset);
        // magic plus the little endian version
        let header_len = 12;
        let mut rejected = 0;
        for i in header_len..bytes.len() {
            for mask in [0x01, 0x80, 0xff] {
                let mut corrupted = bytes.clone();
                corrupted[i] ^= mask;
                match deserialize_from(corrupted.as_slice()) {
                    Ok(decoded) => assert_eq!(decoded, dataset, "byte {i} mask {mask:#x}"),
                    Err(_) => rejected += 1,
                }
            }
        }
        assert!(rejected > 0);
    }
}
