//! Byte-level (de)serialization of elements, compressed encodings only.

use bnpair::{CanonicalDeserialize, CanonicalSerialize, Fr};

use crate::Error;

/// Writes the compressed encoding of `x` into `buf`; returns the number of
/// bytes written. Nothing is written when the buffer is too small.
pub fn serialize<T: CanonicalSerialize>(buf: &mut [u8], x: &T) -> Result<usize, Error> {
    let size = x.compressed_size();
    if size > buf.len() {
        return Err(Error::BufferTooSmall {
            needed: size,
            capacity: buf.len(),
        });
    }
    x.serialize_compressed(&mut buf[..size])?;
    Ok(size)
}

/// Reads one compressed element from the front of `bytes`; returns the
/// element and the number of bytes consumed.
pub fn deserialize<T: CanonicalDeserialize + CanonicalSerialize>(
    bytes: &[u8],
) -> Result<(T, usize), Error> {
    let value = T::deserialize_compressed(bytes)?;
    let consumed = value.compressed_size();
    Ok((value, consumed))
}

pub fn fr_to_le_bytes(fr: &Fr) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    fr.serialize_compressed(&mut bytes[..])
        .expect("Failed to serialize scalar to bytes");
    bytes
}

pub fn fr_from_le_bytes(bytes: &[u8]) -> Result<Fr, Error> {
    Ok(Fr::deserialize_compressed(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use bnpair::{hash, pairing, G1, G2};

    #[test]
    fn scalar_round_trip() {
        let x = bnpair::rand_fr();
        let mut buf = [0u8; 32];
        assert_eq!(serialize(&mut buf, &x).unwrap(), 32);

        let (back, consumed) = deserialize::<Fr>(&buf).unwrap();
        assert_eq!(consumed, 32);
        assert_eq!(back, x);

        assert_eq!(fr_from_le_bytes(&fr_to_le_bytes(&x)).unwrap(), x);
    }

    #[test]
    fn point_round_trips() {
        let p = hash::hash_to_g1(b"serialize");
        let mut buf = [0u8; 32];
        assert_eq!(serialize(&mut buf, &p).unwrap(), 32);
        let (back, _) = deserialize::<G1>(&buf).unwrap();
        assert_eq!(back, p);

        let q = hash::hash_to_g2(b"serialize");
        let mut buf = [0u8; 64];
        assert_eq!(serialize(&mut buf, &q).unwrap(), 64);
        let (back, _) = deserialize::<G2>(&buf).unwrap();
        assert_eq!(back, q);

        let f = pairing::pairing(&p, &q);
        let mut buf = [0u8; 384];
        let written = serialize(&mut buf, &f).unwrap();
        let (back, consumed) = deserialize::<bnpair::Gt>(&buf[..written]).unwrap();
        assert_eq!(consumed, written);
        assert_eq!(back, f);
    }

    #[test]
    fn short_buffers_are_rejected() {
        let x = bnpair::rand_fr();
        let mut buf = [0u8; 31];
        assert!(matches!(
            serialize(&mut buf, &x),
            Err(Error::BufferTooSmall { .. })
        ));

        assert!(deserialize::<Fr>(&[0u8; 16]).is_err());
    }

    #[test]
    fn non_canonical_scalar_bytes_fail() {
        // 2^256 - 1 is far above the modulus
        assert!(fr_from_le_bytes(&[0xff; 32]).is_err());
    }
}
