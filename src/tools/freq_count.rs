use rayon::prelude::*;

/// Size of a byte alphabet.
pub const BYTE_SYMBOLS: usize = 256;

/// Returns a frequency count of the input data, indexed by byte value. Uses parallelism
/// when data set is over 64k.
pub fn freqs(data: &[u8]) -> Vec<u64> {
    if data.len() > 64_000 {
        // 16k is pretty much the sweet spot for chunk size.
        data.par_chunks(16_000)
            .fold(
                || vec![0_u64; BYTE_SYMBOLS],
                |mut freqs, chunk| {
                    chunk.iter().for_each(|&el| freqs[el as usize] += 1);
                    freqs
                },
            )
            .reduce(
                || vec![0_u64; BYTE_SYMBOLS],
                |s, f| s.iter().zip(&f).map(|(a, b)| a + b).collect::<Vec<u64>>(),
            )
    } else {
        let mut freqs = vec![0_u64; BYTE_SYMBOLS];
        data.iter().for_each(|&el| freqs[el as usize] += 1);
        freqs
    }
}

#[cfg(test)]
mod test {
    use super::freqs;

    #[test]
    fn small_test() {
        let f = freqs("Hello".as_bytes());
        assert_eq!(f.len(), 256);
        assert_eq!(f['l' as usize], 2);
        assert_eq!(f['H' as usize], 1);
        assert_eq!(f.iter().sum::<u64>(), 5);
    }

    #[test]
    fn parallel_matches_serial_test() {
        let data: Vec<u8> = (0..200_000_u32).map(|i| (i * 7 % 251) as u8).collect();
        let par = freqs(&data);
        let mut serial = vec![0_u64; 256];
        data.iter().for_each(|&b| serial[b as usize] += 1);
        assert_eq!(par, serial);
    }
}
