use bwt_index::index::{inverse, FmIndex, IndexOpt};
use bwt_index::IndexError;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

fn naive_find(text: &[u8], pattern: &[u8]) -> Vec<u32> {
    if pattern.is_empty() {
        // 含 `$` 所在的位置
        return (0..=text.len() as u32).collect();
    }
    if pattern.len() > text.len() {
        return Vec::new();
    }
    (0..=text.len() - pattern.len())
        .filter(|&i| &text[i..i + pattern.len()] == pattern)
        .map(|i| i as u32)
        .collect()
}

fn make_dna(len: usize, seed: u32) -> Vec<u8> {
    let bases = [b'A', b'C', b'G', b'T'];
    let mut x = seed;
    (0..len)
        .map(|_| {
            x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            bases[(x >> 16) as usize % 4]
        })
        .collect()
}

#[fixture]
fn banana() -> FmIndex {
    FmIndex::build(b"banana").unwrap()
}

#[rstest]
fn banana_transform(banana: FmIndex) {
    assert_eq!(banana.bwt(), b"annb$aa".to_vec());
    assert_eq!(banana.suffix_array().to_vec(), vec![6, 5, 3, 1, 0, 4, 2]);
}

#[rstest]
#[case(&b"banana"[..], &b"ana"[..], vec![1, 3])]
#[case(b"mississippi", b"ssi", vec![2, 5])]
#[case(b"mississippi", b"issi", vec![1, 4])]
#[case(b"aaaaaa", b"aaa", vec![0, 1, 2, 3])]
#[case(b"bananabanana", b"ana", vec![1, 3, 7, 9])]
#[case(b"banana", b"ban", vec![0])]
#[case(b"banana", b"nana", vec![2])]
#[case(b"banana", b"na", vec![2, 4])]
#[case(b"a", b"a", vec![0])]
#[case(b"ACGTA", b"TA", vec![3])]
#[case(b"banana", b"xyz", vec![])]
#[case(b"banana", b"bananas", vec![])]
fn search_scenarios(#[case] text: &[u8], #[case] pattern: &[u8], #[case] expected: Vec<u32>) {
    let fm = FmIndex::build(text).unwrap();
    assert_eq!(fm.search(pattern).unwrap(), expected);
}

#[rstest]
#[case(&b"ACGTACGT"[..])]
#[case(b"banana")]
#[case(b"a")]
#[case(b"aaaaaa")]
#[case(b"hello, world! 123")]
fn round_trip(#[case] text: &[u8]) {
    let fm = FmIndex::build(text).unwrap();
    let mut expected = text.to_vec();
    expected.push(b'$');
    assert_eq!(fm.decode().unwrap(), expected);
    assert_eq!(inverse::decode(&fm.bwt()).unwrap(), expected);
    assert_eq!(inverse::decode_by_sorting(&fm.bwt()).unwrap(), expected);
}

#[rstest]
fn empty_pattern_returns_every_offset(banana: FmIndex) {
    assert_eq!(banana.search(b"").unwrap(), vec![0, 1, 2, 3, 4, 5, 6]);
    assert_eq!(banana.count(b"").unwrap(), banana.text_len());
}

#[rstest]
fn sentinel_in_pattern_is_rejected(banana: FmIndex) {
    assert_eq!(
        banana.search(b"$").unwrap_err(),
        IndexError::PatternContainsSentinel { position: 0 }
    );
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(FmIndex::build(b"").unwrap_err(), IndexError::EmptyInput);
}

#[test]
fn caller_supplied_sentinel_is_rejected() {
    assert_eq!(
        FmIndex::build(b"banana$").unwrap_err(),
        IndexError::InvalidSentinel { position: 6 }
    );
}

#[test]
fn random_dna_matches_naive_scan() {
    for (len, seed) in [(1usize, 1u32), (13, 2), (64, 3), (257, 4), (1000, 5)] {
        let text = make_dna(len, seed);
        let fm = FmIndex::build_with_opt(&text, IndexOpt { occ_block: 16 }).unwrap();

        let mut sa = fm.suffix_array().to_vec();
        sa.sort_unstable();
        assert_eq!(sa, (0..=len as u32).collect::<Vec<_>>());

        for plen in (1..=6).filter(|&p| p <= len) {
            // 最后一个起点单独补上，保证覆盖紧贴 `$` 的匹配
            let starts = (0..=len - plen).step_by(7).chain(std::iter::once(len - plen));
            for start in starts {
                let pat = &text[start..start + plen];
                assert_eq!(fm.search(pat).unwrap(), naive_find(&text, pat), "len={} pat={:?}", len, pat);
            }
        }
        let absent = make_dna(8, seed + 100);
        assert_eq!(fm.search(&absent).unwrap(), naive_find(&text, &absent));
        assert_eq!(fm.search(b"").unwrap(), naive_find(&text, b""));
    }
}

#[test]
fn concurrent_queries_share_one_index() {
    let text = make_dna(2_000, 77);
    let fm = FmIndex::build(&text).unwrap();
    let patterns: Vec<Vec<u8>> = (0..64).map(|i| text[i * 20..i * 20 + 9].to_vec()).collect();

    std::thread::scope(|s| {
        for chunk in patterns.chunks(16) {
            let (fm, text) = (&fm, &text);
            s.spawn(move || {
                for p in chunk {
                    assert_eq!(fm.search(p).unwrap(), naive_find(text, p));
                }
            });
        }
    });

    for (p, res) in patterns.iter().zip(fm.search_batch(&patterns)) {
        assert_eq!(res.unwrap(), naive_find(&text, p));
    }
}
