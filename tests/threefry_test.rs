//! Known-answer checks for the Threefry block function.
//!
//! Reference outputs are the published Random123 test vectors for 20 rounds.

use spmd_random::{BlockFunction, Threefry2x32, Threefry2x64, Threefry4x32, Threefry4x64};

#[test]
fn test_threefry4x64_zero_vector() {
    let block = Threefry4x64::mix(&[0; 4], &[0; 4]);
    assert_eq!(
        block,
        [
            0x0921_8ebd_e6c8_5537,
            0x5594_1f52_66d8_6105,
            0x4bd2_5e16_2824_34dc,
            0xee29_ec84_6bd2_e40b,
        ]
    );
}

#[test]
fn test_threefry4x64_ones_vector() {
    let block = Threefry4x64::mix(&[u64::MAX; 4], &[u64::MAX; 4]);
    assert_eq!(
        block,
        [
            0x29c2_4097_942b_ba1b,
            0x0371_bbfb_0f6f_4e11,
            0x3c23_1ffa_33f8_3a1c,
            0xcd29_113f_de32_d168,
        ]
    );
}

#[test]
fn test_threefry4x64_pi_vector() {
    let counter = [
        0x243f_6a88_85a3_08d3,
        0x1319_8a2e_0370_7344,
        0xa409_3822_299f_31d0,
        0x082e_fa98_ec4e_6c89,
    ];
    let key = [
        0x4528_21e6_38d0_1377,
        0xbe54_66cf_34e9_0c6c,
        0xc0ac_29b7_c97c_50dd,
        0x3f84_d5b5_b547_0917,
    ];
    let block = Threefry4x64::mix(&key, &counter);
    assert_eq!(
        block,
        [
            0xa7e8_fde5_9165_1bd9,
            0xbaaf_d0c3_0138_319b,
            0x84a5_c1a7_29e6_85b9,
            0x901d_406c_cebc_1ba4,
        ]
    );
}

#[test]
fn test_threefry2x64_zero_vector() {
    let block = Threefry2x64::mix(&[0; 2], &[0; 2]);
    assert_eq!(block, [0xc2b6_e3a8_c2c6_9865, 0x6f81_ed42_f350_084d]);
}

#[test]
fn test_threefry4x32_zero_vector() {
    let block = Threefry4x32::mix(&[0; 4], &[0; 4]);
    assert_eq!(block, [0x9c6c_a96a, 0xe17e_ae66, 0xfc10_ecd4, 0x5256_a7d8]);
}

#[test]
fn test_threefry2x32_zero_vector() {
    let block = Threefry2x32::mix(&[0; 2], &[0; 2]);
    assert_eq!(block, [0x6b20_0159, 0x99ba_4efe]);
}

#[test]
fn test_mix_is_referentially_transparent() {
    let key = [0xdead_beef, 42, 7, 1 << 63];
    let counter = [3, 1, 4, 1];
    let first = Threefry4x64::mix(&key, &counter);
    for _ in 0..100 {
        assert_eq!(Threefry4x64::mix(&key, &counter), first);
    }
}

#[test]
fn test_distinct_counters_give_distinct_blocks() {
    let key = [1, 2, 3, 4];
    let blocks: std::collections::HashSet<[u64; 4]> =
        (0..10_000u64).map(|i| Threefry4x64::mix(&key, &[i, 0, 0, 0])).collect();
    assert_eq!(blocks.len(), 10_000, "Block function must be injective in the counter");
}
